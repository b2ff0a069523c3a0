use nalgebra::{DMatrix, DMatrixView, DVector, DVectorView};

use crate::{least_squares::solve_normal_equations, validation, LinReg, Result};

/// Regularized least squares through the normal equations
/// theta = (X'X + lambda * I)^-1 X'y
///
/// With `regularization_coeff > 0` the inverse exists even for a rank deficient design,
/// with `regularization_coeff == 0` this is exactly `least_squares`.
pub fn regularized_ls(
    design: &DMatrix<f64>,
    targets: &DVector<f64>,
    regularization_coeff: f64,
) -> Result<DVector<f64>> {
    validation::check_samples(design, targets)?;
    validation::check_regularization(regularization_coeff)?;
    debug!(
        "regularized_ls: design ({}, {}), regularization_coeff: {}",
        design.nrows(),
        design.ncols(),
        regularization_coeff
    );

    let reg_m = DMatrix::from_diagonal_element(design.ncols(), design.ncols(), regularization_coeff);
    let p0 = design.transpose() * design;

    solve_normal_equations(p0 + reg_m, design, targets)
}

/// Tikhonov regularization aka ridge regression
/// It is particularly useful to mitigate the problem of multicollinearity in
/// linear regression
#[derive(Debug, Clone)]
pub struct TikhonovRegularization {
    /// Ridge parameter
    pub regularization_coeff: f64,
}

impl LinReg for TikhonovRegularization {
    fn fit<'a>(
        &self,
        design: &'a DMatrixView<'a, f64>,
        targets: &'a DVectorView<'a, f64>,
    ) -> Result<DVector<f64>> {
        regularized_ls(&design.clone_owned(), &targets.clone_owned(), self.regularization_coeff)
    }
}

#[cfg(test)]
mod tests {
    use round::round;

    use super::*;
    use crate::{Error, Mismatch};

    #[test]
    fn tikhonov_regularization() {
        if let Err(_) = pretty_env_logger::try_init() {}

        // Note the first column being just ones
        let design: DMatrix<f64> = DMatrix::from_vec(
            4,
            3,
            vec![1.0, 1.0, 1.0, 1.0, 0.0, 1.0, 2.0, 3.0, 0.0, 0.0, 1.0, 2.0],
        );
        let targets: DVector<f64> = DVector::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
        info!("design: {}, targets: {}", design, targets);

        let regressor = TikhonovRegularization {
            regularization_coeff: 0.0,
        };
        let mut theta = regressor
            .fit(&design.columns(0, design.ncols()), &targets.rows(0, targets.len()))
            .unwrap();
        info!("theta: {}", theta);

        theta.iter_mut().for_each(|v| *v = round(*v, 1));

        assert_eq!(theta, DVector::from_vec(vec![1.0, 1.0, 0.0]))
    }

    #[test]
    fn tikhonov_regularization_shifted() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let design: DMatrix<f64> = DMatrix::from_vec(
            4,
            3,
            vec![100.0, 100.0, 100.0, 100.0, 0.0, 100.0, 200.0, 300.0, 0.0, 0.0, 100.0, 200.0],
        );
        let targets: DVector<f64> = DVector::from_vec(vec![100.0, 200.0, 300.0, 400.0]);
        info!("design: {}, targets: {}", design, targets);

        let mut theta = regularized_ls(&design, &targets, 0.0).unwrap();
        info!("theta: {}", theta);

        theta.iter_mut().for_each(|v| *v = round(*v, 1));

        assert_eq!(theta, DVector::from_vec(vec![1.0, 1.0, 0.0]))
    }

    #[test]
    fn shrinks_towards_zero() {
        let design = DMatrix::from_element(4, 1, 1.0);
        let targets = DVector::from_vec(vec![2.0, 2.0, 2.0, 2.0]);

        // (4 + lambda)^-1 * 8
        let theta = regularized_ls(&design, &targets, 4.0).unwrap();
        assert_eq!(round(theta[0], 8), 1.0);

        let theta = regularized_ls(&design, &targets, 1e6).unwrap();
        assert!(theta[0].abs() < 1e-4);
    }

    #[test]
    fn invertible_for_rank_deficient_design() {
        if let Err(_) = pretty_env_logger::try_init() {}

        // second column is twice the first one
        let design = DMatrix::from_row_slice(3, 2, &[1.0, 2.0, 2.0, 4.0, 3.0, 6.0]);
        let targets = DVector::from_vec(vec![1.0, 2.0, 3.0]);

        assert_eq!(regularized_ls(&design, &targets, 0.0), Err(Error::SingularMatrix));

        let theta = regularized_ls(&design, &targets, 0.1).unwrap();
        info!("theta: {}", theta);
        assert!(theta.iter().all(|v| v.is_finite()));
        // the ridge solution lies in the row space of the design, so theta_2 = 2 * theta_1
        assert!((theta[1] - 2.0 * theta[0]).abs() < 1e-10);
    }

    #[test]
    fn negative_coeff() {
        let design = DMatrix::<f64>::identity(3, 3);
        let targets = DVector::zeros(3);

        assert_eq!(
            regularized_ls(&design, &targets, -0.5),
            Err(Error::DimensionMismatch(Mismatch::InvalidRegularization(-0.5)))
        );
    }
}
