use nalgebra::{DMatrix, DMatrixView, DVector, DVectorView};

use crate::{validation, Error, LinReg, Result};

/// Ordinary least squares through the normal equations
/// theta = (X'X)^-1 X'y
///
/// Fails with `Error::SingularMatrix` if the design is rank deficient,
/// e.g. when there are fewer independent samples than features.
pub fn least_squares(design: &DMatrix<f64>, targets: &DVector<f64>) -> Result<DVector<f64>> {
    validation::check_samples(design, targets)?;
    debug!("least_squares: design ({}, {})", design.nrows(), design.ncols());

    let gram = design.transpose() * design;
    solve_normal_equations(gram, design, targets)
}

/// Solve `gram * theta = X'y` by inverting the gram matrix
pub(crate) fn solve_normal_equations(
    gram: DMatrix<f64>,
    design: &DMatrix<f64>,
    targets: &DVector<f64>,
) -> Result<DVector<f64>> {
    let p1 = gram.try_inverse().ok_or(Error::SingularMatrix)?;
    let p2 = design.transpose() * targets;

    Ok(p1 * p2)
}

/// Ordinary least squares without any regularization
#[derive(Debug, Clone, Default)]
pub struct OrdinaryLeastSquares;

impl LinReg for OrdinaryLeastSquares {
    fn fit<'a>(
        &self,
        design: &'a DMatrixView<'a, f64>,
        targets: &'a DVectorView<'a, f64>,
    ) -> Result<DVector<f64>> {
        least_squares(&design.clone_owned(), &targets.clone_owned())
    }
}
