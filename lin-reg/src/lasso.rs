use nalgebra::{DMatrix, DMatrixView, DVector, DVectorView};
use optimizers::{Clarabel, ConvexSolver};

use crate::{validation, LinReg, Result};

/// The LASSO objective written as a QP over the split parameters z = [theta+; theta-]
/// minimize 0.5 * z'Pz + q'z subject to Gz <= h
#[derive(Debug, Clone)]
pub(crate) struct QuadraticProgram {
    pub(crate) p: DMatrix<f64>,
    pub(crate) q: DVector<f64>,
    pub(crate) g: DMatrix<f64>,
    pub(crate) h: DVector<f64>,
}

/// Split theta = theta+ - theta- with both parts non-negative, so the non smooth
/// L1 norm turns into the linear term lambda * sum(theta+ + theta-).
/// Nothing stops both parts from being positive at the same index,
/// but that never happens at the optimum.
pub(crate) fn lasso_program(
    design: &DMatrix<f64>,
    targets: &DVector<f64>,
    regularization_coeff: f64,
) -> QuadraticProgram {
    let n = design.ncols();
    let a = design.transpose() * design;
    let b = design.transpose() * targets;

    let mut p = DMatrix::zeros(2 * n, 2 * n);
    p.view_mut((0, 0), (n, n)).copy_from(&a);
    p.view_mut((0, n), (n, n)).copy_from(&(-&a));
    p.view_mut((n, 0), (n, n)).copy_from(&(-&a));
    p.view_mut((n, n), (n, n)).copy_from(&a);

    let stacked_b = DVector::from_iterator(2 * n, b.iter().copied().chain(b.iter().map(|v| -v)));
    let q = DVector::from_element(2 * n, regularization_coeff) - stacked_b;

    QuadraticProgram {
        p,
        q,
        g: -DMatrix::identity(2 * n, 2 * n),
        h: DVector::zeros(2 * n),
    }
}

/// L1 regularized least squares (LASSO), solved with the default `Clarabel` solver
pub fn l1_regularized_ls(
    design: &DMatrix<f64>,
    targets: &DVector<f64>,
    regularization_coeff: f64,
) -> Result<DVector<f64>> {
    l1_regularized_ls_with(&Clarabel::default(), design, targets, regularization_coeff)
}

/// L1 regularized least squares (LASSO)
/// minimize ||y - X * theta||^2 + lambda * ||theta||_1
/// as a quadratic program delegated to `solver`
pub fn l1_regularized_ls_with<S: ConvexSolver>(
    solver: &S,
    design: &DMatrix<f64>,
    targets: &DVector<f64>,
    regularization_coeff: f64,
) -> Result<DVector<f64>> {
    validation::check_samples(design, targets)?;
    validation::check_regularization(regularization_coeff)?;
    debug!(
        "l1_regularized_ls: design ({}, {}), regularization_coeff: {}",
        design.nrows(),
        design.ncols(),
        regularization_coeff
    );

    let n = design.ncols();
    let qp = lasso_program(design, targets, regularization_coeff);
    trace!("P: {}, q: {}", qp.p, qp.q);

    let z = solver.solve_qp(&qp.p, &qp.q, &qp.g, &qp.h)?;
    let theta = z.rows(0, n) - z.rows(n, n);

    Ok(theta)
}

/// L1 regularization aka LASSO, drives small parameters to exactly zero
#[derive(Debug, Clone)]
pub struct Lasso {
    /// Weight of the L1 penalty
    pub regularization_coeff: f64,
    /// Solves the underlying quadratic program
    pub solver: Clarabel,
}

impl Lasso {
    /// Create a new LASSO estimator with default solver settings
    pub fn new(regularization_coeff: f64) -> Self {
        Self {
            regularization_coeff,
            solver: Clarabel::default(),
        }
    }
}

impl LinReg for Lasso {
    fn fit<'a>(
        &self,
        design: &'a DMatrixView<'a, f64>,
        targets: &'a DVectorView<'a, f64>,
    ) -> Result<DVector<f64>> {
        l1_regularized_ls_with(
            &self.solver,
            &design.clone_owned(),
            &targets.clone_owned(),
            self.regularization_coeff,
        )
    }
}
