use nalgebra::{DMatrix, DMatrixView, DVector, DVectorView};
use optimizers::{Clarabel, ConvexSolver};

use crate::{validation, LinReg, Result};

/// Least absolute deviations written as an LP over z = [theta; t]
/// minimize c'z subject to Gz <= h
#[derive(Debug, Clone)]
pub(crate) struct LinearProgram {
    pub(crate) c: DVector<f64>,
    pub(crate) g: DMatrix<f64>,
    pub(crate) h: DVector<f64>,
}

/// Every sample gets a slack t_i >= |y_i - x_i * theta|, which the objective
/// pushes down onto the absolute residual. The two inequality blocks are
///   -X * theta - t <= -y
///    X * theta - t <=  y
pub(crate) fn robust_program(design: &DMatrix<f64>, targets: &DVector<f64>) -> LinearProgram {
    let (m, n) = design.shape();

    let c = DVector::from_iterator(n + m, (0..n + m).map(|i| if i < n { 0.0 } else { 1.0 }));

    let slack = -DMatrix::<f64>::identity(m, m);
    let mut g = DMatrix::zeros(2 * m, n + m);
    g.view_mut((0, 0), (m, n)).copy_from(&(-design));
    g.view_mut((0, n), (m, m)).copy_from(&slack);
    g.view_mut((m, 0), (m, n)).copy_from(design);
    g.view_mut((m, n), (m, m)).copy_from(&slack);

    let h = DVector::from_iterator(2 * m, targets.iter().map(|v| -v).chain(targets.iter().copied()));

    LinearProgram { c, g, h }
}

/// Robust regression minimizing the absolute residuals, solved with the default `Clarabel` solver
pub fn robust_regression(design: &DMatrix<f64>, targets: &DVector<f64>) -> Result<DVector<f64>> {
    robust_regression_with(&Clarabel::default(), design, targets)
}

/// Robust regression
/// minimize sum_i |y_i - x_i * theta|
/// as a linear program delegated to `solver`.
/// Outliers only pull on the fit linearly instead of quadratically.
pub fn robust_regression_with<S: ConvexSolver>(
    solver: &S,
    design: &DMatrix<f64>,
    targets: &DVector<f64>,
) -> Result<DVector<f64>> {
    validation::check_samples(design, targets)?;
    debug!("robust_regression: design ({}, {})", design.nrows(), design.ncols());

    let lp = robust_program(design, targets);
    let z = solver.solve_lp(&lp.c, &lp.g, &lp.h)?;

    // drop the slack
    Ok(z.rows(0, design.ncols()).into_owned())
}

/// Least absolute deviations regression, insensitive to a few strong outliers
#[derive(Debug, Clone, Default)]
pub struct RobustRegression {
    /// Solves the underlying linear program
    pub solver: Clarabel,
}

impl LinReg for RobustRegression {
    fn fit<'a>(
        &self,
        design: &'a DMatrixView<'a, f64>,
        targets: &'a DVectorView<'a, f64>,
    ) -> Result<DVector<f64>> {
        robust_regression_with(&self.solver, &design.clone_owned(), &targets.clone_owned())
    }
}
