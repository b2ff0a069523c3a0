//! Estimate the parameters of a linear model `targets ~ design * theta`
//! with ordinary, ridge, L1 regularized (LASSO) and robust (L1 loss) least squares.

#![deny(unused_imports)]
#![warn(missing_docs)]

#[macro_use]
extern crate log;

use nalgebra::{DMatrix, DMatrixView, DVector, DVectorView};

mod error;
mod lasso;
mod least_squares;
mod regularization_path;
mod robust_regression;
mod tikhonov_regularization;
mod validation;

pub use error::{Error, Mismatch, Result};
pub use lasso::{l1_regularized_ls, l1_regularized_ls_with, Lasso};
pub use least_squares::{least_squares, OrdinaryLeastSquares};
pub use optimizers::{Clarabel, ConvexSolver, OptimizerError, Settings};
pub use regularization_path::{regularization_path, PathPoint};
pub use robust_regression::{robust_regression, robust_regression_with, RobustRegression};
pub use tikhonov_regularization::{regularized_ls, TikhonovRegularization};

/// Generic way of performing linear regression and estimating the parameters
pub trait LinReg: Clone {
    /// Fit the parameters, mapping inputs to targets
    ///
    /// # Parameters
    /// design: Input data with one row per sample and one column per feature
    /// targets: Target data with one element per sample
    fn fit<'a>(
        &self,
        design: &'a DMatrixView<'a, f64>,
        targets: &'a DVectorView<'a, f64>,
    ) -> Result<DVector<f64>>;
}

/// Predicted targets `design * params`
pub fn predict(design: &DMatrix<f64>, params: &DVector<f64>) -> Result<DVector<f64>> {
    validation::check_features(design, params)?;

    Ok(design * params)
}

/// What's left of the targets after the prediction, `targets - design * params`
pub fn residuals(
    design: &DMatrix<f64>,
    targets: &DVector<f64>,
    params: &DVector<f64>,
) -> Result<DVector<f64>> {
    validation::check_samples(design, targets)?;
    let prediction = predict(design, params)?;

    Ok(targets - prediction)
}
