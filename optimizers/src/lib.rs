//! Convex optimizers used to solve the quadratic and linear programs
//! that the regression formulations reduce to.

#![deny(unused_imports)]
#![warn(missing_docs)]

#[macro_use]
extern crate log;

use nalgebra::{DMatrix, DVector};

mod clarabel;
mod error;
mod settings;

pub use self::clarabel::Clarabel;
pub use error::{OptimizerError, Result};
pub use settings::Settings;

/// Generic way of solving inequality constrained convex programs
pub trait ConvexSolver {
    /// Solve the quadratic program
    /// minimize 0.5 * z'Pz + q'z subject to Gz <= h
    ///
    /// # Arguments:
    /// p: Symmetric positive semidefinite matrix of shape (k, k)
    /// q: Linear cost of length k
    /// g: Inequality matrix of shape (j, k)
    /// h: Inequality bound of length j
    ///
    /// # Returns:
    /// The minimizer z of length k
    fn solve_qp(
        &self,
        p: &DMatrix<f64>,
        q: &DVector<f64>,
        g: &DMatrix<f64>,
        h: &DVector<f64>,
    ) -> Result<DVector<f64>>;

    /// Solve the linear program
    /// minimize c'z subject to Gz <= h
    ///
    /// # Arguments:
    /// c: Linear cost of length k
    /// g: Inequality matrix of shape (j, k)
    /// h: Inequality bound of length j
    ///
    /// # Returns:
    /// The minimizer z of length k
    fn solve_lp(&self, c: &DVector<f64>, g: &DMatrix<f64>, h: &DVector<f64>)
        -> Result<DVector<f64>>;
}

/// Make sure the problem data of a program have compatible shapes
pub(crate) fn check_problem_dims(
    p: Option<&DMatrix<f64>>,
    q: &DVector<f64>,
    g: &DMatrix<f64>,
    h: &DVector<f64>,
) -> Result<()> {
    let k = q.len();
    if let Some(p) = p {
        if p.nrows() != k || p.ncols() != k {
            return Err(OptimizerError::DimensionMismatch {
                what: "P",
                expected: format!("({}, {})", k, k),
                got: format!("({}, {})", p.nrows(), p.ncols()),
            });
        }
    }
    if g.ncols() != k {
        return Err(OptimizerError::DimensionMismatch {
            what: "G columns",
            expected: k.to_string(),
            got: g.ncols().to_string(),
        });
    }
    if h.len() != g.nrows() {
        return Err(OptimizerError::DimensionMismatch {
            what: "h",
            expected: g.nrows().to_string(),
            got: h.len().to_string(),
        });
    }

    Ok(())
}
