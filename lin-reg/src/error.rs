use optimizers::OptimizerError;
use thiserror::Error;

/// Errors that can occur while estimating the parameters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The inputs don't fit together, detected before any computation
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(Mismatch),

    /// The normal equations can't be solved by inversion
    #[error("matrix is singular, the design is rank deficient")]
    SingularMatrix,

    /// The convex solver didn't produce a minimizer
    #[error("optimization failed: {0}")]
    OptimizationFailed(#[from] OptimizerError),

    /// A worker of the regularization path died before reporting its fit
    #[error("fit for regularization coefficient {0} was aborted")]
    FitAborted(f64),
}

/// Which input check failed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Mismatch {
    /// Row count of the design differs from the number of targets
    #[error("design has {design_rows} rows but targets have {target_len} elements")]
    Samples {
        /// Number of rows (samples) in the design
        design_rows: usize,
        /// Number of targets
        target_len: usize,
    },

    /// Column count of the design differs from the number of parameters
    #[error("design has {design_cols} columns but there are {param_len} parameters")]
    Features {
        /// Number of columns (features) in the design
        design_cols: usize,
        /// Number of parameters
        param_len: usize,
    },

    /// There is nothing to fit
    #[error("design of shape ({rows}, {cols}) is empty")]
    EmptyDesign {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// NaN or infinity somewhere in the data
    #[error("{what} holds a non-finite value at ({row}, {col})")]
    NonFinite {
        /// Either "design" or "targets"
        what: &'static str,
        /// Row of the first offending value
        row: usize,
        /// Column of the first offending value, 0 for the targets
        col: usize,
    },

    /// Regularization coefficients have to be finite and non-negative
    #[error("regularization coefficient must be finite and >= 0, got {0}")]
    InvalidRegularization(f64),
}

impl From<Mismatch> for Error {
    fn from(m: Mismatch) -> Self {
        Error::DimensionMismatch(m)
    }
}

/// Result type of the estimators
pub type Result<T> = std::result::Result<T, Error>;
