use thiserror::Error;

/// The ways a convex program can fail to produce a minimizer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimizerError {
    /// The constraints admit no feasible point
    #[error("problem is infeasible")]
    Infeasible,

    /// The objective decreases without bound over the feasible set
    #[error("problem is unbounded")]
    Unbounded,

    /// Ran into the iteration or time limit before converging
    #[error("iteration or time limit reached before convergence")]
    MaxIterations,

    /// The solver broke down numerically
    #[error("numerical error: {0}")]
    NumericalError(String),

    /// The solver settings were rejected by the backend
    #[error("invalid solver settings: {0}")]
    InvalidSettings(String),

    /// Problem data with incompatible shapes
    #[error("dimension mismatch in {what}: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Which part of the problem data is off
        what: &'static str,
        /// The expected shape
        expected: String,
        /// The actual shape
        got: String,
    },
}

/// Result type of the optimizers
pub type Result<T> = std::result::Result<T, OptimizerError>;
