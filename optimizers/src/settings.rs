use crate::{OptimizerError, Result};

/// Tuning knobs of the interior point solver
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Print the solvers iteration log to stdout
    pub verbose: bool,
    /// Maximum number of interior point iterations
    pub max_iter: u32,
    /// Time limit in seconds
    pub time_limit: f64,
    /// Absolute duality gap tolerance
    pub tol_gap_abs: f64,
    /// Relative duality gap tolerance
    pub tol_gap_rel: f64,
    /// Feasibility tolerance
    pub tol_feas: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            verbose: false,
            max_iter: 200,
            time_limit: f64::INFINITY,
            tol_gap_abs: 1e-8,
            tol_gap_rel: 1e-8,
            tol_feas: 1e-8,
        }
    }
}

impl Settings {
    /// Reject settings the interior point method can't run with
    pub fn validate(&self) -> Result<()> {
        if self.max_iter == 0 {
            return Err(OptimizerError::InvalidSettings(
                "max_iter must be at least 1".to_string(),
            ));
        }
        if self.time_limit.is_nan() || self.time_limit <= 0.0 {
            return Err(OptimizerError::InvalidSettings(format!(
                "time_limit must be > 0, got {}",
                self.time_limit
            )));
        }
        for (name, tol) in [
            ("tol_gap_abs", self.tol_gap_abs),
            ("tol_gap_rel", self.tol_gap_rel),
            ("tol_feas", self.tol_feas),
        ] {
            if !tol.is_finite() || tol <= 0.0 {
                return Err(OptimizerError::InvalidSettings(format!(
                    "{} must be finite and > 0, got {}",
                    name, tol
                )));
            }
        }

        Ok(())
    }
}
