//! Interior point backend built on the Clarabel conic solver.
//!
//! Both program types are handed to Clarabel in its standard form
//! minimize 0.5 * z'Pz + q'z subject to Az + s = b, s in K,
//! where the inequality Gz <= h becomes A = G, b = h with the slack s
//! living in the nonnegative orthant.

use ::clarabel::{
    algebra::CscMatrix as ClarabelCsc,
    solver::{
        DefaultSettings, DefaultSettingsBuilder, DefaultSolver, IPSolver, SolverStatus,
        SupportedConeT,
    },
};
use nalgebra::{DMatrix, DVector};
use nalgebra_sparse::CscMatrix;

use crate::{check_problem_dims, ConvexSolver, OptimizerError, Result, Settings};

/// Solves QPs and LPs with Clarabel
#[derive(Debug, Clone, Default)]
pub struct Clarabel {
    /// Solver settings used for every solve
    pub settings: Settings,
}

impl Clarabel {
    /// Create a new solver with the given settings
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    fn clarabel_settings(&self) -> Result<DefaultSettings<f64>> {
        self.settings.validate()?;

        DefaultSettingsBuilder::default()
            .verbose(self.settings.verbose)
            .max_iter(self.settings.max_iter)
            .time_limit(self.settings.time_limit)
            .tol_gap_abs(self.settings.tol_gap_abs)
            .tol_gap_rel(self.settings.tol_gap_rel)
            .tol_feas(self.settings.tol_feas)
            .build()
            .map_err(|e| OptimizerError::InvalidSettings(e.to_string()))
    }

    fn solve(
        &self,
        p: CscMatrix<f64>,
        q: &DVector<f64>,
        g: &DMatrix<f64>,
        h: &DVector<f64>,
    ) -> Result<DVector<f64>> {
        let settings = self.clarabel_settings()?;
        let p = to_clarabel_csc(&p);
        let g = CscMatrix::from(g);
        debug!(
            "solving with {} variables, {} inequalities, {} nonzeros in G",
            q.len(),
            h.len(),
            g.nnz()
        );
        let a = to_clarabel_csc(&g);
        let cones = [SupportedConeT::NonnegativeConeT(h.len())];

        let mut solver =
            DefaultSolver::new(&p, q.as_slice(), &a, h.as_slice(), &cones, settings);
        solver.solve();

        let status = solver.solution.status;
        info!(
            "clarabel finished with status {:?} after {} iterations in {:.4}s",
            status, solver.info.iterations, solver.solution.solve_time
        );
        status_to_result(status)?;

        Ok(DVector::from_column_slice(&solver.solution.x))
    }
}

impl ConvexSolver for Clarabel {
    fn solve_qp(
        &self,
        p: &DMatrix<f64>,
        q: &DVector<f64>,
        g: &DMatrix<f64>,
        h: &DVector<f64>,
    ) -> Result<DVector<f64>> {
        check_problem_dims(Some(p), q, g, h)?;

        // Clarabel only reads the upper triangle of P
        self.solve(CscMatrix::from(&p.upper_triangle()), q, g, h)
    }

    fn solve_lp(
        &self,
        c: &DVector<f64>,
        g: &DMatrix<f64>,
        h: &DVector<f64>,
    ) -> Result<DVector<f64>> {
        check_problem_dims(None, c, g, h)?;

        self.solve(CscMatrix::zeros(c.len(), c.len()), c, g, h)
    }
}

/// Map the final solver status onto success or an `OptimizerError`
fn status_to_result(status: SolverStatus) -> Result<()> {
    match status {
        SolverStatus::Solved | SolverStatus::AlmostSolved => Ok(()),
        SolverStatus::PrimalInfeasible | SolverStatus::AlmostPrimalInfeasible => {
            warn!("clarabel reports a primal infeasible problem");
            Err(OptimizerError::Infeasible)
        }
        SolverStatus::DualInfeasible | SolverStatus::AlmostDualInfeasible => {
            warn!("clarabel reports a dual infeasible (unbounded) problem");
            Err(OptimizerError::Unbounded)
        }
        SolverStatus::MaxIterations | SolverStatus::MaxTime => {
            warn!("clarabel hit its iteration or time limit");
            Err(OptimizerError::MaxIterations)
        }
        other => {
            warn!("clarabel failed with status {:?}", other);
            Err(OptimizerError::NumericalError(format!("{:?}", other)))
        }
    }
}

/// Convert nalgebra CSC to Clarabel CSC.
fn to_clarabel_csc(m: &CscMatrix<f64>) -> ClarabelCsc<f64> {
    ClarabelCsc::new(
        m.nrows(),
        m.ncols(),
        m.col_offsets().to_vec(),
        m.row_indices().to_vec(),
        m.values().to_vec(),
    )
}

#[cfg(test)]
mod tests {
    use round::round;

    use super::*;

    fn rounded(x: &DVector<f64>, digits: i32) -> Vec<f64> {
        x.iter().map(|v| round(*v, digits)).collect()
    }

    #[test]
    fn solves_lp() {
        if let Err(_) = pretty_env_logger::try_init() {}

        // minimize x + y subject to x >= 1, y >= 2
        let c = DVector::from_vec(vec![1.0, 1.0]);
        let g = -DMatrix::<f64>::identity(2, 2);
        let h = DVector::from_vec(vec![-1.0, -2.0]);

        let x = Clarabel::default().solve_lp(&c, &g, &h).unwrap();
        info!("x: {}", x);

        assert_eq!(rounded(&x, 4), vec![1.0, 2.0]);
    }

    #[test]
    fn solves_qp() {
        if let Err(_) = pretty_env_logger::try_init() {}

        // minimize 0.5 * (x^2 + y^2) - 3x - y subject to x <= 2, y >= 0
        // unconstrained optimum (3, 1) is cut off at x = 2
        let p = DMatrix::<f64>::identity(2, 2);
        let q = DVector::from_vec(vec![-3.0, -1.0]);
        let g = DMatrix::from_row_slice(2, 2, &[1.0, 0.0, 0.0, -1.0]);
        let h = DVector::from_vec(vec![2.0, 0.0]);

        let x = Clarabel::default().solve_qp(&p, &q, &g, &h).unwrap();
        info!("x: {}", x);

        assert_eq!(rounded(&x, 4), vec![2.0, 1.0]);
    }

    #[test]
    fn qp_with_full_symmetric_p() {
        if let Err(_) = pretty_env_logger::try_init() {}

        // P = [[2, 1], [1, 2]], q = [-3, -3] has its minimizer at (1, 1)
        let p = DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 2.0]);
        let q = DVector::from_vec(vec![-3.0, -3.0]);
        let g = -DMatrix::<f64>::identity(2, 2);
        let h = DVector::zeros(2);

        let x = Clarabel::default().solve_qp(&p, &q, &g, &h).unwrap();

        assert_eq!(rounded(&x, 4), vec![1.0, 1.0]);
    }

    #[test]
    fn infeasible_lp() {
        if let Err(_) = pretty_env_logger::try_init() {}

        // x <= -1 and x >= 1
        let c = DVector::from_vec(vec![1.0]);
        let g = DMatrix::from_row_slice(2, 1, &[1.0, -1.0]);
        let h = DVector::from_vec(vec![-1.0, -1.0]);

        let err = Clarabel::default().solve_lp(&c, &g, &h).unwrap_err();

        assert_eq!(err, OptimizerError::Infeasible);
    }

    #[test]
    fn unbounded_lp() {
        if let Err(_) = pretty_env_logger::try_init() {}

        // minimize -x subject to -x <= 0
        let c = DVector::from_vec(vec![-1.0]);
        let g = DMatrix::from_row_slice(1, 1, &[-1.0]);
        let h = DVector::zeros(1);

        let err = Clarabel::default().solve_lp(&c, &g, &h).unwrap_err();

        assert_eq!(err, OptimizerError::Unbounded);
    }

    #[test]
    fn mismatched_problem_is_rejected() {
        let c = DVector::from_vec(vec![1.0, 1.0]);
        let g = DMatrix::<f64>::identity(3, 3);
        let h = DVector::zeros(3);

        let err = Clarabel::default().solve_lp(&c, &g, &h).unwrap_err();

        assert!(matches!(err, OptimizerError::DimensionMismatch { .. }));
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let solver = Clarabel::new(Settings {
            tol_feas: -1.0,
            max_iter: 0,
            ..Default::default()
        });
        let c = DVector::from_vec(vec![1.0]);
        let g = -DMatrix::<f64>::identity(1, 1);
        let h = DVector::zeros(1);

        let err = solver.solve_lp(&c, &g, &h).unwrap_err();

        assert!(matches!(err, OptimizerError::InvalidSettings(_)));
    }

    #[test]
    fn status_mapping() {
        assert!(status_to_result(SolverStatus::Solved).is_ok());
        assert!(status_to_result(SolverStatus::AlmostSolved).is_ok());
        assert_eq!(status_to_result(SolverStatus::MaxTime), Err(OptimizerError::MaxIterations));
        assert!(matches!(
            status_to_result(SolverStatus::NumericalError),
            Err(OptimizerError::NumericalError(_))
        ));
    }
}
