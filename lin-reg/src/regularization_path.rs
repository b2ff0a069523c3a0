//! Fit one estimator per regularization coefficient, in parallel

use std::{cmp::max, sync::Arc};

use crossbeam::channel::unbounded;
use nalgebra::{DMatrix, DVector};
use threadpool::ThreadPool;

use crate::{validation, Error, LinReg, Result};

/// The parameters estimated for one regularization coefficient
#[derive(Debug, Clone, PartialEq)]
pub struct PathPoint {
    /// The coefficient the estimator was constructed with
    pub regularization_coeff: f64,
    /// The estimated parameters
    pub coefficients: DVector<f64>,
}

/// Estimate the parameters for every coefficient in `regularization_coeffs`.
/// Each fit runs on its own worker, results come back in input order.
/// No coefficient is picked, that is up to the caller.
///
/// # Arguments:
/// make_estimator: constructs the estimator for a given regularization coefficient
///
/// # Returns:
/// One `PathPoint` per coefficient, or the error of the first failed fit
pub fn regularization_path<R, F>(
    design: &DMatrix<f64>,
    targets: &DVector<f64>,
    regularization_coeffs: &[f64],
    make_estimator: F,
) -> Result<Vec<PathPoint>>
where
    R: LinReg + Send + 'static,
    F: Fn(f64) -> R,
{
    validation::check_samples(design, targets)?;
    for coeff in regularization_coeffs {
        validation::check_regularization(*coeff)?;
    }

    let pool = ThreadPool::new(max(num_cpus::get().saturating_sub(2), 1));
    debug!(
        "regularization_path: {} coefficients on {} workers",
        regularization_coeffs.len(),
        pool.max_count()
    );

    let design = Arc::new(design.clone());
    let targets = Arc::new(targets.clone());

    let (ch_fit_s, ch_fit_r) = unbounded();
    for (i, coeff) in regularization_coeffs.iter().enumerate() {
        let ch_fit_s = ch_fit_s.clone();
        let design = design.clone();
        let targets = targets.clone();
        let estimator = make_estimator(*coeff);
        pool.execute(move || {
            let res =
                estimator.fit(&design.columns(0, design.ncols()), &targets.rows(0, targets.len()));
            if ch_fit_s.send((i, res)).is_err() {
                warn!("regularization_path: receiver is gone, dropping fit {}", i);
            }
        });
    }
    drop(ch_fit_s);

    let mut fits: Vec<Option<Result<DVector<f64>>>> = vec![None; regularization_coeffs.len()];
    while let Ok((i, res)) = ch_fit_r.recv() {
        fits[i] = Some(res);
    }

    regularization_coeffs
        .iter()
        .zip(fits)
        .map(|(coeff, fit)| match fit {
            Some(res) => res.map(|coefficients| PathPoint {
                regularization_coeff: *coeff,
                coefficients,
            }),
            None => Err(Error::FitAborted(*coeff)),
        })
        .collect()
}
