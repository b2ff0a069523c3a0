#[macro_use]
extern crate log;

use std::{error::Error, fs, time::Instant};

use dialoguer::{theme::ColorfulTheme, Select};
use lin_reg::{
    predict, regularization_path, residuals, Lasso, LinReg, OrdinaryLeastSquares,
    RobustRegression, TikhonovRegularization,
};
use nalgebra::{DMatrix, DVector};
use nanorand::{Rng, WyRand};
use reg_plot::{plot, PlotGather};

const NUM_SAMPLES: usize = 100;
const SEED: u64 = 0;
const INTERCEPT: f64 = 1.0;
const SLOPE: f64 = 0.5;
const NOISE_SCALE: f64 = 0.3;
/// Fraction of samples that get shifted far away from the line
const OUTLIER_FRAC: f64 = 0.1;
const OUTLIER_SHIFT: f64 = 15.0;
const REGULARIZATION_COEFF: f64 = 1.0;
const PATH_COEFFS: [f64; 6] = [0.01, 1.0, 10.0, 100.0, 1000.0, 10000.0];

pub(crate) fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();

    let (design, targets) = generate_samples();
    info!("design: ({}, {}), targets: {}", design.nrows(), design.ncols(), targets.len());

    let estimators = vec!["Least squares", "Ridge", "LASSO", "Robust regression", "All"];
    let e = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select estimator")
        .items(&estimators)
        .default(4)
        .interact()?;

    let mut p = PlotGather::default();
    for i in 0..design.nrows() {
        p.push_sample(design[(i, 1)], targets[i]);
    }

    if e == 0 || e == 4 {
        run_estimator("LS", OrdinaryLeastSquares, &design, &targets, &mut p)?;
    }
    if e == 1 || e == 4 {
        let regressor = TikhonovRegularization {
            regularization_coeff: REGULARIZATION_COEFF,
        };
        run_estimator("Ridge", regressor, &design, &targets, &mut p)?;
    }
    if e == 2 || e == 4 {
        run_estimator("LASSO", Lasso::new(REGULARIZATION_COEFF), &design, &targets, &mut p)?;
    }
    if e == 3 || e == 4 {
        run_estimator("RR", RobustRegression::default(), &design, &targets, &mut p)?;
    }
    if e == 4 {
        log_path(&design, &targets)?;
    }

    fs::create_dir_all("img")?;
    plot(p.samples(), p.fits(), "img/outliers.png", (1080, 1080))?;

    Ok(())
}

/// Noisy samples around the line `INTERCEPT + SLOPE * x`, with some outliers
fn generate_samples() -> (DMatrix<f64>, DVector<f64>) {
    let mut rng = WyRand::new_seed(SEED);

    // Note the first column being just ones
    let design = DMatrix::from_fn(NUM_SAMPLES, 2, |i, j| {
        if j == 0 {
            1.0
        } else {
            10.0 * i as f64 / NUM_SAMPLES as f64
        }
    });
    let targets = DVector::from_fn(NUM_SAMPLES, |i, _| {
        let noise = (rng.generate::<f64>() * 2.0 - 1.0) * NOISE_SCALE;
        let outlier = if rng.generate::<f64>() < OUTLIER_FRAC {
            OUTLIER_SHIFT
        } else {
            0.0
        };
        INTERCEPT + SLOPE * design[(i, 1)] + noise + outlier
    });

    (design, targets)
}

fn run_estimator<R: LinReg>(
    name: &str,
    regressor: R,
    design: &DMatrix<f64>,
    targets: &DVector<f64>,
    p: &mut PlotGather,
) -> Result<(), Box<dyn Error>> {
    let t0 = Instant::now();
    let theta = regressor.fit(&design.columns(0, design.ncols()), &targets.rows(0, targets.len()))?;
    let truth = DVector::from_vec(vec![INTERCEPT, SLOPE]);
    info!(
        "{}: theta: [{:.4}, {:.4}], error to truth: {:.4}, took {}us",
        name,
        theta[0],
        theta[1],
        (&theta - truth).norm(),
        t0.elapsed().as_micros()
    );

    let abs_residuals = residuals(design, targets, &theta)?.abs();
    info!("{}: mean absolute residual: {:.4}", name, abs_residuals.mean());

    let prediction = predict(design, &theta)?;
    for i in 0..design.nrows() {
        p.push_fit(name, design[(i, 1)], prediction[i]);
    }

    Ok(())
}

/// Show how the regularization shrinks the parameters
fn log_path(design: &DMatrix<f64>, targets: &DVector<f64>) -> Result<(), Box<dyn Error>> {
    let ridge_path = regularization_path(design, targets, &PATH_COEFFS, |regularization_coeff| {
        TikhonovRegularization {
            regularization_coeff,
        }
    })?;
    let lasso_path = regularization_path(design, targets, &PATH_COEFFS, Lasso::new)?;

    for (ridge, lasso) in ridge_path.iter().zip(lasso_path.iter()) {
        info!(
            "lambda: {:>8}, ridge: [{:.4}, {:.4}], lasso: [{:.4}, {:.4}]",
            ridge.regularization_coeff,
            ridge.coefficients[0],
            ridge.coefficients[1],
            lasso.coefficients[0],
            lasso.coefficients[1]
        );
    }

    Ok(())
}
