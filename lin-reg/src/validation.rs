use nalgebra::{DMatrix, DVector};

use crate::{Mismatch, Result};

/// Make sure the design is non-empty, lines up with the targets and holds only finite values
pub(crate) fn check_samples(design: &DMatrix<f64>, targets: &DVector<f64>) -> Result<()> {
    if design.nrows() == 0 || design.ncols() == 0 {
        return Err(Mismatch::EmptyDesign {
            rows: design.nrows(),
            cols: design.ncols(),
        }
        .into());
    }
    if design.nrows() != targets.len() {
        return Err(Mismatch::Samples {
            design_rows: design.nrows(),
            target_len: targets.len(),
        }
        .into());
    }
    if let Some(idx) = design.iter().position(|v| !v.is_finite()) {
        return Err(Mismatch::NonFinite {
            what: "design",
            row: idx % design.nrows(),
            col: idx / design.nrows(),
        }
        .into());
    }
    if let Some(row) = targets.iter().position(|v| !v.is_finite()) {
        return Err(Mismatch::NonFinite {
            what: "targets",
            row,
            col: 0,
        }
        .into());
    }

    Ok(())
}

/// Make sure the design has one column per parameter
pub(crate) fn check_features(design: &DMatrix<f64>, params: &DVector<f64>) -> Result<()> {
    if design.ncols() != params.len() {
        return Err(Mismatch::Features {
            design_cols: design.ncols(),
            param_len: params.len(),
        }
        .into());
    }

    Ok(())
}

/// Regularization coefficients have to be finite and non-negative
pub(crate) fn check_regularization(regularization_coeff: f64) -> Result<()> {
    if !regularization_coeff.is_finite() || regularization_coeff < 0.0 {
        return Err(Mismatch::InvalidRegularization(regularization_coeff).into());
    }

    Ok(())
}
