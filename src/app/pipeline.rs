//! Shared "fit pipeline" logic used by the `fit` and `sample` commands.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! samples -> fit -> quality -> residuals
//!
//! The command handlers can then focus on presentation and exports.

use tracing::info;

use crate::domain::{FitConfig, FitResult, Residual};
use crate::error::AppError;
use crate::fit::fit_with_quality;
use crate::report::compute_residuals;

/// All computed outputs of a single fit run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub result: FitResult,
    /// Empty when the fitted curve is non-finite.
    pub residuals: Vec<Residual>,
}

/// Execute the fitting pipeline over the given samples.
pub fn run_fit(x: Vec<f64>, y: Vec<f64>, config: &FitConfig) -> Result<RunOutput, AppError> {
    if x.is_empty() {
        return Err(AppError::new(3, "No samples to fit."));
    }

    let result = fit_with_quality(&x, &y, config.mode)?;

    let residuals = if result.curve.is_finite() {
        compute_residuals(&result.curve, &x, &y)?
    } else {
        Vec::new()
    };

    info!(
        n = result.quality.n,
        a = result.curve.a,
        b = result.curve.b,
        c = result.curve.c,
        sse = result.quality.sse,
        "fit complete"
    );

    Ok(RunOutput {
        x,
        y,
        result,
        residuals,
    })
}
