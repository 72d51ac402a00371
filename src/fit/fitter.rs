//! Quadratic least-squares fit via the normal equations.
//!
//! Given samples `(x_i, y_i)` we:
//! - accumulate power sums `S_0..S_4` and `T_0..T_2`
//! - build the 3x3 normal-equations matrix and right-hand side
//! - invert the matrix by cofactor expansion
//! - multiply the inverse by the right-hand side to get `(a, b, c)`
//!
//! Two entry points share that pipeline:
//! - [`fit_quadratic`] never fails; a singular system (fewer than three distinct
//!   x-values) produces non-finite coefficients.
//! - [`try_fit_quadratic`] validates the samples first and reports singular
//!   systems as errors.

use tracing::{debug, warn};

use crate::domain::{FitMode, FitResult, QuadraticCurve};
use crate::error::NumericError;
use crate::fit::power_sums::PowerSums;
use crate::fit::quality::fit_quality;
use crate::math::{determinant_3x3, inverse_3x3, mul_vec_3x3, try_inverse_3x3};

/// Parameters in a quadratic curve, and so the minimum usable sample count.
pub const MIN_SAMPLES: usize = 3;

/// Fit `y = a*x^2 + b*x + c` to the samples.
///
/// No validation: degenerate input yields NaN/inf coefficients. Fewer than
/// three distinct x-values always gives NaN, even when rounding leaves the
/// determinant slightly off zero.
///
/// # Panics
/// Panics if `xs` and `ys` differ in length.
pub fn fit_quadratic(xs: &[f64], ys: &[f64]) -> QuadraticCurve {
    let sums = PowerSums::accumulate(xs, ys);
    let matrix = sums.normal_matrix();
    debug!(n = sums.n, determinant = determinant_3x3(&matrix), "normal equations");

    let distinct = count_distinct(xs);
    if distinct < MIN_SAMPLES {
        debug!(distinct, "rank-deficient samples");
        return QuadraticCurve::new(f64::NAN, f64::NAN, f64::NAN);
    }

    let inverse = inverse_3x3(&matrix);
    QuadraticCurve::from(mul_vec_3x3(&inverse, &sums.rhs()))
}

/// Fit with input validation.
///
/// Errors:
/// - `LengthMismatch` when `xs` and `ys` differ in length
/// - `InsufficientSamples` for fewer than three samples
/// - `NonFiniteData` when any sample is NaN or infinite
/// - `DegenerateInput` for fewer than three distinct x-values
/// - `SingularMatrix` when the normal equations still cannot be inverted
pub fn try_fit_quadratic(xs: &[f64], ys: &[f64]) -> Result<QuadraticCurve, NumericError> {
    validate_samples(xs, ys)?;

    let sums = PowerSums::accumulate(xs, ys);
    let matrix = sums.normal_matrix();
    let inverse = try_inverse_3x3(&matrix)?;
    let curve = QuadraticCurve::from(mul_vec_3x3(&inverse, &sums.rhs()));
    if !curve.is_finite() {
        return Err(NumericError::SingularMatrix {
            determinant: determinant_3x3(&matrix),
        });
    }
    Ok(curve)
}

/// Fit with the selected mode and score the curve against the samples.
pub fn fit_with_quality(xs: &[f64], ys: &[f64], mode: FitMode) -> Result<FitResult, NumericError> {
    let curve = match mode {
        FitMode::Checked => try_fit_quadratic(xs, ys)?,
        FitMode::Baseline => {
            if xs.len() != ys.len() {
                return Err(NumericError::LengthMismatch {
                    x: xs.len(),
                    y: ys.len(),
                });
            }
            let curve = fit_quadratic(xs, ys);
            if !curve.is_finite() {
                warn!(?curve, "fit produced non-finite coefficients (singular normal equations)");
            }
            curve
        }
    };

    Ok(FitResult {
        curve,
        quality: fit_quality(&curve, xs, ys),
    })
}

fn validate_samples(xs: &[f64], ys: &[f64]) -> Result<(), NumericError> {
    if xs.len() != ys.len() {
        return Err(NumericError::LengthMismatch {
            x: xs.len(),
            y: ys.len(),
        });
    }
    if xs.len() < MIN_SAMPLES {
        return Err(NumericError::InsufficientSamples {
            n: xs.len(),
            min: MIN_SAMPLES,
        });
    }
    if xs.iter().chain(ys).any(|v| !v.is_finite()) {
        return Err(NumericError::NonFiniteData);
    }

    let distinct = count_distinct(xs);
    if distinct < MIN_SAMPLES {
        return Err(NumericError::DegenerateInput { distinct });
    }
    Ok(())
}

fn count_distinct(xs: &[f64]) -> usize {
    let mut sorted = xs.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted.dedup();
    sorted.len()
}
