//! Reporting utilities: residuals, outlier ranking, and formatted terminal output.

pub mod format;

pub use format::*;

use crate::domain::{QuadraticCurve, Residual};
use crate::error::AppError;
use crate::models::predict;

/// Compute fitted values and residuals (`y_obs - y_fit`) for each sample.
pub fn compute_residuals(curve: &QuadraticCurve, xs: &[f64], ys: &[f64]) -> Result<Vec<Residual>, AppError> {
    if xs.len() != ys.len() {
        return Err(AppError::new(
            2,
            format!("Sample length mismatch: {} x-values, {} y-values.", xs.len(), ys.len()),
        ));
    }

    let mut out = Vec::with_capacity(xs.len());
    for (&x, &y_obs) in xs.iter().zip(ys) {
        let y_fit = predict(curve, x);
        if !y_fit.is_finite() {
            return Err(AppError::new(4, "Non-finite curve prediction during residual computation."));
        }
        out.push(Residual {
            x,
            y_obs,
            y_fit,
            residual: y_obs - y_fit,
        });
    }
    Ok(out)
}

/// The `top_n` samples with the largest absolute residual, largest first.
pub fn rank_outliers(residuals: &[Residual], top_n: usize) -> Vec<Residual> {
    let mut sorted = residuals.to_vec();
    sorted.sort_by(|a, b| b.residual.abs().total_cmp(&a.residual.abs()));
    sorted.truncate(top_n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compute_residuals_basic() {
        let curve = QuadraticCurve::new(0.0, 1.0, 0.0);
        let residuals = compute_residuals(&curve, &[1.0, 2.0], &[1.0, 3.0]).unwrap();
        assert_eq!(residuals.len(), 2);
        assert_eq!(residuals[0].residual, 0.0);
        assert_eq!(residuals[1].y_fit, 2.0);
        assert_eq!(residuals[1].residual, 1.0);
    }

    #[test]
    fn compute_residuals_rejects_non_finite_curve() {
        let curve = QuadraticCurve::new(f64::NAN, 0.0, 0.0);
        let err = compute_residuals(&curve, &[1.0], &[1.0]).unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert!(compute_residuals(&QuadraticCurve::default(), &[1.0], &[]).is_err());
    }

    #[test]
    fn rank_outliers_by_magnitude() {
        let curve = QuadraticCurve::default();
        let residuals = compute_residuals(&curve, &[0.0, 1.0, 2.0], &[1.0, -5.0, 3.0]).unwrap();
        let top = rank_outliers(&residuals, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].x, 1.0);
        assert_eq!(top[1].x, 2.0);
        assert_eq!(rank_outliers(&residuals, 10).len(), 3);
    }
}
