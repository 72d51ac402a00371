//! Goodness-of-fit statistics for a curve against its samples.

use crate::domain::{FitQuality, QuadraticCurve};
use crate::models::predict;

/// Sum of squared residuals `Σ (y_i - y(x_i))^2`.
pub fn sse(curve: &QuadraticCurve, xs: &[f64], ys: &[f64]) -> f64 {
    xs.iter()
        .zip(ys)
        .map(|(&x, &y)| {
            let r = y - predict(curve, x);
            r * r
        })
        .sum()
}

/// Coefficient of determination `1 - SSE/SST`.
///
/// Returns `None` for an empty sample or when all y-values are equal (SST = 0).
pub fn r_squared(curve: &QuadraticCurve, xs: &[f64], ys: &[f64]) -> Option<f64> {
    let n = xs.len().min(ys.len());
    if n == 0 {
        return None;
    }
    let mean = ys[..n].iter().sum::<f64>() / n as f64;
    let sst: f64 = ys[..n].iter().map(|&y| (y - mean) * (y - mean)).sum();
    if sst == 0.0 {
        return None;
    }
    Some(1.0 - sse(curve, xs, ys) / sst)
}

pub fn fit_quality(curve: &QuadraticCurve, xs: &[f64], ys: &[f64]) -> FitQuality {
    let n = xs.len().min(ys.len());
    let sse = sse(curve, xs, ys);
    let rmse = if n > 0 { (sse / n as f64).sqrt() } else { 0.0 };
    FitQuality {
        sse,
        rmse,
        r2: r_squared(curve, xs, ys),
        n,
    }
}
