//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized

use crate::domain::{FitMode, FitResult, QuadraticCurve, Residual};
use crate::models::predict;

/// Format the run summary: sample stats, coefficients, and fit diagnostics.
pub fn format_fit_summary(result: &FitResult, xs: &[f64], mode: FitMode) -> String {
    let mut out = String::new();

    out.push_str("=== quadfit - quadratic least-squares fit ===\n");
    out.push_str(&format!("Mode: {mode:?}\n"));
    match x_range(xs) {
        Some((lo, hi)) => out.push_str(&format!(
            "Samples: n={} | x=[{lo:.3}, {hi:.3}]\n",
            result.quality.n
        )),
        None => out.push_str(&format!("Samples: n={}\n", result.quality.n)),
    }

    out.push_str("\nCurve: y = a*x^2 + b*x + c\n");
    out.push_str(&format!("- a: {}\n", fmt_coef(result.curve.a)));
    out.push_str(&format!("- b: {}\n", fmt_coef(result.curve.b)));
    out.push_str(&format!("- c: {}\n", fmt_coef(result.curve.c)));

    if !result.curve.is_finite() {
        out.push_str("\nWarning: non-finite coefficients; the normal equations are singular\n");
        out.push_str("(need at least 3 distinct x-values).\n");
        return out;
    }

    out.push_str("\nDiagnostics:\n");
    out.push_str(&format!(
        "SSE={:.6} RMSE={:.6} R2={}\n",
        result.quality.sse,
        result.quality.rmse,
        result.quality.r2.map(|r| format!("{r:.6}")).unwrap_or_else(|| "n/a".to_string()),
    ));

    out
}

/// Format a residual table.
pub fn format_residuals(rows: &[Residual]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:>12} {:>14} {:>14} {:>14}\n", "x", "y_obs", "y_fit", "residual"));
    out.push_str(&format!("{:->12} {:->14} {:->14} {:->14}\n", "", "", "", ""));
    for r in rows {
        out.push_str(&format!(
            "{:>12.4} {:>14.4} {:>14.4} {:>14.4}\n",
            r.x, r.y_obs, r.y_fit, r.residual
        ));
    }
    out
}

/// Format `x -> y` pairs for an evaluated curve.
pub fn format_evaluations(curve: &QuadraticCurve, xs: &[f64]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:>12} {:>14}\n", "x", "y"));
    for &x in xs {
        out.push_str(&format!("{x:>12.4} {:>14.4}\n", predict(curve, x)));
    }
    out
}

fn fmt_coef(v: f64) -> String {
    if v.is_finite() {
        format!("{v:.6}")
    } else {
        format!("{v}")
    }
}

fn x_range(xs: &[f64]) -> Option<(f64, f64)> {
    let lo = xs.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (lo.is_finite() && hi.is_finite()).then_some((lo, hi))
}
