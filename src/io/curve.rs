//! Read/write curve JSON files.
//!
//! Curve JSON is the "portable" representation of a fitted curve:
//! - coefficients `(a, b, c)`
//! - fit quality, when the curve came from samples
//! - a precomputed grid for quick plotting
//!
//! The schema is defined by `domain::CurveFile`.

use std::fs::File;
use std::path::Path;

use chrono::Utc;

use crate::domain::{CurveFile, CurveGrid, FitQuality, QuadraticCurve};
use crate::error::AppError;
use crate::models::evaluate;

/// Range used when no sample range is known.
const DEFAULT_RANGE: (f64, f64) = (-100.0, 100.0);

/// Build the file contents for a curve, with a grid over `[x_min, x_max]`.
pub fn build_curve_file(
    curve: &QuadraticCurve,
    quality: Option<&FitQuality>,
    x_min: f64,
    x_max: f64,
    grid_points: usize,
) -> CurveFile {
    let x = build_grid(x_min, x_max, grid_points);
    let y = evaluate(curve, &x);
    CurveFile {
        tool: "quadfit".to_string(),
        created: Utc::now(),
        curve: *curve,
        quality: quality.cloned(),
        grid: CurveGrid { x, y },
    }
}

/// Write a curve JSON file.
///
/// JSON has no NaN/inf, so a non-finite curve or grid is refused (exit 4)
/// instead of being written as `null`s that cannot be read back.
pub fn write_curve_json(path: &Path, curve_file: &CurveFile) -> Result<(), AppError> {
    if !curve_file.curve.is_finite() || curve_file.grid.y.iter().any(|y| !y.is_finite()) {
        return Err(AppError::new(
            4,
            "Refusing to export curve JSON: the fitted curve has non-finite values.",
        ));
    }

    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create curve JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, curve_file)
        .map_err(|e| AppError::new(2, format!("Failed to write curve JSON: {e}")))?;

    Ok(())
}

/// Read a curve JSON file.
pub fn read_curve_json(path: &Path) -> Result<CurveFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open curve JSON '{}': {e}", path.display())))?;
    let curve: CurveFile =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid curve JSON: {e}")))?;
    Ok(curve)
}

fn build_grid(x_min: f64, x_max: f64, n: usize) -> Vec<f64> {
    let n = n.max(2);
    let mut x0 = x_min;
    let mut x1 = x_max;
    if !(x0.is_finite() && x1.is_finite()) || x1 < x0 {
        (x0, x1) = DEFAULT_RANGE;
    }
    if (x1 - x0).abs() < 1e-9 {
        x0 -= 0.5;
        x1 += 0.5;
    }
    crate::data::linspace(x0, x1, n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_spans_range_and_matches_curve() {
        let curve = QuadraticCurve::new(1.0, 0.0, 0.0);
        let file = build_curve_file(&curve, None, -2.0, 2.0, 5);
        assert_eq!(file.tool, "quadfit");
        assert_eq!(file.grid.x, vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
        assert_eq!(file.grid.y, vec![4.0, 1.0, 0.0, 1.0, 4.0]);
    }

    #[test]
    fn degenerate_ranges_are_widened() {
        let curve = QuadraticCurve::default();
        let point = build_curve_file(&curve, None, 3.0, 3.0, 3);
        assert_eq!(point.grid.x, vec![2.5, 3.0, 3.5]);

        let inverted = build_curve_file(&curve, None, 1.0, -1.0, 2);
        assert_eq!(inverted.grid.x, vec![-100.0, 100.0]);
    }

    #[test]
    fn json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("curve.json");
        let quality = FitQuality {
            sse: 0.0,
            rmse: 0.0,
            r2: Some(1.0),
            n: 3,
        };
        let file = build_curve_file(&QuadraticCurve::new(5.0, 10.0, 15.0), Some(&quality), 0.0, 100.0, 11);

        write_curve_json(&path, &file).unwrap();
        let back = read_curve_json(&path).unwrap();
        assert_eq!(back, file);
    }

    #[test]
    fn missing_quality_field_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("curve.json");
        std::fs::write(
            &path,
            r#"{"tool":"quadfit","created":"2026-01-01T00:00:00Z","curve":{"a":1.0,"b":2.0,"c":3.0},"grid":{"x":[],"y":[]}}"#,
        )
        .unwrap();
        let back = read_curve_json(&path).unwrap();
        assert_eq!(back.curve, QuadraticCurve::new(1.0, 2.0, 3.0));
        assert!(back.quality.is_none());
    }

    #[test]
    fn non_finite_curve_is_not_exported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("curve.json");
        let curve = QuadraticCurve::new(f64::NAN, f64::INFINITY, 1.0);
        let file = build_curve_file(&curve, None, 0.0, 50.0, 5);

        let err = write_curve_json(&path, &file).unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert!(!path.exists());
    }

    #[test]
    fn invalid_json_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = read_curve_json(&path).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().starts_with("Invalid curve JSON"));
    }
}
