//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting
//! - exported to JSON/CSV
//! - reloaded later for evaluation or plotting

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A curve `y = a*x^2 + b*x + c`.
///
/// Plain value type: two curves are the same curve when their coefficients match.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct QuadraticCurve {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl QuadraticCurve {
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Coefficients in `(a, b, c)` order.
    pub fn coefficients(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite()
    }
}

impl From<[f64; 3]> for QuadraticCurve {
    fn from([a, b, c]: [f64; 3]) -> Self {
        Self { a, b, c }
    }
}

/// Which fitter to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitMode {
    /// Normal equations with no input checks; singular systems give non-finite coefficients.
    Baseline,
    /// Validate samples and reject singular systems with an error.
    Checked,
}

/// A per-sample fitted result (used for reports and exports).
#[derive(Debug, Clone, PartialEq)]
pub struct Residual {
    pub x: f64,
    pub y_obs: f64,
    pub y_fit: f64,
    pub residual: f64,
}

/// Fit quality diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitQuality {
    pub sse: f64,
    pub rmse: f64,
    /// Coefficient of determination; `None` when the samples have no variance.
    pub r2: Option<f64>,
    pub n: usize,
}

/// Fit output: the curve plus its quality against the fitted samples.
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult {
    pub curve: QuadraticCurve,
    pub quality: FitQuality,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct FitConfig {
    pub mode: FitMode,
    /// Extra x-values to evaluate the fitted curve at.
    pub eval_x: Vec<f64>,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_results: Option<PathBuf>,
    pub export_curve: Option<PathBuf>,
    /// Number of points in the exported curve grid.
    pub grid_points: usize,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            mode: FitMode::Baseline,
            eval_x: Vec::new(),
            plot: false,
            plot_width: 72,
            plot_height: 20,
            export_results: None,
            export_curve: None,
            grid_points: 101,
        }
    }
}

/// A saved curve file (JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveFile {
    pub tool: String,
    pub created: DateTime<Utc>,
    pub curve: QuadraticCurve,
    /// Absent for curves that were written without samples (e.g. a reference curve).
    #[serde(default)]
    pub quality: Option<FitQuality>,
    pub grid: CurveGrid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveGrid {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}
