//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the fitted curve value type (`QuadraticCurve`)
//! - fit outputs (`FitResult`, `FitQuality`, `Residual`)
//! - run configuration (`FitConfig`, `FitMode`)
//! - the saved curve file schema (`CurveFile`, `CurveGrid`)

pub mod types;

pub use types::*;
