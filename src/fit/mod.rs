//! Quadratic least-squares fitting.
//!
//! Responsibilities:
//!
//! - accumulate power sums over the samples
//! - build and solve the 3x3 normal equations
//! - score a fitted curve against its samples (SSE / RMSE / R²)

pub mod fitter;
pub mod power_sums;
pub mod quality;

pub use fitter::*;
pub use power_sums::*;
pub use quality::*;
