//! Fixed-size linear algebra used by the curve fitter.

pub mod matrix;

pub use matrix::*;
