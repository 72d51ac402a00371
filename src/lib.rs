//! `quadfit` library crate.
//!
//! The binary (`quadfit`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the numeric building blocks (bitset, 3x3 matrix, quadratic fit) are reusable
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod bits;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod logging;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;
