//! Command-line parsing for the quadratic curve fitter.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the math code.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "quadfit", version, about = "Quadratic least-squares curve fitter")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the fixed demonstration: bitset ops, 3x3 determinant/inverse, reference fit.
    Demo,
    /// Fit a quadratic curve to samples given inline or in a CSV file.
    Fit(FitArgs),
    /// Generate samples from a reference (or random) curve, then fit them.
    Sample(SampleArgs),
    /// Evaluate a curve at x-values.
    Eval(EvalArgs),
    /// Plot a previously exported curve JSON.
    Plot(PlotArgs),
}

/// Options shared by every command that produces a fit.
#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    /// Validate samples and fail on singular systems instead of printing NaN coefficients.
    #[arg(long)]
    pub checked: bool,

    /// Extra x-values to evaluate the fitted curve at (comma-separated).
    #[arg(long = "eval", value_delimiter = ',', allow_hyphen_values = true)]
    pub eval_x: Vec<f64>,

    /// Render an ASCII plot of samples and fitted curve.
    #[arg(long)]
    pub plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 72)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// Export per-sample residuals to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export curve (coefficients + quality + evaluated grid) to JSON.
    #[arg(long = "export-curve")]
    pub export_curve: Option<PathBuf>,

    /// Number of grid points in the exported curve JSON.
    #[arg(long, default_value_t = 101)]
    pub grid_points: usize,
}

/// Sample sources for `quadfit fit`.
#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    /// CSV file with `x` and `y` columns.
    #[arg(short = 'f', long, value_name = "CSV", conflicts_with_all = ["x", "y"])]
    pub input: Option<PathBuf>,

    /// Inline x-values (comma-separated).
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, requires = "y")]
    pub x: Vec<f64>,

    /// Inline y-values (comma-separated).
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, requires = "x")]
    pub y: Vec<f64>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Options for `quadfit sample`.
#[derive(Debug, Parser, Clone)]
pub struct SampleArgs {
    /// Reference curve coefficients `a,b,c`.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, conflicts_with = "random")]
    pub curve: Option<Vec<f64>>,

    /// Draw a random reference curve instead.
    #[arg(long)]
    pub random: bool,

    /// Random coefficient scale: one value for all, or `a,b,c`.
    #[arg(long, value_delimiter = ',', default_value = "100")]
    pub scale: Vec<f64>,

    /// Random seed for the curve and the noise.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Smallest sample x.
    #[arg(long, default_value_t = -100.0, allow_hyphen_values = true)]
    pub from: f64,

    /// Largest sample x.
    #[arg(long, default_value_t = 100.0, allow_hyphen_values = true)]
    pub to: f64,

    /// Number of evenly spaced samples.
    #[arg(short = 'n', long, default_value_t = 3)]
    pub count: usize,

    /// Standard deviation of Gaussian noise added to y.
    #[arg(long, default_value_t = 0.0)]
    pub noise: f64,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Options for `quadfit eval`.
#[derive(Debug, Parser)]
pub struct EvalArgs {
    /// Curve JSON file produced by `--export-curve`.
    #[arg(long, value_name = "JSON", conflicts_with = "curve")]
    pub curve_file: Option<PathBuf>,

    /// Curve coefficients `a,b,c`.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub curve: Option<Vec<f64>>,

    /// x-values to evaluate (comma-separated).
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub x: Vec<f64>,
}

/// Options for plotting a saved curve.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Curve JSON file produced by `--export-curve`.
    #[arg(long, value_name = "JSON")]
    pub curve_file: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 72)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}
