//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and initializes logging
//! - loads or generates samples
//! - runs the fit pipeline
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::cli::{Command, EvalArgs, FitArgs, OutputArgs, PlotArgs, SampleArgs};
use crate::data::{SampleSpec, generate_sample};
use crate::domain::{FitConfig, FitMode, QuadraticCurve};
use crate::error::AppError;
use crate::models::{CurveScale, random_curve};

pub mod demo;
pub mod pipeline;

const OUTLIER_COUNT: usize = 3;

/// Entry point for the `quadfit` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();
    crate::logging::init(cli.verbose);

    match cli.command {
        Command::Demo => {
            print!("{}", demo::demo_report());
            Ok(())
        }
        Command::Fit(args) => handle_fit(args),
        Command::Sample(args) => handle_sample(args),
        Command::Eval(args) => handle_eval(args),
        Command::Plot(args) => handle_plot(args),
    }
}

fn handle_fit(args: FitArgs) -> Result<(), AppError> {
    let config = fit_config_from_args(&args.output);

    let (x, y) = match &args.input {
        Some(path) => {
            let samples = crate::io::load_samples(path)?;
            if !samples.row_errors.is_empty() {
                eprintln!(
                    "Skipped {} of {} CSV row(s) (first: line {}: {}).",
                    samples.row_errors.len(),
                    samples.rows_read,
                    samples.row_errors[0].line,
                    samples.row_errors[0].message
                );
            }
            (samples.x, samples.y)
        }
        None if args.x.is_empty() => {
            return Err(AppError::new(2, "Provide samples with --input <CSV> or --x/--y."));
        }
        None => (args.x, args.y),
    };

    report_fit(x, y, &config)
}

fn handle_sample(args: SampleArgs) -> Result<(), AppError> {
    let config = fit_config_from_args(&args.output);

    let reference = if args.random {
        let scale = curve_scale_from_args(&args.scale)?;
        random_curve(&mut StdRng::seed_from_u64(args.seed), scale)
    } else {
        match &args.curve {
            Some(coefs) => curve_from_coefficients(coefs)?,
            None => return Err(AppError::new(2, "Provide a reference curve with --curve a,b,c or use --random.")),
        }
    };
    info!(?reference, "reference curve");

    let spec = SampleSpec {
        from: args.from,
        to: args.to,
        count: args.count,
        noise_std: args.noise,
        seed: args.seed,
    };
    let sample = generate_sample(&reference, &spec)?;

    println!(
        "Reference: a={:.6} b={:.6} c={:.6}",
        reference.a, reference.b, reference.c
    );
    report_fit(sample.x, sample.y, &config)
}

fn handle_eval(args: EvalArgs) -> Result<(), AppError> {
    let curve = match (&args.curve_file, &args.curve) {
        (Some(path), _) => crate::io::read_curve_json(path)?.curve,
        (None, Some(coefs)) => curve_from_coefficients(coefs)?,
        (None, None) => return Err(AppError::new(2, "Provide --curve-file or --curve a,b,c.")),
    };

    print!("{}", crate::report::format_evaluations(&curve, &args.x));
    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let curve = crate::io::read_curve_json(&args.curve_file)?;
    let plot = crate::plot::render_curve_file_plot(&curve, args.width, args.height);

    println!("{plot}");
    Ok(())
}

fn report_fit(x: Vec<f64>, y: Vec<f64>, config: &FitConfig) -> Result<(), AppError> {
    let run = pipeline::run_fit(x, y, config)?;

    println!(
        "{}",
        crate::report::format_fit_summary(&run.result, &run.x, config.mode)
    );

    if !run.residuals.is_empty() {
        println!("Residuals:");
        println!("{}", crate::report::format_residuals(&run.residuals));

        if run.residuals.len() > OUTLIER_COUNT {
            let top = crate::report::rank_outliers(&run.residuals, OUTLIER_COUNT);
            println!("Largest residuals:");
            println!("{}", crate::report::format_residuals(&top));
        }
    }

    if !config.eval_x.is_empty() {
        println!("Evaluations:");
        println!("{}", crate::report::format_evaluations(&run.result.curve, &config.eval_x));
    }

    if config.plot && run.result.curve.is_finite() {
        let plot = crate::plot::render_ascii_plot(
            &run.x,
            &run.y,
            &run.result.curve,
            config.plot_width,
            config.plot_height,
        );
        println!("{plot}");
    }

    // Optional exports.
    if let Some(path) = &config.export_results {
        crate::io::write_results_csv(path, &run.residuals)?;
    }
    if let Some(path) = &config.export_curve {
        let (x_min, x_max) = run
            .x
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        let file = crate::io::build_curve_file(
            &run.result.curve,
            Some(&run.result.quality),
            x_min,
            x_max,
            config.grid_points,
        );
        crate::io::write_curve_json(path, &file)?;
    }

    Ok(())
}

pub fn fit_config_from_args(args: &OutputArgs) -> FitConfig {
    FitConfig {
        mode: if args.checked {
            FitMode::Checked
        } else {
            FitMode::Baseline
        },
        eval_x: args.eval_x.clone(),
        plot: args.plot,
        plot_width: args.width,
        plot_height: args.height,
        export_results: args.export.clone(),
        export_curve: args.export_curve.clone(),
        grid_points: args.grid_points,
    }
}

fn curve_from_coefficients(coefs: &[f64]) -> Result<QuadraticCurve, AppError> {
    match coefs {
        &[a, b, c] => Ok(QuadraticCurve::new(a, b, c)),
        _ => Err(AppError::new(
            2,
            format!("Expected 3 curve coefficients (a,b,c), got {}.", coefs.len()),
        )),
    }
}

fn curve_scale_from_args(scale: &[f64]) -> Result<CurveScale, AppError> {
    match scale {
        &[s] => Ok(CurveScale::Uniform(s)),
        &[a, b, c] => Ok(CurveScale::PerCoefficient([a, b, c])),
        _ => Err(AppError::new(
            2,
            format!("Expected 1 or 3 scale values, got {}.", scale.len()),
        )),
    }
}
