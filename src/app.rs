//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - initialises logging
//! - resolves the run configuration
//! - runs the integrator
//! - prints reports and writes optional exports

use clap::Parser;

use crate::cli::{Cli, Command, CurveArgs, ModelArgs, ModulusArgs, ShowArgs};
use crate::domain::{ModelKind, RunConfig};
use crate::error::AppError;
use crate::integrate::DEFAULT_RESOLUTION;

pub mod pipeline;

/// Environment variable holding the default quadrature resolution.
pub const RESOLUTION_ENV: &str = "COSMIC_RESOLUTION";

/// Entry point for the `cosmic` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Modulus(args) => handle_modulus(args),
        Command::Curve(args) => handle_curve(args),
        Command::Show(args) => handle_show(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // RUST_LOG still wins when set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init()
        .ok();
}

fn handle_modulus(args: ModulusArgs) -> Result<(), AppError> {
    let config = run_config_from_args(&args.model, args.export.clone(), None)?;
    let zs = pipeline::resolve_redshifts(&args)?;
    let run = pipeline::run_modulus(&config, &zs)?;

    println!(
        "{}",
        crate::report::format_model_summary(config.model, &config.params, config.resolution)
    );
    println!("{}", crate::report::format_modulus_table(&run.points));

    if let Some(path) = &config.export_csv {
        crate::io::export::write_modulus_csv(path, config.model, &run.points)?;
    }
    Ok(())
}

fn handle_curve(args: CurveArgs) -> Result<(), AppError> {
    let config = run_config_from_args(&args.model, args.export.clone(), args.export_curve.clone())?;
    let run = pipeline::run_curve(&config, args.kind, args.amax)?;

    println!(
        "{}",
        crate::report::format_model_summary(config.model, &config.params, config.resolution)
    );
    println!("{}", crate::report::format_curve_table(&run.curve, args.every));

    if let Some(path) = &config.export_csv {
        crate::io::export::write_curve_csv(path, &run.curve)?;
    }
    if let Some(path) = &config.export_curve {
        let file = crate::io::curve::curve_file(
            config.model,
            &config.params,
            config.resolution,
            args.amax,
            run.curve,
        );
        crate::io::curve::write_curve_json(path, &file)?;
    }
    Ok(())
}

fn handle_show(args: ShowArgs) -> Result<(), AppError> {
    let file = crate::io::curve::read_curve_json(&args.curve)?;
    println!("{}", crate::report::format_curve_file(&file, args.every));
    Ok(())
}

/// Build the run configuration from model arguments and the environment.
pub fn run_config_from_args(
    args: &ModelArgs,
    export_csv: Option<std::path::PathBuf>,
    export_curve: Option<std::path::PathBuf>,
) -> Result<RunConfig, AppError> {
    let model = match args.model_id {
        Some(id) => ModelKind::from_id(id),
        None => args.model,
    };
    let resolution = match args.resolution {
        Some(n) => n,
        None => resolution_from_env(std::env::var(RESOLUTION_ENV).ok().as_deref())?,
    };
    if resolution == 0 {
        return Err(AppError::new(2, "Resolution must be >= 1."));
    }
    model.validate_params(&args.params)?;

    Ok(RunConfig {
        model,
        params: args.params.clone(),
        resolution,
        export_csv,
        export_curve,
    })
}

/// Parse the resolution default from the raw environment value.
fn resolution_from_env(raw: Option<&str>) -> Result<usize, AppError> {
    match raw {
        None => Ok(DEFAULT_RESOLUTION),
        Some(s) => s.trim().parse::<usize>().map_err(|e| {
            AppError::new(2, format!("Invalid {RESOLUTION_ENV}='{s}': {e}"))
        }),
    }
}
