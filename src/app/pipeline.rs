//! Shared run logic for the CLI subcommands.
//!
//! Keeping this separate from `app.rs` lets the computations be tested without
//! printing anything: config -> integrator -> outputs.

use crate::cli::ModulusArgs;
use crate::domain::{Curve, CurveKind, ModulusPoint, RunConfig};
use crate::error::AppError;
use crate::integrate::{CosmicIntegrator, redshift_grid};

/// Outputs of `cosmic modulus`.
#[derive(Debug, Clone)]
pub struct ModulusRun {
    pub points: Vec<ModulusPoint>,
}

/// Outputs of `cosmic curve`.
#[derive(Debug, Clone)]
pub struct CurveRun {
    pub curve: Curve,
}

/// Explicit `--z` values first, then the optional grid.
pub fn resolve_redshifts(args: &ModulusArgs) -> Result<Vec<f64>, AppError> {
    let mut zs = args.z.clone();
    if let (Some(z_min), Some(z_max)) = (args.z_min, args.z_max) {
        zs.extend(redshift_grid(z_min, z_max, args.steps)?);
    }
    if zs.is_empty() {
        return Err(AppError::new(2, "No redshifts given (use --z or --z-min/--z-max)."));
    }
    Ok(zs)
}

pub fn run_modulus(config: &RunConfig, zs: &[f64]) -> Result<ModulusRun, AppError> {
    let integrator = CosmicIntegrator::with_resolution(config.model, config.resolution);
    let points = integrator.hubble_diagram(zs, &config.params)?;
    Ok(ModulusRun { points })
}

pub fn run_curve(config: &RunConfig, kind: CurveKind, amax: f64) -> Result<CurveRun, AppError> {
    let integrator = CosmicIntegrator::with_resolution(config.model, config.resolution);
    let curve = integrator.curve(kind, amax, &config.params)?;
    Ok(CurveRun { curve })
}
