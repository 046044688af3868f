//! Command-line parsing for the distance–redshift calculator.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the numerical code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{CurveKind, ModelKind};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "cosmic", version, about = "Distance-redshift relations for parametric cosmologies")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Distance modulus at one or more redshifts (a Hubble diagram).
    Modulus(ModulusArgs),
    /// Cosmic time, comoving distance or Omega as a function of scale factor.
    Curve(CurveArgs),
    /// Print a previously exported curve JSON.
    Show(ShowArgs),
}

/// Model selection shared by every computing subcommand.
#[derive(Debug, Args, Clone)]
pub struct ModelArgs {
    /// Expansion-history model.
    #[arg(short = 'm', long, value_enum, default_value_t = ModelKind::Lcdm)]
    pub model: ModelKind,

    /// Raw integer model identifier (0=LCDM, 1=phantom, 2=CM; others fall back to LCDM).
    #[arg(long, conflicts_with = "model")]
    pub model_id: Option<i64>,

    /// Comma-separated parameter vector: LCDM `OM,OL,H0`; phantom `n,H0`; CM `OM,H0`.
    #[arg(short = 'p', long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub params: Vec<f64>,

    /// Midpoint cells per integration (defaults to $COSMIC_RESOLUTION, then 200).
    #[arg(short = 'N', long)]
    pub resolution: Option<usize>,
}

/// Options for `cosmic modulus`.
#[derive(Debug, Args, Clone)]
pub struct ModulusArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Redshift to evaluate (repeatable).
    #[arg(short = 'z', long = "z", allow_hyphen_values = true)]
    pub z: Vec<f64>,

    /// Lower end of a redshift grid (used with --z-max).
    #[arg(long, requires = "z_max")]
    pub z_min: Option<f64>,

    /// Upper end of a redshift grid (used with --z-min).
    #[arg(long, requires = "z_min")]
    pub z_max: Option<f64>,

    /// Number of redshifts in the grid.
    #[arg(long, default_value_t = 20)]
    pub steps: usize,

    /// Export the table to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Options for `cosmic curve`.
#[derive(Debug, Args, Clone)]
pub struct CurveArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Which curve to compute.
    #[arg(short = 'k', long, value_enum, default_value_t = CurveKind::Time)]
    pub kind: CurveKind,

    /// Upper scale factor (values > 1 reach into the future).
    #[arg(long, default_value_t = 1.0)]
    pub amax: f64,

    /// Print every k-th sample (the last one is always printed).
    #[arg(long, default_value_t = 10)]
    pub every: usize,

    /// Export the curve to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the curve (model + params + samples) to JSON.
    #[arg(long = "export-curve")]
    pub export_curve: Option<PathBuf>,
}

/// Options for printing a saved curve.
#[derive(Debug, Args, Clone)]
pub struct ShowArgs {
    /// Curve JSON file produced by `cosmic curve --export-curve`.
    #[arg(long, value_name = "JSON")]
    pub curve: PathBuf,

    /// Print every k-th sample.
    #[arg(long, default_value_t = 10)]
    pub every: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_modulus_with_negative_params() {
        let cli = Cli::parse_from([
            "cosmic", "modulus", "--model", "cm", "--params", "-0.5,70", "--z", "0.1", "--z", "0.5",
        ]);
        let Command::Modulus(args) = cli.command else {
            panic!("expected modulus");
        };
        assert_eq!(args.model.model, ModelKind::Cm);
        assert_eq!(args.model.params, vec![-0.5, 70.0]);
        assert_eq!(args.z, vec![0.1, 0.5]);
        assert_eq!(args.model.resolution, None);
    }

    #[test]
    fn parses_curve_with_model_id() {
        let cli = Cli::parse_from([
            "cosmic", "-vv", "curve", "--model-id", "1", "-p", "2,70", "--kind", "omega", "-N", "50",
        ]);
        assert_eq!(cli.verbose, 2);
        let Command::Curve(args) = cli.command else {
            panic!("expected curve");
        };
        assert_eq!(args.model.model_id, Some(1));
        assert_eq!(args.kind, CurveKind::Omega);
        assert_eq!(args.model.resolution, Some(50));
        assert_eq!(args.amax, 1.0);
    }

    #[test]
    fn params_are_required() {
        assert!(Cli::try_parse_from(["cosmic", "modulus", "--z", "0.5"]).is_err());
    }
}
