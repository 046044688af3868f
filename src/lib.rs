//! `cosmic-curves` library crate.
//!
//! Distance–redshift relations for a small family of expansion-history models,
//! computed by fixed-resolution midpoint quadrature.
//!
//! The binary (`cosmic`) is a thin wrapper around this library so that:
//!
//! - the integrator is usable from a fitting driver without spawning processes
//! - core logic is testable in isolation

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod integrate;
pub mod io;
pub mod math;
pub mod models;
pub mod report;

pub use domain::{Curve, CurveKind, ModelKind};
pub use error::CosmoError;
pub use integrate::{CosmicIntegrator, DEFAULT_RESOLUTION};
