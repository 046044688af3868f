//! Domain types used throughout the engine.
//!
//! This module defines:
//!
//! - model identity and parameter layouts (`ModelKind`, `Background`, `Geometry`)
//! - curve outputs (`CurveKind`, `Curve`, `ModulusPoint`)
//! - run configuration and the saved curve schema (`RunConfig`, `CurveFile`)

pub mod types;

pub use types::*;
