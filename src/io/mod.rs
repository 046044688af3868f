//! Input/output helpers.
//!
//! - CSV exports of curves and Hubble diagrams (`export`)
//! - curve JSON read/write (`curve`)

pub mod curve;
pub mod export;

pub use curve::*;
pub use export::*;
