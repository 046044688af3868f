//! Quadrature engine.
//!
//! Responsibilities:
//!
//! - distance modulus at a redshift (with curvature correction)
//! - cosmic time, comoving distance and `Omega` curves vs. scale factor
//! - parallel Hubble diagrams over redshift grids

pub mod grid;
pub mod integrator;

pub use grid::*;
pub use integrator::*;
