//! Numerical building blocks: midpoint quadrature and curvature correction.

pub mod curvature;
pub mod midpoint;

pub use curvature::*;
pub use midpoint::*;
