//! Expansion-history model implementations.
//!
//! Models are implemented as small, pure functions so that the integrator can
//! stay generic over the model.

pub mod model;

pub use model::*;
