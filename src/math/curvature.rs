//! Curvature correction for the transverse comoving distance.
//!
//! With `OK = 1 - OM - OL` and `F` the flat-space integral:
//!
//! - open   (`OK > 0`): `sinh(sqrt(OK) F) / sqrt(OK)`
//! - flat   (`OK = 0`): `F`
//! - closed (`OK < 0`): `sin(sqrt(|OK|) F) / sqrt(|OK|)`
//!
//! Both curved branches tend to `F` as `|OK| → 0`.

use crate::domain::Geometry;

/// Apply the geometry-dependent correction to the raw integral `f`.
pub fn curvature_correction(f: f64, omega_k: f64) -> f64 {
    match Geometry::from_omega_k(omega_k) {
        Geometry::Flat => f,
        Geometry::Open => {
            let root = omega_k.sqrt();
            (root * f).sinh() / root
        }
        Geometry::Closed => {
            let root = omega_k.abs().sqrt();
            (root * f).sin() / root
        }
    }
}
