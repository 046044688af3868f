//! Density evaluation for LCDM / phantom / CM.
//!
//! All three models return `y(a) = a^3 * rho(a) / rho_crit,0`, the quantity the
//! integrands need:
//!
//! - LCDM:    `OM + (1 - OM - OL) a + OL a^3`
//! - phantom: `exp(a^n - 1)`
//! - CM:      `OM + (1 - OM) a`
//!
//! Negative densities are unphysical for LCDM and CM. Instead of failing we clamp
//! to [`DENSITY_SENTINEL`] so `1/sqrt(x y)` collapses towards zero.

use crate::domain::ModelKind;
use crate::error::CosmoError;

/// Value substituted for a negative density.
pub const DENSITY_SENTINEL: f64 = 1e20;

/// The model function `y(a, p)` for a fixed model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DensityModel {
    kind: ModelKind,
}

impl DensityModel {
    pub fn new(kind: ModelKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    /// Evaluate `y(a, p)` after checking the parameter vector length.
    pub fn evaluate(&self, a: f64, p: &[f64]) -> Result<f64, CosmoError> {
        self.kind.validate_params(p)?;
        Ok(self.density(a, p))
    }

    /// Evaluate `y(a, p)` without validation.
    ///
    /// # Panics
    /// Panics if `p` is shorter than `self.kind().param_len()`. Callers validate
    /// once before entering a quadrature loop.
    pub fn density(&self, a: f64, p: &[f64]) -> f64 {
        match self.kind {
            ModelKind::Lcdm => {
                let om = p[0];
                let ol = p[1];
                clamp_negative(om + (1.0 - om - ol) * a + ol * a * a * a)
            }
            ModelKind::Phantom => {
                let n = p[0];
                (a.powf(n) - 1.0).exp()
            }
            ModelKind::Cm => {
                let om = p[0];
                clamp_negative(om + (1.0 - om) * a)
            }
        }
    }
}

fn clamp_negative(y: f64) -> f64 {
    if y < 0.0 { DENSITY_SENTINEL } else { y }
}
