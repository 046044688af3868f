//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - passed around in-memory by the integrator and any fitting driver
//! - exported to JSON/CSV
//! - reloaded later for inspection

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::CosmoError;

/// Expansion-history model.
///
/// Every variant has its own canonical parameter layout:
///
/// | model     | layout            |
/// |-----------|-------------------|
/// | `Lcdm`    | `[OM, OL, H0]`    |
/// | `Phantom` | `[n, H0]`         |
/// | `Cm`      | `[OM, H0]`        |
///
/// `H0` is only "roughly related" to the Hubble constant: it absorbs the
/// absolute magnitude zero point when fitting supernova data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    /// Matter + cosmological constant, curvature free.
    Lcdm,
    /// Exotic dark energy with density `exp(a^n - 1) / a^3`.
    Phantom,
    /// Single matter-like component plus curvature.
    Cm,
}

impl ModelKind {
    pub const ALL: [ModelKind; 3] = [ModelKind::Lcdm, ModelKind::Phantom, ModelKind::Cm];

    /// Map a raw integer model identifier to a model.
    ///
    /// Unknown identifiers fall back to [`ModelKind::Lcdm`]. Prefer the enum
    /// directly; this exists for callers that only carry the integer form.
    pub fn from_id(id: i64) -> ModelKind {
        match id {
            0 => ModelKind::Lcdm,
            1 => ModelKind::Phantom,
            2 => ModelKind::Cm,
            other => {
                log::warn!("unknown model id {other}; falling back to LCDM");
                ModelKind::Lcdm
            }
        }
    }

    pub fn id(self) -> i64 {
        match self {
            ModelKind::Lcdm => 0,
            ModelKind::Phantom => 1,
            ModelKind::Cm => 2,
        }
    }

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            ModelKind::Lcdm => "LCDM",
            ModelKind::Phantom => "phantom",
            ModelKind::Cm => "CM",
        }
    }

    /// Minimum parameter vector length.
    pub fn param_len(self) -> usize {
        self.param_names().len()
    }

    pub fn param_names(self) -> &'static [&'static str] {
        match self {
            ModelKind::Lcdm => &["OM", "OL", "H0"],
            ModelKind::Phantom => &["n", "H0"],
            ModelKind::Cm => &["OM", "H0"],
        }
    }

    /// Check that `p` is long enough for this model. Trailing entries are ignored.
    pub fn validate_params(self, p: &[f64]) -> Result<(), CosmoError> {
        let expected = self.param_len();
        if p.len() < expected {
            return Err(CosmoError::InvalidParameterVector {
                model: self,
                expected,
                got: p.len(),
            });
        }
        Ok(())
    }

    /// Derive the background density parameters used by the curvature correction.
    pub fn background(self, p: &[f64]) -> Result<Background, CosmoError> {
        self.validate_params(p)?;
        let bg = match self {
            ModelKind::Lcdm => Background {
                om: p[0],
                ol: p[1],
                h0: p[2],
            },
            ModelKind::Phantom => Background {
                om: 1.0,
                ol: 0.0,
                h0: p[1],
            },
            ModelKind::Cm => Background {
                om: p[0],
                ol: 0.0,
                h0: p[1],
            },
        };
        Ok(bg)
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// `(OM, OL, H0)` as seen by the distance-modulus computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Background {
    pub om: f64,
    pub ol: f64,
    pub h0: f64,
}

impl Background {
    /// Curvature density `OK = 1 - OM - OL`.
    pub fn omega_k(&self) -> f64 {
        1.0 - self.om - self.ol
    }

    pub fn geometry(&self) -> Geometry {
        Geometry::from_omega_k(self.omega_k())
    }
}

/// Spatial geometry, from the sign of `OK`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Geometry {
    Open,
    Flat,
    Closed,
}

impl Geometry {
    /// Exact comparison with zero: only `OM + OL == 1` bit-for-bit is flat.
    pub fn from_omega_k(ok: f64) -> Geometry {
        if ok > 0.0 {
            Geometry::Open
        } else if ok < 0.0 {
            Geometry::Closed
        } else {
            Geometry::Flat
        }
    }
}

/// Which scale-factor curve to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CurveKind {
    /// Cosmic time vs. scale factor.
    Time,
    /// Comoving distance vs. scale factor.
    Distance,
    /// Relative density `Omega(a)`.
    Omega,
}

impl CurveKind {
    pub fn value_label(self) -> &'static str {
        match self {
            CurveKind::Time => "t",
            CurveKind::Distance => "chi",
            CurveKind::Omega => "omega",
        }
    }
}

/// Index-aligned `(a[i], values[i])` samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub kind: CurveKind,
    pub a: Vec<f64>,
    pub values: Vec<f64>,
}

impl Curve {
    pub fn len(&self) -> usize {
        self.a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.a.iter().copied().zip(self.values.iter().copied())
    }
}

/// One row of a Hubble diagram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModulusPoint {
    pub z: f64,
    pub mu: f64,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus `.env` defaults).
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub model: ModelKind,
    pub params: Vec<f64>,
    pub resolution: usize,
    pub export_csv: Option<PathBuf>,
    pub export_curve: Option<PathBuf>,
}

/// A saved curve file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveFile {
    pub tool: String,
    pub generated: DateTime<Utc>,
    pub model: ModelKind,
    pub params: Vec<f64>,
    pub resolution: usize,
    pub amax: f64,
    pub curve: Curve,
}
