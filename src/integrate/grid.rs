//! Redshift grids and batched distance moduli.
//!
//! A fitting driver evaluates the modulus at every supernova redshift for every
//! candidate parameter vector. Each evaluation is independent, so the batch runs
//! in parallel; results keep the input order.

use rayon::prelude::*;

use crate::domain::ModulusPoint;
use crate::error::CosmoError;
use crate::integrate::CosmicIntegrator;

/// Generate `steps` evenly spaced redshifts between `z_min` and `z_max` (inclusive).
pub fn redshift_grid(z_min: f64, z_max: f64, steps: usize) -> Result<Vec<f64>, CosmoError> {
    if !(z_min.is_finite() && z_max.is_finite() && z_min > -1.0 && z_max > z_min) {
        return Err(CosmoError::InvalidSpan(format!(
            "invalid redshift range: min={z_min}, max={z_max} (must be finite, min>-1, max>min)"
        )));
    }
    if steps < 2 {
        return Err(CosmoError::InvalidSpan("redshift steps must be >= 2".to_string()));
    }

    let step = (z_max - z_min) / (steps as f64 - 1.0);
    let mut out = Vec::with_capacity(steps);
    for i in 0..steps {
        out.push(z_min + step * i as f64);
    }
    // Pin the endpoint against accumulated rounding.
    out[steps - 1] = z_max;
    Ok(out)
}

impl CosmicIntegrator {
    /// Distance modulus at every redshift in `zs`.
    ///
    /// On failure the error for the lowest failing index is returned.
    pub fn hubble_diagram(&self, zs: &[f64], p: &[f64]) -> Result<Vec<ModulusPoint>, CosmoError> {
        self.kind().validate_params(p)?;

        let results: Vec<Result<ModulusPoint, CosmoError>> = zs
            .par_iter()
            .map(|&z| self.distance_modulus(z, p).map(|mu| ModulusPoint { z, mu }))
            .collect();

        results.into_iter().collect()
    }
}
