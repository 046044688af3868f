//! Distance–redshift integrator.
//!
//! Every routine runs its own fixed-resolution midpoint pass over the model
//! density; nothing is cached between calls, so a single integrator can be shared
//! freely across threads.
//!
//! Integrands (with `y = DensityModel::density`):
//!
//! - distance modulus / comoving distance: `1 / sqrt(x y(x))`
//! - cosmic time:                          `sqrt(x / y(x))`
//!
//! The scale-factor curves report `a[i] = node_i + h/2`, i.e. the *right edge* of
//! cell `i`, paired with the partial integral over cells `0..=i`. `Omega` is
//! evaluated at those same shifted points.

use crate::domain::{Curve, CurveKind, ModelKind};
use crate::error::CosmoError;
use crate::math::{MidpointRule, curvature_correction};
use crate::models::DensityModel;

/// Default number of midpoint cells per call.
pub const DEFAULT_RESOLUTION: usize = 200;

/// Speed of light in km/s, to three significant figures.
pub const SPEED_OF_LIGHT_KM_S: f64 = 2.99e5;

/// Fixed-resolution integrator for one expansion-history model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CosmicIntegrator {
    model: DensityModel,
    resolution: usize,
    offset: f64,
}

impl CosmicIntegrator {
    pub fn new(kind: ModelKind) -> Self {
        Self::with_resolution(kind, DEFAULT_RESOLUTION)
    }

    /// Build an integrator with `resolution` midpoint cells.
    ///
    /// Never fails; a zero resolution is reported by the routines instead.
    pub fn with_resolution(kind: ModelKind, resolution: usize) -> Self {
        log::info!("{} model (N={resolution})", kind.display_name());
        Self {
            model: DensityModel::new(kind),
            resolution,
            offset: 5.0 * SPEED_OF_LIGHT_KM_S.log10() + 25.0,
        }
    }

    pub fn kind(&self) -> ModelKind {
        self.model.kind()
    }

    pub fn model(&self) -> &DensityModel {
        &self.model
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Additive distance-modulus term `5 log10(c) + 25`.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Distance modulus at redshift `z`.
    pub fn distance_modulus(&self, z: f64, p: &[f64]) -> Result<f64, CosmoError> {
        let bg = self.kind().background(p)?;
        self.check_resolution()?;
        if !z.is_finite() || z <= -1.0 {
            return Err(CosmoError::InvalidSpan(format!(
                "redshift must be finite and > -1, got {z}"
            )));
        }
        if !(bg.h0 > 0.0) {
            return Err(CosmoError::NonPositiveHubble(bg.h0));
        }

        let a = 1.0 / (1.0 + z);
        let rule = MidpointRule::new(a, 1.0, self.resolution);
        let raw = rule.integrate(|x| 1.0 / (x * self.model.density(x, p)).sqrt());
        let f = curvature_correction(raw, bg.omega_k());

        if !(f > 0.0 && f.is_finite()) {
            return Err(CosmoError::NonPositiveDistance { z, value: f });
        }

        let mu = 5.0 * ((1.0 + z) * f / bg.h0).log10() + self.offset;
        log::trace!("mu(z={z}) = {mu} [F={f}, {:?}]", bg.geometry());
        Ok(mu)
    }

    /// Cosmic time vs. scale factor, written into caller-owned buffers of length N.
    pub fn scale_factor_into(
        &self,
        amax: f64,
        p: &[f64],
        t: &mut [f64],
        a: &mut [f64],
    ) -> Result<(), CosmoError> {
        self.check_curve_inputs(amax, p)?;
        check_buffer("t", t.len(), self.resolution)?;
        check_buffer("a", a.len(), self.resolution)?;
        self.accumulate_curve(amax, |x| (x / self.model.density(x, p)).sqrt(), t, a);
        Ok(())
    }

    /// Comoving distance vs. scale factor, written into caller-owned buffers of length N.
    pub fn comoving_distance_into(
        &self,
        amax: f64,
        p: &[f64],
        chi: &mut [f64],
        a: &mut [f64],
    ) -> Result<(), CosmoError> {
        self.check_curve_inputs(amax, p)?;
        check_buffer("chi", chi.len(), self.resolution)?;
        check_buffer("a", a.len(), self.resolution)?;
        self.accumulate_curve(amax, |x| 1.0 / (x * self.model.density(x, p)).sqrt(), chi, a);
        Ok(())
    }

    /// `Omega(a) = y(a) / a^3`, pointwise (no accumulation).
    pub fn omega_into(
        &self,
        amax: f64,
        p: &[f64],
        a: &mut [f64],
        o: &mut [f64],
    ) -> Result<(), CosmoError> {
        self.check_curve_inputs(amax, p)?;
        check_buffer("a", a.len(), self.resolution)?;
        check_buffer("omega", o.len(), self.resolution)?;

        let rule = MidpointRule::new(0.0, amax, self.resolution);
        let half = 0.5 * rule.step();
        for i in 0..self.resolution {
            let ai = rule.node(i) + half;
            a[i] = ai;
            o[i] = self.model.density(ai, p) / ai.powf(3.0);
        }
        Ok(())
    }

    pub fn scale_factor(&self, amax: f64, p: &[f64]) -> Result<Curve, CosmoError> {
        let (mut a, mut t) = self.buffers();
        self.scale_factor_into(amax, p, &mut t, &mut a)?;
        Ok(Curve {
            kind: CurveKind::Time,
            a,
            values: t,
        })
    }

    pub fn comoving_distance(&self, amax: f64, p: &[f64]) -> Result<Curve, CosmoError> {
        let (mut a, mut chi) = self.buffers();
        self.comoving_distance_into(amax, p, &mut chi, &mut a)?;
        Ok(Curve {
            kind: CurveKind::Distance,
            a,
            values: chi,
        })
    }

    pub fn omega(&self, amax: f64, p: &[f64]) -> Result<Curve, CosmoError> {
        let (mut a, mut o) = self.buffers();
        self.omega_into(amax, p, &mut a, &mut o)?;
        Ok(Curve {
            kind: CurveKind::Omega,
            a,
            values: o,
        })
    }

    /// Dispatch to the routine for `kind`.
    pub fn curve(&self, kind: CurveKind, amax: f64, p: &[f64]) -> Result<Curve, CosmoError> {
        log::debug!(
            "{:?} curve for {} up to a={amax} with N={}",
            kind,
            self.kind(),
            self.resolution
        );
        match kind {
            CurveKind::Time => self.scale_factor(amax, p),
            CurveKind::Distance => self.comoving_distance(amax, p),
            CurveKind::Omega => self.omega(amax, p),
        }
    }

    fn accumulate_curve<F>(&self, amax: f64, integrand: F, values: &mut [f64], a: &mut [f64])
    where
        F: Fn(f64) -> f64,
    {
        let rule = MidpointRule::new(0.0, amax, self.resolution);
        let half = 0.5 * rule.step();
        rule.accumulate(integrand, |i, x, partial| {
            a[i] = x + half;
            values[i] = partial;
        });
    }

    fn buffers(&self) -> (Vec<f64>, Vec<f64>) {
        (vec![0.0; self.resolution], vec![0.0; self.resolution])
    }

    fn check_resolution(&self) -> Result<(), CosmoError> {
        if self.resolution == 0 {
            return Err(CosmoError::InvalidResolution);
        }
        Ok(())
    }

    fn check_curve_inputs(&self, amax: f64, p: &[f64]) -> Result<(), CosmoError> {
        self.kind().validate_params(p)?;
        self.check_resolution()?;
        if !(amax.is_finite() && amax > 0.0) {
            return Err(CosmoError::InvalidSpan(format!(
                "amax must be finite and > 0, got {amax}"
            )));
        }
        Ok(())
    }
}

fn check_buffer(name: &'static str, got: usize, expected: usize) -> Result<(), CosmoError> {
    if got != expected {
        return Err(CosmoError::BufferLength {
            name,
            expected,
            got,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LCDM: [f64; 3] = [0.3, 0.7, 70.0];

    #[test]
    fn offset_uses_three_figure_speed_of_light() {
        let integrator = CosmicIntegrator::new(ModelKind::Lcdm);
        let expected = 5.0 * 299000f64.log10() + 25.0;
        assert_eq!(integrator.offset(), expected);
        assert_eq!(integrator.resolution(), DEFAULT_RESOLUTION);
    }

    #[test]
    fn distance_modulus_einstein_de_sitter_closed_form() {
        // OM = 1, OL = 0: y = 1, F = ∫_a^1 x^{-1/2} dx = 2 (1 - sqrt(a)), flat.
        let integrator = CosmicIntegrator::with_resolution(ModelKind::Lcdm, 2000);
        let z: f64 = 1.0;
        let mu = integrator.distance_modulus(z, &[1.0, 0.0, 70.0]).unwrap();
        let f = 2.0 * (1.0 - (1.0 / (1.0 + z)).sqrt());
        let expected = 5.0 * ((1.0 + z) * f / 70.0).log10() + integrator.offset();
        assert!((mu - expected).abs() < 1e-6, "{mu} vs {expected}");
    }

    #[test]
    fn phantom_ignores_leading_parameter_for_background() {
        let integrator = CosmicIntegrator::new(ModelKind::Phantom);
        let mu = integrator.distance_modulus(0.5, &[2.0, 70.0]).unwrap();
        assert!(mu.is_finite());
        // Larger H0 proxy shifts mu down by 5 log10 of the ratio.
        let mu2 = integrator.distance_modulus(0.5, &[2.0, 700.0]).unwrap();
        assert!((mu - mu2 - 5.0).abs() < 1e-12);
    }

    #[test]
    fn distance_modulus_reports_domain_failures() {
        let integrator = CosmicIntegrator::new(ModelKind::Lcdm);
        assert_eq!(
            integrator.distance_modulus(0.5, &[0.3, 0.7, 0.0]),
            Err(CosmoError::NonPositiveHubble(0.0))
        );
        assert!(matches!(
            integrator.distance_modulus(0.0, &LCDM),
            Err(CosmoError::NonPositiveDistance { .. })
        ));
        assert!(matches!(
            integrator.distance_modulus(-1.0, &LCDM),
            Err(CosmoError::InvalidSpan(_))
        ));
        assert!(matches!(
            integrator.distance_modulus(f64::NAN, &LCDM),
            Err(CosmoError::InvalidSpan(_))
        ));
        assert!(matches!(
            integrator.distance_modulus(0.5, &[0.3, 0.7]),
            Err(CosmoError::InvalidParameterVector { .. })
        ));
    }

    #[test]
    fn zero_resolution_is_rejected() {
        let integrator = CosmicIntegrator::with_resolution(ModelKind::Cm, 0);
        assert_eq!(
            integrator.distance_modulus(0.5, &[0.3, 70.0]),
            Err(CosmoError::InvalidResolution)
        );
        assert_eq!(
            integrator.omega(1.0, &[0.3, 70.0]),
            Err(CosmoError::InvalidResolution)
        );
    }

    #[test]
    fn scale_factor_uses_shifted_abscissa() {
        let n = 10;
        let integrator = CosmicIntegrator::with_resolution(ModelKind::Lcdm, n);
        let curve = integrator.scale_factor(1.0, &LCDM).unwrap();
        assert_eq!(curve.len(), n);
        assert_eq!(curve.kind, CurveKind::Time);
        // a[i] = (i + 0.5) h + 0.5 h = (i + 1) h
        for (i, a) in curve.a.iter().enumerate() {
            assert!((a - (i as f64 + 1.0) / n as f64).abs() < 1e-15);
        }
    }

    #[test]
    fn einstein_de_sitter_time_and_distance() {
        // y = 1: t(a) = (2/3) a^{3/2}, chi(a) = 2 sqrt(a).
        let integrator = CosmicIntegrator::with_resolution(ModelKind::Lcdm, 4000);
        let p = [1.0, 0.0, 70.0];
        let t = integrator.scale_factor(1.0, &p).unwrap();
        let last = t.values[t.len() - 1];
        assert!((last - 2.0 / 3.0).abs() < 1e-5, "age {last}");

        let chi = integrator.comoving_distance(1.0, &p).unwrap();
        let last = chi.values[chi.len() - 1];
        // The 1/sqrt(x) singularity at 0 slows convergence to O(sqrt(h)).
        assert!(last < 2.0 && last > 1.98, "chi {last}");
    }

    #[test]
    fn omega_is_pointwise() {
        let integrator = CosmicIntegrator::with_resolution(ModelKind::Cm, 8);
        let p = [0.3, 70.0];
        let curve = integrator.omega(2.0, &p).unwrap();
        for (a, o) in curve.iter() {
            let expected = (0.3 + (1.0 - 0.3) * a) / a.powf(3.0);
            assert_eq!(o, expected);
        }
        // Today Omega is the total density, 1.
        let today = integrator.omega(1.0, &p).unwrap();
        assert!((today.values[7] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn into_variants_check_buffer_lengths() {
        let integrator = CosmicIntegrator::with_resolution(ModelKind::Lcdm, 4);
        let mut t = vec![0.0; 4];
        let mut a = vec![0.0; 3];
        assert_eq!(
            integrator.scale_factor_into(1.0, &LCDM, &mut t, &mut a),
            Err(CosmoError::BufferLength {
                name: "a",
                expected: 4,
                got: 3
            })
        );
        let mut a = vec![0.0; 4];
        integrator.comoving_distance_into(1.0, &LCDM, &mut t, &mut a).unwrap();
        assert!(t.iter().all(|v| *v > 0.0));
    }

    #[test]
    fn curve_routines_reject_bad_amax() {
        let integrator = CosmicIntegrator::new(ModelKind::Lcdm);
        for amax in [0.0, -1.0, f64::INFINITY, f64::NAN] {
            assert!(matches!(
                integrator.curve(CurveKind::Time, amax, &LCDM),
                Err(CosmoError::InvalidSpan(_))
            ));
        }
    }
}
