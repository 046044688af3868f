//! Composite midpoint rule on a fixed grid.
//!
//! `[lo, hi]` is split into `n` equal cells of width `h = (hi - lo) / n`; the
//! integrand is sampled at the cell midpoints `lo + (i + 1/2) h`:
//!
//! ```text
//! ∫ f ≈ h * Σ_{i<n} f(lo + (i + 1/2) h)
//! ```
//!
//! The error is O(h²) for smooth integrands. There is no adaptive refinement:
//! the same `n` always yields the same sample points and the same bits.

/// A midpoint rule over `[lo, hi]` with `n` cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MidpointRule {
    lo: f64,
    h: f64,
    n: usize,
}

impl MidpointRule {
    /// `hi < lo` is allowed and yields a negative step (and a negated integral).
    pub fn new(lo: f64, hi: f64, n: usize) -> Self {
        let h = (hi - lo) / n as f64;
        Self { lo, h, n }
    }

    pub fn step(&self) -> f64 {
        self.h
    }

    pub fn cells(&self) -> usize {
        self.n
    }

    /// Midpoint of cell `i`.
    pub fn node(&self, i: usize) -> f64 {
        self.lo + (i as f64 + 0.5) * self.h
    }

    /// Approximate `∫ f` over the whole span.
    pub fn integrate<F>(&self, mut f: F) -> f64
    where
        F: FnMut(f64) -> f64,
    {
        let mut sum = 0.0;
        for i in 0..self.n {
            sum += f(self.node(i));
        }
        sum * self.h
    }

    /// Run the quadrature, reporting `(i, node, partial_integral)` after every cell.
    ///
    /// The partial integral after cell `i` covers `[lo, lo + (i + 1) h]`.
    pub fn accumulate<F, S>(&self, mut f: F, mut sink: S)
    where
        F: FnMut(f64) -> f64,
        S: FnMut(usize, f64, f64),
    {
        let mut sum = 0.0;
        for i in 0..self.n {
            let x = self.node(i);
            sum += f(x);
            sink(i, x, sum * self.h);
        }
    }
}
