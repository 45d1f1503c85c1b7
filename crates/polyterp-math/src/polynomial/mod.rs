//! Interpolating polynomials built from a sample table.
//!
//! # Available Methods
//!
//! - [`LagrangePolynomial`]: Lagrange basis form, any distinct spacing
//! - [`NewtonEqualPolynomial`]: Newton forward/backward form on a uniform grid
//! - [`NewtonDividedPolynomial`]: Newton divided-difference form, any distinct spacing
//! - [`GaussPolynomial`]: Gauss central-difference form on a uniform grid
//!
//! | Method | Spacing | Anchor | Build cost | Eval cost |
//! |--------|---------|--------|------------|-----------|
//! | Lagrange | Any | None | O(n) | O(n²) |
//! | Newton (eq dist) | Uniform | x₀ or xₙ₋₁ | O(n²) | O(n) |
//! | Newton (non eq dist) | Any | x₀ | O(n²) | O(n) |
//! | Gauss | Uniform | Middle sample | O(n²) | O(n) |
//!
//! All four reproduce the samples exactly (up to rounding) and are defined on
//! the whole real line, so they can be evaluated outside the sampled range.

pub(crate) mod gauss;
pub(crate) mod lagrange;
pub(crate) mod newton_divided;
pub(crate) mod newton_equal;

pub use gauss::GaussPolynomial;
pub use lagrange::LagrangePolynomial;
pub use newton_divided::{DividedDifferences, NewtonDividedPolynomial};
pub use newton_equal::NewtonEqualPolynomial;

use std::fmt::Debug;

/// Trait for interpolating polynomials.
///
/// Evaluation is total and pure: any finite or non-finite `x` yields a value,
/// and implementations never mutate state, so a single interpolant can be
/// shared across threads.
pub trait Interpolant: Send + Sync + Debug {
    /// Returns the value of the polynomial at x.
    fn evaluate(&self, x: f64) -> f64;

    /// Returns the minimum sampled x value.
    fn min_x(&self) -> f64;

    /// Returns the maximum sampled x value.
    fn max_x(&self) -> f64;

    /// Checks if x is within the sampled range (otherwise evaluation extrapolates).
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }

    /// Evaluates the polynomial at every point of `xs`.
    fn evaluate_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }
}

/// A series `base + Σ Δⁱ · Πⱼ≤ᵢ (t + sⱼ)/j` of finite-difference corrections.
///
/// Newton and Gauss formulas differ only in which differences feed the
/// terms and in the shift each new factor adds to the running product.
/// Each factor carries its own `1/j`, so no factorial is ever formed and
/// the running product stays finite on long tables.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DifferenceSeries {
    base: f64,
    /// (difference Δⁱy, shift of the i-th factor)
    terms: Vec<(f64, f64)>,
}

impl DifferenceSeries {
    /// Creates a series from orders `1..=max_order`.
    ///
    /// `difference(i)` supplies the order-`i` difference, `shift(i)` the
    /// offset of the factor `(t + shift)` introduced at order `i`.
    pub(crate) fn new(
        base: f64,
        max_order: usize,
        difference: impl Fn(usize) -> f64,
        shift: impl Fn(usize) -> f64,
    ) -> Self {
        let terms = (1..=max_order).map(|i| (difference(i), shift(i))).collect();
        Self { base, terms }
    }

    pub(crate) fn sum(&self, t: f64) -> f64 {
        let mut product = 1.0;
        self.terms
            .iter()
            .zip(1u32..)
            .fold(self.base, |acc, (&(difference, shift), order)| {
                product *= (t + shift) / f64::from(order);
                acc + difference * product
            })
    }

    #[cfg(test)]
    pub(crate) fn order(&self) -> usize {
        self.terms.len()
    }
}
