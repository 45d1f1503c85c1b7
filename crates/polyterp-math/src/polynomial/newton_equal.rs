//! Newton interpolation on a uniform grid.

use crate::differences::DifferenceTable;
use crate::error::{InterpError, InterpResult};
use crate::polynomial::{DifferenceSeries, Interpolant};
use crate::spacing::{gap_range, is_equal_dist};
use crate::table::SampleTable;

/// Name reported for this strategy's results.
pub(crate) const NAME: &str = "newton polynom (eq dist)";

/// Newton forward/backward polynomial for uniformly spaced samples.
///
/// Points up to the midpoint of the sampled range use the forward formula
/// anchored at x₀, points beyond it the backward formula anchored at xₙ₋₁:
///
/// ```text
/// forward:  y₀   + Σᵢ Δⁱy₀      / i! · t(t-1)…(t-i+1),  t = (x - x₀)  / h
/// backward: yₙ₋₁ + Σᵢ Δⁱyₙ₋₁₋ᵢ / i! · t(t+1)…(t+i-1),  t = (x - xₙ₋₁) / h
/// ```
///
/// Both are the same polynomial in exact arithmetic; each series converges
/// fastest near its own anchor.
#[derive(Debug, Clone)]
pub struct NewtonEqualPolynomial {
    first_x: f64,
    last_x: f64,
    step: f64,
    threshold: f64,
    forward: DifferenceSeries,
    backward: DifferenceSeries,
}

impl NewtonEqualPolynomial {
    /// Creates the Newton polynomial of a uniformly spaced table.
    ///
    /// # Errors
    ///
    /// Returns [`InterpError::UnsupportedSpacing`] if the gaps between
    /// consecutive x values differ by `tolerance` or more.
    pub fn new(
        table: &SampleTable,
        differences: &DifferenceTable,
        tolerance: f64,
    ) -> InterpResult<Self> {
        if !is_equal_dist(table.xs(), tolerance) {
            let (min_gap, max_gap) = gap_range(table.xs()).unwrap_or_default();
            return Err(InterpError::unsupported_spacing(NAME, min_gap, max_gap));
        }

        let n = table.len();
        let ys = table.ys();
        let max_order = n - 1;

        let forward = DifferenceSeries::new(
            ys[0],
            max_order,
            |i| differences.column(i)[0],
            |i| -((i - 1) as f64),
        );
        let backward = DifferenceSeries::new(
            ys[n - 1],
            max_order,
            |i| differences.last_defined(i),
            |i| (i - 1) as f64,
        );

        Ok(Self {
            first_x: table.min_x(),
            last_x: table.max_x(),
            step: table.step(),
            threshold: table.min_x() + (table.max_x() - table.min_x()) / 2.0,
            forward,
            backward,
        })
    }

    /// Grid step `h`.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Boundary between the forward and backward formulas.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Interpolant for NewtonEqualPolynomial {
    fn evaluate(&self, x: f64) -> f64 {
        if x <= self.threshold {
            self.forward.sum((x - self.first_x) / self.step)
        } else {
            self.backward.sum((x - self.last_x) / self.step)
        }
    }

    fn min_x(&self) -> f64 {
        self.first_x
    }

    fn max_x(&self) -> f64 {
        self.last_x
    }
}
