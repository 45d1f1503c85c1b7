//! Newton divided-difference interpolation.

use crate::polynomial::Interpolant;
use crate::table::SampleTable;

/// Name reported for this strategy's results.
pub(crate) const NAME: &str = "newton polynom (non eq dist)";

/// Memo table of divided differences `f[xᵢ, …, xᵢ₊ₖ]`.
///
/// Entry `(start, k)` is computed once, bottom-up, from the recursion
///
/// ```text
/// f[xᵢ]          = yᵢ
/// f[xᵢ, …, xᵢ₊ₖ] = (f[xᵢ₊₁, …, xᵢ₊ₖ] - f[xᵢ, …, xᵢ₊ₖ₋₁]) / (xᵢ₊ₖ - xᵢ)
/// ```
///
/// so building the whole table costs O(n²) instead of the exponential cost
/// of the naive recursion.
#[derive(Debug, Clone, PartialEq)]
pub struct DividedDifferences {
    /// `levels[k][i] = f[xᵢ, …, xᵢ₊ₖ]`
    levels: Vec<Vec<f64>>,
}

impl DividedDifferences {
    /// Builds every divided difference of the samples.
    pub fn new(xs: &[f64], ys: &[f64]) -> Self {
        let n = xs.len();
        let mut levels: Vec<Vec<f64>> = Vec::with_capacity(n);
        levels.push(ys.to_vec());

        for k in 1..n {
            let prev = &levels[k - 1];
            let level = (0..n - k)
                .map(|i| (prev[i + 1] - prev[i]) / (xs[i + k] - xs[i]))
                .collect();
            levels.push(level);
        }

        Self { levels }
    }

    /// `f[x_start, …, x_{start+k}]`, or `None` past the end of the samples.
    pub fn get(&self, start: usize, k: usize) -> Option<f64> {
        self.levels.get(k).and_then(|level| level.get(start)).copied()
    }

    /// Newton coefficients `f[x₀], f[x₀, x₁], …, f[x₀, …, xₙ₋₁]`.
    pub fn leading(&self) -> Vec<f64> {
        self.levels.iter().map(|level| level[0]).collect()
    }
}

/// Newton polynomial for arbitrarily spaced samples.
///
/// ```text
/// f(x) = f[x₀] + Σₖ f[x₀, …, xₖ] · (x - x₀)(x - x₁)…(x - xₖ₋₁)
/// ```
///
/// The constant term is `f[x₀] = y₀`. Evaluation uses the nested form, O(n)
/// per point, with the coefficients computed once at construction.
#[derive(Debug, Clone)]
pub struct NewtonDividedPolynomial {
    xs: Vec<f64>,
    coeffs: Vec<f64>,
}

impl NewtonDividedPolynomial {
    /// Creates the divided-difference polynomial through every sample.
    pub fn new(table: &SampleTable) -> Self {
        let memo = DividedDifferences::new(table.xs(), table.ys());
        Self {
            xs: table.xs().to_vec(),
            coeffs: memo.leading(),
        }
    }

    /// Newton coefficients, lowest order first.
    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }
}

impl Interpolant for NewtonDividedPolynomial {
    fn evaluate(&self, x: f64) -> f64 {
        let n = self.coeffs.len();
        let mut p = self.coeffs[n - 1];
        for j in (0..n - 1).rev() {
            p = self.coeffs[j] + (x - self.xs[j]) * p;
        }
        p
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}
