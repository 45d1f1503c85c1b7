//! Lagrange interpolation.

use crate::polynomial::Interpolant;
use crate::table::SampleTable;

/// Name reported for this strategy's results.
pub(crate) const NAME: &str = "lagrange polynom";

/// Lagrange interpolating polynomial.
///
/// ```text
/// f(x) = Σᵢ yᵢ · Πⱼ≠ᵢ (x - xⱼ) / (xᵢ - xⱼ)
/// ```
///
/// Works for any distinct x values; every evaluation costs O(n²).
///
/// # Example
///
/// ```rust
/// use polyterp_math::polynomial::{Interpolant, LagrangePolynomial};
/// use polyterp_math::SampleTable;
///
/// let table = SampleTable::new(&[0.0, 1.0, 3.0], &[0.0, 1.0, 9.0]).unwrap();
/// let p = LagrangePolynomial::new(&table);
/// assert!((p.evaluate(2.0) - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LagrangePolynomial {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl LagrangePolynomial {
    /// Creates the Lagrange polynomial through every sample of the table.
    pub fn new(table: &SampleTable) -> Self {
        Self {
            xs: table.xs().to_vec(),
            ys: table.ys().to_vec(),
        }
    }

    /// Value of the i-th basis polynomial `ℓᵢ(x)`.
    fn basis(&self, i: usize, x: f64) -> f64 {
        let xi = self.xs[i];
        self.xs
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .fold(1.0, |acc, (_, &xj)| acc * (x - xj) / (xi - xj))
    }
}

impl Interpolant for LagrangePolynomial {
    fn evaluate(&self, x: f64) -> f64 {
        self.ys
            .iter()
            .enumerate()
            .map(|(i, &yi)| yi * self.basis(i, x))
            .sum()
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reproduces_quadratic() {
        let table = SampleTable::new(&[-1.0, 0.5, 2.0], &[1.0, 0.25, 4.0]).unwrap();
        let p = LagrangePolynomial::new(&table);

        for x in [-3.0, -1.0, 0.0, 1.7, 2.0, 10.0] {
            assert_relative_eq!(p.evaluate(x), x * x, epsilon = 1e-9, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_two_points_is_a_line() {
        let table = SampleTable::new(&[1.0, 3.0], &[2.0, 6.0]).unwrap();
        let p = LagrangePolynomial::new(&table);

        assert_relative_eq!(p.evaluate(2.0), 4.0, epsilon = 1e-12);
        // Extrapolation continues the line
        assert_relative_eq!(p.evaluate(5.0), 10.0, epsilon = 1e-12);
        assert_relative_eq!(p.evaluate(-1.0), -2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_basis_partition_of_unity() {
        let table = SampleTable::new(&[0.0, 0.7, 1.1, 2.9], &[0.0; 4]).unwrap();
        let p = LagrangePolynomial::new(&table);

        let x = 1.9;
        let total: f64 = (0..4).map(|i| p.basis(i, x)).sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-12);
    }
}
