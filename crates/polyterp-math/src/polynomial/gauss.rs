//! Gauss central-difference interpolation.

use crate::differences::DifferenceTable;
use crate::error::{InterpError, InterpResult};
use crate::polynomial::{DifferenceSeries, Interpolant};
use crate::spacing::{gap_range, is_equal_dist};
use crate::table::SampleTable;

/// Name reported for this strategy's results.
pub(crate) const NAME: &str = "gauss polynom";

/// Gauss polynomial anchored at the middle sample of a uniform grid.
///
/// With `c = ⌊(n-1)/2⌋`, `a = x_c` and `t = (x - a) / h`, points right of
/// the anchor use the forward formula and points left of it the backward one:
///
/// ```text
/// forward:  y_c + tΔy_c + t(t-1)/2! Δ²y_{c-1} + (t+1)t(t-1)/3! Δ³y_{c-1} + …
/// backward: y_c + tΔy_{c-1} + t(t+1)/2! Δ²y_{c-1} + (t+1)t(t-1)/3! Δ³y_{c-2} + …
/// ```
///
/// The differences used zig-zag around the anchor, so the series takes
/// samples alternately from both sides of it. The forward half stops at
/// order `n-1`, the highest difference the table holds.
#[derive(Debug, Clone)]
pub struct GaussPolynomial {
    anchor_x: f64,
    anchor_y: f64,
    step: f64,
    first_x: f64,
    last_x: f64,
    forward: DifferenceSeries,
    backward: DifferenceSeries,
}

impl GaussPolynomial {
    /// Creates the Gauss polynomial of a uniformly spaced table.
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
        let center = (n - 1) / 2;
        let anchor_y = table.ys()[center];

        // order i reads row c - ⌊i/2⌋ and adds (t - i/2) for even i, (t + (i-1)/2) for odd i
        let forward = DifferenceSeries::new(
            anchor_y,
            (2 * center + 1).min(n - 1),
            |i| differences.column(i)[center - i / 2],
            |i| {
                if i % 2 == 0 {
                    -((i / 2) as f64)
                } else {
                    ((i - 1) / 2) as f64
                }
            },
        );

        // order i reads row c - ⌈i/2⌉ and adds (t + i/2) for even i, (t - (i-1)/2) for odd i
        let backward = DifferenceSeries::new(
            anchor_y,
            2 * center,
            |i| differences.column(i)[center - (i + 1) / 2],
            |i| {
                if i % 2 == 0 {
                    (i / 2) as f64
                } else {
                    -(((i - 1) / 2) as f64)
                }
            },
        );

        Ok(Self {
            anchor_x: table.xs()[center],
            anchor_y,
            step: table.step(),
            first_x: table.min_x(),
            last_x: table.max_x(),
            forward,
            backward,
        })
    }

    /// The middle sample x value the series are centered on.
    pub fn anchor(&self) -> f64 {
        self.anchor_x
    }
}

impl Interpolant for GaussPolynomial {
    fn evaluate(&self, x: f64) -> f64 {
        if x == self.anchor_x {
            return self.anchor_y;
        }
        let t = (x - self.anchor_x) / self.step;
        if x > self.anchor_x {
            self.forward.sum(t)
        } else {
            self.backward.sum(t)
        }
    }

    fn min_x(&self) -> f64 {
        self.first_x
    }

    fn max_x(&self) -> f64 {
        self.last_x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn build(xs: &[f64], ys: &[f64]) -> InterpResult<GaussPolynomial> {
        let table = SampleTable::new(xs, ys)?;
        let diffs = DifferenceTable::build(&table);
        GaussPolynomial::new(&table, &diffs, 1e-5)
    }

    #[test]
    fn test_squares_between_samples() {
        let p = build(&[0.0, 1.0, 2.0, 3.0, 4.0], &[0.0, 1.0, 4.0, 9.0, 16.0]).unwrap();
        assert_relative_eq!(p.anchor(), 2.0);
        assert_relative_eq!(p.evaluate(2.5), 6.25, epsilon = 1e-12);
        assert_relative_eq!(p.evaluate(1.5), 2.25, epsilon = 1e-12);
        assert_relative_eq!(p.evaluate(-1.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(p.evaluate(6.0), 36.0, epsilon = 1e-12);
    }

    #[test]
    fn test_anchor_returns_sample() {
        let p = build(&[0.0, 1.0, 2.0, 3.0], &[5.0, -2.0, 7.5, 1.0]).unwrap();
        // c = 1 for four samples
        assert_eq!(p.anchor(), 1.0);
        assert_eq!(p.evaluate(1.0), -2.0);
    }

    #[test]
    fn test_series_orders() {
        // odd n: forward half is capped at n - 1
        let odd = build(&[0.0, 1.0, 2.0, 3.0, 4.0], &[1.0, 2.0, 0.0, 3.0, 5.0]).unwrap();
        assert_eq!(odd.forward.order(), 4);
        assert_eq!(odd.backward.order(), 4);

        // even n: forward half reaches n - 1, backward half 2c = n - 2
        let even = build(&[0.0, 1.0, 2.0, 3.0], &[1.0, 2.0, 0.0, 3.0]).unwrap();
        assert_eq!(even.forward.order(), 3);
        assert_eq!(even.backward.order(), 2);
    }

    #[test]
    fn test_through_points_odd_and_even() {
        for n in 2..=9 {
            let xs: Vec<f64> = (0..n).map(|i| 1.0 + 0.25 * i as f64).collect();
            let ys: Vec<f64> = xs.iter().map(|x| (x * 1.7).sin() + 0.3 * x).collect();
            let p = build(&xs, &ys).unwrap();
            for (x, y) in xs.iter().zip(&ys) {
                assert_relative_eq!(p.evaluate(*x), *y, epsilon = 1e-10, max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn test_long_table_stays_finite() {
        let xs: Vec<f64> = (0..200u32).map(f64::from).collect();

        // higher differences of a line vanish exactly, so the ends are reproduced exactly
        let line: Vec<f64> = xs.iter().map(|x| 0.5 * x + 1.0).collect();
        let p = build(&xs, &line).unwrap();
        assert_eq!(p.evaluate(0.0), 1.0);
        assert_eq!(p.evaluate(199.0), 100.5);
        assert_relative_eq!(p.evaluate(42.5), 22.25, epsilon = 1e-12);

        let wave: Vec<f64> = xs.iter().map(|x| x.sin()).collect();
        let p = build(&xs, &wave).unwrap();
        for x in [0.0, 0.5, 99.0, 150.25, 199.0] {
            assert!(p.evaluate(x).is_finite(), "gauss({x}) is not finite");
        }
    }

    #[test]
    fn test_rejects_non_uniform() {
        let err = build(&[0.0, 1.0, 3.0, 4.0], &[0.0, 1.0, 9.0, 16.0]).unwrap_err();
        assert!(matches!(
            err,
            InterpError::UnsupportedSpacing { strategy: NAME, .. }
        ));
    }
}
