//! Sample tables: validated, x-sorted (x, y) observations.

use crate::error::{InterpError, InterpResult};

/// Minimum number of samples any interpolant needs.
pub const MIN_SAMPLES: usize = 2;

/// An immutable table of (x, y) samples sorted ascending by x.
///
/// Construction copies the input, sorts it by x and checks that every
/// value is finite and every x is distinct. Once built the table never
/// changes, so interpolants derived from it can hold their own copies
/// without coordination.
///
/// # Example
///
/// ```rust
/// use polyterp_math::SampleTable;
///
/// let table = SampleTable::new(&[0.3, 0.1, 0.2], &[9.0, 1.0, 4.0]).unwrap();
/// assert_eq!(table.xs(), &[0.1, 0.2, 0.3]);
/// assert_eq!(table.ys(), &[1.0, 4.0, 9.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SampleTable {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl SampleTable {
    /// Creates a sample table from parallel x and y slices.
    ///
    /// # Errors
    ///
    /// - [`InterpError::InvalidInput`] if lengths differ or a value is not finite.
    /// - [`InterpError::InsufficientData`] for fewer than two samples.
    /// - [`InterpError::DuplicateAbscissa`] if an x value repeats.
    pub fn new(xs: &[f64], ys: &[f64]) -> InterpResult<Self> {
        if xs.len() != ys.len() {
            return Err(InterpError::invalid_input(format!(
                "xs and ys must have same length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }
        Self::from_points(xs.iter().copied().zip(ys.iter().copied()))
    }

    /// Creates a sample table from (x, y) pairs in any order.
    pub fn from_points<I>(points: I) -> InterpResult<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut points: Vec<(f64, f64)> = points.into_iter().collect();

        if points.len() < MIN_SAMPLES {
            return Err(InterpError::insufficient_data(MIN_SAMPLES, points.len()));
        }
        if let Some(i) = points
            .iter()
            .position(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(InterpError::invalid_input(format!(
                "non-finite sample at position {i}: ({}, {})",
                points[i].0, points[i].1
            )));
        }

        points.sort_by(|a, b| a.0.total_cmp(&b.0));

        if let Some(pair) = points.windows(2).find(|w| w[1].0 <= w[0].0) {
            return Err(InterpError::DuplicateAbscissa { x: pair[0].0 });
        }

        let (xs, ys) = points.into_iter().unzip();
        Ok(Self { xs, ys })
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always false; a table holds at least two samples.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Sorted x values.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// y values, in x order.
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Iterates over (x, y) pairs in ascending x order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    /// Smallest x value.
    pub fn min_x(&self) -> f64 {
        self.xs[0]
    }

    /// Largest x value.
    pub fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }

    /// Distance between the first two x values.
    ///
    /// This is the step of the grid when the spacing is uniform.
    pub fn step(&self) -> f64 {
        self.xs[1] - self.xs[0]
    }
}
