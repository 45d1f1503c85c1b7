//! Uniform spacing detection.

/// Default tolerance on the spread between the largest and smallest gap.
pub const DEFAULT_SPACING_TOLERANCE: f64 = 1e-5;

/// Smallest and largest gap between consecutive x values.
///
/// Returns `None` for fewer than two values.
pub fn gap_range(xs: &[f64]) -> Option<(f64, f64)> {
    xs.windows(2)
        .map(|w| w[1] - w[0])
        .fold(None, |acc, gap| match acc {
            None => Some((gap, gap)),
            Some((lo, hi)) => Some((lo.min(gap), hi.max(gap))),
        })
}

/// Returns true if consecutive gaps of the sorted `xs` differ by less than `tolerance`.
///
/// # Example
///
/// ```rust
/// use polyterp_math::spacing::{is_equal_dist, DEFAULT_SPACING_TOLERANCE};
///
/// assert!(is_equal_dist(&[0.0, 1.0, 2.0, 3.0, 4.0], DEFAULT_SPACING_TOLERANCE));
/// assert!(!is_equal_dist(&[0.0, 1.0, 2.0, 5.0, 8.0], DEFAULT_SPACING_TOLERANCE));
/// ```
pub fn is_equal_dist(xs: &[f64], tolerance: f64) -> bool {
    gap_range(xs).is_some_and(|(lo, hi)| hi - lo < tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform() {
        assert!(is_equal_dist(&[0.0, 1.0, 2.0, 3.0, 4.0], DEFAULT_SPACING_TOLERANCE));
        assert!(is_equal_dist(&[0.1, 0.2, 0.3, 0.4, 0.5], DEFAULT_SPACING_TOLERANCE));
        assert!(is_equal_dist(&[2.0, 7.0], DEFAULT_SPACING_TOLERANCE));
    }

    #[test]
    fn test_non_uniform() {
        assert!(!is_equal_dist(&[0.0, 1.0, 2.0, 5.0, 8.0], DEFAULT_SPACING_TOLERANCE));
        assert!(!is_equal_dist(&[0.0, 1.0, 3.0, 4.0], DEFAULT_SPACING_TOLERANCE));
    }

    #[test]
    fn test_tolerance_boundary() {
        let xs = [0.0, 1.0, 2.001];
        assert!(!is_equal_dist(&xs, DEFAULT_SPACING_TOLERANCE));
        assert!(is_equal_dist(&xs, 1e-2));
    }

    #[test]
    fn test_gap_range() {
        assert_eq!(gap_range(&[0.0, 1.0, 3.0, 4.0]), Some((1.0, 2.0)));
        assert_eq!(gap_range(&[1.0]), None);
        assert!(!is_equal_dist(&[1.0], DEFAULT_SPACING_TOLERANCE));
    }
}
