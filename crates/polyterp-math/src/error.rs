//! Error types for interpolation.

use thiserror::Error;

/// A specialized Result type for interpolation operations.
pub type InterpResult<T> = Result<T, InterpError>;

/// Errors that can occur while building or running interpolants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterpError {
    /// Insufficient data points for the operation.
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData {
        /// Minimum required points.
        required: usize,
        /// Actual number of points.
        actual: usize,
    },

    /// The same x value appears more than once, so a divisor would be zero.
    #[error("Duplicate x value {x}: interpolation would divide by zero")]
    DuplicateAbscissa {
        /// The repeated x value.
        x: f64,
    },

    /// The strategy needs uniformly spaced x values.
    #[error(
        "Non-uniform spacing unsupported by {strategy}: gaps range from {min_gap:.6e} to {max_gap:.6e}"
    )]
    UnsupportedSpacing {
        /// Name of the strategy that rejected the data.
        strategy: &'static str,
        /// Smallest gap between consecutive x values.
        min_gap: f64,
        /// Largest gap between consecutive x values.
        max_gap: f64,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl InterpError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }

    /// Creates an unsupported spacing error.
    #[must_use]
    pub fn unsupported_spacing(strategy: &'static str, min_gap: f64, max_gap: f64) -> Self {
        Self::UnsupportedSpacing {
            strategy,
            min_gap,
            max_gap,
        }
    }
}
