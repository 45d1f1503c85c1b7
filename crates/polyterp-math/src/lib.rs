//! # Polyterp Math
//!
//! Polynomial interpolation of small (x, y) sample tables.
//!
//! This crate provides:
//!
//! - **Sample tables**: validated, x-sorted observations ([`SampleTable`])
//! - **Finite differences**: the triangular forward-difference table ([`DifferenceTable`])
//! - **Spacing classification**: uniform-grid detection ([`spacing::is_equal_dist`])
//! - **Polynomials**: Lagrange, Newton (equal and non-equal spacing) and Gauss interpolants
//! - **Orchestration**: running every strategy and collecting one result per strategy
//!
//! ## Example
//!
//! ```rust
//! use polyterp_math::prelude::*;
//!
//! let result = interpolate(&[0.0, 1.0, 2.0, 3.0, 4.0], &[0.0, 1.0, 4.0, 9.0, 16.0]).unwrap();
//!
//! for entity in result.entities() {
//!     match entity {
//!         ResultEntity::Success { name, function } => {
//!             // Extrapolating beyond the samples is allowed
//!             let y = function.at(5.0);
//!             assert!((y - 25.0).abs() < 1e-9, "{name}");
//!         }
//!         ResultEntity::Error { name, error } => panic!("{name}: {error}"),
//!     }
//! }
//! ```
//!
//! ## Error Model
//!
//! Malformed input (fewer than two samples, repeated or non-finite values)
//! fails the whole call with an [`InterpError`]. A strategy that cannot handle
//! otherwise valid data, such as Gauss on non-uniform spacing, is reported as
//! a [`ResultEntity::Error`] while the remaining strategies still run.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::float_cmp)]
#![allow(clippy::return_self_not_must_use)]

pub mod differences;
pub mod error;
pub mod orchestrator;
pub mod polynomial;
pub mod result;
pub mod spacing;
pub mod strategy;
pub mod table;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::differences::DifferenceTable;
    pub use crate::error::{InterpError, InterpResult};
    pub use crate::orchestrator::{interpolate, Interpolation, InterpolationConfig};
    pub use crate::polynomial::{
        GaussPolynomial, Interpolant, LagrangePolynomial, NewtonDividedPolynomial,
        NewtonEqualPolynomial,
    };
    pub use crate::result::{InterpolationResult, NamedFunction, ResultEntity};
    pub use crate::spacing::{is_equal_dist, DEFAULT_SPACING_TOLERANCE};
    pub use crate::strategy::Strategy;
    pub use crate::table::SampleTable;
}

pub use differences::DifferenceTable;
pub use error::{InterpError, InterpResult};
pub use orchestrator::{interpolate, Interpolation, InterpolationConfig};
pub use result::{InterpolationResult, NamedFunction, ResultEntity};
pub use strategy::Strategy;
pub use table::SampleTable;
