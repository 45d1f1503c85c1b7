//! The closed set of interpolation strategies.

use std::fmt;

use crate::differences::DifferenceTable;
use crate::polynomial::{
    gauss, lagrange, newton_divided, newton_equal, GaussPolynomial, LagrangePolynomial,
    NewtonDividedPolynomial, NewtonEqualPolynomial,
};
use crate::result::{NamedFunction, ResultEntity};
use crate::spacing::is_equal_dist;
use crate::table::SampleTable;

/// Interpolation strategies.
///
/// Every strategy turns a sample table and its difference table into exactly
/// one [`ResultEntity`]. Failures that only concern one strategy (such as
/// Gauss on non-uniform data) come back as [`ResultEntity::Error`], never as
/// a panic or an `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Lagrange basis polynomial.
    Lagrange,
    /// Picks [`Strategy::NewtonEqual`] or [`Strategy::NewtonNonEqual`] by spacing.
    Newton,
    /// Newton forward/backward differences, uniform spacing only.
    NewtonEqual,
    /// Newton divided differences.
    NewtonNonEqual,
    /// Gauss central differences, uniform spacing only.
    Gauss,
}

impl Strategy {
    /// The default run order: Lagrange, Newton, Gauss.
    pub const DEFAULT: [Strategy; 3] = [Strategy::Lagrange, Strategy::Newton, Strategy::Gauss];

    /// Every strategy, dispatcher included.
    pub const ALL: [Strategy; 5] = [
        Strategy::Lagrange,
        Strategy::Newton,
        Strategy::NewtonEqual,
        Strategy::NewtonNonEqual,
        Strategy::Gauss,
    ];

    /// The strategy's own name.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Lagrange => "lagrange interpolator",
            Strategy::Newton => "newton interpolator",
            Strategy::NewtonEqual => "newton interpolator with equal distance",
            Strategy::NewtonNonEqual => "newton interpolator with non equal distance",
            Strategy::Gauss => "gauss interpolator",
        }
    }

    /// Parses a strategy from a short name such as `"gauss"` or `"newton-equal"`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().replace('_', "-").as_str() {
            "lagrange" => Some(Strategy::Lagrange),
            "newton" => Some(Strategy::Newton),
            "newton-equal" | "newton-eq" => Some(Strategy::NewtonEqual),
            "newton-non-equal" | "newton-divided" => Some(Strategy::NewtonNonEqual),
            "gauss" => Some(Strategy::Gauss),
            _ => None,
        }
    }

    /// Runs the strategy against a table and its differences.
    ///
    /// `tolerance` is handed to the spacing classifier wherever the strategy
    /// depends on uniform spacing.
    pub fn process(
        self,
        table: &SampleTable,
        differences: &DifferenceTable,
        tolerance: f64,
    ) -> ResultEntity {
        let entity = match self {
            Strategy::Lagrange => ResultEntity::success(NamedFunction::new(
                lagrange::NAME,
                LagrangePolynomial::new(table),
            )),
            Strategy::Newton => {
                let inner = if is_equal_dist(table.xs(), tolerance) {
                    Strategy::NewtonEqual
                } else {
                    Strategy::NewtonNonEqual
                };
                log::debug!("{} delegating to {}", self.name(), inner.name());
                inner.process(table, differences, tolerance)
            }
            Strategy::NewtonEqual => {
                match NewtonEqualPolynomial::new(table, differences, tolerance) {
                    Ok(p) => ResultEntity::success(NamedFunction::new(newton_equal::NAME, p)),
                    Err(e) => ResultEntity::error(newton_equal::NAME, e),
                }
            }
            Strategy::NewtonNonEqual => ResultEntity::success(NamedFunction::new(
                newton_divided::NAME,
                NewtonDividedPolynomial::new(table),
            )),
            Strategy::Gauss => match GaussPolynomial::new(table, differences, tolerance) {
                Ok(p) => ResultEntity::success(NamedFunction::new(gauss::NAME, p)),
                Err(e) => ResultEntity::error(gauss::NAME, e),
            },
        };

        if let ResultEntity::Error { name, error } = &entity {
            log::debug!("{name} failed: {error}");
        }
        entity
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
