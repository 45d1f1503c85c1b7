//! Interpolation results.

use std::fmt;
use std::sync::Arc;

use crate::differences::DifferenceTable;
use crate::error::InterpError;
use crate::polynomial::Interpolant;
use crate::table::SampleTable;

/// A label paired with an interpolating function.
///
/// Cloning is cheap and shares the underlying interpolant.
#[derive(Clone)]
pub struct NamedFunction {
    name: String,
    interpolant: Arc<dyn Interpolant>,
}

impl NamedFunction {
    /// Wraps an interpolant under a display name.
    pub fn new(name: impl Into<String>, interpolant: impl Interpolant + 'static) -> Self {
        Self {
            name: name.into(),
            interpolant: Arc::new(interpolant),
        }
    }

    /// The function's label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evaluates the function at x. Defined for every x, including outside
    /// the sampled range.
    pub fn at(&self, x: f64) -> f64 {
        self.interpolant.evaluate(x)
    }

    /// Evaluates the function at every point of `xs`.
    pub fn at_many(&self, xs: &[f64]) -> Vec<f64> {
        self.interpolant.evaluate_many(xs)
    }

    /// True if evaluating at x would extrapolate.
    pub fn extrapolates(&self, x: f64) -> bool {
        !self.interpolant.in_range(x)
    }
}

impl fmt::Debug for NamedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedFunction")
            .field("name", &self.name)
            .field("interpolant", &self.interpolant)
            .finish()
    }
}

/// Outcome of one strategy.
#[derive(Debug, Clone)]
pub enum ResultEntity {
    /// The strategy produced a function.
    Success {
        /// Strategy result name, e.g. `"gauss polynom"`.
        name: String,
        /// The interpolating function.
        function: NamedFunction,
    },
    /// The strategy could not be applied to this table.
    Error {
        /// Strategy result name.
        name: String,
        /// Why the strategy failed.
        error: InterpError,
    },
}

impl ResultEntity {
    /// Wraps a function as a success named after it.
    pub fn success(function: NamedFunction) -> Self {
        Self::Success {
            name: function.name().to_string(),
            function,
        }
    }

    /// Creates a failure entity.
    pub fn error(name: impl Into<String>, error: InterpError) -> Self {
        Self::Error {
            name: name.into(),
            error,
        }
    }

    /// The entity's name, whichever variant it is.
    pub fn name(&self) -> &str {
        match self {
            Self::Success { name, .. } | Self::Error { name, .. } => name,
        }
    }

    /// True for the success variant.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The function, if the strategy succeeded.
    pub fn function(&self) -> Option<&NamedFunction> {
        match self {
            Self::Success { function, .. } => Some(function),
            Self::Error { .. } => None,
        }
    }

    /// The failure, if the strategy failed.
    pub fn failure(&self) -> Option<&InterpError> {
        match self {
            Self::Success { .. } => None,
            Self::Error { error, .. } => Some(error),
        }
    }
}

/// Everything one interpolation run produced.
#[derive(Debug, Clone)]
pub struct InterpolationResult {
    table: SampleTable,
    differences: DifferenceTable,
    entities: Vec<ResultEntity>,
}

impl InterpolationResult {
    pub(crate) fn new(
        table: SampleTable,
        differences: DifferenceTable,
        entities: Vec<ResultEntity>,
    ) -> Self {
        Self {
            table,
            differences,
            entities,
        }
    }

    /// The sorted sample table.
    pub fn table(&self) -> &SampleTable {
        &self.table
    }

    /// The finite difference table of the samples.
    pub fn differences(&self) -> &DifferenceTable {
        &self.differences
    }

    /// One entity per strategy, in run order.
    pub fn entities(&self) -> &[ResultEntity] {
        &self.entities
    }

    /// Successful functions only, in run order.
    pub fn functions(&self) -> impl Iterator<Item = &NamedFunction> {
        self.entities.iter().filter_map(ResultEntity::function)
    }

    /// Looks up an entity by name.
    pub fn entity(&self, name: &str) -> Option<&ResultEntity> {
        self.entities.iter().find(|e| e.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polynomial::LagrangePolynomial;

    #[test]
    fn test_entity_accessors() {
        let table = SampleTable::new(&[0.0, 1.0], &[1.0, 3.0]).unwrap();
        let ok = ResultEntity::success(NamedFunction::new(
            "lagrange polynom",
            LagrangePolynomial::new(&table),
        ));
        assert!(ok.is_success());
        assert_eq!(ok.name(), "lagrange polynom");
        assert!(ok.failure().is_none());

        let f = ok.function().unwrap();
        assert!((f.at(0.5) - 2.0).abs() < 1e-12);
        assert!(f.extrapolates(2.0));
        assert!(!f.extrapolates(0.5));

        let err = ResultEntity::error(
            "gauss polynom",
            InterpError::unsupported_spacing("gauss polynom", 1.0, 2.0),
        );
        assert!(!err.is_success());
        assert!(err.function().is_none());
        assert_eq!(err.name(), "gauss polynom");
    }

    #[test]
    fn test_shared_function_clone() {
        let table = SampleTable::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
        let f = NamedFunction::new("p", LagrangePolynomial::new(&table));
        let g = f.clone();
        assert_eq!(f.at(3.0), g.at(3.0));
        assert_eq!(f.at_many(&[0.0, 2.0]), vec![f.at(0.0), f.at(2.0)]);
    }
}
