//! Running every strategy against one sample table.

use rayon::prelude::*;

use crate::differences::DifferenceTable;
use crate::error::{InterpError, InterpResult};
use crate::result::{InterpolationResult, ResultEntity};
use crate::spacing::DEFAULT_SPACING_TOLERANCE;
use crate::strategy::Strategy;
use crate::table::SampleTable;

/// Settings for an interpolation run.
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationConfig {
    /// Spread of x gaps below which spacing counts as uniform.
    pub spacing_tolerance: f64,
    /// Strategies to run, in result order.
    pub strategies: Vec<Strategy>,
    /// Run the strategies on the rayon thread pool.
    pub parallel: bool,
}

impl Default for InterpolationConfig {
    fn default() -> Self {
        Self {
            spacing_tolerance: DEFAULT_SPACING_TOLERANCE,
            strategies: Strategy::DEFAULT.to_vec(),
            parallel: false,
        }
    }
}

impl InterpolationConfig {
    /// Checks that the settings can drive a run.
    pub fn validate(&self) -> InterpResult<()> {
        if !self.spacing_tolerance.is_finite() || self.spacing_tolerance <= 0.0 {
            return Err(InterpError::invalid_input(format!(
                "spacing tolerance must be finite and > 0, got {}",
                self.spacing_tolerance
            )));
        }
        if self.strategies.is_empty() {
            return Err(InterpError::invalid_input("no strategies selected"));
        }
        Ok(())
    }
}

/// Configurable interpolation runner.
///
/// # Example
///
/// ```rust
/// use polyterp_math::{Interpolation, Strategy};
///
/// let result = Interpolation::new()
///     .with_strategies(&[Strategy::Lagrange, Strategy::Gauss])
///     .run_points(&[0.0, 1.0, 2.0], &[1.0, 0.0, 1.0])
///     .unwrap();
///
/// assert_eq!(result.entities().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Interpolation {
    config: InterpolationConfig,
}

impl Interpolation {
    /// Creates a runner with the default Lagrange, Newton, Gauss order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a runner from explicit settings.
    pub fn with_config(config: InterpolationConfig) -> Self {
        Self { config }
    }

    /// Sets the spacing tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config.spacing_tolerance = tolerance;
        self
    }

    /// Sets the strategies to run.
    #[must_use]
    pub fn with_strategies(mut self, strategies: &[Strategy]) -> Self {
        self.config.strategies = strategies.to_vec();
        self
    }

    /// Enables or disables running strategies in parallel.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// The active settings.
    pub fn config(&self) -> &InterpolationConfig {
        &self.config
    }

    /// Copies and sorts raw samples, then runs every strategy.
    ///
    /// # Errors
    ///
    /// Fails if the samples do not form a valid [`SampleTable`] (too few
    /// points, duplicate or non-finite values) or the settings are invalid.
    pub fn run_points(&self, xs: &[f64], ys: &[f64]) -> InterpResult<InterpolationResult> {
        let table = SampleTable::new(xs, ys)?;
        self.run(table)
    }

    /// Runs every strategy against a sample table.
    pub fn run(&self, table: SampleTable) -> InterpResult<InterpolationResult> {
        self.config.validate()?;

        let differences = DifferenceTable::build(&table);
        let tolerance = self.config.spacing_tolerance;

        log::debug!(
            "interpolating {} samples with {} strategies (parallel: {})",
            table.len(),
            self.config.strategies.len(),
            self.config.parallel
        );

        let entities: Vec<ResultEntity> = if self.config.parallel {
            self.config
                .strategies
                .par_iter()
                .map(|s| s.process(&table, &differences, tolerance))
                .collect()
        } else {
            self.config
                .strategies
                .iter()
                .map(|s| s.process(&table, &differences, tolerance))
                .collect()
        };

        Ok(InterpolationResult::new(table, differences, entities))
    }
}

/// Interpolates raw samples with the default settings.
///
/// Sorts the samples by x, builds the difference table and runs Lagrange,
/// Newton and Gauss in that order.
///
/// ```rust
/// let result = polyterp_math::interpolate(
///     &[0.1, 0.2, 0.3, 0.4, 0.5],
///     &[1.25, 2.38, 3.79, 5.44, 7.14],
/// )
/// .unwrap();
///
/// assert!(result.entities().iter().all(|e| e.is_success()));
/// ```
pub fn interpolate(xs: &[f64], ys: &[f64]) -> InterpResult<InterpolationResult> {
    Interpolation::new().run_points(xs, ys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        let result = interpolate(&[0.0, 1.0, 2.0, 3.0], &[1.0, 3.0, 2.0, 5.0]).unwrap();
        let names: Vec<&str> = result.entities().iter().map(ResultEntity::name).collect();
        assert_eq!(
            names,
            vec!["lagrange polynom", "newton polynom (eq dist)", "gauss polynom"]
        );
    }

    #[test]
    fn test_failure_does_not_short_circuit() {
        let result = Interpolation::new()
            .with_strategies(&[Strategy::Gauss, Strategy::Lagrange])
            .run_points(&[0.0, 1.0, 3.0, 4.0], &[0.0, 1.0, 9.0, 16.0])
            .unwrap();

        assert!(!result.entities()[0].is_success());
        assert!(result.entities()[1].is_success());
        assert_eq!(result.functions().count(), 1);
    }

    #[test]
    fn test_structural_errors_fail_run() {
        assert!(matches!(
            interpolate(&[1.0], &[2.0]),
            Err(InterpError::InsufficientData { .. })
        ));
        assert!(matches!(
            interpolate(&[1.0, 2.0, 1.0], &[2.0, 3.0, 4.0]),
            Err(InterpError::DuplicateAbscissa { .. })
        ));
    }

    #[test]
    fn test_invalid_config() {
        let run = Interpolation::new()
            .with_tolerance(0.0)
            .run_points(&[0.0, 1.0], &[0.0, 1.0]);
        assert!(matches!(run, Err(InterpError::InvalidInput { .. })));

        let run = Interpolation::new()
            .with_strategies(&[])
            .run_points(&[0.0, 1.0], &[0.0, 1.0]);
        assert!(run.is_err());
    }

    #[test]
    fn test_tolerance_changes_dispatch() {
        let xs = [0.0, 1.0, 2.01];
        let ys = [0.0, 1.0, 4.0];

        let strict = Interpolation::new().run_points(&xs, &ys).unwrap();
        assert_eq!(strict.entities()[1].name(), "newton polynom (non eq dist)");
        assert!(!strict.entities()[2].is_success());

        let loose = Interpolation::new().with_tolerance(0.1).run_points(&xs, &ys).unwrap();
        assert_eq!(loose.entities()[1].name(), "newton polynom (eq dist)");
        assert!(loose.entities()[2].is_success());
    }

    #[test]
    fn test_explicit_config() {
        let config = InterpolationConfig {
            spacing_tolerance: 0.1,
            strategies: vec![Strategy::Gauss, Strategy::NewtonEqual],
            parallel: false,
        };
        let runner = Interpolation::with_config(config.clone());
        assert_eq!(runner.config(), &config);

        let result = runner.run_points(&[0.0, 1.0, 2.01], &[0.0, 1.0, 4.0]).unwrap();
        let names: Vec<&str> = result.entities().iter().map(ResultEntity::name).collect();
        assert_eq!(names, vec!["gauss polynom", "newton polynom (eq dist)"]);
        assert!(result.entities().iter().all(ResultEntity::is_success));

        let empty = Interpolation::with_config(InterpolationConfig {
            strategies: Vec::new(),
            ..config
        });
        assert!(empty.run_points(&[0.0, 1.0], &[0.0, 1.0]).is_err());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let xs = [0.1, 0.2, 0.3, 0.4, 0.5];
        let ys = [1.25, 2.38, 3.79, 5.44, 7.14];
        let sequential = Interpolation::new()
            .with_strategies(&Strategy::ALL)
            .run_points(&xs, &ys)
            .unwrap();
        let parallel = Interpolation::new()
            .with_strategies(&Strategy::ALL)
            .with_parallel(true)
            .run_points(&xs, &ys)
            .unwrap();

        assert_eq!(sequential.entities().len(), parallel.entities().len());
        for (a, b) in sequential.entities().iter().zip(parallel.entities()) {
            assert_eq!(a.name(), b.name());
            let (fa, fb) = (a.function().unwrap(), b.function().unwrap());
            for x in [0.0, 0.27, 0.8] {
                assert_eq!(fa.at(x), fb.at(x));
            }
        }
    }
}
