//! High-level API for equilibrium runs.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements
//! a fluent builder for configuring the convergence tolerance and iteration
//! bound, validates the configuration, and hands off to the engine.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are checked at `build()`, input data at `run()`.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create an [`Equilibrium`] builder via `Equilibrium::new()`.
//! 2. Chain configuration methods (`.epsilon()`, `.max_iterations()`).
//! 3. Call `.build()` to obtain a validated [`EquilibriumEngine`].
//! 4. Call `.run(&data)` as many times as needed; the engine is reusable
//!    and runs share no state.
//!
//! ### Defaults
//!
//! Epsilon defaults to `1e-3`. The iteration limit defaults to 1000, which
//! bounds even oscillating triples that never satisfy the strict spread
//! test.
//!
//! ## Visibility
//!
//! This is the primary public API. Types re-exported here are considered
//! stable.

use crate::engine::executor::EquilibriumExecutor;
use crate::engine::output::EquilibriumResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::EquilibriumError;

use core::result;
use num_traits::Float;

/// Result type alias for equilibrium operations.
pub type Result<T> = result::Result<T, EquilibriumError>;

/// Default convergence tolerance.
const DEFAULT_EPSILON: f64 = 1e-3;

/// Default iteration bound.
const DEFAULT_MAX_ITERATIONS: usize = 1000;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring an equilibrium run.
#[derive(Debug, Clone)]
pub struct Equilibrium<T> {
    /// Convergence tolerance (strictly positive).
    pub epsilon: Option<T>,

    /// Maximum number of iterations before giving up.
    pub max_iterations: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for Equilibrium<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Equilibrium<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            epsilon: None,
            max_iterations: None,
            duplicate_param: None,
        }
    }

    /// Set the convergence tolerance.
    pub fn epsilon(mut self, epsilon: T) -> Self {
        if self.epsilon.is_some() {
            self.duplicate_param = Some("epsilon");
        }
        self.epsilon = Some(epsilon);
        self
    }

    /// Set the iteration bound.
    pub fn max_iterations(mut self, limit: usize) -> Self {
        if self.max_iterations.is_some() {
            self.duplicate_param = Some("max_iterations");
        }
        self.max_iterations = Some(limit);
        self
    }

    /// Validate the configuration and build a reusable engine.
    pub fn build(self) -> Result<EquilibriumEngine<T>> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let epsilon = self
            .epsilon
            .unwrap_or_else(|| T::from(DEFAULT_EPSILON).unwrap());
        Validator::validate_tolerance(epsilon)?;

        let max_iterations = self.max_iterations.unwrap_or(DEFAULT_MAX_ITERATIONS);
        Validator::validate_iteration_limit(max_iterations)?;

        Ok(EquilibriumEngine {
            executor: EquilibriumExecutor::new(epsilon, max_iterations),
        })
    }
}

// ============================================================================
// Engine
// ============================================================================

/// A validated, reusable equilibrium engine.
#[derive(Debug, Clone, Copy)]
pub struct EquilibriumEngine<T: Float> {
    executor: EquilibriumExecutor<T>,
}

impl<T: Float> EquilibriumEngine<T> {
    /// Run the equilibrium iteration over `data`.
    ///
    /// Validates the dataset (non-empty, all finite), then iterates until
    /// the triple's spread falls strictly below epsilon or the iteration
    /// limit is reached.
    pub fn run(&self, data: &[T]) -> Result<EquilibriumResult<T>> {
        Validator::validate_inputs(data)?;
        Ok(self.executor.run(data))
    }

    /// The configured convergence tolerance.
    pub fn epsilon(&self) -> T {
        self.executor.epsilon
    }

    /// The configured iteration bound.
    pub fn max_iterations(&self) -> usize {
        self.executor.max_iterations
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let engine = Equilibrium::<f64>::new().build().unwrap();
        assert_eq!(engine.epsilon(), 1e-3);
        assert_eq!(engine.max_iterations(), 1000);
    }

    #[test]
    fn test_build_rejects_invalid_tolerance() {
        let err = Equilibrium::new().epsilon(0.0).build().unwrap_err();
        assert_eq!(err, EquilibriumError::InvalidTolerance(0.0));
    }

    #[test]
    fn test_build_rejects_zero_iteration_limit() {
        let err = Equilibrium::<f64>::new().max_iterations(0).build().unwrap_err();
        assert_eq!(err, EquilibriumError::InvalidIterationLimit(0));
    }

    #[test]
    fn test_build_rejects_duplicate_parameter() {
        let err = Equilibrium::new()
            .epsilon(1e-3)
            .epsilon(1e-4)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            EquilibriumError::DuplicateParameter {
                parameter: "epsilon"
            }
        );
    }

    #[test]
    fn test_run_rejects_empty_input() {
        let engine = Equilibrium::<f64>::new().build().unwrap();
        assert_eq!(engine.run(&[]).unwrap_err(), EquilibriumError::EmptyInput);
    }

    #[test]
    fn test_run_rejects_non_finite_input() {
        let engine = Equilibrium::new().build().unwrap();
        let err = engine.run(&[1.0, f64::NEG_INFINITY]).unwrap_err();
        assert!(matches!(err, EquilibriumError::NonFiniteValue(_)));
    }

    #[test]
    fn test_engine_is_reusable() {
        let engine = Equilibrium::new().build().unwrap();
        let a = engine.run(&[5.0]).unwrap();
        let b = engine.run(&[1.0, 2.0, 2.0]).unwrap();
        assert_eq!(a.final_value(), Some(5.0));
        assert!(b.iterations_used() >= 1);
    }
}
