//! Execution engine for the equilibrium iteration.
//!
//! ## Purpose
//!
//! This module drives the fixed-point loop: extract the (mean, median,
//! mode) triple of the current dataset, record it, test convergence, and
//! feed the triple forward as the next dataset. It is the central component
//! coordinating the math layer into a result.
//!
//! ## Design notes
//!
//! * The executor assumes validated input (non-empty, all finite); the
//!   validator runs before it, at the API layer.
//! * Each call to [`EquilibriumExecutor::run`] is independent and
//!   side-effect free; the trace is exclusively owned by the invocation, so
//!   concurrent calls need no coordination.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Key concepts
//!
//! ### Execution flow
//!
//! 1. Let the current dataset be the caller's input (arbitrary length >= 1).
//! 2. Compute mean, median, mode, and the triple's spread.
//! 3. Append an [`IterationRecord`] to the trace.
//! 4. If `spread < epsilon` (strict), stop: the run converged and the final
//!    value is the arithmetic mean of the triple.
//! 5. Otherwise the next dataset is exactly `[mean, median, mode]`.
//! 6. If the iteration limit is exhausted, stop with a `NotConverged`
//!    outcome carrying the trace produced so far.
//!
//! ### Strict convergence boundary
//!
//! A spread exactly equal to epsilon does not converge. This boundary is
//! observable in traces and must be preserved exactly.
//!
//! ## Invariants
//!
//! * The trace holds between 1 and `max_iterations` records, indexed
//!   contiguously from 0.
//! * After the first round every dataset has exactly 3 elements, in
//!   [mean, median, mode] order.
//! * No termination path exists other than convergence and the iteration
//!   limit.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not detect oscillation or stagnation; non-convergent
//!   cycles terminate via the iteration limit.
//! * This module does not render results (handled by `output`).
//!
//! ## Visibility
//!
//! [`EquilibriumExecutor`] is reachable through the prelude for callers that
//! want to bypass the builder, but the `api` layer is the primary interface.

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::engine::output::{EquilibriumResult, IterationRecord, NotConvergedReason, Outcome};
use crate::math::stats;

use num_traits::Float;

// ============================================================================
// Executor
// ============================================================================

/// The equilibrium iteration loop.
///
/// Holds the convergence tolerance and the iteration bound; `run` executes
/// the loop over a validated dataset.
#[derive(Debug, Clone, Copy)]
pub struct EquilibriumExecutor<T: Float> {
    /// Convergence tolerance (strictly positive).
    pub epsilon: T,

    /// Maximum number of iterations before giving up (at least 1).
    pub max_iterations: usize,
}

impl<T: Float> EquilibriumExecutor<T> {
    /// Create an executor with the given tolerance and iteration bound.
    ///
    /// Parameters are assumed validated (epsilon finite and > 0, limit >= 1).
    pub fn new(epsilon: T, max_iterations: usize) -> Self {
        Self {
            epsilon,
            max_iterations,
        }
    }

    /// Test the strict spread-based convergence condition.
    pub fn check_convergence(&self, spread: T) -> bool {
        spread < self.epsilon
    }

    /// Run the equilibrium iteration over a validated dataset.
    pub fn run(&self, data: &[T]) -> EquilibriumResult<T> {
        let mut trace: Vec<IterationRecord<T>> = Vec::new();
        let mut current: Vec<T> = data.to_vec();

        for index in 0..self.max_iterations {
            let mean = stats::mean(&current);
            let median = stats::median(&current);
            let mode = stats::mode(&current);
            let spread = stats::spread(mean, median, mode);

            trace.push(IterationRecord {
                index,
                mean,
                median,
                mode,
                spread,
            });

            if self.check_convergence(spread) {
                let value = (mean + median + mode) / T::from(3.0).unwrap();
                return EquilibriumResult {
                    outcome: Outcome::Converged { value },
                    trace,
                    epsilon: self.epsilon,
                };
            }

            // The triple, in exactly this order, is the next dataset.
            current = vec![mean, median, mode];
        }

        EquilibriumResult {
            outcome: Outcome::NotConverged {
                reason: NotConvergedReason::IterationLimitExceeded,
            },
            trace,
            epsilon: self.epsilon,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_element_converges_immediately() {
        let executor = EquilibriumExecutor::new(1e-3, 100);
        let result = executor.run(&[5.0]);

        assert_eq!(result.final_value(), Some(5.0));
        assert_eq!(result.trace.len(), 1);
        assert_eq!(result.trace[0].spread, 0.0);
    }

    #[test]
    fn test_trace_indices_contiguous() {
        let executor = EquilibriumExecutor::new(1e-9, 7);
        let result = executor.run(&[1.0, 2.0, 2.0, 9.0]);

        for (i, record) in result.trace.iter().enumerate() {
            assert_eq!(record.index, i);
        }
    }

    #[test]
    fn test_iteration_limit_yields_not_converged() {
        // Epsilon far below reachable spread, tiny limit.
        let executor = EquilibriumExecutor::new(1e-300, 3);
        let result = executor.run(&[1.0, 2.0, 2.0, 9.0]);

        assert!(!result.is_converged());
        assert_eq!(
            result.outcome,
            Outcome::NotConverged {
                reason: NotConvergedReason::IterationLimitExceeded
            }
        );
        assert_eq!(result.trace.len(), 3);
    }

    #[test]
    fn test_spread_equal_to_epsilon_does_not_converge() {
        // Triple of [1, 2, 2] is (5/3, 2, 2); spread is 2 - 5/3.
        let data = [1.0_f64, 2.0, 2.0];
        let spread = 2.0 - (1.0 + 2.0 + 2.0) / 3.0;

        let at_boundary = EquilibriumExecutor::new(spread, 1).run(&data);
        assert!(!at_boundary.is_converged());

        let just_above = EquilibriumExecutor::new(spread * (1.0 + 1e-15), 1).run(&data);
        assert!(just_above.is_converged());
    }

    #[test]
    fn test_next_dataset_is_previous_triple() {
        let executor = EquilibriumExecutor::new(1e-12, 2);
        let result = executor.run(&[1.0, 2.0, 2.0, 9.0]);

        // Record 1 must be the statistics of [mean0, median0, mode0].
        let r0 = result.trace[0];
        let triple = [r0.mean, r0.median, r0.mode];
        let r1 = result.trace[1];
        assert_eq!(r1.mean, stats::mean(&triple));
        assert_eq!(r1.median, stats::median(&triple));
        assert_eq!(r1.mode, stats::mode(&triple));
    }

    #[test]
    fn test_final_value_is_mean_of_last_triple() {
        let executor = EquilibriumExecutor::new(1e-3, 100);
        let result = executor.run(&[14.0, 15.0, 15.0, 16.0, 16.0, 16.0, 17.0, 18.0]);

        let last = result.trace.last().copied().unwrap();
        let expected = (last.mean + last.median + last.mode) / 3.0;
        assert_eq!(result.final_value(), Some(expected));
    }
}
