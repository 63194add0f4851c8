//! Input validation for equilibrium configuration and data.
//!
//! ## Purpose
//!
//! This module validates the caller-supplied dataset and engine parameters
//! before any computation begins. Every error condition in the crate is
//! detected here, eagerly, at or before loop entry; the iteration loop
//! itself cannot fail.
//!
//! ## Design notes
//!
//! * Validation is fail-fast: returns on the first violation found.
//! * Error messages include the offending values for debugging.
//! * Checks are ordered from cheap to expensive.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Validated parameters
//!
//! * **Input data**: Non-empty, all values finite
//! * **Tolerance**: Positive and finite
//! * **Iteration limit**: At least 1
//! * **Builder hygiene**: No parameter set more than once
//!
//! ## Key concepts
//!
//! ### Finite Value Checks
//!
//! A NaN or infinity anywhere in the input would silently poison every
//! downstream mean/median/mode computation, so non-finite values are
//! rejected at entry rather than propagated.
//!
//! ### Iteration Limit
//!
//! Convergence is not proven for arbitrary inputs, so the loop must carry a
//! positive bound. A zero bound would make every run vacuously
//! non-convergent and is rejected.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//! * A dataset accepted here is safe for the math layer without rechecks.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.
//! * This module does not perform the iteration itself.
//!
//! ## Visibility
//!
//! Internal detail used by the builder and engine; not part of the stable
//! public API.

#[cfg(not(feature = "std"))]
use alloc::format;

use crate::primitives::errors::EquilibriumError;
use num_traits::Float;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for engine configuration and input data.
///
/// Provides static methods returning `Result<(), EquilibriumError>` that
/// fail fast on the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate the initial dataset: non-empty and all-finite.
    pub fn validate_inputs<T: Float>(data: &[T]) -> Result<(), EquilibriumError> {
        // Check 1: Non-empty
        if data.is_empty() {
            return Err(EquilibriumError::EmptyInput);
        }

        // Check 2: All values finite
        for (i, &v) in data.iter().enumerate() {
            if !v.is_finite() {
                return Err(EquilibriumError::NonFiniteValue(format!(
                    "data[{}]={}",
                    i,
                    v.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the convergence tolerance (epsilon).
    pub fn validate_tolerance<T: Float>(epsilon: T) -> Result<(), EquilibriumError> {
        if !epsilon.is_finite() || epsilon <= T::zero() {
            return Err(EquilibriumError::InvalidTolerance(
                epsilon.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the iteration limit.
    pub fn validate_iteration_limit(limit: usize) -> Result<(), EquilibriumError> {
        if limit == 0 {
            return Err(EquilibriumError::InvalidIterationLimit(limit));
        }
        Ok(())
    }

    /// Validate that no builder parameter was set multiple times.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), EquilibriumError> {
        if let Some(parameter) = duplicate_param {
            return Err(EquilibriumError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
