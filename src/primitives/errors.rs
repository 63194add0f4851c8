//! Error types for equilibrium statistic computation.
//!
//! ## Purpose
//!
//! This module defines [`EquilibriumError`], the single error type surfaced
//! by validation. Every variant represents a local, recoverable-by-caller
//! condition detected eagerly before the iteration loop starts; nothing in
//! this crate aborts the process.
//!
//! ## Design notes
//!
//! * Errors carry the offending values for context-aware messages.
//! * `Display` is implemented over `core::fmt` so errors work under `no_std`.
//! * `std::error::Error` is implemented when the `std` feature is enabled.
//! * An exhausted iteration limit is *not* an error: it is reported as a
//!   `NotConverged` outcome on the result (see `engine::output`).
//!
//! ## Visibility
//!
//! [`EquilibriumError`] is part of the public API and is the error type of
//! the crate-wide `Result` alias.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Errors detectable before the equilibrium iteration begins.
#[derive(Debug, Clone, PartialEq)]
pub enum EquilibriumError {
    /// The initial dataset has zero elements.
    EmptyInput,

    /// An input value is NaN or infinite. The payload identifies the
    /// offending element as `data[i]=v`.
    NonFiniteValue(String),

    /// The convergence tolerance is not finite or not strictly positive.
    InvalidTolerance(f64),

    /// The iteration limit is zero; the bound must be a positive integer.
    InvalidIterationLimit(usize),

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

impl fmt::Display for EquilibriumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => {
                write!(f, "input dataset is empty; at least one value is required")
            }
            Self::NonFiniteValue(detail) => {
                write!(f, "input contains a non-finite value: {}", detail)
            }
            Self::InvalidTolerance(got) => {
                write!(
                    f,
                    "convergence tolerance must be finite and > 0, got {}",
                    got
                )
            }
            Self::InvalidIterationLimit(got) => {
                write!(f, "iteration limit must be >= 1, got {}", got)
            }
            Self::DuplicateParameter { parameter } => {
                write!(f, "parameter '{}' was set more than once", parameter)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EquilibriumError {}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_empty_input() {
        let msg = EquilibriumError::EmptyInput.to_string();
        assert!(msg.contains("empty"));
    }

    #[test]
    fn test_variants_compare_by_value() {
        assert_eq!(
            EquilibriumError::InvalidTolerance(-0.5),
            EquilibriumError::InvalidTolerance(-0.5)
        );
        assert_ne!(
            EquilibriumError::InvalidTolerance(0.0),
            EquilibriumError::InvalidTolerance(-1.0)
        );
        assert_ne!(
            EquilibriumError::EmptyInput,
            EquilibriumError::InvalidIterationLimit(0)
        );
    }

    #[test]
    fn test_display_carries_values() {
        let msg = EquilibriumError::InvalidTolerance(-0.5).to_string();
        assert!(msg.contains("-0.5"));

        let msg = EquilibriumError::NonFiniteValue("data[2]=NaN".into()).to_string();
        assert!(msg.contains("data[2]=NaN"));

        let msg = EquilibriumError::DuplicateParameter { parameter: "epsilon" }.to_string();
        assert!(msg.contains("epsilon"));
    }
}
