//! Output types and result structures for equilibrium runs.
//!
//! ## Purpose
//!
//! This module defines the result of a run: the per-iteration trace, the
//! terminal outcome, and convenience queries. It also implements the
//! human-readable reporter: `Display` renders a summary plus the trace
//! table, and performs no computation affecting the result.
//!
//! ## Design notes
//!
//! * Records are appended once per iteration and never mutated afterward.
//! * A `NotConverged` outcome is a valid result variant, not an error; the
//!   caller decides whether to treat it as failure.
//! * Results are generic over `Float` types to support f32 and f64.
//! * `Display` elides the middle of long traces (first and last 10 rows).
//!
//! ## Invariants
//!
//! * Record indices are contiguous from 0.
//! * Each record's triple lies within [min, max] of that iteration's
//!   dataset, and its spread is non-negative.
//! * `final_value` is `Some` exactly when the run converged, and equals the
//!   arithmetic mean of the last recorded triple.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization logic.
//!
//! ## Visibility
//!
//! [`EquilibriumResult`] is part of the public API and is the primary result
//! type returned by the engine.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::fmt;
use num_traits::Float;

// ============================================================================
// Trace Records
// ============================================================================

/// One round of the equilibrium iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationRecord<T> {
    /// Zero-based iteration index.
    pub index: usize,

    /// Arithmetic mean of this round's dataset.
    pub mean: T,

    /// Median of this round's dataset.
    pub median: T,

    /// Mode of this round's dataset (smallest-on-tie, mean fallback).
    pub mode: T,

    /// Max pairwise absolute difference among the triple.
    pub spread: T,
}

// ============================================================================
// Outcome
// ============================================================================

/// Why a run stopped without converging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotConvergedReason {
    /// The iteration limit was reached before the spread dropped below
    /// epsilon.
    IterationLimitExceeded,
}

impl fmt::Display for NotConvergedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationLimitExceeded => write!(f, "iteration limit exceeded"),
        }
    }
}

/// Terminal state of an equilibrium run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome<T> {
    /// The spread fell strictly below epsilon. `value` is the arithmetic
    /// mean of the final (mean, median, mode) triple.
    Converged {
        /// The equilibrium statistic.
        value: T,
    },

    /// The run stopped without satisfying the convergence test.
    NotConverged {
        /// Why iteration stopped.
        reason: NotConvergedReason,
    },
}

// ============================================================================
// Result Structure
// ============================================================================

/// Complete result of an equilibrium run: outcome plus iteration trace.
#[derive(Debug, Clone, PartialEq)]
pub struct EquilibriumResult<T> {
    /// Terminal outcome of the run.
    pub outcome: Outcome<T>,

    /// Ordered per-iteration records, index 0 first.
    pub trace: Vec<IterationRecord<T>>,

    /// Convergence tolerance the run was tested against.
    pub epsilon: T,
}

impl<T: Float> EquilibriumResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Check whether the run converged.
    pub fn is_converged(&self) -> bool {
        matches!(self.outcome, Outcome::Converged { .. })
    }

    /// The equilibrium statistic, if the run converged.
    pub fn final_value(&self) -> Option<T> {
        match self.outcome {
            Outcome::Converged { value } => Some(value),
            Outcome::NotConverged { .. } => None,
        }
    }

    /// Number of iterations performed (records in the trace).
    pub fn iterations_used(&self) -> usize {
        self.trace.len()
    }

    /// Spread of the last recorded triple.
    pub fn final_spread(&self) -> Option<T> {
        self.trace.last().map(|r| r.spread)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + fmt::Display> fmt::Display for EquilibriumResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Epsilon: {}", self.epsilon)?;
        writeln!(f, "  Iterations: {}", self.iterations_used())?;
        match &self.outcome {
            Outcome::Converged { value } => {
                writeln!(f, "  Status: Converged")?;
                writeln!(f, "  Equilibrium statistic: {:.6}", *value)?;
            }
            Outcome::NotConverged { reason } => {
                writeln!(f, "  Status: Not converged ({})", reason)?;
            }
        }
        writeln!(f)?;

        writeln!(f, "Trace:")?;
        writeln!(
            f,
            "{:>6} {:>12} {:>12} {:>12} {:>12}",
            "Iter", "Mean", "Median", "Mode", "Spread"
        )?;
        writeln!(f, "{:-<width$}", "", width = 6 + 4 * 13)?;

        // Show first 10 and last 10 rows when the trace is long.
        let n = self.trace.len();
        let show_all = n <= 20;
        let rows_to_show: Vec<usize> = if show_all {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>6}", "...")?;
            }
            prev_idx = idx;

            let r = &self.trace[idx];
            writeln!(
                f,
                "{:>6} {:>12.6} {:>12.6} {:>12.6} {:>12.6}",
                r.index, r.mean, r.median, r.mode, r.spread
            )?;
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(index: usize, mean: f64) -> IterationRecord<f64> {
        IterationRecord {
            index,
            mean,
            median: 2.0,
            mode: 2.0,
            spread: (mean - 2.0).abs(),
        }
    }

    #[test]
    fn test_queries_converged() {
        let result = EquilibriumResult {
            outcome: Outcome::Converged { value: 2.0 },
            trace: vec![record(0, 2.5), record(1, 2.0)],
            epsilon: 1e-3,
        };
        assert!(result.is_converged());
        assert_eq!(result.final_value(), Some(2.0));
        assert_eq!(result.iterations_used(), 2);
        assert_eq!(result.final_spread(), Some(0.0));
    }

    #[test]
    fn test_queries_not_converged() {
        let result = EquilibriumResult {
            outcome: Outcome::NotConverged {
                reason: NotConvergedReason::IterationLimitExceeded,
            },
            trace: vec![record(0, 2.5)],
            epsilon: 1e-9,
        };
        assert!(!result.is_converged());
        assert_eq!(result.final_value(), None);
        assert_eq!(result.final_spread(), Some(0.5));
    }

    #[test]
    fn test_reason_display() {
        assert_eq!(
            NotConvergedReason::IterationLimitExceeded.to_string(),
            "iteration limit exceeded"
        );
    }

    #[test]
    fn test_display_short_trace_has_all_rows() {
        let result = EquilibriumResult {
            outcome: Outcome::Converged { value: 2.0 },
            trace: (0..3).map(|i| record(i, 2.0)).collect(),
            epsilon: 1e-3,
        };
        let rendered = result.to_string();
        assert!(rendered.contains("Converged"));
        assert!(!rendered.contains("..."));
        assert!(rendered.matches("2.000000").count() >= 3);
    }

    #[test]
    fn test_display_long_trace_elided() {
        let result = EquilibriumResult {
            outcome: Outcome::NotConverged {
                reason: NotConvergedReason::IterationLimitExceeded,
            },
            trace: (0..50).map(|i| record(i, 3.0)).collect(),
            epsilon: 1e-12,
        };
        let rendered = result.to_string();
        assert!(rendered.contains("..."));
        assert!(rendered.contains("iteration limit exceeded"));
    }
}
