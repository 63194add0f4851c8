//! Mean, median, and mode primitives for the equilibrium iteration.
//!
//! ## Purpose
//!
//! This module provides the three statistics the engine extracts on every
//! iteration, plus the spread metric used for the convergence test. Each
//! function operates on a borrowed slice and leaves the input untouched.
//!
//! ## Design notes
//!
//! * Median uses in-place selection (`select_nth_unstable_by`) on a copy for
//!   O(n) average-case performance instead of a full sort.
//! * Mode sorts a copy and run-length scans equal values, so no hashing of
//!   floating-point keys is needed.
//! * All functions are generic over `Float` types to support f32 and f64.
//! * Supports both `std` and `no_std` environments.
//!
//! ## Key concepts
//!
//! ### Mode tie-break and fallback
//!
//! Mode uses exact equality, not binning. Among all values sharing the
//! highest occurrence count, the smallest wins. If every value occurs
//! exactly once there is no true mode, and the dataset mean is substituted
//! so the (mean, median, mode) triple stays well-formed. Both policies are
//! observable in convergence trajectories and must not change.
//!
//! ### Spread
//!
//! The maximum pairwise absolute difference among a triple of values. For
//! three values this equals max − min; the pairwise form mirrors the
//! definition used by the convergence contract.
//!
//! ## Invariants
//!
//! * mean, median, and mode all lie within [min(data), max(data)].
//! * spread >= 0 for any triple.
//! * Results are deterministic for identical input.
//!
//! ## Non-goals
//!
//! * This module does not handle empty slices or non-finite values
//!   (NaN/Inf); inputs are validated by the engine layer before use.
//! * This module does not provide weighted or streaming variants.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Statistic Extraction
// ============================================================================

/// Arithmetic mean: sum of elements divided by count.
///
/// The caller guarantees `data` is non-empty and all-finite.
pub fn mean<T: Float>(data: &[T]) -> T {
    let sum = data.iter().fold(T::zero(), |acc, &x| acc + x);
    sum / T::from(data.len()).unwrap()
}

/// Median of `data` without mutating the input.
///
/// Odd counts return the middle element; even counts return the arithmetic
/// mean of the two middle elements. Uses Quickselect on a copy rather than
/// a full sort.
pub fn median<T: Float>(data: &[T]) -> T {
    let mut vals: Vec<T> = data.to_vec();
    median_inplace(&mut vals)
}

/// Mode of `data` under exact-equality counting.
///
/// Among all values achieving the highest occurrence count, the smallest is
/// returned. If every value is distinct (highest count is 1) there is no
/// true mode and the mean of `data` is returned instead.
pub fn mode<T: Float>(data: &[T]) -> T {
    let mut sorted: Vec<T> = data.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let mut best_value = sorted[0];
    let mut best_count = 1usize;
    let mut run_value = sorted[0];
    let mut run_count = 1usize;

    for &x in &sorted[1..] {
        if x == run_value {
            run_count += 1;
        } else {
            run_value = x;
            run_count = 1;
        }
        // Strictly greater: on tied counts the earlier (smaller) run wins.
        if run_count > best_count {
            best_count = run_count;
            best_value = run_value;
        }
    }

    if best_count == 1 {
        mean(data)
    } else {
        best_value
    }
}

/// Maximum pairwise absolute difference among a (mean, median, mode) triple.
pub fn spread<T: Float>(mean: T, median: T, mode: T) -> T {
    let a = (mean - median).abs();
    let b = (median - mode).abs();
    let c = (mode - mean).abs();
    a.max(b).max(c)
}

// ============================================================================
// Selection-Based Median
// ============================================================================

/// Compute the median of `vals` in place via Quickselect.
fn median_inplace<T: Float>(vals: &mut [T]) -> T {
    let n = vals.len();
    if n == 1 {
        return vals[0];
    }

    let mid = n / 2;

    if n % 2 == 0 {
        // Even length: average of the two middle values.
        vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        let upper = vals[mid];

        // Largest value in the lower half is the other middle element.
        let lower = vals[..mid].iter().copied().fold(T::neg_infinity(), T::max);

        (lower + upper) / T::from(2.0).unwrap()
    } else {
        vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        vals[mid]
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- mean ---

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
    }

    #[test]
    fn test_mean_single() {
        assert_eq!(mean(&[42.0]), 42.0);
    }

    #[test]
    fn test_mean_f32() {
        assert_eq!(mean(&[1.0_f32, 2.0, 3.0]), 2.0);
    }

    // --- median ---

    #[test]
    fn test_median_odd() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
    }

    #[test]
    fn test_median_even() {
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
    }

    #[test]
    fn test_median_single() {
        assert_eq!(median(&[7.0]), 7.0);
    }

    #[test]
    fn test_median_unsorted_input_untouched() {
        let data = [9.0, 1.0, 5.0];
        assert_eq!(median(&data), 5.0);
        assert_eq!(data, [9.0, 1.0, 5.0]);
    }

    // --- mode ---

    #[test]
    fn test_mode_simple() {
        assert_eq!(mode(&[1.0, 2.0, 2.0, 3.0]), 2.0);
    }

    #[test]
    fn test_mode_tie_break_smallest() {
        // 2.0 and 3.0 both appear twice; the smaller wins.
        assert_eq!(mode(&[3.0, 2.0, 3.0, 2.0, 1.0]), 2.0);
    }

    #[test]
    fn test_mode_tie_break_order_independent() {
        assert_eq!(mode(&[2.0, 3.0, 2.0, 3.0, 1.0]), 2.0);
        assert_eq!(mode(&[3.0, 3.0, 2.0, 2.0, 1.0]), 2.0);
    }

    #[test]
    fn test_mode_all_distinct_falls_back_to_mean() {
        let data = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(mode(&data), mean(&data));
    }

    #[test]
    fn test_mode_single() {
        assert_eq!(mode(&[5.0]), 5.0);
    }

    #[test]
    fn test_mode_highest_count_wins_over_smaller_value() {
        // 1.0 appears twice but 4.0 appears three times.
        assert_eq!(mode(&[1.0, 1.0, 4.0, 4.0, 4.0]), 4.0);
    }

    // --- spread ---

    #[test]
    fn test_spread_basic() {
        assert_eq!(spread(15.875, 16.0, 16.0), 0.125);
    }

    #[test]
    fn test_spread_identical_triple() {
        assert_eq!(spread(5.0, 5.0, 5.0), 0.0);
    }

    #[test]
    fn test_spread_equals_max_minus_min() {
        let (a, b, c) = (2.0, -1.0, 0.5);
        assert_eq!(spread(a, b, c), 3.0);
    }
}
