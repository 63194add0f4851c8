//! Layer 2: Math
//!
//! Pure mathematical functions.
//!
//! This layer provides the statistic primitives the engine iterates over:
//! mean, median, mode, and the spread metric. These are reusable building
//! blocks with no iteration- or validation-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine (executor, output, validator)
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives (errors)
//! ```

/// Descriptive statistics over finite numeric slices.
///
/// Provides:
/// - Mean, median, and mode (with tie-break and fallback policy)
/// - The spread convergence metric
pub mod stats;
