//! Layer 3: Engine
//!
//! The equilibrium iteration engine.
//!
//! This layer drives the fixed-point iteration: it validates inputs,
//! extracts the (mean, median, mode) triple each round, tests convergence,
//! and packages the outcome together with the iteration trace.
//!
//! # Module Organization
//!
//! - **validator**: Eager, fail-fast input and parameter validation
//! - **executor**: The bounded iteration loop and convergence test
//! - **output**: Result types, iteration records, and Display reporting
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math (stats)
//!   ↓
//! Layer 1: Primitives (errors)
//! ```

/// Input and parameter validation.
///
/// Provides:
/// - Dataset checks (non-empty, all finite)
/// - Tolerance and iteration-limit checks
/// - Builder duplicate-parameter rejection
pub mod validator;

/// The iteration loop.
///
/// Provides:
/// - Triple extraction per round
/// - The strict spread-based convergence test
/// - The iteration-limit cutoff
pub mod executor;

/// Result and trace types.
///
/// Provides:
/// - [`IterationRecord`](output::IterationRecord) and the trace
/// - [`Outcome`](output::Outcome) variants
/// - Human-readable Display rendering
pub mod output;
