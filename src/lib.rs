//! Equilibrium statistic engine.
//!
//! ## Purpose
//!
//! This crate computes a recursive "equilibrium statistic": starting from a
//! numeric dataset, it repeatedly derives the triple (mean, median, mode),
//! forms a new three-element dataset from that triple, and iterates until the
//! triple's spread falls strictly below a tolerance or an iteration limit is
//! reached. The caller receives the final value together with a full
//! iteration trace.
//!
//! ## Design notes
//!
//! * Generic over `Float` types to support f32 and f64.
//! * Fully synchronous and side-effect free; each run owns its trace.
//! * All validation is performed upfront, before the loop starts.
//! * Supports both `std` and `no_std` (with `alloc`) environments.
//!
//! ## Key concepts
//!
//! ### Spread
//!
//! The convergence metric: the maximum pairwise absolute difference among
//! the (mean, median, mode) triple. Iteration stops once the spread is
//! strictly below the configured epsilon.
//!
//! ### Mode policy
//!
//! Mode uses exact value equality, not binning. Ties are broken by taking
//! the smallest value with the highest count. When all values are distinct
//! the mode falls back to the dataset mean, keeping the triple well-formed.
//!
//! ### Iteration limit
//!
//! Convergence is not proven for arbitrary inputs, so the loop is bounded.
//! Exhausting the bound is not an error: the result carries a
//! [`NotConverged`](engine::output::Outcome::NotConverged) outcome and the
//! trace produced so far, and the caller decides how to treat it.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine (executor, output, validator)
//!   ↓
//! Layer 2: Math (stats)
//!   ↓
//! Layer 1: Primitives (errors)
//! ```
//!
//! # Example
//!
//! ```
//! use equistat::prelude::*;
//!
//! let engine = Equilibrium::<f64>::new().epsilon(1e-3).build().unwrap();
//! let result = engine.run(&[14.0, 15.0, 15.0, 16.0, 16.0, 16.0, 17.0, 18.0]).unwrap();
//!
//! assert!(result.is_converged());
//! assert_eq!(result.trace[0].mean, 15.875);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

/// Layer 1: shared primitive types (errors).
pub mod primitives;

/// Layer 2: pure statistic functions (mean, median, mode, spread).
pub mod math;

/// Layer 3: the iteration engine (validator, executor, output).
pub mod engine;

/// Layer 4: public builder API.
pub mod api;

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use crate::api::{Equilibrium, EquilibriumEngine, Result};
    pub use crate::engine::executor::EquilibriumExecutor;
    pub use crate::engine::output::{
        EquilibriumResult, IterationRecord, NotConvergedReason, Outcome,
    };
    pub use crate::primitives::errors::EquilibriumError;
}
