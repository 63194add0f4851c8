//! Layer 1: Primitives
//!
//! Core building blocks and types.
//!
//! This layer provides the shared types used throughout the crate. It has
//! zero internal dependencies within the crate.
//!
//! # Module Organization
//!
//! - **errors**: Shared error types (EquilibriumError)
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
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
///
/// Provides:
/// - The [`EquilibriumError`](errors::EquilibriumError) enum
/// - Display formatting for all error variants
pub mod errors;
