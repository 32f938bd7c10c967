//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the shared error type and the basic sequence and set
//! utilities used throughout the crate. It has zero internal dependencies
//! within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Validate
//!   ↓
//! Layer 4: Analysis
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Order-preserving sequence utilities (deduplication, rotation, pair-sum).
pub mod sequence;

/// Set algebra over hash sets.
pub mod sets;
