//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the number-theoretic and financial calculations:
//! proper-divisor enumeration, the perfect/amicable predicates, and the
//! compound-interest calculator.
//!
//! These are pure, deterministic computations with no dependencies beyond
//! the shared error type.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Proper divisors, perfect numbers, amicable pairs.
pub mod divisors;

/// Compound-interest calculation.
pub mod finance;
