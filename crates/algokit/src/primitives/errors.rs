//! Error types for algokit operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur across the crate,
//! covering defensive input policies for operations whose original domains
//! were left unvalidated (zero divisor queries, Fibonacci overflow) and the
//! finance calculator's parameter constraints.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include the offending values (e.g., the requested
//!   index and the supported maximum).
//! * **Total validators**: The email and password validators never produce
//!   errors; they always return a structured result.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// External dependencies
use std::error::Error;
use std::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for algokit operations.
///
/// Not `Eq`: the finance variants carry `f64` payloads.
#[derive(Debug, Clone, PartialEq)]
pub enum AlgoKitError {
    /// Proper divisors are defined only for positive integers.
    DivisorsOfZero,

    /// Requested Fibonacci index exceeds what fits in a `u64`.
    FibonacciOverflow {
        /// The requested index.
        n: u64,
        /// Largest index whose value fits in a `u64`.
        max: u64,
    },

    /// Principal must be finite and non-negative.
    InvalidPrincipal(f64),

    /// Annual rate (percent) must be finite and non-negative.
    InvalidRate(f64),

    /// Compounding frequency must be at least once per year.
    InvalidCompounding(u32),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for AlgoKitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::DivisorsOfZero => {
                write!(f, "Proper divisors are undefined for 0 (need n >= 1)")
            }
            Self::FibonacciOverflow { n, max } => {
                write!(f, "Fibonacci index {n} overflows u64 (maximum supported index is {max})")
            }
            Self::InvalidPrincipal(p) => {
                write!(f, "Invalid principal: {p} (must be finite and >= 0)")
            }
            Self::InvalidRate(r) => {
                write!(f, "Invalid annual rate: {r}% (must be finite and >= 0)")
            }
            Self::InvalidCompounding(m) => {
                write!(f, "Invalid compounding frequency: {m} (must be >= 1 per year)")
            }
        }
    }
}

impl Error for AlgoKitError {}
