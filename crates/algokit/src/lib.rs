//! # algokit — Pure Algorithmic Utilities for Rust
//!
//! A small, deterministic library of classical algorithms and utilities:
//! searching, sorting, dynamic programming, text analysis, number and set
//! utilities, and lightweight validators. Every function is a pure,
//! side-effect-free computation over borrowed inputs.
//!
//! ## Quick Start
//!
//! ```rust
//! use algokit::prelude::*;
//!
//! // Search & sort
//! let sorted = merge_sort(&[64, 34, 25, 12, 22, 11, 90]);
//! assert_eq!(binary_search(&sorted, &25), Some(3));
//!
//! // Dynamic programming
//! assert_eq!(fibonacci(10)?, 55);
//! assert_eq!(longest_common_subsequence("AGGTAB", "GXTXAYB"), "GTAB");
//!
//! // Text analysis
//! assert!(is_palindrome("A man, a plan, a canal: Panama"));
//! assert!(brackets_balanced("({[]})"));
//! # Result::<(), AlgoKitError>::Ok(())
//! ```
//!
//! ### Number and set utilities
//!
//! ```rust
//! use std::collections::HashSet;
//! use algokit::prelude::*;
//!
//! assert!(is_perfect_number(28));
//! assert!(are_amicable(220, 284));
//! assert_eq!(deduplicate(&[1, 2, 2, 3]), vec![1, 2, 3]);
//!
//! let a: HashSet<i32> = [1, 2, 3, 4, 5].into_iter().collect();
//! let b: HashSet<i32> = [4, 5, 6, 7, 8].into_iter().collect();
//! assert_eq!(set_algebra(&a, &b).intersection, [4, 5].into_iter().collect());
//! ```
//!
//! ### Validators and finance
//!
//! ```rust
//! use algokit::prelude::*;
//!
//! assert!(validate_email("user@example.com"));
//!
//! let report = validate_password_strength("abc123");
//! assert!(!report.is_strong());
//!
//! let outcome = CompoundInterest::new()
//!     .principal(1000.0)
//!     .annual_rate(5.0)
//!     .years(10)
//!     .compute()?;
//! assert_eq!(outcome.interest_earned, 647.01);
//! # Result::<(), AlgoKitError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Most operations are total over their documented domains and return
//! plain values. The exceptions return `Result<_, AlgoKitError>`:
//!
//! - [`prelude::fibonacci`] rejects indices whose value overflows `u64`.
//! - [`prelude::proper_divisors`] rejects 0.
//! - [`prelude::compound_interest`] rejects non-finite or negative
//!   principal/rate and a zero compounding frequency.
//!
//! The `?` operator is idiomatic:
//!
//! ```rust
//! use algokit::prelude::*;
//!
//! let divisors = proper_divisors(496)?;
//! assert_eq!(divisors.iter().sum::<u64>(), 496);
//! # Result::<(), AlgoKitError>::Ok(())
//! ```
//!
//! ## Concurrency
//!
//! The crate holds no shared mutable state. Every function is safely
//! callable from parallel contexts; the only caveat is the caller-owned
//! Fibonacci memo, which must not be shared across concurrent call trees.

// Layer 1: Primitives - errors, sequence and set utilities.
mod primitives;

// Layer 2: Math - divisors, predicates, compound interest.
mod math;

// Layer 3: Algorithms - search, sort, dynamic programming.
mod algorithms;

// Layer 4: Analysis - word frequency, palindromes, brackets.
mod analysis;

// Layer 5: Validate - email and password validators.
mod validate;

// Flat public surface over the layers.
mod api;

// Standard algokit prelude.
pub mod prelude {
    pub use crate::api::{
        are_amicable, binary_search, brackets_balanced, compound_interest, deduplicate,
        fibonacci, fibonacci_with, find_pairs_summing_to, is_palindrome, is_perfect_number,
        longest_common_subsequence, longest_common_subsequence_of, merge_sort, proper_divisors,
        rotate_right, set_algebra, top_n, validate_email, validate_password_strength,
        word_frequency, AlgoKitError, CompoundInterest, InterestBreakdown, PasswordReport,
        PasswordViolation, SetAlgebra, MAX_FIBONACCI_INDEX, MIN_PASSWORD_LENGTH,
        SPECIAL_CHARACTERS,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod analysis {
        pub use crate::analysis::*;
    }
    pub mod validate {
        pub use crate::validate::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
