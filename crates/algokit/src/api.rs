//! Public API surface.
//!
//! ## Purpose
//!
//! This module gathers the crate's public functions and types from the
//! layer modules into one flat surface. The demonstration or application
//! layer calls these directly; all formatting and printing stays with the
//! caller.
//!
//! ## Design notes
//!
//! * **Flat re-exports**: Every operation is a free function; the only
//!   stateful construct is the [`CompoundInterest`] builder.
//! * **No output medium**: Result records implement `Display`, but nothing
//!   here writes to a console.

// Publicly re-exported types and functions
pub use crate::algorithms::dp::{
    fibonacci, fibonacci_with, longest_common_subsequence, longest_common_subsequence_of,
    MAX_FIBONACCI_INDEX,
};
pub use crate::algorithms::search::binary_search;
pub use crate::algorithms::sort::merge_sort;
pub use crate::analysis::brackets::brackets_balanced;
pub use crate::analysis::frequency::{top_n, word_frequency};
pub use crate::analysis::palindrome::is_palindrome;
pub use crate::math::divisors::{are_amicable, is_perfect_number, proper_divisors};
pub use crate::math::finance::{compound_interest, CompoundInterest, InterestBreakdown};
pub use crate::primitives::errors::AlgoKitError;
pub use crate::primitives::sequence::{deduplicate, find_pairs_summing_to, rotate_right};
pub use crate::primitives::sets::{set_algebra, SetAlgebra};
pub use crate::validate::email::validate_email;
pub use crate::validate::password::{
    validate_password_strength, PasswordReport, PasswordViolation, MIN_PASSWORD_LENGTH,
    SPECIAL_CHARACTERS,
};
