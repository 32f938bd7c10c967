//! Proper-divisor enumeration and the perfect/amicable predicates.
//!
//! ## Purpose
//!
//! This module enumerates the proper divisors of a positive integer and
//! builds the two classic number-theoretic predicates on top of the divisor
//! sum: perfect numbers and amicable pairs.
//!
//! ## Design notes
//!
//! * **Naive scan**: Divisors are found by trial division over `1..n`. The
//!   O(sqrt n) factorization is deliberately not used; callers rely on the
//!   ascending order the linear scan produces.
//! * **Zero policy**: `proper_divisors(0)` is rejected with an explicit
//!   error; the predicates treat 0 as neither perfect nor amicable.
//!
//! ## Invariants
//!
//! * The returned divisors are strictly ascending and strictly less than `n`.
//! * `proper_divisors(1)` is the empty sequence; for `n > 1` the sequence
//!   starts with 1.
//!
//! ## Non-goals
//!
//! * This module does not perform prime factorization.
//! * This module does not enumerate divisors of negative integers.

// Internal dependencies
use crate::primitives::errors::AlgoKitError;

// ============================================================================
// Divisor Enumeration
// ============================================================================

/// Enumerate the proper divisors of `n` in ascending order.
///
/// Proper divisors are the positive divisors of `n` strictly less than `n`
/// itself. `n == 0` has no divisor set and is rejected.
///
/// Complexity O(n) by trial division.
///
/// # Examples
///
/// ```
/// use algokit::prelude::*;
///
/// assert_eq!(proper_divisors(28)?, vec![1, 2, 4, 7, 14]);
/// assert_eq!(proper_divisors(1)?, vec![]);
/// assert!(proper_divisors(0).is_err());
/// # Result::<(), AlgoKitError>::Ok(())
/// ```
pub fn proper_divisors(n: u64) -> Result<Vec<u64>, AlgoKitError> {
    if n == 0 {
        return Err(AlgoKitError::DivisorsOfZero);
    }

    Ok((1..n).filter(|d| n % d == 0).collect())
}

/// Sum of the proper divisors of `n`.
///
/// Precondition: `n >= 1`. Shared by the perfect-number and amicable-pair
/// predicates, which guard the zero case themselves.
pub fn divisor_sum(n: u64) -> u64 {
    (1..n).filter(|d| n % d == 0).sum()
}

// ============================================================================
// Predicates
// ============================================================================

/// Check whether `n` equals the sum of its proper divisors.
///
/// The classic perfect numbers are 6, 28, 496, 8128. Zero is not perfect.
///
/// # Examples
///
/// ```
/// use algokit::prelude::*;
///
/// assert!(is_perfect_number(6));
/// assert!(!is_perfect_number(12));
/// ```
pub fn is_perfect_number(n: u64) -> bool {
    n != 0 && divisor_sum(n) == n
}

/// Check whether `a` and `b` form an amicable pair.
///
/// Two numbers are amicable when the proper-divisor sum of each equals the
/// other. The classic pair is 220 and 284. Zero operands are never
/// amicable.
///
/// # Examples
///
/// ```
/// use algokit::prelude::*;
///
/// assert!(are_amicable(220, 284));
/// assert!(!are_amicable(6, 8));
/// ```
pub fn are_amicable(a: u64, b: u64) -> bool {
    if a == 0 || b == 0 {
        return false;
    }

    divisor_sum(a) == b && divisor_sum(b) == a
}
