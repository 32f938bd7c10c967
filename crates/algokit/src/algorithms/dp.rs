//! Dynamic programming: memoized Fibonacci and longest common subsequence.
//!
//! ## Purpose
//!
//! This module implements the two table-driven computations of the crate:
//! the Fibonacci recurrence with an explicit memo, and longest common
//! subsequence (LCS) reconstruction over a full (m+1)×(n+1) length table.
//!
//! ## Design notes
//!
//! * **Explicit memo**: The Fibonacci cache is either function-local or
//!   caller-supplied, never implicit shared state. Callers running
//!   independent call trees concurrently must pass independent memos.
//! * **Overflow policy**: `F(94)` exceeds `u64::MAX`, so indices above
//!   [`MAX_FIBONACCI_INDEX`] are rejected up front rather than wrapping.
//! * **LCS tie-break**: When multiple maximal subsequences exist, the
//!   backtrack prefers a character match, otherwise moves toward the larger
//!   neighboring cell, decrementing the second sequence's index on ties.
//!   Which maximal subsequence is returned is implementation-defined; its
//!   length is not.
//!
//! ## Invariants
//!
//! * Each Fibonacci index is computed at most once per top-level call tree.
//! * The returned LCS is a subsequence of both inputs and has maximal length.
//!
//! ## Non-goals
//!
//! * This module does not enumerate all maximal common subsequences.
//! * This module does not provide the O(min(m, n)) space LCS variant.

// External dependencies
use std::collections::HashMap;

// Internal dependencies
use crate::primitives::errors::AlgoKitError;

// ============================================================================
// Fibonacci
// ============================================================================

/// Largest index `n` for which `F(n)` fits in a `u64`.
pub const MAX_FIBONACCI_INDEX: u64 = 93;

/// Compute the `n`-th Fibonacci number with a function-local memo.
///
/// `F(0) = 0`, `F(1) = 1`, `F(n) = F(n-1) + F(n-2)`. O(n) time and
/// auxiliary space. Indices above [`MAX_FIBONACCI_INDEX`] are rejected.
///
/// # Examples
///
/// ```
/// use algokit::prelude::*;
///
/// assert_eq!(fibonacci(10)?, 55);
/// assert!(fibonacci(94).is_err());
/// # Result::<(), AlgoKitError>::Ok(())
/// ```
pub fn fibonacci(n: u64) -> Result<u64, AlgoKitError> {
    let mut memo = HashMap::new();
    fibonacci_with(n, &mut memo)
}

/// Compute the `n`-th Fibonacci number with a caller-owned memo.
///
/// The memo maps index to value and may be reused across sequential calls
/// to amortize work. It must not be shared across concurrent call trees;
/// each tree owns its own cache.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use algokit::prelude::*;
///
/// let mut memo = HashMap::new();
/// assert_eq!(fibonacci_with(30, &mut memo)?, 832_040);
/// // Reuse warms subsequent calls.
/// assert_eq!(fibonacci_with(31, &mut memo)?, 1_346_269);
/// # Result::<(), AlgoKitError>::Ok(())
/// ```
pub fn fibonacci_with(n: u64, memo: &mut HashMap<u64, u64>) -> Result<u64, AlgoKitError> {
    if n > MAX_FIBONACCI_INDEX {
        return Err(AlgoKitError::FibonacciOverflow {
            n,
            max: MAX_FIBONACCI_INDEX,
        });
    }

    Ok(fib_memo(n, memo))
}

/// Memoized recurrence. Precondition: `n <= MAX_FIBONACCI_INDEX`, so the
/// addition cannot overflow.
fn fib_memo(n: u64, memo: &mut HashMap<u64, u64>) -> u64 {
    if n <= 1 {
        return n;
    }
    if let Some(&value) = memo.get(&n) {
        return value;
    }

    let value = fib_memo(n - 1, memo) + fib_memo(n - 2, memo);
    memo.insert(n, value);
    value
}

// ============================================================================
// Longest Common Subsequence
// ============================================================================

/// Longest common subsequence of two strings, by Unicode scalar values.
///
/// Convenience wrapper over [`longest_common_subsequence_of`].
///
/// # Examples
///
/// ```
/// use algokit::prelude::*;
///
/// assert_eq!(longest_common_subsequence("AGGTAB", "GXTXAYB"), "GTAB");
/// ```
pub fn longest_common_subsequence(first: &str, second: &str) -> String {
    let a: Vec<char> = first.chars().collect();
    let b: Vec<char> = second.chars().collect();

    longest_common_subsequence_of(&a, &b).into_iter().collect()
}

/// Longest common subsequence of two slices.
///
/// Builds the full (m+1)×(n+1) length table where `dp[i][j]` is the LCS
/// length of the first `i` and `j` elements, then reconstructs one maximal
/// subsequence by walking the table backward. O(m·n) time and space.
///
/// # Examples
///
/// ```
/// use algokit::prelude::*;
///
/// let lcs = longest_common_subsequence_of(&[1, 2, 3, 4], &[2, 3, 4, 5]);
/// assert_eq!(lcs, vec![2, 3, 4]);
/// ```
pub fn longest_common_subsequence_of<T>(first: &[T], second: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let m = first.len();
    let n = second.len();

    // Length table, row 0 and column 0 are the empty-prefix base case.
    let mut dp = vec![vec![0usize; n + 1]; m + 1];
    for i in 1..=m {
        for j in 1..=n {
            if first[i - 1] == second[j - 1] {
                dp[i][j] = dp[i - 1][j - 1] + 1;
            } else {
                dp[i][j] = dp[i - 1][j].max(dp[i][j - 1]);
            }
        }
    }

    // Backtrack from dp[m][n]: prefer a match; otherwise move toward the
    // larger neighbor, decrementing j on ties.
    let mut subsequence = Vec::with_capacity(dp[m][n]);
    let (mut i, mut j) = (m, n);
    while i > 0 && j > 0 {
        if first[i - 1] == second[j - 1] {
            subsequence.push(first[i - 1].clone());
            i -= 1;
            j -= 1;
        } else if dp[i - 1][j] > dp[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    subsequence.reverse();
    subsequence
}
