//! Binary search over sorted slices.
//!
//! ## Purpose
//!
//! This module locates a value in an ascending-sorted slice by closed-interval
//! bisection.
//!
//! ## Design notes
//!
//! * **Precondition**: The input must be sorted ascending under the natural
//!   order of its element type. The function does not validate this; on an
//!   unsorted input the result is unspecified.
//! * **Ties**: Among equal values, the returned index is whichever one the
//!   bisection lands on first, not necessarily the leftmost.
//!
//! ## Invariants
//!
//! * A returned index `i` always satisfies `haystack[i] == target`.
//! * The empty slice always yields `None`.
//!
//! ## Non-goals
//!
//! * This module does not report insertion points for absent values.

// External dependencies
use std::cmp::Ordering;

// ============================================================================
// Binary Search
// ============================================================================

/// Locate `target` in an ascending-sorted slice.
///
/// Maintains a closed interval `[low, high]` narrowed by midpoint
/// comparison; O(log n) comparisons, no side effects.
///
/// # Examples
///
/// ```
/// use algokit::prelude::*;
///
/// let sorted = [1, 3, 5, 7, 9, 11, 13, 15, 17, 19];
/// assert_eq!(binary_search(&sorted, &13), Some(6));
/// assert_eq!(binary_search(&sorted, &4), None);
/// ```
pub fn binary_search<T: Ord>(haystack: &[T], target: &T) -> Option<usize> {
    if haystack.is_empty() {
        return None;
    }

    let mut low = 0usize;
    let mut high = haystack.len() - 1;

    while low <= high {
        let mid = low + (high - low) / 2;

        match haystack[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => {
                // Target sorts below the interval; decrementing would underflow.
                if mid == 0 {
                    return None;
                }
                high = mid - 1;
            }
        }
    }

    None
}
