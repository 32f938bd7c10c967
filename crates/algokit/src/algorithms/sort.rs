//! Stable merge sort.
//!
//! ## Purpose
//!
//! This module sorts a slice into a new vector with a recursive
//! divide-and-conquer merge sort.
//!
//! ## Design notes
//!
//! * **Stability**: The merge takes from the left half on ties, so equal
//!   keys keep their relative order.
//! * **Value semantics**: The input slice is never mutated; every call
//!   returns a freshly allocated vector.
//!
//! ## Invariants
//!
//! * The output is a permutation of the input and is non-decreasing.
//! * Slices of length <= 1 are returned as-is (identity).
//!
//! ## Non-goals
//!
//! * This module does not sort in place.
//! * This module does not accept custom comparators; it sorts by the
//!   natural order of the element type.

// ============================================================================
// Merge Sort
// ============================================================================

/// Sort a slice into a new vector, O(n log n), stable.
///
/// # Examples
///
/// ```
/// use algokit::prelude::*;
///
/// assert_eq!(merge_sort(&[64, 34, 25, 12, 22, 11, 90]), vec![11, 12, 22, 25, 34, 64, 90]);
/// assert_eq!(merge_sort::<i32>(&[]), vec![]);
/// ```
pub fn merge_sort<T>(items: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    if items.len() <= 1 {
        return items.to_vec();
    }

    let mid = items.len() / 2;
    let left = merge_sort(&items[..mid]);
    let right = merge_sort(&items[mid..]);

    merge(left, right)
}

/// Merge two sorted vectors, left-biased on ties for stability.
fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left_iter = left.into_iter().peekable();
    let mut right_iter = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left_iter.peek(), right_iter.peek()) {
        if l <= r {
            merged.extend(left_iter.next());
        } else {
            merged.extend(right_iter.next());
        }
    }

    // At most one side still has elements.
    merged.extend(left_iter);
    merged.extend(right_iter);

    merged
}
