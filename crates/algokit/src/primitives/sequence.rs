//! Order-preserving sequence utilities.
//!
//! ## Purpose
//!
//! This module provides the basic sequence transformations: duplicate
//! removal, right rotation, and pair-sum search. Each function consumes a
//! borrowed slice and returns a freshly allocated result; inputs are never
//! mutated.
//!
//! ## Design notes
//!
//! * **Stability**: `deduplicate` keeps the first occurrence of each value.
//! * **Normalization**: `rotate_right` accepts any integer offset, including
//!   negative ones, and reduces it modulo the sequence length.
//! * **Canonical pairs**: `find_pairs_summing_to` emits each qualifying pair
//!   once, in `(min, max)` order, regardless of how often it occurs.
//!
//! ## Invariants
//!
//! * Output of `deduplicate` contains each input value exactly once, in
//!   first-encounter order.
//! * Output of `rotate_right` is a permutation of the input with the same
//!   length.
//!
//! ## Non-goals
//!
//! * This module does not sort; see `algorithms::sort`.
//! * This module does not implement set algebra; see `primitives::sets`.

// External dependencies
use num_traits::PrimInt;
use std::collections::HashSet;
use std::hash::Hash;

// ============================================================================
// Duplicate Removal
// ============================================================================

/// Remove repeated values, preserving first-occurrence order.
///
/// Uses a seen-set for O(1) average membership tests, so the whole pass is
/// O(n) on average.
///
/// # Examples
///
/// ```
/// use algokit::prelude::*;
///
/// assert_eq!(deduplicate(&[1, 2, 2, 3, 4, 4, 4, 5]), vec![1, 2, 3, 4, 5]);
/// ```
pub fn deduplicate<T>(items: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(items.len());
    let mut unique = Vec::with_capacity(items.len());

    for item in items {
        if seen.insert(item.clone()) {
            unique.push(item.clone());
        }
    }

    unique
}

// ============================================================================
// Rotation
// ============================================================================

/// Rotate a sequence to the right by `positions` places.
///
/// The offset is reduced with `rem_euclid`, so negative offsets rotate left
/// and offsets larger than the length wrap around. The empty sequence is
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use algokit::prelude::*;
///
/// assert_eq!(rotate_right(&[1, 2, 3, 4, 5], 2), vec![4, 5, 1, 2, 3]);
/// assert_eq!(rotate_right::<i32>(&[], 3), vec![]);
/// ```
pub fn rotate_right<T: Clone>(items: &[T], positions: i64) -> Vec<T> {
    if items.is_empty() {
        return Vec::new();
    }

    let shift = positions.rem_euclid(items.len() as i64) as usize;
    let mut rotated = items.to_vec();
    rotated.rotate_right(shift);
    rotated
}

// ============================================================================
// Pair-Sum Search
// ============================================================================

/// Find every unordered pair of values summing to `target`.
///
/// Single pass with a seen-set: for each value, the complement
/// `target - value` is looked up among previously seen values. Pairs are
/// emitted in canonical `(min, max)` order and collected into a set, so a
/// pair that qualifies repeatedly appears once.
///
/// Complements are computed with `checked_sub`; a complement that is not
/// representable in `T` cannot be present in the input and is skipped.
///
/// # Examples
///
/// ```
/// use algokit::prelude::*;
///
/// let pairs = find_pairs_summing_to(&[1, 2, 3, 4, 5, 6, 7], 7);
/// assert!(pairs.contains(&(1, 6)));
/// assert!(pairs.contains(&(2, 5)));
/// assert!(pairs.contains(&(3, 4)));
/// assert_eq!(pairs.len(), 3);
/// ```
pub fn find_pairs_summing_to<T>(items: &[T], target: T) -> HashSet<(T, T)>
where
    T: PrimInt + Hash,
{
    let mut seen: HashSet<T> = HashSet::with_capacity(items.len());
    let mut pairs: HashSet<(T, T)> = HashSet::new();

    for &value in items {
        if let Some(complement) = target.checked_sub(&value) {
            if seen.contains(&complement) {
                let low = value.min(complement);
                let high = value.max(complement);
                pairs.insert((low, high));
            }
        }
        seen.insert(value);
    }

    pairs
}
