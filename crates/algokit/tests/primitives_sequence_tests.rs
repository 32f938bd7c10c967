//! Tests for the sequence utilities.
//!
//! These tests verify the order-preserving sequence transformations used in
//! algokit for:
//! - Duplicate removal with first-occurrence order
//! - Right rotation with offset normalization
//! - Pair-sum search with canonical deduplicated pairs
//!
//! ## Test Organization
//!
//! 1. **Deduplication** - Order preservation, degenerate inputs
//! 2. **Rotation** - Worked example, wrapping, negative offsets
//! 3. **Pair-Sum** - Worked example, duplicates, overflow safety

use std::collections::HashSet;

use algokit::prelude::*;

// ============================================================================
// Deduplication Tests
// ============================================================================

/// Test the worked deduplication example.
#[test]
fn test_deduplicate_basic() {
    assert_eq!(deduplicate(&[1, 2, 2, 3, 4, 4, 4, 5]), vec![1, 2, 3, 4, 5]);
}

/// Test the first occurrence wins.
///
/// Verifies order is decided by first encounter, not by value.
#[test]
fn test_deduplicate_keeps_first_occurrence_order() {
    assert_eq!(deduplicate(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
}

/// Test degenerate inputs.
#[test]
fn test_deduplicate_degenerate() {
    assert_eq!(deduplicate::<i32>(&[]), vec![]);
    assert_eq!(deduplicate(&[7, 7, 7]), vec![7]);
}

/// Test non-integer element types.
#[test]
fn test_deduplicate_strings() {
    let input = ["b".to_string(), "a".to_string(), "b".to_string()];

    assert_eq!(deduplicate(&input), vec!["b".to_string(), "a".to_string()]);
}

// ============================================================================
// Rotation Tests
// ============================================================================

/// Test the worked rotation example.
#[test]
fn test_rotate_right_basic() {
    assert_eq!(rotate_right(&[1, 2, 3, 4, 5], 2), vec![4, 5, 1, 2, 3]);
}

/// Test offsets at and beyond the length wrap around.
#[test]
fn test_rotate_right_wraps() {
    let items = [1, 2, 3, 4, 5];

    assert_eq!(rotate_right(&items, 5), items.to_vec(), "full turn is identity");
    assert_eq!(rotate_right(&items, 7), rotate_right(&items, 2), "offsets reduce mod len");
}

/// Test negative offsets rotate left.
#[test]
fn test_rotate_right_negative() {
    assert_eq!(rotate_right(&[1, 2, 3, 4, 5], -1), vec![2, 3, 4, 5, 1]);
    assert_eq!(rotate_right(&[1, 2, 3, 4, 5], -5), vec![1, 2, 3, 4, 5]);
}

/// Test the empty sequence is unchanged for any offset.
#[test]
fn test_rotate_right_empty() {
    assert_eq!(rotate_right::<i32>(&[], 3), vec![]);
    assert_eq!(rotate_right::<i32>(&[], -3), vec![]);
}

/// Test zero offset is the identity.
#[test]
fn test_rotate_right_zero() {
    assert_eq!(rotate_right(&[1, 2, 3], 0), vec![1, 2, 3]);
}

// ============================================================================
// Pair-Sum Tests
// ============================================================================

/// Test the worked pair-sum example.
#[test]
fn test_pairs_worked_example() {
    let pairs = find_pairs_summing_to(&[1, 2, 3, 4, 5, 6, 7], 7);

    let expected: HashSet<(i32, i32)> = [(1, 6), (2, 5), (3, 4)].into_iter().collect();
    assert_eq!(pairs, expected, "membership must match exactly");
}

/// Test repeated qualifying pairs collapse to one.
#[test]
fn test_pairs_deduplicated() {
    let pairs = find_pairs_summing_to(&[3, 4, 3, 4, 3, 4], 7);

    let expected: HashSet<(i32, i32)> = [(3, 4)].into_iter().collect();
    assert_eq!(pairs, expected);
}

/// Test a value pairing with itself requires two occurrences.
#[test]
fn test_pairs_self_pair_needs_two_occurrences() {
    assert!(find_pairs_summing_to(&[4], 8).is_empty(), "one 4 cannot pair");

    let pairs = find_pairs_summing_to(&[4, 4], 8);
    let expected: HashSet<(i32, i32)> = [(4, 4)].into_iter().collect();
    assert_eq!(pairs, expected);
}

/// Test negative values and targets.
#[test]
fn test_pairs_negative_values() {
    let pairs = find_pairs_summing_to(&[-3, 1, 2, -6, 3], -2);

    let expected: HashSet<(i32, i32)> = [(-3, 1)].into_iter().collect();
    assert_eq!(pairs, expected);
}

/// Test unrepresentable complements are skipped, not wrapped.
///
/// With target i32::MIN and a positive element, the complement underflows;
/// the scan must simply not match rather than panic or wrap.
#[test]
fn test_pairs_overflow_safe() {
    let pairs = find_pairs_summing_to(&[i32::MAX, 1, -1], i32::MIN);

    assert!(pairs.is_empty());
}

/// Test no qualifying pairs yields an empty set.
#[test]
fn test_pairs_none() {
    assert!(find_pairs_summing_to(&[1, 2, 3], 100).is_empty());
    assert!(find_pairs_summing_to::<i64>(&[], 5).is_empty());
}
