//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports all necessary functions and
//! types for convenient usage of the algokit API. The prelude should
//! provide a one-stop import for the whole public surface.
//!
//! ## Test Organization
//!
//! 1. **Import Verification** - Every component is reachable unqualified
//! 2. **Error Type** - The shared error type works with `?`

use std::collections::{HashMap, HashSet};

use algokit::prelude::*;

// ============================================================================
// Import Verification Tests
// ============================================================================

/// Test every component is callable through the prelude alone.
#[test]
fn test_prelude_covers_all_components() {
    // Search & sort
    let sorted = merge_sort(&[3, 1, 2]);
    assert_eq!(binary_search(&sorted, &2), Some(1));

    // Dynamic programming
    assert_eq!(fibonacci(10).unwrap(), 55);
    let mut memo = HashMap::new();
    assert_eq!(fibonacci_with(10, &mut memo).unwrap(), 55);
    assert_eq!(longest_common_subsequence("abc", "abc"), "abc");
    assert_eq!(longest_common_subsequence_of(&[1, 2], &[2, 3]), vec![2]);

    // Text & structure analysis
    assert_eq!(word_frequency("x x").get("x"), Some(&2));
    assert_eq!(top_n("x x y", 1), vec![("x".to_string(), 2)]);
    assert!(is_palindrome("noon"));
    assert!(brackets_balanced("[]"));

    // Number & set utilities
    assert_eq!(proper_divisors(6).unwrap(), vec![1, 2, 3]);
    assert!(is_perfect_number(6));
    assert!(are_amicable(220, 284));
    assert_eq!(deduplicate(&[1, 1, 2]), vec![1, 2]);
    assert_eq!(rotate_right(&[1, 2, 3], 1), vec![3, 1, 2]);
    assert_eq!(find_pairs_summing_to(&[1, 2], 3).len(), 1);

    let a: HashSet<i32> = [1, 2].into_iter().collect();
    let b: HashSet<i32> = [2, 3].into_iter().collect();
    let _: SetAlgebra<i32> = set_algebra(&a, &b);

    // Validators & finance
    assert!(validate_email("user@example.com"));
    let report: PasswordReport = validate_password_strength("abc123");
    assert!(report.violations.contains(&PasswordViolation::MissingUppercase));
    let _: InterestBreakdown<f64> = compound_interest(100.0, 5.0, 1, 12).unwrap();
}

/// Test the policy constants are exported.
#[test]
fn test_prelude_constants() {
    assert_eq!(MAX_FIBONACCI_INDEX, 93);
    assert_eq!(MIN_PASSWORD_LENGTH, 8);
    assert!(SPECIAL_CHARACTERS.contains('@'));
}

/// Test the builder is exported and fluent.
#[test]
fn test_prelude_builder() {
    let outcome = CompoundInterest::new()
        .principal(100.0)
        .annual_rate(10.0)
        .years(1)
        .compounds_per_year(1)
        .compute();

    assert!(outcome.is_ok());
}

// ============================================================================
// Error Type Tests
// ============================================================================

/// Test the error type composes with `?` in caller code.
#[test]
fn test_prelude_error_composes() {
    fn sum_of_divisors(n: u64) -> Result<u64, AlgoKitError> {
        Ok(proper_divisors(n)?.into_iter().sum())
    }

    assert_eq!(sum_of_divisors(28).unwrap(), 28);
    assert!(sum_of_divisors(0).is_err());
}

/// Test errors render through Display and implement std::error::Error.
#[test]
fn test_prelude_error_display() {
    let err: Box<dyn std::error::Error> = Box::new(AlgoKitError::DivisorsOfZero);

    assert!(err.to_string().contains("divisors"), "got: {err}");
}
