#![cfg(feature = "dev")]
//! Tests for internal math helpers.
//!
//! These tests verify the divisor-sum helper shared by the perfect-number
//! and amicable-pair predicates. It is reachable only through the
//! `dev`-gated internals surface.

use algokit::internals::math::divisors::divisor_sum;

// ============================================================================
// Divisor Sum Tests
// ============================================================================

/// Test sums for the classic inputs.
#[test]
fn test_divisor_sum_values() {
    assert_eq!(divisor_sum(6), 6);
    assert_eq!(divisor_sum(12), 16);
    assert_eq!(divisor_sum(220), 284);
    assert_eq!(divisor_sum(284), 220);
}

/// Test 1 sums to zero (no proper divisors).
#[test]
fn test_divisor_sum_one() {
    assert_eq!(divisor_sum(1), 0);
}

/// Test primes sum to exactly 1.
#[test]
fn test_divisor_sum_prime() {
    assert_eq!(divisor_sum(97), 1);
}
