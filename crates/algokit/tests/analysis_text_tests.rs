//! Tests for palindrome detection and bracket balancing.
//!
//! These tests verify the structural text checks used in algokit for:
//! - Palindrome detection over normalized ASCII alphanumerics
//! - Bracket matching with an explicit stack
//!
//! ## Test Organization
//!
//! 1. **Palindromes** - Classic phrases, negatives, normalization
//! 2. **Brackets** - Balanced and unbalanced nesting, ignored characters

use algokit::prelude::*;

// ============================================================================
// Palindrome Tests
// ============================================================================

/// Test the classic mixed-punctuation palindrome.
#[test]
fn test_palindrome_panama() {
    assert!(is_palindrome("A man, a plan, a canal: Panama"));
}

/// Test a plain non-palindrome.
#[test]
fn test_palindrome_negative() {
    assert!(!is_palindrome("Python"));
}

/// Test case folding.
#[test]
fn test_palindrome_case_insensitive() {
    assert!(is_palindrome("RaceCar"));
}

/// Test digits participate in the comparison.
#[test]
fn test_palindrome_digits() {
    assert!(is_palindrome("12321"));
    assert!(!is_palindrome("12345"));
}

/// Test strings that normalize to empty are trivially palindromes.
#[test]
fn test_palindrome_empty_after_normalization() {
    assert!(is_palindrome(""));
    assert!(is_palindrome("?!, --- .:"));
}

/// Test non-ASCII characters are discarded before comparison.
#[test]
fn test_palindrome_ignores_non_ascii() {
    // The accented characters drop out, leaving "aba" and "ab".
    assert!(is_palindrome("aébça"));
    assert!(!is_palindrome("aébçá"));
}

// ============================================================================
// Bracket Tests
// ============================================================================

/// Test the balanced worked example.
#[test]
fn test_brackets_balanced_nested() {
    assert!(brackets_balanced("({[]})"));
    assert!(brackets_balanced("{[()]}"));
}

/// Test the interleaved (unbalanced) worked example.
#[test]
fn test_brackets_interleaved() {
    assert!(!brackets_balanced("({[}])"));
}

/// Test unclosed openers fail.
#[test]
fn test_brackets_unclosed() {
    assert!(!brackets_balanced("((("));
    assert!(!brackets_balanced("({["));
}

/// Test a closer with no opener fails immediately.
#[test]
fn test_brackets_underflow() {
    assert!(!brackets_balanced(")"));
    assert!(!brackets_balanced("())"));
}

/// Test non-bracket characters are ignored.
#[test]
fn test_brackets_ignores_other_characters() {
    assert!(brackets_balanced("fn apply(items: &[u8]) -> Vec<u8> { items.to_vec() }"));
    assert!(brackets_balanced("no brackets at all"));
    assert!(brackets_balanced(""));
}

/// Test mismatched bracket kinds fail.
#[test]
fn test_brackets_kind_mismatch() {
    assert!(!brackets_balanced("(]"));
    assert!(!brackets_balanced("{)"));
}
