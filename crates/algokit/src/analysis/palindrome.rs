//! Palindrome detection.
//!
//! ## Purpose
//!
//! This module checks whether a text reads the same forward and backward
//! after normalization.
//!
//! ## Design notes
//!
//! * **Normalization**: Case-folds and keeps only ASCII letters and digits;
//!   everything else (spaces, punctuation, non-ASCII) is discarded.
//! * **Trivial case**: A string that normalizes to empty is a palindrome.
//!
//! ## Non-goals
//!
//! * This module does not handle Unicode case folding beyond ASCII.

// ============================================================================
// Palindrome Check
// ============================================================================

/// Check whether `text` is a palindrome over its ASCII alphanumerics.
///
/// # Examples
///
/// ```
/// use algokit::prelude::*;
///
/// assert!(is_palindrome("A man, a plan, a canal: Panama"));
/// assert!(!is_palindrome("Python"));
/// ```
pub fn is_palindrome(text: &str) -> bool {
    let normalized: Vec<char> = text
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    let reversed: Vec<char> = normalized.iter().rev().copied().collect();
    normalized == reversed
}
