//! Syntactic email validation.
//!
//! ## Purpose
//!
//! This module checks whether a string has the shape of an email address:
//! local part, `@`, domain, a literal dot, and a 2+ letter extension.
//!
//! ## Design notes
//!
//! * **Fixed pattern**: One anchored regex, compiled once into a process-wide
//!   static on first use.
//! * **Syntactic only**: No DNS lookup, no deliverability check, no RFC 5321
//!   completeness. The accepted alphabet is ASCII.
//! * **Total**: Always returns a boolean, never an error.
//!
//! ## Non-goals
//!
//! * This module does not normalize or canonicalize addresses.

// External dependencies
use once_cell::sync::Lazy;
use regex::Regex;

// ============================================================================
// Pattern
// ============================================================================

/// Anchored address shape: local part, `@`, domain, dot, 2+ letter extension.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("Invalid regex pattern")
});

// ============================================================================
// Validation
// ============================================================================

/// Check whether `candidate` is syntactically a valid email address.
///
/// # Examples
///
/// ```
/// use algokit::prelude::*;
///
/// assert!(validate_email("user@example.com"));
/// assert!(validate_email("user.name@domain.co.br"));
/// assert!(!validate_email("broken-email@"));
/// assert!(!validate_email("no.at.sign.com"));
/// ```
pub fn validate_email(candidate: &str) -> bool {
    EMAIL_PATTERN.is_match(candidate)
}
