//! Password-strength validation.
//!
//! ## Purpose
//!
//! This module scores a password against a fixed policy: minimum length,
//! an uppercase letter, a lowercase letter, a digit, and a special
//! character from a fixed set.
//!
//! ## Design notes
//!
//! * **Fixed order**: Checks run in policy order and every unmet check
//!   appends its specific violation, so the report lists all problems at
//!   once rather than failing fast.
//! * **Total**: Always returns a report, never an error.
//! * **ASCII classes**: Letter and digit classes are ASCII, matching the
//!   policy's character set.
//!
//! ## Invariants
//!
//! * A report is strong iff its violation list is empty.
//! * Violations appear in policy order.
//!
//! ## Non-goals
//!
//! * This module does not estimate entropy or check breach corpora.

// External dependencies
use std::fmt::{Display, Formatter, Result as FmtResult};

// ============================================================================
// Policy
// ============================================================================

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// The accepted special characters.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

// ============================================================================
// Violations
// ============================================================================

/// A specific way a password fails the strength policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordViolation {
    /// Fewer characters than the policy minimum.
    TooShort {
        /// Characters required.
        minimum: usize,
        /// Characters provided.
        actual: usize,
    },

    /// No ASCII uppercase letter.
    MissingUppercase,

    /// No ASCII lowercase letter.
    MissingLowercase,

    /// No ASCII digit.
    MissingDigit,

    /// No character from [`SPECIAL_CHARACTERS`].
    MissingSpecial,
}

impl Display for PasswordViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::TooShort { minimum, actual } => {
                write!(f, "At least {minimum} characters required (got {actual})")
            }
            Self::MissingUppercase => write!(f, "Missing an uppercase letter"),
            Self::MissingLowercase => write!(f, "Missing a lowercase letter"),
            Self::MissingDigit => write!(f, "Missing a digit"),
            Self::MissingSpecial => {
                write!(f, "Missing a special character ({SPECIAL_CHARACTERS})")
            }
        }
    }
}

// ============================================================================
// Report
// ============================================================================

/// Outcome of a password-strength check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordReport {
    /// Unmet policy checks, in policy order. Empty iff the password is strong.
    pub violations: Vec<PasswordViolation>,
}

impl PasswordReport {
    /// Whether the password met every policy check.
    pub fn is_strong(&self) -> bool {
        self.violations.is_empty()
    }

    /// Human-readable violation reasons, in policy order.
    pub fn reasons(&self) -> Vec<String> {
        self.violations.iter().map(|v| v.to_string()).collect()
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Check `candidate` against the strength policy.
///
/// # Examples
///
/// ```
/// use algokit::prelude::*;
///
/// let weak = validate_password_strength("abc123");
/// assert!(!weak.is_strong());
/// assert!(weak.violations.contains(&PasswordViolation::MissingUppercase));
/// assert!(weak.violations.contains(&PasswordViolation::MissingSpecial));
///
/// let strong = validate_password_strength("SeNH4@Forte");
/// assert!(strong.is_strong());
/// ```
pub fn validate_password_strength(candidate: &str) -> PasswordReport {
    let mut violations = Vec::new();

    let length = candidate.chars().count();
    if length < MIN_PASSWORD_LENGTH {
        violations.push(PasswordViolation::TooShort {
            minimum: MIN_PASSWORD_LENGTH,
            actual: length,
        });
    }

    if !candidate.chars().any(|c| c.is_ascii_uppercase()) {
        violations.push(PasswordViolation::MissingUppercase);
    }

    if !candidate.chars().any(|c| c.is_ascii_lowercase()) {
        violations.push(PasswordViolation::MissingLowercase);
    }

    if !candidate.chars().any(|c| c.is_ascii_digit()) {
        violations.push(PasswordViolation::MissingDigit);
    }

    if !candidate.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        violations.push(PasswordViolation::MissingSpecial);
    }

    PasswordReport { violations }
}
