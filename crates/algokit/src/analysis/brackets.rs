//! Bracket-balance checking.
//!
//! ## Purpose
//!
//! This module verifies that the parentheses, square brackets, and curly
//! braces of an expression nest correctly.
//!
//! ## Design notes
//!
//! * **Single scan**: One left-to-right pass with an explicit stack of open
//!   brackets; O(L) time, O(L) worst-case stack space.
//! * **Short-circuit**: A closer with no matching opener on top of the
//!   stack fails immediately.
//! * **Selective**: Characters other than `(){}[]` are ignored.
//!
//! ## Invariants
//!
//! * The expression is balanced iff the scan consumes every closer against
//!   its matching opener and leaves the stack empty.

// ============================================================================
// Balance Check
// ============================================================================

/// Closer matching an opening bracket.
fn closing(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        _ => '}',
    }
}

/// Check whether the brackets of `expression` are balanced.
///
/// # Examples
///
/// ```
/// use algokit::prelude::*;
///
/// assert!(brackets_balanced("({[]})"));
/// assert!(!brackets_balanced("({[}])"));
/// assert!(brackets_balanced("no brackets at all"));
/// ```
pub fn brackets_balanced(expression: &str) -> bool {
    let mut stack: Vec<char> = Vec::new();

    for c in expression.chars() {
        match c {
            '(' | '[' | '{' => stack.push(c),
            ')' | ']' | '}' => match stack.pop() {
                Some(open) if closing(open) == c => {}
                _ => return false,
            },
            _ => {}
        }
    }

    stack.is_empty()
}
