//! Layer 4: Analysis
//!
//! This layer implements text and structure analysis: word-frequency
//! counting with top-N ranking, palindrome detection, and bracket-balance
//! checking. It depends only on primitive string and sequence operations.

// Word-frequency counting and top-N ranking.
pub mod frequency;

// Palindrome detection.
pub mod palindrome;

// Bracket-balance checking.
pub mod brackets;
