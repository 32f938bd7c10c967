//! Word-frequency counting and top-N ranking.
//!
//! ## Purpose
//!
//! This module counts case-folded token occurrences in a text and ranks the
//! most frequent tokens.
//!
//! ## Design notes
//!
//! * **Tokenization**: The text is lowercased and split on whitespace runs.
//!   Punctuation attached to a word stays part of the token.
//! * **Deterministic ties**: Ranking sorts by count descending with a stable
//!   sort over an encounter-ordered vector, so equal counts keep
//!   first-encounter order.
//!
//! ## Invariants
//!
//! * Frequency-map values sum to the number of tokens in the text.
//! * `top_n` never returns more than `n` entries, and never more than the
//!   number of distinct tokens.
//!
//! ## Non-goals
//!
//! * This module does not strip punctuation or perform stemming.
//! * This module does not apply locale-specific collation.

// External dependencies
use std::collections::HashMap;

// ============================================================================
// Frequency Counting
// ============================================================================

/// Count occurrences of each case-folded token in `text`.
///
/// # Examples
///
/// ```
/// use algokit::prelude::*;
///
/// let freq = word_frequency("a A b");
/// assert_eq!(freq.get("a"), Some(&2));
/// assert_eq!(freq.get("b"), Some(&1));
/// ```
pub fn word_frequency(text: &str) -> HashMap<String, usize> {
    let mut frequency = HashMap::new();

    for token in text.to_lowercase().split_whitespace() {
        *frequency.entry(token.to_string()).or_insert(0) += 1;
    }

    frequency
}

// ============================================================================
// Top-N Ranking
// ============================================================================

/// The `n` most frequent tokens of `text`, most frequent first.
///
/// Ties are broken by first-encounter order. Yields fewer than `n` entries
/// when the text has fewer distinct tokens; `n == 0` yields an empty list.
///
/// # Examples
///
/// ```
/// use algokit::prelude::*;
///
/// let ranked = top_n("to be or not to be", 2);
/// assert_eq!(ranked, vec![("to".to_string(), 2), ("be".to_string(), 2)]);
/// ```
pub fn top_n(text: &str, n: usize) -> Vec<(String, usize)> {
    // Accumulate counts in encounter order so the stable sort below breaks
    // ties deterministically.
    let mut ranked: Vec<(String, usize)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for token in text.to_lowercase().split_whitespace() {
        match positions.get(token) {
            Some(&at) => ranked[at].1 += 1,
            None => {
                positions.insert(token.to_string(), ranked.len());
                ranked.push((token.to_string(), 1));
            }
        }
    }

    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}
