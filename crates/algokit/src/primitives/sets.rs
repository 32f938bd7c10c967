//! Set algebra over hash sets.
//!
//! ## Purpose
//!
//! This module derives the four standard set operations (union,
//! intersection, difference, symmetric difference) from a pair of input
//! sets in a single call, returning each as an independent owned set.
//!
//! ## Design notes
//!
//! * **Value semantics**: Inputs are borrowed; every derived set is a fresh
//!   allocation with cloned elements.
//! * **Bundled result**: All four operations are computed together and
//!   returned as one record, mirroring how callers consume them.
//!
//! ## Invariants
//!
//! * `union` is commutative: swapping the inputs yields an equal set.
//! * `symmetric_difference` is commutative.
//! * `difference` is directional: it holds elements of the first input that
//!   are absent from the second.
//!
//! ## Non-goals
//!
//! * This module does not provide ordered set operations.

// External dependencies
use std::collections::HashSet;
use std::hash::Hash;

// ============================================================================
// Result Structure
// ============================================================================

/// The four derived sets produced by [`set_algebra`].
///
/// Compare the individual fields; the record itself is not `PartialEq`
/// because its hash-set fields would need `T: Eq + Hash` bounds the
/// derive cannot express.
#[derive(Debug, Clone)]
pub struct SetAlgebra<T> {
    /// Elements in either input.
    pub union: HashSet<T>,

    /// Elements in both inputs.
    pub intersection: HashSet<T>,

    /// Elements of the first input absent from the second (A − B).
    pub difference: HashSet<T>,

    /// Elements in exactly one of the inputs.
    pub symmetric_difference: HashSet<T>,
}

// ============================================================================
// Set Operations
// ============================================================================

/// Compute union, intersection, difference, and symmetric difference of two sets.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use algokit::prelude::*;
///
/// let a: HashSet<i32> = [1, 2, 3].into_iter().collect();
/// let b: HashSet<i32> = [2, 3, 4].into_iter().collect();
///
/// let ops = set_algebra(&a, &b);
/// assert_eq!(ops.intersection, [2, 3].into_iter().collect());
/// assert_eq!(ops.difference, [1].into_iter().collect());
/// ```
pub fn set_algebra<T>(a: &HashSet<T>, b: &HashSet<T>) -> SetAlgebra<T>
where
    T: Eq + Hash + Clone,
{
    SetAlgebra {
        union: a.union(b).cloned().collect(),
        intersection: a.intersection(b).cloned().collect(),
        difference: a.difference(b).cloned().collect(),
        symmetric_difference: a.symmetric_difference(b).cloned().collect(),
    }
}
