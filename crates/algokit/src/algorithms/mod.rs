//! Layer 3: Algorithms
//!
//! This layer implements the classical algorithms of the crate: binary
//! search, stable merge sort, memoized Fibonacci, and longest common
//! subsequence. Each is a pure function over borrowed inputs.

// Binary search over sorted slices.
pub mod search;

// Stable merge sort.
pub mod sort;

// Memoized Fibonacci and LCS reconstruction.
pub mod dp;
