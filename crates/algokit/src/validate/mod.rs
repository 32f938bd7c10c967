//! Layer 5: Validate
//!
//! This layer implements the two syntactic validators. Both are total:
//! they always return a structured verdict and never produce an error.

// Syntactic email validation.
pub mod email;

// Password-strength validation.
pub mod password;
