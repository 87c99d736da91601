//! Error types for dot product evaluation and verification.

use thiserror::Error;

/// Everything that can go wrong while evaluating or checking a dot product.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DotError {
    #[error("length mismatch: left vector has {left} elements, right vector has {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("element {index} is not numeric: {token:?}")]
    NonNumeric { index: usize, token: String },

    #[error("failed to allocate a buffer of {len} f64 elements")]
    Allocation { len: usize },

    #[error("unknown strategy '{name}'")]
    UnknownStrategy { name: String },

    #[error("variant '{variant}' failed verification: expected {expected}, got {actual}")]
    Verification {
        variant: &'static str,
        expected: f64,
        actual: f64,
    },
}

/// Result alias used throughout the crate.
pub type DotResult<T> = std::result::Result<T, DotError>;
