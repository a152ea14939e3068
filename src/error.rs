// src/error.rs
//! Error type shared by calculator dispatch and vector geometry.

use thiserror::Error;

/// Errors raised by operations, the calculator registry, and the vector
/// types. Every error is raised at the point of detection and propagates to
/// the caller unchanged; nothing in this crate retries or falls back.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Blank operation name, or an operand list of the wrong arity.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation name not present in the registry.
    #[error("unsupported operation \"{name}\"; supported operations: {supported}")]
    UnsupportedOperation {
        /// The name that failed to resolve.
        name: String,
        /// Every registered name, sorted, comma-separated.
        supported: String,
    },

    /// Zero divisor, rejected before the division is performed, for
    /// floating-point elements too, instead of the IEEE ±infinity result.
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// Geometric operation across vectors of different dimensionality.
    #[error("dimension mismatch: expected a {expected}-D vector, got {actual}-D")]
    DimensionMismatch {
        /// Dimensionality of the receiver.
        expected: usize,
        /// Dimensionality of the argument.
        actual: usize,
    },

    /// Normalization of a vector whose magnitude is exactly zero.
    #[error("cannot normalize a zero vector")]
    ZeroVector,
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
