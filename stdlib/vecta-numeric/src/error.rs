//! Error types for vector operations.

use thiserror::Error;

/// Errors raised by checked vector operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    /// The element type is not one of the supported kinds.
    #[error("type `{type_name}` is not a supported vector element kind")]
    NotSupportedKind {
        /// Rust name of the rejected type.
        type_name: &'static str,
    },

    /// An index or offset lies outside the addressed lanes or buffer.
    #[error("index {index} out of range: {required} elements required, {available} available")]
    OutOfRange {
        /// Offending index or offset.
        index: usize,
        /// Elements the operation needs.
        required: usize,
        /// Elements actually present.
        available: usize,
    },

    /// A load was given a null pointer.
    #[error("source pointer is null")]
    NullSource,

    /// A store was given a null pointer.
    #[error("destination pointer is null")]
    NullDestination,

    /// An integer lane was divided by zero.
    #[error("integer division by zero")]
    DivideByZero,

    /// The destination is long enough overall but not from the given offset.
    #[error(
        "destination too short from offset {offset}: {required} elements required, {available} available"
    )]
    ArgumentShape {
        /// Start offset.
        offset: usize,
        /// Elements the operation needs.
        required: usize,
        /// Elements present from `offset` on.
        available: usize,
    },
}

/// Result type for vector operations.
pub type VectorResult<T> = Result<T, VectorError>;
