//! Error type for matrix construction and multiplication.

use std::time::Duration;

use crate::matrix::Shape;

/// Error type for matrix operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// Storage for a matrix could not be reserved.
    #[error("allocation of a {rows}x{cols} matrix failed")]
    Allocation { rows: usize, cols: usize },

    /// Operand shapes are incompatible for the operation.
    #[error("{op}: incompatible operand shapes {left} and {right}")]
    ShapeMismatch {
        op: &'static str,
        left: Shape,
        right: Shape,
    },

    /// Requested dimension is smaller than one.
    #[error("invalid matrix size: {0} (must be at least 1)")]
    InvalidSize(usize),

    /// Strassen recursion entered with a side length that is not a power of two.
    #[error("side length {0} is not a power of two")]
    NotPowerOfTwo(usize),

    /// Flat data buffer does not match the requested shape.
    #[error("expected {expected} entries, got {actual}")]
    DataLength { expected: usize, actual: usize },

    /// 32-bit entry arithmetic overflowed.
    #[error("{op}: integer overflow")]
    Overflow { op: &'static str },

    /// Computation was cancelled.
    #[error("multiplication cancelled")]
    Cancelled,

    /// Computation exceeded its deadline.
    #[error("multiplication timed out after {0:?}")]
    Timeout(Duration),

    /// Registry lookup for an unknown multiplier name.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}
