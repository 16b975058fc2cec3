//! # strassen-core
//!
//! Dense 32-bit integer matrices with direct and Strassen multiplication.
//! Arbitrary square sizes are zero-padded to the next power of two before
//! the recursion and trimmed back afterwards.

pub mod arith;
pub mod cancel;
pub mod constants;
pub mod direct;
pub mod error;
pub mod matrix;
pub mod multiplier;
pub mod options;
pub mod padding;
pub mod strassen;
pub mod tracking;
mod wide;

// Re-exports
pub use cancel::CancellationToken;
pub use constants::{exit_codes, DEFAULT_THRESHOLD};
pub use error::MatrixError;
pub use matrix::{Element, Matrix, Shape};
pub use multiplier::{multipliers_for, DirectMultiplier, MatrixMultiplier, StrassenMultiplier};
pub use options::Options;

/// Multiply two square matrices of equal side with Strassen's algorithm
/// and default options.
///
/// For cancellation or a custom threshold, use [`strassen::multiply`].
///
/// # Example
/// ```
/// use strassen_core::Matrix;
///
/// let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
/// let c = strassen_core::multiply(&a, &b).unwrap();
/// assert_eq!(c.to_rows(), vec![vec![19, 22], vec![43, 50]]);
/// ```
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    strassen::multiply(a, b, &Options::default(), &CancellationToken::new())
}
