//! Triple-loop matrix multiplication, the base case of the recursion.

use crate::error::MatrixError;
use crate::matrix::{Element, Matrix};

const OVERFLOW: MatrixError = MatrixError::Overflow { op: "multiply" };

/// Multiply an `m x k` matrix by a `k x n` matrix with the standard triple loop.
///
/// Partial sums are accumulated in 64 bits, so only a finished entry outside
/// the [`Element`] range is reported as `Overflow`.
pub fn multiply_direct(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    if a.cols() != b.rows() {
        return Err(MatrixError::ShapeMismatch {
            op: "multiply",
            left: a.shape(),
            right: b.shape(),
        });
    }
    let mut c = Matrix::zeros(a.rows(), b.cols())?;
    for i in 0..a.rows() {
        let a_row = a.row(i);
        for j in 0..b.cols() {
            let mut acc: i64 = 0;
            for (k, &aik) in a_row.iter().enumerate() {
                let term = i64::from(aik) * i64::from(b[(k, j)]);
                acc = acc.checked_add(term).ok_or(OVERFLOW)?;
            }
            c[(i, j)] = Element::try_from(acc).map_err(|_| OVERFLOW)?;
        }
    }
    Ok(c)
}
