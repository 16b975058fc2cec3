//! Elementwise matrix addition and subtraction.

use crate::error::MatrixError;
use crate::matrix::{Element, Matrix};

fn elementwise(
    op: &'static str,
    a: &Matrix,
    b: &Matrix,
    f: fn(Element, Element) -> Option<Element>,
) -> Result<Matrix, MatrixError> {
    if a.shape() != b.shape() {
        return Err(MatrixError::ShapeMismatch {
            op,
            left: a.shape(),
            right: b.shape(),
        });
    }
    let mut out = Matrix::zeros(a.rows(), a.cols())?;
    for ((dst, &x), &y) in out
        .as_mut_slice()
        .iter_mut()
        .zip(a.as_slice())
        .zip(b.as_slice())
    {
        *dst = f(x, y).ok_or(MatrixError::Overflow { op })?;
    }
    Ok(out)
}

/// `a + b` as a new matrix.
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    elementwise("add", a, b, Element::checked_add)
}

/// `a - b` as a new matrix.
pub fn subtract(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    elementwise("subtract", a, b, Element::checked_sub)
}
