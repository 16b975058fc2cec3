//! Strassen's divide-and-conquer matrix multiplication.
//!
//! Each level splits both operands into quadrants, forms seven half-size
//! products from sums and differences of those quadrants, and recombines
//! them into the four result quadrants:
//!
//! ```text
//! P1 = (A11 + A22)(B11 + B22)      C11 = ((P1 + P4) - P5) + P7
//! P2 = (A21 + A22) B11             C12 = P3 + P5
//! P3 = A11 (B12 - B22)             C21 = P2 + P4
//! P4 = A22 (B21 - B11)             C22 = ((P1 + P3) - P2) + P6
//! P5 = (A11 + A12) B22
//! P6 = (A21 - A11)(B11 + B12)
//! P7 = (A12 - A22)(B21 + B22)
//! ```
//!
//! The recursion works on 64-bit intermediates, so a sum or difference that
//! leaves the `i32` range is not an error; only a product entry that does not
//! fit is reported as `Overflow`. Every intermediate is owned by the frame
//! that made it and is released on return, including early returns on error.

use tracing::{debug, trace};

use crate::cancel::CancellationToken;
use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::options::Options;
use crate::padding::next_power_of_two;
use crate::wide::Wide;

/// Multiply two square matrices whose side is a power of two.
///
/// Recursion stops at side lengths `<= threshold`, which are multiplied
/// directly. Arbitrary sizes go through [`multiply`] instead.
///
/// # Errors
///
/// `ShapeMismatch` for non-square or unequal operands, `NotPowerOfTwo` for
/// other side lengths, plus any error raised during recursion.
pub fn strassen_multiply(
    a: &Matrix,
    b: &Matrix,
    threshold: usize,
    cancel: &CancellationToken,
) -> Result<Matrix, MatrixError> {
    check_square_pair(a, b)?;
    let n = a.rows();
    if !n.is_power_of_two() {
        return Err(MatrixError::NotPowerOfTwo(n));
    }
    let product = recurse(&Wide::widen(a)?, &Wide::widen(b)?, threshold.max(1), cancel)?;
    product.narrow()
}

/// Multiply two `n x n` matrices of any size `n >= 1`.
///
/// Operands are zero-padded to the next power of two, multiplied with
/// [`strassen_multiply`], and the top-left `n x n` region of the product is
/// returned. Padding rows and columns contribute zero to that region.
pub fn multiply(
    a: &Matrix,
    b: &Matrix,
    opts: &Options,
    cancel: &CancellationToken,
) -> Result<Matrix, MatrixError> {
    check_square_pair(a, b)?;
    let n = a.rows();
    let size = next_power_of_two(n)?;
    let threshold = opts.clone().normalize().threshold;
    debug!(n, padded = size, threshold, "strassen multiply");

    if size == n {
        return strassen_multiply(a, b, threshold, cancel);
    }
    let product = strassen_multiply(&a.padded(size)?, &b.padded(size)?, threshold, cancel)?;
    product.truncated(n, n)
}

fn check_square_pair(a: &Matrix, b: &Matrix) -> Result<(), MatrixError> {
    if a.is_square() && a.shape() == b.shape() {
        Ok(())
    } else {
        Err(MatrixError::ShapeMismatch {
            op: "strassen",
            left: a.shape(),
            right: b.shape(),
        })
    }
}

fn recurse(
    a: &Wide,
    b: &Wide,
    threshold: usize,
    cancel: &CancellationToken,
) -> Result<Wide, MatrixError> {
    cancel.check_cancelled()?;
    let n = a.side();
    debug_assert!(n.is_power_of_two() && n == b.side());

    if n <= threshold {
        return a.mul_direct(b);
    }

    trace!(n, half = n / 2, "strassen split");
    let [a11, a12, a21, a22] = a.quadrants()?;
    let [b11, b12, b21, b22] = b.quadrants()?;

    let p1 = recurse(&a11.add(&a22)?, &b11.add(&b22)?, threshold, cancel)?;
    let p2 = recurse(&a21.add(&a22)?, &b11, threshold, cancel)?;
    let p3 = recurse(&a11, &b12.sub(&b22)?, threshold, cancel)?;
    let p4 = recurse(&a22, &b21.sub(&b11)?, threshold, cancel)?;
    let p5 = recurse(&a11.add(&a12)?, &b22, threshold, cancel)?;
    let p6 = recurse(&a21.sub(&a11)?, &b11.add(&b12)?, threshold, cancel)?;
    let p7 = recurse(&a12.sub(&a22)?, &b21.add(&b22)?, threshold, cancel)?;

    let c11 = p1.add(&p4)?.sub(&p5)?.add(&p7)?;
    let c12 = p3.add(&p5)?;
    let c21 = p2.add(&p4)?;
    let c22 = p1.add(&p3)?.sub(&p2)?.add(&p6)?;

    Wide::join([&c11, &c12, &c21, &c22])
}
