//! Square working matrices with 64-bit entries for the Strassen recursion.
//!
//! The quadrant sums and differences Strassen forms can leave the 32-bit
//! range even when every entry of the final product fits. The recursion
//! therefore runs on [`Wide`] values and narrows once, at the end; only a
//! product entry outside [`Element`] is an overflow.

use crate::error::MatrixError;
use crate::matrix::{Element, Matrix};
use crate::tracking;

type Acc = i64;

/// `n x n` row-major buffer of [`Acc`] values, counted by [`tracking`].
#[derive(Debug)]
pub(crate) struct Wide {
    n: usize,
    data: Vec<Acc>,
}

impl Wide {
    fn from_parts(n: usize, data: Vec<Acc>) -> Self {
        tracking::record_alloc();
        Self { n, data }
    }

    fn zeros(n: usize) -> Result<Self, MatrixError> {
        let len = n
            .checked_mul(n)
            .ok_or(MatrixError::Allocation { rows: n, cols: n })?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| MatrixError::Allocation { rows: n, cols: n })?;
        data.resize(len, 0);
        Ok(Self::from_parts(n, data))
    }

    /// Widen a square matrix.
    pub(crate) fn widen(m: &Matrix) -> Result<Self, MatrixError> {
        debug_assert!(m.is_square());
        let mut w = Self::zeros(m.rows())?;
        for (dst, &src) in w.data.iter_mut().zip(m.as_slice()) {
            *dst = Acc::from(src);
        }
        Ok(w)
    }

    /// Narrow back to entries of the matrix width.
    pub(crate) fn narrow(&self) -> Result<Matrix, MatrixError> {
        let mut m = Matrix::square(self.n)?;
        for (dst, &src) in m.as_mut_slice().iter_mut().zip(&self.data) {
            *dst = Element::try_from(src).map_err(|_| MatrixError::Overflow { op: "multiply" })?;
        }
        Ok(m)
    }

    pub(crate) fn side(&self) -> usize {
        self.n
    }

    /// The four `half x half` quadrants, in `11, 12, 21, 22` order.
    pub(crate) fn quadrants(&self) -> Result<[Self; 4], MatrixError> {
        let half = self.n / 2;
        Ok([
            self.block(0, 0, half)?,
            self.block(0, half, half)?,
            self.block(half, 0, half)?,
            self.block(half, half, half)?,
        ])
    }

    fn block(&self, row0: usize, col0: usize, size: usize) -> Result<Self, MatrixError> {
        let mut out = Self::zeros(size)?;
        for (i, dst) in out.data.chunks_exact_mut(size).enumerate() {
            let start = (row0 + i) * self.n + col0;
            dst.copy_from_slice(&self.data[start..start + size]);
        }
        Ok(out)
    }

    /// Assemble four equal quadrants into one matrix of twice the side.
    pub(crate) fn join(quads: [&Self; 4]) -> Result<Self, MatrixError> {
        let half = quads[0].n;
        let n = half * 2;
        let mut out = Self::zeros(n)?;
        for (q, (row0, col0)) in quads.iter().zip([(0, 0), (0, half), (half, 0), (half, half)]) {
            debug_assert_eq!(q.n, half);
            for (i, src) in q.data.chunks_exact(half).enumerate() {
                let start = (row0 + i) * n + col0;
                out.data[start..start + half].copy_from_slice(src);
            }
        }
        Ok(out)
    }

    pub(crate) fn add(&self, other: &Self) -> Result<Self, MatrixError> {
        self.elementwise("add", other, Acc::checked_add)
    }

    pub(crate) fn sub(&self, other: &Self) -> Result<Self, MatrixError> {
        self.elementwise("subtract", other, Acc::checked_sub)
    }

    fn elementwise(
        &self,
        op: &'static str,
        other: &Self,
        f: fn(Acc, Acc) -> Option<Acc>,
    ) -> Result<Self, MatrixError> {
        debug_assert_eq!(self.n, other.n);
        let mut out = Self::zeros(self.n)?;
        for ((dst, &x), &y) in out.data.iter_mut().zip(&self.data).zip(&other.data) {
            *dst = f(x, y).ok_or(MatrixError::Overflow { op })?;
        }
        Ok(out)
    }

    /// Triple-loop product, used below the recursion threshold.
    pub(crate) fn mul_direct(&self, other: &Self) -> Result<Self, MatrixError> {
        const OVERFLOW: MatrixError = MatrixError::Overflow { op: "multiply" };
        let n = self.n;
        let mut out = Self::zeros(n)?;
        for i in 0..n {
            let a_row = &self.data[i * n..(i + 1) * n];
            for j in 0..n {
                let mut acc: Acc = 0;
                for (k, &aik) in a_row.iter().enumerate() {
                    let term = aik.checked_mul(other.data[k * n + j]).ok_or(OVERFLOW)?;
                    acc = acc.checked_add(term).ok_or(OVERFLOW)?;
                }
                out.data[i * n + j] = acc;
            }
        }
        Ok(out)
    }
}

impl Drop for Wide {
    fn drop(&mut self) {
        tracking::record_release();
    }
}
