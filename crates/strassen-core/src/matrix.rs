//! Dense row-major integer matrix.
//!
//! A `Matrix` owns one contiguous buffer of `rows * cols` entries. Storage is
//! reserved fallibly so exhaustion surfaces as [`MatrixError::Allocation`]
//! instead of aborting, and every entry is zero until written. Dropping a
//! matrix releases it; there is no separate dispose step.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::MatrixError;
use crate::tracking;

/// Entry type. Arithmetic on entries is checked against this width.
pub type Element = i32;

/// `(rows, cols)` pair describing a matrix's dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Shape of an `n x n` matrix.
    #[must_use]
    pub const fn square(n: usize) -> Self {
        Self { rows: n, cols: n }
    }

    #[must_use]
    pub const fn is_square(&self) -> bool {
        self.rows == self.cols
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Dense matrix of [`Element`] values with exclusively owned storage.
#[derive(Debug, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Element>,
}

fn alloc_zeroed(rows: usize, cols: usize) -> Result<Vec<Element>, MatrixError> {
    let len = rows
        .checked_mul(cols)
        .ok_or(MatrixError::Allocation { rows, cols })?;
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| MatrixError::Allocation { rows, cols })?;
    data.resize(len, 0);
    Ok(data)
}

impl Matrix {
    fn from_parts(rows: usize, cols: usize, data: Vec<Element>) -> Self {
        tracking::record_alloc();
        Self { rows, cols, data }
    }

    /// Allocate a `rows x cols` matrix with every entry set to zero.
    ///
    /// # Errors
    ///
    /// `InvalidSize` if either dimension is zero, `Allocation` if the
    /// storage cannot be reserved.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidSize(rows.min(cols)));
        }
        let data = alloc_zeroed(rows, cols)?;
        Ok(Self::from_parts(rows, cols, data))
    }

    /// Allocate an `n x n` zero matrix.
    pub fn square(n: usize) -> Result<Self, MatrixError> {
        Self::zeros(n, n)
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        let mut m = Self::square(n)?;
        for i in 0..n {
            m[(i, i)] = 1;
        }
        Ok(m)
    }

    /// Build a matrix from a row-major buffer.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<Element>) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidSize(rows.min(cols)));
        }
        let expected = rows
            .checked_mul(cols)
            .ok_or(MatrixError::Allocation { rows, cols })?;
        if data.len() != expected {
            return Err(MatrixError::DataLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self::from_parts(rows, cols, data))
    }

    /// Build a matrix from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<Element>>) -> Result<Self, MatrixError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if n_rows == 0 || n_cols == 0 {
            return Err(MatrixError::InvalidSize(0));
        }
        if let Some(bad) = rows.iter().find(|r| r.len() != n_cols) {
            return Err(MatrixError::DataLength {
                expected: n_cols,
                actual: bad.len(),
            });
        }
        let mut data = alloc_zeroed(n_rows, n_cols)?;
        for (dst, src) in data.chunks_exact_mut(n_cols).zip(&rows) {
            dst.copy_from_slice(src);
        }
        Ok(Self::from_parts(n_rows, n_cols, data))
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Entry at `(row, col)`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Element> {
        (row < self.rows && col < self.cols).then(|| self.data[row * self.cols + col])
    }

    /// Row `i` as a slice.
    #[must_use]
    pub fn row(&self, i: usize) -> &[Element] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Iterate over rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Element]> {
        self.data.chunks_exact(self.cols)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Element] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [Element] {
        &mut self.data
    }

    /// Copy into nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Element>> {
        self.iter_rows().map(<[Element]>::to_vec).collect()
    }

    /// Check that a block of `size` at `(row0, col0)` lies inside `self`.
    fn check_block(
        &self,
        op: &'static str,
        row0: usize,
        col0: usize,
        size: Shape,
    ) -> Result<(), MatrixError> {
        let end = row0
            .checked_add(size.rows)
            .zip(col0.checked_add(size.cols));
        match end {
            Some((r, c)) if r <= self.rows && c <= self.cols => Ok(()),
            _ => Err(MatrixError::ShapeMismatch {
                op,
                left: self.shape(),
                right: Shape::new(row0.saturating_add(size.rows), col0.saturating_add(size.cols)),
            }),
        }
    }

    /// Copy the `rows x cols` block starting at `(row0, col0)` into a new matrix.
    pub fn copy_block(
        &self,
        row0: usize,
        col0: usize,
        rows: usize,
        cols: usize,
    ) -> Result<Self, MatrixError> {
        self.check_block("copy_block", row0, col0, Shape::new(rows, cols))?;
        let mut block = Self::zeros(rows, cols)?;
        for (i, dst) in block.data.chunks_exact_mut(cols).enumerate() {
            let start = (row0 + i) * self.cols + col0;
            dst.copy_from_slice(&self.data[start..start + cols]);
        }
        Ok(block)
    }

    /// Overwrite the block starting at `(row0, col0)` with `block`.
    pub fn write_block(
        &mut self,
        row0: usize,
        col0: usize,
        block: &Matrix,
    ) -> Result<(), MatrixError> {
        self.check_block("write_block", row0, col0, block.shape())?;
        for (i, src) in block.iter_rows().enumerate() {
            let start = (row0 + i) * self.cols + col0;
            self.data[start..start + block.cols].copy_from_slice(src);
        }
        Ok(())
    }

    /// Copy into the top-left corner of a zero-filled `size x size` matrix.
    pub fn padded(&self, size: usize) -> Result<Self, MatrixError> {
        if size < self.rows || size < self.cols {
            return Err(MatrixError::ShapeMismatch {
                op: "pad",
                left: self.shape(),
                right: Shape::square(size),
            });
        }
        let mut out = Self::square(size)?;
        out.write_block(0, 0, self)?;
        Ok(out)
    }

    /// Copy of the top-left `rows x cols` region.
    pub fn truncated(&self, rows: usize, cols: usize) -> Result<Self, MatrixError> {
        self.copy_block(0, 0, rows, cols)
    }
}

impl Clone for Matrix {
    fn clone(&self) -> Self {
        Self::from_parts(self.rows, self.cols, self.data.clone())
    }
}

impl Drop for Matrix {
    fn drop(&mut self) {
        tracking::record_release();
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Element;

    fn index(&self, (row, col): (usize, usize)) -> &Element {
        assert!(row < self.rows && col < self.cols, "index ({row}, {col}) out of bounds");
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Element {
        assert!(row < self.rows && col < self.cols, "index ({row}, {col}) out of bounds");
        &mut self.data[row * self.cols + col]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{v}")?;
            }
        }
        Ok(())
    }
}
