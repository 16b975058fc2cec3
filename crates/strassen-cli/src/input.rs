//! Whitespace-separated integer input.
//!
//! The stream is one side length `n`, then `n*n` entries of A, then `n*n`
//! entries of B, both row-major. Tokens may be split across lines freely.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use strassen_core::{Element, Matrix, MatrixError};

/// Error type for reading matrices.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Underlying reader failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended early.
    #[error("unexpected end of input while reading {what}")]
    MissingValue { what: String },

    /// A token is not an integer in range.
    #[error("invalid integer {token:?} while reading {what}")]
    InvalidInteger { token: String, what: String },

    /// Matrix construction failed.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// Two `n x n` operands read from the input stream.
#[derive(Debug)]
pub struct MatrixPair {
    pub n: usize,
    pub a: Matrix,
    pub b: Matrix,
}

/// Lazily tokenizes a buffered reader line by line.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<Option<String>, InputError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    fn next_parsed<T: std::str::FromStr>(&mut self, what: &str) -> Result<T, InputError> {
        let token = self.next_token()?.ok_or_else(|| InputError::MissingValue {
            what: what.to_string(),
        })?;
        token.parse().map_err(|_| InputError::InvalidInteger {
            token,
            what: what.to_string(),
        })
    }

    /// Read the side length. Zero is rejected as `InvalidSize`.
    pub fn read_size(&mut self) -> Result<usize, InputError> {
        let n: usize = self.next_parsed("matrix size")?;
        if n == 0 {
            return Err(MatrixError::InvalidSize(n).into());
        }
        Ok(n)
    }

    /// Read `n*n` row-major entries into a new matrix.
    pub fn read_matrix(&mut self, n: usize, name: &str) -> Result<Matrix, InputError> {
        let len = n
            .checked_mul(n)
            .ok_or(MatrixError::Allocation { rows: n, cols: n })?;
        let what = format!("matrix {name}");
        let mut data: Vec<Element> = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| MatrixError::Allocation { rows: n, cols: n })?;
        for _ in 0..len {
            data.push(self.next_parsed(&what)?);
        }
        Ok(Matrix::from_vec(n, n, data)?)
    }
}

/// Read a full [`MatrixPair`], writing the interactive prompts to `prompt`.
///
/// Pass `std::io::sink()` to read silently.
pub fn read_pair<R: BufRead>(reader: R, prompt: &mut dyn Write) -> Result<MatrixPair, InputError> {
    let mut tokens = TokenReader::new(reader);

    write!(prompt, "Enter the size of the square matrices: ")?;
    prompt.flush()?;
    let n = tokens.read_size()?;
    tracing::debug!(n, "read matrix size");

    writeln!(prompt, "Enter elements of matrix A:")?;
    prompt.flush()?;
    let a = tokens.read_matrix(n, "A")?;

    writeln!(prompt, "Enter elements of matrix B:")?;
    prompt.flush()?;
    let b = tokens.read_matrix(n, "B")?;

    Ok(MatrixPair { n, a, b })
}
