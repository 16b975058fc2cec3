//! Multiplier trait, its implementations, and name-based selection.

use crate::cancel::CancellationToken;
use crate::direct::multiply_direct;
use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::options::Options;
use crate::strassen;

/// Narrow interface for square matrix multiplication.
pub trait MatrixMultiplier: Send + Sync {
    /// Multiply two `n x n` matrices.
    fn multiply(
        &self,
        a: &Matrix,
        b: &Matrix,
        cancel: &CancellationToken,
    ) -> Result<Matrix, MatrixError>;

    /// Get the name of this multiplier.
    fn name(&self) -> &'static str;

    /// Base-case side length, for recursive multipliers.
    fn threshold(&self) -> Option<usize> {
        None
    }
}

/// Triple-loop multiplication without recursion.
#[derive(Debug, Default)]
pub struct DirectMultiplier;

impl DirectMultiplier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl MatrixMultiplier for DirectMultiplier {
    fn multiply(
        &self,
        a: &Matrix,
        b: &Matrix,
        cancel: &CancellationToken,
    ) -> Result<Matrix, MatrixError> {
        cancel.check_cancelled()?;
        multiply_direct(a, b)
    }

    fn name(&self) -> &'static str {
        "Direct"
    }
}

/// Strassen multiplication with padding to the next power of two.
#[derive(Debug, Default)]
pub struct StrassenMultiplier {
    opts: Options,
}

impl StrassenMultiplier {
    #[must_use]
    pub fn new(opts: Options) -> Self {
        Self {
            opts: opts.normalize(),
        }
    }
}

impl MatrixMultiplier for StrassenMultiplier {
    fn multiply(
        &self,
        a: &Matrix,
        b: &Matrix,
        cancel: &CancellationToken,
    ) -> Result<Matrix, MatrixError> {
        strassen::multiply(a, b, &self.opts, cancel)
    }

    fn name(&self) -> &'static str {
        "Strassen"
    }

    fn threshold(&self) -> Option<usize> {
        Some(self.opts.threshold)
    }
}

/// Names accepted by [`multipliers_for`], besides `all`.
pub const AVAILABLE: [&str; 2] = ["strassen", "direct"];

fn create(name: &str, opts: &Options) -> Result<Box<dyn MatrixMultiplier>, MatrixError> {
    match name {
        "strassen" => Ok(Box::new(StrassenMultiplier::new(opts.clone()))),
        "direct" | "naive" => Ok(Box::new(DirectMultiplier::new())),
        _ => Err(MatrixError::UnknownAlgorithm(name.to_string())),
    }
}

/// Get the multipliers to run for an algorithm selection.
///
/// `all` yields every available multiplier, Strassen first.
pub fn multipliers_for(
    algo: &str,
    opts: &Options,
) -> Result<Vec<Box<dyn MatrixMultiplier>>, MatrixError> {
    match algo {
        "all" => AVAILABLE.iter().map(|name| create(name, opts)).collect(),
        name => Ok(vec![create(name, opts)?]),
    }
}
