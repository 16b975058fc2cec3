//! Multiplication options.

use crate::constants::DEFAULT_THRESHOLD;

/// Options for Strassen multiplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Base-case side length. Zero means "use the default".
    pub threshold: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.threshold == 0 {
            self.threshold = DEFAULT_THRESHOLD;
        }
        self
    }
}
