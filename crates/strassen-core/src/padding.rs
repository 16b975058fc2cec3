//! Size normalization to power-of-two side lengths.

use crate::error::MatrixError;

/// Smallest power of two that is `>= n`.
///
/// # Errors
///
/// `InvalidSize` for `n == 0`, `Allocation` when the result does not fit in
/// `usize`.
///
/// # Example
/// ```
/// use strassen_core::padding::next_power_of_two;
///
/// assert_eq!(next_power_of_two(5).unwrap(), 8);
/// assert_eq!(next_power_of_two(8).unwrap(), 8);
/// ```
pub fn next_power_of_two(n: usize) -> Result<usize, MatrixError> {
    if n == 0 {
        return Err(MatrixError::InvalidSize(n));
    }
    n.checked_next_power_of_two()
        .ok_or(MatrixError::Allocation { rows: n, cols: n })
}
