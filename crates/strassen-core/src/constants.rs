//! Constants for multiplication thresholds and process exit codes.

/// Default base-case side length: at or below it the recursion switches to
/// direct multiplication.
pub const DEFAULT_THRESHOLD: usize = 2;

/// Exit codes for the command-line front end.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Computation timed out.
    pub const ERROR_TIMEOUT: i32 = 2;
    /// Algorithm results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration or input.
    pub const ERROR_CONFIG: i32 = 4;
    /// Matrix storage could not be allocated.
    pub const ERROR_ALLOCATION: i32 = 5;
    /// Computation cancelled by user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}
