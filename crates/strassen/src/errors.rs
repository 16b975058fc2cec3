//! Application errors and exit codes.

use strassen_cli::input::InputError;
use strassen_core::constants::exit_codes;
use strassen_core::MatrixError;

/// Errors raised by the application layer itself.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Two algorithms produced different products.
    #[error("result mismatch between {left} and {right}")]
    Mismatch {
        left: &'static str,
        right: &'static str,
    },
}

/// Exit code for a core matrix error.
#[must_use]
pub fn exit_code(err: &MatrixError) -> i32 {
    match err {
        MatrixError::Allocation { .. } => exit_codes::ERROR_ALLOCATION,
        MatrixError::InvalidSize(_) | MatrixError::UnknownAlgorithm(_) => exit_codes::ERROR_CONFIG,
        MatrixError::Cancelled => exit_codes::ERROR_CANCELED,
        MatrixError::Timeout(_) => exit_codes::ERROR_TIMEOUT,
        MatrixError::ShapeMismatch { .. }
        | MatrixError::NotPowerOfTwo(_)
        | MatrixError::DataLength { .. }
        | MatrixError::Overflow { .. } => exit_codes::ERROR_GENERIC,
    }
}

/// Handle an application error and return the appropriate exit code.
#[must_use]
pub fn handle_error(err: &anyhow::Error) -> i32 {
    if let Some(e) = err.downcast_ref::<MatrixError>() {
        return exit_code(e);
    }
    if let Some(e) = err.downcast_ref::<InputError>() {
        return match e {
            InputError::Matrix(inner) => exit_code(inner),
            InputError::Io(_) => exit_codes::ERROR_GENERIC,
            InputError::MissingValue { .. } | InputError::InvalidInteger { .. } => {
                exit_codes::ERROR_CONFIG
            }
        };
    }
    if let Some(AppError::Mismatch { .. }) = err.downcast_ref::<AppError>() {
        return exit_codes::ERROR_MISMATCH;
    }
    exit_codes::ERROR_GENERIC
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn error_codes() {
        assert_eq!(exit_code(&MatrixError::Cancelled), 130);
        assert_eq!(exit_code(&MatrixError::Timeout(Duration::from_secs(1))), 2);
        assert_eq!(exit_code(&MatrixError::InvalidSize(0)), 4);
        assert_eq!(exit_code(&MatrixError::Allocation { rows: 1, cols: 1 }), 5);
        assert_eq!(exit_code(&MatrixError::Overflow { op: "add" }), 1);
    }

    #[test]
    fn handle_wrapped_errors() {
        let mismatch = anyhow::Error::new(AppError::Mismatch {
            left: "Strassen",
            right: "Direct",
        });
        assert_eq!(handle_error(&mismatch), 3);

        let input = anyhow::Error::new(InputError::MissingValue {
            what: "matrix A".into(),
        });
        assert_eq!(handle_error(&input), 4);

        let nested = anyhow::Error::new(InputError::Matrix(MatrixError::InvalidSize(0)));
        assert_eq!(handle_error(&nested), 4);

        assert_eq!(handle_error(&anyhow::anyhow!("boom")), 1);
    }
}
