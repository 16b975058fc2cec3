//! Cooperative cancellation with an optional deadline.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::MatrixError;

/// Cancellation token checked at every recursion entry.
///
/// Clones share the same flag, so a handler on another thread (Ctrl+C) can
/// stop a running multiplication. A token built with [`with_timeout`]
/// additionally expires once its deadline passes.
///
/// # Example
/// ```
/// use strassen_core::cancel::CancellationToken;
///
/// let token = CancellationToken::new();
/// assert!(token.check_cancelled().is_ok());
///
/// token.cancel();
/// assert!(token.is_cancelled());
/// assert!(token.check_cancelled().is_err());
/// ```
///
/// [`with_timeout`]: CancellationToken::with_timeout
#[derive(Clone, Debug)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
    deadline: Option<(Instant, Duration)>,
}

impl CancellationToken {
    /// Create a token that only fires on [`cancel`](Self::cancel).
    #[must_use]
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            deadline: None,
        }
    }

    /// Create a token that also fires once `timeout` has elapsed.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            deadline: Some((Instant::now() + timeout, timeout)),
        }
    }

    /// Derive a token that shares this token's flag and expires `timeout`
    /// from now.
    ///
    /// Cancelling either token cancels both. The deadline belongs to the
    /// derived token only, so the clock starts when the work does.
    #[must_use]
    pub fn timed(&self, timeout: Duration) -> Self {
        Self {
            cancelled: Arc::clone(&self.cancelled),
            deadline: Some((Instant::now() + timeout, timeout)),
        }
    }

    /// Whether cancellation was requested or the deadline passed.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed) || self.expired()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    fn expired(&self) -> bool {
        self.deadline
            .is_some_and(|(deadline, _)| Instant::now() >= deadline)
    }

    /// Checkpoint: `Cancelled` on request, `Timeout` once the deadline passed.
    pub fn check_cancelled(&self) -> Result<(), MatrixError> {
        if self.cancelled.load(Ordering::Relaxed) {
            return Err(MatrixError::Cancelled);
        }
        match self.deadline {
            Some((deadline, timeout)) if Instant::now() >= deadline => {
                Err(MatrixError::Timeout(timeout))
            }
            _ => Ok(()),
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}
