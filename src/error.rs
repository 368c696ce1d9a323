//! Error type returned by callbacks and propagated by dispatch.
//!
//! There is a single error kind: a callback signalled failure while an event was
//! being dispatched. [`Dispatcher::dispatch`](crate::Dispatcher::dispatch) returns
//! the first such error **untouched** and skips the remaining callbacks.
//!
//! Registration and removal never fail, so they have no error type.
//!
//! [`CallbackError`] provides helper methods (`as_label`, `as_message`) for
//! logging/metrics.

use thiserror::Error;

/// # Failure signalled by a callback.
///
/// Callbacks return `Err(CallbackError)` to stop the current dispatch.
/// Build one with [`CallbackError::fail`] for a plain message, or
/// [`CallbackError::from_error`] to carry an underlying error.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum CallbackError {
    /// Callback failed with a human-readable reason.
    #[error("callback failed: {reason}")]
    Failed {
        /// The failure message.
        reason: String,
    },

    /// Callback failed because of an underlying error.
    #[error("callback failed: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl CallbackError {
    /// Creates a [`CallbackError::Failed`] with the given reason.
    ///
    /// # Example
    /// ```
    /// use evdispatch::CallbackError;
    ///
    /// let err = CallbackError::fail("disk full");
    /// assert_eq!(err.to_string(), "callback failed: disk full");
    /// ```
    pub fn fail(reason: impl Into<String>) -> Self {
        CallbackError::Failed {
            reason: reason.into(),
        }
    }

    /// Wraps an underlying error as a [`CallbackError::Source`].
    pub fn from_error<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        CallbackError::Source(Box::new(err))
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use evdispatch::CallbackError;
    ///
    /// assert_eq!(CallbackError::fail("boom").as_label(), "callback_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            CallbackError::Failed { .. } => "callback_failed",
            CallbackError::Source(_) => "callback_source_error",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            CallbackError::Failed { reason } => format!("failed: {reason}"),
            CallbackError::Source(err) => format!("error: {err}"),
        }
    }
}
