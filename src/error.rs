//! Error type returned by broadcast handlers.
//!
//! The registry itself never fails: unknown signals, duplicate watches and
//! unwatching an absent listener are documented no-ops. The only
//! error-producing unit is a handler invocation, and broadcast discards
//! its result by design (best-effort delivery, at most one attempt per
//! listener). [`HandlerError`] exists so that call sites which wrap a handler
//! can still inspect what went wrong.

use thiserror::Error;

/// # Errors produced by handler invocations.
///
/// Returned from a handler to signal that a delivery was not processed.
/// The registry observes the result and drops it; wrap the handler closure
/// if the failure needs to be counted or logged.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum HandlerError {
    /// Handler attempted to process the delivery and failed.
    #[error("handler failed: {reason}")]
    Failed {
        /// Underlying failure description.
        reason: String,
    },

    /// Handler declined to process a delivery for this signal.
    #[error("handler rejected signal {signal:?}")]
    Rejected {
        /// The signal the handler refused.
        signal: String,
    },
}

impl HandlerError {
    /// Builds a [`HandlerError::Failed`] from any displayable reason.
    pub fn failed(reason: impl Into<String>) -> Self {
        HandlerError::Failed {
            reason: reason.into(),
        }
    }

    /// Builds a [`HandlerError::Rejected`] for the given signal.
    pub fn rejected(signal: impl Into<String>) -> Self {
        HandlerError::Rejected {
            signal: signal.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use signalcast::HandlerError;
    ///
    /// let err = HandlerError::failed("connection refused");
    /// assert_eq!(err.as_label(), "handler_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            HandlerError::Failed { .. } => "handler_failed",
            HandlerError::Rejected { .. } => "handler_rejected",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            HandlerError::Failed { reason } => format!("failed: {reason}"),
            HandlerError::Rejected { signal } => format!("rejected: signal={signal}"),
        }
    }
}
