//! Error types used by subscriptions, consumers and cancel handles.
//!
//! This module defines three types:
//!
//! - [`DeliveryError`]: a consumer could not accept an event.
//! - [`CancelError`]: an upstream cancel handle failed to release its resource.
//! - [`StreamError`]: the payload carried by [`Event::Error`](crate::Event::Error).
//!
//! The two enums provide `as_label` helpers for logging/metrics.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

/// Result of delivering one event to a consumer.
pub type Outcome = Result<(), DeliveryError>;

/// # Errors reported by a consumer for a single delivery.
///
/// A delivery failure is handed back to the producer through
/// [`EventForwarder::forward`](crate::EventForwarder::forward).
/// It never triggers disposal on its own.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    /// Consumer refused the event (e.g. it cannot accept further input).
    #[error("event rejected: {reason}")]
    Rejected {
        /// Why the consumer refused the event.
        reason: String,
    },

    /// Consumer queue is full.
    #[error("consumer queue full")]
    Full,

    /// Consumer is gone (receiving side closed).
    #[error("consumer closed")]
    Closed,
}

impl DeliveryError {
    /// Shorthand for [`DeliveryError::Rejected`].
    pub fn rejected(reason: impl Into<String>) -> Self {
        DeliveryError::Rejected {
            reason: reason.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use rxsink::DeliveryError;
    ///
    /// assert_eq!(DeliveryError::Full.as_label(), "delivery_full");
    /// assert_eq!(DeliveryError::rejected("done").as_label(), "delivery_rejected");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            DeliveryError::Rejected { .. } => "delivery_rejected",
            DeliveryError::Full => "delivery_full",
            DeliveryError::Closed => "delivery_closed",
        }
    }
}

/// # Errors produced by an upstream cancel handle.
///
/// A failing cancel handle does not undo disposal: the subscription stays
/// disposed and the failure is surfaced through
/// [`Disposal::CancelFailed`](crate::Disposal::CancelFailed).
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CancelError {
    /// The resource could not be released.
    #[error("cancel failed: {reason}")]
    Failed {
        /// The underlying error message.
        reason: String,
    },
}

impl CancelError {
    /// Shorthand for [`CancelError::Failed`].
    pub fn failed(reason: impl Into<String>) -> Self {
        CancelError::Failed {
            reason: reason.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            CancelError::Failed { .. } => "cancel_failed",
        }
    }
}

/// Error payload of a terminal [`Event::Error`](crate::Event::Error).
///
/// Cheap to clone (`Arc` inside), so one error can be fanned out to several
/// consumers.
///
/// # Example
/// ```
/// use rxsink::StreamError;
///
/// let io = std::io::Error::other("socket reset");
/// let err = StreamError::new(io);
/// assert_eq!(err.to_string(), "socket reset");
///
/// let msg = StreamError::msg("upstream gave up");
/// assert_eq!(msg.clone().to_string(), "upstream gave up");
/// ```
#[derive(Clone)]
pub struct StreamError {
    inner: Arc<dyn StdError + Send + Sync>,
}

impl StreamError {
    /// Wraps an arbitrary error.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(error),
        }
    }

    /// Creates an error from a plain message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self::new(Message(message.into()))
    }

    /// Returns the wrapped error.
    pub fn get_ref(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.inner.as_ref()
    }
}

impl fmt::Debug for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StreamError").field(&self.inner).finish()
    }
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl StdError for StreamError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source()
    }
}

#[derive(Error, Debug)]
#[error("{0}")]
struct Message(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_stable() {
        assert_eq!(DeliveryError::Closed.as_label(), "delivery_closed");
        assert_eq!(CancelError::failed("x").as_label(), "cancel_failed");
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            DeliveryError::rejected("no more").to_string(),
            "event rejected: no more"
        );
        assert_eq!(
            CancelError::failed("socket busy").to_string(),
            "cancel failed: socket busy"
        );
    }

    #[test]
    fn test_stream_error_keeps_source_message() {
        let err = StreamError::new(std::io::Error::other("eof"));
        assert_eq!(err.to_string(), "eof");
        assert!(err.get_ref().is::<std::io::Error>());
    }
}
