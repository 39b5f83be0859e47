//! # Events delivered through a subscription.
//!
//! An [`Event`] is one of:
//! - **`Next(value)`**: a regular element; the stream keeps going;
//! - **`Completed`**: the stream ended normally (terminal);
//! - **`Error(err)`**: the stream ended with a failure (terminal).
//!
//! At most one terminal event is meaningful per subscription: once it is
//! forwarded the subscription is disposed and later events are absorbed.
//!
//! ## Example
//! ```rust
//! use rxsink::{Event, EventKind, StreamError};
//!
//! let ev = Event::Next(7);
//! assert_eq!(ev.kind(), EventKind::Next);
//! assert_eq!(ev.value(), Some(&7));
//! assert!(!ev.is_terminal());
//!
//! let err: Event<i32> = Event::Error(StreamError::msg("boom"));
//! assert!(err.is_terminal());
//! assert_eq!(err.kind().as_label(), "error");
//! ```

use crate::error::StreamError;

/// A single stream event.
#[derive(Debug, Clone)]
pub enum Event<T> {
    /// Regular element.
    Next(T),
    /// Normal end of stream.
    Completed,
    /// Failed end of stream.
    Error(StreamError),
}

/// Classification of [`Event`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// See [`Event::Next`].
    Next,
    /// See [`Event::Completed`].
    Completed,
    /// See [`Event::Error`].
    Error,
}

impl EventKind {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(self) -> &'static str {
        match self {
            EventKind::Next => "next",
            EventKind::Completed => "completed",
            EventKind::Error => "error",
        }
    }
}

impl<T> Event<T> {
    /// Returns the payload-free kind of this event.
    #[inline]
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Next(_) => EventKind::Next,
            Event::Completed => EventKind::Completed,
            Event::Error(_) => EventKind::Error,
        }
    }

    /// True for `Completed` and `Error`: the events that end a subscription.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Event::Next(_))
    }

    /// Returns the element of a `Next` event.
    pub fn value(&self) -> Option<&T> {
        match self {
            Event::Next(v) => Some(v),
            _ => None,
        }
    }

    /// Consumes the event and returns the element of a `Next` event.
    pub fn into_value(self) -> Option<T> {
        match self {
            Event::Next(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the error of an `Error` event.
    pub fn error(&self) -> Option<&StreamError> {
        match self {
            Event::Error(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_next_is_non_terminal() {
        assert!(!Event::Next("a").is_terminal());
        assert!(Event::<&str>::Completed.is_terminal());
        assert!(Event::<&str>::Error(StreamError::msg("x")).is_terminal());
    }

    #[test]
    fn test_accessors() {
        let ev = Event::Next(String::from("hello"));
        assert_eq!(ev.value().map(String::as_str), Some("hello"));
        assert!(ev.error().is_none());
        assert_eq!(ev.into_value().as_deref(), Some("hello"));

        let err: Event<String> = Event::Error(StreamError::msg("bad"));
        assert_eq!(err.error().map(ToString::to_string).as_deref(), Some("bad"));
        assert!(err.value().is_none());
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(EventKind::Next.as_label(), "next");
        assert_eq!(Event::<u8>::Completed.kind().as_label(), "completed");
    }
}
