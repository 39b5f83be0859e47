//! # Event forwarder bound to one subscription.
//!
//! [`EventForwarder`] is the producer's only entry point for pushing events
//! downstream. It keeps nothing but an `Arc` to its [`SubscriptionState`], so
//! it is cheap to clone and safe to call from many threads at once.
//!
//! ## Forwarding
//! ```text
//! forward(ev):
//!   snap    = state.snapshot()      (under the lock)
//!   outcome = snap.consumer.on(ev)  (outside the lock)
//!   if ev is Completed | Error:
//!       state.dispose()             (regardless of outcome)
//!   return outcome
//! ```
//!
//! ## Rules
//! - `Next` never disposes.
//! - After disposal the snapshot consumer is `NopConsumer`: events are absorbed
//!   and `Ok(())` is returned; the original consumer never sees them.
//! - A `Next` racing with an in-flight disposal may still reach the original
//!   consumer once if its snapshot was taken just before the swap.

use std::fmt;
use std::sync::Arc;

use crate::consumers::Consumer;
use crate::error::{Outcome, StreamError};
use crate::events::Event;
use crate::subscription::SubscriptionState;

/// Relay from a producer to the live consumer of one subscription.
///
/// # Example
/// ```
/// use rxsink::{Event, FnConsumer, NopCancel, Outcome, SubscriptionState};
///
/// let consumer = FnConsumer::arc("print", |ev: Event<&'static str>| -> Outcome {
///     println!("{ev:?}");
///     Ok(())
/// });
/// let state = SubscriptionState::new(consumer, NopCancel::arc());
/// let fwd = state.forwarder();
///
/// fwd.on_next("a").unwrap();
/// assert!(!state.is_disposed());
/// fwd.on_completed().unwrap();
/// assert!(state.is_disposed());
/// ```
pub struct EventForwarder<T> {
    state: Arc<SubscriptionState<T>>,
}

impl<T: 'static> EventForwarder<T> {
    pub(crate) fn new(state: Arc<SubscriptionState<T>>) -> Self {
        Self { state }
    }

    /// The subscription this forwarder feeds.
    pub fn state(&self) -> &Arc<SubscriptionState<T>> {
        &self.state
    }

    /// Delivers `event` to the current consumer and returns its outcome.
    ///
    /// Terminal events dispose the subscription after delivery, even when the
    /// consumer reported a failure.
    pub fn forward(&self, event: Event<T>) -> Outcome {
        let snap = self.state.snapshot();
        let terminal = event.is_terminal();

        if snap.disposed {
            tracing::trace!(
                subscription = %self.state.label(),
                kind = event.kind().as_label(),
                "event absorbed after disposal"
            );
        }

        let outcome = snap.consumer.on(event);
        if let Err(err) = &outcome {
            tracing::debug!(
                %err,
                subscription = %self.state.label(),
                label = err.as_label(),
                "consumer rejected event"
            );
        }

        if terminal {
            // Cancel failures are logged by dispose(); the caller gets the delivery outcome.
            let _ = self.state.dispose();
        }
        outcome
    }

    /// Shorthand for `forward(Event::Next(value))`.
    #[inline]
    pub fn on_next(&self, value: T) -> Outcome {
        self.forward(Event::Next(value))
    }

    /// Shorthand for `forward(Event::Completed)`.
    #[inline]
    pub fn on_completed(&self) -> Outcome {
        self.forward(Event::Completed)
    }

    /// Shorthand for `forward(Event::Error(error))`.
    #[inline]
    pub fn on_error(&self, error: StreamError) -> Outcome {
        self.forward(Event::Error(error))
    }
}

impl<T> Clone for EventForwarder<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T: 'static> Consumer<T> for EventForwarder<T> {
    fn on(&self, event: Event<T>) -> Outcome {
        self.forward(event)
    }

    fn name(&self) -> &str {
        "EventForwarder"
    }
}

impl<T> fmt::Debug for EventForwarder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventForwarder")
            .field("state", &self.state)
            .finish()
    }
}
