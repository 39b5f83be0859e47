//! # Channel-backed consumer
//!
//! [`ChannelConsumer`] hands events to an async task through a bounded
//! [`tokio::sync::mpsc`] queue, so a synchronous producer never blocks on a
//! slow reader.
//!
//! ## Rules
//! - **Non-blocking**: `on()` uses `try_send` and returns immediately.
//! - **Full**: the event is handed back as [`DeliveryError::Full`].
//! - **Closed**: receiver dropped, reported as [`DeliveryError::Closed`].
//! - The consumer never buffers on its own; the queue capacity is the buffer.
//!
//! ## Example
//! ```rust
//! use rxsink::{ChannelConsumer, Event, SubscriptionState};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let (consumer, mut rx) = ChannelConsumer::<u32>::pair(8);
//! let state = SubscriptionState::new(consumer.into_ref(), rxsink::NopCancel::arc());
//! let fwd = state.forwarder();
//!
//! fwd.on_next(1).unwrap();
//! fwd.on_completed().unwrap();
//!
//! assert_eq!(rx.recv().await.and_then(Event::into_value), Some(1));
//! assert!(matches!(rx.recv().await, Some(Event::Completed)));
//! # }
//! ```

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::consumers::{Consumer, ConsumerRef};
use crate::error::{DeliveryError, Outcome};
use crate::events::Event;

/// Consumer that pushes events into a bounded mpsc queue.
#[derive(Debug)]
pub struct ChannelConsumer<T> {
    sender: mpsc::Sender<Event<T>>,
}

impl<T: Send + 'static> ChannelConsumer<T> {
    /// Wraps an existing sender.
    pub fn new(sender: mpsc::Sender<Event<T>>) -> Self {
        Self { sender }
    }

    /// Creates a queue with the given capacity and returns both ends.
    ///
    /// The minimum capacity is 1 (clamped).
    #[must_use]
    pub fn pair(capacity: usize) -> (Self, mpsc::Receiver<Event<T>>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self::new(tx), rx)
    }

    /// Converts into a shared handle.
    pub fn into_ref(self) -> ConsumerRef<T> {
        Arc::new(self)
    }
}

impl<T: Send + 'static> Consumer<T> for ChannelConsumer<T> {
    fn on(&self, event: Event<T>) -> Outcome {
        match self.sender.try_send(event) {
            Ok(()) => Ok(()),
            Err(mpsc::error::TrySendError::Full(_)) => Err(DeliveryError::Full),
            Err(mpsc::error::TrySendError::Closed(_)) => Err(DeliveryError::Closed),
        }
    }

    fn name(&self) -> &str {
        "ChannelConsumer"
    }
}
