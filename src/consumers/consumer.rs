//! # Core consumer trait
//!
//! `Consumer` is the downstream end of a subscription. It is called by an
//! [`EventForwarder`](crate::EventForwarder) with a snapshot taken under the
//! subscription lock, but the call itself happens **outside** that lock.
//!
//! ## Contract
//! - `on` may be invoked concurrently from several producer threads; use
//!   interior mutability for state.
//! - `on` may re-enter the subscription (e.g. dispose it); this never deadlocks.
//! - The returned [`Outcome`] is handed back to the producer untouched.

use std::sync::Arc;

use crate::error::Outcome;
use crate::events::Event;

/// Shared handle to a consumer (`Arc<dyn Consumer<T>>`).
pub type ConsumerRef<T> = Arc<dyn Consumer<T>>;

/// Contract for stream event sinks.
pub trait Consumer<T>: Send + Sync + 'static {
    /// Handle a single event.
    ///
    /// Returns `Err` when the event could not be accepted; the producer decides
    /// what to do about it.
    fn on(&self, event: Event<T>) -> Outcome;

    /// Human-readable name (for logs).
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Consumer that accepts and drops everything.
///
/// Substituted for the real consumer when a subscription is disposed.
#[derive(Debug, Default, Clone, Copy)]
pub struct NopConsumer;

impl NopConsumer {
    /// Returns a shared no-op consumer for any element type.
    pub fn arc<T>() -> ConsumerRef<T> {
        Arc::new(NopConsumer)
    }
}

impl<T> Consumer<T> for NopConsumer {
    #[inline]
    fn on(&self, _event: Event<T>) -> Outcome {
        Ok(())
    }

    fn name(&self) -> &str {
        "NopConsumer"
    }
}
