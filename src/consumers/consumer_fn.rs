//! # Function-backed consumer (`FnConsumer`)
//!
//! [`FnConsumer`] wraps a closure `F: Fn(Event<T>) -> Outcome`. The closure is
//! shared between concurrent deliveries, so it is `Fn`, not `FnMut`; keep
//! mutable state behind `Arc<...>` or atomics inside the closure.
//!
//! ## Example
//! ```rust
//! use rxsink::{ConsumerRef, Event, FnConsumer, Outcome};
//!
//! let c: ConsumerRef<u32> = FnConsumer::arc("printer", |ev: Event<u32>| -> Outcome {
//!     if let Event::Next(v) = ev {
//!         println!("got {v}");
//!     }
//!     Ok(())
//! });
//! assert_eq!(c.name(), "printer");
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use crate::consumers::Consumer;
use crate::error::Outcome;
use crate::events::Event;

/// Function-backed consumer implementation.
#[derive(Debug)]
pub struct FnConsumer<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> FnConsumer<F> {
    /// Creates a new function-backed consumer.
    ///
    /// Prefer [`FnConsumer::arc`] when you immediately need a
    /// [`ConsumerRef`](crate::ConsumerRef).
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Creates the consumer and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

impl<T, F> Consumer<T> for FnConsumer<F>
where
    F: Fn(Event<T>) -> Outcome + Send + Sync + 'static, // Fn, not FnMut
{
    #[inline]
    fn on(&self, event: Event<T>) -> Outcome {
        (self.f)(event)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeliveryError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_closure_sees_every_event() {
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&seen);
        let c = FnConsumer::new("count", move |_ev: Event<u8>| -> Outcome {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        c.on(Event::Next(1)).unwrap();
        c.on(Event::Completed).unwrap();
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_closure_outcome_is_returned() {
        let c = FnConsumer::new("full", |_ev: Event<u8>| -> Outcome {
            Err(DeliveryError::Full)
        });
        assert_eq!(c.on(Event::Next(1)), Err(DeliveryError::Full));
        assert_eq!(Consumer::<u8>::name(&c), "full");
    }
}
