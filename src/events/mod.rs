//! Stream events pushed from a producer to its consumer.
//!
//! ## Contents
//! - [`Event`] the `Next` / `Completed` / `Error` variants
//! - [`EventKind`] payload-free classification for logs
//!
//! ## Quick reference
//! ```text
//! producer ── Event<T> ──► EventForwarder ──► Consumer::on(Event<T>)
//!                               │
//!                               └─ terminal? ──► SubscriptionState::dispose()
//! ```

mod event;

pub use event::{Event, EventKind};
