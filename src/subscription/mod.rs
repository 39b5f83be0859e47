//! Subscription lifecycle: dispose-once state and event forwarding.
//!
//! This module is the concurrency core of the crate. A collaborator that owns a
//! subscription creates one [`SubscriptionState`], hands its
//! [`EventForwarder`] to the producer and its cancel view to the subscriber.
//!
//! Internal modules:
//! - [`state`]: lock-guarded record and the dispose-once protocol;
//! - [`forwarder`]: relays events to the live consumer, disposes on terminal events;
//! - [`builder`]: optional configuration (label, cancel handle).
//!
//! ## Wiring
//! ```text
//!              ┌───────────────────────────────────────────┐
//!              │ SubscriptionState (Mutex)                 │
//!              │   consumer ─► ConsumerRef<T>              │
//!              │   cancel   ─► CancelRef                   │
//!              │   disposed ─► bool                        │
//!              └──────▲─────────────────────▲──────────────┘
//!                     │ snapshot / dispose  │ dispose (as Cancel)
//!     producer ──► EventForwarder      subscriber handle
//! ```
//!
//! ## State machine
//! ```text
//! Active ──[Completed | Error forwarded, or dispose()]──► Disposed (terminal)
//! ```

mod builder;
mod forwarder;
mod state;

pub use builder::SubscriptionBuilder;
pub use forwarder::EventForwarder;
pub use state::{Disposal, Snapshot, SubscriptionState};
