//! # rxsink
//!
//! **rxsink** is the subscription lifecycle core of a push-based event-stream
//! library.
//!
//! It sits between one producer and one downstream consumer and guarantees
//! that the subscription's resources are released **exactly once**, no matter
//! how many threads observe a terminal event or request cancellation at the
//! same time. Operators, schedulers and the public `subscribe` surface are
//! built on top of it; they create one [`SubscriptionState`] per subscription
//! and feed it events.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   ┌──────────────┐                               ┌──────────────────┐
//!   │   Producer   │                               │ Subscriber handle│
//!   │ (timer, I/O, │                               │  (early cancel)  │
//!   │  operator)   │                               └────────┬─────────┘
//!   └──────┬───────┘                                        │ Cancel::cancel()
//!          │ forward(Event)                                 │
//!          ▼                                                ▼
//!   ┌──────────────┐  snapshot()   ┌────────────────────────────────────┐
//!   │EventForwarder├──────────────►│ SubscriptionState (one Mutex)      │
//!   │              │  dispose()    │  - consumer: ConsumerRef<T>        │
//!   │              ├──────────────►│  - cancel:   CancelRef             │
//!   └──────┬───────┘  (terminal)   │  - disposed: bool                  │
//!          │                       └──────────────┬─────────────────────┘
//!          │ Consumer::on(Event)                  │ on first dispose():
//!          ▼  (outside the lock)                  │  swap in NopConsumer/NopCancel,
//!   ┌──────────────┐                              │  then upstream.cancel()
//!   │   Consumer   │                              ▼  (outside the lock)
//!   └──────────────┘                       ┌──────────────┐
//!                                          │   Upstream   │
//!                                          │  resource    │
//!                                          └──────────────┘
//! ```
//!
//! ### Lifecycle
//! ```text
//! SubscriptionState::new(consumer, cancel)   ──► Active
//!
//! forward(Next(v))        ─► consumer.on(Next(v)), stays Active
//! forward(Completed|Error)─► consumer.on(..), then dispose()
//! dispose() (any caller)  ─► first call: Disposed + cancel() once
//!                            later calls: AlreadyDisposed, no side effect
//! forward(..) when Disposed ─► absorbed by NopConsumer, Ok(())
//!
//! Drop of the last Arc    ─► memory reclaimed (ResourceTracker decremented)
//! ```
//!
//! ## Features
//! | Area              | Description                                                   | Key types / traits                          |
//! |-------------------|---------------------------------------------------------------|---------------------------------------------|
//! | **Lifecycle**     | Dispose-once state, consistent snapshots.                     | [`SubscriptionState`], [`Disposal`]         |
//! | **Forwarding**    | Race-free delivery, terminal events dispose.                  | [`EventForwarder`]                          |
//! | **Consumers**     | Downstream sinks: closures, tokio channels, no-op sentinel.   | [`Consumer`], [`FnConsumer`], [`ChannelConsumer`] |
//! | **Cancellation**  | Upstream handles: closures, tokens, parent subscriptions.     | [`Cancel`], [`FnCancel`], [`NopCancel`]     |
//! | **Errors**        | Typed delivery/cancel errors and stream error payloads.       | [`DeliveryError`], [`CancelError`], [`StreamError`] |
//! | **Configuration** | Labels and cancel handles per subscription.                   | [`SubscriptionBuilder`]                     |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] consumer _(demo/reference only)_.
//! - `diagnostics`: exports [`ResourceTracker`], a process-wide live-subscription counter.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use rxsink::{Disposal, Event, FnCancel, FnConsumer, Outcome, SubscriptionState};
//!
//! let cancelled = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&cancelled);
//!
//! let consumer = FnConsumer::arc("print", |ev: Event<u32>| -> Outcome {
//!     println!("{ev:?}");
//!     Ok(())
//! });
//! let upstream = FnCancel::arc(move || {
//!     counter.fetch_add(1, Ordering::SeqCst);
//!     Ok(())
//! });
//!
//! let state = SubscriptionState::new(consumer, upstream);
//! let fwd = state.forwarder();
//!
//! fwd.on_next(1).unwrap();
//! fwd.on_completed().unwrap();          // disposes, cancels upstream
//! fwd.on_next(2).unwrap();              // absorbed
//!
//! assert_eq!(state.dispose(), Disposal::AlreadyDisposed);
//! assert_eq!(cancelled.load(Ordering::SeqCst), 1);
//! ```
mod cancellation;
mod consumers;
mod error;
mod events;
mod subscription;
mod tracker;

#[cfg(test)]
mod test_utils;

// ---- Public re-exports ----

pub use cancellation::{Cancel, CancelRef, FnCancel, NopCancel};
pub use consumers::{ChannelConsumer, Consumer, ConsumerRef, FnConsumer, NopConsumer};
pub use error::{CancelError, DeliveryError, Outcome, StreamError};
pub use events::{Event, EventKind};
pub use subscription::{Disposal, EventForwarder, Snapshot, SubscriptionBuilder, SubscriptionState};

// Optional: expose the live subscription counter.
// Enable with: `--features diagnostics`
#[cfg(feature = "diagnostics")]
pub use tracker::ResourceTracker;

// Optional: expose a simple built-in logger consumer (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use consumers::LogWriter;
