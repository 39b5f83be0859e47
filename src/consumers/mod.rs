//! # Downstream consumers.
//!
//! This module provides the [`Consumer`] trait (the capability that receives
//! stream events) and built-in implementations.
//!
//! ## Architecture
//! ```text
//! producer ── forward(Event) ──► EventForwarder ──► snapshot().consumer.on(Event)
//!                                                          │
//!                                  ┌──────────────┬────────┴───────┬────────────┐
//!                                  ▼              ▼                ▼            ▼
//!                             FnConsumer   ChannelConsumer    LogWriter    NopConsumer
//!                             (closure)    (tokio mpsc)       (stdout)     (after dispose)
//! ```
//!
//! ## Implementing custom consumers
//! ```rust
//! use std::sync::atomic::{AtomicU64, Ordering};
//! use rxsink::{Consumer, Event, Outcome};
//!
//! #[derive(Default)]
//! struct Sum(AtomicU64);
//!
//! impl Consumer<u64> for Sum {
//!     fn on(&self, event: Event<u64>) -> Outcome {
//!         if let Event::Next(v) = event {
//!             self.0.fetch_add(v, Ordering::Relaxed);
//!         }
//!         Ok(())
//!     }
//! }
//! ```

mod channel;
mod consumer;
mod consumer_fn;
#[cfg(feature = "logging")]
mod log;

pub use channel::ChannelConsumer;
pub use consumer::{Consumer, ConsumerRef, NopConsumer};
pub use consumer_fn::FnConsumer;
#[cfg(feature = "logging")]
pub use log::LogWriter;
