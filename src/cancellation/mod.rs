//! # Upstream cancel handles.
//!
//! This module provides the [`Cancel`] trait (the capability that releases
//! producer-side resources such as timers, sockets or a parent subscription)
//! and built-in implementations:
//! - [`NopCancel`] no-op sentinel installed after disposal
//! - [`FnCancel`] run-once closure
//! - `tokio_util::sync::CancellationToken` (cancels the token)
//! - [`SubscriptionState`](crate::SubscriptionState) (disposes the subscription)

mod cancel;
mod cancel_fn;

pub use cancel::{Cancel, CancelRef, NopCancel};
pub use cancel_fn::FnCancel;
