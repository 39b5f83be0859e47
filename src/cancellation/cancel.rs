//! # Core cancel trait
//!
//! A [`Cancel`] handle is owned by exactly one
//! [`SubscriptionState`](crate::SubscriptionState), which guarantees that
//! [`Cancel::cancel`] is invoked **at most once**, whatever the handle's own
//! idempotence. The call is made outside the subscription lock, so a handle may
//! re-enter the subscription (dispose it again, forward events) without
//! deadlocking.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::error::CancelError;

/// Shared handle to a cancellable resource (`Arc<dyn Cancel>`).
pub type CancelRef = Arc<dyn Cancel>;

/// Contract for releasable upstream resources.
pub trait Cancel: Send + Sync + 'static {
    /// Releases the resource.
    ///
    /// A returned error does not undo the disposal of the owning subscription.
    fn cancel(&self) -> Result<(), CancelError>;
}

/// Cancel handle that does nothing.
///
/// Substituted for the real handle when a subscription is disposed, and the
/// default for subscriptions that own no upstream resource.
#[derive(Debug, Default, Clone, Copy)]
pub struct NopCancel;

impl NopCancel {
    /// Returns a shared no-op handle.
    pub fn arc() -> CancelRef {
        Arc::new(NopCancel)
    }
}

impl Cancel for NopCancel {
    #[inline]
    fn cancel(&self) -> Result<(), CancelError> {
        Ok(())
    }
}

impl Cancel for CancellationToken {
    fn cancel(&self) -> Result<(), CancelError> {
        CancellationToken::cancel(self);
        Ok(())
    }
}
