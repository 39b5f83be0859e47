use std::borrow::Cow;
use std::sync::Arc;

use crate::cancellation::{CancelRef, NopCancel};
use crate::consumers::ConsumerRef;
use crate::subscription::SubscriptionState;
use crate::subscription::state::DEFAULT_LABEL;

/// Builder for constructing a [`SubscriptionState`] with optional settings.
///
/// Defaults: no upstream resource ([`NopCancel`]) and the label `"subscription"`.
///
/// # Example
/// ```
/// use tokio_util::sync::CancellationToken;
/// use rxsink::{NopConsumer, SubscriptionState};
///
/// let token = CancellationToken::new();
/// let state = SubscriptionState::builder(NopConsumer::arc::<u64>())
///     .with_label("ticker")
///     .with_cancel(std::sync::Arc::new(token.clone()))
///     .build();
///
/// assert_eq!(state.label(), "ticker");
/// let _ = state.dispose();
/// assert!(token.is_cancelled());
/// ```
pub struct SubscriptionBuilder<T> {
    consumer: ConsumerRef<T>,
    cancel: CancelRef,
    label: Cow<'static, str>,
}

impl<T: 'static> SubscriptionBuilder<T> {
    /// Creates a new builder delivering to `consumer`.
    pub fn new(consumer: ConsumerRef<T>) -> Self {
        Self {
            consumer,
            cancel: NopCancel::arc(),
            label: Cow::Borrowed(DEFAULT_LABEL),
        }
    }

    /// Sets the upstream resource released on disposal.
    pub fn with_cancel(mut self, cancel: CancelRef) -> Self {
        self.cancel = cancel;
        self
    }

    /// Sets the label attached to log records of this subscription.
    pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = label.into();
        self
    }

    /// Builds the active subscription.
    pub fn build(self) -> Arc<SubscriptionState<T>> {
        SubscriptionState::with_label(self.consumer, self.cancel, self.label)
    }
}
