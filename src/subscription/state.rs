//! # Subscription state with a dispose-once protocol.
//!
//! [`SubscriptionState`] owns the downstream consumer and the upstream cancel
//! handle of one subscription, plus a `disposed` flag. All three live in a
//! single record behind one [`Mutex`], so readers never see a mixed state.
//!
//! ## Dispose protocol
//! ```text
//! dispose():
//!   lock
//!   ├─ disposed?  ──► unlock, AlreadyDisposed
//!   └─ otherwise:
//!        take consumer, take cancel
//!        consumer := NopConsumer, cancel := NopCancel, disposed := true
//!   unlock
//!   cancel.cancel()        (outside the lock: may re-enter)
//!   drop(consumer)         (outside the lock: may drop a cycle back to us)
//!   ──► Performed | CancelFailed(err)
//! ```
//!
//! ## Rules
//! - Exactly one call performs teardown, however many threads race.
//! - Once disposed, the record holds only the no-op sentinels; the state no
//!   longer keeps the original consumer or cancel handle alive.
//! - The lock is never held across a call into a consumer or a cancel handle.
//! - Dropping a state does not dispose it.

use std::borrow::Cow;
use std::fmt;
use std::mem;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::cancellation::{Cancel, CancelRef, NopCancel};
use crate::consumers::{ConsumerRef, NopConsumer};
use crate::error::CancelError;
use crate::subscription::{EventForwarder, SubscriptionBuilder};
use crate::tracker;

pub(crate) const DEFAULT_LABEL: &str = "subscription";

/// Lock-guarded part of the state.
struct Record<T> {
    consumer: ConsumerRef<T>,
    cancel: CancelRef,
    disposed: bool,
}

/// Point-in-time copy of a subscription record, taken under its lock.
pub struct Snapshot<T> {
    /// Consumer current at snapshot time (`NopConsumer` once disposed).
    pub consumer: ConsumerRef<T>,
    /// Cancel handle current at snapshot time (`NopCancel` once disposed).
    pub cancel: CancelRef,
    /// Whether the subscription was already disposed.
    pub disposed: bool,
}

impl<T: 'static> fmt::Debug for Snapshot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snapshot")
            .field("consumer", &self.consumer.name())
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}

/// Result of [`SubscriptionState::dispose`].
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposal {
    /// This call tore the subscription down and the cancel handle succeeded.
    Performed,
    /// The subscription was already disposed; nothing happened.
    AlreadyDisposed,
    /// This call tore the subscription down but the cancel handle failed.
    /// The subscription stays disposed.
    CancelFailed(CancelError),
}

impl Disposal {
    /// True if this call performed the teardown (whether or not cancel succeeded).
    #[inline]
    pub fn performed(&self) -> bool {
        !matches!(self, Disposal::AlreadyDisposed)
    }

    /// Converts into `Ok(performed)` or the cancel failure.
    pub fn into_result(self) -> Result<bool, CancelError> {
        match self {
            Disposal::Performed => Ok(true),
            Disposal::AlreadyDisposed => Ok(false),
            Disposal::CancelFailed(err) => Err(err),
        }
    }
}

/// Shared lifecycle record of one subscription.
///
/// Always handled through `Arc`: the producer's [`EventForwarder`], the
/// subscriber's cancel view and possibly the consumer itself hold references.
///
/// # Example
/// ```
/// use rxsink::{Disposal, FnCancel, NopConsumer, SubscriptionState};
///
/// let state = SubscriptionState::new(
///     NopConsumer::arc::<u32>(),
///     FnCancel::arc(|| Ok(())),
/// );
///
/// assert_eq!(state.dispose(), Disposal::Performed);
/// assert_eq!(state.dispose(), Disposal::AlreadyDisposed);
/// assert!(state.is_disposed());
/// ```
pub struct SubscriptionState<T> {
    label: Cow<'static, str>,
    record: Mutex<Record<T>>,
}

impl<T: 'static> SubscriptionState<T> {
    /// Creates an active subscription bound to `consumer` and `cancel`.
    pub fn new(consumer: ConsumerRef<T>, cancel: CancelRef) -> Arc<Self> {
        Self::with_label(consumer, cancel, Cow::Borrowed(DEFAULT_LABEL))
    }

    /// Starts a [`SubscriptionBuilder`] for `consumer`.
    pub fn builder(consumer: ConsumerRef<T>) -> SubscriptionBuilder<T> {
        SubscriptionBuilder::new(consumer)
    }

    pub(crate) fn with_label(
        consumer: ConsumerRef<T>,
        cancel: CancelRef,
        label: Cow<'static, str>,
    ) -> Arc<Self> {
        tracker::on_create();
        Arc::new(Self {
            label,
            record: Mutex::new(Record {
                consumer,
                cancel,
                disposed: false,
            }),
        })
    }

    /// Label used in log records.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns a consistent copy of consumer, cancel handle and disposed flag.
    pub fn snapshot(&self) -> Snapshot<T> {
        let rec = self.lock();
        Snapshot {
            consumer: Arc::clone(&rec.consumer),
            cancel: Arc::clone(&rec.cancel),
            disposed: rec.disposed,
        }
    }

    /// Returns true once the subscription has been disposed.
    pub fn is_disposed(&self) -> bool {
        self.lock().disposed
    }

    /// Tears the subscription down, at most once.
    ///
    /// The first call swaps both handles for no-op sentinels under the lock,
    /// then invokes the captured cancel handle outside it. Every other call,
    /// concurrent or later, returns [`Disposal::AlreadyDisposed`].
    pub fn dispose(&self) -> Disposal {
        let (consumer, cancel) = {
            let mut rec = self.lock();
            if rec.disposed {
                return Disposal::AlreadyDisposed;
            }
            rec.disposed = true;
            let consumer = mem::replace(&mut rec.consumer, NopConsumer::arc());
            let cancel = mem::replace(&mut rec.cancel, NopCancel::arc());
            (consumer, cancel)
        };

        let result = cancel.cancel();
        drop(cancel);
        drop(consumer);

        match result {
            Ok(()) => {
                tracing::debug!(subscription = %self.label, "subscription disposed");
                Disposal::Performed
            }
            Err(err) => {
                tracing::warn!(
                    %err,
                    subscription = %self.label,
                    label = err.as_label(),
                    "cancel handle failed; subscription stays disposed"
                );
                Disposal::CancelFailed(err)
            }
        }
    }

    /// Returns a forwarder for the producer side.
    pub fn forwarder(self: &Arc<Self>) -> EventForwarder<T> {
        EventForwarder::new(Arc::clone(self))
    }

    /// Returns this subscription as a cancel handle for the subscriber side.
    ///
    /// The handle can also serve as the upstream cancel handle of another
    /// subscription.
    pub fn as_cancel(self: &Arc<Self>) -> CancelRef {
        Arc::clone(self) as CancelRef
    }

    /// Every critical section leaves the record consistent, so a poisoned lock
    /// is still safe to use.
    fn lock(&self) -> MutexGuard<'_, Record<T>> {
        self.record.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: 'static> Cancel for SubscriptionState<T> {
    fn cancel(&self) -> Result<(), CancelError> {
        match self.dispose() {
            Disposal::CancelFailed(err) => Err(err),
            Disposal::Performed | Disposal::AlreadyDisposed => Ok(()),
        }
    }
}

impl<T> Drop for SubscriptionState<T> {
    fn drop(&mut self) {
        tracker::on_drop();
    }
}

impl<T> fmt::Debug for SubscriptionState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let disposed = self
            .record
            .lock()
            .map(|rec| rec.disposed)
            .unwrap_or_else(|poisoned| poisoned.into_inner().disposed);
        f.debug_struct("SubscriptionState")
            .field("label", &self.label)
            .field("disposed", &disposed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancellation::FnCancel;
    use crate::test_utils::{CountingCancel, Recorder};
    use crate::tracker::{ResourceTracker, serial};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Barrier, OnceLock, Weak};
    use std::thread;

    #[test]
    fn test_new_state_is_active() {
        let _serial = serial();
        let state = SubscriptionState::new(Recorder::<u8>::new(), CountingCancel::new());

        let snap = state.snapshot();
        assert!(!snap.disposed);
        assert!(!state.is_disposed());
        assert_eq!(state.label(), "subscription");
    }

    #[test]
    fn test_dispose_cancels_exactly_once() {
        let _serial = serial();
        let cancel = CountingCancel::new();
        let state = SubscriptionState::new(Recorder::<u8>::new(), cancel.clone());

        assert_eq!(state.dispose(), Disposal::Performed);
        for _ in 0..10 {
            assert_eq!(state.dispose(), Disposal::AlreadyDisposed);
        }
        assert_eq!(cancel.calls(), 1);
        assert!(state.is_disposed());
    }

    #[test]
    fn test_dispose_swaps_in_sentinels() {
        let _serial = serial();
        let consumer = Recorder::<u8>::new();
        let cancel = CountingCancel::new();
        let state = SubscriptionState::new(consumer.clone(), cancel.clone());
        assert_eq!(Arc::strong_count(&consumer), 2);
        assert_eq!(Arc::strong_count(&cancel), 2);

        let _ = state.dispose();

        // The state keeps nothing of the original handles.
        assert_eq!(Arc::strong_count(&consumer), 1);
        assert_eq!(Arc::strong_count(&cancel), 1);

        let snap = state.snapshot();
        assert!(snap.disposed);
        assert_eq!(snap.consumer.name(), "NopConsumer");
        assert!(snap.cancel.cancel().is_ok());
        assert_eq!(cancel.calls(), 1);
    }

    #[test]
    fn test_concurrent_dispose_has_one_winner() {
        let _serial = serial();
        let cancel = CountingCancel::new();
        let state = SubscriptionState::new(Recorder::<u8>::new(), cancel.clone());
        let winners = AtomicUsize::new(0);
        let barrier = Barrier::new(64);

        thread::scope(|s| {
            for _ in 0..64 {
                s.spawn(|| {
                    barrier.wait();
                    if state.dispose().performed() {
                        winners.fetch_add(1, Ordering::SeqCst);
                    }
                });
            }
        });

        assert_eq!(winners.load(Ordering::SeqCst), 1);
        assert_eq!(cancel.calls(), 1);
    }

    #[test]
    fn test_cancel_failure_keeps_state_disposed() {
        let _serial = serial();
        let cancel = CountingCancel::failing();
        let state = SubscriptionState::new(Recorder::<u8>::new(), cancel.clone());

        let first = state.dispose();
        assert!(first.performed());
        assert_eq!(
            first.into_result(),
            Err(CancelError::failed("resource busy"))
        );
        assert!(state.is_disposed());
        assert_eq!(state.dispose(), Disposal::AlreadyDisposed);
        assert_eq!(cancel.calls(), 1);
    }

    #[test]
    fn test_reentrant_cancel_does_not_deadlock() {
        let _serial = serial();
        let slot: Arc<OnceLock<Weak<SubscriptionState<u8>>>> = Arc::new(OnceLock::new());
        let inner = Arc::new(OnceLock::new());

        let slot_for_cancel = Arc::clone(&slot);
        let inner_for_cancel = Arc::clone(&inner);
        let cancel = FnCancel::arc(move || {
            if let Some(state) = slot_for_cancel.get().and_then(Weak::upgrade) {
                // Re-enter while the outer dispose is still running.
                let _ = inner_for_cancel.set(state.dispose());
                let _ = state.forwarder().on_next(9);
            }
            Ok(())
        });

        let state = SubscriptionState::new(Recorder::<u8>::new(), cancel);
        let _ = slot.set(Arc::downgrade(&state));

        assert_eq!(state.dispose(), Disposal::Performed);
        assert_eq!(inner.get(), Some(&Disposal::AlreadyDisposed));
    }

    #[test]
    fn test_parent_subscription_as_cancel_handle() {
        let _serial = serial();
        let upstream = CountingCancel::new();
        let parent = SubscriptionState::new(Recorder::<u8>::new(), upstream.clone());
        let child = SubscriptionState::new(Recorder::<u8>::new(), parent.as_cancel());

        assert!(child.cancel().is_ok());
        assert!(child.is_disposed());
        assert!(parent.is_disposed());
        assert_eq!(upstream.calls(), 1);

        // Disposing the parent directly afterwards is a no-op.
        assert_eq!(parent.dispose(), Disposal::AlreadyDisposed);
        assert_eq!(upstream.calls(), 1);
    }

    #[test]
    fn test_tracker_counts_live_states() {
        let _serial = serial();
        let base = ResourceTracker::current();

        let a = SubscriptionState::new(Recorder::<u8>::new(), CountingCancel::new());
        let b = SubscriptionState::new(Recorder::<u8>::new(), CountingCancel::new());
        assert_eq!(ResourceTracker::current(), base + 2);

        let _ = a.dispose();
        // Disposal alone does not reclaim the state.
        assert_eq!(ResourceTracker::current(), base + 2);

        drop(a);
        drop(b);
        assert_eq!(ResourceTracker::current(), base);
    }

    #[test]
    fn test_snapshot_debug_names_consumer() {
        let _serial = serial();
        let state = SubscriptionState::new(Recorder::<u8>::new(), CountingCancel::new());

        let active = format!("{:?}", state.snapshot());
        assert!(active.contains("Recorder"));
        assert!(active.contains("disposed: false"));

        let _ = state.dispose();
        let disposed = format!("{:?}", state.snapshot());
        assert!(disposed.contains("NopConsumer"));
        assert!(disposed.contains("disposed: true"));
    }

    #[test]
    fn test_builder_sets_label_and_cancel() {
        let _serial = serial();
        let cancel = CountingCancel::new();
        let state = SubscriptionState::builder(Recorder::<u8>::new())
            .with_label("timer")
            .with_cancel(cancel.clone())
            .build();

        assert_eq!(state.label(), "timer");
        assert!(format!("{state:?}").contains("timer"));
        let _ = state.dispose();
        assert_eq!(cancel.calls(), 1);
    }
}
