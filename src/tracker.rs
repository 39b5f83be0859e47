//! # Live subscription counter (diagnostics).
//!
//! [`ResourceTracker`] counts [`SubscriptionState`](crate::SubscriptionState)
//! instances that have been created but not yet dropped. Tests use it to
//! assert that a scenario left nothing behind.
//!
//! ## Rules
//! - Process-wide, starts at zero, never needs teardown.
//! - Relaxed atomics: the value is exact once all threads are joined, and only
//!   approximate while they run.
//! - Compiled in with the `diagnostics` feature (and in this crate's unit
//!   tests). Otherwise the hooks called by `SubscriptionState` are empty.
//!
//! ## Example
//! ```rust,ignore
//! // cargo test --features diagnostics
//! let before = rxsink::ResourceTracker::current();
//! {
//!     let _state = rxsink::SubscriptionState::new(
//!         rxsink::NopConsumer::arc::<u8>(),
//!         rxsink::NopCancel::arc(),
//!     );
//!     assert_eq!(rxsink::ResourceTracker::current(), before + 1);
//! }
//! assert_eq!(rxsink::ResourceTracker::current(), before);
//! ```

#[cfg(any(test, feature = "diagnostics"))]
mod imp {
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Global count of live subscription states.
    static LIVE: AtomicUsize = AtomicUsize::new(0);

    /// Process-wide counter of live subscription states.
    #[derive(Debug, Clone, Copy)]
    pub struct ResourceTracker;

    impl ResourceTracker {
        /// Records a newly created state.
        #[inline]
        pub fn increment() {
            LIVE.fetch_add(1, Ordering::Relaxed);
        }

        /// Records a dropped state. Saturates at zero.
        #[inline]
        pub fn decrement() {
            let _ = LIVE.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_sub(1));
        }

        /// Returns the number of states currently alive.
        #[inline]
        pub fn current() -> usize {
            LIVE.load(Ordering::Relaxed)
        }
    }

    #[inline]
    pub(crate) fn on_create() {
        ResourceTracker::increment();
    }

    #[inline]
    pub(crate) fn on_drop() {
        ResourceTracker::decrement();
    }
}

#[cfg(not(any(test, feature = "diagnostics")))]
mod imp {
    #[inline(always)]
    pub(crate) fn on_create() {}

    #[inline(always)]
    pub(crate) fn on_drop() {}
}

#[cfg(any(test, feature = "diagnostics"))]
pub use imp::ResourceTracker;
pub(crate) use imp::{on_create, on_drop};

/// Serializes unit tests that create subscription states.
///
/// The counter is process-wide and the test harness runs tests in parallel,
/// so any test that creates states (or asserts on the counter) holds this guard.
#[cfg(test)]
pub(crate) fn serial() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::{Mutex, PoisonError};

    static LOCK: Mutex<()> = Mutex::new(());
    LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_and_decrement_balance() {
        let _serial = serial();
        let base = ResourceTracker::current();

        ResourceTracker::increment();
        ResourceTracker::increment();
        assert_eq!(ResourceTracker::current(), base + 2);

        ResourceTracker::decrement();
        ResourceTracker::decrement();
        assert_eq!(ResourceTracker::current(), base);
    }

    #[test]
    fn test_decrement_at_zero_does_not_wrap() {
        let _serial = serial();
        assert_eq!(ResourceTracker::current(), 0);

        ResourceTracker::decrement();
        assert_eq!(ResourceTracker::current(), 0);

        ResourceTracker::increment();
        assert_eq!(ResourceTracker::current(), 1);
        ResourceTracker::decrement();
        assert_eq!(ResourceTracker::current(), 0);
    }
}
