//! Shared fixtures for unit tests: a recording consumer and a counting
//! cancel handle.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::cancellation::Cancel;
use crate::consumers::Consumer;
use crate::error::{CancelError, DeliveryError, Outcome};
use crate::events::Event;

/// Consumer that records every event it receives.
pub(crate) struct Recorder<T> {
    events: Mutex<Vec<Event<T>>>,
    reject: AtomicBool,
}

impl<T: Clone + Send + 'static> Recorder<T> {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self {
            events: Mutex::new(Vec::new()),
            reject: AtomicBool::new(false),
        })
    }

    /// Makes every following delivery fail with `Rejected` (still recorded).
    pub(crate) fn reject_all(&self) {
        self.reject.store(true, Ordering::SeqCst);
    }

    pub(crate) fn events(&self) -> Vec<Event<T>> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn values(&self) -> Vec<T> {
        self.events()
            .into_iter()
            .filter_map(Event::into_value)
            .collect()
    }

    pub(crate) fn terminals(&self) -> usize {
        self.events().iter().filter(|e| e.is_terminal()).count()
    }
}

impl<T: Clone + Send + 'static> Consumer<T> for Recorder<T> {
    fn on(&self, event: Event<T>) -> Outcome {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
        if self.reject.load(Ordering::SeqCst) {
            Err(DeliveryError::rejected("recorder closed"))
        } else {
            Ok(())
        }
    }
}

/// Cancel handle counting its invocations.
pub(crate) struct CountingCancel {
    calls: AtomicUsize,
    fail: bool,
}

impl CountingCancel {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail: false,
        })
    }

    pub(crate) fn failing() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail: true,
        })
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Cancel for CountingCancel {
    fn cancel(&self) -> Result<(), CancelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(CancelError::failed("resource busy"))
        } else {
            Ok(())
        }
    }
}
