//! # Function-backed cancel handle (`FnCancel`)
//!
//! [`FnCancel`] wraps a `FnOnce` closure. The closure runs on the first
//! `cancel()` only; later calls return `Ok(())` without side effects.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use rxsink::{Cancel, CancelRef, FnCancel};
//!
//! let fired = Arc::new(AtomicBool::new(false));
//! let flag = Arc::clone(&fired);
//! let c: CancelRef = FnCancel::arc(move || {
//!     flag.store(true, Ordering::SeqCst);
//!     Ok(())
//! });
//!
//! c.cancel().unwrap();
//! assert!(fired.load(Ordering::SeqCst));
//! ```

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use crate::cancellation::Cancel;
use crate::error::CancelError;

/// Run-once closure cancel handle.
pub struct FnCancel<F> {
    f: Mutex<Option<F>>,
}

impl<F> FnCancel<F>
where
    F: FnOnce() -> Result<(), CancelError> + Send + 'static,
{
    /// Creates a new handle from a closure.
    pub fn new(f: F) -> Self {
        Self {
            f: Mutex::new(Some(f)),
        }
    }

    /// Creates the handle and returns it as a shared handle.
    pub fn arc(f: F) -> Arc<Self> {
        Arc::new(Self::new(f))
    }

    /// True once the closure has been taken.
    pub fn is_fired(&self) -> bool {
        self.f
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }
}

impl<F> Cancel for FnCancel<F>
where
    F: FnOnce() -> Result<(), CancelError> + Send + 'static,
{
    fn cancel(&self) -> Result<(), CancelError> {
        // Take under the lock, run outside it: the closure may re-enter.
        let f = self.f.lock().unwrap_or_else(PoisonError::into_inner).take();
        match f {
            Some(f) => f(),
            None => Ok(()),
        }
    }
}

impl<F> fmt::Debug for FnCancel<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCancel").finish_non_exhaustive()
    }
}
