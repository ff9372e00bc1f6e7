//! Shared ownership for stateful components.
//!
//! [`PriorityQueue`](crate::heap::PriorityQueue) and
//! [`FastLookupCache`](crate::cache::FastLookupCache) are plain mutable
//! collections. Request handlers running on several threads share one
//! instance through [`Shared`], which pairs it with a single mutex.
//! Every operation is short and CPU-only, so no finer-grained locking is
//! needed.

use std::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

/// A cloneable handle to a mutex-protected value.
///
/// Clones refer to the same value.
pub struct Shared<T> {
    inner: Arc<Mutex<T>>,
}

impl<T> Shared<T> {
    /// Wraps a value.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(value)),
        }
    }

    /// Runs `f` with exclusive access and returns its result.
    ///
    /// The lock is released when `f` returns, so references into the
    /// value cannot escape; clone what you need inside the closure.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut *guard)
    }

    /// Acquires the lock for several operations in a row.
    pub fn lock(&self) -> MutexGuard<'_, T> {
        self.inner.lock()
    }

    /// Whether two handles refer to the same value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Default> Default for Shared<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Shared").field(&*self.inner.lock()).finish()
    }
}
