//! Scoped-lock wrapper for sharing trackers and stores between threads.
//!
//! The primitives in this crate perform no synchronization of their own.
//! [`Guarded`] supplies it from the outside: each call acquires the lock,
//! runs the whole operation (including any hooks it fires) inside the
//! critical section, and releases the lock when the guard drops on every
//! exit path. A two-phase-locking layer can therefore release or commit
//! from inside a hook knowing the store's decision point is still covered.

use parking_lot::Mutex;

use crate::error::{AdmitResult, Contended};
use crate::key_value_store::KeyValueStore;
use crate::quota_tracker::QuotaTracker;
use crate::types::Uint;

/// A value protected by a mutex, accessed one whole operation at a time.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use std::thread;
/// use std::time::Duration;
/// use quota_store_core::guarded::Guarded;
/// use quota_store_core::trackers::SlidingWindowQuota;
///
/// let quota = Arc::new(Guarded::new(SlidingWindowQuota::new(100, Duration::from_secs(60))));
///
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let quota = Arc::clone(&quota);
///         thread::spawn(move || (0..50).filter(|_| quota.try_admit(1)).count())
///     })
///     .collect();
///
/// let admitted: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
/// assert_eq!(admitted, 100);
/// ```
#[derive(Debug, Default)]
pub struct Guarded<T> {
    inner: Mutex<T>,
}

impl<T> Guarded<T> {
    pub fn new(inner: T) -> Self {
        Guarded {
            inner: Mutex::new(inner),
        }
    }

    /// Runs `f` with exclusive access, blocking until the lock is free.
    #[inline]
    pub fn with<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    /// Runs `f` with exclusive access if the lock is free right now.
    ///
    /// # Returns
    /// * `Ok(r)` with the result of `f`
    /// * `Err(Contended)` if another caller holds the lock; `f` does not run
    #[inline]
    pub fn try_with<R, F>(&self, f: F) -> Result<R, Contended>
    where
        F: FnOnce(&mut T) -> R,
    {
        let mut guard = self.inner.try_lock().ok_or(Contended)?;
        Ok(f(&mut guard))
    }

    pub fn into_inner(self) -> T {
        self.inner.into_inner()
    }
}

impl<T: QuotaTracker> Guarded<T> {
    /// [`QuotaTracker::try_admit`] under the lock.
    pub fn try_admit(&self, amount: Uint) -> bool {
        self.with(|quota| quota.try_admit(amount))
    }

    /// [`QuotaTracker::try_admit_verbose`] under the lock.
    pub fn try_admit_verbose(&self, amount: Uint) -> AdmitResult {
        self.with(|quota| quota.try_admit_verbose(amount))
    }
}

impl<S: KeyValueStore> Guarded<S> {
    /// [`KeyValueStore::insert`] under the lock; `on_success` runs while it
    /// is held.
    pub fn insert<H>(&self, key: S::Key, val: S::Value, on_success: H) -> bool
    where
        H: FnOnce(),
    {
        self.with(|store| store.insert(key, val, on_success))
    }

    /// [`KeyValueStore::upsert`] under the lock.
    pub fn upsert<I, U>(&self, key: S::Key, val: S::Value, on_ins: I, on_upd: U) -> bool
    where
        I: FnOnce(),
        U: FnOnce(),
    {
        self.with(|store| store.upsert(key, val, on_ins, on_upd))
    }

    pub fn do_with<F>(&self, key: &S::Key, f: F) -> bool
    where
        F: FnOnce(&mut S::Value),
    {
        self.with(|store| store.do_with(key, f))
    }

    pub fn do_with_readonly<F>(&self, key: &S::Key, f: F) -> bool
    where
        F: FnOnce(&S::Value),
    {
        self.with(|store| store.do_with_readonly(key, f))
    }

    pub fn remove<H>(&self, key: &S::Key, on_success: H) -> bool
    where
        H: FnOnce(),
    {
        self.with(|store| store.remove(key, on_success))
    }

    /// [`KeyValueStore::do_all_readonly`] under the lock; `then` runs before
    /// the lock is released.
    pub fn do_all_readonly<F, T>(&self, f: F, then: T)
    where
        F: FnMut(&S::Key, &S::Value),
        T: FnOnce(),
    {
        self.with(|store| store.do_all_readonly(f, then))
    }

    pub fn clear(&self) {
        self.with(|store| store.clear())
    }

    pub fn len(&self) -> usize {
        self.with(|store| store.len())
    }

    pub fn is_empty(&self) -> bool {
        self.with(|store| store.is_empty())
    }
}
