//! Core trait for sliding-window admission control.
//!
//! This module defines the unified trait implemented by every quota tracker,
//! so an embedding server can hold `Box<dyn QuotaTracker>` and pick the
//! concrete variant at construction time.

use std::time::Duration;

use crate::error::AdmitResult;
pub use crate::types::Uint;

/// The core trait implemented by all quota trackers.
///
/// A tracker remembers the amounts it admitted during the trailing window
/// and admits a new amount only if the total within the window stays at or
/// below the capacity. Entries older than the window (strictly) are evicted
/// on every call, whatever its outcome.
///
/// Trackers perform no internal synchronization. Wrap one in
/// [`Guarded`](crate::guarded::Guarded) to share it between threads.
pub trait QuotaTracker {
    /// Maximum cumulative amount admitted within any trailing window.
    fn capacity(&self) -> Uint;

    /// Length of the trailing window.
    fn window(&self) -> Duration;

    /// Current reading of the tracker's clock.
    fn now(&self) -> Duration;

    /// Attempts to admit `amount` at `now`, returning detailed diagnostics
    /// on rejection.
    ///
    /// A rejected request leaves no trace in the ledger.
    fn try_admit_verbose_at(&mut self, now: Duration, amount: Uint) -> AdmitResult;

    /// Total amount counted in the window ending at `now`, after eviction.
    fn used_at(&mut self, now: Duration) -> Uint;

    /// Attempts to admit `amount` at `now`.
    ///
    /// # Returns
    /// * `true` if the amount was admitted and recorded
    /// * `false` if admitting it would violate the quota
    #[inline]
    fn try_admit_at(&mut self, now: Duration, amount: Uint) -> bool {
        self.try_admit_verbose_at(now, amount).is_ok()
    }

    /// Attempts to admit `amount` at the clock's current time.
    #[inline]
    fn try_admit(&mut self, amount: Uint) -> bool {
        let now = self.now();
        self.try_admit_at(now, amount)
    }

    /// Verbose form of [`try_admit`](QuotaTracker::try_admit).
    #[inline]
    fn try_admit_verbose(&mut self, amount: Uint) -> AdmitResult {
        let now = self.now();
        self.try_admit_verbose_at(now, amount)
    }

    /// Headroom left in the window ending at `now`.
    fn remaining_at(&mut self, now: Duration) -> Uint {
        self.capacity().saturating_sub(self.used_at(now))
    }
}

impl<T: QuotaTracker + ?Sized> QuotaTracker for Box<T> {
    fn capacity(&self) -> Uint {
        (**self).capacity()
    }

    fn window(&self) -> Duration {
        (**self).window()
    }

    fn now(&self) -> Duration {
        (**self).now()
    }

    fn try_admit_verbose_at(&mut self, now: Duration, amount: Uint) -> AdmitResult {
        (**self).try_admit_verbose_at(now, amount)
    }

    fn used_at(&mut self, now: Duration) -> Uint {
        (**self).used_at(now)
    }
}
