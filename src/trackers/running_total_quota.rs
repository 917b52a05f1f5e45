use std::collections::VecDeque;
use std::time::Duration;

use tracing::{debug, trace};

use super::{evict_expired, retry_after, LedgerEntry};
use crate::clock::{Clock, SystemClock};
use crate::error::{AdmitError, AdmitResult};
use crate::quota_tracker::QuotaTracker;
use crate::types::Uint;

/// Sliding-window quota tracker with a cached running total.
///
/// Makes exactly the same decisions as
/// [`SlidingWindowQuota`](super::SlidingWindowQuota), but keeps the sum of
/// the ledger alongside it: eviction subtracts what it pops and admission
/// adds what it pushes, so a call only touches the entries it evicts.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use quota_store_core::QuotaTracker;
/// use quota_store_core::clock::ManualClock;
/// use quota_store_core::trackers::RunningTotalQuota;
///
/// let clock = ManualClock::new();
/// let mut quota = RunningTotalQuota::with_clock(3, Duration::from_secs(2), clock.clone());
///
/// assert!(quota.try_admit(3));
/// clock.advance(Duration::from_secs(2));
/// assert!(!quota.try_admit(1)); // exactly one window old, still counted
/// clock.advance(Duration::from_nanos(1));
/// assert!(quota.try_admit(1));
/// ```
#[derive(Debug)]
pub struct RunningTotalQuota<C = SystemClock> {
    capacity: Uint,
    window: Duration,
    clock: C,
    ledger: VecDeque<LedgerEntry>,
    /// Sum of `ledger` amounts
    used: Uint,
}

impl RunningTotalQuota<SystemClock> {
    /// Creates a tracker on the system clock.
    pub fn new(capacity: Uint, window: Duration) -> Self {
        Self::with_clock(capacity, window, SystemClock)
    }
}

impl<C: Clock> RunningTotalQuota<C> {
    /// Creates a tracker reading time from `clock`.
    pub fn with_clock(capacity: Uint, window: Duration, clock: C) -> Self {
        RunningTotalQuota {
            capacity,
            window,
            clock,
            ledger: VecDeque::new(),
            used: 0,
        }
    }

    pub fn ledger_len(&self) -> usize {
        self.ledger.len()
    }

    #[inline]
    fn evict(&mut self, now: Duration) {
        let evicted = evict_expired(&mut self.ledger, now, self.window);
        self.used = self.used.saturating_sub(evicted);
    }
}

impl<C: Clock> QuotaTracker for RunningTotalQuota<C> {
    #[inline]
    fn capacity(&self) -> Uint {
        self.capacity
    }

    #[inline]
    fn window(&self) -> Duration {
        self.window
    }

    #[inline]
    fn now(&self) -> Duration {
        self.clock.now()
    }

    fn try_admit_verbose_at(&mut self, now: Duration, amount: Uint) -> AdmitResult {
        self.evict(now);

        if amount > self.capacity {
            debug!(amount, capacity = self.capacity, "quota request beyond capacity");
            return Err(AdmitError::BeyondCapacity {
                requested: amount,
                capacity: self.capacity,
            });
        }

        if self.used <= self.capacity - amount {
            self.ledger.push_back(LedgerEntry { at: now, amount });
            self.used += amount;
            trace!(amount, used = self.used, capacity = self.capacity, "quota admitted");
            Ok(())
        } else {
            let excess = self.used - (self.capacity - amount);
            debug!(amount, used = self.used, capacity = self.capacity, "quota rejected");
            Err(AdmitError::InsufficientCapacity {
                requested: amount,
                available: self.capacity.saturating_sub(self.used),
                retry_after: retry_after(&self.ledger, now, self.window, excess),
            })
        }
    }

    fn used_at(&mut self, now: Duration) -> Uint {
        self.evict(now);
        self.used
    }
}
