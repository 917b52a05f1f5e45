use std::collections::VecDeque;
use std::time::Duration;

use tracing::{debug, trace};

use super::{evict_expired, retry_after, LedgerEntry};
use crate::clock::{Clock, SystemClock};
use crate::error::{AdmitError, AdmitResult};
use crate::quota_tracker::QuotaTracker;
use crate::types::Uint;

/// Baseline sliding-window quota tracker.
///
/// Every admitted request is appended to a ledger of `(timestamp, amount)`
/// entries, oldest first. A new request is admitted only if the amounts of
/// all entries still inside the trailing window, plus the new amount, fit
/// within the capacity.
///
/// # Algorithm Behavior
///
/// - Read `now` from the clock
/// - Evict from the head while the oldest entry is strictly older than `window`
///   (an entry exactly `window` old still counts)
/// - Sum the remaining amounts by scanning the whole ledger
/// - Admit and append `(now, amount)` if `used + amount <= capacity`,
///   otherwise reject and leave the ledger as eviction left it
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use quota_store_core::QuotaTracker;
/// use quota_store_core::clock::ManualClock;
/// use quota_store_core::trackers::SlidingWindowQuota;
///
/// let clock = ManualClock::new();
/// let mut quota = SlidingWindowQuota::with_clock(10, Duration::from_secs(1), clock.clone());
///
/// assert!(quota.try_admit(5));  // used = 5
/// assert!(quota.try_admit(4));  // used = 9
/// assert!(!quota.try_admit(2)); // would be 11
///
/// clock.advance(Duration::from_millis(1001));
/// assert!(quota.try_admit(2));  // earlier entries evicted
/// ```
#[derive(Debug)]
pub struct SlidingWindowQuota<C = SystemClock> {
    /// Maximum amount admitted within the trailing window
    capacity: Uint,
    /// Length of the trailing window
    window: Duration,
    /// Time source
    clock: C,
    /// Admitted requests, oldest first
    ledger: VecDeque<LedgerEntry>,
}

impl SlidingWindowQuota<SystemClock> {
    /// Creates a tracker on the system clock.
    ///
    /// # Parameters
    ///
    /// * `capacity` - Maximum amount admitted within any trailing window
    /// * `window` - Length of the trailing window
    pub fn new(capacity: Uint, window: Duration) -> Self {
        Self::with_clock(capacity, window, SystemClock)
    }
}

impl<C: Clock> SlidingWindowQuota<C> {
    /// Creates a tracker reading time from `clock`.
    pub fn with_clock(capacity: Uint, window: Duration, clock: C) -> Self {
        SlidingWindowQuota {
            capacity,
            window,
            clock,
            ledger: VecDeque::new(),
        }
    }

    /// Number of entries currently in the ledger, including any that the
    /// next call would evict.
    pub fn ledger_len(&self) -> usize {
        self.ledger.len()
    }

    fn used(&self) -> Uint {
        self.ledger
            .iter()
            .fold(0, |total: Uint, entry| total.saturating_add(entry.amount))
    }
}

impl<C: Clock> QuotaTracker for SlidingWindowQuota<C> {
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
        evict_expired(&mut self.ledger, now, self.window);
        let used = self.used();

        if amount > self.capacity {
            debug!(amount, capacity = self.capacity, "quota request beyond capacity");
            return Err(AdmitError::BeyondCapacity {
                requested: amount,
                capacity: self.capacity,
            });
        }

        if used <= self.capacity - amount {
            self.ledger.push_back(LedgerEntry { at: now, amount });
            trace!(amount, used = used + amount, capacity = self.capacity, "quota admitted");
            Ok(())
        } else {
            let excess = used - (self.capacity - amount);
            debug!(amount, used, capacity = self.capacity, "quota rejected");
            Err(AdmitError::InsufficientCapacity {
                requested: amount,
                available: self.capacity.saturating_sub(used),
                retry_after: retry_after(&self.ledger, now, self.window, excess),
            })
        }
    }

    fn used_at(&mut self, now: Duration) -> Uint {
        evict_expired(&mut self.ledger, now, self.window);
        self.used()
    }
}
