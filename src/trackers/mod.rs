//! Sliding-window quota tracker implementations.
//!
//! Both variants keep the same ledger of `(timestamp, amount)` entries and
//! make identical admission decisions; they differ only in how the amount
//! currently in the window is computed.
//!
//! | Tracker | `used` computation | Per-call cost |
//! |---------|--------------------|---------------|
//! | [`SlidingWindowQuota`] | full ledger scan | O(n) |
//! | [`RunningTotalQuota`] | cached running total | O(evicted) |
//!
//! The ledger length is bounded by the number of admissions that fit in one
//! window, so the baseline scan stays cheap for sensible quotas.

use std::collections::VecDeque;
use std::time::Duration;

use crate::quota_tracker::QuotaTracker;
use crate::types::Uint;

pub mod sliding_window_quota;
pub use sliding_window_quota::SlidingWindowQuota;

pub mod running_total_quota;
pub use running_total_quota::RunningTotalQuota;

/// Builds the baseline tracker on the system clock.
///
/// Construction always succeeds. Zero capacity or a zero window are not
/// rejected here; validate through [`QuotaConfig`](crate::config::QuotaConfig)
/// if the parameters come from outside.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use quota_store_core::QuotaTracker;
/// use quota_store_core::trackers::quota_factory;
///
/// let mut quota = quota_factory(10, Duration::from_secs(1));
/// assert!(quota.try_admit(5));
/// assert!(quota.try_admit(4));
/// assert!(!quota.try_admit(2));
/// ```
pub fn quota_factory(capacity: Uint, window: Duration) -> Box<dyn QuotaTracker + Send> {
    Box::new(SlidingWindowQuota::new(capacity, window))
}

/// One admitted request.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LedgerEntry {
    pub(crate) at: Duration,
    pub(crate) amount: Uint,
}

/// Pops entries whose age is strictly greater than `window` and returns the
/// total amount evicted.
///
/// An entry stamped after `now` (clock rollback) has age zero and stays.
pub(crate) fn evict_expired(ledger: &mut VecDeque<LedgerEntry>, now: Duration, window: Duration) -> Uint {
    let mut evicted: Uint = 0;
    while let Some(oldest) = ledger.front() {
        if now.saturating_sub(oldest.at) <= window {
            break;
        }
        evicted = evicted.saturating_add(oldest.amount);
        ledger.pop_front();
    }
    evicted
}

/// Time until enough of the oldest entries age out for `excess` more units
/// to fit. Entries leave the window once strictly more than the returned
/// duration has elapsed.
pub(crate) fn retry_after(
    ledger: &VecDeque<LedgerEntry>,
    now: Duration,
    window: Duration,
    excess: Uint,
) -> Duration {
    let mut freed: Uint = 0;
    for entry in ledger {
        freed = freed.saturating_add(entry.amount);
        if freed >= excess {
            return entry.at.saturating_add(window).saturating_sub(now);
        }
    }
    window
}
