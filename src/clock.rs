//! Time sources for quota trackers.
//!
//! Trackers read "now" through the [`Clock`] trait so that tests and
//! simulations can drive time explicitly instead of sleeping.

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use parking_lot::Mutex;

/// A source of timestamps, expressed as the time elapsed since some fixed
/// origin.
///
/// Trackers only ever subtract two readings of the same clock, so the origin
/// itself is irrelevant. Readings are expected to be non-decreasing; a clock
/// that steps backwards can cause a tracker to over-admit.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall-clock time since the Unix epoch.
///
/// A system clock set before the epoch reads as zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Duration {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
    }
}

/// A manually driven clock.
///
/// Clones share the same underlying time, so a test can hand one clone to a
/// tracker and keep another to advance it.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use quota_store_core::clock::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// let handle = clock.clone();
/// handle.advance(Duration::from_millis(1500));
/// assert_eq!(clock.now(), Duration::from_millis(1500));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<Mutex<Duration>>,
}

impl ManualClock {
    /// Creates a clock reading zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clock reading `start`.
    pub fn starting_at(start: Duration) -> Self {
        ManualClock {
            now: Arc::new(Mutex::new(start)),
        }
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock();
        *now = now.saturating_add(by);
    }

    /// Sets the clock to `to`, which may be earlier than the current reading.
    pub fn set(&self, to: Duration) {
        *self.now.lock() = to;
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now(&self) -> Duration {
        *self.now.lock()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now(&self) -> Duration {
        (**self).now()
    }
}
