//! Validated quota parameters.
//!
//! The trackers themselves accept any capacity and window. Servers that load
//! quotas from outside should go through [`QuotaConfig`], which rejects zero
//! or unrepresentable parameters before a tracker is built.

use std::time::Duration;

use crate::clock::{Clock, SystemClock};
use crate::error::ConfigError;
use crate::trackers::SlidingWindowQuota;
use crate::types::Uint;

/// Capacity and window of one rate-limited resource.
///
/// # Example
///
/// ```rust
/// use quota_store_core::QuotaTracker;
/// use quota_store_core::config::QuotaConfig;
/// use quota_store_core::error::ConfigError;
///
/// let config = QuotaConfig::from_secs_f64(100, 0.5).unwrap();
/// let mut quota = config.build().unwrap();
/// assert!(quota.try_admit(100));
///
/// assert_eq!(QuotaConfig::from_secs_f64(0, 1.0), Err(ConfigError::ZeroCapacity));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuotaConfig {
    /// Maximum amount admitted within any trailing window
    pub capacity: Uint,
    /// Length of the trailing window
    pub window: Duration,
}

impl QuotaConfig {
    /// Creates a validated config.
    pub fn new(capacity: Uint, window: Duration) -> Result<Self, ConfigError> {
        let config = QuotaConfig { capacity, window };
        config.validate()?;
        Ok(config)
    }

    /// Creates a validated config from a window in (fractional) seconds.
    pub fn from_secs_f64(capacity: Uint, window_secs: f64) -> Result<Self, ConfigError> {
        let window = Duration::try_from_secs_f64(window_secs)
            .map_err(|_| ConfigError::InvalidWindow { secs: window_secs })?;
        Self::new(capacity, window)
    }

    /// Checks that both parameters are positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.window.is_zero() {
            return Err(ConfigError::ZeroWindow);
        }
        Ok(())
    }

    /// Builds a baseline tracker on the system clock.
    pub fn build(&self) -> Result<SlidingWindowQuota<SystemClock>, ConfigError> {
        self.build_with_clock(SystemClock)
    }

    /// Builds a baseline tracker reading time from `clock`.
    pub fn build_with_clock<C: Clock>(&self, clock: C) -> Result<SlidingWindowQuota<C>, ConfigError> {
        self.validate()?;
        Ok(SlidingWindowQuota::with_clock(self.capacity, self.window, clock))
    }
}
