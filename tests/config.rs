use std::time::Duration;

use quota_store_core::clock::ManualClock;
use quota_store_core::config::QuotaConfig;
use quota_store_core::{ConfigError, QuotaTracker};

#[test]
fn test_valid_config() {
    let config = QuotaConfig::new(10, Duration::from_secs(1)).unwrap();
    assert_eq!(config.capacity, 10);
    assert_eq!(config.window, Duration::from_secs(1));
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_fractional_seconds() {
    let config = QuotaConfig::from_secs_f64(5, 1.5).unwrap();
    assert_eq!(config.window, Duration::from_millis(1500));
}

#[test]
fn test_zero_capacity_rejected() {
    assert_eq!(
        QuotaConfig::new(0, Duration::from_secs(1)),
        Err(ConfigError::ZeroCapacity)
    );
}

#[test]
fn test_zero_window_rejected() {
    assert_eq!(QuotaConfig::new(10, Duration::ZERO), Err(ConfigError::ZeroWindow));
    assert_eq!(QuotaConfig::from_secs_f64(10, 0.0), Err(ConfigError::ZeroWindow));
}

#[test]
fn test_invalid_window_rejected() {
    assert_eq!(
        QuotaConfig::from_secs_f64(10, -1.0),
        Err(ConfigError::InvalidWindow { secs: -1.0 })
    );
    assert!(matches!(
        QuotaConfig::from_secs_f64(10, f64::NAN),
        Err(ConfigError::InvalidWindow { .. })
    ));
    assert!(matches!(
        QuotaConfig::from_secs_f64(10, f64::INFINITY),
        Err(ConfigError::InvalidWindow { .. })
    ));
}

#[test]
fn test_build_validates() {
    let unchecked = QuotaConfig {
        capacity: 0,
        window: Duration::from_secs(1),
    };
    assert_eq!(unchecked.build().unwrap_err(), ConfigError::ZeroCapacity);
}

#[test]
fn test_build_with_clock() {
    let clock = ManualClock::new();
    let config = QuotaConfig::from_secs_f64(4, 0.5).unwrap();
    let mut quota = config.build_with_clock(clock.clone()).unwrap();

    assert!(quota.try_admit(4));
    assert!(!quota.try_admit(1));
    clock.advance(Duration::from_millis(501));
    assert!(quota.try_admit(4));
}
