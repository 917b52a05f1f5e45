//! error.rs
//! Defines configuration, verbose admission and lock contention error types.

use std::time::Duration;

use thiserror::Error;

use crate::types::Uint;

/// Rejected quota configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A capacity of zero would reject every non-empty request.
    #[error("quota capacity must be greater than 0")]
    ZeroCapacity,
    /// A zero-length window never retains anything.
    #[error("quota window must be greater than 0")]
    ZeroWindow,
    /// The window was negative, NaN, or too large to represent.
    #[error("quota window of {secs} second(s) is not a valid duration")]
    InvalidWindow { secs: f64 },
}

/// Verbose admission rejection. Contains diagnostic information.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdmitError {
    /// Not enough headroom in the current window.
    #[error(
        "insufficient capacity: requested {requested}, available {available}, retry after {retry_after:?}"
    )]
    InsufficientCapacity {
        requested: Uint,
        available: Uint,
        /// Admission becomes possible once strictly more than this has elapsed.
        retry_after: Duration,
    },
    /// Request permanently exceeds the configured capacity.
    #[error("request exceeds maximum capacity: requested {requested}, capacity {capacity}. This request cannot succeed")]
    BeyondCapacity { requested: Uint, capacity: Uint },
}

/// Result type for verbose admission.
pub type AdmitResult = Result<(), AdmitError>;

/// A non-blocking lock attempt found the resource held by another caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("contention failure: resource is locked by another operation, please retry")]
pub struct Contended;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AdmitError::InsufficientCapacity {
            requested: 3,
            available: 1,
            retry_after: Duration::from_millis(250),
        };
        let display = err.to_string();
        assert!(display.contains("requested 3"));
        assert!(display.contains("available 1"));
        assert!(display.contains("250ms"));

        let err = ConfigError::InvalidWindow { secs: -1.5 };
        assert!(err.to_string().contains("-1.5"));
    }
}
