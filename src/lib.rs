//! Admission control and state-table primitives for request-serving systems.
//!
//! This library provides two independent building blocks that an embedding
//! server calls from its request dispatcher:
//!
//! - a **sliding-window quota tracker** that decides whether a new amount of
//!   demand can be admitted without exceeding a capacity over a trailing
//!   time window;
//! - a **key/value store** whose operations accept continuation hooks, so
//!   an external locking layer can act at the exact success or failure point
//!   of each mutation.
//!
//! # Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use quota_store_core::{KeyValueStore, QuotaTracker};
//! use quota_store_core::stores::SequentialStore;
//! use quota_store_core::trackers::quota_factory;
//!
//! // 10 units per second
//! let mut quota = quota_factory(10, Duration::from_secs(1));
//! let mut table = SequentialStore::new();
//!
//! if quota.try_admit(1) {
//!     table.upsert("alice".to_string(), 1, || println!("new"), || println!("updated"));
//! }
//! ```
//!
//! # Quota Trackers
//!
//! ## [Sliding Window](trackers::SlidingWindowQuota)
//! Baseline ledger that rescans the window on every call:
//! ```rust
//! # use std::time::Duration;
//! # use quota_store_core::trackers::SlidingWindowQuota;
//! let quota = SlidingWindowQuota::new(100, Duration::from_secs(60));
//! ```
//!
//! ## [Running Total](trackers::RunningTotalQuota)
//! Same decisions, with a cached sum of the window:
//! ```rust
//! # use std::time::Duration;
//! # use quota_store_core::trackers::RunningTotalQuota;
//! let quota = RunningTotalQuota::new(100, Duration::from_secs(60));
//! ```
//!
//! # Key/Value Stores
//!
//! - [`SequentialStore`](stores::SequentialStore) - linear baseline
//! - [`HashedStore`](stores::HashedStore) - hash-indexed, same contract
//!
//! # Core Concepts
//!
//! ## Time
//! Trackers read time through a [`Clock`](clock::Clock).
//! [`SystemClock`](clock::SystemClock) is wall-clock time;
//! [`ManualClock`](clock::ManualClock) lets tests move time explicitly.
//! Every admission call also has an `_at` form taking the timestamp directly.
//!
//! ## Outcomes
//! Rejections and key-presence mismatches are routine and reported as
//! `bool`. The verbose admission path returns [`AdmitError`] with the
//! available headroom and a retry hint.
//!
//! ## Thread Safety
//! Neither primitive synchronizes internally. Share one across threads by
//! wrapping it in [`Guarded`](guarded::Guarded).

pub mod clock;
pub mod config;
pub mod error;
pub mod guarded;
pub mod key_value_store;
pub mod quota_tracker;
pub mod stores;
pub mod trackers;
pub mod types;

pub use error::{AdmitError, AdmitResult, ConfigError, Contended};
pub use key_value_store::KeyValueStore;
pub use quota_tracker::QuotaTracker;
pub use types::Uint;
