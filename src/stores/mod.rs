//! Key/value store implementations.
//!
//! Both stores honor the same [`KeyValueStore`](crate::KeyValueStore)
//! contract, including hook firing and head-first traversal order, so an
//! embedding server can switch between them without behavior changes.
//!
//! | Store | Keyed operations | Traversal | Key bound |
//! |-------|------------------|-----------|-----------|
//! | [`SequentialStore`] | O(n) linear scan | O(n) | `Eq` |
//! | [`HashedStore`] | O(1) amortized | O(n log n) | `Eq + Hash` |

pub mod sequential_store;
pub use sequential_store::SequentialStore;

pub mod hashed_store;
pub use hashed_store::HashedStore;
