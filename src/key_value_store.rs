//! Core trait for hook-driven key/value stores.
//!
//! Mutating operations take continuation hooks that fire exactly on the
//! outcome they are named for, after the mutation has been applied and
//! before the operation returns. An external transactional layer uses them
//! to release locks or publish changes at the exact decision point without
//! the store knowing anything about locking.
//!
//! Hooks are `FnOnce`, so none of them can run more than once.

/// The core trait implemented by all key/value stores.
///
/// Keys are unique: no two entries share a key between operations. New keys
/// are placed at the head of the store's sequence, so
/// [`do_all_readonly`](KeyValueStore::do_all_readonly) visits the most
/// recently inserted keys first. Replacing a value does not move its entry.
pub trait KeyValueStore {
    type Key: Eq;
    type Value;

    /// Creates an empty store. `hint` is an advisory expected size which an
    /// implementation is free to ignore.
    fn with_capacity(hint: usize) -> Self
    where
        Self: Sized;

    /// Inserts `key` mapped to `val` only if `key` is absent.
    ///
    /// # Returns
    /// * `true` if the entry was inserted, after running `on_success`
    /// * `false` if the key already existed; nothing changes and no hook runs
    fn insert<S>(&mut self, key: Self::Key, val: Self::Value, on_success: S) -> bool
    where
        S: FnOnce();

    /// Inserts `key` mapped to `val`, or replaces the value of an existing
    /// entry in place.
    ///
    /// Exactly one of the hooks runs: `on_ins` after an insertion, `on_upd`
    /// after an update.
    ///
    /// # Returns
    /// * `true` if the key was new and inserted
    /// * `false` if the key existed and its value was replaced
    fn upsert<I, U>(&mut self, key: Self::Key, val: Self::Value, on_ins: I, on_upd: U) -> bool
    where
        I: FnOnce(),
        U: FnOnce();

    /// Applies `f` to the value of `key`, which it may modify.
    ///
    /// Returns `true` if the key existed and `f` ran.
    fn do_with<F>(&mut self, key: &Self::Key, f: F) -> bool
    where
        F: FnOnce(&mut Self::Value);

    /// Applies `f` to the value of `key` without modifying it.
    ///
    /// Returns `true` if the key existed and `f` ran.
    fn do_with_readonly<F>(&self, key: &Self::Key, f: F) -> bool
    where
        F: FnOnce(&Self::Value);

    /// Removes the entry for `key`.
    ///
    /// # Returns
    /// * `true` if the entry was removed, after running `on_success`
    /// * `false` if the key was absent; `on_success` does not run
    fn remove<S>(&mut self, key: &Self::Key, on_success: S) -> bool
    where
        S: FnOnce();

    /// Calls `f` once for every entry in sequence order, then calls `then`
    /// exactly once, even if the store is empty.
    fn do_all_readonly<F, T>(&self, f: F, then: T)
    where
        F: FnMut(&Self::Key, &Self::Value),
        T: FnOnce();

    /// Removes every entry.
    fn clear(&mut self);

    /// Number of entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
