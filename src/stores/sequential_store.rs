use std::collections::VecDeque;

use tracing::trace;

use crate::key_value_store::KeyValueStore;

/// Linear key/value store.
///
/// Entries live in a single sequence with the newest key at the head. Every
/// keyed operation scans the sequence for a matching key, so the cost of an
/// operation grows with the number of entries. Use
/// [`HashedStore`](super::HashedStore) when the table gets large.
///
/// # Example
///
/// ```rust
/// use quota_store_core::KeyValueStore;
/// use quota_store_core::stores::SequentialStore;
///
/// let mut store = SequentialStore::new();
/// let mut inserted = 0;
///
/// assert!(store.insert("a", 1, || inserted += 1));
/// assert!(!store.insert("a", 2, || inserted += 1));
/// assert_eq!(inserted, 1);
///
/// let mut seen = None;
/// assert!(store.do_with_readonly(&"a", |v| seen = Some(*v)));
/// assert_eq!(seen, Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct SequentialStore<K, V> {
    /// Key/value pairs, most recently inserted first
    entries: VecDeque<(K, V)>,
}

impl<K: Eq, V> SequentialStore<K, V> {
    pub fn new() -> Self {
        SequentialStore {
            entries: VecDeque::new(),
        }
    }

    #[inline]
    fn position(&self, key: &K) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }
}

impl<K: Eq, V> Default for SequentialStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq, V> KeyValueStore for SequentialStore<K, V> {
    type Key = K;
    type Value = V;

    /// The hint is ignored; the sequence grows as needed.
    fn with_capacity(_hint: usize) -> Self {
        Self::new()
    }

    fn insert<S>(&mut self, key: K, val: V, on_success: S) -> bool
    where
        S: FnOnce(),
    {
        if self.position(&key).is_some() {
            return false;
        }
        self.entries.push_front((key, val));
        trace!(len = self.entries.len(), "store insert");
        on_success();
        true
    }

    fn upsert<I, U>(&mut self, key: K, val: V, on_ins: I, on_upd: U) -> bool
    where
        I: FnOnce(),
        U: FnOnce(),
    {
        match self.position(&key) {
            Some(index) => {
                self.entries[index].1 = val;
                trace!(index, "store upsert updated");
                on_upd();
                false
            }
            None => {
                self.entries.push_front((key, val));
                trace!(len = self.entries.len(), "store upsert inserted");
                on_ins();
                true
            }
        }
    }

    fn do_with<F>(&mut self, key: &K, f: F) -> bool
    where
        F: FnOnce(&mut V),
    {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, value)) => {
                f(value);
                true
            }
            None => false,
        }
    }

    fn do_with_readonly<F>(&self, key: &K, f: F) -> bool
    where
        F: FnOnce(&V),
    {
        match self.entries.iter().find(|(k, _)| k == key) {
            Some((_, value)) => {
                f(value);
                true
            }
            None => false,
        }
    }

    fn remove<S>(&mut self, key: &K, on_success: S) -> bool
    where
        S: FnOnce(),
    {
        let removed = match self.position(key) {
            Some(index) => self.entries.remove(index).is_some(),
            None => false,
        };
        if removed {
            trace!(len = self.entries.len(), "store remove");
            on_success();
        }
        removed
    }

    fn do_all_readonly<F, T>(&self, mut f: F, then: T)
    where
        F: FnMut(&K, &V),
        T: FnOnce(),
    {
        for (key, value) in &self.entries {
            f(key, value);
        }
        then();
    }

    fn clear(&mut self) {
        trace!(len = self.entries.len(), "store clear");
        self.entries.clear();
    }

    #[inline]
    fn len(&self) -> usize {
        self.entries.len()
    }
}
