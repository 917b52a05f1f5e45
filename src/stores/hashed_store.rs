use std::hash::Hash;

use hashbrown::hash_map::Entry;
use hashbrown::HashMap;
use tracing::trace;

use crate::key_value_store::KeyValueStore;

/// Hash-indexed key/value store.
///
/// Same contract as [`SequentialStore`](super::SequentialStore) with O(1)
/// amortized keyed operations. Each entry carries the sequence number of the
/// insertion that created it, which `do_all_readonly` sorts on to keep the
/// newest-first traversal order.
///
/// # Example
///
/// ```rust
/// use quota_store_core::KeyValueStore;
/// use quota_store_core::stores::HashedStore;
///
/// let mut store = HashedStore::with_capacity(16);
/// assert!(store.upsert(1, "one", || {}, || {}));
/// assert!(store.upsert(2, "two", || {}, || {}));
/// assert!(!store.upsert(1, "uno", || {}, || {}));
///
/// let mut keys = Vec::new();
/// store.do_all_readonly(|k, _| keys.push(*k), || {});
/// assert_eq!(keys, vec![2, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct HashedStore<K, V> {
    entries: HashMap<K, Slot<V>>,
    /// Sequence number handed to the next inserted key
    next_seq: u64,
}

#[derive(Debug, Clone)]
struct Slot<V> {
    seq: u64,
    value: V,
}

impl<K: Eq + Hash, V> HashedStore<K, V> {
    pub fn new() -> Self {
        HashedStore {
            entries: HashMap::new(),
            next_seq: 0,
        }
    }

    #[inline]
    fn next_slot(&mut self, value: V) -> Slot<V> {
        let seq = self.next_seq;
        self.next_seq += 1;
        Slot { seq, value }
    }
}

impl<K: Eq + Hash, V> Default for HashedStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V> KeyValueStore for HashedStore<K, V> {
    type Key = K;
    type Value = V;

    fn with_capacity(hint: usize) -> Self {
        HashedStore {
            entries: HashMap::with_capacity(hint),
            next_seq: 0,
        }
    }

    fn insert<S>(&mut self, key: K, val: V, on_success: S) -> bool
    where
        S: FnOnce(),
    {
        if self.entries.contains_key(&key) {
            return false;
        }
        let slot = self.next_slot(val);
        self.entries.insert(key, slot);
        trace!(len = self.entries.len(), "store insert");
        on_success();
        true
    }

    fn upsert<I, U>(&mut self, key: K, val: V, on_ins: I, on_upd: U) -> bool
    where
        I: FnOnce(),
        U: FnOnce(),
    {
        let seq = self.next_seq;
        match self.entries.entry(key) {
            Entry::Occupied(mut occupied) => {
                occupied.get_mut().value = val;
                trace!("store upsert updated");
                on_upd();
                false
            }
            Entry::Vacant(vacant) => {
                vacant.insert(Slot { seq, value: val });
                self.next_seq += 1;
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
        match self.entries.get_mut(key) {
            Some(slot) => {
                f(&mut slot.value);
                true
            }
            None => false,
        }
    }

    fn do_with_readonly<F>(&self, key: &K, f: F) -> bool
    where
        F: FnOnce(&V),
    {
        match self.entries.get(key) {
            Some(slot) => {
                f(&slot.value);
                true
            }
            None => false,
        }
    }

    fn remove<S>(&mut self, key: &K, on_success: S) -> bool
    where
        S: FnOnce(),
    {
        if self.entries.remove(key).is_none() {
            return false;
        }
        trace!(len = self.entries.len(), "store remove");
        on_success();
        true
    }

    fn do_all_readonly<F, T>(&self, mut f: F, then: T)
    where
        F: FnMut(&K, &V),
        T: FnOnce(),
    {
        let mut ordered: Vec<(&K, &Slot<V>)> = self.entries.iter().collect();
        ordered.sort_unstable_by(|a, b| b.1.seq.cmp(&a.1.seq));
        for (key, slot) in ordered {
            f(key, &slot.value);
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
