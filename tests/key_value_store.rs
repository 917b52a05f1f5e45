use std::cell::Cell;

use quota_store_core::stores::{HashedStore, SequentialStore};
use quota_store_core::KeyValueStore;

fn keys_in_order<S>(store: &S) -> Vec<String>
where
    S: KeyValueStore<Key = String, Value = i32>,
{
    let mut keys = Vec::new();
    store.do_all_readonly(|k, _| keys.push(k.clone()), || {});
    keys
}

fn value_of<S>(store: &S, key: &str) -> Option<i32>
where
    S: KeyValueStore<Key = String, Value = i32>,
{
    let mut seen = None;
    store.do_with_readonly(&key.to_string(), |v| seen = Some(*v));
    seen
}

macro_rules! store_contract_tests {
    ($name:ident, $store:ty) => {
        mod $name {
            use super::*;

            fn new_store() -> $store {
                <$store as KeyValueStore>::with_capacity(8)
            }

            #[test]
            fn insert_is_unique() {
                let mut store = new_store();
                let fired = Cell::new(0);

                assert!(store.insert("k".to_string(), 1, || fired.set(fired.get() + 1)));
                assert!(!store.insert("k".to_string(), 2, || fired.set(fired.get() + 1)));

                assert_eq!(fired.get(), 1);
                assert_eq!(value_of(&store, "k"), Some(1));
                assert_eq!(store.len(), 1);
            }

            #[test]
            fn upsert_inserts_then_updates() {
                let mut store = new_store();
                let inserted = Cell::new(0);
                let updated = Cell::new(0);

                assert!(store.upsert(
                    "k".to_string(),
                    1,
                    || inserted.set(inserted.get() + 1),
                    || updated.set(updated.get() + 1),
                ));
                assert_eq!((inserted.get(), updated.get()), (1, 0));

                assert!(!store.upsert(
                    "k".to_string(),
                    2,
                    || inserted.set(inserted.get() + 1),
                    || updated.set(updated.get() + 1),
                ));
                assert_eq!((inserted.get(), updated.get()), (1, 1));
                assert_eq!(value_of(&store, "k"), Some(2));
                assert_eq!(store.len(), 1);
            }

            #[test]
            fn upsert_update_keeps_position() {
                let mut store = new_store();
                for (i, key) in ["a", "b", "c"].iter().enumerate() {
                    store.insert(key.to_string(), i as i32, || {});
                }
                assert_eq!(keys_in_order(&store), vec!["c", "b", "a"]);

                store.upsert("a".to_string(), 10, || {}, || {});
                assert_eq!(keys_in_order(&store), vec!["c", "b", "a"]);

                store.upsert("d".to_string(), 4, || {}, || {});
                assert_eq!(keys_in_order(&store), vec!["d", "c", "b", "a"]);
            }

            #[test]
            fn do_with_mutates_in_place() {
                let mut store = new_store();
                store.insert("k".to_string(), 5, || {});

                assert!(store.do_with(&"k".to_string(), |v| *v += 10));
                assert_eq!(value_of(&store, "k"), Some(15));

                let mut called = false;
                assert!(!store.do_with(&"missing".to_string(), |_| called = true));
                assert!(!called);
            }

            #[test]
            fn do_with_readonly_missing_key() {
                let store = new_store();
                let mut called = false;
                assert!(!store.do_with_readonly(&"missing".to_string(), |_| called = true));
                assert!(!called);
            }

            #[test]
            fn remove_is_single_shot() {
                let mut store = new_store();
                let fired = Cell::new(0);
                store.insert("k".to_string(), 1, || {});

                assert!(store.remove(&"k".to_string(), || fired.set(fired.get() + 1)));
                assert!(!store.remove(&"k".to_string(), || fired.set(fired.get() + 1)));

                assert_eq!(fired.get(), 1);
                assert!(store.is_empty());
                assert_eq!(value_of(&store, "k"), None);
            }

            #[test]
            fn traversal_visits_each_entry_once_then_fires() {
                let mut store = new_store();
                for key in ["a", "b", "c"] {
                    store.insert(key.to_string(), 0, || {});
                }
                store.remove(&"b".to_string(), || {});

                let mut visited = Vec::new();
                let mut then_fired = 0;
                store.do_all_readonly(
                    |k, _| visited.push(k.clone()),
                    || then_fired += 1,
                );

                assert_eq!(visited, vec!["c", "a"]);
                assert_eq!(then_fired, 1);
            }

            #[test]
            fn then_fires_after_traversal() {
                let mut store = new_store();
                store.insert("a".to_string(), 1, || {});
                store.insert("b".to_string(), 2, || {});

                let visits = Cell::new(0);
                let visits_when_then_ran = Cell::new(None);
                store.do_all_readonly(
                    |_, _| visits.set(visits.get() + 1),
                    || visits_when_then_ran.set(Some(visits.get())),
                );
                assert_eq!(visits_when_then_ran.get(), Some(2));
            }

            #[test]
            fn clear_resets() {
                let mut store = new_store();
                store.insert("a".to_string(), 1, || {});
                store.insert("b".to_string(), 2, || {});
                store.clear();

                let mut visited = 0;
                let mut then_fired = false;
                store.do_all_readonly(|_, _| visited += 1, || then_fired = true);
                assert_eq!(visited, 0);
                assert!(then_fired);

                assert!(!store.do_with(&"a".to_string(), |_| {}));
                assert!(store.is_empty());

                // Keys can be inserted again after a clear
                assert!(store.insert("a".to_string(), 3, || {}));
                assert_eq!(value_of(&store, "a"), Some(3));
            }
        }
    };
}

store_contract_tests!(sequential, SequentialStore<String, i32>);
store_contract_tests!(hashed, HashedStore<String, i32>);
