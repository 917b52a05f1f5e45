use proptest::prelude::*;
use quota_store_core::stores::{HashedStore, SequentialStore};
use quota_store_core::KeyValueStore;

#[derive(Debug, Clone)]
enum Op {
    Insert(u8, i64),
    Upsert(u8, i64),
    Add(u8, i64),
    Remove(u8),
    Clear,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0u8..8, any::<i64>()).prop_map(|(k, v)| Op::Insert(k, v)),
        4 => (0u8..8, any::<i64>()).prop_map(|(k, v)| Op::Upsert(k, v)),
        2 => (0u8..8, -100i64..100).prop_map(|(k, d)| Op::Add(k, d)),
        3 => (0u8..8).prop_map(Op::Remove),
        1 => Just(Op::Clear),
    ]
}

/// Applies `op` and reports the return value and which hooks fired.
fn apply<S>(store: &mut S, op: &Op) -> (bool, u32, u32)
where
    S: KeyValueStore<Key = u8, Value = i64>,
{
    let mut first = 0;
    let mut second = 0;
    let result = match *op {
        Op::Insert(k, v) => store.insert(k, v, || first += 1),
        Op::Upsert(k, v) => store.upsert(k, v, || first += 1, || second += 1),
        Op::Add(k, d) => store.do_with(&k, |v| *v = v.wrapping_add(d)),
        Op::Remove(k) => store.remove(&k, || first += 1),
        Op::Clear => {
            store.clear();
            true
        }
    };
    (result, first, second)
}

fn snapshot<S>(store: &S) -> Vec<(u8, i64)>
where
    S: KeyValueStore<Key = u8, Value = i64>,
{
    let mut entries = Vec::new();
    store.do_all_readonly(|k, v| entries.push((*k, *v)), || {});
    entries
}

proptest! {
    #[test]
    fn hashed_store_matches_sequential(ops in prop::collection::vec(arb_op(), 1..120)) {
        let mut sequential = SequentialStore::new();
        let mut hashed = HashedStore::new();

        for op in &ops {
            let (result, first, second) = apply(&mut sequential, op);
            prop_assert_eq!((result, first, second), apply(&mut hashed, op));

            // A hook fires exactly when the operation reports success
            match op {
                Op::Insert(..) | Op::Remove(..) => {
                    prop_assert_eq!(first, u32::from(result));
                }
                Op::Upsert(..) => {
                    prop_assert_eq!(first + second, 1);
                    prop_assert_eq!(first, u32::from(result));
                }
                _ => {}
            }

            prop_assert_eq!(snapshot(&sequential), snapshot(&hashed));
            prop_assert_eq!(sequential.len(), hashed.len());
        }
    }
}
