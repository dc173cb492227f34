//! Property-Based Tests for Cache Module
//!
//! Drives the store with random operation sequences and checks it against a
//! plain `HashMap` model.

use proptest::prelude::*;
use std::collections::{HashMap, HashSet};
use std::time::Duration;

use crate::cache::{CacheStats, CacheStore, MemoryCache};

// == Test Configuration ==
const LONG_TTL: Duration = Duration::from_secs(3600);

// == Strategies ==
/// Keys drawn from a small alphabet so sequences revisit the same keys and
/// share prefixes.
fn key_strategy() -> impl Strategy<Value = String> {
    "(cat|perm|vid)_[a-c]{1,3}"
}

fn value_strategy() -> impl Strategy<Value = u32> {
    any::<u32>()
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: u32 },
    SetStale { key: String, value: u32 },
    Get { key: String },
    Delete { key: String },
    Invalidate { prefix: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        4 => (key_strategy(), value_strategy())
            .prop_map(|(key, value)| CacheOp::Set { key, value }),
        1 => (key_strategy(), value_strategy())
            .prop_map(|(key, value)| CacheOp::SetStale { key, value }),
        3 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        1 => key_strategy().prop_map(|key| CacheOp::Delete { key }),
        1 => "(cat|perm|vid)_[a-c]?".prop_map(|prefix| CacheOp::Invalidate { prefix }),
    ]
}

/// Applies `op` to the store and the model; returns what a read observed.
fn apply(store: &mut CacheStore, model: &mut HashMap<String, u32>, op: CacheOp) -> Option<(Option<u32>, Option<u32>)> {
    match op {
        CacheOp::Set { key, value } => {
            store.set(key.clone(), value, LONG_TTL);
            model.insert(key, value);
            None
        }
        CacheOp::SetStale { key, value } => {
            store.set(key.clone(), value, Duration::ZERO);
            model.remove(&key);
            None
        }
        CacheOp::Get { key } => Some((store.get::<u32>(&key), model.get(&key).copied())),
        CacheOp::Delete { key } => {
            store.delete(&key);
            model.remove(&key);
            None
        }
        CacheOp::Invalidate { prefix } => {
            store.invalidate_prefix(&prefix);
            model.retain(|k, _| !k.starts_with(&prefix));
            None
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Every read agrees with the model, whatever came before it.
    #[test]
    fn prop_reads_match_model(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut store = CacheStore::new();
        let mut model = HashMap::new();

        for op in ops {
            if let Some((actual, expected)) = apply(&mut store, &mut model, op) {
                prop_assert_eq!(actual, expected);
            }
        }

        let live: HashSet<String> = store.keys(None).into_iter().collect();
        let expected: HashSet<String> = model.keys().cloned().collect();
        prop_assert_eq!(live, expected);
    }

    // Stats always partition the stored entries, and taking them removes nothing.
    #[test]
    fn prop_stats_partition_entries(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut store = CacheStore::new();
        let mut model = HashMap::new();
        for op in ops {
            apply(&mut store, &mut model, op);
        }

        let len_before = store.len();
        let stats: CacheStats = store.stats();
        prop_assert_eq!(stats.total, stats.active + stats.expired);
        prop_assert_eq!(stats.total, len_before);
        prop_assert_eq!(stats.active, model.len());
        prop_assert_eq!(store.len(), len_before);
    }

    // Overwriting a key always yields the latest value.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        let mut store = CacheStore::new();
        store.set(key.clone(), value1, LONG_TTL);
        store.set(key.clone(), value2, LONG_TTL);

        prop_assert_eq!(store.get::<u32>(&key), Some(value2));
        prop_assert_eq!(store.len(), 1);
    }

    // Operations on one key never disturb another.
    #[test]
    fn prop_keys_are_independent(
        a in key_strategy(),
        b in key_strategy(),
        value in value_strategy(),
        ops in prop::collection::vec(value_strategy(), 0..10)
    ) {
        prop_assume!(a != b);

        let mut store = CacheStore::new();
        store.set(b.clone(), value, LONG_TTL);
        let expires_before = store.get_entry(&b).map(|e| e.expires_at);

        for v in ops {
            store.set(a.clone(), v, LONG_TTL);
            store.get::<u32>(&a);
            store.set(a.clone(), v, Duration::ZERO);
            store.get::<u32>(&a);
            store.delete(&a);
        }

        prop_assert_eq!(store.get::<u32>(&b), Some(value));
        prop_assert_eq!(store.get_entry(&b).map(|e| e.expires_at), expires_before);
    }

    // `keys(prefix)` returns exactly the live keys with that prefix.
    #[test]
    fn prop_prefix_scoping(
        keys in prop::collection::hash_set(key_strategy(), 0..20),
        prefix in "(cat|perm|vid)_"
    ) {
        let mut store = CacheStore::new();
        for key in &keys {
            store.set(key.clone(), 0u32, LONG_TTL);
        }

        let found: HashSet<String> = store.keys(Some(&prefix)).into_iter().collect();
        let expected: HashSet<String> = keys.iter().filter(|k| k.starts_with(&prefix)).cloned().collect();
        prop_assert_eq!(found, expected);
    }

    // Clearing reports the number of stored entries and leaves nothing readable.
    #[test]
    fn prop_clear_returns_count(keys in prop::collection::hash_set(key_strategy(), 0..20)) {
        let mut store = CacheStore::new();
        for key in &keys {
            store.set(key.clone(), 1u32, LONG_TTL);
        }

        prop_assert_eq!(store.clear().cleared_count, keys.len());
        for key in &keys {
            prop_assert_eq!(store.get::<u32>(key), None);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    // Concurrent tasks writing disjoint keys through the shared handle each
    // see their own writes and the final state holds all of them.
    #[test]
    fn prop_concurrent_disjoint_writers(values in prop::collection::vec(value_strategy(), 1..40)) {
        let rt = tokio::runtime::Runtime::new().unwrap();

        rt.block_on(async {
            let cache = MemoryCache::new();

            let handles: Vec<_> = values
                .iter()
                .copied()
                .enumerate()
                .map(|(i, value)| {
                    let cache = cache.clone();
                    tokio::spawn(async move {
                        let key = format!("task_{i}");
                        cache.set(key.clone(), value, LONG_TTL).await;
                        cache.get::<u32>(&key).await
                    })
                })
                .collect();

            for (handle, value) in handles.into_iter().zip(&values) {
                let seen = handle.await.expect("task should not panic");
                prop_assert_eq!(seen, Some(*value));
            }

            prop_assert_eq!(cache.stats().await.active, values.len());
            Ok(())
        })?;
    }

    // Driving the async handle synchronously gives the same answers as the store.
    #[test]
    fn prop_handle_matches_store(ops in prop::collection::vec(cache_op_strategy(), 1..30)) {
        let cache = MemoryCache::new();
        let mut model = HashMap::new();

        for op in ops {
            match op {
                CacheOp::Set { key, value } => {
                    tokio_test::block_on(cache.set(key.clone(), value, LONG_TTL));
                    model.insert(key, value);
                }
                CacheOp::SetStale { key, value } => {
                    tokio_test::block_on(cache.set(key.clone(), value, Duration::ZERO));
                    model.remove(&key);
                }
                CacheOp::Get { key } => {
                    let seen = tokio_test::block_on(cache.get::<u32>(&key));
                    prop_assert_eq!(seen, model.get(&key).copied());
                }
                CacheOp::Delete { key } => {
                    tokio_test::block_on(cache.delete(&key));
                    model.remove(&key);
                }
                CacheOp::Invalidate { prefix } => {
                    tokio_test::block_on(cache.invalidate_prefix(&prefix));
                    model.retain(|k, _| !k.starts_with(&prefix));
                }
            }
        }
    }
}
