//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the bounded cache against a simple reference model.

use proptest::prelude::*;
use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use crate::cache::BoundedExpiringCache;

// == Test Configuration ==
const TEST_CAPACITY: usize = 8;
const TEST_TTL: Duration = Duration::from_secs(300);

// == Strategies ==
/// Small key space so operations collide often
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-j]"
}

fn value_strategy() -> impl Strategy<Value = u32> {
    any::<u32>()
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: u32 },
    Get { key: String },
    Has { key: String },
    Delete { key: String },
    Clear,
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        4 => (key_strategy(), value_strategy())
            .prop_map(|(key, value)| CacheOp::Set { key, value }),
        3 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        2 => key_strategy().prop_map(|key| CacheOp::Has { key }),
        1 => key_strategy().prop_map(|key| CacheOp::Delete { key }),
        1 => Just(CacheOp::Clear),
    ]
}

// == Reference Model ==
/// Straightforward LRU with linear reordering; front = least recent.
#[derive(Default)]
struct Model {
    order: VecDeque<String>,
    values: HashMap<String, u32>,
    capacity: usize,
}

impl Model {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    fn remove(&mut self, key: &str) {
        self.order.retain(|k| k != key);
        self.values.remove(key);
    }

    fn set(&mut self, key: String, value: u32) {
        if self.capacity == 0 {
            return;
        }
        self.remove(&key);
        if self.values.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.values.remove(&oldest);
            }
        }
        self.order.push_back(key.clone());
        self.values.insert(key, value);
    }

    fn get(&mut self, key: &str) -> Option<u32> {
        let value = *self.values.get(key)?;
        self.order.retain(|k| k != key);
        self.order.push_back(key.to_string());
        Some(value)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // The cache agrees with the reference model on every read and on the
    // final recency order, and never exceeds its capacity.
    #[test]
    fn prop_matches_reference_model(
        capacity in 0usize..=TEST_CAPACITY,
        ops in prop::collection::vec(cache_op_strategy(), 1..120)
    ) {
        let mut cache = BoundedExpiringCache::new(capacity, TEST_TTL);
        let mut model = Model::new(capacity);

        for op in ops {
            match op {
                CacheOp::Set { key, value } => {
                    cache.set(key.clone(), value);
                    model.set(key, value);
                }
                CacheOp::Get { key } => {
                    prop_assert_eq!(cache.get(&key), model.get(&key));
                }
                CacheOp::Has { key } => {
                    prop_assert_eq!(cache.has(&key), model.values.contains_key(&key));
                }
                CacheOp::Delete { key } => {
                    cache.delete(&key);
                    model.remove(&key);
                }
                CacheOp::Clear => {
                    cache.clear();
                    model.order.clear();
                    model.values.clear();
                }
            }

            prop_assert!(cache.size() <= capacity, "size {} exceeds capacity {}", cache.size(), capacity);
            prop_assert_eq!(cache.size(), model.values.len());
        }

        let recency: Vec<&str> = cache.keys_by_recency().collect();
        let expected: Vec<&str> = model.order.iter().map(String::as_str).collect();
        prop_assert_eq!(recency, expected);
    }

    // Inserting capacity + 1 distinct keys evicts exactly the first one.
    #[test]
    fn prop_overflow_evicts_first_inserted(
        keys in prop::collection::hash_set("[a-z]{1,12}", 2..20)
    ) {
        let keys: Vec<String> = keys.into_iter().collect();
        let capacity = keys.len() - 1;
        let mut cache = BoundedExpiringCache::new(capacity, TEST_TTL);

        for (i, key) in keys.iter().enumerate() {
            cache.set(key.clone(), i);
        }

        prop_assert_eq!(cache.size(), capacity);
        prop_assert!(!cache.has(&keys[0]), "first key '{}' should be evicted", keys[0]);
        for (i, key) in keys.iter().enumerate().skip(1) {
            prop_assert_eq!(cache.get(key), Some(i));
        }
    }

    // Reading the least recently used key protects it from the next eviction.
    #[test]
    fn prop_get_protects_from_eviction(
        keys in prop::collection::hash_set("[a-z]{1,12}", 3..12),
        new_key in "[0-9]{1,4}"
    ) {
        let keys: Vec<String> = keys.into_iter().collect();
        let mut cache = BoundedExpiringCache::new(keys.len(), TEST_TTL);

        for key in &keys {
            cache.set(key.clone(), format!("value_{}", key));
        }

        prop_assert!(cache.get(&keys[0]).is_some());
        cache.set(new_key.clone(), "new".to_string());

        prop_assert!(cache.has(&keys[0]), "accessed key should survive");
        prop_assert!(!cache.has(&keys[1]), "second key should be evicted");
        prop_assert!(cache.has(&new_key));
    }

    // Every key set within capacity stays retrievable until its TTL elapses,
    // and none is returned afterwards.
    #[test]
    fn prop_entries_live_exactly_until_ttl(
        entries in prop::collection::hash_map("[a-z]{1,8}", any::<u16>(), 1..TEST_CAPACITY),
        ttl_ms in 1u64..10_000
    ) {
        let ttl = Duration::from_millis(ttl_ms);
        let t0 = Instant::now();
        let mut cache = BoundedExpiringCache::new(TEST_CAPACITY, ttl);

        for (key, value) in &entries {
            cache.set_at(key.clone(), *value, t0);
        }

        for (key, value) in &entries {
            prop_assert_eq!(cache.get_at(key, t0 + ttl), Some(*value));
        }

        let after = t0 + ttl + Duration::from_millis(1);
        for key in entries.keys() {
            prop_assert!(!cache.has_at(key, after));
        }
        prop_assert_eq!(cache.size(), 0);
    }

    // Overwriting a key returns the latest value and keeps a single slot.
    #[test]
    fn prop_overwrite_semantics(
        key in "[a-z]{1,16}",
        value1 in any::<i64>(),
        value2 in any::<i64>()
    ) {
        let mut cache = BoundedExpiringCache::new(TEST_CAPACITY, TEST_TTL);

        cache.set(key.clone(), value1);
        cache.set(key.clone(), value2);

        prop_assert_eq!(cache.get(&key), Some(value2));
        prop_assert_eq!(cache.size(), 1);
    }
}
