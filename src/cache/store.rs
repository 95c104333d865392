//! Cache Store Module
//!
//! Bounded cache engine combining HashMap storage with O(1) LRU tracking and
//! lazy TTL expiration.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::trace;

use crate::cache::entry::CacheEntry;
use crate::cache::lru::{LruTracker, NodeId};
use crate::cache::CacheStats;
use crate::error::{CacheError, Result};

#[derive(Debug)]
struct Slot<V> {
    entry: CacheEntry<V>,
    node: NodeId,
}

// == Bounded Expiring Cache ==
/// Fixed-capacity string-keyed cache with LRU eviction and a single TTL.
///
/// Expired entries are treated as absent and are purged by whichever access
/// discovers them; nothing sweeps them in the background. The key set of the
/// recency tracker always equals the key set of the map.
///
/// `get` refreshes recency; `has` does not. Both perform the same lazy
/// expiry.
#[derive(Debug)]
pub struct BoundedExpiringCache<V> {
    /// Key-value storage
    entries: HashMap<String, Slot<V>>,
    /// LRU access tracker
    lru: LruTracker,
    /// Maximum number of entries allowed
    capacity: usize,
    /// Lifetime of every entry
    ttl: Duration,
}

impl<V: Clone> BoundedExpiringCache<V> {
    // == Constructor ==
    /// Creates a cache holding at most `capacity` entries for at most `ttl`.
    ///
    /// Degenerate settings are accepted: a capacity of 0 refuses every
    /// insertion and a TTL of 0 makes every entry stale on its next access.
    /// Use [`try_new`](Self::try_new) to reject them instead.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            lru: LruTracker::with_capacity(capacity),
            capacity,
            ttl,
        }
    }

    /// Creates a cache, rejecting a zero capacity or zero TTL.
    pub fn try_new(capacity: usize, ttl: Duration) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidConfig(
                "capacity must be greater than zero".to_string(),
            ));
        }
        if ttl.is_zero() {
            return Err(CacheError::InvalidConfig(
                "ttl must be greater than zero".to_string(),
            ));
        }
        Ok(Self::new(capacity, ttl))
    }

    // == Get ==
    /// Returns a clone of the live value for `key`, promoting it to most
    /// recently used. An expired entry is removed and `None` returned.
    pub fn get(&mut self, key: &str) -> Option<V> {
        self.get_at(key, Instant::now())
    }

    pub(crate) fn get_at(&mut self, key: &str, now: Instant) -> Option<V> {
        if self.purge_if_expired(key, now) {
            return None;
        }

        let slot = self.entries.get(key)?;
        self.lru.touch(slot.node);
        Some(slot.entry.value.clone())
    }

    // == Set ==
    /// Stores `value` under `key` as the most recently used entry.
    ///
    /// An existing entry for `key` is removed first, so its timestamp and
    /// recency position are both reset. If the cache is still full the least
    /// recently used entry is evicted. With a capacity of 0 nothing is stored.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        self.set_at(key.into(), value, Instant::now());
    }

    pub(crate) fn set_at(&mut self, key: String, value: V, now: Instant) {
        if self.capacity == 0 {
            trace!(key = %key, "cache has zero capacity, refusing insert");
            return;
        }

        self.delete(&key);

        if self.entries.len() >= self.capacity {
            if let Some(evicted) = self.lru.pop_front() {
                self.entries.remove(&evicted);
                trace!(key = %evicted, "evicted least recently used entry");
            }
        }

        let node = self.lru.push_back(key.clone());
        self.entries.insert(
            key,
            Slot {
                entry: CacheEntry::with_timestamp(value, now),
                node,
            },
        );
        debug_assert_eq!(self.lru.len(), self.entries.len());
    }

    // == Has ==
    /// Checks whether a live entry exists for `key` without promoting it.
    ///
    /// An expired entry is removed, exactly as `get` would.
    pub fn has(&mut self, key: &str) -> bool {
        self.has_at(key, Instant::now())
    }

    pub(crate) fn has_at(&mut self, key: &str, now: Instant) -> bool {
        !self.purge_if_expired(key, now) && self.entries.contains_key(key)
    }

    // == Delete ==
    /// Removes an entry by key. Does nothing if the key is absent.
    ///
    /// Returns whether an entry was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        match self.entries.remove(key) {
            Some(slot) => {
                self.lru.remove(slot.node);
                true
            }
            None => false,
        }
    }

    // == Clear ==
    /// Drops every entry. Capacity and TTL are unchanged.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.lru.clear();
    }

    // == Purge Expired ==
    /// Removes all expired entries in one pass and returns how many were
    /// dropped. Only runs when a caller asks for it.
    pub fn purge_expired(&mut self) -> usize {
        self.purge_expired_at(Instant::now())
    }

    pub(crate) fn purge_expired_at(&mut self, now: Instant) -> usize {
        let ttl = self.ttl;
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, slot)| slot.entry.is_expired(now, ttl))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired {
            self.delete(key);
        }
        expired.len()
    }

    // == Stats ==
    /// Returns an occupancy snapshot.
    pub fn stats(&self) -> CacheStats {
        CacheStats::new(self.entries.len(), self.capacity, self.ttl)
    }

    // == Size ==
    /// Returns the number of occupied slots, expired entries included.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Keys from least to most recently used.
    pub fn keys_by_recency(&self) -> impl Iterator<Item = &str> {
        self.lru.iter()
    }

    /// Deletes `key` if it is present and expired; returns whether it did.
    fn purge_if_expired(&mut self, key: &str, now: Instant) -> bool {
        let expired = self
            .entries
            .get(key)
            .is_some_and(|slot| slot.entry.is_expired(now, self.ttl));

        if expired {
            self.delete(key);
            trace!(key = %key, "purged expired entry on access");
        }
        expired
    }
}
