//! Cache Entry Module
//!
//! Defines the structure for individual cache entries stamped with their
//! insertion time.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A stored value together with the instant it was inserted.
///
/// Entries are never updated in place: a `set` on an existing key builds a
/// fresh entry with a fresh timestamp.
#[derive(Debug, Clone)]
pub(crate) struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Monotonic insertion timestamp
    pub inserted_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry with an explicit insertion instant.
    pub fn with_timestamp(value: V, inserted_at: Instant) -> Self {
        Self { value, inserted_at }
    }

    // == Age ==
    /// Returns how long ago the entry was inserted, as seen from `now`.
    ///
    /// Saturates to zero if `now` precedes the insertion instant.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.inserted_at)
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived `ttl`.
    ///
    /// Boundary condition: an entry whose age equals `ttl` exactly is still
    /// live; it expires once its age is strictly greater than `ttl`.
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        self.age(now) > ttl
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let t0 = Instant::now();
        let entry = CacheEntry::with_timestamp("text/plain".to_string(), t0);

        assert_eq!(entry.value, "text/plain");
        assert_eq!(entry.inserted_at, t0);
        assert!(!entry.is_expired(t0, Duration::from_secs(60)));
    }

    #[test]
    fn test_entry_expiration() {
        let t0 = Instant::now();
        let entry = CacheEntry::with_timestamp(42u32, t0);
        let ttl = Duration::from_millis(1000);

        assert!(!entry.is_expired(t0 + Duration::from_millis(999), ttl));
        assert!(entry.is_expired(t0 + Duration::from_millis(1001), ttl));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let t0 = Instant::now();
        let entry = CacheEntry::with_timestamp("v", t0);
        let ttl = Duration::from_millis(500);

        // Age equal to the TTL is still live
        assert!(!entry.is_expired(t0 + ttl, ttl));
        assert!(entry.is_expired(t0 + ttl + Duration::from_nanos(1), ttl));
    }

    #[test]
    fn test_zero_ttl_is_stale_on_next_access() {
        let t0 = Instant::now();
        let entry = CacheEntry::with_timestamp("v", t0);

        assert!(entry.is_expired(t0 + Duration::from_nanos(1), Duration::ZERO));
    }

    #[test]
    fn test_age_saturates_before_insertion() {
        let t0 = Instant::now();
        let entry = CacheEntry::with_timestamp("v", t0 + Duration::from_secs(5));

        assert_eq!(entry.age(t0), Duration::ZERO);
    }
}
