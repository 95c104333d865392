//! Cache Statistics Module
//!
//! Point-in-time occupancy snapshot of a single bounded cache.

use std::time::Duration;

use serde::Serialize;

// == Cache Stats ==
/// Diagnostic snapshot of a [`BoundedExpiringCache`](super::BoundedExpiringCache).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheStats {
    /// Occupied slots, including expired entries not yet purged
    pub size: usize,
    /// Maximum number of entries
    pub capacity: usize,
    /// size / capacity * 100, or 0 when capacity is 0
    pub usage_percent: f64,
    /// Time-to-live in milliseconds, saturating at `u64::MAX`
    pub ttl_ms: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Builds a snapshot from raw occupancy figures.
    pub fn new(size: usize, capacity: usize, ttl: Duration) -> Self {
        Self {
            size,
            capacity,
            usage_percent: percentage(size as u64, capacity as u64),
            ttl_ms: u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Returns the configured TTL.
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }
}

/// `part / whole * 100`, defined as 0 when `whole` is 0.
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
