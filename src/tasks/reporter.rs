//! Stats Reporter Task
//!
//! Background task that periodically logs per-namespace cache efficacy.
//! It only reads statistics; expired entries are still purged lazily by
//! the lookups that find them.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::info;

use crate::metadata::{MetadataCacheStats, NamespacedMetadataCache};

/// Spawns a background task that logs a stats snapshot every interval.
///
/// # Arguments
/// * `cache` - shared handle to the metadata cache
/// * `interval_secs` - seconds between reports; must be non-zero
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(NamespacedMetadataCache::with_defaults());
/// let reporter = spawn_stats_reporter(cache.clone(), 60);
/// // Later, during shutdown:
/// reporter.abort();
/// ```
pub fn spawn_stats_reporter(
    cache: Arc<NamespacedMetadataCache>,
    interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting stats reporter with interval of {} seconds",
            interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;
            report(&cache.stats());
        }
    })
}

/// Logs one line per namespace.
pub fn report(stats: &MetadataCacheStats) {
    for ns in stats.iter() {
        info!(
            namespace = %ns.namespace,
            size = ns.cache.size,
            capacity = ns.cache.capacity,
            usage_percent = ns.cache.usage_percent,
            hits = ns.hits,
            misses = ns.misses,
            hit_rate_percent = ns.hit_rate_percent,
            "metadata cache stats"
        );
    }
}
