//! Metadata Cache - bounded, expiring caches for derived file metadata
//!
//! Provides a fixed-capacity cache with TTL expiration and LRU eviction, and
//! a namespaced metadata cache built from four of them with per-namespace
//! hit/miss statistics.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod metadata;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::BoundedExpiringCache;
pub use config::Config;
pub use error::{CacheError, Result};
pub use metadata::{Namespace, NamespacedMetadataCache};
pub use tasks::spawn_stats_reporter;
