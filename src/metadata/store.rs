//! Namespaced Metadata Cache
//!
//! Four independently sized bounded caches behind typed accessors, each with
//! its own lock and cumulative hit/miss counters.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use crate::cache::BoundedExpiringCache;
use crate::config::{Config, NamespaceConfig};
use crate::error::Result;
use crate::metadata::{HitCounter, MetadataCacheStats, Namespace, NamespaceStats};
use crate::models::{FileStats, FileTypeInfo, OcrResult, SyntaxConfig};

// == Namespace Slot ==
/// One namespace: its cache behind a dedicated lock, plus counters.
#[derive(Debug)]
struct NamespaceSlot<V> {
    namespace: Namespace,
    cache: Mutex<BoundedExpiringCache<V>>,
    counter: HitCounter,
}

impl<V: Clone> NamespaceSlot<V> {
    fn new(namespace: Namespace, config: NamespaceConfig) -> Result<Self> {
        config.validate(namespace)?;
        debug!(
            namespace = %namespace,
            capacity = config.capacity,
            ttl_secs = config.ttl.as_secs(),
            "namespace cache initialized"
        );
        Ok(Self::from_valid(namespace, config))
    }

    /// For configurations already known to be valid.
    fn from_valid(namespace: Namespace, config: NamespaceConfig) -> Self {
        Self {
            namespace,
            cache: Mutex::new(BoundedExpiringCache::new(config.capacity, config.ttl)),
            counter: HitCounter::new(),
        }
    }

    /// Cache operations cannot leave the cache half-updated on panic, so a
    /// poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, BoundedExpiringCache<V>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn get(&self, key: &str) -> Option<V> {
        let value = self.lock().get(key);
        self.counter.record(value.is_some());
        value
    }

    fn set(&self, key: String, value: V) {
        self.lock().set(key, value);
    }

    fn has(&self, key: &str) -> bool {
        self.lock().has(key)
    }

    fn delete(&self, key: &str) -> bool {
        self.lock().delete(key)
    }

    fn clear(&self) {
        self.lock().clear();
    }

    fn purge_expired(&self) -> usize {
        self.lock().purge_expired()
    }

    fn stats(&self) -> NamespaceStats {
        let cache = self.lock().stats();
        NamespaceStats::new(
            self.namespace,
            cache,
            self.counter.hits(),
            self.counter.misses(),
        )
    }
}

// == Namespaced Metadata Cache ==
/// Process-wide cache of derived file metadata.
///
/// Built once at startup and shared as `Arc<NamespacedMetadataCache>`. Keys
/// never collide across namespaces. `get_*` accessors record a hit or a
/// miss; `set_*`, `has_*` and `delete_*` leave the counters alone.
#[derive(Debug)]
pub struct NamespacedMetadataCache {
    file_types: NamespaceSlot<FileTypeInfo>,
    file_stats: NamespaceSlot<FileStats>,
    syntax_configs: NamespaceSlot<SyntaxConfig>,
    ocr_results: NamespaceSlot<OcrResult>,
}

impl NamespacedMetadataCache {
    // == Constructor ==
    /// Builds the cache, failing fast on a zero capacity or TTL.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            file_types: NamespaceSlot::new(Namespace::FileType, config.file_type)?,
            file_stats: NamespaceSlot::new(Namespace::FileStat, config.file_stat)?,
            syntax_configs: NamespaceSlot::new(Namespace::SyntaxConfig, config.syntax_config)?,
            ocr_results: NamespaceSlot::new(Namespace::OcrResult, config.ocr_result)?,
        })
    }

    /// Builds the cache with the built-in namespace table.
    pub fn with_defaults() -> Self {
        let config = Config::default();
        Self {
            file_types: NamespaceSlot::from_valid(Namespace::FileType, config.file_type),
            file_stats: NamespaceSlot::from_valid(Namespace::FileStat, config.file_stat),
            syntax_configs: NamespaceSlot::from_valid(Namespace::SyntaxConfig, config.syntax_config),
            ocr_results: NamespaceSlot::from_valid(Namespace::OcrResult, config.ocr_result),
        }
    }

    // == File Type ==
    pub fn get_file_type(&self, path: &str) -> Option<FileTypeInfo> {
        self.file_types.get(path)
    }

    pub fn set_file_type(&self, path: impl Into<String>, info: FileTypeInfo) {
        self.file_types.set(path.into(), info);
    }

    pub fn has_file_type(&self, path: &str) -> bool {
        self.file_types.has(path)
    }

    pub fn delete_file_type(&self, path: &str) -> bool {
        self.file_types.delete(path)
    }

    // == File Stats ==
    pub fn get_file_stats(&self, path: &str) -> Option<FileStats> {
        self.file_stats.get(path)
    }

    pub fn set_file_stats(&self, path: impl Into<String>, stats: FileStats) {
        self.file_stats.set(path.into(), stats);
    }

    pub fn has_file_stats(&self, path: &str) -> bool {
        self.file_stats.has(path)
    }

    pub fn delete_file_stats(&self, path: &str) -> bool {
        self.file_stats.delete(path)
    }

    // == Syntax Config ==
    pub fn get_syntax_config(&self, language: &str) -> Option<SyntaxConfig> {
        self.syntax_configs.get(language)
    }

    pub fn set_syntax_config(&self, language: impl Into<String>, config: SyntaxConfig) {
        self.syntax_configs.set(language.into(), config);
    }

    pub fn has_syntax_config(&self, language: &str) -> bool {
        self.syntax_configs.has(language)
    }

    pub fn delete_syntax_config(&self, language: &str) -> bool {
        self.syntax_configs.delete(language)
    }

    // == OCR Result ==
    pub fn get_ocr_result(&self, image_hash: &str) -> Option<OcrResult> {
        self.ocr_results.get(image_hash)
    }

    pub fn set_ocr_result(&self, image_hash: impl Into<String>, result: OcrResult) {
        self.ocr_results.set(image_hash.into(), result);
    }

    pub fn has_ocr_result(&self, image_hash: &str) -> bool {
        self.ocr_results.has(image_hash)
    }

    pub fn delete_ocr_result(&self, image_hash: &str) -> bool {
        self.ocr_results.delete(image_hash)
    }

    // == Clear ==
    /// Empties one namespace. Its counters are kept.
    pub fn clear(&self, namespace: Namespace) {
        match namespace {
            Namespace::FileType => self.file_types.clear(),
            Namespace::FileStat => self.file_stats.clear(),
            Namespace::SyntaxConfig => self.syntax_configs.clear(),
            Namespace::OcrResult => self.ocr_results.clear(),
        }
        info!(namespace = %namespace, "cleared namespace");
    }

    /// Empties every namespace. Counters are kept.
    pub fn clear_all(&self) {
        self.file_types.clear();
        self.file_stats.clear();
        self.syntax_configs.clear();
        self.ocr_results.clear();
        info!("cleared all metadata caches");
    }

    // == Purge Expired ==
    /// Drops expired entries from every namespace and returns the total.
    pub fn purge_expired(&self) -> usize {
        let removed = self.file_types.purge_expired()
            + self.file_stats.purge_expired()
            + self.syntax_configs.purge_expired()
            + self.ocr_results.purge_expired();
        debug!(removed, "purged expired metadata entries");
        removed
    }

    // == Stats ==
    /// Snapshot of every namespace.
    pub fn stats(&self) -> MetadataCacheStats {
        MetadataCacheStats {
            file_type: self.file_types.stats(),
            file_stat: self.file_stats.stats(),
            syntax_config: self.syntax_configs.stats(),
            ocr_result: self.ocr_results.stats(),
        }
    }

    /// Snapshot of a single namespace.
    pub fn stats_for(&self, namespace: Namespace) -> NamespaceStats {
        match namespace {
            Namespace::FileType => self.file_types.stats(),
            Namespace::FileStat => self.file_stats.stats(),
            Namespace::SyntaxConfig => self.syntax_configs.stats(),
            Namespace::OcrResult => self.ocr_results.stats(),
        }
    }
}

impl Default for NamespacedMetadataCache {
    fn default() -> Self {
        Self::with_defaults()
    }
}
