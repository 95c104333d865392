//! Hit/miss accounting and reporting snapshots for the metadata cache.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::cache::{percentage, CacheStats};
use crate::metadata::Namespace;

// == Hit Counter ==
/// Cumulative hit/miss counters for one namespace.
///
/// Counters measure lifetime efficacy and are never reset by clearing the
/// cache they describe.
#[derive(Debug, Default)]
pub struct HitCounter {
    hits: AtomicU64,
    misses: AtomicU64,
}

impl HitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of a lookup.
    pub fn record(&self, hit: bool) {
        if hit {
            self.record_hit();
        } else {
            self.record_miss();
        }
    }

    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }
}

// == Namespace Stats ==
/// Occupancy and efficacy of a single namespace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamespaceStats {
    pub namespace: Namespace,
    #[serde(flatten)]
    pub cache: CacheStats,
    pub hits: u64,
    pub misses: u64,
    /// hits / (hits + misses) * 100, or 0 before any lookup
    pub hit_rate_percent: f64,
}

impl NamespaceStats {
    pub fn new(namespace: Namespace, cache: CacheStats, hits: u64, misses: u64) -> Self {
        Self {
            namespace,
            cache,
            hits,
            misses,
            hit_rate_percent: percentage(hits, hits + misses),
        }
    }

    /// Total number of lookups recorded.
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }
}

// == Metadata Cache Stats ==
/// Snapshot of every namespace, as handed to diagnostics reporters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct MetadataCacheStats {
    pub file_type: NamespaceStats,
    pub file_stat: NamespaceStats,
    pub syntax_config: NamespaceStats,
    pub ocr_result: NamespaceStats,
}

impl MetadataCacheStats {
    pub fn get(&self, namespace: Namespace) -> &NamespaceStats {
        match namespace {
            Namespace::FileType => &self.file_type,
            Namespace::FileStat => &self.file_stat,
            Namespace::SyntaxConfig => &self.syntax_config,
            Namespace::OcrResult => &self.ocr_result,
        }
    }

    /// Iterates namespaces in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = &NamespaceStats> {
        Namespace::ALL.into_iter().map(move |ns| self.get(ns))
    }
}
