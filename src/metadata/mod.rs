//! Metadata Module
//!
//! Namespaced cache of derived file metadata built on the bounded cache.

mod namespace;
mod stats;
mod store;

pub use namespace::Namespace;
pub use stats::{HitCounter, MetadataCacheStats, NamespaceStats};
pub use store::NamespacedMetadataCache;
