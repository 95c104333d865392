//! Data models for the metadata cache
//!
//! Cached value types, plus the DTOs serialized by the diagnostics API.

pub mod responses;
pub mod values;

// Re-export commonly used types
pub use responses::{ClearResponse, ErrorResponse, HealthResponse, StatsResponse};
pub use values::{FileStats, FileTypeInfo, OcrResult, SyntaxConfig};
