//! Response DTOs for the diagnostics API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::metadata::{MetadataCacheStats, Namespace};

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Per-namespace snapshots
    pub namespaces: MetadataCacheStats,
    /// Lookups across all namespaces
    pub total_hits: u64,
    pub total_misses: u64,
    /// Snapshot time in ISO 8601 format
    pub timestamp: String,
}

impl StatsResponse {
    /// Creates a new StatsResponse from a cache snapshot
    pub fn new(namespaces: MetadataCacheStats) -> Self {
        let total_hits = namespaces.iter().map(|ns| ns.hits).sum();
        let total_misses = namespaces.iter().map(|ns| ns.misses).sum();
        Self {
            namespaces,
            total_hits,
            total_misses,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Response body for the clear endpoints (DELETE /cache, DELETE /cache/:namespace)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Success message
    pub message: String,
    /// Namespaces that were emptied
    pub cleared: Vec<Namespace>,
}

impl ClearResponse {
    /// Creates a new ClearResponse
    pub fn new(cleared: Vec<Namespace>) -> Self {
        let names: Vec<&str> = cleared.iter().map(|ns| ns.as_str()).collect();
        Self {
            message: format!("Cleared {}", names.join(", ")),
            cleared,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
