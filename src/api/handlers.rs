//! API Handlers
//!
//! HTTP request handlers for the diagnostics endpoints. None of them read or
//! write cached values; they only report on and reset the caches.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::Result;
use crate::metadata::{Namespace, NamespaceStats, NamespacedMetadataCache};
use crate::models::{ClearResponse, HealthResponse, StatsResponse};

/// Application state shared across all handlers.
///
/// The metadata cache locks each namespace internally, so the state only
/// needs an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<NamespacedMetadataCache>,
}

impl AppState {
    /// Creates a new AppState around an existing cache handle.
    pub fn new(cache: Arc<NamespacedMetadataCache>) -> Self {
        Self { cache }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Result<Self> {
        let cache = NamespacedMetadataCache::new(config)?;
        Ok(Self::new(Arc::new(cache)))
    }
}

/// Handler for GET /stats
///
/// Returns snapshots of every namespace.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::new(state.cache.stats()))
}

/// Handler for GET /stats/:namespace
pub async fn namespace_stats_handler(
    State(state): State<AppState>,
    Path(namespace): Path<String>,
) -> Result<Json<NamespaceStats>> {
    let namespace: Namespace = namespace.parse()?;
    Ok(Json(state.cache.stats_for(namespace)))
}

/// Handler for DELETE /cache
///
/// Empties every namespace. Hit/miss counters are kept.
pub async fn clear_all_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    state.cache.clear_all();
    Json(ClearResponse::new(Namespace::ALL.to_vec()))
}

/// Handler for DELETE /cache/:namespace
pub async fn clear_namespace_handler(
    State(state): State<AppState>,
    Path(namespace): Path<String>,
) -> Result<Json<ClearResponse>> {
    let namespace: Namespace = namespace.parse()?;
    state.cache.clear(namespace);
    Ok(Json(ClearResponse::new(vec![namespace])))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
