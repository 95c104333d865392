//! API Routes
//!
//! Configures the Axum router with the diagnostics endpoints.

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_all_handler, clear_namespace_handler, health_handler, namespace_stats_handler,
    stats_handler, AppState,
};

/// Creates the diagnostics router.
///
/// # Endpoints
/// - `GET /stats` - Snapshots of every namespace
/// - `GET /stats/:namespace` - Snapshot of one namespace
/// - `DELETE /cache` - Clear every namespace
/// - `DELETE /cache/:namespace` - Clear one namespace
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/stats", get(stats_handler))
        .route("/stats/:namespace", get(namespace_stats_handler))
        .route("/cache", delete(clear_all_handler))
        .route("/cache/:namespace", delete(clear_namespace_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
