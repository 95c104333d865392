//! API Module
//!
//! HTTP handlers and routing for the diagnostics endpoint.
//!
//! # Endpoints
//! - `GET /stats` - Snapshots of every namespace
//! - `GET /stats/:namespace` - Snapshot of one namespace
//! - `DELETE /cache` - Clear every namespace
//! - `DELETE /cache/:namespace` - Clear one namespace
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
