//! Error types for the metadata cache
//!
//! Provides unified error handling using thiserror. A cache miss is never an
//! error; the only failures are misconfiguration and diagnostics lookups.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the metadata cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Capacity or TTL configuration is zero, negative or unparseable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Namespace name did not match any known namespace
    #[error("Unknown namespace: {0}")]
    UnknownNamespace(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::InvalidConfig(_) => StatusCode::BAD_REQUEST,
            CacheError::UnknownNamespace(_) => StatusCode::NOT_FOUND,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the metadata cache.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CacheError::InvalidConfig("capacity must be greater than zero".into());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: capacity must be greater than zero"
        );

        let err = CacheError::UnknownNamespace("thumbnails".into());
        assert_eq!(err.to_string(), "Unknown namespace: thumbnails");
    }

    #[test]
    fn test_error_status_codes() {
        let cases = [
            (CacheError::InvalidConfig("x".into()), StatusCode::BAD_REQUEST),
            (CacheError::UnknownNamespace("x".into()), StatusCode::NOT_FOUND),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }
}
