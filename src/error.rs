//! Error types for the cache and its HTTP front end
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache crate.
///
/// A cache miss is not an error: `LruCache::get` returns `None`. `NotFound`
/// only exists so the HTTP layer can render a miss as a 404.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Capacity must be at least 1
    #[error("Invalid capacity: {0} (capacity must be at least 1)")]
    InvalidCapacity(usize),

    /// Key not resident in the cache
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::InvalidCapacity(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache crate.
pub type Result<T> = std::result::Result<T, CacheError>;
