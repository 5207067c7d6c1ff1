//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use crate::cache::SharedCache;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    DeleteResponse, GetResponse, HealthResponse, PutRequest, PutResponse, StatsResponse,
};

/// Application state shared across all handlers.
///
/// Cloning is cheap: every clone points at the same cache.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache handle
    pub cache: SharedCache<String, String>,
}

impl AppState {
    /// Creates a new AppState with the given cache handle.
    pub fn new(cache: SharedCache<String, String>) -> Self {
        Self { cache }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Fails if the configured capacity is 0.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(SharedCache::new(config.capacity)?))
    }
}

/// Handler for PUT /put
///
/// Stores a key-value pair, evicting the least recently used entry if full.
pub async fn put_handler(
    State(state): State<AppState>,
    Json(req): Json<PutRequest>,
) -> Result<Json<PutResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    state.cache.put(req.key.clone(), req.value);

    Ok(Json(PutResponse::new(req.key)))
}

/// Handler for GET /get/:key
///
/// A hit also promotes the key to most recently used.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    match state.cache.get(key.as_str()) {
        Some(value) => Ok(Json(GetResponse::new(key, value))),
        None => {
            debug!(%key, "cache miss");
            Err(CacheError::NotFound(key))
        }
    }
}

/// Handler for DELETE /del/:key
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<DeleteResponse>> {
    match state.cache.remove(key.as_str()) {
        Some(_) => Ok(Json(DeleteResponse::new(key))),
        None => Err(CacheError::NotFound(key)),
    }
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.stats();
    Json(StatsResponse::new(&stats, state.cache.capacity()))
}

/// Handler for GET /describe
///
/// Plain-text capacity summary.
pub async fn describe_handler(State(state): State<AppState>) -> String {
    state.cache.describe()
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
