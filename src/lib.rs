//! IoT LRU Cache - A bounded least-recently-used cache
//!
//! `LruCache` is the single-threaded core with O(1) `get`/`put`;
//! `SharedCache` wraps it for concurrent owners, and the `api` module serves
//! one over HTTP.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::{CacheStats, LruCache, SharedCache};
pub use config::Config;
pub use error::{CacheError, Result};
