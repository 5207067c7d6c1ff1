//! Cache Module
//!
//! Provides a bounded in-memory cache with least-recently-used eviction.

mod lru;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use lru::{Iter as RecencyIter, RecencyList, SlotIndex};
pub use shared::SharedCache;
pub use stats::CacheStats;
pub use store::LruCache;
