//! Shared Cache Handle
//!
//! Thread-safe wrapper that lets several owners use one `LruCache`.

use std::borrow::Borrow;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::cache::{CacheStats, LruCache};
use crate::error::Result;

// == Shared Cache ==
/// Cloneable handle to an `LruCache` behind a single exclusive lock.
///
/// Every call holds the lock for its full duration, so the key index and the
/// recency order are always observed in step. Reads take the same lock as
/// writes because `get` reorders entries.
#[derive(Debug)]
pub struct SharedCache<K, V> {
    inner: Arc<Mutex<LruCache<K, V>>>,
}

impl<K, V> Clone for SharedCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> SharedCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Creates a shared cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self::from_cache(LruCache::new(capacity)?))
    }

    /// Wraps an existing cache.
    pub fn from_cache(cache: LruCache<K, V>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    /// Returns a copy of the value and promotes its key.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    pub fn put(&self, key: K, value: V) {
        self.inner.lock().put(key, value);
    }

    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().remove(key)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().contains(key)
    }
}

impl<K, V> SharedCache<K, V> {
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }

    pub fn describe(&self) -> String {
        self.inner.lock().describe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_shared_clones_see_same_entries() {
        let cache = SharedCache::new(10).unwrap();
        let other = cache.clone();

        cache.put("key".to_string(), "value".to_string());

        assert_eq!(other.get("key"), Some("value".to_string()));
        assert_eq!(other.len(), 1);
    }

    #[test]
    fn test_shared_rejects_zero_capacity() {
        assert!(SharedCache::<u32, u32>::new(0).is_err());
    }

    #[test]
    fn test_shared_remove_and_contains() {
        let cache = SharedCache::new(2).unwrap();

        cache.put(1, "a");
        assert!(cache.contains(&1));
        assert_eq!(cache.remove(&1), Some("a"));
        assert!(!cache.contains(&1));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_shared_concurrent_puts_respect_capacity() {
        let cache = SharedCache::new(16).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let cache = cache.clone();
                thread::spawn(move || {
                    for i in 0..500u32 {
                        cache.put(worker * 1000 + i, i);
                        let _ = cache.get(&(worker * 1000 + i / 2));
                        assert!(cache.len() <= 16);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let stats = cache.stats();
        assert_eq!(stats.total_entries, 16);
        assert_eq!(stats.evictions, 8 * 500 - 16);
        assert_eq!(stats.hits + stats.misses, 8 * 500);
    }

    #[test]
    fn test_shared_describe() {
        let cache: SharedCache<u8, u8> = SharedCache::new(3).unwrap();
        assert!(cache.describe().contains("remaining capacity: 3"));
        assert_eq!(cache.capacity(), 3);
    }
}
