//! LRU Cache Module
//!
//! Main cache engine combining HashMap lookup with an arena-backed recency list.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use tracing::debug;

use crate::cache::lru::{RecencyList, SlotIndex};
use crate::cache::CacheStats;
use crate::error::{CacheError, Result};

/// Upper bound on slots reserved up front, so huge capacities don't allocate eagerly.
const MAX_PREALLOCATED: usize = 4096;

// == LRU Cache ==
/// Fixed-capacity key-value store with least-recently-used eviction.
///
/// `get` and `put` run in O(1): the map resolves a key to its slot in the
/// recency list, and the list moves or evicts nodes without scanning.
///
/// Invariants after every call:
/// - `len() <= capacity()`
/// - each resident key appears exactly once in the recency order
/// - any key touched by `get` or `put` is the most recently used
#[derive(Debug)]
pub struct LruCache<K, V> {
    /// Key -> slot in `recency`
    index: HashMap<K, SlotIndex>,
    /// Entries ordered by last access
    recency: RecencyList<K, V>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of resident entries
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns `CacheError::InvalidCapacity` when `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity(capacity));
        }

        let reserved = capacity.min(MAX_PREALLOCATED);
        Ok(Self {
            index: HashMap::with_capacity(reserved),
            recency: RecencyList::with_capacity(reserved),
            stats: CacheStats::new(),
            capacity,
        })
    }

    // == Get ==
    /// Retrieves a value and marks its key as most recently used.
    ///
    /// Returns `None` on a miss. Both outcomes are counted in the stats.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.index.get(key) {
            Some(&idx) => {
                self.stats.record_hit();
                self.recency.move_to_front(idx);
                Some(self.recency.value(idx))
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Put ==
    /// Stores a key-value pair as the most recently used entry.
    ///
    /// An existing key has its value replaced in place. A new key arriving
    /// while the cache is full first evicts the least recently used entry.
    pub fn put(&mut self, key: K, value: V) {
        if let Some(&idx) = self.index.get(&key) {
            *self.recency.value_mut(idx) = value;
            self.recency.move_to_front(idx);
            return;
        }

        if self.index.len() >= self.capacity {
            if let Some((evicted, _)) = self.recency.pop_back() {
                self.index.remove(&evicted);
                self.stats.record_eviction();
                debug!(
                    capacity = self.capacity,
                    "evicted least recently used entry"
                );
            }
        }

        let idx = self.recency.push_front(key.clone(), value);
        self.index.insert(key, idx);
    }

    // == Peek ==
    /// Reads a value without promoting it or touching the stats.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&idx| self.recency.value(idx))
    }

    /// Checks residency without promoting the key.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    // == Remove ==
    /// Removes an entry, returning its value if it was resident.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.index.remove(key)?;
        let (_, value) = self.recency.remove(idx);
        Some(value)
    }
}

impl<K, V> LruCache<K, V> {
    /// Resident keys from most to least recently used.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.recency.iter().map(|(key, _)| key)
    }

    /// The next key `put` would evict, if the cache were full.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.recency.back()
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.recency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recency.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slots left before the next insert of a new key evicts.
    pub fn remaining_capacity(&self) -> usize {
        self.capacity - self.len()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.len());
        stats
    }

    // == Describe ==
    /// Human-readable summary of capacity and free slots.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl<K, V> fmt::Display for LruCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "IoT LRU Cache")?;
        writeln!(f, "-----------------")?;
        writeln!(f, "capacity: {}", self.capacity)?;
        write!(f, "remaining capacity: {}", self.remaining_capacity())
    }
}
