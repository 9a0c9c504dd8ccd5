//! Memo tables keyed by argument lists.
//!
//! Entries live in `im` persistent collections, so [`MemoCache::snapshot`] is
//! O(1) and a snapshot never observes later inserts.

use std::sync::atomic::{AtomicU64, Ordering};

use bindery_foundation::{Result, Value};

use crate::config::CacheConfig;
use crate::key::{CompositeKey, normalize};

/// Hit, miss, and eviction counts for a cache.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups that found an entry.
    pub hits: u64,
    /// Lookups that found nothing.
    pub misses: u64,
    /// Entries dropped to stay within the entry limit.
    pub evictions: u64,
}

/// Memo table from argument lists to computed values.
///
/// Argument lists are turned into keys with [`normalize`]. When the entry
/// limit is exceeded the oldest entries are evicted first.
pub struct MemoCache<V: Clone> {
    config: CacheConfig,
    entries: im::HashMap<CompositeKey, V>,
    /// Keys in insertion order, oldest first.
    order: im::Vector<CompositeKey>,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: u64,
}

impl<V: Clone> MemoCache<V> {
    /// Creates an empty cache.
    #[must_use]
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config,
            entries: im::HashMap::new(),
            order: im::Vector::new(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: 0,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Looks up the value memoized for `args`.
    #[must_use]
    pub fn get(&self, args: &[Value]) -> Option<V> {
        self.get_key(&CompositeKey::from_slice(args))
    }

    /// Looks up the value memoized under a prebuilt key.
    #[must_use]
    pub fn get_key(&self, key: &CompositeKey) -> Option<V> {
        let found = self.entries.get(key).cloned();
        if found.is_some() {
            tracing::trace!(?key, "memo hit");
            self.count(&self.hits);
        } else {
            tracing::trace!(?key, "memo miss");
            self.count(&self.misses);
        }
        found
    }

    /// Memoizes `value` for `args`, returning the previous value if any.
    pub fn insert(&mut self, args: Vec<Value>, value: V) -> Option<V> {
        self.insert_key(normalize(args), value)
    }

    /// Memoizes `value` under a prebuilt key, returning the previous value if any.
    pub fn insert_key(&mut self, key: CompositeKey, value: V) -> Option<V> {
        let previous = self.entries.insert(key.clone(), value);
        if previous.is_none() {
            self.order.push_back(key);
            self.evict();
        }
        previous
    }

    /// Returns the value for `args`, computing and memoizing it on a miss.
    pub fn get_or_insert_with<F>(&mut self, args: Vec<Value>, compute: F) -> V
    where
        F: FnOnce() -> V,
    {
        let key = normalize(args);
        if let Some(value) = self.get_key(&key) {
            return value;
        }
        let value = compute();
        self.insert_key(key, value.clone());
        value
    }

    /// Like [`get_or_insert_with`](Self::get_or_insert_with) for fallible
    /// computations. Errors are returned as is and nothing is memoized.
    ///
    /// # Errors
    ///
    /// Returns whatever error `compute` returns.
    pub fn try_get_or_insert_with<F>(&mut self, args: Vec<Value>, compute: F) -> Result<V>
    where
        F: FnOnce() -> Result<V>,
    {
        let key = normalize(args);
        if let Some(value) = self.get_key(&key) {
            return Ok(value);
        }
        let value = compute()?;
        self.insert_key(key, value.clone());
        Ok(value)
    }

    /// Removes the value memoized for `args`.
    ///
    /// This also drops the key from the eviction queue, which is a linear scan
    /// over the current entries.
    pub fn remove(&mut self, args: &[Value]) -> Option<V> {
        let key = CompositeKey::from_slice(args);
        let removed = self.entries.remove(&key);
        if removed.is_some() {
            self.order.retain(|k| *k != key);
        }
        removed
    }

    /// Removes every entry. Statistics are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if a value is memoized for `args`. Not counted as a lookup.
    #[must_use]
    pub fn contains(&self, args: &[Value]) -> bool {
        self.entries.contains_key(&CompositeKey::from_slice(args))
    }

    /// Returns the current statistics.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions,
        }
    }

    /// Returns an independent copy of the cache in O(1).
    #[must_use]
    pub fn snapshot(&self) -> Self {
        Self {
            config: self.config.clone(),
            entries: self.entries.clone(),
            order: self.order.clone(),
            hits: AtomicU64::new(self.hits.load(Ordering::Relaxed)),
            misses: AtomicU64::new(self.misses.load(Ordering::Relaxed)),
            evictions: self.evictions,
        }
    }

    fn count(&self, counter: &AtomicU64) {
        if self.config.track_stats {
            counter.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn evict(&mut self) {
        let Some(max) = self.config.max_entries else {
            return;
        };
        while self.entries.len() > max {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            if self.entries.remove(&oldest).is_some() {
                tracing::debug!(key = ?oldest, max, "evicted memo entry");
                self.evictions += 1;
            }
        }
    }
}

impl<V: Clone> Default for MemoCache<V> {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

impl<V: Clone> Clone for MemoCache<V> {
    fn clone(&self) -> Self {
        self.snapshot()
    }
}

impl<V: Clone> std::fmt::Debug for MemoCache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoCache")
            .field("config", &self.config)
            .field("len", &self.entries.len())
            .field("stats", &self.stats())
            .finish()
    }
}
