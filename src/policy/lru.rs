//! # Recency-Ordered (LRU) Cache
//!
//! A fixed-capacity key/value cache that evicts the least recently used entry
//! when a new key arrives at capacity. Every hit and every write promotes the
//! touched entry to most-recent.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                       OrderedCache<K, V>                             │
//!   │                                                                      │
//!   │   ┌──────────────────────────────────────────────────────────────┐   │
//!   │   │  FxHashMap<K, SlotId>                                        │   │
//!   │   │                                                              │   │
//!   │   │  ┌─────────┬──────────────────────────────────────────┐      │   │
//!   │   │  │   Key   │  SlotId                                  │      │   │
//!   │   │  ├─────────┼──────────────────────────────────────────┤      │   │
//!   │   │  │  "a"    │  ──────────────────────────────────────┐ │      │   │
//!   │   │  │  "b"    │  ────────────────────────────────┐     │ │      │   │
//!   │   │  │  "c"    │  ──────────────────────────┐     │     │ │      │   │
//!   │   │  └─────────┴────────────────────────────┼─────┼─────┼─┘      │   │
//!   │   └─────────────────────────────────────────┼─────┼─────┼────────┘   │
//!   │                                             │     │     │            │
//!   │   ┌─────────────────────────────────────────┼─────┼─────┼────────┐   │
//!   │   │  RecencyList<Entry<K, V>>               ▼     ▼     ▼        │   │
//!   │   │                                                              │   │
//!   │   │  head ──► ┌───────┐ ◄──► ┌───────┐ ◄──► ┌───────┐ ◄── tail   │   │
//!   │   │    (MRU)  │ c: 3  │      │ b: 2  │      │ a: 1  │   (LRU)    │   │
//!   │   │           └───────┘      └───────┘      └───────┘            │   │
//!   │   │                                                              │   │
//!   │   │  nodes live in a SlotArena; prev/next are SlotIds            │   │
//!   │   └──────────────────────────────────────────────────────────────┘   │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Components
//!
//! | Component                    | Description                                  |
//! |------------------------------|----------------------------------------------|
//! | `OrderedCache<K, V>`         | Single-threaded cache: index + recency list  |
//! | `ConcurrentOrderedCache`     | `parking_lot::RwLock` wrapper (`concurrency`) |
//! | `Entry<K, V>`                | List payload: owned key and value            |
//! | `RecencyList`                | Arena-backed list, MRU at head               |
//!
//! ## Operations Flow
//!
//! ```text
//!   PUT new key (cache full)
//!   ═══════════════════════════════════════════════════════════════════════
//!
//!   Before:
//!     head ──► [A] ◄──► [B] ◄──► [C] ◄── tail    (capacity = 3)
//!
//!   put(D):
//!     1. Evict [C] from tail (one entry, before insertion)
//!     2. Link [D] at head
//!
//!   After:
//!     head ──► [D] ◄──► [A] ◄──► [B] ◄── tail
//!
//!   ═══════════════════════════════════════════════════════════════════════
//!
//!   GET existing key
//!   ═══════════════════════════════════════════════════════════════════════
//!
//!   get(B):
//!     1. Find B's SlotId in the index: O(1)
//!     2. Splice [B] to head: O(1)
//!
//!   After:
//!     head ──► [B] ◄──► [A] ◄──► [C] ◄── tail
//! ```
//!
//! ## Methods
//!
//! | Method           | Complexity | Recency effect            |
//! |------------------|------------|---------------------------|
//! | `get`            | O(1)       | hit becomes MRU           |
//! | `put`            | O(1)       | entry becomes MRU         |
//! | `peek`           | O(1)       | none                      |
//! | `contains`       | O(1)       | none                      |
//! | `touch`          | O(1)       | hit becomes MRU           |
//! | `remove`         | O(1)       | entry removed             |
//! | `pop_lru`        | O(1)       | tail removed              |
//! | `peek_lru`       | O(1)       | none                      |
//! | `recency_rank`   | O(n)       | none                      |
//! | `iter` / `keys`  | O(n)       | none                      |
//!
//! Overwriting an existing key never evicts. A zero capacity is rejected
//! with [`ConfigError`] rather than clamped.
//!
//! ## Example Usage
//!
//! ```
//! use boundkit::policy::lru::OrderedCache;
//!
//! let mut cache = OrderedCache::new(2).unwrap();
//! cache.put(1, "one");
//! cache.put(2, "two");
//! cache.put(3, "three");
//!
//! assert_eq!(cache.get(&1), None);
//! assert_eq!(cache.get(&2), Some(&"two"));
//!
//! cache.put(4, "four");
//! let keys: Vec<_> = cache.keys().copied().collect();
//! assert_eq!(keys, vec![4, 2]);
//! ```
//!
//! ## Thread Safety
//!
//! `OrderedCache` is not synchronized. With the `concurrency` feature,
//! [`ConcurrentOrderedCache`] wraps it in an `Arc<RwLock<_>>`. `get` takes
//! the write lock because it reorders; `peek` and `contains` share the read
//! lock.

use std::fmt;
use std::hash::Hash;

#[cfg(feature = "concurrency")]
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
#[cfg(feature = "concurrency")]
use std::sync::Arc;

use crate::ds::{RecencyList, SlotId};
use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::OrderedCacheMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::OrderedCacheMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    CoreMetricsRecorder, LruMetricsReadRecorder, LruMetricsRecorder, MetricsSnapshotProvider,
};
use crate::traits::{CoreCache, LruCacheTrait, MutableCache};

#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Fixed-capacity cache with least-recently-used eviction.
pub struct OrderedCache<K, V> {
    map: FxHashMap<K, SlotId>,
    list: RecencyList<Entry<K, V>>,
    capacity: usize,
    #[cfg(feature = "metrics")]
    metrics: OrderedCacheMetrics,
}

impl<K, V> OrderedCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `capacity` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use boundkit::policy::lru::OrderedCache;
    ///
    /// let cache: OrderedCache<u64, String> = OrderedCache::new(128).unwrap();
    /// assert_eq!(cache.capacity(), 128);
    /// assert!(OrderedCache::<u64, String>::new(0).is_err());
    /// ```
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        let capacity = ConfigError::require_positive("capacity", capacity)?;
        Ok(Self {
            map: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            list: RecencyList::with_capacity(capacity),
            capacity,
            #[cfg(feature = "metrics")]
            metrics: OrderedCacheMetrics::default(),
        })
    }

    /// Looks up `key`; a hit becomes the most recent entry.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let id = match self.map.get(key) {
            Some(&id) => id,
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_get_miss();
                return None;
            },
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.list.move_to_front(id);
        self.list.get(id).map(|entry| &entry.value)
    }

    /// Inserts or overwrites `key` and makes it the most recent entry.
    ///
    /// Returns the previous value when `key` was present. Inserting a new
    /// key into a full cache first evicts exactly one entry, the least
    /// recent.
    ///
    /// ```
    /// use boundkit::policy::lru::OrderedCache;
    ///
    /// let mut cache = OrderedCache::new(1).unwrap();
    /// assert_eq!(cache.put("k", 1), None);
    /// assert_eq!(cache.put("k", 2), Some(1));
    /// assert_eq!(cache.len(), 1);
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if let Some(&id) = self.map.get(&key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();

            self.list.move_to_front(id);
            return self
                .list
                .get_mut(id)
                .map(|entry| std::mem::replace(&mut entry.value, value));
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        if self.list.len() >= self.capacity {
            self.evict_lru();
        }

        let id = self.list.push_front(Entry {
            key: key.clone(),
            value,
        });
        self.map.insert(key, id);
        None
    }

    /// Looks up `key` without changing recency.
    pub fn peek(&self, key: &K) -> Option<&V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_peek_call();

        let value = self
            .map
            .get(key)
            .and_then(|&id| self.list.get(id))
            .map(|entry| &entry.value);

        #[cfg(feature = "metrics")]
        {
            if value.is_some() {
                self.metrics.record_peek_hit();
            }
        }

        value
    }

    /// Membership test; never changes recency.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Promotes `key` to most recent without reading it.
    pub fn touch(&mut self, key: &K) -> bool {
        #[cfg(feature = "metrics")]
        self.metrics.record_touch_call();

        let Some(&id) = self.map.get(key) else {
            return false;
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_touch_found();

        self.list.move_to_front(id)
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_call();

        let id = self.map.remove(key)?;

        #[cfg(feature = "metrics")]
        self.metrics.record_remove_found();

        self.list.remove(id).map(|entry| entry.value)
    }

    /// Removes and returns the least recent entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lru_call();

        let entry = self.list.pop_back()?;
        self.map.remove(&entry.key);

        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lru_found();

        Some((entry.key, entry.value))
    }

    /// Returns the least recent entry, the next eviction candidate.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_peek_lru_call();

        let entry = self.list.back()?;

        #[cfg(feature = "metrics")]
        self.metrics.record_peek_lru_found();

        Some((&entry.key, &entry.value))
    }

    /// Zero-based position of `key` in recency order, 0 being most recent.
    ///
    /// Walks the list from the head, so this is O(n).
    pub fn recency_rank(&self, key: &K) -> Option<usize> {
        #[cfg(feature = "metrics")]
        self.metrics.record_recency_rank_call();

        let &id = self.map.get(key)?;
        let rank = self.list.position(id)?;

        #[cfg(feature = "metrics")]
        {
            self.metrics.record_recency_rank_found();
            self.metrics.record_recency_rank_scan_steps(rank as u64 + 1);
        }

        Some(rank)
    }

    /// Iterates entries from most to least recent.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.list.iter().map(|entry| (&entry.key, &entry.value))
    }

    /// Iterates keys from most to least recent.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.list.iter().map(|entry| &entry.key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        self.map.clear();
        self.list.clear();
    }

    /// Checks that the index and the recency list describe the same entries.
    ///
    /// ```
    /// use boundkit::policy::lru::OrderedCache;
    ///
    /// let mut cache = OrderedCache::new(3).unwrap();
    /// cache.put('a', 1);
    /// cache.put('b', 2);
    /// cache.get(&'a');
    /// assert!(cache.check_invariants().is_ok());
    /// ```
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.list.validate()?;

        if self.list.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "cache holds {} entries, capacity is {}",
                self.list.len(),
                self.capacity
            )));
        }
        if self.map.len() != self.list.len() {
            return Err(InvariantError::new(format!(
                "index has {} keys but recency list has {} entries",
                self.map.len(),
                self.list.len()
            )));
        }
        for (id, entry) in self.list.iter_entries() {
            match self.map.get(&entry.key) {
                Some(&indexed) if indexed == id => {},
                Some(_) => {
                    return Err(InvariantError::new(format!(
                        "index points slot {} key elsewhere",
                        id.index()
                    )));
                },
                None => {
                    return Err(InvariantError::new(format!(
                        "slot {} holds a key missing from the index",
                        id.index()
                    )));
                },
            }
        }
        Ok(())
    }

    fn evict_lru(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_evict_call();

        if let Some(entry) = self.list.pop_back() {
            self.map.remove(&entry.key);

            #[cfg(feature = "metrics")]
            self.metrics.record_evicted_entry();
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, V> OrderedCache<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn metrics_snapshot(&self) -> OrderedCacheMetricsSnapshot {
        OrderedCacheMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            insert_calls: self.metrics.insert_calls,
            insert_updates: self.metrics.insert_updates,
            insert_new: self.metrics.insert_new,
            evict_calls: self.metrics.evict_calls,
            evicted_entries: self.metrics.evicted_entries,
            clears: self.metrics.clears,
            pop_lru_calls: self.metrics.pop_lru_calls,
            pop_lru_found: self.metrics.pop_lru_found,
            touch_calls: self.metrics.touch_calls,
            touch_found: self.metrics.touch_found,
            remove_calls: self.metrics.remove_calls,
            remove_found: self.metrics.remove_found,
            peek_calls: self.metrics.peek_calls.get(),
            peek_hits: self.metrics.peek_hits.get(),
            peek_lru_calls: self.metrics.peek_lru_calls.get(),
            peek_lru_found: self.metrics.peek_lru_found.get(),
            recency_rank_calls: self.metrics.recency_rank_calls.get(),
            recency_rank_found: self.metrics.recency_rank_found.get(),
            recency_rank_scan_steps: self.metrics.recency_rank_scan_steps.get(),
            cache_len: self.len(),
            capacity: self.capacity,
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsSnapshotProvider<OrderedCacheMetricsSnapshot> for OrderedCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn snapshot(&self) -> OrderedCacheMetricsSnapshot {
        self.metrics_snapshot()
    }
}

impl<K, V> fmt::Debug for OrderedCache<K, V>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedCache")
            .field("len", &self.list.len())
            .field("capacity", &self.capacity)
            .field("mru", &self.list.front().map(|entry| &entry.key))
            .field("lru", &self.list.back().map(|entry| &entry.key))
            .finish_non_exhaustive()
    }
}

impl<K, V> Extend<(K, V)> for OrderedCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K, V> CoreCache<K, V> for OrderedCache<K, V>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.put(key, value)
    }

    #[inline]
    fn get(&mut self, key: &K) -> Option<&V> {
        OrderedCache::get(self, key)
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        OrderedCache::contains(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        OrderedCache::len(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn clear(&mut self) {
        OrderedCache::clear(self);
    }
}

impl<K, V> MutableCache<K, V> for OrderedCache<K, V>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        OrderedCache::remove(self, key)
    }
}

impl<K, V> LruCacheTrait<K, V> for OrderedCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn pop_lru(&mut self) -> Option<(K, V)> {
        OrderedCache::pop_lru(self)
    }

    fn peek_lru(&self) -> Option<(&K, &V)> {
        OrderedCache::peek_lru(self)
    }

    fn touch(&mut self, key: &K) -> bool {
        OrderedCache::touch(self, key)
    }

    fn recency_rank(&self, key: &K) -> Option<usize> {
        OrderedCache::recency_rank(self, key)
    }
}

// ---------------------------------------------------------------------------
// ConcurrentOrderedCache
// ---------------------------------------------------------------------------

/// Thread-safe [`OrderedCache`] behind a `parking_lot::RwLock`.
///
/// Values are cloned out of the lock on reads. Cloning the handle shares the
/// same cache.
///
/// ```
/// use boundkit::policy::lru::ConcurrentOrderedCache;
///
/// let cache = ConcurrentOrderedCache::new(2).unwrap();
/// cache.put(1, "a".to_string());
/// cache.put(2, "b".to_string());
/// assert_eq!(cache.get(&1), Some("a".to_string()));
/// cache.put(3, "c".to_string());
/// assert!(!cache.contains(&2));
/// ```
#[cfg(feature = "concurrency")]
pub struct ConcurrentOrderedCache<K, V> {
    inner: Arc<RwLock<OrderedCache<K, V>>>,
}

#[cfg(feature = "concurrency")]
impl<K, V> Clone for ConcurrentOrderedCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> fmt::Debug for ConcurrentOrderedCache<K, V>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.inner.read();
        f.debug_struct("ConcurrentOrderedCache")
            .field("len", &cache.list.len())
            .field("capacity", &cache.capacity)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> ConcurrentOrderedCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Clone + Send + Sync,
{
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        Ok(Self::from_cache(OrderedCache::new(capacity)?))
    }

    /// Wraps an existing cache.
    pub fn from_cache(cache: OrderedCache<K, V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(cache)),
        }
    }

    pub fn put(&self, key: K, value: V) -> Option<V> {
        self.inner.write().put(key, value)
    }

    /// Clones the value out and promotes the entry. Takes the write lock.
    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.write().get(key).cloned()
    }

    /// Clones the value out without promoting. Takes the read lock.
    pub fn peek(&self, key: &K) -> Option<V> {
        self.inner.read().peek(key).cloned()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.read().contains(key)
    }

    pub fn touch(&self, key: &K) -> bool {
        self.inner.write().touch(key)
    }

    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.write().remove(key)
    }

    pub fn pop_lru(&self) -> Option<(K, V)> {
        self.inner.write().pop_lru()
    }

    pub fn peek_lru(&self) -> Option<(K, V)> {
        self.inner
            .read()
            .peek_lru()
            .map(|(key, value)| (key.clone(), value.clone()))
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.read().capacity()
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Keys from most to least recent, captured under one read lock.
    pub fn keys(&self) -> Vec<K> {
        self.inner.read().keys().cloned().collect()
    }

    /// Runs `f` with shared access to the cache.
    pub fn with_read<R>(&self, f: impl FnOnce(&OrderedCache<K, V>) -> R) -> R {
        f(&self.inner.read())
    }

    /// Runs `f` with exclusive access to the cache.
    pub fn with_write<R>(&self, f: impl FnOnce(&mut OrderedCache<K, V>) -> R) -> R {
        f(&mut self.inner.write())
    }

    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> OrderedCacheMetricsSnapshot {
        self.inner.read().metrics_snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys_of<K: Eq + Hash + Clone, V>(cache: &OrderedCache<K, V>) -> Vec<K> {
        cache.keys().cloned().collect()
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let err = OrderedCache::<u32, u32>::new(0).unwrap_err();
        assert!(err.to_string().contains("capacity"));
    }

    #[test]
    fn eviction_follows_recency() {
        let mut cache = OrderedCache::new(2).unwrap();
        cache.put(1, "a");
        cache.put(2, "b");
        cache.put(3, "c");
        assert_eq!(cache.get(&1), None);
        assert_eq!(cache.get(&2), Some(&"b"));
        assert_eq!(cache.get(&3), Some(&"c"));

        cache.get(&2);
        cache.put(4, "d");
        assert!(!cache.contains(&3), "key 3 was least recent");

        let mut keys = keys_of(&cache);
        keys.sort();
        assert_eq!(keys, vec![2, 4]);
        cache.check_invariants().unwrap();
    }

    #[test]
    fn overwrite_promotes_without_evicting() {
        let mut cache = OrderedCache::new(2).unwrap();
        cache.put("x", 1);
        cache.put("y", 2);
        assert_eq!(cache.put("x", 10), Some(1));
        assert_eq!(cache.len(), 2);
        assert_eq!(keys_of(&cache), vec!["x", "y"]);

        cache.put("z", 3);
        assert!(!cache.contains(&"y"));
        assert_eq!(cache.peek(&"x"), Some(&10));
    }

    #[test]
    fn capacity_one_keeps_latest_key() {
        let mut cache = OrderedCache::new(1).unwrap();
        cache.put(1, 'a');
        cache.put(2, 'b');
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&1), None);
        assert_eq!(cache.get(&2), Some(&'b'));
        cache.put(2, 'c');
        assert_eq!(cache.get(&2), Some(&'c'));
    }

    #[test]
    fn miss_leaves_order_unchanged() {
        let mut cache = OrderedCache::new(3).unwrap();
        cache.put(1, ());
        cache.put(2, ());
        let before = keys_of(&cache);
        assert_eq!(cache.get(&9), None);
        assert_eq!(keys_of(&cache), before);
    }

    #[test]
    fn repeated_get_is_idempotent_on_order() {
        let mut cache = OrderedCache::new(3).unwrap();
        cache.put(1, ());
        cache.put(2, ());
        cache.put(3, ());
        cache.get(&1);
        let once = keys_of(&cache);
        cache.get(&1);
        assert_eq!(keys_of(&cache), once);
        assert_eq!(once, vec![1, 3, 2]);
    }

    #[test]
    fn peek_and_contains_do_not_promote() {
        let mut cache = OrderedCache::new(2).unwrap();
        cache.put(1, "a");
        cache.put(2, "b");
        assert_eq!(cache.peek(&1), Some(&"a"));
        assert!(cache.contains(&1));
        cache.put(3, "c");
        assert!(!cache.contains(&1));
    }

    #[test]
    fn touch_promotes() {
        let mut cache = OrderedCache::new(2).unwrap();
        cache.put(1, "a");
        cache.put(2, "b");
        assert!(cache.touch(&1));
        assert!(!cache.touch(&7));
        cache.put(3, "c");
        assert!(cache.contains(&1));
        assert!(!cache.contains(&2));
    }

    #[test]
    fn remove_and_pop_lru() {
        let mut cache = OrderedCache::new(3).unwrap();
        cache.put(1, "a");
        cache.put(2, "b");
        cache.put(3, "c");

        assert_eq!(cache.remove(&2), Some("b"));
        assert_eq!(cache.remove(&2), None);
        assert_eq!(cache.peek_lru(), Some((&1, &"a")));
        assert_eq!(cache.pop_lru(), Some((1, "a")));
        assert_eq!(cache.pop_lru(), Some((3, "c")));
        assert_eq!(cache.pop_lru(), None);
        assert!(cache.is_empty());
        cache.check_invariants().unwrap();
    }

    #[test]
    fn recency_rank_reflects_access() {
        let mut cache = OrderedCache::new(3).unwrap();
        cache.put('a', 0);
        cache.put('b', 0);
        cache.put('c', 0);
        assert_eq!(cache.recency_rank(&'c'), Some(0));
        assert_eq!(cache.recency_rank(&'a'), Some(2));
        cache.get(&'a');
        assert_eq!(cache.recency_rank(&'a'), Some(0));
        assert_eq!(cache.recency_rank(&'z'), None);
    }

    #[test]
    fn iter_runs_mru_to_lru() {
        let mut cache = OrderedCache::new(3).unwrap();
        cache.extend([(1, 10), (2, 20), (3, 30)]);
        let pairs: Vec<_> = cache.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(pairs, vec![(3, 30), (2, 20), (1, 10)]);
    }

    #[test]
    fn clear_empties_and_cache_is_reusable() {
        let mut cache = OrderedCache::new(2).unwrap();
        cache.put(1, 1);
        cache.put(2, 2);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.peek_lru(), None);
        cache.put(3, 3);
        assert_eq!(cache.len(), 1);
        cache.check_invariants().unwrap();
    }

    #[test]
    fn trait_objects_route_to_inherent_methods() {
        fn fill<C: LruCacheTrait<u8, u8>>(cache: &mut C) -> Option<(u8, u8)> {
            cache.insert(1, 1);
            cache.insert(2, 2);
            cache.touch(&1);
            cache.pop_lru()
        }
        let mut cache = OrderedCache::new(4).unwrap();
        assert_eq!(fill(&mut cache), Some((2, 2)));
        assert_eq!(CoreCache::capacity(&cache), 4);
    }

    #[test]
    fn debug_shows_bounds() {
        let mut cache = OrderedCache::new(2).unwrap();
        cache.put("k", 1);
        let text = format!("{:?}", cache);
        assert!(text.contains("OrderedCache"));
        assert!(text.contains("capacity: 2"));
    }

    #[cfg(feature = "metrics")]
    #[test]
    fn metrics_count_hits_misses_and_evictions() {
        let mut cache = OrderedCache::new(1).unwrap();
        cache.put(1, ());
        cache.get(&1);
        cache.get(&2);
        cache.put(2, ());
        cache.peek(&2);
        cache.recency_rank(&2);

        let snap = cache.metrics_snapshot();
        assert_eq!(snap.get_hits, 1);
        assert_eq!(snap.get_misses, 1);
        assert_eq!(snap.insert_new, 2);
        assert_eq!(snap.evicted_entries, 1);
        assert_eq!(snap.peek_hits, 1);
        assert_eq!(snap.recency_rank_scan_steps, 1);
        assert_eq!(snap.cache_len, 1);
    }

    #[cfg(feature = "metrics")]
    #[test]
    fn metrics_count_clears() {
        let mut cache = OrderedCache::new(2).unwrap();
        cache.put(1, ());
        cache.clear();
        cache.clear();
        let snap = cache.metrics_snapshot();
        assert_eq!(snap.clears, 2);
        assert_eq!(snap.cache_len, 0);
    }

    #[cfg(feature = "concurrency")]
    #[test]
    fn concurrent_wrapper_shares_state() {
        let cache = ConcurrentOrderedCache::new(2).unwrap();
        let other = cache.clone();
        cache.put(1, 10);
        assert_eq!(other.peek(&1), Some(10));
        other.put(2, 20);
        other.put(3, 30);
        assert_eq!(cache.len(), 2);
        assert!(!cache.contains(&1));
        assert_eq!(cache.keys(), vec![3, 2]);
        assert!(cache.with_read(|c| c.check_invariants().is_ok()));
    }

    #[cfg(feature = "concurrency")]
    #[test]
    fn concurrent_with_write_batches_under_one_lock() {
        let cache = ConcurrentOrderedCache::new(3).unwrap();
        cache.put("a", 1);
        let evicted = cache.with_write(|c| {
            c.put("b", 2);
            c.put("c", 3);
            c.touch(&"a");
            c.put("d", 4);
            c.pop_lru()
        });
        assert_eq!(evicted, Some(("c", 3)));
        assert_eq!(cache.keys(), vec!["d", "a"]);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Put(u8, u16),
            Get(u8),
            Peek(u8),
            Touch(u8),
            Remove(u8),
            PopLru,
        }

        fn op_strategy() -> impl Strategy<Value = Op> {
            prop_oneof![
                (0u8..16, any::<u16>()).prop_map(|(k, v)| Op::Put(k, v)),
                (0u8..16).prop_map(Op::Get),
                (0u8..16).prop_map(Op::Peek),
                (0u8..16).prop_map(Op::Touch),
                (0u8..16).prop_map(Op::Remove),
                Just(Op::PopLru),
            ]
        }

        /// Naive recency model: index 0 is most recent.
        fn promote(model: &mut Vec<(u8, u16)>, key: u8) -> Option<u16> {
            let pos = model.iter().position(|(k, _)| *k == key)?;
            let entry = model.remove(pos);
            model.insert(0, entry);
            Some(entry.1)
        }

        proptest! {
            #[cfg_attr(miri, ignore)]
            #[test]
            fn prop_matches_vec_model(
                capacity in 1usize..8,
                ops in prop::collection::vec(op_strategy(), 0..200)
            ) {
                let mut cache = OrderedCache::new(capacity).unwrap();
                let mut model: Vec<(u8, u16)> = Vec::new();

                for op in ops {
                    match op {
                        Op::Put(k, v) => {
                            let previous = match promote(&mut model, k) {
                                Some(old) => {
                                    model[0].1 = v;
                                    Some(old)
                                },
                                None => {
                                    if model.len() == capacity {
                                        model.pop();
                                    }
                                    model.insert(0, (k, v));
                                    None
                                },
                            };
                            prop_assert_eq!(cache.put(k, v), previous);
                        },
                        Op::Get(k) => {
                            let expected = promote(&mut model, k);
                            prop_assert_eq!(cache.get(&k).copied(), expected);
                        },
                        Op::Peek(k) => {
                            let expected = model.iter().find(|(mk, _)| *mk == k).map(|(_, v)| *v);
                            prop_assert_eq!(cache.peek(&k).copied(), expected);
                        },
                        Op::Touch(k) => {
                            let expected = promote(&mut model, k).is_some();
                            prop_assert_eq!(cache.touch(&k), expected);
                        },
                        Op::Remove(k) => {
                            let expected = model
                                .iter()
                                .position(|(mk, _)| *mk == k)
                                .map(|pos| model.remove(pos).1);
                            prop_assert_eq!(cache.remove(&k), expected);
                        },
                        Op::PopLru => {
                            prop_assert_eq!(cache.pop_lru(), model.pop());
                        },
                    }

                    prop_assert!(cache.check_invariants().is_ok());
                    let pairs: Vec<(u8, u16)> = cache.iter().map(|(k, v)| (*k, *v)).collect();
                    prop_assert_eq!(&pairs, &model);
                }
            }
        }
    }
}
