//! # Bounded Structure Traits
//!
//! Two small families of traits: the keyed cache hierarchy implemented by
//! [`OrderedCache`](crate::policy::lru::OrderedCache), and
//! [`BoundedStream`], the common shape of the stream trackers that fold an
//! unbounded input into bounded state.
//!
//! ## Architecture
//!
//! ```text
//!   ┌─────────────────────────────────┐      ┌──────────────────────────────┐
//!   │        CoreCache<K, V>          │      │      BoundedStream<T>        │
//!   │  insert / get / contains        │      │  observe(T)                  │
//!   │  len / capacity / clear         │      │  bound() / len()             │
//!   └───────────────┬─────────────────┘      └──────────────┬───────────────┘
//!                   │                                       │
//!                   ▼                          ┌────────────┴─────────────┐
//!   ┌─────────────────────────────────┐        ▼                          ▼
//!   │      MutableCache<K, V>         │  WindowMaximumTracker        BoundedTopK
//!   │  remove / remove_batch          │
//!   └───────────────┬─────────────────┘
//!                   ▼
//!   ┌─────────────────────────────────┐
//!   │      LruCacheTrait<K, V>        │
//!   │  pop_lru / peek_lru             │
//!   │  touch / recency_rank           │
//!   └─────────────────────────────────┘
//! ```
//!
//! The k-way merger is not a bounded stream: it produces rather than
//! consumes, and is exposed as a plain [`Iterator`].
//!
//! ## Example Usage
//!
//! ```
//! use boundkit::policy::lru::OrderedCache;
//! use boundkit::stream::top_k::BoundedTopK;
//! use boundkit::stream::window_max::WindowMaximumTracker;
//! use boundkit::traits::{BoundedStream, CoreCache, LruCacheTrait};
//!
//! fn warm<C: CoreCache<u64, String>>(cache: &mut C, keys: &[u64]) {
//!     for key in keys {
//!         cache.insert(*key, key.to_string());
//!     }
//! }
//!
//! fn feed<S: BoundedStream<i64>>(stream: &mut S, values: &[i64]) {
//!     for v in values {
//!         stream.observe(*v);
//!     }
//! }
//!
//! let mut cache = OrderedCache::new(2).unwrap();
//! warm(&mut cache, &[1, 2, 3]);
//! assert_eq!(cache.peek_lru().map(|(k, _)| *k), Some(2));
//!
//! let mut window = WindowMaximumTracker::new(2).unwrap();
//! let mut top = BoundedTopK::new(2).unwrap();
//! feed(&mut window, &[4, 1, 2]);
//! feed(&mut top, &[4, 1, 2]);
//! assert_eq!(window.current_max(), Some(&2));
//! assert_eq!(top.snapshot(), vec![4, 2]);
//! ```
//!
//! ## Thread Safety
//!
//! None of the implementors synchronize internally. Enable the
//! `concurrency` feature for lock-wrapped variants.

/// Operations every bounded cache supports.
pub trait CoreCache<K, V> {
    /// Inserts or overwrites `key`, returning the previous value.
    ///
    /// May evict another entry to stay within [`capacity`](Self::capacity).
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Looks up `key`; a hit may update policy state (recency).
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Membership test that never updates policy state.
    fn contains(&self, key: &K) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries; fixed at construction.
    fn capacity(&self) -> usize;

    fn clear(&mut self);
}

/// Caches that allow removal of an arbitrary key.
pub trait MutableCache<K, V>: CoreCache<K, V> {
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes each key in order, returning the removed values.
    fn remove_batch(&mut self, keys: &[K]) -> Vec<Option<V>> {
        keys.iter().map(|key| self.remove(key)).collect()
    }
}

/// Recency-ordered caches.
pub trait LruCacheTrait<K, V>: MutableCache<K, V> {
    /// Removes and returns the least recently used entry.
    fn pop_lru(&mut self) -> Option<(K, V)>;

    /// Returns the least recently used entry without promoting it.
    fn peek_lru(&self) -> Option<(&K, &V)>;

    /// Marks `key` as most recent without reading it. Returns `false` on a
    /// miss.
    fn touch(&mut self, key: &K) -> bool;

    /// Position of `key` in recency order (0 = most recent). O(n).
    fn recency_rank(&self, key: &K) -> Option<usize>;
}

/// A structure that consumes a stream into state of bounded size.
pub trait BoundedStream<T> {
    /// Feeds one element.
    fn observe(&mut self, value: T);

    /// The construction-time bound (window size, `k`).
    fn bound(&self) -> usize;

    /// Number of stream elements currently represented by the state.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Feeds every element of `values` in order.
    fn observe_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
        Self: Sized,
    {
        for value in values {
            self.observe(value);
        }
    }
}
