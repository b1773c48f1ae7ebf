//! # Bounded Top-K Selection
//!
//! [`BoundedTopK`] keeps the `k` largest values seen in a stream using a
//! size-`k` [`MinHeap`]. The heap root is the smallest kept value and acts as
//! the admission threshold: once full, a new value enters only if it is
//! strictly greater than the root, and then replaces it in one sift.
//!
//! ## Offer Flow
//!
//! ```text
//!   k = 3, held {4, 5, 9}, root = 4
//!
//!   offer(6):  6 > 4  → replace root   held {5, 6, 9}   returns Some(4)
//!   offer(5):  5 > 5? no → rejected    held {5, 6, 9}   returns Some(5)
//!   offer(1):  1 > 5? no → rejected    held {5, 6, 9}   returns Some(1)
//! ```
//!
//! | Operation         | Complexity   |
//! |-------------------|--------------|
//! | `offer`           | O(log k)     |
//! | `min`             | O(1)         |
//! | `snapshot`        | O(k log k)   |
//!
//! Equal values are kept as separate members; their relative order in a
//! snapshot is unspecified.
//!
//! ## Example Usage
//!
//! ```
//! use boundkit::stream::top_k::BoundedTopK;
//!
//! let mut top = BoundedTopK::new(3).unwrap();
//! for v in [3, 1, 4, 1, 5, 9, 2, 6] {
//!     top.offer(v);
//! }
//! assert_eq!(top.snapshot(), vec![9, 6, 5]);
//! assert_eq!(top.min(), Some(&5));
//! ```

#[cfg(feature = "concurrency")]
use parking_lot::RwLock;
#[cfg(feature = "concurrency")]
use std::sync::Arc;

use crate::ds::MinHeap;
use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::TopKMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::TopKMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{MetricsSnapshotProvider, TopKMetricsRecorder};
use crate::traits::BoundedStream;

/// Retains the `k` largest values offered so far.
#[derive(Debug)]
pub struct BoundedTopK<T> {
    heap: MinHeap<T>,
    k: usize,
    #[cfg(feature = "metrics")]
    metrics: TopKMetrics,
}

impl<T: Ord> BoundedTopK<T> {
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `k` is zero.
    pub fn new(k: usize) -> Result<Self, ConfigError> {
        let k = ConfigError::require_positive("k", k)?;
        Ok(Self {
            heap: MinHeap::with_capacity(k.min(1024)),
            k,
            #[cfg(feature = "metrics")]
            metrics: TopKMetrics::default(),
        })
    }

    /// Offers `value` to the selector.
    ///
    /// Returns `None` while the selector is filling. Once full, returns the
    /// displaced minimum when `value` is admitted, or `value` itself when it
    /// is not strictly greater than the current minimum.
    ///
    /// ```
    /// use boundkit::stream::top_k::BoundedTopK;
    ///
    /// let mut top = BoundedTopK::new(1).unwrap();
    /// assert_eq!(top.offer(5), None);
    /// assert_eq!(top.offer(7), Some(5));
    /// assert_eq!(top.offer(7), Some(7));
    /// ```
    pub fn offer(&mut self, value: T) -> Option<T> {
        #[cfg(feature = "metrics")]
        self.metrics.record_offer();

        if self.heap.len() < self.k {
            #[cfg(feature = "metrics")]
            self.metrics.record_fill();

            self.heap.push(value);
            return None;
        }

        match self.heap.peek() {
            Some(min) if value > *min => {
                #[cfg(feature = "metrics")]
                self.metrics.record_replace();

                self.heap.replace_top(value)
            },
            _ => {
                #[cfg(feature = "metrics")]
                self.metrics.record_reject();

                Some(value)
            },
        }
    }

    /// Smallest retained value: the bar a new value must clear once full.
    #[inline]
    pub fn min(&self) -> Option<&T> {
        self.heap.peek()
    }

    /// Retained values in descending order. Does not modify the selector.
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut values: Vec<T> = self.heap.iter().cloned().collect();
        values.sort_unstable_by(|a, b| b.cmp(a));
        values
    }

    /// Consumes the selector, returning its values in descending order.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut values = self.heap.into_sorted_vec();
        values.reverse();
        values
    }

    /// Iterates retained values in heap order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.heap.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.heap.len() == self.k
    }

    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        self.heap.clear();
    }

    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.heap.len() > self.k {
            return Err(InvariantError::new(format!(
                "selector holds {} values, k is {}",
                self.heap.len(),
                self.k
            )));
        }
        self.heap.validate()
    }
}

#[cfg(feature = "metrics")]
impl<T: Ord> BoundedTopK<T> {
    pub fn metrics_snapshot(&self) -> TopKMetricsSnapshot {
        TopKMetricsSnapshot {
            offers: self.metrics.offers,
            fills: self.metrics.fills,
            replacements: self.metrics.replacements,
            rejections: self.metrics.rejections,
            clears: self.metrics.clears,
            held: self.heap.len(),
            k: self.k,
        }
    }
}

#[cfg(feature = "metrics")]
impl<T: Ord> MetricsSnapshotProvider<TopKMetricsSnapshot> for BoundedTopK<T> {
    fn snapshot(&self) -> TopKMetricsSnapshot {
        self.metrics_snapshot()
    }
}

impl<T: Ord> BoundedStream<T> for BoundedTopK<T> {
    #[inline]
    fn observe(&mut self, value: T) {
        self.offer(value);
    }

    fn bound(&self) -> usize {
        self.k
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<T: Ord> Extend<T> for BoundedTopK<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.offer(value);
        }
    }
}

/// The `k` largest of `values`, in descending order.
///
/// # Errors
///
/// Returns [`ConfigError`] when `k` is zero.
///
/// ```
/// use boundkit::stream::top_k::top_k;
///
/// assert_eq!(top_k([3, 1, 4, 1, 5, 9, 2, 6], 3).unwrap(), vec![9, 6, 5]);
/// assert_eq!(top_k([2, 1], 5).unwrap(), vec![2, 1]);
/// ```
pub fn top_k<T, I>(values: I, k: usize) -> Result<Vec<T>, ConfigError>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut selector = BoundedTopK::new(k)?;
    selector.extend(values);
    Ok(selector.into_sorted_vec())
}

// ---------------------------------------------------------------------------
// ConcurrentTopK
// ---------------------------------------------------------------------------

/// Thread-safe [`BoundedTopK`] behind a `parking_lot::RwLock`.
///
/// `offer` takes the write lock; `snapshot` and `min` take the read lock, so
/// readers run concurrently with each other.
///
/// ```
/// use boundkit::stream::top_k::ConcurrentTopK;
///
/// let top = ConcurrentTopK::new(2).unwrap();
/// top.offer(1);
/// top.offer(8);
/// top.offer(3);
/// assert_eq!(top.snapshot(), vec![8, 3]);
/// ```
#[cfg(feature = "concurrency")]
#[derive(Debug)]
pub struct ConcurrentTopK<T> {
    inner: Arc<RwLock<BoundedTopK<T>>>,
}

#[cfg(feature = "concurrency")]
impl<T> Clone for ConcurrentTopK<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(feature = "concurrency")]
impl<T> ConcurrentTopK<T>
where
    T: Ord + Clone + Send + Sync,
{
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `k` is zero.
    pub fn new(k: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            inner: Arc::new(RwLock::new(BoundedTopK::new(k)?)),
        })
    }

    pub fn offer(&self, value: T) -> Option<T> {
        self.inner.write().offer(value)
    }

    /// Descending copy of the retained values under one read lock.
    pub fn snapshot(&self) -> Vec<T> {
        self.inner.read().snapshot()
    }

    pub fn min(&self) -> Option<T> {
        self.inner.read().min().cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn k(&self) -> usize {
        self.inner.read().k()
    }

    pub fn is_full(&self) -> bool {
        self.inner.read().is_full()
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }

    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> TopKMetricsSnapshot {
        self.inner.read().metrics_snapshot()
    }
}
