//! # K-Way Merge
//!
//! [`KWayMerger`] lazily merges any number of ascending sources into one
//! ascending stream. A [`MinHeap`] holds exactly one head per non-exhausted
//! source; each step yields the smallest head and refills from the same
//! source.
//!
//! ## Architecture
//!
//! ```text
//!   sources                        heap of heads (value, source)
//!   ┌───────────────┐
//!   │ 0: 1 → 4 → 7  │ ──┐          ┌──────────────────────────┐
//!   ├───────────────┤   ├────────► │ (1,0)  (2,1)  (3,2)      │ ──► next() = 1
//!   │ 1: 2 → 5 → 8  │ ──┤          └──────────────────────────┘
//!   ├───────────────┤   │             root replaced by (4,0)
//!   │ 2: 3 → 6 → 9  │ ──┘             from source 0
//!   └───────────────┘
//! ```
//!
//! Heads are ordered by value, then by source index, so between equal values
//! the earlier source is yielded first. Refilling overwrites the root in a
//! single sift; an exhausted source drops out with one pop.
//!
//! | Operation   | Complexity |
//! |-------------|------------|
//! | `new`       | O(S)       |
//! | `next`      | O(log S)   |
//! | `peek`      | O(1)       |
//!
//! Sources are assumed ascending. Unsorted sources still yield every element
//! exactly once, in no guaranteed order.
//!
//! ## Example Usage
//!
//! ```
//! use boundkit::stream::merge::KWayMerger;
//!
//! let merged: Vec<i32> =
//!     KWayMerger::new(vec![vec![1, 4, 7], vec![2, 5, 8], vec![3, 6, 9]]).collect();
//! assert_eq!(merged, (1..=9).collect::<Vec<_>>());
//! ```

use std::fmt;
use std::iter::FusedIterator;

use crate::ds::MinHeap;
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::MergeMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::MergeMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{MergeMetricsRecorder, MetricsSnapshotProvider};

/// Current head of one source.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Head<T> {
    value: T,
    source: usize,
}

/// Iterator merging ascending sources into one ascending sequence.
pub struct KWayMerger<I: Iterator> {
    sources: Vec<I>,
    heads: MinHeap<Head<I::Item>>,
    #[cfg(feature = "metrics")]
    metrics: MergeMetrics,
}

impl<I> KWayMerger<I>
where
    I: Iterator,
    I::Item: Ord,
{
    /// Builds a merger over `sources`, pulling the first element of each.
    ///
    /// Empty sources are accepted and never contribute a head.
    pub fn new<S>(sources: S) -> Self
    where
        S: IntoIterator,
        S::Item: IntoIterator<IntoIter = I>,
    {
        let mut sources: Vec<I> = sources.into_iter().map(IntoIterator::into_iter).collect();
        let mut heads = MinHeap::with_capacity(sources.len());
        for (source, iter) in sources.iter_mut().enumerate() {
            if let Some(value) = iter.next() {
                heads.push(Head { value, source });
            }
        }

        Self {
            sources,
            heads,
            #[cfg(feature = "metrics")]
            metrics: MergeMetrics::default(),
        }
    }

    /// The value the next call to `next` will return.
    #[inline]
    pub fn peek(&self) -> Option<&I::Item> {
        self.heads.peek().map(|head| &head.value)
    }

    /// Number of sources the merger was built with.
    #[inline]
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Number of sources that still have elements.
    #[inline]
    pub fn active_sources(&self) -> usize {
        self.heads.len()
    }

    fn pull(&mut self) -> Option<I::Item> {
        let source = self.heads.peek()?.source;
        let refill = self.sources.get_mut(source).and_then(Iterator::next);

        #[cfg(feature = "metrics")]
        self.metrics.record_pull();

        match refill {
            Some(value) => {
                #[cfg(feature = "metrics")]
                self.metrics.record_refill();

                self.heads
                    .replace_top(Head { value, source })
                    .map(|head| head.value)
            },
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_source_exhausted();

                self.heads.pop().map(|head| head.value)
            },
        }
    }
}

#[cfg(feature = "metrics")]
impl<I> KWayMerger<I>
where
    I: Iterator,
    I::Item: Ord,
{
    pub fn metrics_snapshot(&self) -> MergeMetricsSnapshot {
        MergeMetricsSnapshot {
            pulls: self.metrics.pulls,
            refills: self.metrics.refills,
            sources_exhausted: self.metrics.sources_exhausted,
            source_count: self.sources.len(),
            active_sources: self.heads.len(),
        }
    }
}

#[cfg(feature = "metrics")]
impl<I> MetricsSnapshotProvider<MergeMetricsSnapshot> for KWayMerger<I>
where
    I: Iterator,
    I::Item: Ord,
{
    fn snapshot(&self) -> MergeMetricsSnapshot {
        self.metrics_snapshot()
    }
}

impl<I> Iterator for KWayMerger<I>
where
    I: Iterator,
    I::Item: Ord,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.pull()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = self.heads.len();
        let mut lower = buffered;
        let mut upper = Some(buffered);
        for head in self.heads.iter() {
            let (lo, hi) = self
                .sources
                .get(head.source)
                .map_or((0, Some(0)), Iterator::size_hint);
            lower = lower.saturating_add(lo);
            upper = match (upper, hi) {
                (Some(a), Some(b)) => a.checked_add(b),
                _ => None,
            };
        }
        (lower, upper)
    }
}

impl<I> FusedIterator for KWayMerger<I>
where
    I: Iterator,
    I::Item: Ord,
{
}

impl<I> fmt::Debug for KWayMerger<I>
where
    I: Iterator,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KWayMerger")
            .field("source_count", &self.sources.len())
            .field("active_sources", &self.heads.len())
            .field("next", &self.heads.peek().map(|head| &head.value))
            .finish_non_exhaustive()
    }
}

/// Merges ascending `sources` into one ascending vector.
///
/// ```
/// use boundkit::stream::merge::merge_sorted;
///
/// let merged = merge_sorted(vec![vec![1, 3], vec![], vec![2, 2, 4]]);
/// assert_eq!(merged, vec![1, 2, 2, 3, 4]);
/// ```
pub fn merge_sorted<S, T>(sources: S) -> Vec<T>
where
    S: IntoIterator,
    S::Item: IntoIterator<Item = T>,
    T: Ord,
{
    KWayMerger::new(sources).collect()
}
