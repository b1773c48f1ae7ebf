//! # Sliding-Window Maximum
//!
//! [`WindowMaximumTracker`] reports the maximum of the last `W` pushed values
//! in O(1), with amortized O(1) pushes. It holds a [`MonotonicDeque`] of
//! `(value, index)` pairs trimmed from both ends on every push.
//!
//! ## Push Flow
//!
//! ```text
//!   W = 3, pushing 5 at index 4
//!
//!   1. assign index 4
//!   2. pop back while back.value <= 5
//!        front [(7,1) (4,2) (2,3)] back   →   front [(7,1)] back
//!   3. append (5,4)
//!        front [(7,1) (5,4)] back
//!   4. pop front while front.index <= 4 - 3
//!        front [(5,4)] back
//!
//!   current_max() = 5
//! ```
//!
//! Until `W` values have been pushed the window is every value pushed so
//! far. Between equal values the newer one is kept, so it outlives the older
//! one at the front.
//!
//! ## Example Usage
//!
//! ```
//! use boundkit::stream::window_max::WindowMaximumTracker;
//!
//! let mut window = WindowMaximumTracker::new(3).unwrap();
//! let mut maxima = Vec::new();
//! for v in [1, 3, -1, -3, 5, 3, 6, 7] {
//!     window.push(v);
//!     maxima.push(*window.current_max().unwrap());
//! }
//! assert_eq!(maxima, vec![1, 3, 3, 3, 5, 5, 6, 7]);
//! ```

use crate::ds::MonotonicDeque;
use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::WindowMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::WindowMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{MetricsSnapshotProvider, WindowMetricsRecorder};
use crate::traits::BoundedStream;

/// Running maximum over the most recent `window_size` values.
#[derive(Debug)]
pub struct WindowMaximumTracker<T> {
    deque: MonotonicDeque<T>,
    window_size: usize,
    next_index: u64,
    #[cfg(feature = "metrics")]
    metrics: WindowMetrics,
}

impl<T: Ord> WindowMaximumTracker<T> {
    /// Creates a tracker over windows of `window_size` values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `window_size` is zero.
    pub fn new(window_size: usize) -> Result<Self, ConfigError> {
        let window_size = ConfigError::require_positive("window_size", window_size)?;
        Ok(Self {
            deque: MonotonicDeque::with_capacity(window_size.min(1024)),
            window_size,
            next_index: 0,
            #[cfg(feature = "metrics")]
            metrics: WindowMetrics::default(),
        })
    }

    /// Appends `value` to the stream and slides the window forward by one.
    pub fn push(&mut self, value: T) {
        let index = self.next_index;
        self.next_index += 1;

        let _dominated = self.deque.push_dominating(value, index);

        let window = self.window_size as u64;
        let _expired = if index >= window {
            self.deque.expire_through(index - window)
        } else {
            0
        };

        #[cfg(feature = "metrics")]
        {
            self.metrics.record_push();
            self.metrics.record_dominated_pops(_dominated as u64);
            self.metrics.record_expired_pops(_expired as u64);
        }
    }

    /// Maximum of the current window; `None` before the first push.
    #[inline]
    pub fn current_max(&self) -> Option<&T> {
        self.deque.front().map(|entry| &entry.value)
    }

    #[inline]
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Total number of values pushed since construction or the last clear.
    #[inline]
    pub fn pushed(&self) -> u64 {
        self.next_index
    }

    /// Number of values inside the current window, `min(pushed, W)`.
    pub fn len(&self) -> usize {
        let window = self.window_size as u64;
        // bounded by window_size, so the cast back is lossless
        self.next_index.min(window) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.next_index == 0
    }

    /// Number of candidate maxima currently held in the deque.
    #[inline]
    pub fn retained(&self) -> usize {
        self.deque.len()
    }

    /// Forgets every pushed value; the next push starts a fresh window.
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        self.deque.clear();
        self.next_index = 0;
    }

    /// Checks deque ordering and that every held index is inside the window.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.deque.validate()?;

        if self.next_index > 0 && self.deque.is_empty() {
            return Err(InvariantError::new("values were pushed but no maximum is held"));
        }
        if self.deque.len() > self.window_size {
            return Err(InvariantError::new(format!(
                "deque holds {} entries for a window of {}",
                self.deque.len(),
                self.window_size
            )));
        }

        let newest = self.next_index.saturating_sub(1);
        let oldest = (self.next_index).saturating_sub(self.window_size as u64);
        for entry in self.deque.iter() {
            if entry.index < oldest || entry.index > newest {
                return Err(InvariantError::new(format!(
                    "index {} outside window [{}, {}]",
                    entry.index, oldest, newest
                )));
            }
        }
        if let Some(back) = self.deque.back() {
            if back.index != newest {
                return Err(InvariantError::new(format!(
                    "newest value at index {} is not held (back is {})",
                    newest, back.index
                )));
            }
        }
        Ok(())
    }
}

#[cfg(feature = "metrics")]
impl<T: Ord> WindowMaximumTracker<T> {
    pub fn metrics_snapshot(&self) -> WindowMetricsSnapshot {
        WindowMetricsSnapshot {
            pushes: self.metrics.pushes,
            dominated_pops: self.metrics.dominated_pops,
            expired_pops: self.metrics.expired_pops,
            clears: self.metrics.clears,
            retained: self.deque.len(),
            window_size: self.window_size,
        }
    }
}

#[cfg(feature = "metrics")]
impl<T: Ord> MetricsSnapshotProvider<WindowMetricsSnapshot> for WindowMaximumTracker<T> {
    fn snapshot(&self) -> WindowMetricsSnapshot {
        self.metrics_snapshot()
    }
}

impl<T: Ord> BoundedStream<T> for WindowMaximumTracker<T> {
    #[inline]
    fn observe(&mut self, value: T) {
        self.push(value);
    }

    fn bound(&self) -> usize {
        self.window_size
    }

    fn len(&self) -> usize {
        WindowMaximumTracker::len(self)
    }
}

impl<T: Ord> Extend<T> for WindowMaximumTracker<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

/// Maximum of every full window of `window_size` consecutive values.
///
/// Returns `values.len() - window_size + 1` maxima, or an empty vector when
/// there are fewer than `window_size` values.
///
/// # Errors
///
/// Returns [`ConfigError`] when `window_size` is zero.
///
/// ```
/// use boundkit::stream::window_max::sliding_window_max;
///
/// let maxima = sliding_window_max(&[1, 3, -1, -3, 5, 3, 6, 7], 3).unwrap();
/// assert_eq!(maxima, vec![3, 3, 5, 5, 6, 7]);
/// assert!(sliding_window_max(&[1, 2], 3).unwrap().is_empty());
/// ```
pub fn sliding_window_max<T: Ord + Clone>(
    values: &[T],
    window_size: usize,
) -> Result<Vec<T>, ConfigError> {
    let mut tracker = WindowMaximumTracker::new(window_size)?;
    let mut maxima = Vec::with_capacity((values.len() + 1).saturating_sub(window_size));

    for (pos, value) in values.iter().enumerate() {
        tracker.push(value.clone());
        if pos + 1 >= window_size {
            if let Some(max) = tracker.current_max() {
                maxima.push(max.clone());
            }
        }
    }
    Ok(maxima)
}
