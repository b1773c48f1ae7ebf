pub use crate::builder::{BoundBuilder, BoundConfig};
pub use crate::ds::{
    ByFn, HeapOrder, Indexed, MinHeap, MonotonicDeque, Natural, RecencyList, SlotArena, SlotId,
};
pub use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::{
    MergeMetricsSnapshot, OrderedCacheMetricsSnapshot, TopKMetricsSnapshot,
    WindowMetricsSnapshot,
};
#[cfg(feature = "metrics")]
pub use crate::metrics::traits::{MetricsExporter, MetricsSnapshotProvider};
#[cfg(feature = "concurrency")]
pub use crate::policy::lru::ConcurrentOrderedCache;
pub use crate::policy::lru::OrderedCache;
pub use crate::stream::merge::{KWayMerger, merge_sorted};
#[cfg(feature = "concurrency")]
pub use crate::stream::top_k::ConcurrentTopK;
pub use crate::stream::top_k::{BoundedTopK, top_k};
pub use crate::stream::window_max::{WindowMaximumTracker, sliding_window_max};
pub use crate::traits::{BoundedStream, CoreCache, LruCacheTrait, MutableCache};
