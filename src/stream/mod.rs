//! Stream trackers: structures that fold an unbounded sequence into bounded
//! ordered state, plus the k-way merger that produces one.
//!
//! | Module         | Type                   | Held state            |
//! |----------------|------------------------|-----------------------|
//! | [`window_max`] | `WindowMaximumTracker` | monotonic deque       |
//! | [`top_k`]      | `BoundedTopK`          | size-k min-heap       |
//! | [`merge`]      | `KWayMerger`           | one head per source   |

pub mod merge;
pub mod top_k;
pub mod window_max;

pub use merge::{KWayMerger, merge_sorted};
pub use top_k::{BoundedTopK, top_k};
#[cfg(feature = "concurrency")]
pub use top_k::ConcurrentTopK;
pub use window_max::{WindowMaximumTracker, sliding_window_max};
