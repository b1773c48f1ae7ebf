//! boundkit: bounded, order-maintaining data structures.
//!
//! | Structure                   | Bound      | Ordering kept                     |
//! |-----------------------------|------------|-----------------------------------|
//! | [`OrderedCache`]            | capacity   | recency, least recent evicted     |
//! | [`WindowMaximumTracker`]    | window `W` | maximum of the last `W` values    |
//! | [`BoundedTopK`]             | `k`        | the `k` largest values seen       |
//! | [`KWayMerger`]              | sources    | ascending merge of sorted inputs  |
//!
//! Each structure keeps its invariant incrementally on every mutation and
//! exposes `check_invariants` for tests. Shared primitives live in [`ds`];
//! `metrics` and `concurrency` are opt-in features.
//!
//! [`OrderedCache`]: policy::lru::OrderedCache
//! [`WindowMaximumTracker`]: stream::window_max::WindowMaximumTracker
//! [`BoundedTopK`]: stream::top_k::BoundedTopK
//! [`KWayMerger`]: stream::merge::KWayMerger

pub mod builder;
pub mod ds;
pub mod error;
pub mod policy;
pub mod stream;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
pub mod traits;
