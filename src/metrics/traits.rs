//! # Metrics Trait Hierarchy
//!
//! Recording, snapshotting and export are separate traits so structure code
//! only ever writes counters.
//!
//! ```text
//!   ┌──────────────────────┐  ┌──────────────────────┐  ┌──────────────────────┐
//!   │ CoreMetricsRecorder  │  │ WindowMetricsRecorder│  │ TopKMetricsRecorder  │
//!   │ get/insert/evict     │  │ push/dominated/expire│  │ offer/fill/replace   │
//!   └──────────┬───────────┘  └──────────────────────┘  └──────────────────────┘
//!              ▼
//!   ┌──────────────────────┐  ┌──────────────────────┐
//!   │ LruMetricsRecorder   │  │ MergeMetricsRecorder │
//!   │ pop_lru/touch/remove │  │ pull/refill/exhaust  │
//!   └──────────────────────┘  └──────────────────────┘
//!
//!   Consumption:
//!   MetricsSnapshotProvider<S>  (tests, benches)
//!   MetricsExporter<S>          (monitoring)
//! ```

/// Counters shared by every keyed cache.
pub trait CoreMetricsRecorder {
    fn record_get_hit(&mut self);
    fn record_get_miss(&mut self);
    fn record_insert_call(&mut self);
    fn record_insert_new(&mut self);
    fn record_insert_update(&mut self);
    fn record_evict_call(&mut self);
    fn record_evicted_entry(&mut self);
    fn record_clear(&mut self);
}

/// Recency-specific cache counters.
pub trait LruMetricsRecorder: CoreMetricsRecorder {
    fn record_pop_lru_call(&mut self);
    fn record_pop_lru_found(&mut self);
    fn record_touch_call(&mut self);
    fn record_touch_found(&mut self);
    fn record_remove_call(&mut self);
    fn record_remove_found(&mut self);
}

/// Recency counters for `&self` methods.
pub trait LruMetricsReadRecorder {
    fn record_peek_call(&self);
    fn record_peek_hit(&self);
    fn record_peek_lru_call(&self);
    fn record_peek_lru_found(&self);
    fn record_recency_rank_call(&self);
    fn record_recency_rank_found(&self);
    fn record_recency_rank_scan_steps(&self, steps: u64);
}

/// Sliding-window maximum counters.
pub trait WindowMetricsRecorder {
    fn record_push(&mut self);
    fn record_dominated_pops(&mut self, count: u64);
    fn record_expired_pops(&mut self, count: u64);
    fn record_clear(&mut self);
}

/// Bounded top-k counters.
pub trait TopKMetricsRecorder {
    fn record_offer(&mut self);
    fn record_fill(&mut self);
    fn record_replace(&mut self);
    fn record_reject(&mut self);
    fn record_clear(&mut self);
}

/// k-way merge counters.
pub trait MergeMetricsRecorder {
    fn record_pull(&mut self);
    fn record_refill(&mut self);
    fn record_source_exhausted(&mut self);
}

/// Snapshot provider for bench/testing.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Export/publish metrics to a monitoring backend.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
