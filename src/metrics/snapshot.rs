#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OrderedCacheMetricsSnapshot {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,

    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,

    pub evict_calls: u64,
    pub evicted_entries: u64,
    pub clears: u64,

    pub pop_lru_calls: u64,
    pub pop_lru_found: u64,
    pub touch_calls: u64,
    pub touch_found: u64,
    pub remove_calls: u64,
    pub remove_found: u64,

    pub peek_calls: u64,
    pub peek_hits: u64,
    pub peek_lru_calls: u64,
    pub peek_lru_found: u64,
    pub recency_rank_calls: u64,
    pub recency_rank_found: u64,
    pub recency_rank_scan_steps: u64,

    // gauges captured at snapshot time
    pub cache_len: usize,
    pub capacity: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WindowMetricsSnapshot {
    pub pushes: u64,
    pub dominated_pops: u64,
    pub expired_pops: u64,
    pub clears: u64,

    pub retained: usize,
    pub window_size: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TopKMetricsSnapshot {
    pub offers: u64,
    pub fills: u64,
    pub replacements: u64,
    pub rejections: u64,
    pub clears: u64,

    pub held: usize,
    pub k: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeMetricsSnapshot {
    pub pulls: u64,
    pub refills: u64,
    pub sources_exhausted: u64,

    pub source_count: usize,
    pub active_sources: usize,
}
