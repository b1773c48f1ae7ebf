use crate::metrics::cell::MetricsCell;
use crate::metrics::traits::{
    CoreMetricsRecorder, LruMetricsReadRecorder, LruMetricsRecorder, MergeMetricsRecorder,
    TopKMetricsRecorder, WindowMetricsRecorder,
};

#[derive(Debug, Default)]
pub struct OrderedCacheMetrics {
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
    pub peek_calls: MetricsCell,
    pub peek_hits: MetricsCell,
    pub peek_lru_calls: MetricsCell,
    pub peek_lru_found: MetricsCell,
    pub recency_rank_calls: MetricsCell,
    pub recency_rank_found: MetricsCell,
    pub recency_rank_scan_steps: MetricsCell,
}

#[derive(Debug, Default)]
pub struct WindowMetrics {
    pub pushes: u64,
    pub dominated_pops: u64,
    pub expired_pops: u64,
    pub clears: u64,
}

#[derive(Debug, Default)]
pub struct TopKMetrics {
    pub offers: u64,
    pub fills: u64,
    pub replacements: u64,
    pub rejections: u64,
    pub clears: u64,
}

#[derive(Debug, Default)]
pub struct MergeMetrics {
    pub pulls: u64,
    pub refills: u64,
    pub sources_exhausted: u64,
}

impl CoreMetricsRecorder for OrderedCacheMetrics {
    fn record_get_hit(&mut self) {
        self.get_calls += 1;
        self.get_hits += 1;
    }

    fn record_get_miss(&mut self) {
        self.get_calls += 1;
        self.get_misses += 1;
    }

    fn record_insert_call(&mut self) {
        self.insert_calls += 1;
    }

    fn record_insert_new(&mut self) {
        self.insert_new += 1;
    }

    fn record_insert_update(&mut self) {
        self.insert_updates += 1;
    }

    fn record_evict_call(&mut self) {
        self.evict_calls += 1;
    }

    fn record_evicted_entry(&mut self) {
        self.evicted_entries += 1;
    }

    fn record_clear(&mut self) {
        self.clears += 1;
    }
}

impl LruMetricsRecorder for OrderedCacheMetrics {
    fn record_pop_lru_call(&mut self) {
        self.pop_lru_calls += 1;
    }

    fn record_pop_lru_found(&mut self) {
        self.pop_lru_found += 1;
    }

    fn record_touch_call(&mut self) {
        self.touch_calls += 1;
    }

    fn record_touch_found(&mut self) {
        self.touch_found += 1;
    }

    fn record_remove_call(&mut self) {
        self.remove_calls += 1;
    }

    fn record_remove_found(&mut self) {
        self.remove_found += 1;
    }
}

impl LruMetricsReadRecorder for OrderedCacheMetrics {
    fn record_peek_call(&self) {
        self.peek_calls.incr();
    }

    fn record_peek_hit(&self) {
        self.peek_hits.incr();
    }

    fn record_peek_lru_call(&self) {
        self.peek_lru_calls.incr();
    }

    fn record_peek_lru_found(&self) {
        self.peek_lru_found.incr();
    }

    fn record_recency_rank_call(&self) {
        self.recency_rank_calls.incr();
    }

    fn record_recency_rank_found(&self) {
        self.recency_rank_found.incr();
    }

    fn record_recency_rank_scan_steps(&self, steps: u64) {
        self.recency_rank_scan_steps.add(steps);
    }
}

impl WindowMetricsRecorder for WindowMetrics {
    fn record_push(&mut self) {
        self.pushes += 1;
    }

    fn record_dominated_pops(&mut self, count: u64) {
        self.dominated_pops += count;
    }

    fn record_expired_pops(&mut self, count: u64) {
        self.expired_pops += count;
    }

    fn record_clear(&mut self) {
        self.clears += 1;
    }
}

impl TopKMetricsRecorder for TopKMetrics {
    fn record_offer(&mut self) {
        self.offers += 1;
    }

    fn record_fill(&mut self) {
        self.fills += 1;
    }

    fn record_replace(&mut self) {
        self.replacements += 1;
    }

    fn record_reject(&mut self) {
        self.rejections += 1;
    }

    fn record_clear(&mut self) {
        self.clears += 1;
    }
}

impl MergeMetricsRecorder for MergeMetrics {
    fn record_pull(&mut self) {
        self.pulls += 1;
    }

    fn record_refill(&mut self) {
        self.refills += 1;
    }

    fn record_source_exhausted(&mut self) {
        self.sources_exhausted += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_cache_metrics_split_hits_and_misses() {
        let mut m = OrderedCacheMetrics::default();
        m.record_get_hit();
        m.record_get_miss();
        m.record_get_miss();
        assert_eq!(m.get_calls, 3);
        assert_eq!(m.get_hits, 1);
        assert_eq!(m.get_misses, 2);
    }

    #[test]
    fn read_recorder_counts_through_shared_ref() {
        let m = OrderedCacheMetrics::default();
        m.record_peek_call();
        m.record_recency_rank_scan_steps(4);
        assert_eq!(m.peek_calls.get(), 1);
        assert_eq!(m.recency_rank_scan_steps.get(), 4);
    }

    #[test]
    fn window_metrics_accumulate_pop_counts() {
        let mut m = WindowMetrics::default();
        m.record_dominated_pops(3);
        m.record_dominated_pops(2);
        m.record_expired_pops(1);
        assert_eq!(m.dominated_pops, 5);
        assert_eq!(m.expired_pops, 1);
    }
}
