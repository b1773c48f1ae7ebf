use std::io::Write;
use std::sync::Mutex;

use crate::metrics::snapshot::{
    MergeMetricsSnapshot, OrderedCacheMetricsSnapshot, TopKMetricsSnapshot,
    WindowMetricsSnapshot,
};
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for metrics snapshots.
///
/// Writes the Prometheus text exposition format so output can be scraped
/// directly or forwarded to a collector. Write errors are dropped: metrics
/// export never fails the caller.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send + Sync> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send + Sync> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_metric(&self, kind: &str, suffix: &str, value: u64) {
        let name = self.metric_name(suffix);
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn write_counter(&self, suffix: &str, value: u64) {
        self.write_metric("counter", suffix, value);
    }

    fn write_gauge(&self, suffix: &str, value: usize) {
        self.write_metric("gauge", suffix, value as u64);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send + Sync> MetricsExporter<OrderedCacheMetricsSnapshot>
    for PrometheusTextExporter<W>
{
    fn export(&self, snapshot: &OrderedCacheMetricsSnapshot) {
        self.write_counter("get_calls_total", snapshot.get_calls);
        self.write_counter("get_hits_total", snapshot.get_hits);
        self.write_counter("get_misses_total", snapshot.get_misses);
        self.write_counter("insert_calls_total", snapshot.insert_calls);
        self.write_counter("insert_updates_total", snapshot.insert_updates);
        self.write_counter("insert_new_total", snapshot.insert_new);
        self.write_counter("evict_calls_total", snapshot.evict_calls);
        self.write_counter("evicted_entries_total", snapshot.evicted_entries);
        self.write_counter("clears_total", snapshot.clears);
        self.write_counter("pop_lru_calls_total", snapshot.pop_lru_calls);
        self.write_counter("pop_lru_found_total", snapshot.pop_lru_found);
        self.write_counter("touch_calls_total", snapshot.touch_calls);
        self.write_counter("touch_found_total", snapshot.touch_found);
        self.write_counter("remove_calls_total", snapshot.remove_calls);
        self.write_counter("remove_found_total", snapshot.remove_found);
        self.write_counter("peek_calls_total", snapshot.peek_calls);
        self.write_counter("peek_hits_total", snapshot.peek_hits);
        self.write_counter("peek_lru_calls_total", snapshot.peek_lru_calls);
        self.write_counter("peek_lru_found_total", snapshot.peek_lru_found);
        self.write_counter("recency_rank_calls_total", snapshot.recency_rank_calls);
        self.write_counter("recency_rank_found_total", snapshot.recency_rank_found);
        self.write_counter(
            "recency_rank_scan_steps_total",
            snapshot.recency_rank_scan_steps,
        );
        self.write_gauge("cache_len", snapshot.cache_len);
        self.write_gauge("capacity", snapshot.capacity);
    }
}

impl<W: Write + Send + Sync> MetricsExporter<WindowMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &WindowMetricsSnapshot) {
        self.write_counter("window_pushes_total", snapshot.pushes);
        self.write_counter("window_dominated_pops_total", snapshot.dominated_pops);
        self.write_counter("window_expired_pops_total", snapshot.expired_pops);
        self.write_counter("window_clears_total", snapshot.clears);
        self.write_gauge("window_retained", snapshot.retained);
        self.write_gauge("window_size", snapshot.window_size);
    }
}

impl<W: Write + Send + Sync> MetricsExporter<TopKMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &TopKMetricsSnapshot) {
        self.write_counter("top_k_offers_total", snapshot.offers);
        self.write_counter("top_k_fills_total", snapshot.fills);
        self.write_counter("top_k_replacements_total", snapshot.replacements);
        self.write_counter("top_k_rejections_total", snapshot.rejections);
        self.write_counter("top_k_clears_total", snapshot.clears);
        self.write_gauge("top_k_held", snapshot.held);
        self.write_gauge("top_k_bound", snapshot.k);
    }
}

impl<W: Write + Send + Sync> MetricsExporter<MergeMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &MergeMetricsSnapshot) {
        self.write_counter("merge_pulls_total", snapshot.pulls);
        self.write_counter("merge_refills_total", snapshot.refills);
        self.write_counter("merge_sources_exhausted_total", snapshot.sources_exhausted);
        self.write_gauge("merge_source_count", snapshot.source_count);
        self.write_gauge("merge_active_sources", snapshot.active_sources);
    }
}
