//! DHAT heap profiler for boundkit.
//!
//! Run with: cargo run --bin dhat_profile --release --features dhat-heap
//! View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use boundkit::error::ConfigError;
use boundkit::policy::lru::OrderedCache;
use boundkit::stream::merge::KWayMerger;
use boundkit::stream::top_k::BoundedTopK;
use boundkit::stream::window_max::WindowMaximumTracker;
use boundkit::traits::{BoundedStream, CoreCache};

/// Simple XorShift64 RNG for deterministic workloads.
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn next_f64(&mut self) -> f64 {
        const SCALE: f64 = 1.0 / (u64::MAX as f64);
        (self.next_u64() as f64) * SCALE
    }
}

/// Hotset workload: 90% of accesses hit 10% of keys.
fn hotset_workload<C: CoreCache<u64, u64>>(cache: &mut C, operations: usize, universe: u64) {
    let mut rng = XorShift64::new(42);
    let hot_size = (universe as f64 * 0.1) as u64;

    for _ in 0..operations {
        let key = if rng.next_f64() < 0.9 {
            rng.next_u64() % hot_size
        } else {
            hot_size + (rng.next_u64() % (universe - hot_size))
        };

        if cache.get(&key).is_none() {
            let _ = cache.insert(key, key);
        }
    }
}

/// Sequential scan wider than the cache.
fn scan_workload<C: CoreCache<u64, u64>>(cache: &mut C, operations: usize, universe: u64) {
    for i in 0..operations {
        let key = (i as u64) % universe;
        if cache.get(&key).is_none() {
            let _ = cache.insert(key, key);
        }
    }
}

fn random_stream<S: BoundedStream<u64>>(stream: &mut S, operations: usize, seed: u64) {
    let mut rng = XorShift64::new(seed);
    for _ in 0..operations {
        stream.observe(rng.next_u64() % 1_000_000);
    }
}

fn profile_ordered_cache() -> Result<(), ConfigError> {
    println!("=== Profiling OrderedCache ===");
    let capacity = 4096;
    let operations = 100_000;
    let universe = 16_384;

    let mut cache = OrderedCache::new(capacity)?;
    for i in 0..capacity as u64 {
        cache.put(i, i);
    }

    hotset_workload(&mut cache, operations, universe);
    scan_workload(&mut cache, operations / 2, universe);

    // eviction churn
    for i in 0..(operations / 4) as u64 {
        cache.put(universe + i, i);
    }

    println!("  Final size: {}", cache.len());
    Ok(())
}

fn profile_window_max() -> Result<(), ConfigError> {
    println!("=== Profiling WindowMaximumTracker ===");
    let mut window = WindowMaximumTracker::new(1024)?;
    random_stream(&mut window, 200_000, 7);

    // a descending run keeps the whole window in the deque
    for v in (0..4096u64).rev() {
        window.push(v);
    }

    println!("  Retained: {}", window.retained());
    Ok(())
}

fn profile_top_k() -> Result<(), ConfigError> {
    println!("=== Profiling BoundedTopK ===");
    let mut top = BoundedTopK::new(1000)?;
    random_stream(&mut top, 200_000, 11);
    let snapshot = top.snapshot();
    println!("  Held: {} (threshold {:?})", snapshot.len(), top.min());
    Ok(())
}

fn profile_merge() {
    println!("=== Profiling KWayMerger ===");
    let sources: Vec<Vec<u64>> = (0..64u64)
        .map(|s| (0..2_000u64).map(|i| i * 64 + s).collect())
        .collect();
    let merged = KWayMerger::new(sources).count();
    println!("  Merged: {}", merged);
}

fn main() -> Result<(), ConfigError> {
    let _profiler = dhat::Profiler::new_heap();

    println!("boundkit DHAT Heap Profiling");
    println!("============================\n");

    profile_ordered_cache()?;
    profile_window_max()?;
    profile_top_k()?;
    profile_merge();

    println!("\n============================");
    println!("Profile written to dhat-heap.json");
    Ok(())
}
