use boundkit::stream::merge::KWayMerger;
use boundkit::stream::top_k::BoundedTopK;
use boundkit::stream::window_max::WindowMaximumTracker;
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_values(len: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(0..1_000_000)).collect()
}

fn bench_window_max(c: &mut Criterion) {
    let values = random_values(16_384, 1);
    let mut group = c.benchmark_group("window_max_push");
    for window_size in [8usize, 256, 4096] {
        group.bench_with_input(
            BenchmarkId::from_parameter(window_size),
            &window_size,
            |b, &window_size| {
                b.iter_batched(
                    || WindowMaximumTracker::new(window_size).unwrap(),
                    |mut window| {
                        for v in &values {
                            window.push(std::hint::black_box(*v));
                        }
                        std::hint::black_box(window.current_max().copied())
                    },
                    BatchSize::SmallInput,
                )
            },
        );
    }
    group.finish();
}

fn bench_top_k(c: &mut Criterion) {
    let values = random_values(16_384, 2);
    let mut group = c.benchmark_group("top_k_offer");
    for k in [10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            b.iter_batched(
                || BoundedTopK::new(k).unwrap(),
                |mut top| {
                    for v in &values {
                        let _ = std::hint::black_box(top.offer(*v));
                    }
                    top
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("k_way_merge");
    for sources in [2usize, 16, 128] {
        let per_source = 16_384 / sources;
        let inputs: Vec<Vec<u64>> = (0..sources)
            .map(|s| {
                let mut values = random_values(per_source, s as u64);
                values.sort_unstable();
                values
            })
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(sources), &inputs, |b, inputs| {
            b.iter_batched(
                || inputs.clone(),
                |inputs| std::hint::black_box(KWayMerger::new(inputs).count()),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_window_max, bench_top_k, bench_merge);
criterion_main!(benches);
