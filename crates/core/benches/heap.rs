//! Micro-benchmarks for the bounded min-heap.
//!
//! # Running
//!
//! ```bash
//! cargo bench --bench heap
//! ```

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use polyfuse_core::BoundedHeap;
use rand::Rng;

fn make_scores(n: usize) -> Vec<f64> {
    let mut rng = rand::rng();
    (0..n).map(|_| rng.random_range(-1.0..1.0)).collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap_insert");

    for &depth in &[100usize, 1000, 10000] {
        let scores = make_scores(depth * 10);
        group.bench_function(format!("depth_{depth}"), |b| {
            b.iter_batched(
                || BoundedHeap::new(depth),
                |mut heap| {
                    for (i, &score) in scores.iter().enumerate() {
                        heap.insert(format!("doc{i}"), score, 1);
                    }
                    black_box(heap.size())
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap_drain");

    for &depth in &[100usize, 1000, 10000] {
        let scores = make_scores(depth);
        group.bench_function(format!("depth_{depth}"), |b| {
            b.iter_batched(
                || {
                    let mut heap = BoundedHeap::new(depth);
                    for (i, &score) in scores.iter().enumerate() {
                        heap.insert(format!("doc{i}"), score, 1);
                    }
                    heap
                },
                |mut heap| {
                    while let Some(item) = heap.pop() {
                        black_box(item);
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_drain);
criterion_main!(benches);
