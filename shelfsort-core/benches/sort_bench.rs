//! Criterion benchmarks for the sort engine.
//!
//! Benchmarks:
//! 1. Single sort per strategy over a 10k-item synthetic catalog
//! 2. Engine overhead (validation gate + sort) at several catalog sizes

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use shelfsort_core::fixtures::synthetic_catalog;
use shelfsort_core::ordering::sorted_copy;
use shelfsort_core::{SortEngine, SortStrategy};

fn bench_strategies(c: &mut Criterion) {
    let items = synthetic_catalog(10_000, 42);
    let mut group = c.benchmark_group("sort_10k");
    for strategy in SortStrategy::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(strategy.name()),
            &strategy,
            |b, &s| b.iter(|| sorted_copy(black_box(&items), s)),
        );
    }
    group.finish();
}

fn bench_engine_sizes(c: &mut Criterion) {
    let engine = SortEngine::default();
    let mut group = c.benchmark_group("engine_conversion_ratio");
    for size in [100usize, 1_000, 10_000] {
        let items = synthetic_catalog(size, 7);
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.iter(|| engine.sort(Some(black_box(items)), "sales_conversion_ratio"))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_strategies, bench_engine_sizes);
criterion_main!(benches);
