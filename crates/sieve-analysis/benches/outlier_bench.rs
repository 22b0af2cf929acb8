//! Outlier detection benchmarks.
//!
//! Run with: cargo bench -p sieve-analysis --bench outlier_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sieve_analysis::{get_outliers, standardize, OutlierMethod, Series};

/// Deterministic series with a spike every 97 entries.
fn make_series(len: usize) -> Series {
    (0..len)
        .map(|i| {
            if i % 97 == 0 {
                1_000.0 + i as f64
            } else {
                ((i * 7919) % 101) as f64
            }
        })
        .collect()
}

fn detect_by_method(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_outliers");

    for size in [1_000, 10_000, 100_000] {
        let series = make_series(size);
        for method in OutlierMethod::ALL {
            group.bench_with_input(
                BenchmarkId::new(method.name(), size),
                &series,
                |b, s| {
                    b.iter(|| get_outliers(black_box(s), method, None).unwrap());
                },
            );
        }
    }

    group.finish();
}

fn standardize_only(c: &mut Criterion) {
    let series = make_series(100_000);
    c.bench_function("standardize_100k", |b| {
        b.iter(|| standardize(black_box(&series)).unwrap());
    });
}

criterion_group!(benches, detect_by_method, standardize_only);
criterion_main!(benches);
