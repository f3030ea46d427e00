// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};

use contig::Vector;

// Fast mode: FAST_BENCH=1 cargo bench -p benchmarks --bench vector
fn is_fast_mode() -> bool {
    std::env::var("FAST_BENCH")
        .map(|v| v == "1")
        .unwrap_or(false)
}

fn configure_group(group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>) {
    if is_fast_mode() {
        group.measurement_time(std::time::Duration::from_millis(500));
        group.sample_size(10);
    } else {
        group.measurement_time(std::time::Duration::from_secs(3));
        group.sample_size(50);
    }
}

const SIZES: [usize; 4] = [100, 1_000, 10_000, 100_000];

// =============================================================================
// push_back with growth
// =============================================================================

fn bench_push_back_growing(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back_growing");
    configure_group(&mut group);

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..s {
                    vec.push(i as u64);
                }
                black_box(vec)
            });
        });

        group.bench_with_input(BenchmarkId::new("Vector", size), &size, |b, &s| {
            b.iter(|| {
                let mut vector = Vector::new();
                for i in 0..s {
                    vector.push_back(i as u64).expect("Failed to push_back(..)");
                }
                black_box(vector)
            });
        });
    }

    group.finish();
}

// =============================================================================
// push_back into reserved capacity
// =============================================================================

fn bench_push_back_reserved(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back_reserved");
    configure_group(&mut group);

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            let mut vec = Vec::with_capacity(s);
            b.iter(|| {
                vec.clear();
                for i in 0..s {
                    vec.push(i as u64);
                }
                black_box(&vec);
            });
        });

        group.bench_with_input(BenchmarkId::new("Vector", size), &size, |b, &s| {
            let mut vector = Vector::with_capacity(s).expect("Failed to with_capacity(..)");
            b.iter(|| {
                vector.clear();
                for i in 0..s {
                    vector.push_back(i as u64).expect("Failed to push_back(..)");
                }
                black_box(&vector);
            });
        });
    }

    group.finish();
}

// =============================================================================
// clone of heap-owning elements
// =============================================================================

fn bench_clone_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone_strings");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000] {
        let source: Vec<String> = (0..size).map(|i| format!("item-{i}")).collect();
        let vector = Vector::from_slice(&source).expect("Failed to from_slice(..)");

        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &source, |b, s| {
            b.iter(|| black_box(s.clone()));
        });

        group.bench_with_input(BenchmarkId::new("Vector", size), &vector, |b, v| {
            b.iter(|| black_box(v.try_clone().expect("Failed to try_clone()")));
        });
    }

    group.finish();
}

// =============================================================================
// shrink_to_fit after truncation
// =============================================================================

fn bench_shrink_to_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("shrink_to_fit");
    configure_group(&mut group);

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64 / 2));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter_batched(
                || {
                    let mut vec = vec![0u64; s];
                    vec.truncate(s / 2);
                    vec
                },
                |mut vec| {
                    vec.shrink_to_fit();
                    black_box(vec)
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("Vector", size), &size, |b, &s| {
            b.iter_batched(
                || {
                    let mut vector = Vector::from_elem(s, 0u64).expect("Failed to from_elem(..)");
                    vector.truncate(s / 2);
                    vector
                },
                |mut vector| {
                    vector.shrink_to_fit().expect("Failed to shrink_to_fit()");
                    black_box(vector)
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_push_back_growing,
    bench_push_back_reserved,
    bench_clone_strings,
    bench_shrink_to_fit,
);
criterion_main!(benches);
