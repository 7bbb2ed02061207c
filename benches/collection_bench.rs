//! Collection and DistinctCollection operation benchmarks.
//!
//! Measures incremental construction, membership probes, filtering, and the
//! trusted vs checked restore paths. Membership is a linear scan, so
//! constructing n elements through the validated path is expected to scale
//! quadratically.
//!
//! Pre-generated Vec is reused via clone() in setup to avoid regeneration
//! overhead and ensure consistent benchmark data across iterations.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use orderly::collection::Collection;
use orderly::distinct::DistinctCollection;
use std::hint::black_box;

const SIZES: [i32; 3] = [10, 100, 1000];

fn generate_elements(size: i32) -> Vec<i32> {
    (0..size).collect()
}

fn identity_key(element: &i32) -> i32 {
    *element
}

/// Returns the appropriate BatchSize based on input size.
fn batch_size_for(size: i32) -> BatchSize {
    if size < 1000 {
        BatchSize::SmallInput
    } else {
        BatchSize::LargeInput
    }
}

fn benchmark_collection_add(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("collection_add");

    for size in SIZES {
        let base_vec = generate_elements(size);
        group.bench_with_input(BenchmarkId::new("add", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || base_vec.clone(),
                |elements| {
                    let mut collection = Collection::new();
                    for element in elements {
                        black_box(collection.add(black_box(element)));
                    }
                    collection
                },
                batch_size_for(size),
            );
        });
    }

    group.finish();
}

fn benchmark_collection_contains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("collection_contains");

    for size in SIZES {
        let collection: Collection<i32> = generate_elements(size).into();
        // The probe is never contained, forcing a full scan.
        group.bench_with_input(
            BenchmarkId::new("contains_absent", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| black_box(collection.contains(black_box(&size))));
            },
        );
    }

    group.finish();
}

fn benchmark_collection_filter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("collection_filter");

    for size in SIZES {
        let collection: Collection<i32> = generate_elements(size).into();
        group.bench_function(BenchmarkId::new("filter_even", size), |bencher| {
            bencher.iter(|| black_box(collection.filter(|element| element % 2 == 0)));
        });
    }

    group.finish();
}

fn benchmark_distinct_add(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("distinct_collection_add");

    for size in SIZES {
        let base_vec = generate_elements(size);
        group.bench_with_input(
            BenchmarkId::new("add_distinct_keys", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || base_vec.clone(),
                    |elements| {
                        let mut collection = DistinctCollection::new(identity_key);
                        for element in elements {
                            let _ = black_box(collection.add(black_box(element)));
                        }
                        collection
                    },
                    batch_size_for(size),
                );
            },
        );
    }

    group.finish();
}

fn benchmark_restore_paths(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("distinct_collection_restore");

    for size in SIZES {
        let base_vec = generate_elements(size);

        group.bench_with_input(
            BenchmarkId::new("trusted", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || (DistinctCollection::new(identity_key), base_vec.clone()),
                    |(mut collection, elements)| {
                        collection.restore(black_box(elements));
                        collection
                    },
                    batch_size_for(size),
                );
            },
        );

        group.bench_with_input(
            BenchmarkId::new("checked", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || (DistinctCollection::new(identity_key), base_vec.clone()),
                    |(mut collection, elements)| {
                        let _ = collection.restore_checked(black_box(elements));
                        collection
                    },
                    batch_size_for(size),
                );
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_collection_add,
    benchmark_collection_contains,
    benchmark_collection_filter,
    benchmark_distinct_add,
    benchmark_restore_paths
);

criterion_main!(benches);
