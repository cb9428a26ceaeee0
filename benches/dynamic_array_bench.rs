use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use dynarray::config::{Config, DynamicArrayConfig};
use dynarray::containers::{CloneOps, DynamicArray, ShrinkStrategy};

fn filled(size: u64, config: DynamicArrayConfig) -> DynamicArray<u64> {
    let mut arr = DynamicArray::with_config(config, CloneOps).unwrap();
    for i in 0..size {
        arr.append(&i);
    }
    arr
}

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("dynamic_array_append");

    for size in [100u64, 1_000, 10_000, 100_000].iter() {
        let size = *size;

        group.throughput(Throughput::Elements(size));

        group.bench_with_input(
            BenchmarkId::new("DynamicArray::append", size),
            &size,
            |b, &size| {
                b.iter(|| {
                    let mut arr = DynamicArray::new(4, 0.25, CloneOps).unwrap();
                    for i in 0..size {
                        arr.append(black_box(&i));
                    }
                    arr
                });
            },
        );

        // Baseline
        group.bench_with_input(
            BenchmarkId::new("std::Vec::push", size),
            &size,
            |b, &size| {
                b.iter(|| {
                    let mut vec = Vec::new();
                    for i in 0..size {
                        vec.push(black_box(i));
                    }
                    vec
                });
            },
        );
    }

    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("dynamic_array_get");

    for size in [1_000u64, 100_000].iter() {
        let size = *size;
        let arr = filled(size, DynamicArrayConfig::default());

        group.throughput(Throughput::Elements(size));

        group.bench_with_input(BenchmarkId::new("get_forward", size), &arr, |b, arr| {
            b.iter(|| {
                let mut sum = 0u64;
                for pos in 0..size as isize {
                    sum += arr.get(black_box(pos)).unwrap_or(0);
                }
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("get_all", size), &arr, |b, arr| {
            b.iter(|| black_box(arr.get_all()));
        });
    }

    group.finish();
}

fn bench_bulk_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("dynamic_array_bulk_delete");

    for strategy in [ShrinkStrategy::SingleExtraHalving, ShrinkStrategy::Fixpoint] {
        let config = DynamicArrayConfig {
            shrink_strategy: strategy,
            ..DynamicArrayConfig::default()
        };

        // Every tenth element survives
        group.bench_function(BenchmarkId::new("delete_matching", strategy), |b| {
            b.iter_batched(
                || {
                    let mut arr = DynamicArray::with_config(config.clone(), CloneOps).unwrap();
                    for i in 0..50_000u64 {
                        arr.append(&if i % 10 == 0 { i } else { u64::MAX });
                    }
                    arr
                },
                |mut arr| {
                    arr.delete(black_box(&u64::MAX));
                    arr
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("dynamic_array_churn");

    for (name, config) in [
        ("balanced", DynamicArrayConfig::balanced_preset()),
        ("performance", DynamicArrayConfig::performance_preset()),
        ("memory", DynamicArrayConfig::memory_preset()),
    ] {
        // Oscillate around a capacity boundary to exercise grow/shrink cycles
        group.bench_function(name, |b| {
            b.iter_batched(
                || filled(1_000, config.clone()),
                |mut arr| {
                    for round in 0..100u64 {
                        for i in 0..900 {
                            arr.append(&(round * 1_000 + i));
                        }
                        for _ in 0..900 {
                            arr.delete_at(-1).unwrap();
                        }
                    }
                    arr
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_append, bench_get, bench_bulk_delete, bench_churn);
criterion_main!(benches);
