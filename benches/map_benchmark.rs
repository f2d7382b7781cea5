/*!
 * Counting Map Benchmarks
 *
 * Compare mutex, read/write lock and sharded concurrent map under a
 * write-only concurrent workload
 */

use concurrency_probes::collections::{build_map, CollectionsConfig, CountingMap, MapVariant};
use concurrency_probes::TaskGroup;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_concurrent_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_insert");

    for workers in [1, 4, 16, 50] {
        let config = CollectionsConfig {
            workers,
            keys_per_worker: 1000,
            presize: false,
        };

        for variant in MapVariant::ALL {
            group.bench_with_input(
                BenchmarkId::new(variant.label(), workers),
                &config,
                |b, config| {
                    b.iter(|| {
                        let map = build_map(variant, config);
                        TaskGroup::new("bench", config.workers)
                            .run(|worker| {
                                for i in 0..config.keys_per_worker {
                                    map.set(config.key_for(worker, i), i);
                                }
                            })
                            .ok();
                        black_box(map.len())
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_len_under_read_lock(c: &mut Criterion) {
    let mut group = c.benchmark_group("len");
    let config = CollectionsConfig::default();

    for variant in MapVariant::ALL {
        let map = build_map(variant, &config);
        for key in 0..config.expected_len() as u64 {
            map.set(key, key);
        }

        group.bench_function(variant.label(), |b| {
            b.iter(|| black_box(map.len()));
        });
    }

    group.finish();
}

fn bench_single_writer(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_writer_set");

    for variant in MapVariant::ALL {
        let map = build_map(variant, &CollectionsConfig::default());
        let mut key = 0u64;

        group.bench_function(variant.label(), |b| {
            b.iter(|| {
                map.set(black_box(key), key);
                key = key.wrapping_add(1) % 65_536;
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_concurrent_insert,
    bench_len_under_read_lock,
    bench_single_writer
);

criterion_main!(benches);
