use std::collections::LinkedList;
use std::hint::black_box;
use std::time::{Duration, Instant};

use bench::{
    ALL_DISTRIBUTIONS, KeyDistribution, apply_large_runtime_config, apply_medium_runtime_config,
    apply_small_runtime_config, default_rng, generate_keys,
};
use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, BenchmarkId, Criterion, criterion_group, criterion_main};
use list_sort::{ListArena, SortContext, algorithm_name, all_algorithms, sort_list_with_ctx};

const BENCH_SIZES: [usize; 3] = [1_024, 16_384, 100_000];
// Pivot = first node degrades to quadratic on presorted input.
const PRESORTED_SIZES: [usize; 2] = [256, 2_048];

fn apply_runtime_config_for_size<M: Measurement>(size: usize, group: &mut BenchmarkGroup<'_, M>) {
    if size <= 2_048 {
        apply_small_runtime_config(group);
    } else if size <= 16_384 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

fn sizes_for(dist: KeyDistribution) -> &'static [usize] {
    match dist {
        KeyDistribution::Sorted | KeyDistribution::Reversed => &PRESORTED_SIZES,
        KeyDistribution::Shuffled | KeyDistribution::FewDistinct => &BENCH_SIZES,
    }
}

fn bench_list_sort(c: &mut Criterion) {
    let mut rng = default_rng();

    for &dist in &ALL_DISTRIBUTIONS {
        let mut group = c.benchmark_group(format!("list_sort/{}", dist.label()));

        for &size in sizes_for(dist) {
            apply_runtime_config_for_size(size, &mut group);
            let base = generate_keys(dist, size, &mut rng);

            for &algo in all_algorithms() {
                group.bench_function(BenchmarkId::new(algorithm_name(algo), size), |bencher| {
                    bencher.iter_custom(|iters| {
                        let mut total = Duration::ZERO;
                        let mut ctx = SortContext::default();
                        for _ in 0..iters {
                            let mut arena = ListArena::with_capacity(base.len());
                            let list = arena.from_keys(base.iter().copied());
                            let start = Instant::now();
                            let sorted = sort_list_with_ctx(algo, &mut arena, list, &mut ctx);
                            total += start.elapsed();
                            black_box(arena.first(&sorted));
                        }
                        total
                    });
                });
            }

            group.bench_function(BenchmarkId::new("std_linked_list", size), |bencher| {
                bencher.iter_custom(|iters| {
                    let mut total = Duration::ZERO;
                    for _ in 0..iters {
                        let list = base.iter().copied().collect::<LinkedList<_>>();
                        let start = Instant::now();
                        let mut buf = list.into_iter().collect::<Vec<_>>();
                        buf.sort_unstable();
                        let sorted = buf.into_iter().collect::<LinkedList<_>>();
                        total += start.elapsed();
                        black_box(&sorted);
                    }
                    total
                });
            });

            group.bench_function(BenchmarkId::new("std_unstable", size), |bencher| {
                bencher.iter_custom(|iters| {
                    let mut total = Duration::ZERO;
                    for _ in 0..iters {
                        let mut data = base.clone();
                        let start = Instant::now();
                        data.sort_unstable();
                        total += start.elapsed();
                        black_box(&data);
                    }
                    total
                });
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_list_sort);
criterion_main!(benches);
