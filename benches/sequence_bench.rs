//! Benchmark for Sequence monadic primitives vs raw iterator pipelines.
//!
//! Compares bind/fold through the type class surface against the
//! equivalent `VecDeque` iterator chains, across input sizes.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use seqmonad::sequence::Sequence;
use seqmonad::typeclass::{Applicative, Foldable, Monad};
use std::collections::VecDeque;
use std::hint::black_box;

// =============================================================================
// flat_map Benchmark
// =============================================================================

fn benchmark_flat_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("flat_map");

    for size in [100, 1000, 10000] {
        let sequence: Sequence<i64> = (0..size).collect();
        let deque: VecDeque<i64> = (0..size).collect();

        group.bench_with_input(
            BenchmarkId::new("Sequence", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let expanded = sequence
                        .clone()
                        .flat_map(|n| [n, n + 1].into_iter().collect::<Sequence<i64>>());
                    black_box(expanded)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("VecDeque_iter", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let expanded: VecDeque<i64> =
                        deque.clone().into_iter().flat_map(|n| [n, n + 1]).collect();
                    black_box(expanded)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// fold_left Benchmark
// =============================================================================

fn benchmark_fold_left(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("fold_left");

    for size in [100, 1000, 10000] {
        let sequence: Sequence<i64> = (0..size).collect();
        let deque: VecDeque<i64> = (0..size).collect();

        group.bench_with_input(
            BenchmarkId::new("Sequence", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let sum = sequence
                        .clone()
                        .fold_left(0_i64, |accumulator, element| accumulator + element);
                    black_box(sum)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("VecDeque_fold", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let sum = deque
                        .clone()
                        .into_iter()
                        .fold(0_i64, |accumulator, element| accumulator + element);
                    black_box(sum)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// map2 Benchmark (cartesian, quadratic output)
// =============================================================================

fn benchmark_map2(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map2");

    for size in [10, 100] {
        let sequence: Sequence<i64> = (0..size).collect();

        group.bench_with_input(
            BenchmarkId::new("Sequence", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let spread = sequence.clone().map2(sequence.clone(), |left, right| {
                        let difference = left - right;
                        difference * difference
                    });
                    black_box(spread)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_flat_map,
    benchmark_fold_left,
    benchmark_map2
);
criterion_main!(benches);
