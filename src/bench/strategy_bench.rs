//! Criterion comparison of the three multiply strategies.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use matmul_chain::chain::{self, ChainConfig};
use matmul_chain::threaded::{element, row};
use matmul_chain::{Matrix, Method, sequential};

fn multiply_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");

    for size in [16, 64, 128] {
        let left = Matrix::generated(size).unwrap();
        let right = Matrix::generated(size).unwrap();

        group.bench_with_input(BenchmarkId::new("sequential", size), &size, |b, _| {
            b.iter(|| sequential::multiply(black_box(&left), black_box(&right)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("row", size), &size, |b, _| {
            b.iter(|| row::multiply(black_box(&left), black_box(&right)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("element", size), &size, |b, _| {
            b.iter(|| element::multiply(black_box(&left), black_box(&right)).unwrap())
        });
    }

    group.finish();
}

fn chain_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain");

    // Short chain at one size: measures the join-before-next-iteration
    // overhead on top of the raw multiplies.
    for method in [Method::Sequential, Method::Row, Method::Element] {
        let config = ChainConfig {
            method,
            num_matrices: 4,
            size: 64,
        };
        group.bench_with_input(
            BenchmarkId::new(format!("{:?}", method), 64),
            &config,
            |b, config| b.iter(|| chain::run(black_box(config)).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, multiply_benchmark, chain_benchmark);
criterion_main!(benches);
