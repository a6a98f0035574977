//! Criterion benchmarks comparing the five solvers.
//!
//! Runs every algorithm at two board sizes with a fixed seed so the
//! stochastic solvers measure a reproducible trajectory.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nqueens_search::solve::{solve, Algorithm, SolveOptions};

fn bench_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("nqueens");
    for n in [5usize, 8] {
        let options = SolveOptions::new(n).with_seed(42);
        for algorithm in Algorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), n),
                &options,
                |b, options| b.iter(|| solve(algorithm, options).expect("valid options")),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_solvers);
criterion_main!(benches);
