//! Benchmark for Balloon Hashing

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use balloon_core::{Balloon, Blake3, Params, Sha256};

fn bench_hash(c: &mut Criterion) {
    let hasher = Balloon::new(Sha256, Params::default());

    c.bench_function("balloon_sha256_default", |b| {
        b.iter(|| hasher.hash(black_box(b"benchmark password"), black_box(b"salt")))
    });
}

fn bench_primitives(c: &mut Criterion) {
    let params = Params::new(1024, 3, 1).unwrap();
    let sha = Balloon::new(Sha256, params);
    let blake = Balloon::new(Blake3, params);

    let mut group = c.benchmark_group("balloon_primitive");
    group.bench_function("sha256", |b| {
        b.iter(|| sha.hash(black_box(b"password"), black_box(b"salt")))
    });
    group.bench_function("blake3", |b| {
        b.iter(|| blake.hash(black_box(b"password"), black_box(b"salt")))
    });
    group.finish();
}

fn bench_parallel_cost(c: &mut Criterion) {
    let mut group = c.benchmark_group("balloon_parallel_cost");

    for parallel in [1u32, 2, 4, 8] {
        let hasher = Balloon::new(Sha256, Params::new(1024, 3, parallel).unwrap());
        group.bench_with_input(BenchmarkId::from_parameter(parallel), &hasher, |b, hasher| {
            b.iter(|| hasher.hash(black_box(b"password"), black_box(b"salt")))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hash, bench_primitives, bench_parallel_cost);
criterion_main!(benches);
