// Criterion benchmarks: amortized push_back vs. pre-reserved storage, and front insertion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dynvec::Vector;
use rand::Rng;

fn random_input(len: usize) -> Vec<u64> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen()).collect()
}

fn push_from_empty(data: &[u64]) -> Vector<u64> {
    let mut v = Vector::new();
    for &x in data {
        v.push_back(x);
    }
    v
}

fn push_reserved(data: &[u64]) -> Vector<u64> {
    let mut v = Vector::with_capacity(data.len());
    for &x in data {
        v.push_back(x);
    }
    v
}

fn insert_front(data: &[u64]) -> Vector<u64> {
    let mut v = Vector::new();
    for &x in data {
        // index 0 is always within [0, size]
        let _ = v.insert(0, x);
    }
    v
}

fn benchmark_push_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back");

    for len in [100, 1_000, 10_000] {
        let data = random_input(len);

        group.bench_with_input(BenchmarkId::new("from_empty", len), &data, |b, data| {
            b.iter(|| push_from_empty(black_box(data)))
        });

        group.bench_with_input(BenchmarkId::new("reserved", len), &data, |b, data| {
            b.iter(|| push_reserved(black_box(data)))
        });
    }

    group.finish();
}

fn benchmark_insert_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_front");

    for len in [100, 1_000] {
        let data = random_input(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &data, |b, data| {
            b.iter(|| insert_front(black_box(data)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_push_back, benchmark_insert_front);
criterion_main!(benches);
