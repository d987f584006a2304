use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use numat::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

fn random_rows(rng: &mut StdRng, n: usize, density: f64) -> Vec<Vec<f64>> {
    (0..n)
        .map(|r| {
            (0..n)
                .map(|c| {
                    if r == c || rng.random_bool(density) {
                        rng.random_range(0.5..1.0)
                    } else {
                        0.0
                    }
                })
                .collect()
        })
        .collect()
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("dense-to-csc");
    let mut rng = StdRng::seed_from_u64(0xc0ff33);
    for n in [64, 256, 512] {
        let dense = DenseMatrix::from_rows(&random_rows(&mut rng, n, 0.05)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &dense, |b, m| {
            b.iter(|| black_box(m.to_sparse().unwrap()))
        });
    }
    group.finish();
}

fn bench_densify(c: &mut Criterion) {
    let mut group = c.benchmark_group("csc-to-dense");
    let mut rng = StdRng::seed_from_u64(0xc0ff33);
    for n in [64, 256, 512] {
        let sparse = CscMatrix::from_rows(&random_rows(&mut rng, n, 0.05)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &sparse, |b, m| {
            b.iter(|| black_box(m.to_dense()))
        });
    }
    group.finish();
}

fn bench_maths_eq(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let rows = random_rows(&mut rng, 256, 0.05);
    let sparse = Matrix::from(CscMatrix::from_rows(&rows).unwrap());
    let dense = Matrix::from(DenseMatrix::from_rows(&rows).unwrap().to_complex());
    c.bench_function("maths-eq-256-sparse-vs-complex-dense", |b| {
        b.iter(|| black_box(sparse.maths_eq(&dense)))
    });
}

criterion_group!(benches, bench_compress, bench_densify, bench_maths_eq);
criterion_main!(benches);
