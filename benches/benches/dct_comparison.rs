//! Benchmark comparing naive vs fast DCT2 implementations
//!
//! Run with: cargo bench --bench dct_comparison

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use dct2_core::Matrix;
use dct2_transform::{forward_fast, forward_naive, inverse_fast, inverse_naive};

fn pattern(n: usize) -> Matrix {
    Matrix::from_vec(n, n, (0..n * n).map(|i| ((i * 7) % 256) as f64).collect()).unwrap()
}

fn bench_dct_8x8_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("DCT 8x8 Comparison");
    let input = pattern(8);
    let coeffs = forward_naive(&input).unwrap();

    group.bench_function("naive_forward", |b| {
        b.iter(|| forward_naive(black_box(&input)).unwrap());
    });

    group.bench_function("fast_forward", |b| {
        b.iter(|| forward_fast(black_box(&input)).unwrap());
    });

    group.bench_function("naive_inverse", |b| {
        b.iter(|| inverse_naive(black_box(&coeffs)).unwrap());
    });

    group.bench_function("fast_inverse", |b| {
        b.iter(|| inverse_fast(black_box(&coeffs)).unwrap());
    });

    group.finish();
}

fn bench_dct_size_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("DCT Size Scaling");

    for &size in &[8usize, 16, 32, 64, 128] {
        let input = pattern(size);
        group.throughput(Throughput::Elements((size * size) as u64));

        group.bench_function(format!("naive_{}x{}", size, size), |b| {
            b.iter(|| forward_naive(black_box(&input)).unwrap());
        });

        group.bench_function(format!("fast_{}x{}", size, size), |b| {
            b.iter(|| forward_fast(black_box(&input)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dct_8x8_comparison, bench_dct_size_scaling);
criterion_main!(benches);
