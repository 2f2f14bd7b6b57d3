//! Benchmark the block compression pipeline end to end

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use dct2_core::Matrix;
use dct2_pipeline::{compress, CompressorOptions};
use dct2_transform::DctAlgorithm;

fn gradient(rows: usize, cols: usize) -> Matrix {
    let mut m = Matrix::zeros(rows, cols).unwrap();
    for r in 0..rows {
        for c in 0..cols {
            m[(r, c)] = ((r * 255 / rows) as f64 + (c * 255 / cols) as f64) / 2.0;
        }
    }
    m
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("Block Compression");

    for &size in &[64usize, 128, 256] {
        let image = gradient(size, size);
        group.throughput(Throughput::Elements((size * size) as u64));

        group.bench_function(format!("fast_{}x{}", size, size), |b| {
            let options = CompressorOptions::new().algorithm(DctAlgorithm::Fast);
            b.iter(|| compress(black_box(&image), black_box(&options)).unwrap());
        });

        group.bench_function(format!("naive_{}x{}", size, size), |b| {
            let options = CompressorOptions::new().algorithm(DctAlgorithm::Naive);
            b.iter(|| compress(black_box(&image), black_box(&options)).unwrap());
        });
    }

    group.finish();
}

fn bench_mask_cutoffs(c: &mut Criterion) {
    let mut group = c.benchmark_group("Cutoff Sweep");
    let image = gradient(128, 128);

    for &cutoff in &[1usize, 4, 10, 16] {
        group.bench_function(format!("d_{}", cutoff), |b| {
            let options = CompressorOptions::new().cutoff(cutoff);
            b.iter(|| compress(black_box(&image), black_box(&options)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compress, bench_mask_cutoffs);
criterion_main!(benches);
