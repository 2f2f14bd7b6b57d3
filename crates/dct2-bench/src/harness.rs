//! Benchmark harness driving both kernel variants
//!
//! Each size gets a deterministic pseudo-random input; each variant runs
//! several repetitions inside several independent trials, and the
//! minimum trial duration is kept. The minimum is less sensitive to
//! timer noise than a mean or median.

use crate::BenchmarkRecord;
use dct2_core::consts::{BENCH_REPS, BENCH_SEED, BENCH_TRIALS, MIN_SIZE_EXP};
use dct2_core::{Dct2Error, Dct2Result, Matrix};
use dct2_transform::{forward_fast, forward_naive};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// The conventional geometric size sequence 2^3 .. 2^max(3, max_exp).
pub fn default_sizes(max_exp: u32) -> Vec<usize> {
    let max_exp = max_exp.max(MIN_SIZE_EXP);
    (MIN_SIZE_EXP..=max_exp).map(|e| 1usize << e).collect()
}

/// Draws an N×N matrix of integer intensities in [0, 256).
pub fn random_matrix(rng: &mut StdRng, size: usize) -> Dct2Result<Matrix> {
    let data = (0..size * size)
        .map(|_| rng.gen_range(0..256) as f64)
        .collect();
    Matrix::from_vec(size, size, data)
}

fn best_of_trials<F: FnMut() -> Dct2Result<()>>(mut op: F) -> Dct2Result<Duration> {
    let mut best = Duration::MAX;
    for _ in 0..BENCH_TRIALS {
        let start = Instant::now();
        for _ in 0..BENCH_REPS {
            op()?;
        }
        best = best.min(start.elapsed());
    }
    Ok(best)
}

/// Times both kernel variants over the given sizes.
///
/// Sizes must be positive and pairwise distinct; they are processed in
/// the given order. Inputs are reproducible across runs: one generator
/// seeded with a fixed constant feeds the whole sequence.
pub fn benchmark(sizes: &[usize]) -> Dct2Result<Vec<BenchmarkRecord>> {
    let mut seen = HashSet::new();
    for &size in sizes {
        if size == 0 {
            return Err(Dct2Error::Parameter(
                "benchmark sizes must be positive".to_string(),
            ));
        }
        if !seen.insert(size) {
            return Err(Dct2Error::DuplicateSize(size));
        }
    }

    let mut rng = StdRng::seed_from_u64(BENCH_SEED);
    let mut records = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let input = random_matrix(&mut rng, size)?;
        let naive = best_of_trials(|| {
            black_box(forward_naive(black_box(&input))?);
            Ok(())
        })?;
        let fast = best_of_trials(|| {
            black_box(forward_fast(black_box(&input))?);
            Ok(())
        })?;
        records.push(BenchmarkRecord { size, naive, fast });
    }
    Ok(records)
}
