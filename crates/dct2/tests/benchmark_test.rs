//! Integration tests for the benchmark harness

use approx::assert_abs_diff_eq;
use dct2::{
    benchmark, default_sizes, format_table, random_matrix, reference_curves, Dct2Error,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

#[test]
fn test_default_sizes_are_doubling_powers_of_two() {
    let sizes = default_sizes(12);
    assert_eq!(sizes.first(), Some(&8));
    assert_eq!(sizes.last(), Some(&4096));
    for pair in sizes.windows(2) {
        assert_eq!(pair[1], pair[0] * 2);
    }
}

#[test]
fn test_benchmark_small_run() {
    let records = benchmark(&[4, 8, 16]).unwrap();
    assert_eq!(records.len(), 3);
    for (record, &size) in records.iter().zip(&[4usize, 8, 16]) {
        assert_eq!(record.size, size);
        assert!(record.naive > Duration::ZERO);
        assert!(record.fast > Duration::ZERO);
    }
}

#[test]
fn test_benchmark_duplicate_sizes_rejected() {
    match benchmark(&[8, 16, 16]) {
        Err(Dct2Error::DuplicateSize(16)) => {}
        other => panic!("expected DuplicateSize(16), got {:?}", other),
    }
}

#[test]
fn test_benchmark_inputs_reproducible() {
    let seed = dct2::consts::BENCH_SEED;
    let mut a = StdRng::seed_from_u64(seed);
    let mut b = StdRng::seed_from_u64(seed);
    assert_eq!(
        random_matrix(&mut a, 8).unwrap(),
        random_matrix(&mut b, 8).unwrap()
    );
}

#[test]
fn test_table_and_curves_from_one_run() {
    let records = benchmark(&[4, 8]).unwrap();
    let table = format_table(&records);
    assert!(table.contains("Naive [s]"));
    assert!(table.contains("Fast [s]"));

    let curves = reference_curves(&records);
    assert_eq!(curves.sizes, vec![4, 8]);
    let cubic_peak = curves.cubic.iter().fold(0.0f64, |a, &b| a.max(b));
    let naive_peak = records
        .iter()
        .map(|r| r.naive.as_secs_f64())
        .fold(0.0, f64::max);
    assert_abs_diff_eq!(cubic_peak, naive_peak, epsilon = 1e-12);
}
