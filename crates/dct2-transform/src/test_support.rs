//! Shared fixtures and tolerance helpers for kernel tests
//!
//! The literal row and matrix below are standard DCT-II verification
//! vectors with their expected orthonormal coefficients.

use dct2_core::Matrix;

pub const TEST_ROW: [f64; 8] = [231.0, 32.0, 233.0, 161.0, 24.0, 71.0, 140.0, 245.0];

pub const TEST_ROW_DCT: [f64; 8] = [4.01e2, 6.60, 1.09e2, -1.12e2, 6.54e1, 1.21e2, 1.16e2, 2.88e1];

pub const TEST_MATRIX: [[f64; 8]; 8] = [
    [231.0, 32.0, 233.0, 161.0, 24.0, 71.0, 140.0, 245.0],
    [247.0, 40.0, 248.0, 245.0, 124.0, 204.0, 36.0, 107.0],
    [234.0, 202.0, 245.0, 167.0, 9.0, 217.0, 239.0, 173.0],
    [193.0, 190.0, 100.0, 167.0, 43.0, 180.0, 8.0, 70.0],
    [11.0, 24.0, 210.0, 177.0, 81.0, 243.0, 8.0, 112.0],
    [97.0, 195.0, 203.0, 47.0, 125.0, 114.0, 165.0, 181.0],
    [193.0, 70.0, 174.0, 167.0, 41.0, 30.0, 127.0, 245.0],
    [87.0, 149.0, 57.0, 192.0, 65.0, 129.0, 178.0, 228.0],
];

pub const TEST_MATRIX_DCT: [[f64; 8]; 8] = [
    [1.11e3, 4.40e1, 7.59e1, -1.38e2, 3.50, 1.22e2, 1.95e2, -1.01e2],
    [7.71e1, 1.14e2, -2.18e1, 4.13e1, 8.77, 9.90e1, 1.38e2, 1.09e1],
    [4.48e1, -6.27e1, 1.11e2, -7.63e1, 1.24e2, 9.55e1, -3.98e1, 5.85e1],
    [-6.99e1, -4.02e1, -2.34e1, -7.67e1, 2.66e1, -3.68e1, 6.61e1, 1.25e2],
    [-1.09e2, -4.33e1, -5.55e1, 8.17, 3.02e1, -2.86e1, 2.44, -9.41e1],
    [-5.38, 5.66e1, 1.73e2, -3.54e1, 3.23e1, 3.34e1, -5.81e1, 1.90e1],
    [7.88e1, -6.45e1, 1.18e2, -1.50e1, -1.37e2, -3.06e1, -1.05e2, 3.98e1],
    [1.97e1, -7.81e1, 9.72e-1, -7.23e1, -2.15e1, 8.13e1, 6.37e1, 5.90],
];

pub fn matrix_from_table(table: &[[f64; 8]; 8]) -> Matrix {
    let rows: Vec<Vec<f64>> = table.iter().map(|r| r.to_vec()).collect();
    Matrix::from_rows(&rows).unwrap()
}

/// Elementwise `|got - expected| <= atol + rtol * |expected|` check.
pub fn assert_matrix_close(got: &Matrix, expected: &Matrix, rtol: f64, atol: f64) {
    assert_eq!(got.rows(), expected.rows());
    assert_eq!(got.cols(), expected.cols());
    for r in 0..got.rows() {
        for c in 0..got.cols() {
            let (g, e) = (got[(r, c)], expected[(r, c)]);
            assert!(
                (g - e).abs() <= atol + rtol * e.abs(),
                "mismatch at ({}, {}): got {}, expected {}",
                r,
                c,
                g,
                e
            );
        }
    }
}

/// Row check at the verification tolerances (rtol 1e-2, atol 1e-1).
pub fn assert_row_close(got: &[f64], expected: &[f64]) {
    assert_eq!(got.len(), expected.len());
    for (i, (g, e)) in got.iter().zip(expected).enumerate() {
        assert!(
            (g - e).abs() <= 1e-1 + 1e-2 * e.abs(),
            "mismatch at {}: got {}, expected {}",
            i,
            g,
            e
        );
    }
}
