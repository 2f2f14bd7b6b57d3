//! Naive DCT2 implementation via explicit basis-matrix multiplication

use dct2_core::{Dct2Error, Dct2Result, Matrix};
use std::f64::consts::PI;

/// Orthonormal DCT-II basis matrix for one transform size.
///
/// Row `k`, column `i` holds `alpha_k * cos(k*pi*(2i+1)/(2N))` with
/// `alpha_0 = 1/sqrt(N)` and `alpha_k = sqrt(2/N)` for `k >= 1`. Rows are
/// pairwise orthonormal, so the inverse transform is the transpose.
#[derive(Debug, Clone)]
pub struct DctBasis {
    matrix: Matrix,
}

impl DctBasis {
    pub fn new(n: usize) -> Dct2Result<Self> {
        if n == 0 {
            return Err(Dct2Error::Parameter(
                "transform size must be at least 1".to_string(),
            ));
        }
        let mut data = vec![0.0; n * n];
        for k in 0..n {
            let alpha = if k == 0 {
                1.0 / (n as f64).sqrt()
            } else {
                (2.0 / n as f64).sqrt()
            };
            for i in 0..n {
                let angle = k as f64 * PI * (2 * i + 1) as f64 / (2 * n) as f64;
                data[k * n + i] = alpha * angle.cos();
            }
        }
        Ok(Self {
            matrix: Matrix::from_vec(n, n, data)?,
        })
    }

    pub fn size(&self) -> usize {
        self.matrix.rows()
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// 1D forward transform `y = D . x`.
    pub fn forward_1d(&self, x: &[f64]) -> Dct2Result<Vec<f64>> {
        let n = self.size();
        if x.len() != n {
            return Err(Dct2Error::Shape(format!(
                "vector of length {} does not match basis size {}",
                x.len(),
                n
            )));
        }
        let mut y = vec![0.0; n];
        for (k, out) in y.iter_mut().enumerate() {
            *out = self
                .matrix
                .row(k)
                .iter()
                .zip(x)
                .map(|(&d, &v)| d * v)
                .sum();
        }
        Ok(y)
    }
}

fn basis_for(block: &Matrix) -> Dct2Result<DctBasis> {
    if !block.is_square() {
        return Err(Dct2Error::Shape(format!(
            "transform input must be square, got {}x{}",
            block.rows(),
            block.cols()
        )));
    }
    DctBasis::new(block.rows())
}

/// 2D DCT-II (forward transform) as `D . X . D^T`.
///
/// Two dense N×N multiplications, O(N^3) per block.
pub fn forward_naive(block: &Matrix) -> Dct2Result<Matrix> {
    let basis = basis_for(block)?;
    let d = basis.matrix();
    d.multiply(block)?.multiply(&d.transpose())
}

/// 2D DCT-III (inverse transform) as `D^T . C . D`.
///
/// Exact algebraic inverse of [`forward_naive`] up to floating-point
/// rounding.
pub fn inverse_naive(coeffs: &Matrix) -> Dct2Result<Matrix> {
    let basis = basis_for(coeffs)?;
    let d = basis.matrix();
    d.transpose().multiply(coeffs)?.multiply(d)
}
