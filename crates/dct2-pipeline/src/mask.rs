//! Diagonal frequency mask

use dct2_core::{Dct2Error, Dct2Result, Matrix};

/// F×F boolean mask over 2D frequency indices.
///
/// Entry (k, l) survives iff `k + l < cutoff`, approximating a low-pass
/// filter in frequency-index space. Built once per compression run and
/// reused for every block.
#[derive(Debug, Clone)]
pub struct FrequencyMask {
    size: usize,
    cutoff: usize,
    kept: Vec<bool>,
}

impl FrequencyMask {
    pub fn new(size: usize, cutoff: usize) -> Self {
        let mut kept = vec![false; size * size];
        for k in 0..size {
            for l in 0..size {
                kept[k * size + l] = k + l < cutoff;
            }
        }
        Self { size, cutoff, kept }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cutoff(&self) -> usize {
        self.cutoff
    }

    pub fn is_kept(&self, k: usize, l: usize) -> bool {
        self.kept[k * self.size + l]
    }

    /// Number of surviving frequency pairs.
    pub fn kept_count(&self) -> usize {
        self.kept.iter().filter(|&&k| k).count()
    }

    /// Zeroes every masked-out coefficient.
    pub fn apply(&self, coeffs: &Matrix) -> Dct2Result<Matrix> {
        if coeffs.rows() != self.size || coeffs.cols() != self.size {
            return Err(Dct2Error::Shape(format!(
                "mask of size {} cannot apply to {}x{} coefficients",
                self.size,
                coeffs.rows(),
                coeffs.cols()
            )));
        }
        let mut out = coeffs.clone();
        for k in 0..self.size {
            for l in 0..self.size {
                if !self.kept[k * self.size + l] {
                    out[(k, l)] = 0.0;
                }
            }
        }
        Ok(out)
    }
}
