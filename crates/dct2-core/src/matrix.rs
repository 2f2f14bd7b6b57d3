//! Intensity matrix data structure

use crate::{Dct2Error, Dct2Result};
use std::ops::{Index, IndexMut};

/// A rectangular, non-empty 2D array of real-valued samples.
///
/// Samples logically represent intensities in [0, 255] but are stored as
/// `f64` so transform coefficients and intermediate values share one type.
/// Data is row-major.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a zero-filled matrix.
    pub fn zeros(rows: usize, cols: usize) -> Dct2Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Dct2Error::Shape(format!(
                "matrix dimensions must be non-zero, got {}x{}",
                rows, cols
            )));
        }
        Ok(Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        })
    }

    /// Creates a matrix from a row-major buffer.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Dct2Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Dct2Error::Shape(format!(
                "matrix dimensions must be non-zero, got {}x{}",
                rows, cols
            )));
        }
        if data.len() != rows * cols {
            return Err(Dct2Error::Shape(format!(
                "buffer of length {} does not fill a {}x{} matrix",
                data.len(),
                rows,
                cols
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates a matrix from nested rows. All rows must have equal length.
    pub fn from_rows(rows: &[Vec<f64>]) -> Dct2Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        if rows.iter().any(|r| r.len() != width) {
            return Err(Dct2Error::Shape("rows have unequal lengths".to_string()));
        }
        let data: Vec<f64> = rows.iter().flatten().copied().collect();
        Self::from_vec(height, width, data)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Row `r` as a contiguous slice.
    pub fn row(&self, r: usize) -> &[f64] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Returns the transposed matrix.
    pub fn transpose(&self) -> Matrix {
        let mut out = vec![0.0; self.data.len()];
        for r in 0..self.rows {
            for c in 0..self.cols {
                out[c * self.rows + r] = self.data[r * self.cols + c];
            }
        }
        Matrix {
            rows: self.cols,
            cols: self.rows,
            data: out,
        }
    }

    /// Dense matrix product `self * other`.
    pub fn multiply(&self, other: &Matrix) -> Dct2Result<Matrix> {
        if self.cols != other.rows {
            return Err(Dct2Error::Shape(format!(
                "cannot multiply {}x{} by {}x{}",
                self.rows, self.cols, other.rows, other.cols
            )));
        }
        let mut out = Matrix {
            rows: self.rows,
            cols: other.cols,
            data: vec![0.0; self.rows * other.cols],
        };
        for r in 0..self.rows {
            for k in 0..self.cols {
                let lhs = self.data[r * self.cols + k];
                let row = &other.data[k * other.cols..(k + 1) * other.cols];
                let dst = &mut out.data[r * other.cols..(r + 1) * other.cols];
                for (d, &rhs) in dst.iter_mut().zip(row) {
                    *d += lhs * rhs;
                }
            }
        }
        Ok(out)
    }

    /// Copies the `size`x`size` block whose top-left corner is (`top`, `left`).
    pub fn copy_block(&self, top: usize, left: usize, size: usize) -> Matrix {
        assert!(top + size <= self.rows && left + size <= self.cols);
        let mut data = Vec::with_capacity(size * size);
        for r in 0..size {
            let start = (top + r) * self.cols + left;
            data.extend_from_slice(&self.data[start..start + size]);
        }
        Matrix {
            rows: size,
            cols: size,
            data,
        }
    }

    /// Writes `block` into this matrix with its top-left corner at (`top`, `left`).
    pub fn write_block(&mut self, top: usize, left: usize, block: &Matrix) {
        assert!(top + block.rows <= self.rows && left + block.cols <= self.cols);
        for r in 0..block.rows {
            let start = (top + r) * self.cols + left;
            self.data[start..start + block.cols].copy_from_slice(block.row(r));
        }
    }

    /// Returns a new matrix with `f` applied to every sample.
    pub fn map<F: Fn(f64) -> f64>(&self, f: F) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (r, c): (usize, usize)) -> &f64 {
        &self.data[r * self.cols + c]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut f64 {
        &mut self.data[r * self.cols + c]
    }
}
