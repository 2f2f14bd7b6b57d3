//! Kernel variant selection

use crate::{forward_fast, forward_naive, inverse_fast, inverse_naive};
use dct2_core::{Dct2Result, Matrix};

/// Which algorithm computes the 2D transform.
///
/// Both variants compute the same orthonormal DCT2; they differ only in
/// asymptotic cost (O(N^3) dense multiplication vs O(N^2 log N)
/// separable fast transform).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DctAlgorithm {
    /// Explicit basis-matrix multiplication
    Naive,
    /// Separable fast transform
    #[default]
    Fast,
}

/// Forward 2D DCT-II with the selected variant.
pub fn forward(algorithm: DctAlgorithm, block: &Matrix) -> Dct2Result<Matrix> {
    match algorithm {
        DctAlgorithm::Naive => forward_naive(block),
        DctAlgorithm::Fast => forward_fast(block),
    }
}

/// Inverse 2D DCT (DCT-III) with the selected variant.
pub fn inverse(algorithm: DctAlgorithm, coeffs: &Matrix) -> Dct2Result<Matrix> {
    match algorithm {
        DctAlgorithm::Naive => inverse_naive(coeffs),
        DctAlgorithm::Fast => inverse_fast(coeffs),
    }
}
