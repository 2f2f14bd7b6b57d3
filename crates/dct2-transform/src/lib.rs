//! Transform kernel for the DCT2 compression engine
//!
//! This crate implements the orthonormal 2D DCT-II two ways: a naive
//! basis-matrix form (`D . X . D^T`, O(N^3)) and a separable fast form
//! (1D fast DCT along rows then columns, O(N^2 log N)), together with
//! the matching inverse transforms.

pub mod algorithm;
pub mod dct;
pub mod dct_fast;

#[cfg(test)]
pub(crate) mod test_support;

pub use algorithm::{forward, inverse, DctAlgorithm};
pub use dct::{forward_naive, inverse_naive, DctBasis};
pub use dct_fast::{forward_fast, forward_fast_1d, inverse_fast};
