//! Core types and utilities for the DCT2 compression engine
//!
//! This crate provides the fundamental data structures shared by the
//! transform kernel, the block compression pipeline and the benchmark
//! harness: the intensity matrix, sample conversion and error types.

pub mod consts;
pub mod error;
pub mod matrix;
pub mod sample;

pub use error::{Dct2Error, Dct2Result};
pub use matrix::Matrix;
pub use sample::Sample;
