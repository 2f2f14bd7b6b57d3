//! # DCT2 - JPEG-like block compression engine
//!
//! This crate provides a high-level API for lossy block-transform
//! compression of single-channel intensity data, plus a benchmark
//! harness comparing two algorithmically distinct implementations of
//! the underlying 2D DCT-II.
//!
//! ## Quick Start
//!
//! ### Compressing
//!
//! ```
//! use dct2::{compress, CompressorOptions, Matrix};
//!
//! let image = Matrix::from_vec(
//!     16,
//!     16,
//!     (0..256).map(|i| (i % 256) as f64).collect(),
//! )
//! .unwrap();
//!
//! let options = CompressorOptions::new().block_size(8).cutoff(10);
//! let artifacts = compress(&image, &options).unwrap();
//! assert_eq!(artifacts.reconstructed.rows(), 16);
//! ```
//!
//! ### Benchmarking
//!
//! ```no_run
//! use dct2::{benchmark, default_sizes, format_table};
//!
//! let records = benchmark(&default_sizes(8)).unwrap();
//! println!("{}", format_table(&records));
//! ```
//!
//! ## Architecture
//!
//! The engine splits into a transform kernel (naive `D . X . D^T` and a
//! separable fast variant), a block compression pipeline (crop, mask,
//! invert, round and clip) and a benchmark harness with deterministic
//! inputs and minimum-of-trials timing.

// Re-export core types
pub use dct2_core::{consts, Dct2Error, Dct2Result, Matrix, Sample};

// Re-export the transform kernel
pub use dct2_transform::{
    forward, forward_fast, forward_fast_1d, forward_naive, inverse, inverse_fast, inverse_naive,
    DctAlgorithm, DctBasis,
};

// Re-export the compression pipeline
pub use dct2_pipeline::{
    compress, crop, to_visual, CompressionArtifacts, CompressorOptions, FrequencyMask,
    PipelineStep,
};

// Re-export the benchmark harness
pub use dct2_bench::{
    benchmark, default_sizes, format_table, random_matrix, reference_curves, BenchmarkRecord,
    ReferenceCurves,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
