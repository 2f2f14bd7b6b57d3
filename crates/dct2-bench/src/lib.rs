//! Benchmark harness for the DCT2 transform kernel
//!
//! Drives both kernel variants over a geometric sequence of sizes with
//! deterministic inputs, records minimum-of-trials wall-clock durations,
//! and renders the scaling comparison as a table plus normalized
//! reference complexity curves.

pub mod harness;
pub mod record;
pub mod report;

pub use harness::{benchmark, default_sizes, random_matrix};
pub use record::BenchmarkRecord;
pub use report::{format_table, reference_curves, ReferenceCurves};
