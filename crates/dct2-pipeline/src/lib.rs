//! Block compression pipeline for the DCT2 engine
//!
//! Implements the JPEG-like lossy pipeline: crop to block multiples,
//! per-block DCT2, diagonal frequency masking, inverse transform, round
//! and clip, plus the log-magnitude visualization of coefficient fields.

pub mod mask;
pub mod options;
pub mod pipeline;
pub mod visual;

pub use mask::FrequencyMask;
pub use options::CompressorOptions;
pub use pipeline::{compress, crop, CompressionArtifacts, PipelineStep};
pub use visual::to_visual;
