//! Constants used throughout the DCT2 engine

/// Minimum block side length accepted by the pipeline
pub const MIN_BLOCK_SIZE: usize = 2;

/// Minimum frequency cutoff accepted by the pipeline
pub const MIN_CUTOFF: usize = 1;

/// Default block side length (JPEG-style 8x8 tiling)
pub const DEFAULT_BLOCK_SIZE: usize = 8;

/// Default frequency cutoff
pub const DEFAULT_CUTOFF: usize = 10;

/// Level shift applied to samples before the forward transform
pub const LEVEL_SHIFT_BIAS: f64 = 128.0;

/// Largest representable intensity
pub const MAX_INTENSITY: f64 = 255.0;

/// Seed for the benchmark's deterministic input matrices
pub const BENCH_SEED: u64 = 42;

/// Independent timing trials per benchmark size
pub const BENCH_TRIALS: usize = 3;

/// Transform repetitions within one timing trial
pub const BENCH_REPS: usize = 5;

/// Smallest benchmark size exponent (sizes start at 2^3)
pub const MIN_SIZE_EXP: u32 = 3;

/// Default largest benchmark size exponent (sizes end at 2^12)
pub const DEFAULT_MAX_SIZE_EXP: u32 = 12;
