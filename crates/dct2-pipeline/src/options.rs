//! Compressor options

use dct2_core::consts::{DEFAULT_BLOCK_SIZE, DEFAULT_CUTOFF, MIN_BLOCK_SIZE, MIN_CUTOFF};
use dct2_core::{Dct2Error, Dct2Result};
use dct2_transform::DctAlgorithm;

/// Compression parameters
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompressorOptions {
    /// Block side length F (>= 2)
    pub block_size: usize,
    /// Frequency cutoff d (>= 1); coefficients with k + l >= d are dropped
    pub cutoff: usize,
    /// Subtract a 128 level shift before the forward transform and add it
    /// back after the inverse
    pub level_shift: bool,
    /// Which kernel variant transforms the blocks
    pub algorithm: DctAlgorithm,
}

impl Default for CompressorOptions {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            cutoff: DEFAULT_CUTOFF,
            level_shift: true,
            algorithm: DctAlgorithm::default(),
        }
    }
}

impl CompressorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    pub fn cutoff(mut self, cutoff: usize) -> Self {
        self.cutoff = cutoff;
        self
    }

    pub fn level_shift(mut self, level_shift: bool) -> Self {
        self.level_shift = level_shift;
        self
    }

    pub fn algorithm(mut self, algorithm: DctAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Checks the parameter ranges, surfacing the first violation.
    pub fn validate(&self) -> Dct2Result<()> {
        if self.block_size < MIN_BLOCK_SIZE {
            return Err(Dct2Error::Parameter(format!(
                "block size must be at least {}, got {}",
                MIN_BLOCK_SIZE, self.block_size
            )));
        }
        if self.cutoff < MIN_CUTOFF {
            return Err(Dct2Error::Parameter(format!(
                "cutoff must be at least {}, got {}",
                MIN_CUTOFF, self.cutoff
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let options = CompressorOptions::default();
        assert_eq!(options.block_size, 8);
        assert_eq!(options.cutoff, 10);
        assert!(options.level_shift);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_block_size_below_minimum() {
        let options = CompressorOptions::new().block_size(1);
        assert!(matches!(options.validate(), Err(Dct2Error::Parameter(_))));
    }

    #[test]
    fn test_cutoff_below_minimum() {
        let options = CompressorOptions::new().cutoff(0);
        assert!(matches!(options.validate(), Err(Dct2Error::Parameter(_))));
    }

    #[test]
    fn test_builder_chain() {
        let options = CompressorOptions::new()
            .block_size(16)
            .cutoff(4)
            .level_shift(false)
            .algorithm(DctAlgorithm::Naive);
        assert_eq!(options.block_size, 16);
        assert_eq!(options.cutoff, 4);
        assert!(!options.level_shift);
        assert_eq!(options.algorithm, DctAlgorithm::Naive);
    }
}
