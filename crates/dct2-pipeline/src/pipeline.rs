//! Block compression pipeline
//!
//! Crops the input to a multiple of the block size, then per block:
//! optional level shift, forward DCT2, diagonal frequency mask, inverse
//! transform, round and clip. The unmasked and masked coefficient fields
//! are kept alongside the reconstruction for inspection and export.

use crate::{to_visual, CompressorOptions, FrequencyMask};
use dct2_core::consts::{LEVEL_SHIFT_BIAS, MAX_INTENSITY};
use dct2_core::{Dct2Error, Dct2Result, Matrix};
use dct2_transform::{forward, inverse};

/// Everything one compression run produces.
///
/// Produced once per [`compress`] call and immutable afterward; display
/// layers own only a cursor into [`CompressionArtifacts::steps`].
#[derive(Debug, Clone)]
pub struct CompressionArtifacts {
    /// Options the run was performed with
    pub options: CompressorOptions,
    /// Input truncated to block-size multiples
    pub cropped: Matrix,
    /// Raw transform coefficients, per block
    pub coefficients: Matrix,
    /// Coefficients after the frequency mask, per block
    pub masked_coefficients: Matrix,
    /// Lossy reconstruction; integer values in [0, 255], cropped shape
    pub reconstructed: Matrix,
}

/// One displayable pipeline step.
#[derive(Debug, Clone)]
pub struct PipelineStep {
    pub title: String,
    pub image: Matrix,
}

impl CompressionArtifacts {
    /// Ordered step images for display and export. Coefficient fields are
    /// rendered through the log-magnitude transform.
    pub fn steps(&self) -> Vec<PipelineStep> {
        vec![
            PipelineStep {
                title: "Cropped image".to_string(),
                image: self.cropped.clone(),
            },
            PipelineStep {
                title: "|DCT| (log10)".to_string(),
                image: to_visual(&self.coefficients),
            },
            PipelineStep {
                title: format!("Mask k+l >= {}", self.options.cutoff),
                image: to_visual(&self.masked_coefficients),
            },
            PipelineStep {
                title: "IDCT (round & clip 0-255)".to_string(),
                image: self.reconstructed.clone(),
            },
        ]
    }
}

/// Truncates an image to the largest block-size multiples it contains.
///
/// Trailing remainder rows and columns are silently discarded; there is
/// no padding.
pub fn crop(image: &Matrix, block_size: usize) -> Dct2Result<Matrix> {
    let height = image.rows() - image.rows() % block_size;
    let width = image.cols() - image.cols() % block_size;
    if height == 0 || width == 0 {
        return Err(Dct2Error::Shape(format!(
            "{}x{} image cannot fit a single {}x{} block",
            image.rows(),
            image.cols(),
            block_size,
            block_size
        )));
    }
    let mut cropped = Matrix::zeros(height, width)?;
    for r in 0..height {
        cropped.data_mut()[r * width..(r + 1) * width]
            .copy_from_slice(&image.row(r)[..width]);
    }
    Ok(cropped)
}

/// Runs the full block compression pipeline.
///
/// Blocks are processed in row-major block order; they partition the
/// cropped matrix exactly, so every block's source and destination
/// regions are disjoint.
pub fn compress(image: &Matrix, options: &CompressorOptions) -> Dct2Result<CompressionArtifacts> {
    options.validate()?;
    let f = options.block_size;
    let cropped = crop(image, f)?;
    let mask = FrequencyMask::new(f, options.cutoff);
    let bias = if options.level_shift {
        LEVEL_SHIFT_BIAS
    } else {
        0.0
    };

    let mut coefficients = Matrix::zeros(cropped.rows(), cropped.cols())?;
    let mut masked_coefficients = Matrix::zeros(cropped.rows(), cropped.cols())?;
    let mut reconstructed = Matrix::zeros(cropped.rows(), cropped.cols())?;

    for top in (0..cropped.rows()).step_by(f) {
        for left in (0..cropped.cols()).step_by(f) {
            let block = cropped.copy_block(top, left, f).map(|v| v - bias);

            let coeffs = forward(options.algorithm, &block)?;
            coefficients.write_block(top, left, &coeffs);

            let masked = mask.apply(&coeffs)?;
            masked_coefficients.write_block(top, left, &masked);

            let restored = inverse(options.algorithm, &masked)?
                .map(|v| (v + bias).round().clamp(0.0, MAX_INTENSITY));
            reconstructed.write_block(top, left, &restored);
        }
    }

    Ok(CompressionArtifacts {
        options: options.clone(),
        cropped,
        coefficients,
        masked_coefficients,
        reconstructed,
    })
}
