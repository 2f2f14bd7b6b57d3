//! Raster boundary between image files and intensity matrices

use anyhow::Result;
use dct2_core::{Matrix, Sample};
use dct2_pipeline::CompressionArtifacts;
use image::GrayImage;
use std::path::{Path, PathBuf};

/// Loads a raster file as a single-channel intensity matrix.
///
/// Color inputs are converted to luma first, so the pipeline always
/// sees one channel.
pub fn load_intensity(path: &Path) -> Result<Matrix> {
    let gray = image::open(path)?.to_luma8();
    let (width, height) = gray.dimensions();
    let data = gray.as_raw().iter().map(|&p| p.to_intensity()).collect();
    Ok(Matrix::from_vec(height as usize, width as usize, data)?)
}

/// Renders a matrix of intensities in [0, 255] as an 8-bit grayscale image.
pub fn gray_from_matrix(matrix: &Matrix) -> GrayImage {
    GrayImage::from_fn(matrix.cols() as u32, matrix.rows() as u32, |x, y| {
        image::Luma([u8::from_intensity(matrix[(y as usize, x as usize)])])
    })
}

/// Exports every pipeline step image next to the chosen directory, named
/// `{stem}_step_{idx}_{F}_{d}.bmp`.
pub fn export_steps(
    artifacts: &CompressionArtifacts,
    source: &Path,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    std::fs::create_dir_all(out_dir)?;

    let mut saved = Vec::new();
    for (idx, step) in artifacts.steps().iter().enumerate() {
        let name = format!(
            "{}_step_{}_{}_{}.bmp",
            stem,
            idx + 1,
            artifacts.options.block_size,
            artifacts.options.cutoff
        );
        let path = out_dir.join(name);
        gray_from_matrix(&step.image).save(&path)?;
        saved.push(path);
    }
    Ok(saved)
}
