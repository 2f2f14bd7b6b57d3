//! Walk a synthetic image through every compression step

use dct2::{compress, CompressorOptions, Matrix};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== DCT2 Block Compression Steps ===\n");

    // Synthetic 64x64 gradient-with-checker pattern
    let size = 64;
    let mut image = Matrix::zeros(size, size)?;
    for r in 0..size {
        for c in 0..size {
            let gradient = (r * 255 / size) as f64;
            let checker = if (r / 8 + c / 8) % 2 == 0 { 32.0 } else { 0.0 };
            image[(r, c)] = (gradient + checker).min(255.0);
        }
    }

    for (f, d) in [(8, 10), (8, 3), (16, 8)] {
        let options = CompressorOptions::new().block_size(f).cutoff(d);
        let artifacts = compress(&image, &options)?;

        let mse: f64 = artifacts
            .reconstructed
            .data()
            .iter()
            .zip(artifacts.cropped.data())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            / artifacts.cropped.data().len() as f64;

        println!("F={:<3} d={:<3} MSE={:8.2}", f, d, mse);
        for (idx, step) in artifacts.steps().iter().enumerate() {
            println!(
                "  step {}: {:<26} ({}x{})",
                idx + 1,
                step.title,
                step.image.rows(),
                step.image.cols()
            );
        }
        println!();
    }

    Ok(())
}
