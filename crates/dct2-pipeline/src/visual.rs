//! Log-magnitude rendering of coefficient fields
//!
//! Display-only: the output never feeds back into reconstruction.

use dct2_core::consts::MAX_INTENSITY;
use dct2_core::Matrix;

/// Converts a coefficient field to an 8-bit-range matrix for display.
///
/// Takes `log10(1 + |x|)` per sample, then rescales so the maximum maps
/// to 255 (the scale degenerates to 1 when the field is all zero) and
/// truncates onto the 8-bit grid.
pub fn to_visual(data: &Matrix) -> Matrix {
    let disp = data.map(|v| (1.0 + v.abs()).log10());
    let max = disp.data().iter().fold(0.0f64, |a, &b| a.max(b));
    let scale = if max > 0.0 { MAX_INTENSITY / max } else { 1.0 };
    disp.map(|v| (v * scale).trunc())
}
