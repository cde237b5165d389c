//! Point mappings
//!
//! Per-pixel tonal operations driven by 256-entry lookup tables. All of them
//! rewrite the color channels in place and leave alpha untouched.

use rasterlab_core::Raster;

/// Apply one lookup table to all three color channels of every pixel.
fn apply_lut(raster: &mut Raster, lut: &[u8; 256]) {
    for row in raster.rows_mut() {
        for pixel in row {
            pixel.overwrite(
                lut[pixel.red as usize],
                lut[pixel.green as usize],
                lut[pixel.blue as usize],
            );
        }
    }
}

/// Build a lookup table from a real-valued intensity map, rounded and
/// clamped to channel range.
fn lut_from(f: impl Fn(f64) -> f64) -> [u8; 256] {
    let mut lut = [0u8; 256];
    for (value, slot) in lut.iter_mut().enumerate() {
        *slot = f(value as f64).round().clamp(0.0, 255.0) as u8;
    }
    lut
}

/// Linear mapping: each channel becomes `round(alpha * value + beta)`,
/// clamped to [0, 255].
pub fn linear_map(raster: &mut Raster, alpha: f64, beta: f64) {
    apply_lut(raster, &lut_from(|v| alpha * v + beta));
}

/// Power-law mapping: each channel becomes `round(255 * (value/255)^gamma)`,
/// clamped to [0, 255].
pub fn power_map(raster: &mut Raster, gamma: f64) {
    apply_lut(raster, &lut_from(|v| 255.0 * (v / 255.0).powf(gamma)));
}

/// Invert every color channel (`255 - value`). Involutive.
pub fn invert(raster: &mut Raster) {
    apply_lut(raster, &lut_from(|v| 255.0 - v));
}

/// Replace all three color channels with `round((r + g + b) / 3)`.
pub fn grayscale(raster: &mut Raster) {
    for row in raster.rows_mut() {
        for pixel in row {
            let sum = f64::from(pixel.red) + f64::from(pixel.green) + f64::from(pixel.blue);
            let gray = (sum / 3.0).round() as u8;
            pixel.overwrite(gray, gray, gray);
        }
    }
}
