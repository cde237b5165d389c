//! Histogram equalization
//!
//! Builds a per-channel lookup table from the normalized cumulative
//! histogram and rewrites every pixel through it. A channel whose whole mass
//! sits in one bin has cumulative value 1.0 there, so a uniform image
//! saturates to 255 on that channel.

use crate::histogram::CumulativeHistogram;
use rasterlab_core::Raster;

fn lut_from_curve(curve: &[f64; 256]) -> [u8; 256] {
    let mut lut = [0u8; 256];
    for (bin, slot) in lut.iter_mut().enumerate() {
        *slot = (curve[bin] * 255.0).round() as u8;
    }
    lut
}

/// Equalize the raster's three color channels independently.
pub fn equalize(raster: &mut Raster) {
    let cumulative = CumulativeHistogram::of(raster);
    let red_lut = lut_from_curve(&cumulative.red);
    let green_lut = lut_from_curve(&cumulative.green);
    let blue_lut = lut_from_curve(&cumulative.blue);

    for row in raster.rows_mut() {
        for pixel in row {
            pixel.overwrite(
                red_lut[pixel.red as usize],
                green_lut[pixel.green as usize],
                blue_lut[pixel.blue as usize],
            );
        }
    }
}
