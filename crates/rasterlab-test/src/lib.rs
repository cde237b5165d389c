//! rasterlab-test - Regression test framework for RasterLab
//!
//! This crate provides a small regression harness plus deterministic raster
//! fixtures shared by the integration tests of the other crates.
//!
//! # Usage
//!
//! ```ignore
//! use rasterlab_test::{RegParams, gradient_raster};
//!
//! let mut rp = RegParams::new("rotate");
//! rp.compare_values(14.0, rotated.height() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;

use rasterlab_core::{Pixel, Raster};

/// Build a raster filled with one color.
pub fn solid_raster(height: usize, width: usize, pixel: Pixel) -> TestResult<Raster> {
    Ok(Raster::filled(height, width, pixel)?)
}

/// Build a raster whose red channel ramps left to right and whose green
/// channel ramps top to bottom, both over the full 0..=255 range.
pub fn gradient_raster(height: usize, width: usize) -> TestResult<Raster> {
    if height < 2 || width < 2 {
        return Err(TestError::InvalidFixture(format!(
            "gradient needs at least 2x2, got {height}x{width}"
        )));
    }
    let rows = (0..height)
        .map(|i| {
            (0..width)
                .map(|j| {
                    let red = (255 * j / (width - 1)) as u8;
                    let green = (255 * i / (height - 1)) as u8;
                    Pixel::rgb(red, green, 128)
                })
                .collect()
        })
        .collect();
    Ok(Raster::from_rows(rows)?)
}

/// Build an alternating two-color checkerboard with 1x1 cells.
pub fn checkerboard(height: usize, width: usize, even: Pixel, odd: Pixel) -> TestResult<Raster> {
    let rows = (0..height)
        .map(|i| {
            (0..width)
                .map(|j| if (i + j) % 2 == 0 { even } else { odd })
                .collect()
        })
        .collect();
    Ok(Raster::from_rows(rows)?)
}
