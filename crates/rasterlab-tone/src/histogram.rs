//! Per-channel histograms
//!
//! [`Histogram`] counts intensities, [`CumulativeHistogram`] normalizes the
//! running sum to [0, 1]. Both are read-only value types: the visualization
//! layer consumes them, the engine only produces them (equalization derives
//! its lookup tables from the cumulative curve).

use rasterlab_core::Raster;

/// Per-channel intensity counts (256 bins per channel)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    /// Red channel counts
    pub red: [u32; 256],
    /// Green channel counts
    pub green: [u32; 256],
    /// Blue channel counts
    pub blue: [u32; 256],
}

impl Histogram {
    /// Count the channel intensities of every pixel.
    pub fn of(raster: &Raster) -> Self {
        let mut red = [0u32; 256];
        let mut green = [0u32; 256];
        let mut blue = [0u32; 256];
        for row in raster.rows() {
            for pixel in row {
                red[pixel.red as usize] += 1;
                green[pixel.green as usize] += 1;
                blue[pixel.blue as usize] += 1;
            }
        }
        Histogram { red, green, blue }
    }
}

/// Per-channel normalized cumulative intensity curves
///
/// Each curve is monotonically non-decreasing with final value ~1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeHistogram {
    /// Red channel curve
    pub red: [f64; 256],
    /// Green channel curve
    pub green: [f64; 256],
    /// Blue channel curve
    pub blue: [f64; 256],
}

fn accumulate(counts: &[u32; 256], total: f64) -> [f64; 256] {
    let mut curve = [0.0f64; 256];
    let mut sum = 0.0;
    for (bin, &count) in counts.iter().enumerate() {
        sum += f64::from(count) / total;
        curve[bin] = sum;
    }
    curve
}

impl CumulativeHistogram {
    /// Normalize a frequency histogram over `total` pixels.
    pub fn from_histogram(histogram: &Histogram, total: usize) -> Self {
        let total = total as f64;
        CumulativeHistogram {
            red: accumulate(&histogram.red, total),
            green: accumulate(&histogram.green, total),
            blue: accumulate(&histogram.blue, total),
        }
    }

    /// Compute the curves of a raster directly.
    pub fn of(raster: &Raster) -> Self {
        let total = raster.height() * raster.width();
        Self::from_histogram(&Histogram::of(raster), total)
    }
}
