//! Kernel convolution
//!
//! True convolution: the kernel is rotated 180 degrees before use, so an
//! asymmetric kernel behaves as convolution and not cross-correlation.
//! Accumulation runs over the original samples only; a bounding policy then
//! maps the accumulated floating-point values back into channel range in a
//! second pass. Color channels are convolved, alpha is carried through.

use crate::error::FilterResult;
use crate::kernel::Kernel;
use rasterlab_core::{BorderIndexing, Raster};

/// Policy mapping accumulated convolution values back into [0, 255]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bounding {
    /// Clamp each value to [0, 255], then round
    CutOff,
    /// Linearly rescale each channel from its global [min, max] to [0, 255]
    Normalize,
}

impl Bounding {
    /// Map one accumulated value given the channel's global range.
    fn apply(self, value: f64, min: f64, max: f64) -> u8 {
        match self {
            Bounding::CutOff => value.clamp(0.0, 255.0).round() as u8,
            Bounding::Normalize => {
                let range = max - min;
                if range == 0.0 {
                    // Everything collapsed to one value: half of 255, rounded down
                    127
                } else {
                    ((value - min) / range * 255.0).round() as u8
                }
            }
        }
    }
}

/// Convolve the raster with `kernel`.
///
/// Out-of-range window positions are resolved through `indexing`. The kernel
/// center is `floor(dim / 2)` per axis, so even-sized kernels are accepted.
///
/// # Errors
///
/// This operation itself cannot fail once the kernel is constructed; the
/// `Result` carries the write-back seam.
pub fn convolve(
    raster: &mut Raster,
    kernel: &Kernel,
    indexing: BorderIndexing,
    bounding: Bounding,
) -> FilterResult<()> {
    let flipped = kernel.flipped();
    let center_i = (kernel.height() / 2) as i64;
    let center_j = (kernel.width() / 2) as i64;

    let height = raster.height();
    let width = raster.width();
    let mut accumulated = Vec::with_capacity(height * width);
    let mut min = [f64::INFINITY; 3];
    let mut max = [f64::NEG_INFINITY; 3];

    for i in 0..height as i64 {
        for j in 0..width as i64 {
            let mut acc = [0.0f64; 3];
            for ki in 0..flipped.height() {
                for kj in 0..flipped.width() {
                    let weight = flipped.get(ki, kj);
                    let sample =
                        indexing.sample(raster, i + ki as i64 - center_i, j + kj as i64 - center_j);
                    acc[0] += f64::from(sample.red) * weight;
                    acc[1] += f64::from(sample.green) * weight;
                    acc[2] += f64::from(sample.blue) * weight;
                }
            }
            for c in 0..3 {
                min[c] = min[c].min(acc[c]);
                max[c] = max[c].max(acc[c]);
            }
            accumulated.push(acc);
        }
    }

    let mut values = accumulated.into_iter();
    for row in raster.rows_mut() {
        for pixel in row {
            if let Some(acc) = values.next() {
                pixel.overwrite(
                    bounding.apply(acc[0], min[0], max[0]),
                    bounding.apply(acc[1], min[1], max[1]),
                    bounding.apply(acc[2], min[2], max[2]),
                );
            }
        }
    }

    Ok(())
}

/// Blur the raster with the fixed 3x3 Gaussian kernel.
///
/// Edges are sampled reflectively; the kernel sums to 1 so cut-off bounding
/// leaves the value range untouched.
pub fn gaussian_blur(raster: &mut Raster) -> FilterResult<()> {
    convolve(
        raster,
        &Kernel::gaussian_blur(),
        BorderIndexing::Reflective,
        Bounding::CutOff,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterlab_core::Pixel;

    fn coded(height: usize, width: usize) -> Raster {
        let rows = (0..height)
            .map(|i| {
                (0..width)
                    .map(|j| Pixel::rgb((10 * i + j) as u8, 0, 0))
                    .collect()
            })
            .collect();
        Raster::from_rows(rows).unwrap()
    }

    #[test]
    fn test_unit_kernel_cutoff_is_identity() {
        let original = coded(3, 4);
        let kernel = Kernel::from_rows(vec![vec![1.0]]).unwrap();
        for indexing in [
            BorderIndexing::Zero,
            BorderIndexing::Reflective,
            BorderIndexing::Circular,
        ] {
            let mut r = original.clone();
            convolve(&mut r, &kernel, indexing, Bounding::CutOff).unwrap();
            assert_eq!(r, original);
        }
    }

    #[test]
    fn test_kernel_is_flipped_before_use() {
        // Weight left of center; flipped it lands right of center, so every
        // output pixel reads its right-hand neighbour.
        let kernel = Kernel::from_rows(vec![vec![1.0, 0.0, 0.0]]).unwrap();
        let mut r = coded(2, 3);
        convolve(&mut r, &kernel, BorderIndexing::Circular, Bounding::CutOff).unwrap();
        assert_eq!(r.get(0, 0).unwrap().red, 1);
        assert_eq!(r.get(0, 1).unwrap().red, 2);
        assert_eq!(r.get(0, 2).unwrap().red, 0); // wraps
        assert_eq!(r.get(1, 0).unwrap().red, 11);
    }

    #[test]
    fn test_cutoff_clamps_overflow() {
        let mut r = Raster::filled(2, 2, Pixel::rgb(200, 0, 100)).unwrap();
        let kernel = Kernel::from_rows(vec![vec![2.0]]).unwrap();
        convolve(&mut r, &kernel, BorderIndexing::Zero, Bounding::CutOff).unwrap();
        let p = r.get(0, 0).unwrap();
        assert_eq!((p.red, p.green, p.blue), (255, 0, 200));
    }

    #[test]
    fn test_normalize_rescales_per_channel() {
        let mut r = Raster::from_rows(vec![vec![
            Pixel::rgb(10, 5, 5),
            Pixel::rgb(30, 5, 5),
            Pixel::rgb(20, 5, 5),
        ]])
        .unwrap();
        let kernel = Kernel::from_rows(vec![vec![2.0]]).unwrap();
        convolve(&mut r, &kernel, BorderIndexing::Zero, Bounding::Normalize).unwrap();
        // Red accumulations 20/60/40 rescale to 0/255/128
        assert_eq!(r.get(0, 0).unwrap().red, 0);
        assert_eq!(r.get(0, 1).unwrap().red, 255);
        assert_eq!(r.get(0, 2).unwrap().red, 128);
        // Green and blue have zero range and collapse to 127
        assert_eq!(r.get(0, 0).unwrap().green, 127);
        assert_eq!(r.get(0, 2).unwrap().blue, 127);
    }

    #[test]
    fn test_convolve_preserves_alpha() {
        let mut r = Raster::filled(2, 2, Pixel::new(50, 50, 50, 42)).unwrap();
        let kernel = Kernel::from_rows(vec![vec![3.0]]).unwrap();
        convolve(&mut r, &kernel, BorderIndexing::Zero, Bounding::CutOff).unwrap();
        let p = r.get(1, 1).unwrap();
        assert_eq!(p.red, 150);
        assert_eq!(p.alpha, 42);
    }

    #[test]
    fn test_gaussian_blur_solid_is_fixed_point() {
        let original = Raster::filled(4, 4, Pixel::rgb(100, 60, 20)).unwrap();
        let mut r = original.clone();
        gaussian_blur(&mut r).unwrap();
        assert_eq!(r, original);
    }

    #[test]
    fn test_gaussian_blur_softens_an_edge() {
        let mut rows = vec![vec![Pixel::rgb(0, 0, 0); 4]; 4];
        for row in &mut rows {
            row[2] = Pixel::rgb(255, 255, 255);
            row[3] = Pixel::rgb(255, 255, 255);
        }
        let mut r = Raster::from_rows(rows).unwrap();
        gaussian_blur(&mut r).unwrap();
        // Pixels adjacent to the edge move toward the middle
        let left = r.get(1, 1).unwrap().red;
        let right = r.get(1, 2).unwrap().red;
        assert!(left > 0 && left < 128, "left = {left}");
        assert!(right > 128 && right < 255, "right = {right}");
    }
}
