//! Interpolation strategies
//!
//! Samplers that read a [`Raster`] at fractional (row, column) coordinates.
//! Both strategies clamp the requested coordinate into the grid, so a caller
//! never has to pre-clamp; resamplers that want a fill color for out-of-range
//! coordinates check the range themselves before sampling.

use crate::error::Result;
use crate::pixel::Pixel;
use crate::raster::Raster;

/// Fractional-coordinate sampling strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpolation {
    /// Round to the nearest grid position.
    Nearest,
    /// Two-stage bilinear blend of the four surrounding pixels.
    Bilinear,
}

impl Interpolation {
    /// Sample `raster` at the fractional coordinate (row `i`, column `j`).
    pub fn sample(&self, raster: &Raster, i: f64, j: f64) -> Result<Pixel> {
        match self {
            Interpolation::Nearest => Ok(nearest(raster, i, j)),
            Interpolation::Bilinear => bilinear(raster, i, j),
        }
    }
}

fn clamp_index(v: f64, max: usize) -> usize {
    (v.max(0.0) as usize).min(max)
}

fn nearest(raster: &Raster, i: f64, j: f64) -> Pixel {
    let ri = clamp_index(i.round(), raster.height() - 1);
    let rj = clamp_index(j.round(), raster.width() - 1);
    raster.rows()[ri][rj]
}

/// Bilinear sampling as two averaging stages: the two pixel pairs that differ
/// in row are blended with `bias_i`, then the results are blended with
/// `bias_j`. Biases come out of `ceil(c) - c`, so they sit in [0, 1] and the
/// blend inherits the exact floor semantics of [`Pixel::average`].
fn bilinear(raster: &Raster, i: f64, j: f64) -> Result<Pixel> {
    let i = i.clamp(0.0, (raster.height() - 1) as f64);
    let j = j.clamp(0.0, (raster.width() - 1) as f64);

    let floor_i = i.floor() as usize;
    let floor_j = j.floor() as usize;
    let ceil_i = i.ceil() as usize;
    let ceil_j = j.ceil() as usize;

    let bias_i = ceil_i as f64 - i;
    let bias_j = ceil_j as f64 - j;

    let rows = raster.rows();
    let low = rows[floor_i][floor_j].average(&rows[ceil_i][floor_j], bias_i)?;
    let high = rows[floor_i][ceil_j].average(&rows[ceil_i][ceil_j], bias_i)?;
    low.average(&high, bias_j)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2x2 raster: red encodes the corner, alpha is opaque.
    fn corner_raster() -> Raster {
        Raster::from_rows(vec![
            vec![Pixel::rgb(0, 0, 0), Pixel::rgb(100, 0, 0)],
            vec![Pixel::rgb(200, 0, 0), Pixel::rgb(40, 0, 0)],
        ])
        .unwrap()
    }

    #[test]
    fn test_nearest_rounds_and_clamps() {
        let r = corner_raster();
        assert_eq!(Interpolation::Nearest.sample(&r, 0.4, 0.4).unwrap().red, 0);
        assert_eq!(Interpolation::Nearest.sample(&r, 0.6, 0.2).unwrap().red, 200);
        // Out of range clamps to the nearest edge
        assert_eq!(Interpolation::Nearest.sample(&r, -3.0, 9.0).unwrap().red, 100);
    }

    #[test]
    fn test_bilinear_integer_coordinates_hit_exact_pixels() {
        let r = corner_raster();
        assert_eq!(Interpolation::Bilinear.sample(&r, 0.0, 0.0).unwrap().red, 0);
        assert_eq!(Interpolation::Bilinear.sample(&r, 1.0, 0.0).unwrap().red, 200);
        assert_eq!(Interpolation::Bilinear.sample(&r, 0.0, 1.0).unwrap().red, 100);
    }

    #[test]
    fn test_bilinear_midpoint_floors() {
        let r = corner_raster();
        // Center of the 2x2 block: both stages blend at bias 0.5.
        // rows blend: (0, 200) -> 100, (100, 40) -> 70; columns: (100, 70) -> 85
        let p = Interpolation::Bilinear.sample(&r, 0.5, 0.5).unwrap();
        assert_eq!(p.red, 85);
        assert_eq!(p.alpha, 255);
    }

    #[test]
    fn test_bilinear_clamps_out_of_range() {
        let r = corner_raster();
        let p = Interpolation::Bilinear.sample(&r, 5.0, 5.0).unwrap();
        assert_eq!(p.red, 40);
    }

    #[test]
    fn test_bilinear_fractional_row_only() {
        let r = corner_raster();
        // (0.25, 0): bias_i = 0.75, blend of 0 and 200 = floor(0*0.75 + 200*0.25) = 50
        let p = Interpolation::Bilinear.sample(&r, 0.25, 0.0).unwrap();
        assert_eq!(p.red, 50);
    }
}
