//! Inverse-affine resampling framework
//!
//! Rotation and shear share one mechanism: walk every target coordinate,
//! push it through a 3x3 homogeneous *inverse* matrix to find the source
//! coordinate, and sample there. Resampling backwards from the target avoids
//! the holes a forward scatter would leave.
//!
//! # Centering convention
//!
//! Target index `t` along a dimension of size `n` maps to the centered
//! offset `t - (n/2 - 0.5)`, so offsets run from `-(n/2 - 0.5)` to
//! `+(n/2 - 0.5)` and (0, 0) is the geometric center of the output. The
//! matrix translation puts the source center at `(h/2 - 0.5, w/2 - 0.5)`;
//! the half-pixel term is there because a sample sits at the center of its
//! cell. This one convention is used everywhere.

use crate::error::TransformResult;
use rasterlab_core::{Error, Interpolation, Pixel, Raster};

/// 3x3 homogeneous inverse transform, applied to (row, column, 1) vectors.
#[derive(Debug, Clone, Copy)]
pub struct InverseMap {
    m: [[f64; 3]; 3],
}

impl InverseMap {
    /// Inverse of a rotation by `radians`, composed with a translation that
    /// maps the output center back to the source center `(ti, tj)`.
    pub fn rotation(radians: f64, ti: f64, tj: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        InverseMap {
            m: [[cos, sin, ti], [-sin, cos, tj], [0.0, 0.0, 1.0]],
        }
    }

    /// Inverse of a shear with row coefficient `alpha` and column
    /// coefficient `beta`, with the same center translation as
    /// [`InverseMap::rotation`].
    pub fn shear(alpha: f64, beta: f64, ti: f64, tj: f64) -> Self {
        InverseMap {
            m: [
                [1.0 + beta * alpha, beta, ti],
                [alpha, 1.0, tj],
                [0.0, 0.0, 1.0],
            ],
        }
    }

    /// Map a centered target coordinate to its source coordinate.
    #[inline]
    pub fn apply(&self, i: f64, j: f64) -> (f64, f64) {
        (
            self.m[0][0] * i + self.m[0][1] * j + self.m[0][2],
            self.m[1][0] * i + self.m[1][1] * j + self.m[1][2],
        )
    }
}

/// Resample `raster` into a `new_height` x `new_width` grid through `map`.
///
/// Source coordinates that land outside `[0, h) x [0, w)` take `fill`;
/// everything else is sampled with `interpolation`. The replacement grid is
/// built completely before it is swapped in.
///
/// # Errors
///
/// Returns [`Error::DegenerateGeometry`] if either target dimension is zero.
pub fn map_inverse(
    raster: &mut Raster,
    map: &InverseMap,
    interpolation: Interpolation,
    fill: Pixel,
    new_height: usize,
    new_width: usize,
) -> TransformResult<()> {
    if new_height == 0 || new_width == 0 {
        return Err(Error::DegenerateGeometry {
            width: new_width,
            height: new_height,
        }
        .into());
    }

    let height = raster.height() as f64;
    let width = raster.width() as f64;
    let center_i = new_height as f64 / 2.0 - 0.5;
    let center_j = new_width as f64 / 2.0 - 0.5;

    let mut rows = Vec::with_capacity(new_height);
    for ti in 0..new_height {
        let i = ti as f64 - center_i;
        let mut row = Vec::with_capacity(new_width);
        for tj in 0..new_width {
            let j = tj as f64 - center_j;
            let (old_i, old_j) = map.apply(i, j);
            let pixel = if old_i < 0.0 || old_j < 0.0 || old_i >= height || old_j >= width {
                fill
            } else {
                interpolation.sample(raster, old_i, old_j)?
            };
            row.push(pixel);
        }
        rows.push(row);
    }

    raster.replace_rows(rows)?;
    Ok(())
}
