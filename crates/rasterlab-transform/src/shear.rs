//! Shear about the image center
//!
//! Center-anchored shear through the inverse-affine framework. `alpha`
//! slants columns as the row index changes, `beta` slants rows as the column
//! index changes; the output bounding box grows just enough to hold the
//! slanted image.

use crate::affine::{InverseMap, map_inverse};
use crate::error::{TransformError, TransformResult};
use rasterlab_core::{Interpolation, Pixel, Raster};

/// Shear the raster by coefficients (`alpha`, `beta`).
///
/// The grid is replaced by `round(h + |w * beta|)` rows by
/// `round(w + |newH * alpha|)` columns; the width expansion is computed
/// against the already-expanded height so a combined shear still fits.
/// Out-of-source coordinates take `fill`.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] for non-finite
/// coefficients; the raster is not modified.
pub fn shear(
    raster: &mut Raster,
    alpha: f64,
    beta: f64,
    interpolation: Interpolation,
    fill: Pixel,
) -> TransformResult<()> {
    if !alpha.is_finite() || !beta.is_finite() {
        return Err(TransformError::InvalidParameters(format!(
            "shear coefficients ({alpha}, {beta}) must be finite"
        )));
    }

    let height = raster.height() as f64;
    let width = raster.width() as f64;

    let new_height = (height + (width * beta).abs()).round() as usize;
    let new_width = (width + (new_height as f64 * alpha).abs()).round() as usize;

    let map = InverseMap::shear(alpha, beta, height / 2.0 - 0.5, width / 2.0 - 0.5);
    map_inverse(raster, &map, interpolation, fill, new_height, new_width)
}
