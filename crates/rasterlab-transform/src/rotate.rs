//! Rotation about the image center
//!
//! Arbitrary-angle rotation through the inverse-affine framework. The output
//! grid is the axis-aligned bounding box of the rotated rectangle, so no
//! source pixel is cut off; corners that the source does not cover take the
//! fill color.

use crate::affine::{InverseMap, map_inverse};
use crate::error::{TransformError, TransformResult};
use rasterlab_core::{Interpolation, Pixel, Raster};

/// Rotate the raster by `degrees` (counter-clockwise for positive angles).
///
/// The grid is replaced by its rotated bounding box:
/// `round(|h cos| + |w sin|)` rows by `round(|h sin| + |w cos|)` columns.
/// Out-of-source corners take `fill`; in-source coordinates are sampled
/// with `interpolation`.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] for a non-finite angle;
/// the raster is not modified.
pub fn rotate(
    raster: &mut Raster,
    degrees: f64,
    interpolation: Interpolation,
    fill: Pixel,
) -> TransformResult<()> {
    if !degrees.is_finite() {
        return Err(TransformError::InvalidParameters(format!(
            "rotation angle {degrees} must be finite"
        )));
    }

    let radians = degrees.to_radians();
    let (sin, cos) = radians.sin_cos();

    let height = raster.height() as f64;
    let width = raster.width() as f64;
    let new_height = ((height * cos).abs() + (width * sin).abs()).round() as usize;
    let new_width = ((height * sin).abs() + (width * cos).abs()).round() as usize;

    let map = InverseMap::rotation(radians, height / 2.0 - 0.5, width / 2.0 - 0.5);
    map_inverse(raster, &map, interpolation, fill, new_height, new_width)
}
