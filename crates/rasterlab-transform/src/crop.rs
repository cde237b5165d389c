//! Margin crop
//!
//! Removes whole rows and columns from the raster edges. Margins are clamped
//! to zero from below (the control surface may hand negatives through), and a
//! crop that would leave no rows or no columns is rejected before anything is
//! touched.

use crate::error::TransformResult;
use rasterlab_core::{Error, Raster};

/// Crop `top`/`bottom` rows and `left`/`right` columns off the raster.
///
/// # Errors
///
/// Returns [`Error::DegenerateGeometry`] if the requested margins would
/// produce a zero-width or zero-height result; the raster is not modified.
pub fn crop(
    raster: &mut Raster,
    top: i32,
    bottom: i32,
    left: i32,
    right: i32,
) -> TransformResult<()> {
    let top = top.max(0) as usize;
    let bottom = bottom.max(0) as usize;
    let left = left.max(0) as usize;
    let right = right.max(0) as usize;

    let height = raster.height();
    let width = raster.width();
    let new_height = height.saturating_sub(top + bottom);
    let new_width = width.saturating_sub(left + right);
    if new_height == 0 || new_width == 0 {
        return Err(Error::DegenerateGeometry {
            width: new_width,
            height: new_height,
        }
        .into());
    }

    let rows = raster.rows()[top..height - bottom]
        .iter()
        .map(|row| row[left..width - right].to_vec())
        .collect();
    raster.replace_rows(rows)?;
    Ok(())
}
