//! Scaling
//!
//! Two unrelated scale operations:
//!
//! - [`scale`] resamples directly: output (i, j) reads source (i/s, j/s)
//!   through an interpolation strategy. No matrix, no centering, no fill
//!   color; the sampled coordinate always lands inside the strategy's own
//!   clamping range.
//! - [`scale_by_indexing`] grows the canvas by replicating edge content
//!   through a border-indexing strategy instead of interpolating, and only
//!   accepts factors >= 1.

use crate::error::{TransformError, TransformResult};
use rasterlab_core::{BorderIndexing, Error, Interpolation, Raster};

/// Resample the raster by `factor` with the given interpolation.
///
/// New dimensions are `round(h * factor)` by `round(w * factor)`.
///
/// # Errors
///
/// Returns [`TransformError::InvalidScaleFactor`] for non-finite or
/// non-positive factors, and [`Error::DegenerateGeometry`] if either new
/// dimension rounds to zero.
pub fn scale(
    raster: &mut Raster,
    factor: f64,
    interpolation: Interpolation,
) -> TransformResult<()> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(TransformError::InvalidScaleFactor(format!(
            "{factor} (expected a finite factor > 0)"
        )));
    }

    let new_height = (raster.height() as f64 * factor).round() as usize;
    let new_width = (raster.width() as f64 * factor).round() as usize;
    if new_height == 0 || new_width == 0 {
        return Err(Error::DegenerateGeometry {
            width: new_width,
            height: new_height,
        }
        .into());
    }

    let mut rows = Vec::with_capacity(new_height);
    for i in 0..new_height {
        let mut row = Vec::with_capacity(new_width);
        for j in 0..new_width {
            row.push(interpolation.sample(raster, i as f64 / factor, j as f64 / factor)?);
        }
        rows.push(row);
    }

    raster.replace_rows(rows)?;
    Ok(())
}

/// Grow the raster by `factor` through edge replication.
///
/// The padding half-extent per axis is `d = round(|dim * factor - dim| / 2)`;
/// the output walks offsets `-d .. dim + d` and samples the *original* grid
/// through `indexing` at each offset, so edge content is repeated, mirrored,
/// or wrapped rather than interpolated.
///
/// # Errors
///
/// Returns [`TransformError::InvalidScaleFactor`] for factors below 1 or
/// non-finite factors.
pub fn scale_by_indexing(
    raster: &mut Raster,
    factor: f64,
    indexing: BorderIndexing,
) -> TransformResult<()> {
    if !factor.is_finite() || factor < 1.0 {
        return Err(TransformError::InvalidScaleFactor(format!(
            "{factor} (indexed scaling requires a finite factor >= 1)"
        )));
    }

    let height = raster.height();
    let width = raster.width();
    let d_rows = ((height as f64 * factor - height as f64).abs() / 2.0).round() as i64;
    let d_cols = ((width as f64 * factor - width as f64).abs() / 2.0).round() as i64;

    let mut rows = Vec::with_capacity(height + 2 * d_rows as usize);
    for i in -d_rows..height as i64 + d_rows {
        let mut row = Vec::with_capacity(width + 2 * d_cols as usize);
        for j in -d_cols..width as i64 + d_cols {
            row.push(indexing.sample(raster, i, j));
        }
        rows.push(row);
    }

    raster.replace_rows(rows)?;
    Ok(())
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
    fn test_scale_factor_one_nearest_is_identity() {
        let original = coded(3, 4);
        let mut r = original.clone();
        scale(&mut r, 1.0, Interpolation::Nearest).unwrap();
        assert_eq!(r, original);
    }

    #[test]
    fn test_scale_factor_one_bilinear_is_identity() {
        // Integer sample coordinates make the bilinear blend exact.
        let original = coded(3, 4);
        let mut r = original.clone();
        scale(&mut r, 1.0, Interpolation::Bilinear).unwrap();
        assert_eq!(r, original);
    }

    #[test]
    fn test_scale_doubles_dimensions() {
        let mut r = coded(2, 3);
        scale(&mut r, 2.0, Interpolation::Nearest).unwrap();
        assert_eq!((r.height(), r.width()), (4, 6));
        // Output (2, 4) samples source (1.0, 2.0)
        assert_eq!(r.get(2, 4).unwrap().red, 12);
    }

    #[test]
    fn test_scale_down() {
        let mut r = coded(4, 4);
        scale(&mut r, 0.5, Interpolation::Nearest).unwrap();
        assert_eq!((r.height(), r.width()), (2, 2));
        // Output (1, 1) samples source (2.0, 2.0)
        assert_eq!(r.get(1, 1).unwrap().red, 22);
    }

    #[test]
    fn test_scale_rejects_bad_factors() {
        let original = coded(3, 3);
        let mut r = original.clone();
        assert!(matches!(
            scale(&mut r, 0.0, Interpolation::Nearest),
            Err(TransformError::InvalidScaleFactor(_))
        ));
        assert!(scale(&mut r, -2.0, Interpolation::Nearest).is_err());
        assert!(scale(&mut r, f64::NAN, Interpolation::Nearest).is_err());
        // Rounds both dimensions to zero
        assert!(matches!(
            scale(&mut r, 0.1, Interpolation::Nearest),
            Err(TransformError::Core(Error::DegenerateGeometry { .. }))
        ));
        assert_eq!(r, original);
    }

    #[test]
    fn test_scale_by_indexing_pads_symmetrically() {
        let mut r = coded(2, 2);
        scale_by_indexing(&mut r, 2.0, BorderIndexing::Circular).unwrap();
        // d = round(|2*2 - 2| / 2) = 1 per axis
        assert_eq!((r.height(), r.width()), (4, 4));
        // Offset (-1, -1) wraps to source (1, 1)
        assert_eq!(r.get(0, 0).unwrap().red, 11);
        // Offset (0, 0) is the original corner
        assert_eq!(r.get(1, 1).unwrap().red, 0);
        // Offset (2, 2) wraps to source (0, 0)
        assert_eq!(r.get(3, 3).unwrap().red, 0);
    }

    #[test]
    fn test_scale_by_indexing_reflective_edges() {
        let mut r = coded(2, 3);
        scale_by_indexing(&mut r, 2.0, BorderIndexing::Reflective).unwrap();
        // d_rows = round(2/2) = 1, d_cols = round(3/2) = 2
        assert_eq!((r.height(), r.width()), (4, 7));
        // Offset (-1, 0): row reflects to 0
        assert_eq!(r.get(0, 2).unwrap().red, 0);
        // Offset (0, -2): column reflects to 1
        assert_eq!(r.get(1, 0).unwrap().red, 1);
    }

    #[test]
    fn test_scale_by_indexing_rejects_shrinking() {
        let original = coded(2, 2);
        let mut r = original.clone();
        assert!(matches!(
            scale_by_indexing(&mut r, 0.5, BorderIndexing::Zero),
            Err(TransformError::InvalidScaleFactor(_))
        ));
        assert_eq!(r, original);
    }

    #[test]
    fn test_scale_by_indexing_factor_one_is_identity() {
        let original = coded(3, 3);
        let mut r = original.clone();
        scale_by_indexing(&mut r, 1.0, BorderIndexing::Reflective).unwrap();
        assert_eq!(r, original);
    }
}
