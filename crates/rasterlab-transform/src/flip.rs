//! Horizontal and vertical flips
//!
//! In-place flips that swap pixel values symmetrically about the image
//! midline. Swaps exchange owned slots, never alias the same backing cell
//! from two positions, and the center row/column of an odd dimension is left
//! untouched.

use rasterlab_core::Raster;

/// Mirror the raster about its vertical midline (left-right flip).
pub fn flip_horizontal(raster: &mut Raster) {
    let width = raster.width();
    for row in raster.rows_mut() {
        for j in 0..width / 2 {
            row.swap(j, width - 1 - j);
        }
    }
}

/// Mirror the raster about its horizontal midline (top-bottom flip).
pub fn flip_vertical(raster: &mut Raster) {
    let height = raster.height();
    let rows = raster.rows_mut();
    for i in 0..height / 2 {
        rows.swap(i, height - 1 - i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterlab_core::Pixel;

    /// Raster whose pixel at (i, j) has red = 10*i + j.
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
    fn test_flip_horizontal_mirrors_columns() {
        let mut r = coded(2, 3);
        flip_horizontal(&mut r);
        assert_eq!(r.get(0, 0).unwrap().red, 2);
        assert_eq!(r.get(0, 1).unwrap().red, 1); // odd width: center column stays
        assert_eq!(r.get(0, 2).unwrap().red, 0);
        assert_eq!(r.get(1, 0).unwrap().red, 12);
    }

    #[test]
    fn test_flip_vertical_mirrors_rows() {
        let mut r = coded(3, 2);
        flip_vertical(&mut r);
        assert_eq!(r.get(0, 0).unwrap().red, 20);
        assert_eq!(r.get(1, 0).unwrap().red, 10); // odd height: center row stays
        assert_eq!(r.get(2, 1).unwrap().red, 1);
    }

    #[test]
    fn test_flips_are_involutions() {
        let original = coded(4, 5);

        let mut r = original.clone();
        flip_horizontal(&mut r);
        flip_horizontal(&mut r);
        assert_eq!(r, original);

        let mut r = original.clone();
        flip_vertical(&mut r);
        flip_vertical(&mut r);
        assert_eq!(r, original);
    }
}
