//! Raster - the image grid
//!
//! A [`Raster`] is a rectangular, row-major grid of [`Pixel`]s backing one
//! image. Width and height are derived from the rows, never stored, so they
//! cannot drift out of sync with the data.
//!
//! # Mutation modes
//!
//! Engine operations mutate a raster in one of two ways:
//!
//! - **in-place edit** — same dimensions, values rewritten pixel by pixel
//!   (flips, tonal ops, filtering write-back);
//! - **wholesale replace** — a new grid of possibly different dimensions is
//!   built completely off to the side, then swapped in via
//!   [`Raster::replace_rows`] (rotate, shear, scale, crop).
//!
//! Either way no partial grid is ever observable by the caller: validation
//! happens before the first write, and a replacement grid is finished before
//! the swap.

use crate::error::{Error, Result};
use crate::pixel::Pixel;

/// Rectangular row-major grid of pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    rows: Vec<Vec<Pixel>>,
}

/// Check that `rows` forms a non-empty rectangle.
fn validate_rows(rows: &[Vec<Pixel>]) -> Result<()> {
    let height = rows.len();
    let width = rows.first().map_or(0, Vec::len);
    if height == 0 || width == 0 {
        return Err(Error::DegenerateGeometry { width, height });
    }
    for (row, data) in rows.iter().enumerate() {
        if data.len() != width {
            return Err(Error::RaggedRows {
                row,
                actual: data.len(),
                expected: width,
            });
        }
    }
    Ok(())
}

impl Raster {
    /// Build a raster from pixel rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateGeometry`] for an empty grid and
    /// [`Error::RaggedRows`] if the rows have unequal lengths.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Self> {
        validate_rows(&rows)?;
        Ok(Raster { rows })
    }

    /// Build a raster of the given dimensions filled with one pixel value.
    pub fn filled(height: usize, width: usize, pixel: Pixel) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(Error::DegenerateGeometry { width, height });
        }
        Ok(Raster {
            rows: vec![vec![pixel; width]; height],
        })
    }

    /// Height in pixels (number of rows).
    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Width in pixels (length of any row).
    #[inline]
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    /// Borrow the pixel at (row `i`, column `j`).
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<&Pixel> {
        self.rows.get(i).and_then(|row| row.get(j))
    }

    /// Mutably borrow the pixel at (row `i`, column `j`).
    #[inline]
    pub fn get_mut(&mut self, i: usize, j: usize) -> Option<&mut Pixel> {
        self.rows.get_mut(i).and_then(|row| row.get_mut(j))
    }

    /// Borrow the underlying rows.
    #[inline]
    pub fn rows(&self) -> &[Vec<Pixel>] {
        &self.rows
    }

    /// Mutably borrow the underlying rows.
    ///
    /// The rectangle invariant is on the caller: rows must keep equal
    /// lengths. Use [`Raster::replace_rows`] to change dimensions.
    #[inline]
    pub fn rows_mut(&mut self) -> &mut [Vec<Pixel>] {
        &mut self.rows
    }

    /// Swap in a fully constructed replacement grid.
    ///
    /// This is the wholesale-replace seam: resizing operations build the new
    /// grid completely, then commit it here in one step.
    ///
    /// # Errors
    ///
    /// Returns the same validation errors as [`Raster::from_rows`]; on error
    /// the current grid is left untouched.
    pub fn replace_rows(&mut self, rows: Vec<Vec<Pixel>>) -> Result<()> {
        validate_rows(&rows)?;
        self.rows = rows;
        Ok(())
    }
}
