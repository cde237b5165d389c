//! Border-indexing strategies
//!
//! A border-indexing strategy maps a possibly out-of-range grid coordinate to
//! a concrete sample. Convolution windows and index-replicating scale reach
//! past the grid edges; the strategy decides what they see there.

use crate::pixel::Pixel;
use crate::raster::Raster;

/// Policy for resolving out-of-range grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderIndexing {
    /// Out-of-range coordinates read as fully transparent black.
    Zero,
    /// Coordinates fold back at the edges in a ping-pong pattern
    /// (`..., 1, 0, 0, 1, ..., h-1, h-1, h-2, ...`).
    Reflective,
    /// Coordinates wrap around modulo the grid dimensions.
    Circular,
}

/// Mirror `v` into `[0, len)` by folding over period `2 * len`.
fn reflect(v: i64, len: i64) -> i64 {
    let period = len * 2;
    let folded = ((v % period) + period) % period;
    if folded >= len { period - 1 - folded } else { folded }
}

/// Wrap `v` into `[0, len)`, with negatives counting back from the far edge.
fn wrap(v: i64, len: i64) -> i64 {
    if v < 0 { len - 1 - ((-v - 1) % len) } else { v % len }
}

impl BorderIndexing {
    /// Sample `raster` at (row `i`, column `j`), resolving out-of-range
    /// coordinates by this policy. Returns a copy of the resolved pixel.
    pub fn sample(&self, raster: &Raster, i: i64, j: i64) -> Pixel {
        let height = raster.height() as i64;
        let width = raster.width() as i64;
        let (ri, rj) = match self {
            BorderIndexing::Zero => {
                if i < 0 || j < 0 || i >= height || j >= width {
                    return Pixel::new(0, 0, 0, 0);
                }
                (i, j)
            }
            BorderIndexing::Reflective => (reflect(i, height), reflect(j, width)),
            BorderIndexing::Circular => (wrap(i, height), wrap(j, width)),
        };
        raster.rows()[ri as usize][rj as usize]
    }
}
