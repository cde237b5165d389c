//! RasterLab - in-memory raster image transformation engine
//!
//! RasterLab applies geometric, tonal, and spatial-filter transformations to
//! an RGBA pixel grid, entirely in memory. There is no file I/O: the caller
//! supplies a [`Raster`], invokes one transform, and reads the grid back.
//!
//! # Overview
//!
//! - Geometric transforms: flip, crop, rotate, shear, scale
//! - Interpolation (nearest, bilinear) and border indexing (zero,
//!   reflective, circular) strategies
//! - Kernel convolution with cut-off or renormalizing bounding, plus
//!   min/median/max rank filtering
//! - Histograms, equalization, point mappings, grayscale, impulse noise
//!
//! # Example
//!
//! ```
//! use rasterlab::{Pixel, Raster, Interpolation};
//! use rasterlab::transform::rotate;
//!
//! let mut raster = Raster::filled(10, 10, Pixel::rgb(100, 100, 100)).unwrap();
//! rotate(&mut raster, 45.0, Interpolation::Bilinear, Pixel::rgb(0, 0, 0)).unwrap();
//! assert_eq!(raster.height(), 14);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use rasterlab_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use rasterlab_filter as filter;
pub use rasterlab_tone as tone;
pub use rasterlab_transform as transform;
