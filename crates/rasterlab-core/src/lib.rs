//! rasterlab-core - pixel data model for the rasterlab image engine
//!
//! This crate provides the data structures shared by every rasterlab
//! operation:
//!
//! - [`Pixel`] - a single RGBA sample with clamped 8-bit channels
//! - [`Raster`] - the rectangular row-major image grid
//! - [`Interpolation`] - fractional-coordinate samplers (nearest, bilinear)
//! - [`BorderIndexing`] - out-of-range coordinate policies (zero, reflective,
//!   circular)
//! - [`Error`] / [`Result`] - the shared contract-violation error type
//!
//! The engine is stateless: each operation takes one caller-owned [`Raster`],
//! runs to completion, and either rewrites it in place or swaps in a fully
//! built replacement. Invalid parameters fail the call before the first
//! write.

pub mod border;
pub mod error;
pub mod pixel;
pub mod raster;
pub mod sample;

pub use border::BorderIndexing;
pub use error::{Error, Result};
pub use pixel::Pixel;
pub use raster::Raster;
pub use sample::Interpolation;
