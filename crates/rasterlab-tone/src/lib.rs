//! rasterlab-tone - Histogram and tonal operations for RasterLab
//!
//! This crate provides the tonal side of the engine:
//!
//! - Per-channel frequency and normalized cumulative histograms
//! - Histogram equalization
//! - Linear and power-law point mappings, channel inversion, grayscale
//! - Salt/pepper impulse noise with an injectable random source
//!
//! All operations rewrite the color channels in place and leave alpha
//! untouched.

pub mod equalize;
mod error;
pub mod histogram;
pub mod map;
pub mod noise;

pub use equalize::equalize;
pub use error::{ToneError, ToneResult};
pub use histogram::{CumulativeHistogram, Histogram};
pub use map::{grayscale, invert, linear_map, power_map};
pub use noise::{DEFAULT_NOISE_PROBABILITY, add_noise, pepper, salt, salt_and_pepper};
