//! Error types for rasterlab-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Every variant is a caller contract violation: operations fail closed,
//! leaving the target raster untouched, rather than clamping silently.

use thiserror::Error;

/// Rasterlab core error type
#[derive(Error, Debug)]
pub enum Error {
    /// A channel value supplied for a pixel lies outside [0, 255]
    #[error("channel {channel} out of range: {value} (expected 0..=255)")]
    ChannelOutOfRange {
        channel: &'static str,
        value: i32,
    },

    /// Averaging bias outside [0, 1]
    #[error("invalid averaging bias: {0} (expected 0.0..=1.0)")]
    InvalidBias(f64),

    /// An operation would produce a zero-width or zero-height raster
    #[error("degenerate geometry: {width}x{height} result")]
    DegenerateGeometry { width: usize, height: usize },

    /// Rows of unequal length supplied for a raster
    #[error("ragged rows: row {row} has length {actual}, expected {expected}")]
    RaggedRows {
        row: usize,
        actual: usize,
        expected: usize,
    },
}

/// Result type alias for rasterlab-core operations
pub type Result<T> = std::result::Result<T, Error>;
