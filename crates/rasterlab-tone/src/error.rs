//! Error types for rasterlab-tone

use thiserror::Error;

/// Errors that can occur during tonal operations
#[derive(Debug, Error)]
pub enum ToneError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rasterlab_core::Error),

    /// Noise probability outside [0, 1]
    #[error("invalid probability: {0} (expected a value in [0, 1])")]
    InvalidProbability(f64),
}

/// Result type for tonal operations
pub type ToneResult<T> = Result<T, ToneError>;
