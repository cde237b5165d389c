//! Error types for rasterlab-filter

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rasterlab_core::Error),

    /// Kernel matrix is empty, ragged, or contains non-finite entries
    #[error("malformed kernel: {0}")]
    MalformedKernel(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
