//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building test fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rasterlab_core::Error),

    /// Fixture construction was given impossible dimensions
    #[error("invalid fixture: {0}")]
    InvalidFixture(String),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
