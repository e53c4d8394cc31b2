//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to build a fixture raster
    #[error("failed to build fixture '{name}': {source}")]
    Fixture {
        name: &'static str,
        #[source]
        source: pdi_core::Error,
    },

    /// Fixture parameters do not fit the requested raster
    #[error("invalid fixture parameters for '{name}': {message}")]
    FixtureParams { name: &'static str, message: String },

    /// Core error
    #[error("core error: {0}")]
    Core(#[from] pdi_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
