//! Error types for pdi-color

use thiserror::Error;

/// Errors that can occur during color processing operations
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pdi_core::Error),

    /// Channel index does not exist in the raster
    #[error("invalid channel index {index} for a {channels}-channel raster")]
    InvalidChannel { index: usize, channels: usize },
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
