//! Error types for pdi-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Only structurally invalid inputs are reported as errors; numeric edge
//! cases (division by zero, empty histograms, mismatched extents) always
//! produce a defined, saturated result instead.

use thiserror::Error;

/// pdi-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid raster dimensions
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Unsupported channel count
    #[error("unsupported channel count: {0} (expected 1 or 3)")]
    InvalidChannels(usize),

    /// Pixel buffer does not match the declared geometry
    #[error("buffer size mismatch: expected {expected} samples, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Index out of bounds
    #[error("index out of bounds: ({x}, {y}, channel {channel}) in {width}x{height}x{channels}")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        channel: usize,
        width: u32,
        height: u32,
        channels: usize,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for pdi-core operations
pub type Result<T> = std::result::Result<T, Error>;
