//! pdi-filter - Windowed filtering operations
//!
//! This crate provides the sliding-window operators of the toolkit:
//!
//! - Convolution with square, odd-sized kernels ([`convolve`])
//! - Kernel factories: low-pass, high-pass, sharpen ([`Kernel`])
//! - Edge detection: Roberts, Sobel, Robinson, plus edge thresholding
//! - Histogram equalization
//!
//! Every operator leaves the pixels whose window leaves the raster at 0.

pub mod convolve;
pub mod edge;
pub mod enhance;
mod error;
pub mod kernel;

pub use error::{FilterError, FilterResult};
pub use kernel::{DEFAULT_KERNEL_SIZE, Kernel};

// Re-export commonly used functions
pub use convolve::{convolve, high_pass_filter, low_pass_filter, sharpen};
pub use edge::{
    EdgeOperator, EdgeThresholdOptions, apply_threshold, detect_edges, robinson, roberts, sobel,
};
pub use enhance::{TrcLut, equalize_histogram, equalize_trc, trc_map};
