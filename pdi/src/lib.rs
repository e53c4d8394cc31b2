//! pdi - Spatial-domain digital image processing for Rust
//!
//! A small toolkit of classic pixel-level operators on 8-bit rasters with
//! one or three channels:
//!
//! - Scalar and inter-image arithmetic, inversion, histograms
//! - Grayscale conversion, thresholding, channel isolation
//! - Convolution, edge detection, histogram equalization
//! - Binary morphology: erosion, dilation, opening, closing, boundaries
//!
//! # Example
//!
//! ```
//! use pdi::{Channels, Raster};
//!
//! let raster = Raster::new_filled(64, 48, Channels::Three, 90).unwrap();
//! let gray = pdi::color::to_gray(&raster, pdi::color::GrayMethod::Weighted);
//! let edges = pdi::filter::sobel(&gray);
//! assert_eq!(edges.channels(), Channels::One);
//! assert!(edges.data().iter().all(|&v| v == 0));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pdi_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pdi_color as color;
pub use pdi_filter as filter;
pub use pdi_morph as morph;
