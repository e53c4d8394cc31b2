//! PDI Core - Basic data structures for image processing
//!
//! This crate provides the fundamental pieces shared by every other crate
//! of the toolkit:
//!
//! - [`Raster`] / [`RasterMut`] - The 8-bit image container (immutable / mutable)
//! - [`Channels`] - One (grayscale) or three (B, G, R) channels per pixel
//! - [`saturate`] - The single clamping contract used by all numeric code
//! - Per-sample arithmetic and [`Raster::invert`]
//! - [`Histogram`] computation and [`render_histograms`]
//! - Line rendering with [`Color`]
//!
//! With the default `image` feature, rasters convert to and from the
//! `image` crate's buffers.

pub mod error;
pub mod raster;
pub mod saturate;

pub use error::{Error, Result};
pub use raster::arith::ArithOp;
pub use raster::graphics::{line_points, wide_line_points};
pub use raster::histogram::render_histograms;
pub use raster::{
    Channels, Color, HISTOGRAM_BINS, Histogram, HistogramCanvas, Raster, RasterMut,
};
