//! PDI Color - Intensity and channel operations
//!
//! This crate provides the per-pixel color operations of the toolkit:
//!
//! - **Grayscale conversion** ([`colorspace`]): average and weighted luma,
//!   single-channel or replicated
//! - **Thresholding** ([`threshold`]): fixed-cutoff binarization
//! - **Channel isolation** ([`channel`]): keep one of B, G, R

pub mod channel;
pub mod colorspace;
pub mod error;
pub mod threshold;

// Re-export core types
pub use pdi_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

pub use channel::{ColorChannel, isolate, isolate_channel};
pub use colorspace::{
    GrayMethod, rgb_to_gray, rgb_to_gray_average, to_average, to_gray, to_gray_replicated,
    to_weighted,
};
pub use threshold::{is_binary, threshold, threshold_to_binary};
