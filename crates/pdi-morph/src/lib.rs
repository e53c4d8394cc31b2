//! pdi-morph - Binary morphology
//!
//! This crate provides:
//!
//! - Structuring elements ([`Sel`]): square, cross, or parsed from a pattern
//! - Erosion, dilation, opening and closing on binary rasters
//! - Internal and external boundary extraction
//!
//! Every operation binarizes its input first; see [`BinarizeOptions`].

pub mod binary;
mod error;
pub mod sel;

pub use error::{MorphError, MorphResult};
pub use sel::{DEFAULT_SEL_SIZE, Sel, SelElement};

pub use binary::{
    BinarizeOptions, BoundaryType, binarize, close, close_with, dilate, dilate_with, erode,
    erode_with, external_boundary, external_boundary_with, extract_boundary, internal_boundary,
    internal_boundary_with, open, open_with,
};
