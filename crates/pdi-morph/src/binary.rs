//! Binary morphological operations
//!
//! All operations work on binary rasters: one channel, every sample 0 or
//! 255. Any input is binarized first (weighted gray, then `v > cutoff`),
//! on every call, so pre-binarize to control the cutoff or pass explicit
//! [`BinarizeOptions`] to the `_with` variants.
//!
//! # Border handling
//!
//! Only pixels whose full structuring-element footprint lies inside the
//! raster are computed. A border of `sel.radius()` pixels is left at 0; a
//! raster smaller than the SEL yields an all-zero result.

use crate::Sel;
use pdi_color::threshold_to_binary;
use pdi_core::{Channels, Raster};

/// Binarization applied implicitly by every morphological operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinarizeOptions {
    /// Samples strictly above this value become 255, the rest 0
    pub cutoff: u8,
}

impl Default for BinarizeOptions {
    fn default() -> Self {
        Self { cutoff: 128 }
    }
}

/// Type of boundary to extract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryType {
    /// Foreground pixels removed by erosion
    Inner,
    /// Background pixels added by dilation
    Outer,
}

/// Reduce any raster to a binary raster with the given options
pub fn binarize(raster: &Raster, options: &BinarizeOptions) -> Raster {
    threshold_to_binary(raster, options.cutoff)
}

/// Run a hit-counting pass: `want_all` selects erosion, otherwise dilation.
fn sweep(bin: &Raster, sel: &Sel, want_all: bool) -> Raster {
    let w = bin.width();
    let h = bin.height();
    let size = sel.size();
    let r = sel.radius();

    let mut out = bin.create_template_mut(Channels::One);
    if w < size || h < size {
        return out.into();
    }

    // With no hits, erosion sets every computed pixel and dilation none.
    let offsets: Vec<(i32, i32)> = sel.hit_offsets().collect();

    for y in r..h - r {
        for x in r..w - r {
            let mut hits = offsets.iter().map(|&(dx, dy)| {
                let sx = (x as i32 + dx) as u32;
                let sy = (y as i32 + dy) as u32;
                bin.get_sample_unchecked(sx, sy, 0) == 255
            });
            let on = if want_all {
                hits.all(|hit| hit)
            } else {
                hits.any(|hit| hit)
            };
            if on {
                out.set_sample_unchecked(x, y, 0, 255);
            }
        }
    }

    out.into()
}

fn erode_binary(bin: &Raster, sel: &Sel) -> Raster {
    sweep(bin, sel, true)
}

fn dilate_binary(bin: &Raster, sel: &Sel) -> Raster {
    sweep(bin, sel, false)
}

/// `a AND NOT b` on two binary rasters of equal size
fn and_not(a: &Raster, b: &Raster) -> Raster {
    let mut out = a.create_template_mut(Channels::One);
    for ((dst, &va), &vb) in out.data_mut().iter_mut().zip(a.data()).zip(b.data()) {
        if va == 255 && vb == 0 {
            *dst = 255;
        }
    }
    out.into()
}

/// Erode with the default binarization
///
/// A pixel becomes 255 iff every hit of `sel` centered on it lands on a
/// 255 pixel.
///
/// # Example
///
/// ```
/// use pdi_core::{Channels, Raster};
/// use pdi_morph::{Sel, erode};
///
/// let raster = Raster::new_filled(5, 5, Channels::One, 255).unwrap();
/// let eroded = erode(&raster, &Sel::create_square(3));
/// assert_eq!(eroded.get_sample(2, 2, 0), Some(255));
/// assert_eq!(eroded.get_sample(0, 0, 0), Some(0));
/// ```
pub fn erode(raster: &Raster, sel: &Sel) -> Raster {
    erode_with(raster, sel, &BinarizeOptions::default())
}

/// Erode with explicit binarization options
pub fn erode_with(raster: &Raster, sel: &Sel, options: &BinarizeOptions) -> Raster {
    erode_binary(&binarize(raster, options), sel)
}

/// Dilate with the default binarization
///
/// A pixel becomes 255 iff at least one hit of `sel` centered on it lands
/// on a 255 pixel.
pub fn dilate(raster: &Raster, sel: &Sel) -> Raster {
    dilate_with(raster, sel, &BinarizeOptions::default())
}

/// Dilate with explicit binarization options
pub fn dilate_with(raster: &Raster, sel: &Sel, options: &BinarizeOptions) -> Raster {
    dilate_binary(&binarize(raster, options), sel)
}

/// Opening: erosion followed by dilation
///
/// Removes foreground features smaller than the SEL.
pub fn open(raster: &Raster, sel: &Sel) -> Raster {
    open_with(raster, sel, &BinarizeOptions::default())
}

/// Opening with explicit binarization options
pub fn open_with(raster: &Raster, sel: &Sel, options: &BinarizeOptions) -> Raster {
    let eroded = erode_binary(&binarize(raster, options), sel);
    dilate_binary(&eroded, sel)
}

/// Closing: dilation followed by erosion
///
/// Fills background gaps smaller than the SEL.
pub fn close(raster: &Raster, sel: &Sel) -> Raster {
    close_with(raster, sel, &BinarizeOptions::default())
}

/// Closing with explicit binarization options
pub fn close_with(raster: &Raster, sel: &Sel, options: &BinarizeOptions) -> Raster {
    let dilated = dilate_binary(&binarize(raster, options), sel);
    erode_binary(&dilated, sel)
}

/// Internal boundary: foreground pixels that erosion removes
pub fn internal_boundary(raster: &Raster, sel: &Sel) -> Raster {
    internal_boundary_with(raster, sel, &BinarizeOptions::default())
}

/// Internal boundary with explicit binarization options
pub fn internal_boundary_with(raster: &Raster, sel: &Sel, options: &BinarizeOptions) -> Raster {
    let bin = binarize(raster, options);
    let eroded = erode_binary(&bin, sel);
    and_not(&bin, &eroded)
}

/// External boundary: background pixels that dilation adds
pub fn external_boundary(raster: &Raster, sel: &Sel) -> Raster {
    external_boundary_with(raster, sel, &BinarizeOptions::default())
}

/// External boundary with explicit binarization options
pub fn external_boundary_with(raster: &Raster, sel: &Sel, options: &BinarizeOptions) -> Raster {
    let bin = binarize(raster, options);
    let dilated = dilate_binary(&bin, sel);
    and_not(&dilated, &bin)
}

/// Extract a boundary of the given type with the default binarization
pub fn extract_boundary(raster: &Raster, sel: &Sel, boundary_type: BoundaryType) -> Raster {
    match boundary_type {
        BoundaryType::Inner => internal_boundary(raster, sel),
        BoundaryType::Outer => external_boundary(raster, sel),
    }
}
