//! Grayscale conversion
//!
//! Two fixed luminance policies reduce a three-channel (B, G, R) raster to
//! intensity:
//!
//! - [`GrayMethod::Average`]: `(R + G + B) / 3` with integer truncation
//! - [`GrayMethod::Weighted`]: `0.114*B + 0.587*G + 0.299*R`, truncated
//!
//! [`to_gray`] produces a single-channel raster. [`to_average`] and
//! [`to_weighted`] keep the input's channel count and replicate the gray
//! value into every channel.
//!
//! A single-channel input is already gray; every converter returns it
//! unchanged.

use pdi_core::saturate::saturate_f64;
use pdi_core::{Channels, Raster};

/// Luma weight of the blue channel
pub const WEIGHT_BLUE: f64 = 0.114;
/// Luma weight of the green channel
pub const WEIGHT_GREEN: f64 = 0.587;
/// Luma weight of the red channel
pub const WEIGHT_RED: f64 = 0.299;

/// Grayscale reduction policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrayMethod {
    /// Unweighted mean of the three channels
    Average,
    /// Perceptual luma weights
    #[default]
    Weighted,
}

impl GrayMethod {
    /// Reduce one B, G, R pixel to a gray value.
    #[inline]
    pub fn apply(self, b: u8, g: u8, r: u8) -> u8 {
        match self {
            GrayMethod::Average => rgb_to_gray_average(r, g, b),
            GrayMethod::Weighted => rgb_to_gray(r, g, b),
        }
    }
}

/// Convert RGB to grayscale using luma weights
///
/// Formula: gray = 0.114*B + 0.587*G + 0.299*R, truncated toward zero.
#[inline]
pub fn rgb_to_gray(r: u8, g: u8, b: u8) -> u8 {
    saturate_f64(WEIGHT_BLUE * b as f64 + WEIGHT_GREEN * g as f64 + WEIGHT_RED * r as f64)
}

/// Convert RGB to grayscale using the unweighted mean
#[inline]
pub fn rgb_to_gray_average(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 + g as u32 + b as u32) / 3) as u8
}

/// Convert a raster to a single-channel gray raster.
///
/// # Example
///
/// ```
/// use pdi_color::{GrayMethod, to_gray};
/// use pdi_core::{Channels, Raster};
///
/// let raster = Raster::from_vec(1, 1, Channels::Three, vec![30, 60, 90]).unwrap();
/// let gray = to_gray(&raster, GrayMethod::Average);
/// assert_eq!(gray.channels(), Channels::One);
/// assert_eq!(gray.data(), &[60]);
/// ```
pub fn to_gray(raster: &Raster, method: GrayMethod) -> Raster {
    if raster.channels() == Channels::One {
        log::debug!("to_gray: input already has one channel, returning it unchanged");
        return raster.clone();
    }

    let mut out = raster.create_template_mut(Channels::One);
    for (dst, px) in out.data_mut().iter_mut().zip(raster.data().chunks_exact(3)) {
        *dst = method.apply(px[0], px[1], px[2]);
    }
    out.into()
}

/// Convert to gray, replicating the value into every channel.
///
/// The output has the same channel count as the input.
pub fn to_gray_replicated(raster: &Raster, method: GrayMethod) -> Raster {
    if raster.channels() == Channels::One {
        log::debug!("to_gray_replicated: input already has one channel, returning it unchanged");
        return raster.clone();
    }

    let mut out = raster.create_template_mut(Channels::Three);
    for (dst, px) in out
        .data_mut()
        .chunks_exact_mut(3)
        .zip(raster.data().chunks_exact(3))
    {
        dst.fill(method.apply(px[0], px[1], px[2]));
    }
    out.into()
}

/// Average grayscale, replicated into every channel.
pub fn to_average(raster: &Raster) -> Raster {
    to_gray_replicated(raster, GrayMethod::Average)
}

/// Weighted (luma) grayscale, replicated into every channel.
pub fn to_weighted(raster: &Raster) -> Raster {
    to_gray_replicated(raster, GrayMethod::Weighted)
}
