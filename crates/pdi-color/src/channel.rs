//! Channel isolation
//!
//! Keeps one channel of a raster and zeroes the others.

use crate::{ColorError, ColorResult};
use pdi_core::{Channels, Raster};

/// A channel of a three-channel raster, in native B, G, R order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChannel {
    Blue,
    Green,
    Red,
}

impl ColorChannel {
    /// Sample index of this channel within a pixel.
    pub fn index(self) -> usize {
        match self {
            ColorChannel::Blue => 0,
            ColorChannel::Green => 1,
            ColorChannel::Red => 2,
        }
    }

    /// Channel for a sample index, if it names one.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(ColorChannel::Blue),
            1 => Some(ColorChannel::Green),
            2 => Some(ColorChannel::Red),
            _ => None,
        }
    }
}

/// Zero every channel except `index`.
///
/// The output has the input's shape. For a single-channel raster the only
/// valid index is 0, and the result is a copy of the input.
///
/// # Errors
///
/// Returns [`ColorError::InvalidChannel`] if `index` is not a channel of
/// `raster`.
pub fn isolate_channel(raster: &Raster, index: usize) -> ColorResult<Raster> {
    let channels = raster.channels().count();
    if index >= channels {
        return Err(ColorError::InvalidChannel { index, channels });
    }
    if raster.channels() == Channels::One {
        log::debug!("isolate_channel: single-channel input, returning a copy");
        return Ok(raster.deep_clone());
    }

    let mut out = raster.create_template_mut(Channels::Three);
    for (dst, src) in out
        .data_mut()
        .chunks_exact_mut(3)
        .zip(raster.data().chunks_exact(3))
    {
        dst[index] = src[index];
    }
    Ok(out.into())
}

/// Zero every channel except `channel`.
///
/// # Errors
///
/// Returns [`ColorError::InvalidChannel`] if `raster` does not have the
/// requested channel.
pub fn isolate(raster: &Raster, channel: ColorChannel) -> ColorResult<Raster> {
    isolate_channel(raster, channel.index())
}
