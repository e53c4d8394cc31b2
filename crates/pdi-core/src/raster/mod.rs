//! Raster - The main image container
//!
//! The `Raster` structure is the fundamental image type of the toolkit.
//! It holds a contiguous 2D grid of 8-bit samples with either one channel
//! (grayscale) or three channels (color).
//!
//! # Pixel layout
//!
//! - Samples are stored row-major, interleaved per pixel
//! - Every pixel of a raster has the same channel count
//! - Three-channel rasters use the native order B, G, R
//!   (channel 0 is blue, channel 2 is red)
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for cheap cloning (shared ownership).
//! To modify sample data, convert to `RasterMut` via [`Raster::try_into_mut`]
//! or [`Raster::to_mut`], then convert back with `Into<Raster>`.
//! Every operation in the toolkit reads its inputs and allocates a fresh
//! output; inputs are never modified.

mod access;
pub mod arith;
pub mod graphics;
pub mod histogram;
#[cfg(feature = "image")]
mod interop;

pub use graphics::Color;
pub use histogram::{HISTOGRAM_BINS, Histogram, HistogramCanvas};

use crate::error::{Error, Result};
use std::sync::Arc;

/// Number of channels per pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Channels {
    /// Single-channel grayscale
    One = 1,
    /// Three-channel color, native order B, G, R
    Three = 3,
}

impl Channels {
    /// Create `Channels` from a raw channel count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChannels`] if `count` is not 1 or 3.
    pub fn from_count(count: usize) -> Result<Self> {
        match count {
            1 => Ok(Channels::One),
            3 => Ok(Channels::Three),
            _ => Err(Error::InvalidChannels(count)),
        }
    }

    /// Get the number of samples per pixel.
    #[inline]
    pub fn count(self) -> usize {
        self as usize
    }

    /// Check whether this is a three-channel (color) layout.
    #[inline]
    pub fn is_color(self) -> bool {
        self == Channels::Three
    }
}

/// Internal raster data
#[derive(Debug, Clone, PartialEq, Eq)]
struct RasterData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Samples per pixel
    channels: Channels,
    /// Interleaved samples, `width * height * channels` long
    data: Vec<u8>,
}

impl RasterData {
    fn zeroed(width: u32, height: u32, channels: Channels) -> Self {
        let len = width as usize * height as usize * channels.count();
        RasterData {
            width,
            height,
            channels,
            data: vec![0u8; len],
        }
    }
}

/// Raster - Main image container
///
/// # Examples
///
/// ```
/// use pdi_core::{Channels, Raster};
///
/// let raster = Raster::new(640, 480, Channels::One).unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a new raster with the specified dimensions and channel count.
    ///
    /// The sample data is initialized to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, channels: Channels) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Raster {
            inner: Arc::new(RasterData::zeroed(width, height, channels)),
        })
    }

    /// Create a raster where every sample has the same value.
    pub fn new_filled(width: u32, height: u32, channels: Channels, value: u8) -> Result<Self> {
        let raster = Self::new(width, height, channels)?;
        let mut raster_mut = raster.to_mut();
        raster_mut.fill(value);
        Ok(raster_mut.into())
    }

    /// Create a raster from interleaved sample data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero extent and
    /// [`Error::BufferSizeMismatch`] if `data` does not hold exactly
    /// `width * height * channels` samples.
    pub fn from_vec(width: u32, height: u32, channels: Channels, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize * channels.count();
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                channels,
                data,
            }),
        })
    }

    /// Get the raster width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the raster height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the channel layout.
    #[inline]
    pub fn channels(&self) -> Channels {
        self.inner.channels
    }

    /// Get the number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.inner.width as usize * self.inner.height as usize
    }

    /// Get raw access to the interleaved samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get the samples of a single row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u8] {
        let stride = self.inner.width as usize * self.inner.channels.count();
        let start = y as usize * stride;
        &self.inner.data[start..start + stride]
    }

    /// Check if two rasters have the same width, height, and channel count.
    pub fn sizes_equal(&self, other: &Raster) -> bool {
        self.inner.width == other.inner.width
            && self.inner.height == other.inner.height
            && self.inner.channels == other.inner.channels
    }

    /// Create a zeroed raster with the same dimensions and channel count.
    pub fn create_template(&self) -> Self {
        Raster {
            inner: Arc::new(RasterData::zeroed(
                self.inner.width,
                self.inner.height,
                self.inner.channels,
            )),
        }
    }

    /// Create a zeroed, mutable raster with the same dimensions and the
    /// given channel layout.
    pub fn create_template_mut(&self, channels: Channels) -> RasterMut {
        RasterMut {
            inner: RasterData::zeroed(self.inner.width, self.inner.height, channels),
        }
    }

    /// Create a deep copy of this raster.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates
    /// a completely independent copy.
    pub fn deep_clone(&self) -> Self {
        Raster {
            inner: Arc::new(self.inner.as_ref().clone()),
        }
    }

    /// Try to get mutable access to the sample data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut { inner: data }),
            Err(arc) => Err(Raster { inner: arc }),
        }
    }

    /// Create a mutable copy of this raster.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut {
            inner: self.inner.as_ref().clone(),
        }
    }

    /// Get the number of strong references to this raster.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

impl PartialEq for Raster {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.inner == other.inner
    }
}

impl Eq for Raster {}

/// Mutable raster
///
/// Allows modification of sample data. Convert back to an immutable
/// [`Raster`] using `Into<Raster>`.
#[derive(Debug)]
pub struct RasterMut {
    inner: RasterData,
}

impl RasterMut {
    /// Create a zeroed mutable raster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, channels: Channels) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self::zeroed(width, height, channels))
    }

    /// Zeroed raster for extents already known to be non-empty.
    pub(crate) fn zeroed(width: u32, height: u32, channels: Channels) -> Self {
        debug_assert!(width > 0 && height > 0);
        RasterMut {
            inner: RasterData::zeroed(width, height, channels),
        }
    }

    /// Get the raster width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the raster height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the channel layout.
    #[inline]
    pub fn channels(&self) -> Channels {
        self.inner.channels
    }

    /// Get raw access to the interleaved samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get mutable access to the interleaved samples.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }

    /// Set every sample to `value`.
    pub fn fill(&mut self, value: u8) {
        self.inner.data.fill(value);
    }
}

impl From<RasterMut> for Raster {
    fn from(raster_mut: RasterMut) -> Self {
        Raster {
            inner: Arc::new(raster_mut.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_creation() {
        let raster = Raster::new(100, 200, Channels::One).unwrap();
        assert_eq!(raster.width(), 100);
        assert_eq!(raster.height(), 200);
        assert_eq!(raster.channels(), Channels::One);
        assert_eq!(raster.data().len(), 100 * 200);
        assert!(raster.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_raster_color_creation() {
        let raster = Raster::new(4, 3, Channels::Three).unwrap();
        assert_eq!(raster.data().len(), 4 * 3 * 3);
        assert_eq!(raster.row_data(2).len(), 12);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Raster::new(0, 100, Channels::One).is_err());
        assert!(Raster::new(100, 0, Channels::Three).is_err());
        assert!(RasterMut::new(0, 0, Channels::One).is_err());
    }

    #[test]
    fn test_channels_from_count() {
        assert_eq!(Channels::from_count(1).unwrap(), Channels::One);
        assert_eq!(Channels::from_count(3).unwrap(), Channels::Three);
        assert!(Channels::from_count(2).is_err());
        assert!(Channels::from_count(4).is_err());
    }

    #[test]
    fn test_from_vec_validates_length() {
        assert!(Raster::from_vec(2, 2, Channels::One, vec![1, 2, 3, 4]).is_ok());
        assert!(matches!(
            Raster::from_vec(2, 2, Channels::Three, vec![0; 4]),
            Err(Error::BufferSizeMismatch {
                expected: 12,
                actual: 4
            })
        ));
    }

    #[test]
    fn test_clone_shares_data() {
        let raster1 = Raster::new(10, 10, Channels::One).unwrap();
        let raster2 = raster1.clone();
        assert_eq!(raster1.ref_count(), 2);
        assert_eq!(raster2.ref_count(), 2);
    }

    #[test]
    fn test_deep_clone_is_independent() {
        let raster1 = Raster::new(10, 10, Channels::One).unwrap();
        let raster2 = raster1.deep_clone();
        assert_eq!(raster1.ref_count(), 1);
        assert_eq!(raster2.ref_count(), 1);
        assert_eq!(raster1, raster2);
    }

    #[test]
    fn test_try_into_mut_requires_unique_owner() {
        let raster = Raster::new(3, 3, Channels::One).unwrap();
        let shared = raster.clone();
        let raster = raster.try_into_mut().unwrap_err();
        drop(shared);
        let mut raster_mut = raster.try_into_mut().unwrap();
        raster_mut.data_mut()[0] = 9;
        let raster: Raster = raster_mut.into();
        assert_eq!(raster.data()[0], 9);
    }

    #[test]
    fn test_new_filled() {
        let raster = Raster::new_filled(3, 2, Channels::Three, 77).unwrap();
        assert!(raster.data().iter().all(|&v| v == 77));
    }

    #[test]
    fn test_equality_compares_samples() {
        let a = Raster::from_vec(2, 1, Channels::One, vec![1, 2]).unwrap();
        let b = Raster::from_vec(2, 1, Channels::One, vec![1, 2]).unwrap();
        let c = Raster::from_vec(2, 1, Channels::One, vec![1, 3]).unwrap();
        let d = Raster::from_vec(1, 2, Channels::One, vec![1, 2]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn test_create_template() {
        let raster = Raster::new_filled(5, 4, Channels::Three, 200).unwrap();
        let template = raster.create_template();
        assert!(template.sizes_equal(&raster));
        assert!(template.data().iter().all(|&v| v == 0));

        let gray = raster.create_template_mut(Channels::One);
        assert_eq!(gray.width(), 5);
        assert_eq!(gray.height(), 4);
        assert_eq!(gray.data().len(), 20);
    }
}
