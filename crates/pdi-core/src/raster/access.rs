//! Sample access functions
//!
//! Low-level functions for getting and setting individual samples and
//! pixels. Every checked accessor enforces `x < width`, `y < height` and
//! `channel < channels`.

use super::{Raster, RasterMut};
use crate::error::{Error, Result};

#[inline]
fn sample_index(width: u32, channels: usize, x: u32, y: u32, channel: usize) -> usize {
    (y as usize * width as usize + x as usize) * channels + channel
}

impl Raster {
    /// Get a sample value at (x, y) in the given channel.
    ///
    /// Returns `None` if any coordinate is out of bounds.
    pub fn get_sample(&self, x: u32, y: u32, channel: usize) -> Option<u8> {
        let channels = self.channels().count();
        if x >= self.width() || y >= self.height() || channel >= channels {
            return None;
        }
        Some(self.data()[sample_index(self.width(), channels, x, y, channel)])
    }

    /// Get a sample value without bounds checking of the individual axes.
    ///
    /// # Panics
    ///
    /// May panic if the coordinates fall outside the sample buffer.
    #[inline]
    pub fn get_sample_unchecked(&self, x: u32, y: u32, channel: usize) -> u8 {
        self.data()[sample_index(self.width(), self.channels().count(), x, y, channel)]
    }

    /// Get all samples of the pixel at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get all samples of a pixel without bounds checking of the axes.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> &[u8] {
        let channels = self.channels().count();
        let start = sample_index(self.width(), channels, x, y, 0);
        &self.data()[start..start + channels]
    }
}

impl RasterMut {
    /// Get a sample value at (x, y) in the given channel.
    pub fn get_sample(&self, x: u32, y: u32, channel: usize) -> Option<u8> {
        let channels = self.channels().count();
        if x >= self.width() || y >= self.height() || channel >= channels {
            return None;
        }
        Some(self.data()[sample_index(self.width(), channels, x, y, channel)])
    }

    /// Get a sample value without bounds checking of the individual axes.
    #[inline]
    pub fn get_sample_unchecked(&self, x: u32, y: u32, channel: usize) -> u8 {
        self.data()[sample_index(self.width(), self.channels().count(), x, y, channel)]
    }

    /// Set a sample value at (x, y) in the given channel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if any coordinate is out of bounds.
    pub fn set_sample(&mut self, x: u32, y: u32, channel: usize, val: u8) -> Result<()> {
        let channels = self.channels().count();
        if x >= self.width() || y >= self.height() || channel >= channels {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                channel,
                width: self.width(),
                height: self.height(),
                channels,
            });
        }
        self.set_sample_unchecked(x, y, channel, val);
        Ok(())
    }

    /// Set a sample value without bounds checking of the individual axes.
    #[inline]
    pub fn set_sample_unchecked(&mut self, x: u32, y: u32, channel: usize, val: u8) {
        let idx = sample_index(self.width(), self.channels().count(), x, y, channel);
        self.data_mut()[idx] = val;
    }

    /// Set every channel of the pixel at (x, y) to `val`.
    #[inline]
    pub fn fill_pixel_unchecked(&mut self, x: u32, y: u32, val: u8) {
        let channels = self.channels().count();
        let start = sample_index(self.width(), channels, x, y, 0);
        self.data_mut()[start..start + channels].fill(val);
    }

    /// Copy `samples` into the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if `samples.len()` differs from the channel count.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, samples: &[u8]) {
        let channels = self.channels().count();
        let start = sample_index(self.width(), channels, x, y, 0);
        self.data_mut()[start..start + channels].copy_from_slice(samples);
    }
}

#[cfg(test)]
mod tests {
    use crate::{Channels, Raster, RasterMut};

    #[test]
    fn test_get_set_gray_sample() {
        let mut rm = RasterMut::new(4, 3, Channels::One).unwrap();
        rm.set_sample(3, 2, 0, 42).unwrap();
        let raster: Raster = rm.into();
        assert_eq!(raster.get_sample(3, 2, 0), Some(42));
        assert_eq!(raster.get_sample(0, 0, 0), Some(0));
        assert_eq!(raster.data()[2 * 4 + 3], 42);
    }

    #[test]
    fn test_get_set_color_sample() {
        let mut rm = RasterMut::new(2, 2, Channels::Three).unwrap();
        rm.set_pixel_unchecked(1, 0, &[10, 20, 30]);
        let raster: Raster = rm.into();
        assert_eq!(raster.get_pixel(1, 0), Some(&[10u8, 20, 30][..]));
        assert_eq!(raster.get_sample(1, 0, 2), Some(30));
        assert_eq!(&raster.data()[3..6], &[10, 20, 30]);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut rm = RasterMut::new(2, 2, Channels::One).unwrap();
        assert!(rm.set_sample(2, 0, 0, 1).is_err());
        assert!(rm.set_sample(0, 2, 0, 1).is_err());
        assert!(rm.set_sample(0, 0, 1, 1).is_err());
        let raster: Raster = rm.into();
        assert_eq!(raster.get_sample(2, 0, 0), None);
        assert_eq!(raster.get_sample(0, 0, 1), None);
        assert!(raster.get_pixel(0, 5).is_none());
    }

    #[test]
    fn test_fill_pixel() {
        let mut rm = RasterMut::new(1, 1, Channels::Three).unwrap();
        rm.fill_pixel_unchecked(0, 0, 7);
        assert_eq!(rm.data(), &[7, 7, 7]);
    }
}
