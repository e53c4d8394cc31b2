//! Conversions between [`Raster`] and the `image` crate buffers
//!
//! The toolkit does no file I/O itself; these conversions let a caller
//! decode with `image` and hand the pixels over. `image` stores color as
//! R, G, B while rasters use B, G, R, so channels are swapped on the way
//! in and out.

use super::{Channels, Raster, RasterMut};
use crate::error::{Error, Result};
use image::{DynamicImage, GrayImage, RgbImage};

impl Raster {
    /// Create a single-channel raster from an 8-bit grayscale image.
    pub fn from_gray_image(img: &GrayImage) -> Result<Raster> {
        let (width, height) = img.dimensions();
        Raster::from_vec(width, height, Channels::One, img.as_raw().clone())
    }

    /// Create a three-channel raster from an RGB image.
    pub fn from_rgb_image(img: &RgbImage) -> Result<Raster> {
        let (width, height) = img.dimensions();
        let mut raster = RasterMut::new(width, height, Channels::Three)?;
        for (x, y, pixel) in img.enumerate_pixels() {
            let [r, g, b] = pixel.0;
            raster.set_pixel_unchecked(x, y, &[b, g, r]);
        }
        Ok(raster.into())
    }

    /// Create a raster from any decoded image.
    ///
    /// Images without color become single-channel rasters; everything else
    /// is converted to 8-bit RGB first. Alpha is discarded.
    pub fn from_dynamic_image(img: &DynamicImage) -> Result<Raster> {
        if img.color().has_color() {
            Raster::from_rgb_image(&img.to_rgb8())
        } else {
            Raster::from_gray_image(&img.to_luma8())
        }
    }

    /// Convert this raster into an `image` buffer.
    ///
    /// Single-channel rasters become `ImageLuma8`, three-channel rasters
    /// `ImageRgb8`.
    pub fn to_dynamic_image(&self) -> Result<DynamicImage> {
        let (width, height) = (self.width(), self.height());
        let mismatch = || Error::BufferSizeMismatch {
            expected: self.pixel_count() * self.channels().count(),
            actual: self.data().len(),
        };
        match self.channels() {
            Channels::One => GrayImage::from_raw(width, height, self.data().to_vec())
                .map(DynamicImage::ImageLuma8)
                .ok_or_else(mismatch),
            Channels::Three => {
                let rgb: Vec<u8> = self
                    .data()
                    .chunks_exact(3)
                    .flat_map(|bgr| [bgr[2], bgr[1], bgr[0]])
                    .collect();
                RgbImage::from_raw(width, height, rgb)
                    .map(DynamicImage::ImageRgb8)
                    .ok_or_else(mismatch)
            }
        }
    }
}
