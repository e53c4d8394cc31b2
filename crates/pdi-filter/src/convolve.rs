//! Convolution operations
//!
//! Implements image convolution with arbitrary square, odd-sized kernels.
//!
//! # Border handling
//!
//! Only pixels whose full kernel footprint lies inside the raster are
//! computed. A border of `size / 2` pixels on every side is left at 0 in
//! the output; a raster smaller than the kernel yields an all-zero result.

use crate::Kernel;
use pdi_color::{GrayMethod, to_gray};
use pdi_core::saturate::saturate_f64;
use pdi_core::{Channels, Raster};

/// Reduce three-channel input to weighted gray; gray input is shared as is.
pub(crate) fn gray_input(raster: &Raster) -> Raster {
    match raster.channels() {
        Channels::One => raster.clone(),
        Channels::Three => to_gray(raster, GrayMethod::Weighted),
    }
}

/// Convolve a raster with a kernel
///
/// Three-channel input is first reduced to weighted gray, so the output
/// always has one channel. Each computed pixel is
/// `sum(kernel[ky][kx] * pixel[y + ky - r][x + kx - r])`, saturated to
/// `[0, 255]` and truncated.
///
/// An invalid kernel (see [`Kernel::is_valid`]) makes this a no-op: a
/// warning is logged and a copy of the input is returned.
///
/// # Example
///
/// ```
/// use pdi_core::{Channels, Raster};
/// use pdi_filter::{Kernel, convolve};
///
/// let raster = Raster::new_filled(3, 3, Channels::One, 100).unwrap();
/// let blurred = convolve(&raster, &Kernel::low_pass(3));
/// assert_eq!(blurred.get_sample(1, 1, 0), Some(100));
/// assert_eq!(blurred.get_sample(0, 0, 0), Some(0));
/// ```
pub fn convolve(raster: &Raster, kernel: &Kernel) -> Raster {
    if let Err(e) = kernel.validate() {
        log::warn!("convolve: {}, returning input unchanged", e);
        return raster.clone();
    }

    let gray = gray_input(raster);
    let w = gray.width();
    let h = gray.height();
    let size = kernel.width();
    let r = size / 2;

    let mut out = gray.create_template_mut(Channels::One);
    if w < size || h < size {
        return out.into();
    }

    for y in r..h - r {
        for x in r..w - r {
            let mut sum = 0.0f64;
            for ky in 0..size {
                let row = gray.row_data(y + ky - r);
                for kx in 0..size {
                    let k = kernel.get(kx, ky).unwrap_or(0.0);
                    sum += k * row[(x + kx - r) as usize] as f64;
                }
            }
            out.set_sample_unchecked(x, y, 0, saturate_f64(sum));
        }
    }

    out.into()
}

/// Box blur with a low-pass kernel of the given odd size
pub fn low_pass_filter(raster: &Raster, size: u32) -> Raster {
    convolve(raster, &Kernel::low_pass(size))
}

/// Emphasize local contrast with a high-pass kernel of the given odd size
pub fn high_pass_filter(raster: &Raster, size: u32) -> Raster {
    convolve(raster, &Kernel::high_pass(size))
}

/// Apply the 3x3 sharpening kernel
pub fn sharpen(raster: &Raster) -> Raster {
    convolve(raster, &Kernel::sharpen())
}
