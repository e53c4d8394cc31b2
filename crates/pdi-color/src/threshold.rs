//! Fixed-cutoff thresholding
//!
//! A sample strictly greater than the cutoff becomes `max_value`; every
//! other sample, including one equal to the cutoff, becomes 0.
//! Three-channel input is first reduced to weighted gray.

use crate::colorspace::{GrayMethod, to_gray};
use pdi_core::{Channels, Raster};

/// Threshold a raster against a fixed cutoff.
///
/// A single-channel input produces a single-channel output. A
/// three-channel input is reduced to weighted gray, thresholded, and the
/// result is written into all three channels of the output.
///
/// # Arguments
///
/// * `raster` - Input raster
/// * `cutoff` - Samples strictly above this value are set
/// * `max_value` - Value written for samples above the cutoff
///
/// # Example
///
/// ```
/// use pdi_color::threshold;
/// use pdi_core::{Channels, Raster};
///
/// let raster = Raster::from_vec(3, 1, Channels::One, vec![127, 128, 129]).unwrap();
/// let binary = threshold(&raster, 128, 255);
/// assert_eq!(binary.data(), &[0, 0, 255]);
/// ```
pub fn threshold(raster: &Raster, cutoff: u8, max_value: u8) -> Raster {
    let gray = to_gray(raster, GrayMethod::Weighted);
    let mut out = raster.create_template_mut(raster.channels());
    let channels = raster.channels().count();
    for (dst, &v) in out.data_mut().chunks_exact_mut(channels).zip(gray.data()) {
        dst.fill(if v > cutoff { max_value } else { 0 });
    }
    out.into()
}

/// Threshold to a single-channel binary raster with values in {0, 255}.
///
/// Three-channel input is reduced to weighted gray first.
pub fn threshold_to_binary(raster: &Raster, cutoff: u8) -> Raster {
    let gray = to_gray(raster, GrayMethod::Weighted);
    threshold(&gray, cutoff, 255)
}

/// Check whether a raster is a binary raster (one channel, {0, 255}).
pub fn is_binary(raster: &Raster) -> bool {
    raster.channels() == Channels::One && raster.data().iter().all(|&v| v == 0 || v == 255)
}
