//! Image enhancement operations
//!
//! Tone reproduction curve (TRC) mapping and histogram equalization.

use pdi_core::{HISTOGRAM_BINS, Raster, RasterMut};

/// A 256-entry lookup table for tone reproduction curve mapping.
///
/// Maps input sample values [0..255] to output sample values [0..255].
pub type TrcLut = [u8; HISTOGRAM_BINS];

/// Remap one channel of a raster in place through a lookup table.
///
/// Out-of-range channels are ignored.
pub fn trc_map(raster: &mut RasterMut, channel: usize, lut: &TrcLut) {
    let channels = raster.channels().count();
    if channel >= channels {
        return;
    }
    for sample in raster.data_mut().iter_mut().skip(channel).step_by(channels) {
        *sample = lut[*sample as usize];
    }
}

/// Build the equalization lookup table for every channel of a raster.
pub fn equalize_trc(raster: &Raster) -> Vec<TrcLut> {
    raster
        .histograms()
        .iter()
        .map(|hist| hist.equalization_lut())
        .collect()
}

/// Histogram equalization, each channel independently.
///
/// Every channel is remapped through
/// `lut[i] = round((cdf[i] - cdf_min) * 255 / (total - cdf_min))`.
/// A channel holding a single intensity is left unchanged.
///
/// # Example
///
/// ```
/// use pdi_core::{Channels, Raster};
/// use pdi_filter::equalize_histogram;
///
/// let raster = Raster::from_vec(4, 1, Channels::One, vec![100, 100, 110, 120]).unwrap();
/// let eq = equalize_histogram(&raster);
/// assert_eq!(eq.data(), &[0, 0, 128, 255]);
/// ```
pub fn equalize_histogram(raster: &Raster) -> Raster {
    let luts = equalize_trc(raster);
    let mut out = raster.to_mut();
    for (channel, lut) in luts.iter().enumerate() {
        trc_map(&mut out, channel, lut);
    }
    out.into()
}
