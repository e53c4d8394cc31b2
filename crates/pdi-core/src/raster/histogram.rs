//! Histogram computation and rendering
//!
//! A [`Histogram`] holds 256 intensity counts for one channel of a raster.
//! Besides the raw counts it derives the cumulative distribution function
//! and the equalization lookup table built from it.
//!
//! [`render_histograms`] plots one or more histograms as polylines on a
//! black three-channel canvas.

use super::{Channels, Color, Raster, RasterMut};
use crate::error::{Error, Result};
use crate::saturate::round_to_u8;

/// Number of intensity buckets in a histogram
pub const HISTOGRAM_BINS: usize = 256;

/// Per-channel intensity histogram
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; HISTOGRAM_BINS],
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}

impl Histogram {
    /// Create an empty histogram (all counts zero).
    pub fn new() -> Self {
        Histogram {
            counts: [0; HISTOGRAM_BINS],
        }
    }

    /// Create a histogram from existing counts.
    pub fn from_counts(counts: [u64; HISTOGRAM_BINS]) -> Self {
        Histogram { counts }
    }

    /// Increment the bucket for `value`.
    #[inline]
    pub fn add(&mut self, value: u8) {
        self.counts[value as usize] += 1;
    }

    /// Get the count of a bucket.
    #[inline]
    pub fn get(&self, value: u8) -> u64 {
        self.counts[value as usize]
    }

    /// Get all bucket counts, indexed by intensity.
    pub fn counts(&self) -> &[u64; HISTOGRAM_BINS] {
        &self.counts
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Largest single bucket count.
    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Cumulative distribution: `cdf[i] = counts[0] + ... + counts[i]`.
    pub fn cdf(&self) -> [u64; HISTOGRAM_BINS] {
        let mut cdf = [0u64; HISTOGRAM_BINS];
        let mut running = 0u64;
        for (slot, &count) in cdf.iter_mut().zip(self.counts.iter()) {
            running += count;
            *slot = running;
        }
        cdf
    }

    /// Build the histogram-equalization lookup table.
    ///
    /// `lut[i] = round((cdf[i] - cdf_min) * 255 / (total - cdf_min))`, where
    /// `cdf_min` is the first non-zero CDF entry. Entries below the first
    /// occupied intensity map to 0, so the table is non-decreasing.
    ///
    /// When every sample has the same intensity (`total == cdf_min`) or the
    /// histogram is empty, the identity table is returned and equalization
    /// leaves the channel unchanged.
    pub fn equalization_lut(&self) -> [u8; HISTOGRAM_BINS] {
        let mut lut = [0u8; HISTOGRAM_BINS];
        for (i, slot) in lut.iter_mut().enumerate() {
            *slot = i as u8;
        }

        let cdf = self.cdf();
        let total = cdf[HISTOGRAM_BINS - 1];
        let Some(cdf_min) = cdf.iter().copied().find(|&c| c > 0) else {
            return lut;
        };
        if total == cdf_min {
            return lut;
        }

        let scale = 255.0 / (total - cdf_min) as f64;
        for (slot, &c) in lut.iter_mut().zip(cdf.iter()) {
            *slot = round_to_u8((c as f64 - cdf_min as f64) * scale);
        }
        lut
    }
}

impl Raster {
    /// Compute the histogram of a single channel.
    ///
    /// Returns `None` if `channel` is out of range.
    pub fn histogram(&self, channel: usize) -> Option<Histogram> {
        let channels = self.channels().count();
        if channel >= channels {
            return None;
        }
        let mut hist = Histogram::new();
        for pixel in self.data().chunks_exact(channels) {
            hist.add(pixel[channel]);
        }
        Some(hist)
    }

    /// Compute one histogram per channel, in channel order.
    ///
    /// # Example
    ///
    /// ```
    /// use pdi_core::{Channels, Raster};
    ///
    /// let raster = Raster::new_filled(10, 10, Channels::Three, 7).unwrap();
    /// let hists = raster.histograms();
    /// assert_eq!(hists.len(), 3);
    /// assert_eq!(hists[0].get(7), 100);
    /// ```
    pub fn histograms(&self) -> Vec<Histogram> {
        let channels = self.channels().count();
        let mut hists = vec![Histogram::new(); channels];
        for pixel in self.data().chunks_exact(channels) {
            for (hist, &value) in hists.iter_mut().zip(pixel) {
                hist.add(value);
            }
        }
        hists
    }
}

/// Canvas parameters for [`render_histograms`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramCanvas {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Polyline stroke width
    pub line_width: u32,
}

impl Default for HistogramCanvas {
    fn default() -> Self {
        Self {
            width: 512,
            height: 400,
            line_width: 2,
        }
    }
}

/// Plot color for a histogram slot.
fn slot_color(count: usize, slot: usize) -> Color {
    if count == 1 {
        return Color::WHITE;
    }
    match slot {
        0 => Color::BLUE,
        1 => Color::GREEN,
        _ => Color::RED,
    }
}

/// Render histograms as polylines on a black three-channel canvas.
///
/// All curves share one vertical scale: the largest count across every
/// supplied histogram maps to the full canvas height. If all histograms are
/// empty the maximum is taken as 1. Each bucket spans `width / 256`
/// pixels horizontally (integer division), so the curve never runs past
/// the right edge.
///
/// A single histogram is drawn in white. Otherwise the first three slots
/// are drawn in blue, green and red, matching the native channel order of
/// the raster the histograms were computed from.
///
/// # Errors
///
/// Returns [`Error::InvalidDimension`] for a zero-sized canvas and
/// [`Error::InvalidParameter`] for more than three histograms.
pub fn render_histograms(histograms: &[Histogram], canvas: &HistogramCanvas) -> Result<Raster> {
    if histograms.len() > 3 {
        return Err(Error::InvalidParameter(format!(
            "at most 3 histograms can be rendered, got {}",
            histograms.len()
        )));
    }
    let mut plot = RasterMut::new(canvas.width, canvas.height, Channels::Three)?;

    let max = histograms
        .iter()
        .map(Histogram::max_count)
        .max()
        .unwrap_or(0)
        .max(1);
    let height = canvas.height as i32;
    let bin_w = (canvas.width / HISTOGRAM_BINS as u32) as i32;
    let y_of = |count: u64| {
        let h = (count as f64 * canvas.height as f64 / max as f64 + 0.5).floor() as i32;
        height - h
    };

    for (slot, hist) in histograms.iter().enumerate() {
        let color = slot_color(histograms.len(), slot);
        for i in 1..HISTOGRAM_BINS {
            let x1 = bin_w * (i as i32 - 1);
            let x2 = bin_w * i as i32;
            let y1 = y_of(hist.counts[i - 1]);
            let y2 = y_of(hist.counts[i]);
            plot.render_line_color(x1, y1, x2, y2, canvas.line_width, color);
        }
    }

    Ok(plot.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_conservation() {
        let data: Vec<u8> = (0..120).map(|i| (i * 7 % 256) as u8).collect();
        let raster = Raster::from_vec(12, 10, Channels::One, data).unwrap();
        let hists = raster.histograms();
        assert_eq!(hists.len(), 1);
        assert_eq!(hists[0].total(), 120);
    }

    #[test]
    fn test_histograms_per_channel() {
        let raster =
            Raster::from_vec(2, 1, Channels::Three, vec![1, 2, 3, 1, 5, 6]).unwrap();
        let hists = raster.histograms();
        assert_eq!(hists.len(), 3);
        assert_eq!(hists[0].get(1), 2);
        assert_eq!(hists[1].get(2), 1);
        assert_eq!(hists[1].get(5), 1);
        assert_eq!(hists[2].get(6), 1);
        assert_eq!(raster.histogram(2), Some(hists[2].clone()));
        assert_eq!(raster.histogram(3), None);
    }

    #[test]
    fn test_cdf() {
        let mut hist = Histogram::new();
        hist.add(0);
        hist.add(2);
        hist.add(2);
        let cdf = hist.cdf();
        assert_eq!(&cdf[..4], &[1, 1, 3, 3]);
        assert_eq!(cdf[255], 3);
    }

    #[test]
    fn test_equalization_lut_two_levels() {
        let mut counts = [0u64; HISTOGRAM_BINS];
        counts[100] = 50;
        counts[150] = 50;
        let lut = Histogram::from_counts(counts).equalization_lut();
        assert_eq!(lut[0], 0);
        assert_eq!(lut[100], 0);
        assert_eq!(lut[150], 255);
        assert_eq!(lut[255], 255);
    }

    #[test]
    fn test_equalization_lut_is_monotone() {
        let mut counts = [0u64; HISTOGRAM_BINS];
        for (i, c) in counts.iter_mut().enumerate().skip(30).take(60) {
            *c = (i as u64 * 13) % 17 + 1;
        }
        let lut = Histogram::from_counts(counts).equalization_lut();
        assert!(lut.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(lut[89], 255);
    }

    #[test]
    fn test_equalization_lut_degenerate_is_identity() {
        let mut counts = [0u64; HISTOGRAM_BINS];
        counts[42] = 1000;
        let lut = Histogram::from_counts(counts).equalization_lut();
        assert!(lut.iter().enumerate().all(|(i, &v)| v as usize == i));

        let empty = Histogram::new().equalization_lut();
        assert_eq!(empty[200], 200);
    }

    #[test]
    fn test_render_single_histogram_white() {
        let raster = Raster::new(8, 8, Channels::One).unwrap();
        let plot = render_histograms(&raster.histograms(), &HistogramCanvas::default()).unwrap();
        assert_eq!(plot.width(), 512);
        assert_eq!(plot.height(), 400);
        assert_eq!(plot.channels(), Channels::Three);
        // Bucket 0 holds the maximum, so the curve starts at the top-left.
        assert_eq!(plot.get_pixel(0, 0), Some(&[255u8, 255, 255][..]));
        assert_eq!(plot.get_pixel(300, 100), Some(&[0u8, 0, 0][..]));
    }

    #[test]
    fn test_render_color_slots() {
        let mut counts = [0u64; HISTOGRAM_BINS];
        counts[0] = 10;
        let peak = Histogram::from_counts(counts);
        let empty = Histogram::new();
        let plot = render_histograms(
            &[peak, empty.clone(), empty],
            &HistogramCanvas::default(),
        )
        .unwrap();
        // Slot 0 is blue: channel 0 of the B, G, R layout.
        assert_eq!(plot.get_pixel(0, 0), Some(&[255u8, 0, 0][..]));
    }

    #[test]
    fn test_render_all_zero_does_not_divide_by_zero() {
        let plot = render_histograms(&[Histogram::new()], &HistogramCanvas::default()).unwrap();
        // Flat curve at the bottom edge; the second stroke row is visible.
        assert_eq!(plot.get_sample(10, 399, 0), Some(255));
    }

    #[test]
    fn test_render_narrow_canvas_keeps_last_bucket() {
        let mut counts = [0u64; HISTOGRAM_BINS];
        counts[255] = 10;
        let canvas = HistogramCanvas {
            width: 400,
            height: 100,
            ..Default::default()
        };
        let plot = render_histograms(&[Histogram::from_counts(counts)], &canvas).unwrap();
        // One pixel per bucket: the peak lands at x = 255.
        let top: Vec<u32> = (0..400)
            .filter(|&x| plot.get_sample(x, 0, 0) == Some(255))
            .collect();
        assert!(top.contains(&255));
        assert!(top.iter().all(|&x| x <= 255));
    }

    #[test]
    fn test_render_rejects_bad_input() {
        let hists = vec![Histogram::new(); 4];
        assert!(render_histograms(&hists, &HistogramCanvas::default()).is_err());
        let canvas = HistogramCanvas {
            width: 0,
            ..Default::default()
        };
        assert!(render_histograms(&[], &canvas).is_err());
    }
}
