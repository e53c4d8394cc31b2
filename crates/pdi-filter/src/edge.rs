//! Edge detection operations
//!
//! Gradient operators producing a single-channel magnitude raster:
//!
//! - [`roberts`]: 2x2 cross-difference kernels
//! - [`sobel`]: 3x3 horizontal / vertical kernels, `sqrt(gx^2 + gy^2)`
//! - [`robinson`]: eight 3x3 compass kernels, maximum absolute response
//!
//! Three-channel input is reduced to weighted gray first. Pixels whose
//! kernel footprint leaves the raster are 0 in the output: the last row and
//! column for Roberts, a one-pixel frame for Sobel and Robinson.
//!
//! [`apply_threshold`] turns a magnitude raster into a binary edge map.

use crate::convolve::gray_input;
use pdi_color::{GrayMethod, to_gray};
use pdi_core::saturate::{saturate_f64, saturate_i32};
use pdi_core::{Channels, Raster};

/// Roberts kernel for the main diagonal, anchored at its top-left cell
pub const ROBERTS_X: [[i32; 2]; 2] = [[1, 0], [0, -1]];
/// Roberts kernel for the anti-diagonal, anchored at its top-left cell
pub const ROBERTS_Y: [[i32; 2]; 2] = [[0, 1], [-1, 0]];

/// Sobel horizontal-gradient kernel
pub const SOBEL_X: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
/// Sobel vertical-gradient kernel
pub const SOBEL_Y: [[i32; 3]; 3] = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Robinson compass kernels in the order N, NE, E, SE, S, SW, W, NW
pub const ROBINSON_KERNELS: [[[i32; 3]; 3]; 8] = [
    [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]],
    [[0, 1, 2], [-1, 0, 1], [-2, -1, 0]],
    [[1, 2, 1], [0, 0, 0], [-1, -2, -1]],
    [[2, 1, 0], [1, 0, -1], [0, -1, -2]],
    [[1, 0, -1], [2, 0, -2], [1, 0, -1]],
    [[0, -1, -2], [1, 0, -1], [2, 1, 0]],
    [[-1, -2, -1], [0, 0, 0], [1, 2, 1]],
    [[-2, -1, 0], [-1, 0, 1], [0, 1, 2]],
];

/// Gradient operator selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeOperator {
    /// 2x2 Roberts cross
    Roberts,
    /// 3x3 Sobel
    Sobel,
    /// 3x3 Robinson compass (8 directions)
    Robinson,
}

/// Options for [`apply_threshold`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeThresholdOptions {
    /// Magnitudes strictly above this value become edges
    pub cutoff: u8,
}

impl Default for EdgeThresholdOptions {
    fn default() -> Self {
        Self { cutoff: 50 }
    }
}

/// Response of a 3x3 integer kernel centered at (x, y).
#[inline]
fn response3(gray: &Raster, x: u32, y: u32, kernel: &[[i32; 3]; 3]) -> i32 {
    let mut sum = 0i32;
    for (ky, krow) in kernel.iter().enumerate() {
        let row = gray.row_data(y + ky as u32 - 1);
        for (kx, &k) in krow.iter().enumerate() {
            sum += k * row[(x + kx as u32 - 1) as usize] as i32;
        }
    }
    sum
}

#[inline]
fn magnitude(gx: i32, gy: i32) -> u8 {
    saturate_f64(((gx * gx + gy * gy) as f64).sqrt())
}

/// Roberts cross gradient magnitude
///
/// At (x, y) the kernels cover (x, y), (x + 1, y), (x, y + 1) and
/// (x + 1, y + 1). The last row and column are left at 0.
pub fn roberts(raster: &Raster) -> Raster {
    let gray = gray_input(raster);
    let w = gray.width();
    let h = gray.height();
    let mut out = gray.create_template_mut(Channels::One);

    for y in 0..h.saturating_sub(1) {
        for x in 0..w.saturating_sub(1) {
            let mut gx = 0i32;
            let mut gy = 0i32;
            for ky in 0..2 {
                for kx in 0..2 {
                    let p = gray.get_sample_unchecked(x + kx as u32, y + ky as u32, 0) as i32;
                    gx += ROBERTS_X[ky][kx] * p;
                    gy += ROBERTS_Y[ky][kx] * p;
                }
            }
            out.set_sample_unchecked(x, y, 0, magnitude(gx, gy));
        }
    }

    out.into()
}

/// Sobel gradient magnitude
///
/// The one-pixel border is left at 0.
pub fn sobel(raster: &Raster) -> Raster {
    let gray = gray_input(raster);
    let w = gray.width();
    let h = gray.height();
    let mut out = gray.create_template_mut(Channels::One);
    if w < 3 || h < 3 {
        return out.into();
    }

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let gx = response3(&gray, x, y, &SOBEL_X);
            let gy = response3(&gray, x, y, &SOBEL_Y);
            out.set_sample_unchecked(x, y, 0, magnitude(gx, gy));
        }
    }

    out.into()
}

/// Robinson compass gradient
///
/// Each pixel takes the largest absolute response over the eight
/// directional kernels in [`ROBINSON_KERNELS`]. The one-pixel border is
/// left at 0.
pub fn robinson(raster: &Raster) -> Raster {
    let gray = gray_input(raster);
    let w = gray.width();
    let h = gray.height();
    let mut out = gray.create_template_mut(Channels::One);
    if w < 3 || h < 3 {
        return out.into();
    }

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let max = ROBINSON_KERNELS
                .iter()
                .map(|k| response3(&gray, x, y, k).abs())
                .max()
                .unwrap_or(0);
            out.set_sample_unchecked(x, y, 0, saturate_i32(max));
        }
    }

    out.into()
}

/// Run the selected gradient operator.
pub fn detect_edges(raster: &Raster, operator: EdgeOperator) -> Raster {
    match operator {
        EdgeOperator::Roberts => roberts(raster),
        EdgeOperator::Sobel => sobel(raster),
        EdgeOperator::Robinson => robinson(raster),
    }
}

/// Binarize an edge magnitude raster.
///
/// Samples strictly above `options.cutoff` become 255, all others 0. The
/// output has one channel; three-channel input is reduced to weighted gray.
///
/// # Example
///
/// ```
/// use pdi_core::{Channels, Raster};
/// use pdi_filter::{EdgeThresholdOptions, apply_threshold};
///
/// let edges = Raster::from_vec(3, 1, Channels::One, vec![10, 50, 51]).unwrap();
/// let binary = apply_threshold(&edges, &EdgeThresholdOptions::default());
/// assert_eq!(binary.data(), &[0, 0, 255]);
/// ```
pub fn apply_threshold(raster: &Raster, options: &EdgeThresholdOptions) -> Raster {
    let gray = to_gray(raster, GrayMethod::Weighted);
    let mut out = gray.to_mut();
    for v in out.data_mut() {
        *v = if *v > options.cutoff { 255 } else { 0 };
    }
    out.into()
}
