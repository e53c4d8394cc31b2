//! Deterministic synthetic rasters for regression tests
//!
//! The regression tests never read image files; every input is built here
//! from a closed-form pattern.

use crate::error::{TestError, TestResult};
use pdi_core::{Channels, Raster, RasterMut};

fn build(
    name: &'static str,
    width: u32,
    height: u32,
    channels: Channels,
    mut sample: impl FnMut(u32, u32, usize) -> u8,
) -> TestResult<Raster> {
    let mut raster =
        RasterMut::new(width, height, channels).map_err(|source| TestError::Fixture { name, source })?;
    for y in 0..height {
        for x in 0..width {
            for c in 0..channels.count() {
                raster.set_sample_unchecked(x, y, c, sample(x, y, c));
            }
        }
    }
    Ok(raster.into())
}

/// Horizontal gray ramp from 0 at the left edge to 255 at the right edge.
pub fn gradient(width: u32, height: u32) -> TestResult<Raster> {
    let span = width.saturating_sub(1).max(1);
    build("gradient", width, height, Channels::One, |x, _, _| {
        (x * 255 / span) as u8
    })
}

/// Binary checkerboard with square cells of `cell` pixels.
///
/// The top-left cell is foreground (255).
pub fn checker(width: u32, height: u32, cell: u32) -> TestResult<Raster> {
    if cell == 0 {
        return Err(TestError::FixtureParams {
            name: "checker",
            message: "cell size must be > 0".to_string(),
        });
    }
    build("checker", width, height, Channels::One, |x, y, _| {
        if (x / cell + y / cell) % 2 == 0 { 255 } else { 0 }
    })
}

/// Binary raster with a filled `size x size` square of 255 at `(x0, y0)`.
pub fn filled_square(width: u32, height: u32, x0: u32, y0: u32, size: u32) -> TestResult<Raster> {
    if x0 + size > width || y0 + size > height {
        return Err(TestError::FixtureParams {
            name: "filled_square",
            message: format!("square {size}x{size} at ({x0}, {y0}) exceeds {width}x{height}"),
        });
    }
    build("filled_square", width, height, Channels::One, |x, y, _| {
        let inside = x >= x0 && x < x0 + size && y >= y0 && y < y0 + size;
        if inside { 255 } else { 0 }
    })
}

/// Binary raster with a single 255 pixel at `(x, y)`.
pub fn single_dot(width: u32, height: u32, x: u32, y: u32) -> TestResult<Raster> {
    filled_square(width, height, x, y, 1)
}

/// Three-channel raster whose channels vary independently.
///
/// Blue rises left to right, green rises top to bottom and red is the
/// constant 200.
pub fn color_ramp(width: u32, height: u32) -> TestResult<Raster> {
    let wspan = width.saturating_sub(1).max(1);
    let hspan = height.saturating_sub(1).max(1);
    build("color_ramp", width, height, Channels::Three, |x, y, c| match c {
        0 => (x * 255 / wspan) as u8,
        1 => (y * 255 / hspan) as u8,
        _ => 200,
    })
}
