//! Graphics rendering functions
//!
//! Line drawing onto rasters, used to plot histograms:
//! - Single-pixel lines (Bresenham)
//! - Wide lines (parallel offsets of the base line)

use super::{Channels, RasterMut};

/// RGB color for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a new color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black color
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    /// White color
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };
    /// Red color
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };
    /// Green color
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0 };
    /// Blue color
    pub const BLUE: Color = Color { r: 0, g: 0, b: 255 };

    /// Unweighted gray value `(r + g + b) / 3`, used when drawing on a
    /// single-channel raster
    pub fn to_gray(&self) -> u8 {
        ((self.r as u32 + self.g as u32 + self.b as u32) / 3) as u8
    }

    /// Samples in the raster's native channel order (B, G, R).
    pub fn to_samples(&self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Generate the points of a line using Bresenham's integer algorithm.
///
/// The line connects `(x1, y1)` to `(x2, y2)` with 8-connectivity and
/// includes both endpoints.
pub fn line_points(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<(i32, i32)> {
    if x1 == x2 && y1 == y2 {
        return vec![(x1, y1)];
    }

    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let sx = if x2 > x1 { 1i32 } else { -1 };
    let sy = if y2 > y1 { 1i32 } else { -1 };

    let npts = dx.max(dy) + 1;
    let mut points = Vec::with_capacity(npts as usize);

    let mut x = x1;
    let mut y = y1;

    if dx >= dy {
        // Step along x (more horizontal)
        let mut err = dx / 2;
        for _ in 0..npts {
            points.push((x, y));
            err -= dy;
            if err < 0 {
                y += sy;
                err += dx;
            }
            x += sx;
        }
    } else {
        // Step along y (more vertical)
        let mut err = dy / 2;
        for _ in 0..npts {
            points.push((x, y));
            err -= dx;
            if err < 0 {
                x += sx;
                err += dy;
            }
            y += sy;
        }
    }

    points
}

/// Generate the points of a line with the given stroke width.
///
/// For width > 1, parallel lines are added alternately on either side of
/// the base line, offset across its dominant direction.
pub fn wide_line_points(x1: i32, y1: i32, x2: i32, y2: i32, width: u32) -> Vec<(i32, i32)> {
    let width = width.max(1);
    let mut points = line_points(x1, y1, x2, y2);
    if width == 1 {
        return points;
    }

    let is_horizontal = (x2 - x1).abs() > (y2 - y1).abs();
    for i in 1..width {
        let offset = (i + 1).div_ceil(2) as i32;
        let offset = if i % 2 == 1 { -offset } else { offset };
        let parallel = if is_horizontal {
            line_points(x1, y1 + offset, x2, y2 + offset)
        } else {
            line_points(x1 + offset, y1, x2 + offset, y2)
        };
        points.extend(parallel);
    }

    points
}

impl RasterMut {
    /// Paint the given points with a color, clipping to the raster.
    ///
    /// Drawing is available on either channel layout: three-channel
    /// rasters receive the color's B, G, R samples and single-channel
    /// rasters its average gray value ([`Color::to_gray`]), so a plot or
    /// annotation can be drawn onto a gray working raster directly.
    pub fn render_points_color(&mut self, points: &[(i32, i32)], color: Color) {
        let w = self.width() as i32;
        let h = self.height() as i32;
        let gray = [color.to_gray()];
        let samples = color.to_samples();
        let value: &[u8] = match self.channels() {
            Channels::One => &gray,
            Channels::Three => &samples,
        };

        for &(x, y) in points {
            if x < 0 || x >= w || y < 0 || y >= h {
                continue;
            }
            self.set_pixel_unchecked(x as u32, y as u32, value);
        }
    }

    /// Render a line with a specific color and stroke width.
    pub fn render_line_color(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        width: u32,
        color: Color,
    ) {
        let points = wide_line_points(x1, y1, x2, y2, width);
        self.render_points_color(&points, color);
    }
}
