//! Convolution kernels
//!
//! A kernel is a row-major matrix of real weights. Convolution accepts only
//! square, odd-sized, non-empty kernels with the hot-spot at the exact
//! center cell; anything else can be built but fails [`Kernel::is_valid`].

use crate::{FilterError, FilterResult};

/// Size used by the factories when the requested size is even
pub const DEFAULT_KERNEL_SIZE: u32 = 3;

/// A 2D convolution kernel
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Width of the kernel
    width: u32,
    /// Height of the kernel
    height: u32,
    /// Kernel data (row-major order)
    data: Vec<f64>,
}

/// Replace an even size with the default, logging the substitution.
fn checked_size(size: u32, factory: &str) -> u32 {
    if size % 2 == 0 {
        log::warn!(
            "{}: kernel size {} is not odd, using {}",
            factory,
            size,
            DEFAULT_KERNEL_SIZE
        );
        DEFAULT_KERNEL_SIZE
    } else {
        size
    }
}

impl Kernel {
    /// Create a zero-filled kernel with the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Kernel {
            width,
            height,
            data: vec![0.0; width as usize * height as usize],
        }
    }

    /// Create a kernel from row-major values.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if `data.len()` is not
    /// `width * height`.
    pub fn from_slice(width: u32, height: u32, data: &[f64]) -> FilterResult<Self> {
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(FilterError::InvalidKernel(format!(
                "{}x{} kernel needs {} values, got {}",
                width,
                height,
                expected,
                data.len()
            )));
        }
        Ok(Kernel {
            width,
            height,
            data: data.to_vec(),
        })
    }

    /// Create a low-pass (box averaging) kernel.
    ///
    /// Every cell is `1 / (size * size)`, so the weights sum to 1.
    /// An even `size` falls back to 3.
    pub fn low_pass(size: u32) -> Self {
        let size = checked_size(size, "low_pass");
        let weight = 1.0 / (size * size) as f64;
        Kernel {
            width: size,
            height: size,
            data: vec![weight; (size * size) as usize],
        }
    }

    /// Create a high-pass kernel.
    ///
    /// Every cell is -1 except the center, which is `size * size`; the
    /// weights sum to 1. An even `size` falls back to 3.
    pub fn high_pass(size: u32) -> Self {
        let size = checked_size(size, "high_pass");
        let mut kernel = Kernel {
            width: size,
            height: size,
            data: vec![-1.0; (size * size) as usize],
        };
        let c = size / 2;
        kernel.set(c, c, (size * size) as f64);
        kernel
    }

    /// Create the 3x3 sharpening kernel.
    ///
    /// ```text
    ///  0 -1  0
    /// -1  5 -1
    ///  0 -1  0
    /// ```
    pub fn sharpen() -> Self {
        Kernel {
            width: 3,
            height: 3,
            data: vec![0.0, -1.0, 0.0, -1.0, 5.0, -1.0, 0.0, -1.0, 0.0],
        }
    }

    /// Get the kernel width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the kernel height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the center X coordinate.
    #[inline]
    pub fn center_x(&self) -> u32 {
        self.width / 2
    }

    /// Get the center Y coordinate.
    #[inline]
    pub fn center_y(&self) -> u32 {
        self.height / 2
    }

    /// Get the kernel data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Get a value at (x, y).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y * self.width + x) as usize])
    }

    /// Set a value at (x, y). Out-of-range coordinates are ignored.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: f64) {
        if x < self.width && y < self.height {
            self.data[(y * self.width + x) as usize] = value;
        }
    }

    /// Get the sum of all kernel values.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Check that the kernel is square, odd-sized and non-empty.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.width == self.height && self.width % 2 == 1
    }

    /// Like [`Kernel::is_valid`], with the reason on failure.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] describing the violated rule.
    pub fn validate(&self) -> FilterResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(FilterError::InvalidKernel("kernel is empty".to_string()));
        }
        if self.width != self.height {
            return Err(FilterError::InvalidKernel(format!(
                "kernel is not square: {}x{}",
                self.width, self.height
            )));
        }
        if self.width % 2 == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "kernel size {} is not odd",
                self.width
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_pass_sums_to_one() {
        for size in [1, 3, 5, 7] {
            let k = Kernel::low_pass(size);
            assert_eq!(k.width(), size);
            assert!((k.sum() - 1.0).abs() < 1e-12);
            assert!(k.is_valid());
        }
    }

    #[test]
    fn test_high_pass_layout() {
        let k = Kernel::high_pass(3);
        assert_eq!(k.get(1, 1), Some(9.0));
        assert_eq!(k.get(0, 0), Some(-1.0));
        assert_eq!(k.sum(), 1.0);

        let k5 = Kernel::high_pass(5);
        assert_eq!(k5.get(2, 2), Some(25.0));
        assert_eq!(k5.sum(), 1.0);
    }

    #[test]
    fn test_sharpen() {
        let k = Kernel::sharpen();
        assert_eq!(k.get(1, 1), Some(5.0));
        assert_eq!(k.get(0, 0), Some(0.0));
        assert_eq!(k.get(1, 0), Some(-1.0));
        assert_eq!(k.sum(), 1.0);
    }

    #[test]
    fn test_even_size_falls_back() {
        assert_eq!(Kernel::low_pass(4).width(), DEFAULT_KERNEL_SIZE);
        assert_eq!(Kernel::high_pass(0).width(), DEFAULT_KERNEL_SIZE);
    }

    #[test]
    fn test_validate() {
        assert!(Kernel::new(3, 3).validate().is_ok());
        assert!(Kernel::new(0, 0).validate().is_err());
        assert!(Kernel::new(3, 5).validate().is_err());
        assert!(Kernel::new(4, 4).validate().is_err());
        assert!(!Kernel::new(2, 2).is_valid());
    }

    #[test]
    fn test_from_slice() {
        let k = Kernel::from_slice(2, 1, &[1.0, 2.0]).unwrap();
        assert_eq!(k.get(1, 0), Some(2.0));
        assert_eq!(k.get(2, 0), None);
        assert!(Kernel::from_slice(2, 2, &[1.0]).is_err());
    }

    #[test]
    fn test_center() {
        let k = Kernel::low_pass(5);
        assert_eq!(k.center_x(), 2);
        assert_eq!(k.center_y(), 2);
    }
}
