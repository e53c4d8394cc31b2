//! Raster arithmetic operations
//!
//! This module provides per-sample arithmetic with saturation:
//!
//! - Scalar operations (`add_constant`, `subtract_constant`,
//!   `multiply_constant`, `divide_constant`)
//! - Inter-raster operations (`arith_add`, `arith_subtract`,
//!   `arith_multiply`, `arith_divide`)
//! - Negation (`invert`)
//!
//! Every result is clamped into `[0, 255]`; nothing wraps around.
//!
//! # Scalar operand semantics
//!
//! `add_constant` and `subtract_constant` truncate the scalar toward zero
//! before applying it. `multiply_constant` and `divide_constant` compute the
//! product or quotient in floating point and truncate the result.
//!
//! # Division by zero
//!
//! A zero divisor never fails. Both `divide_constant(0.0)` and a zero sample
//! in the denominator of `arith_divide` produce 255, the saturated
//! "infinite" ratio, regardless of the numerator.
//!
//! # Mismatched operands
//!
//! Inter-raster operations run over the overlapping extent
//! `min(width) x min(height)`; the output has exactly that extent. When one
//! operand has one channel and the other has three, the single channel is
//! broadcast across all three channels of the result.

use super::{Channels, Raster, RasterMut};
use crate::saturate::saturate_i64;

/// Per-sample arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    /// Saturating addition
    Add,
    /// Saturating subtraction, floored at 0
    Subtract,
    /// Multiplication
    Multiply,
    /// Division
    Divide,
}

impl ArithOp {
    /// Combine two samples as an inter-raster operation.
    ///
    /// Multiplication is normalized (`a * b / 255`) and division is scaled
    /// (`a * 255 / b`) so both results stay in 8-bit dynamic range.
    #[inline]
    pub fn apply_samples(self, a: u8, b: u8) -> u8 {
        let (a, b) = (i64::from(a), i64::from(b));
        match self {
            ArithOp::Add => saturate_i64(a + b),
            ArithOp::Subtract => saturate_i64(a - b),
            ArithOp::Multiply => saturate_i64(a * b / 255),
            ArithOp::Divide => {
                if b == 0 {
                    255
                } else {
                    saturate_i64(a * 255 / b)
                }
            }
        }
    }

    /// Combine a sample with a scalar operand.
    #[inline]
    pub fn apply_scalar(self, sample: u8, scalar: f64) -> u8 {
        let v = i64::from(sample);
        match self {
            ArithOp::Add => saturate_i64(v.saturating_add(scalar as i64)),
            ArithOp::Subtract => saturate_i64(v.saturating_sub(scalar as i64)),
            ArithOp::Multiply => saturate_i64((v as f64 * scalar) as i64),
            ArithOp::Divide => {
                if scalar == 0.0 {
                    255
                } else {
                    saturate_i64((v as f64 / scalar) as i64)
                }
            }
        }
    }
}

impl Raster {
    /// Add a constant to every sample.
    ///
    /// # Example
    ///
    /// ```
    /// use pdi_core::{Channels, Raster};
    ///
    /// let raster = Raster::new_filled(4, 4, Channels::One, 250).unwrap();
    /// let brighter = raster.add_constant(10.0);
    /// assert!(brighter.data().iter().all(|&v| v == 255));
    /// ```
    pub fn add_constant(&self, val: f64) -> Raster {
        self.scalar_op(ArithOp::Add, val)
    }

    /// Subtract a constant from every sample.
    pub fn subtract_constant(&self, val: f64) -> Raster {
        self.scalar_op(ArithOp::Subtract, val)
    }

    /// Multiply every sample by a constant factor.
    pub fn multiply_constant(&self, factor: f64) -> Raster {
        self.scalar_op(ArithOp::Multiply, factor)
    }

    /// Divide every sample by a constant.
    ///
    /// A zero divisor saturates every sample to 255.
    pub fn divide_constant(&self, divisor: f64) -> Raster {
        if divisor == 0.0 {
            log::warn!("divide_constant: division by zero, saturating all samples to 255");
        }
        self.scalar_op(ArithOp::Divide, divisor)
    }

    /// Apply a scalar operator to every sample of every channel.
    pub fn scalar_op(&self, op: ArithOp, scalar: f64) -> Raster {
        let mut result = self.to_mut();
        for sample in result.data_mut() {
            *sample = op.apply_scalar(*sample, scalar);
        }
        result.into()
    }

    /// Add another raster to this one: `self + other`.
    pub fn arith_add(&self, other: &Raster) -> Raster {
        self.arith_binary_op(other, ArithOp::Add)
    }

    /// Subtract another raster from this one: `self - other`.
    pub fn arith_subtract(&self, other: &Raster) -> Raster {
        self.arith_binary_op(other, ArithOp::Subtract)
    }

    /// Normalized product: `self * other / 255`.
    pub fn arith_multiply(&self, other: &Raster) -> Raster {
        self.arith_binary_op(other, ArithOp::Multiply)
    }

    /// Scaled ratio: `self * 255 / other`, or 255 where `other` is zero.
    pub fn arith_divide(&self, other: &Raster) -> Raster {
        self.arith_binary_op(other, ArithOp::Divide)
    }

    /// Apply an inter-raster operator over the overlapping extent.
    ///
    /// `self` is always the left operand and `other` the right one.
    pub fn arith_binary_op(&self, other: &Raster, op: ArithOp) -> Raster {
        let width = self.width().min(other.width());
        let height = self.height().min(other.height());
        let channels = if self.channels().is_color() || other.channels().is_color() {
            Channels::Three
        } else {
            Channels::One
        };

        let mut result = RasterMut::zeroed(width, height, channels);
        for y in 0..height {
            for x in 0..width {
                for c in 0..channels.count() {
                    let a = self.get_sample_unchecked(x, y, broadcast(self.channels(), c));
                    let b = other.get_sample_unchecked(x, y, broadcast(other.channels(), c));
                    result.set_sample_unchecked(x, y, c, op.apply_samples(a, b));
                }
            }
        }
        result.into()
    }

    /// Invert every sample: `255 - v`.
    pub fn invert(&self) -> Raster {
        let mut result = self.to_mut();
        result.invert_inplace();
        result.into()
    }
}

impl RasterMut {
    /// Invert every sample in place.
    pub fn invert_inplace(&mut self) {
        for sample in self.data_mut() {
            *sample = 255 - *sample;
        }
    }
}

/// Map an output channel onto an operand's channel.
#[inline]
fn broadcast(channels: Channels, c: usize) -> usize {
    match channels {
        Channels::One => 0,
        Channels::Three => c,
    }
}
