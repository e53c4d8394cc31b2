//! Saturating conversions to 8-bit samples
//!
//! Every numeric component funnels its results through these helpers, so
//! there is exactly one clamping contract: values below 0 become 0, values
//! above 255 become 255, and fractional values are truncated toward zero.

/// Tolerance used when truncating floating-point results.
///
/// Weighted sums such as `9 * (v * 1/9)` or `0.114*v + 0.587*v + 0.299*v`
/// can land a few ulps below the exact integer `v`. A value within this
/// distance below an integer is treated as that integer before truncation.
pub const TRUNCATION_EPSILON: f64 = 1e-9;

/// Clamp an `i32` into `[0, 255]`.
#[inline]
pub fn saturate_i32(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Clamp an `i64` into `[0, 255]`.
#[inline]
pub fn saturate_i64(value: i64) -> u8 {
    value.clamp(0, 255) as u8
}

/// Clamp an `f64` into `[0, 255]` and truncate toward zero.
///
/// NaN saturates to 0.
#[inline]
pub fn saturate_f64(value: f64) -> u8 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    if value >= 255.0 {
        return 255;
    }
    (value + TRUNCATION_EPSILON).floor() as u8
}

/// Round half up and clamp into `[0, 255]`.
///
/// Used where a table entry must be rounded rather than truncated
/// (histogram equalization, histogram plot heights).
#[inline]
pub fn round_to_u8(value: f64) -> u8 {
    saturate_f64((value + 0.5).floor())
}
