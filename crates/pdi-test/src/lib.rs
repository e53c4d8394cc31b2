//! pdi-test - Regression test framework for pdi
//!
//! This crate provides a small regression test harness supporting two
//! modes:
//!
//! - **Compare**: Check results against expected values (default)
//! - **Display**: Same checks, plus a dump of small result rasters
//!
//! Inputs come from the deterministic generators in [`fixtures`], so no
//! image files are needed.
//!
//! # Usage
//!
//! ```
//! use pdi_test::{RegParams, count_value, fixtures};
//!
//! let mut rp = RegParams::new("fixtures");
//! let raster = fixtures::single_dot(9, 9, 4, 4).unwrap();
//! let count = count_value(&raster, 255);
//! rp.compare_values(1.0, count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Count the samples of channel 0 equal to `value`.
pub fn count_value(raster: &pdi_core::Raster, value: u8) -> usize {
    let channels = raster.channels().count();
    raster
        .data()
        .iter()
        .step_by(channels)
        .filter(|&&v| v == value)
        .count()
}
