//! Regression test parameters and operations

use pdi_core::Raster;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare results with expected values (default)
    #[default]
    Compare,
    /// Display mode - also dump rasters to stderr for inspection
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("REGTEST_MODE").unwrap_or_default())
    }

    /// Parse mode from a string; anything but "display" means compare
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, mode, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "convolve")
    pub test_name: String,
    /// Current test index (incremented before each test)
    index: usize,
    /// Test mode (compare or display)
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "convolve")
    ///
    /// # Returns
    ///
    /// A new `RegParams` instance configured based on the `REGTEST_MODE`
    /// environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn record_failure(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Compare two rasters for exact equality
    ///
    /// Dimensions, channel count and every sample must match.
    ///
    /// # Returns
    ///
    /// `true` if the rasters are identical, `false` otherwise.
    pub fn compare_rasters(&mut self, expected: &Raster, actual: &Raster) -> bool {
        self.index += 1;

        if !expected.sizes_equal(actual) {
            let msg = format!(
                "Failure in {}_reg: raster comparison for index {} - dimension mismatch\n\
                 expected {}x{}x{}, actual {}x{}x{}",
                self.test_name,
                self.index,
                expected.width(),
                expected.height(),
                expected.channels().count(),
                actual.width(),
                actual.height(),
                actual.channels().count()
            );
            self.record_failure(msg);
            return false;
        }

        for y in 0..expected.height() {
            for x in 0..expected.width() {
                let p1 = expected.get_pixel_unchecked(x, y);
                let p2 = actual.get_pixel_unchecked(x, y);
                if p1 != p2 {
                    let msg = format!(
                        "Failure in {}_reg: raster comparison for index {} - \
                         sample mismatch at ({}, {}): expected {:?}, actual {:?}",
                        self.test_name, self.index, x, y, p1, p2
                    );
                    self.record_failure(msg);
                    return false;
                }
            }
        }

        if self.display() {
            self.dump_raster(actual);
        }
        true
    }

    /// Dump a small raster to stderr in display mode
    ///
    /// Only channel 0 is printed, one row per line. Rasters wider or
    /// taller than 32 pixels are summarized by their dimensions.
    pub fn dump_raster(&self, raster: &Raster) {
        if !self.display() {
            return;
        }
        eprintln!(
            "  [{}] {}x{}x{}",
            self.index,
            raster.width(),
            raster.height(),
            raster.channels().count()
        );
        if raster.width() > 32 || raster.height() > 32 {
            return;
        }
        for y in 0..raster.height() {
            let row: Vec<String> = (0..raster.width())
                .map(|x| format!("{:3}", raster.get_sample_unchecked(x, y, 0)))
                .collect();
            eprintln!("    {}", row.join(" "));
        }
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all tests passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdi_core::Channels;

    #[test]
    fn test_mode_parse() {
        assert_eq!(RegTestMode::parse("display"), RegTestMode::Display);
        assert_eq!(RegTestMode::parse("DISPLAY"), RegTestMode::Display);
        assert_eq!(RegTestMode::parse(""), RegTestMode::Compare);
        assert_eq!(RegTestMode::parse("generate"), RegTestMode::Compare);
    }

    #[test]
    fn test_compare_values_success() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_rasters() {
        let a = Raster::from_vec(2, 1, Channels::One, vec![1, 2]).unwrap();
        let b = Raster::from_vec(2, 1, Channels::One, vec![1, 3]).unwrap();
        let c = Raster::from_vec(1, 2, Channels::One, vec![1, 2]).unwrap();

        let mut rp = RegParams::new("test");
        assert!(rp.compare_rasters(&a, &a.deep_clone()));
        assert!(rp.is_success());
        assert!(!rp.compare_rasters(&a, &b));
        assert!(!rp.compare_rasters(&a, &c));
        assert_eq!(rp.index(), 3);
        assert!(!rp.cleanup());
    }
}
