//! Regression test parameters and operations

use pillscan_core::Grid;
use std::fmt::Debug;

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, and success status. Every comparison
/// bumps the index so a failure message points at the check that broke.
pub struct RegParams {
    /// Name of the test (e.g., "conncomp")
    pub test_name: String,
    /// Current test index (incremented before each test)
    index: usize,
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
    /// * `test_name` - Name of the test (e.g., "conncomp")
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
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
            self.fail(format!(
                "value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.index, diff, delta, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Check a boolean condition
    pub fn check(&mut self, condition: bool, what: &str) -> bool {
        self.index += 1;
        if !condition {
            self.fail(format!("check for index {} - {}", self.index, what));
        }
        condition
    }

    /// Compare two grids for exact equality
    ///
    /// # Returns
    ///
    /// `true` if dimensions and every value match, `false` otherwise.
    pub fn compare_grids<T: PartialEq + Debug>(&mut self, grid1: &Grid<T>, grid2: &Grid<T>) -> bool {
        self.index += 1;

        if grid1.dimensions() != grid2.dimensions() {
            self.fail(format!(
                "grid comparison for index {} - dimension mismatch {:?} vs {:?}",
                self.index,
                grid1.dimensions(),
                grid2.dimensions()
            ));
            return false;
        }

        for (p, (a, b)) in grid1.data().iter().zip(grid2.data()).enumerate() {
            if a != b {
                let (x, y) = grid1.coords(p);
                self.fail(format!(
                    "grid comparison for index {} - mismatch at ({}, {}): {:?} vs {:?}",
                    self.index, x, y, a, b
                ));
                return false;
            }
        }

        true
    }

    /// Compare two strings
    pub fn compare_strings(&mut self, expected: &str, actual: &str) -> bool {
        self.index += 1;

        if expected != actual {
            self.fail(format!(
                "string comparison for index {}\n\
                 expected = {:?}, actual = {:?}",
                self.index, expected, actual
            ));
            false
        } else {
            true
        }
    }

    fn fail(&mut self, what: String) {
        let msg = format!("Failure in {}_reg: {}", self.test_name, what);
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
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
