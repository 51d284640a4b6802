//! Rolling statistics over a numeric column.
//!
//! A rolling statistic takes the full column and produces one value per row.
//! Rows without enough history carry `None` rather than a NaN sentinel, so a
//! warmup row can never be mistaken for a computed value that happens to be NaN.
//!
//! # Look-ahead contamination guard
//! No output at row t may depend on input from row t+1 or later.

use std::num::NonZeroUsize;

pub mod rolling_mean;

pub use rolling_mean::RollingMean;

/// Trait for rolling-window statistics.
pub trait RollingStatistic: Send + Sync {
    /// Number of rows (inclusive of the current one) each value covers.
    fn window(&self) -> NonZeroUsize;

    /// Number of leading rows whose output is undefined.
    fn lookback(&self) -> usize {
        self.window().get() - 1
    }

    /// Compute the statistic for the whole column.
    ///
    /// Returns a vector of the same length as `values`. Entry `i` is `Some`
    /// iff `i >= lookback()`.
    fn compute(&self, values: &[f64]) -> Vec<Option<f64>>;
}

#[cfg(test)]
pub(crate) fn window(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).expect("test window must be non-zero")
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub(crate) fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

#[cfg(test)]
pub(crate) const DEFAULT_EPSILON: f64 = 1e-10;
