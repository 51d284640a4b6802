//! Rolling arithmetic mean.
//!
//! Unweighted mean of the last `window` values, inclusive of the current row.
//! Lookback: window - 1 (first defined value at index window-1).

use std::num::NonZeroUsize;

use super::RollingStatistic;

#[derive(Debug, Clone)]
pub struct RollingMean {
    window: NonZeroUsize,
}

impl RollingMean {
    pub fn new(window: NonZeroUsize) -> Self {
        Self { window }
    }
}

/// Running state of one trailing window. Only finite values enter the
/// (compensated) sum; NaN and the infinities are counted so they drop out of
/// the window without disturbing it.
#[derive(Debug, Default)]
struct WindowState {
    sum: f64,
    compensation: f64,
    nan: usize,
    pos_inf: usize,
    neg_inf: usize,
}

impl WindowState {
    fn push(&mut self, value: f64) {
        if value.is_nan() {
            self.nan += 1;
        } else if value == f64::INFINITY {
            self.pos_inf += 1;
        } else if value == f64::NEG_INFINITY {
            self.neg_inf += 1;
        } else {
            self.accumulate(value);
        }
    }

    fn pop(&mut self, value: f64) {
        if value.is_nan() {
            self.nan -= 1;
        } else if value == f64::INFINITY {
            self.pos_inf -= 1;
        } else if value == f64::NEG_INFINITY {
            self.neg_inf -= 1;
        } else {
            self.accumulate(-value);
        }
    }

    // Neumaier summation: a large value leaving the window must not take the
    // small values that arrived after it along with it.
    fn accumulate(&mut self, value: f64) {
        let total = self.sum + value;
        if self.sum.abs() >= value.abs() {
            self.compensation += (self.sum - total) + value;
        } else {
            self.compensation += (value - total) + self.sum;
        }
        self.sum = total;
    }

    /// Finite values can still overflow the sum; resum the window when they do.
    fn resync(&mut self, window: &[f64]) {
        if self.sum.is_finite() && self.compensation.is_finite() {
            return;
        }
        self.sum = 0.0;
        self.compensation = 0.0;
        for &value in window.iter().filter(|v| v.is_finite()) {
            self.accumulate(value);
        }
    }

    fn mean(&self, period: usize) -> f64 {
        if self.nan > 0 || (self.pos_inf > 0 && self.neg_inf > 0) {
            f64::NAN
        } else if self.pos_inf > 0 {
            f64::INFINITY
        } else if self.neg_inf > 0 {
            f64::NEG_INFINITY
        } else if !self.sum.is_finite() {
            // The window's finite values overflow on their own.
            self.sum / period as f64
        } else {
            (self.sum + self.compensation) / period as f64
        }
    }
}

impl RollingStatistic for RollingMean {
    fn window(&self) -> NonZeroUsize {
        self.window
    }

    fn compute(&self, values: &[f64]) -> Vec<Option<f64>> {
        let period = self.window.get();
        let mut result = vec![None; values.len()];
        let mut state = WindowState::default();

        for (i, &value) in values.iter().enumerate() {
            state.push(value);
            if i >= period {
                state.pop(values[i - period]);
            }
            if i + 1 >= period {
                let start = i + 1 - period;
                state.resync(&values[start..=i]);
                result[i] = Some(state.mean(period));
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, window, DEFAULT_EPSILON};

    #[test]
    fn rolling_mean_3_scenario() {
        let mean = RollingMean::new(window(3));
        let result = mean.compute(&[10.0, 20.0, 30.0, 15.0, 40.0]);

        assert_eq!(result.len(), 5);
        assert!(result[0].is_none());
        assert!(result[1].is_none());
        assert_approx(result[2].unwrap(), 20.0, DEFAULT_EPSILON);
        assert_approx(result[3].unwrap(), 65.0 / 3.0, DEFAULT_EPSILON);
        assert_approx(result[4].unwrap(), 85.0 / 3.0, DEFAULT_EPSILON);
    }

    #[test]
    fn window_1_is_identity() {
        let mean = RollingMean::new(window(1));
        let result = mean.compute(&[100.0, 200.0, 300.0]);
        assert_eq!(result, vec![Some(100.0), Some(200.0), Some(300.0)]);
    }

    #[test]
    fn window_longer_than_series_is_all_undefined() {
        let mean = RollingMean::new(window(5));
        let result = mean.compute(&[10.0, 11.0]);
        assert_eq!(result, vec![None, None]);
    }

    #[test]
    fn window_equal_to_series_defines_last_row_only() {
        let mean = RollingMean::new(window(4));
        let result = mean.compute(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(result[..3], [None, None, None]);
        assert_approx(result[3].unwrap(), 2.5, DEFAULT_EPSILON);
    }

    #[test]
    fn nan_propagates_only_through_windows_containing_it() {
        let values = [10.0, 11.0, f64::NAN, 13.0, 14.0, 15.0];
        let result = RollingMean::new(window(3)).compute(&values);

        // Index 2..=4 windows contain the NaN
        assert!(result[2].unwrap().is_nan());
        assert!(result[3].unwrap().is_nan());
        assert!(result[4].unwrap().is_nan());
        // Index 5 window [13,14,15]
        assert_approx(result[5].unwrap(), 14.0, DEFAULT_EPSILON);
    }

    #[test]
    fn infinity_does_not_poison_later_windows() {
        let values = [1.0, f64::INFINITY, 3.0, 4.0, 5.0];
        let result = RollingMean::new(window(2)).compute(&values);
        assert_eq!(result[1], Some(f64::INFINITY));
        assert_eq!(result[2], Some(f64::INFINITY));
        assert_approx(result[3].unwrap(), 3.5, DEFAULT_EPSILON);
        assert_approx(result[4].unwrap(), 4.5, DEFAULT_EPSILON);
    }

    #[test]
    fn opposite_infinities_in_one_window_are_nan() {
        let values = [f64::INFINITY, f64::NEG_INFINITY, 2.0, 4.0];
        let result = RollingMean::new(window(2)).compute(&values);
        assert!(result[1].unwrap().is_nan());
        assert_eq!(result[2], Some(f64::NEG_INFINITY));
        assert_approx(result[3].unwrap(), 3.0, DEFAULT_EPSILON);
    }

    #[test]
    fn overflowing_sum_recovers_once_large_values_leave() {
        let values = [f64::MAX, f64::MAX, 1.0, 3.0];
        let result = RollingMean::new(window(2)).compute(&values);
        assert_eq!(result[1], Some(f64::INFINITY));
        assert_approx(result[3].unwrap(), 2.0, DEFAULT_EPSILON);
    }

    #[test]
    fn large_window_matches_direct_mean() {
        let values: Vec<f64> = (0..2_000)
            .map(|i| 100.0 + ((i * 37) % 101) as f64 * 0.25)
            .collect();
        let period = 1_500;
        let result = RollingMean::new(window(period)).compute(&values);

        assert!(result[..period - 1].iter().all(Option::is_none));
        for i in (period - 1)..values.len() {
            let slice = &values[i + 1 - period..=i];
            let expected = slice.iter().sum::<f64>() / period as f64;
            assert_approx(result[i].unwrap(), expected, 1e-9);
        }
    }

    #[test]
    fn empty_input() {
        assert!(RollingMean::new(window(3)).compute(&[]).is_empty());
    }

    #[test]
    fn lookback_tracks_window() {
        let mean = RollingMean::new(window(20));
        assert_eq!(mean.lookback(), 19);
        assert_eq!(mean.window().get(), 20);
        assert_eq!(RollingMean::new(window(1)).lookback(), 0);
    }

    #[test]
    fn no_lookahead_truncated_vs_full() {
        let full = [5.0, 7.0, 6.0, 9.0, 3.0, 8.0, 2.0];
        let mean = RollingMean::new(window(3));
        let full_result = mean.compute(&full);
        for cut in 1..=full.len() {
            let truncated = mean.compute(&full[..cut]);
            assert_eq!(truncated[..], full_result[..cut], "mismatch at cut {cut}");
        }
    }
}
