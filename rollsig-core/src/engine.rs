//! Signal engine: rolling statistic, then signal, over a whole series.
//!
//! Two steps, exposed separately so the caller can report progress between
//! them, and combined in `compute()`.

use std::num::NonZeroUsize;

use crate::domain::Series;
use crate::indicators::{RollingMean, RollingStatistic};
use crate::signals::{self, AboveTrend};

/// Per-row engine output, aligned with the input series.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalOutput {
    /// `None` for rows inside the warmup period.
    pub rolling_mean: Vec<Option<f64>>,
    pub signal: Vec<u8>,
}

impl SignalOutput {
    pub fn len(&self) -> usize {
        self.signal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signal.is_empty()
    }

    /// Number of rows where the signal fired.
    pub fn fired(&self) -> usize {
        self.signal.iter().filter(|&&s| s == 1).count()
    }

    /// Number of rows with a defined rolling value.
    pub fn defined(&self) -> usize {
        self.rolling_mean.iter().filter(|v| v.is_some()).count()
    }
}

/// Rolling mean of `close` over `window` rows.
pub fn rolling_mean(series: &Series, window: NonZeroUsize) -> Vec<Option<f64>> {
    RollingMean::new(window).compute(series.close())
}

/// Signal of `close` strictly above its rolling trend.
pub fn above_trend(series: &Series, trend: &[Option<f64>]) -> Vec<u8> {
    signals::derive(&AboveTrend, series.close(), trend)
}

/// Run the default pipeline: rolling mean, then above-trend signal.
pub fn compute(series: &Series, window: NonZeroUsize) -> SignalOutput {
    let rolling_mean = rolling_mean(series, window);
    let signal = above_trend(series, &rolling_mean);
    SignalOutput {
        rolling_mean,
        signal,
    }
}
