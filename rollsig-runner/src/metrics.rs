//! Signal metrics: pure functions, signal in, scalar out.

/// Name reported for the signal-rate metric.
pub const SIGNAL_RATE: &str = "signal_rate";

/// Decimal places kept in reported metric values.
pub const VALUE_DECIMALS: u32 = 4;

/// A named, rounded scalar metric.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSummary {
    pub metric: String,
    pub value: f64,
    pub rows_processed: usize,
}

/// Reduce a signal to its rate, rounded for reporting.
pub fn summarize(signal: &[u8], rows_processed: usize) -> MetricSummary {
    MetricSummary {
        metric: SIGNAL_RATE.to_string(),
        value: round_to_decimals(signal_rate(signal), VALUE_DECIMALS),
        rows_processed,
    }
}

/// Fraction of rows where the signal fired. 0.0 for an empty signal.
pub fn signal_rate(signal: &[u8]) -> f64 {
    if signal.is_empty() {
        return 0.0;
    }
    let fired: u64 = signal.iter().map(|&s| u64::from(s)).sum();
    fired as f64 / signal.len() as f64
}

/// Round half away from zero at `decimals` places.
///
/// Applied to `value * 10^decimals`, so the outcome follows the binary value
/// of the product: 0.12345 rounds to 0.1235, 1/32 rounds to 0.0313.
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
