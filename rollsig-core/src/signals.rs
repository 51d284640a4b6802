//! Signal rules: turn a value and its rolling trend into a binary flag.
//!
//! Rules see one row at a time. An undefined trend (warmup row) is an
//! explicit case in every rule and always yields `0`.

/// Trait for binary signal rules.
pub trait SignalRule: Send + Sync {
    /// Evaluate a single row. Returns `1` when the signal fires, else `0`.
    fn evaluate(&self, value: f64, trend: Option<f64>) -> u8;
}

/// Fires when the value is strictly above its rolling trend.
///
/// NaN on either side compares false, so it never fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct AboveTrend;

impl SignalRule for AboveTrend {
    fn evaluate(&self, value: f64, trend: Option<f64>) -> u8 {
        match trend {
            Some(mean) if value > mean => 1,
            _ => 0,
        }
    }
}

/// Apply a rule row by row. `values` and `trend` must be aligned.
pub fn derive(rule: &dyn SignalRule, values: &[f64], trend: &[Option<f64>]) -> Vec<u8> {
    debug_assert_eq!(values.len(), trend.len(), "signal inputs must be aligned");
    values
        .iter()
        .zip(trend)
        .map(|(&value, &mean)| rule.evaluate(value, mean))
        .collect()
}
