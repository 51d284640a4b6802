//! Property tests for the rolling-window and signal invariants.
//!
//! Uses proptest to verify:
//! 1. Definedness: rolling value at i is defined iff i >= window - 1
//! 2. Correctness: a defined value equals the mean of the trailing window
//! 3. Warmup rows never fire
//! 4. A defined row fires iff close is strictly above its mean
//! 5. No look-ahead: truncating the series never changes earlier outputs

use std::num::NonZeroUsize;

use proptest::prelude::*;
use rollsig_core::{compute, Series};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_closes() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(
        (1.0..500.0_f64).prop_map(|p| (p * 100.0).round() / 100.0),
        1..80,
    )
}

fn arb_window() -> impl Strategy<Value = NonZeroUsize> {
    (1usize..30).prop_map(|w| NonZeroUsize::new(w).unwrap())
}

proptest! {
    #[test]
    fn defined_iff_enough_history(closes in arb_closes(), window in arb_window()) {
        let out = compute(&Series::from_closes(closes.clone()), window);
        prop_assert_eq!(out.rolling_mean.len(), closes.len());
        for (i, value) in out.rolling_mean.iter().enumerate() {
            prop_assert_eq!(value.is_some(), i + 1 >= window.get());
        }
    }

    #[test]
    fn defined_value_is_trailing_mean(closes in arb_closes(), window in arb_window()) {
        let w = window.get();
        let out = compute(&Series::from_closes(closes.clone()), window);
        for (i, value) in out.rolling_mean.iter().enumerate() {
            if let Some(mean) = value {
                let expected = closes[i + 1 - w..=i].iter().sum::<f64>() / w as f64;
                prop_assert!((mean - expected).abs() < 1e-9, "row {}: {} vs {}", i, mean, expected);
            }
        }
    }

    #[test]
    fn warmup_rows_never_fire(closes in arb_closes(), window in arb_window()) {
        let out = compute(&Series::from_closes(closes), window);
        for (mean, signal) in out.rolling_mean.iter().zip(&out.signal) {
            if mean.is_none() {
                prop_assert_eq!(*signal, 0);
            }
        }
    }

    #[test]
    fn fires_iff_strictly_above(closes in arb_closes(), window in arb_window()) {
        let out = compute(&Series::from_closes(closes.clone()), window);
        for (i, mean) in out.rolling_mean.iter().enumerate() {
            if let Some(mean) = mean {
                prop_assert_eq!(out.signal[i] == 1, closes[i] > *mean);
            }
        }
    }

    #[test]
    fn truncation_does_not_change_prefix(
        closes in arb_closes(),
        window in arb_window(),
        cut in 0.0..1.0_f64,
    ) {
        let keep = ((closes.len() as f64 * cut) as usize).max(1);
        let full = compute(&Series::from_closes(closes.clone()), window);
        let truncated = compute(&Series::from_closes(closes[..keep].to_vec()), window);
        prop_assert_eq!(&truncated.rolling_mean[..], &full.rolling_mean[..keep]);
        prop_assert_eq!(&truncated.signal[..], &full.signal[..keep]);
    }
}
