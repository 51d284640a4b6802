//! RollSig Core: series domain types, rolling statistics, signal derivation.
//!
//! This crate is pure computation, no I/O:
//! - `Series`: the ordered `close` column produced by ingestion
//! - Rolling statistics with an explicit "undefined" marker during warmup
//! - Binary signal rules evaluated against the rolling trend
//! - `EntropySource`: the seeded generator owned by the job runner

pub mod domain;
pub mod engine;
pub mod indicators;
pub mod rng;
pub mod signals;

pub use domain::Series;
pub use engine::{compute, SignalOutput};
pub use indicators::{RollingMean, RollingStatistic};
pub use rng::EntropySource;
pub use signals::{AboveTrend, SignalRule};
