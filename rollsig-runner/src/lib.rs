//! RollSig Runner: the rolling-signal batch job.
//!
//! This crate builds on `rollsig-core` to provide:
//! - Configuration loading and validation (YAML or TOML)
//! - CSV series ingestion with structural checks
//! - Signal-rate metric aggregation with pinned rounding
//! - The metrics report accumulator and its atomic persistence
//! - Dual-sink run diagnostics
//! - `JobRunner`, the single error boundary around all of the above

pub mod config;
pub mod data_loader;
pub mod error;
pub mod job;
pub mod logging;
pub mod metrics;
pub mod report;

pub use config::{ConfigFormat, RunConfig};
pub use data_loader::{load_series, LoadedSeries};
pub use error::{ErrorKind, JobError};
pub use job::{emit, JobPaths, JobRunner};
pub use logging::init_logging;
pub use metrics::{summarize, MetricSummary};
pub use report::{write_report, MetricsReport, Status};
