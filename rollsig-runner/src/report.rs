//! Metrics report: the single success/error record emitted per run.
//!
//! The report starts out as an error record with an unknown version and is
//! filled in as stages complete. Whatever state it is in when the job ends
//! is what gets persisted.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::RunConfig;
use crate::error::JobError;
use crate::metrics::MetricSummary;

/// Version reported before the config has loaded.
pub const UNKNOWN_VERSION: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Field order here is the field order in the emitted JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    pub status: Status,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows_processed: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl Default for MetricsReport {
    fn default() -> Self {
        Self::pending()
    }
}

impl MetricsReport {
    /// Initial accumulator: an error record that is valid even if nothing
    /// else gets filled in.
    pub fn pending() -> Self {
        Self {
            status: Status::Error,
            version: UNKNOWN_VERSION.to_string(),
            seed: None,
            rows_processed: None,
            metric: None,
            value: None,
            latency_ms: None,
            error_message: None,
        }
    }

    pub fn record_config(&mut self, config: &RunConfig) {
        self.version = config.version.clone();
        self.seed = Some(config.seed);
    }

    pub fn record_rows(&mut self, rows_processed: usize) {
        self.rows_processed = Some(rows_processed);
    }

    pub fn record_success(&mut self, summary: &MetricSummary, latency_ms: u64) {
        self.rows_processed = Some(summary.rows_processed);
        self.metric = Some(summary.metric.clone());
        self.value = Some(summary.value);
        self.latency_ms = Some(latency_ms);
        self.error_message = None;
        self.status = Status::Success;
    }

    pub fn record_failure(&mut self, error: &JobError) {
        self.status = Status::Error;
        self.error_message = Some(error.to_string());
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    /// Process exit status for this report: 0 on success, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    /// Pretty JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize metrics report")
    }
}

/// Persist the report to `path`.
///
/// Writes are atomic: write to `<path>.tmp` then rename. A failed run never
/// leaves a half-written report at `path`.
pub fn write_report(path: &Path, report: &MetricsReport) -> Result<()> {
    let json = report.to_json()?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create report directory {}", parent.display()))?;
    }

    let tmp_path = tmp_path_for(path);
    fs::write(&tmp_path, json)
        .with_context(|| format!("Failed to write report to {}", tmp_path.display()))?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        anyhow::Error::new(e).context(format!("Failed to move report into {}", path.display()))
    })?;

    Ok(())
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
