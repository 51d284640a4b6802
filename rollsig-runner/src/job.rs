//! Job runner: config, data, engine, metrics, under one error boundary.
//!
//! `JobRunner::run()` never fails: any stage error is caught here, logged,
//! and folded into the report. `emit()` then persists and prints that report.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use rollsig_core::{engine, EntropySource};
use tracing::{error, info};

use crate::config::RunConfig;
use crate::data_loader::load_series;
use crate::error::JobError;
use crate::metrics;
use crate::report::{write_report, MetricsReport};

/// Input locations for a run.
#[derive(Debug, Clone)]
pub struct JobPaths {
    pub input: PathBuf,
    pub config: PathBuf,
}

/// Orchestrates a single run.
///
/// Owns the entropy source seeded from the config, so callers can inspect
/// it after the run instead of relying on process-global state.
#[derive(Debug, Default)]
pub struct JobRunner {
    entropy: Option<EntropySource>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// The seeded entropy source, once a config has loaded.
    pub fn entropy(&self) -> Option<&EntropySource> {
        self.entropy.as_ref()
    }

    /// Run every stage and return the report, success or error.
    pub fn run(&mut self, paths: &JobPaths) -> MetricsReport {
        let started = Instant::now();
        info!("Job started");

        let mut report = MetricsReport::pending();
        if let Err(e) = self.execute(paths, started, &mut report) {
            error!("Error encountered: {e}");
            report.record_failure(&e);
        }
        report
    }

    fn execute(
        &mut self,
        paths: &JobPaths,
        started: Instant,
        report: &mut MetricsReport,
    ) -> Result<(), JobError> {
        let config = RunConfig::from_file(&paths.config)?;
        self.entropy = Some(config.entropy());
        report.record_config(&config);
        info!(
            "Config loaded: seed={}, window={}, version={}",
            config.seed, config.window, config.version
        );

        let loaded = load_series(&paths.input)?;
        report.record_rows(loaded.rows_processed);
        info!("Data loaded: {} rows", loaded.rows_processed);

        let trend = engine::rolling_mean(&loaded.series, config.window);
        info!("Rolling mean calculated with window={}", config.window);

        let signal = engine::above_trend(&loaded.series, &trend);
        info!("Signals generated");

        let summary = metrics::summarize(&signal, loaded.rows_processed);
        let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        report.record_success(&summary, latency_ms);

        info!(
            "Metrics: {}={}, rows_processed={}",
            summary.metric, summary.value, summary.rows_processed
        );
        info!("Job completed successfully in {latency_ms}ms");
        Ok(())
    }
}

/// Persist the report to `output`, then print the same JSON to `out`.
///
/// The report is printed even if persisting fails; the persist error is
/// returned afterwards.
pub fn emit<W: Write>(report: &MetricsReport, output: &Path, out: &mut W) -> Result<()> {
    let persisted = write_report(output, report);

    let json = report.to_json()?;
    writeln!(out, "{json}").context("Failed to print metrics report")?;
    out.flush().context("Failed to flush metrics report")?;

    persisted
}
