//! RollSig CLI: run the rolling-signal job once and exit.
//!
//! Reads a CSV series and a config, computes the signal rate, writes the JSON
//! report to `--output` and prints it to stdout. Diagnostics go to stderr and
//! `--log-file`.
//!
//! Exit status: 0 when the report says `success`, 1 otherwise.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use rollsig_runner::{emit, init_logging, JobPaths, JobRunner};
use tracing::error;

#[derive(Parser, Debug)]
#[command(
    name = "rollsig",
    about = "RollSig: rolling-mean signal rate over a price series"
)]
struct Cli {
    /// Input series: CSV with a header row and a `close` column.
    #[arg(long)]
    input: PathBuf,

    /// Run configuration (YAML, or TOML with a .toml extension).
    #[arg(long)]
    config: PathBuf,

    /// Destination for the JSON metrics report.
    #[arg(long)]
    output: PathBuf,

    /// Destination for run diagnostics (appended).
    #[arg(long)]
    log_file: PathBuf,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let paths = JobPaths {
        input: cli.input,
        config: cli.config,
    };
    let mut runner = JobRunner::new();
    let report = runner.run(&paths);

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = emit(&report, &cli.output, &mut stdout) {
        error!("Failed to emit report: {e:#}");
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::from(report.exit_code()))
}
