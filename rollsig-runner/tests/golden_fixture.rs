//! Golden run over the frozen price fixture.

use std::path::PathBuf;

use rollsig_runner::{load_series, JobPaths, JobRunner, RunConfig, Status};

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

#[test]
fn fixture_config_loads() {
    let config = RunConfig::from_file(&fixture_dir().join("config.yaml")).unwrap();
    assert_eq!(config.seed, 42);
    assert_eq!(config.window.get(), 5);
    assert_eq!(config.version, "v1");
}

#[test]
fn fixture_series_loads() {
    let loaded = load_series(&fixture_dir().join("prices.csv")).unwrap();
    assert_eq!(loaded.rows_processed, 40);
    assert_eq!(loaded.series.columns().len(), 6);
    assert_eq!(loaded.series.close()[0], 100.0);
    assert_eq!(loaded.series.missing_count(), 0);
}

#[test]
fn golden_signal_rate() {
    let paths = JobPaths {
        input: fixture_dir().join("prices.csv"),
        config: fixture_dir().join("config.yaml"),
    };

    let report = JobRunner::new().run(&paths);

    assert_eq!(report.status, Status::Success, "{:?}", report.error_message);
    assert_eq!(report.rows_processed, Some(40));
    // 19 of 40 rows close above their 5-row mean
    assert_eq!(report.value, Some(0.475));
}
