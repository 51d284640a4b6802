//! Series ingestion from a CSV file.
//!
//! Checks run in a fixed order: the file exists, it parses, it has at least
//! one data row, it has a `close` column. Only then are `close` cells
//! converted to numbers.

use std::path::Path;

use rollsig_core::domain::CLOSE_COLUMN;
use rollsig_core::Series;
use tracing::{debug, warn};

use crate::error::JobError;

/// Cell values read as a missing `close` (NaN). Matched exactly, after
/// trimming; this is the usual dataframe default NA set.
const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Result of loading a series.
#[derive(Debug, Clone)]
pub struct LoadedSeries {
    pub series: Series,
    pub rows_processed: usize,
}

/// Load the input series from `path`.
pub fn load_series(path: &Path) -> Result<LoadedSeries, JobError> {
    if !path.exists() {
        return Err(JobError::input_not_found(path));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;

    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let records = reader
        .records()
        .collect::<Result<Vec<csv::StringRecord>, csv::Error>>()?;

    if records.is_empty() {
        return Err(JobError::EmptyInput);
    }

    let close_idx = columns
        .iter()
        .position(|c| c == CLOSE_COLUMN)
        .ok_or(JobError::MissingColumn)?;

    let close = records
        .iter()
        .enumerate()
        .map(|(row, record)| parse_close(record.get(close_idx), row))
        .collect::<Result<Vec<f64>, JobError>>()?;

    let series = Series::new(columns, close);
    let missing = series.missing_count();
    if missing > 0 {
        warn!("close column has {missing} missing values");
    }
    debug!(columns = ?series.columns(), "parsed input schema");

    Ok(LoadedSeries {
        rows_processed: series.len(),
        series,
    })
}

fn parse_close(cell: Option<&str>, row: usize) -> Result<f64, JobError> {
    let raw = cell.unwrap_or_default().trim();
    if MISSING_MARKERS.contains(&raw) {
        return Ok(f64::NAN);
    }
    raw.parse::<f64>().map_err(|_| {
        JobError::Unexpected(format!(
            "could not convert '{raw}' to float in column '{CLOSE_COLUMN}' at row {row}"
        ))
    })
}
