//! Series: the ordered numeric column the engine runs over.

/// Name of the column every input series must carry.
pub const CLOSE_COLUMN: &str = "close";

/// Time-ordered rows of an input file, reduced to what the engine reads.
///
/// Row position is the time index: row 0 is the oldest observation. The
/// header list is kept so callers can report on the input schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    columns: Vec<String>,
    close: Vec<f64>,
}

impl Series {
    pub fn new(columns: Vec<String>, close: Vec<f64>) -> Self {
        Self { columns, close }
    }

    /// Build a single-column series. Mostly useful in tests and benches.
    pub fn from_closes(close: Vec<f64>) -> Self {
        Self {
            columns: vec![CLOSE_COLUMN.to_string()],
            close,
        }
    }

    pub fn close(&self) -> &[f64] {
        &self.close
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.close.len()
    }

    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    /// Count of `close` values that are NaN (missing cells in the input).
    pub fn missing_count(&self) -> usize {
        self.close.iter().filter(|v| v.is_nan()).count()
    }
}
