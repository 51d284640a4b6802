//! Job error taxonomy.
//!
//! Every failure in the pipeline becomes one `JobError`. The display string
//! is what ends up in the report's `error_message`.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from any stage of the job.
#[derive(Debug, Error)]
pub enum JobError {
    #[error("Config file {} not found", .path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration file structure")]
    InvalidConfig,

    #[error("Invalid configuration file structure: window must be a positive integer, got {0}")]
    InvalidWindow(String),

    #[error("Input file {} not found", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("Empty input file")]
    EmptyInput,

    #[error("Missing required 'close' column")]
    MissingColumn,

    /// Any I/O or codec failure, carrying the underlying description.
    #[error("{0}")]
    Unexpected(String),
}

/// Fieldless classification of a `JobError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ConfigNotFound,
    InvalidConfig,
    InputNotFound,
    EmptyInput,
    MissingColumn,
    UnexpectedFailure,
}

impl JobError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            JobError::ConfigNotFound { .. } => ErrorKind::ConfigNotFound,
            JobError::InvalidConfig | JobError::InvalidWindow(_) => ErrorKind::InvalidConfig,
            JobError::InputNotFound { .. } => ErrorKind::InputNotFound,
            JobError::EmptyInput => ErrorKind::EmptyInput,
            JobError::MissingColumn => ErrorKind::MissingColumn,
            JobError::Unexpected(_) => ErrorKind::UnexpectedFailure,
        }
    }

    pub(crate) fn config_not_found(path: &Path) -> Self {
        JobError::ConfigNotFound {
            path: path.to_path_buf(),
        }
    }

    pub(crate) fn input_not_found(path: &Path) -> Self {
        JobError::InputNotFound {
            path: path.to_path_buf(),
        }
    }
}

impl From<std::io::Error> for JobError {
    fn from(e: std::io::Error) -> Self {
        JobError::Unexpected(e.to_string())
    }
}

impl From<csv::Error> for JobError {
    fn from(e: csv::Error) -> Self {
        JobError::Unexpected(e.to_string())
    }
}

impl From<serde_yaml::Error> for JobError {
    fn from(e: serde_yaml::Error) -> Self {
        JobError::Unexpected(e.to_string())
    }
}

impl From<toml::de::Error> for JobError {
    fn from(e: toml::de::Error) -> Self {
        JobError::Unexpected(e.to_string())
    }
}
