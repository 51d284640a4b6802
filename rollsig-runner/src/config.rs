//! Run configuration: seed, rolling window, version tag.
//!
//! The document is YAML unless the file has a `.toml` extension. All three
//! keys are required and non-null; any other keys are ignored.

use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;

use rollsig_core::EntropySource;
use serde::de::IgnoredAny;
use serde::Deserialize;

use crate::error::JobError;

/// Validated configuration for a single run. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: u64,
    pub window: NonZeroUsize,
    pub version: String,
}

/// Document format, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// Shape of the document before validation. Missing and null keys both land
/// as `None`.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    seed: Option<u64>,
    window: Option<RawWindow>,
    version: Option<String>,
}

/// Any value the document may hold under `window`. Only a positive integer
/// survives validation; everything else is an invalid configuration rather
/// than a codec failure.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawWindow {
    Integer(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

impl RawWindow {
    fn validate(self) -> Result<NonZeroUsize, JobError> {
        let got = match self {
            RawWindow::Integer(n) => match usize::try_from(n).ok().and_then(NonZeroUsize::new) {
                Some(window) => return Ok(window),
                None => n.to_string(),
            },
            RawWindow::Float(f) => format!("{f:?}"),
            RawWindow::Text(text) => format!("{text:?}"),
            RawWindow::Other(_) => "a non-scalar value".to_string(),
        };
        Err(JobError::InvalidWindow(got))
    }
}

impl RawConfig {
    fn validate(self) -> Result<RunConfig, JobError> {
        let (Some(seed), Some(window), Some(version)) = (self.seed, self.window, self.version)
        else {
            return Err(JobError::InvalidConfig);
        };

        let window = window.validate()?;

        Ok(RunConfig {
            seed,
            window,
            version,
        })
    }
}

impl RunConfig {
    /// Load and validate a configuration file.
    pub fn from_file(path: &Path) -> Result<Self, JobError> {
        if !path.exists() {
            return Err(JobError::config_not_found(path));
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content, ConfigFormat::from_path(path))
    }

    /// Parse and validate configuration text.
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self, JobError> {
        if content.trim().is_empty() {
            return Err(JobError::InvalidConfig);
        }
        let raw: RawConfig = match format {
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
            ConfigFormat::Toml => toml::from_str(content)?,
        };
        raw.validate()
    }

    /// Entropy source seeded from this config.
    pub fn entropy(&self) -> EntropySource {
        EntropySource::seeded(self.seed)
    }
}
