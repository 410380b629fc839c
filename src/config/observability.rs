//! Logging configuration: level, JSON file output, rotation
//!
//! Values are validated when the config is resolved. A typo in the level or
//! rotation is a config error, not a silent fallback.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

/// How often the JSON log file rolls over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    /// Single file, never rolled
    Never,
}

impl LogRotation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }
}

impl FromStr for LogRotation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "hourly" => Ok(Self::Hourly),
            "daily" => Ok(Self::Daily),
            "never" => Ok(Self::Never),
            other => Err(anyhow!(
                "unknown file_rotation {other:?} (expected hourly, daily or never)"
            )),
        }
    }
}

/// Parse a level name such as "info" or "DEBUG"
pub fn parse_level(s: &str) -> Result<LevelFilter> {
    LevelFilter::from_str(s).map_err(|_| {
        anyhow!("unknown log level {s:?} (expected off, error, warn, info, debug or trace)")
    })
}

/// Lowercase level name as written in the config file and filter directives
pub fn level_name(level: LevelFilter) -> String {
    level.to_string().to_ascii_lowercase()
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Default level for this crate and axum (RUST_LOG overrides)
    pub level: LevelFilter,
    /// Also write JSON logs to rotating files
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    /// File name prefix, e.g. "tallerlei" -> "tallerlei.2025-01-01"
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::INFO,
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::Daily,
            file_prefix: "tallerlei".to_string(),
        }
    }
}

/// [logging] section as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}

impl LoggingConfig {
    /// Merge the [logging] section over defaults, rejecting unknown values
    pub fn from_file(file: Option<FileLogging>) -> Result<Self> {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let level = match file.level {
            Some(s) => parse_level(&s).context("Invalid [logging] level")?,
            None => defaults.level,
        };
        let file_rotation = match file.file_rotation {
            Some(s) => s.parse().context("Invalid [logging] file_rotation")?,
            None => defaults.file_rotation,
        };

        Ok(Self {
            level,
            file_enabled: file.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file.file_dir.map(PathBuf::from).unwrap_or(defaults.file_dir),
            file_rotation,
            file_prefix: file.file_prefix.unwrap_or(defaults.file_prefix),
        })
    }
}
