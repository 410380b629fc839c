//! Configuration for the homepage server and static export
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/tallerlei-homepage/config.toml)
//! 3. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod observability;
mod serialization;
pub(crate) mod site;


// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (maintain public API)
// ─────────────────────────────────────────────────────────────────────────────

pub use observability::{level_name, FileLogging, LogRotation, LoggingConfig};
pub use site::{FileSite, Project, SiteContent};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default listen address for the HTTP server
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:4200";

/// Default directory for `render` output
pub const DEFAULT_OUTPUT_DIR: &str = "./dist";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Address to bind the HTTP server to
    pub bind_addr: SocketAddr,

    /// Directory the static export writes index.html into
    pub output_dir: PathBuf,

    /// Page content
    pub site: SiteContent,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 4200)),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            site: SiteContent::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub bind_addr: Option<String>,
    pub output_dir: Option<String>,

    /// Optional [site] section
    pub site: Option<FileSite>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

impl FileConfig {
    /// Parse config file contents
    pub(crate) fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Invalid TOML in config file")
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/tallerlei-homepage/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| {
            p.join(".config")
                .join("tallerlei-homepage")
                .join("config.toml")
        })
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        // Config::default().to_toml() is the single source of truth
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Read the config file at `path`
    ///
    /// A missing file yields defaults. A file that exists but cannot be read
    /// or parsed is an error: a broken config should fail fast rather than
    /// silently serve the default site.
    pub(crate) fn load_file_config(path: &Path) -> Result<FileConfig> {
        match std::fs::read_to_string(path) {
            Ok(contents) => FileConfig::parse(&contents)
                .with_context(|| format!("Failed to parse {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => {
                Err(e).with_context(|| format!("Cannot read config file {}", path.display()))
            }
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn load() -> Result<Self> {
        let file = match Self::config_path() {
            Some(path) => Self::load_file_config(&path)?,
            None => FileConfig::default(),
        };
        Self::resolve(file, |key| std::env::var(key).ok())
    }

    /// Load configuration from the file at `path` and defaults only
    ///
    /// Environment overrides are ignored, so the result is what the user
    /// actually wrote. Used when rewriting the file in place.
    pub fn load_file_only(path: &Path) -> Result<Self> {
        Self::resolve(Self::load_file_config(path)?, |_| None)
    }

    /// Merge a parsed config file with environment overrides
    ///
    /// `env` looks up a variable by name; it is a parameter so tests can
    /// supply overrides without touching the process environment.
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        // Bind address: env > file > default
        let bind_addr = env("TALLERLEI_BIND")
            .or(file.bind_addr)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid bind address: {bind_addr}"))?;

        // Output directory: env > file > default
        let output_dir = env("TALLERLEI_OUTPUT_DIR")
            .or(file.output_dir)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        // Site content: file only
        let site = SiteContent::from_file(file.site);

        // Logging: level can be overridden from env (RUST_LOG handled in logging::init)
        let mut logging = LoggingConfig::from_file(file.logging)?;
        if let Some(level) = env("TALLERLEI_LOG_LEVEL") {
            logging.level =
                observability::parse_level(&level).context("Invalid TALLERLEI_LOG_LEVEL")?;
        }

        Ok(Self {
            bind_addr,
            output_dir,
            site,
            logging,
        })
    }

    /// Save current configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().context("Could not determine config path")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        std::fs::write(&path, self.to_toml())
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}
