// Logging module - tracing subscriber setup
//
// Console output always; JSON file output with rotation when enabled in
// config. Filter precedence: RUST_LOG env var > config file > "info".

use crate::config::{level_name, LogRotation, LoggingConfig};
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the default filter directive for a configured level
fn default_filter(level: LevelFilter) -> String {
    let level = level_name(level);
    format!("tallerlei_homepage={level},axum={level}")
}

/// Create the rolling file appender for the configured rotation
fn file_appender(config: &LoggingConfig) -> tracing_appender::rolling::RollingFileAppender {
    match config.file_rotation {
        LogRotation::Hourly => {
            tracing_appender::rolling::hourly(&config.file_dir, &config.file_prefix)
        }
        LogRotation::Daily => tracing_appender::rolling::daily(&config.file_dir, &config.file_prefix),
        LogRotation::Never => tracing_appender::rolling::never(&config.file_dir, &config.file_prefix),
    }
}

/// Initialize the global tracing subscriber
///
/// The returned guard must be kept alive for the duration of the program so
/// buffered file logs are flushed on exit. `None` when file logging is off
/// or the log directory could not be created.
pub fn init(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(config.level)));

    // Set up file logging if enabled (non-blocking writer with rotation)
    let (file_layer, guard) = if config.file_enabled {
        match std::fs::create_dir_all(&config.file_dir) {
            Ok(()) => {
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender(config));
                // File layer uses JSON format for structured log parsing
                let layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking)
                    .with_ansi(false);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                // Fall back to console-only logging
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.file_dir, e
                );
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(file_layer)
        .init();

    guard
}
