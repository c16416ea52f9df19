//! Log setup.
//!
//! The terminal backend owns stdout, so logs go to a file or to stderr.

use std::fs::OpenOptions;
use std::path::PathBuf;

use loom_tui_core::{Error, Result};
use serde::Deserialize;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Where and how much to log.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `loom_tui_backend=trace`.
    /// `RUST_LOG` takes precedence when set.
    pub level: String,

    /// Append to this file instead of writing to stderr.
    pub file: Option<PathBuf>,

    /// Emit one JSON object per event.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            json: false,
        }
    }
}

fn build_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| Error::Config(format!("invalid log level {level:?}: {e}")))
}

/// Installs the global subscriber described by `config`.
///
/// File output goes through a background writer; keep the returned guard
/// alive until exit so buffered lines are flushed. Fails if the log file
/// cannot be opened or a subscriber is already set.
pub fn init(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(&config.level)?)
        .with_ansi(false)
        .with_target(true);

    let mut guard = None;
    let installed = match &config.file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let (writer, file_guard) = tracing_appender::non_blocking(file);
            guard = Some(file_guard);
            if config.json {
                builder.json().with_writer(writer).try_init()
            } else {
                builder.with_writer(writer).try_init()
            }
        }
        None if config.json => builder.json().with_writer(std::io::stderr).try_init(),
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    installed.map_err(|e| Error::Config(format!("logging already initialized: {e}")))?;
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert!(config.file.is_none());
    }

    #[test]
    fn test_filter_accepts_directives() {
        assert!(build_filter("debug").is_ok());
        assert!(build_filter("warn,loom_tui_backend=trace").is_ok());
    }

    #[test]
    fn test_init_writes_to_file_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loom.log");
        let config = LoggingConfig {
            level: "info".to_string(),
            file: Some(path.clone()),
            json: false,
        };

        let guard = init(&config).unwrap();
        assert!(guard.is_some());
        tracing::info!(target: "loom_tui", "log file check");
        // Dropping the guard flushes the background writer.
        drop(guard);
        assert!(std::fs::read_to_string(&path).unwrap().contains("log file check"));

        assert!(matches!(init(&config), Err(Error::Config(_))));
    }
}
