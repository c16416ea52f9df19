//! Application configuration file.
//!
//! ```toml
//! [backend]
//! mouse_capture = true
//! poll_timeout_ms = 25
//!
//! [theme.styles."menu.highlighted"]
//! fg = "black"
//! bg = "cyan"
//!
//! [logging]
//! level = "debug"
//! file = "/tmp/loom.log"
//! ```
//!
//! Every table and key is optional.

use std::path::Path;

use loom_tui_backend::BackendConfig;
use loom_tui_core::{Error, Result};
use loom_tui_widgets::{Theme, ThemeConfig};
use serde::Deserialize;
use tracing::debug;

use crate::logging::LoggingConfig;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "LOOM_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoomConfig {
    /// Terminal modes and polling.
    pub backend: BackendConfig,
    /// Style overrides on top of the default theme.
    pub theme: ThemeConfig,
    /// Log level and destination.
    pub logging: LoggingConfig,
}

impl LoomConfig {
    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Loads configuration from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Loads the file named by `LOOM_CONFIG`, or returns the defaults when
    /// it is unset.
    pub fn load_default() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// The default theme with the configured overrides applied.
    pub fn theme(&self) -> Theme {
        Theme::default().with_overrides(&self.theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loom_tui_core::Color;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_empty_is_default() {
        assert_eq!(LoomConfig::from_toml_str("").unwrap(), LoomConfig::default());
    }

    #[test]
    fn test_sections_parse() {
        let config = LoomConfig::from_toml_str(
            r#"
            [backend]
            poll_timeout_ms = 5
            focus_events = true

            [theme.styles.menu]
            fg = "navy"

            [logging]
            level = "trace"
            "#,
        )
        .unwrap();

        assert_eq!(config.backend.poll_timeout_ms, 5);
        assert!(config.backend.focus_events);
        assert!(config.backend.mouse_capture);
        assert_eq!(config.logging.level, "trace");
        assert_eq!(config.theme().color_for("menu").fg, Some(Color::NAVY));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[backend]\nsync_output = false").unwrap();

        let config = LoomConfig::load(file.path()).unwrap();
        assert!(!config.backend.sync_output);
    }

    #[test]
    fn test_load_reports_path_on_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[backend\n").unwrap();

        let err = LoomConfig::load(file.path()).unwrap_err();
        match err {
            Error::Config(message) => {
                assert!(message.contains(&file.path().display().to_string()));
            }
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LoomConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
