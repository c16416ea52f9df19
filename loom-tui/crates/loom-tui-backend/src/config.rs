//! Backend configuration.
//!
//! Loaded from the `[backend]` table of the application's TOML file or
//! built in code:
//!
//! ```
//! use loom_tui_backend::BackendConfig;
//! use std::time::Duration;
//!
//! let config = BackendConfig::from_toml_str("poll_timeout_ms = 10\nmouse_capture = false").unwrap();
//! assert_eq!(config.poll_timeout(), Duration::from_millis(10));
//! assert!(!config.mouse_capture);
//! assert!(config.alternate_screen);
//! ```

use std::time::Duration;

use loom_tui_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Terminal modes and timing for a backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Report mouse presses, releases and motion.
    pub mouse_capture: bool,

    /// Draw on the alternate screen and restore the original on shutdown.
    pub alternate_screen: bool,

    /// Deliver pasted text as a single paste event.
    pub bracketed_paste: bool,

    /// Report focus gained/lost.
    pub focus_events: bool,

    /// Bracket each flush in synchronized-output sequences.
    pub sync_output: bool,

    /// Longest time `get_events` waits for the first event, in milliseconds.
    pub poll_timeout_ms: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            mouse_capture: true,
            alternate_screen: true,
            bracketed_paste: true,
            focus_events: false,
            sync_output: true,
            poll_timeout_ms: default_poll_timeout_ms(),
        }
    }
}

fn default_poll_timeout_ms() -> u64 {
    50
}

impl BackendConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Poll timeout as a `Duration`.
    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.poll_timeout_ms)
    }

    /// Sets the poll timeout.
    pub fn with_poll_timeout(mut self, timeout: Duration) -> Self {
        self.poll_timeout_ms = timeout.as_millis().min(u64::MAX as u128) as u64;
        self
    }

    /// Enables or disables mouse capture.
    pub fn with_mouse_capture(mut self, enabled: bool) -> Self {
        self.mouse_capture = enabled;
        self
    }

    /// Enables or disables the alternate screen.
    pub fn with_alternate_screen(mut self, enabled: bool) -> Self {
        self.alternate_screen = enabled;
        self
    }

    /// Enables or disables synchronized output.
    pub fn with_sync_output(mut self, enabled: bool) -> Self {
        self.sync_output = enabled;
        self
    }
}
