//! Error types for Loom TUI operations.

use thiserror::Error;

/// Core error type for screen and backend operations.
#[derive(Error, Debug)]
pub enum Error {
    /// An I/O error occurred on the device or transport.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal operation failed.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Invalid dimensions were provided.
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// The backend was shut down; the instance is no longer usable.
    #[error("backend has been shut down")]
    Shutdown,

    /// The remote end of a session went away.
    #[error("session disconnected: {0}")]
    Disconnected(String),

    /// A previous transport failure left the backend unusable.
    #[error("backend failed: {0}")]
    Failed(String),

    /// Configuration could not be loaded or parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns true for errors that permanently end a backend instance.
    pub fn is_terminal_state(&self) -> bool {
        matches!(
            self,
            Self::Shutdown | Self::Disconnected(_) | Self::Failed(_)
        )
    }
}

/// Result type alias using the core Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for color parsing operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Input string was empty.
    #[error("empty input")]
    EmptyInput,

    /// Hex string had an invalid length.
    #[error("invalid hex length: {0} (expected 3, 6, or 8)")]
    InvalidLength(usize),

    /// Invalid hexadecimal character.
    #[error("invalid hex character")]
    InvalidHexChar,

    /// Unknown color name.
    #[error("unknown color name: {0}")]
    UnknownColor(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_state_errors() {
        assert!(Error::Shutdown.is_terminal_state());
        assert!(Error::Failed("broken pipe".into()).is_terminal_state());
        assert!(Error::Disconnected("eof".into()).is_terminal_state());
        assert!(!Error::Config("bad".into()).is_terminal_state());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(Error::Shutdown.to_string(), "backend has been shut down");
        assert_eq!(
            ColorParseError::InvalidLength(5).to_string(),
            "invalid hex length: 5 (expected 3, 6, or 8)"
        );
    }
}
