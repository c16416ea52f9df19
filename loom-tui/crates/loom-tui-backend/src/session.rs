//! Per-session information.

/// Who is connected and how big their window is.
///
/// Owned by the backend. The window size changes only when the owning
/// backend observes a resize; everyone else gets a shared borrow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    username: String,
    language: String,
    window_width: u16,
    window_height: u16,
}

impl SessionInfo {
    /// Creates session information from explicit values.
    pub fn new(
        username: impl Into<String>,
        language: impl Into<String>,
        window_width: u16,
        window_height: u16,
    ) -> Self {
        Self {
            username: username.into(),
            language: language.into(),
            window_width,
            window_height,
        }
    }

    /// Describes the local user from `USER`/`USERNAME` and `LANG`.
    pub fn from_environment(window_width: u16, window_height: u16) -> Self {
        let username = std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .unwrap_or_else(|_| "unknown".to_string());
        let language = std::env::var("LANG")
            .ok()
            .filter(|lang| !lang.is_empty())
            .unwrap_or_else(|| "en_US".to_string());
        Self::new(username, language, window_width, window_height)
    }

    /// The connected user's name.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Language/encoding, e.g. `en_US.UTF-8`.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Window width in columns.
    pub fn window_width(&self) -> u16 {
        self.window_width
    }

    /// Window height in rows.
    pub fn window_height(&self) -> u16 {
        self.window_height
    }

    pub(crate) fn set_window_size(&mut self, width: u16, height: u16) {
        self.window_width = width;
        self.window_height = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let info = SessionInfo::new("grace", "C.UTF-8", 132, 43);
        assert_eq!(info.username(), "grace");
        assert_eq!(info.language(), "C.UTF-8");
        assert_eq!((info.window_width(), info.window_height()), (132, 43));
    }

    #[test]
    fn test_from_environment_uses_given_size() {
        let info = SessionInfo::from_environment(80, 25);
        assert!(!info.username().is_empty());
        assert!(!info.language().is_empty());
        assert_eq!(info.window_width(), 80);
    }

    #[test]
    fn test_set_window_size() {
        let mut info = SessionInfo::new("a", "en_US", 10, 10);
        info.set_window_size(40, 12);
        assert_eq!((info.window_width(), info.window_height()), (40, 12));
    }
}
