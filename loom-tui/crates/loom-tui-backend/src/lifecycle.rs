//! Usability state of a backend instance.

use loom_tui_core::{Error, Result};

/// Where a backend is in its life.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LifecycleState {
    /// Flushes and event reads are allowed.
    #[default]
    Active,
    /// A transport failure ended the session; holds the reason.
    Failed(String),
    /// `shutdown` was called.
    ShutDown,
}

/// Guard each backend embeds to reject calls after failure or shutdown.
#[derive(Debug, Default)]
pub struct Lifecycle {
    state: LifecycleState,
}

impl Lifecycle {
    /// Creates an active lifecycle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    pub fn state(&self) -> &LifecycleState {
        &self.state
    }

    /// Returns true once shutdown has begun.
    pub fn is_shut_down(&self) -> bool {
        self.state == LifecycleState::ShutDown
    }

    /// Fails with the error matching the current state unless active.
    pub fn ensure_active(&self) -> Result<()> {
        match &self.state {
            LifecycleState::Active => Ok(()),
            LifecycleState::Failed(reason) => Err(Error::Failed(reason.clone())),
            LifecycleState::ShutDown => Err(Error::Shutdown),
        }
    }

    /// Records a transport failure. Ignored unless active.
    pub fn fail(&mut self, reason: impl Into<String>) {
        if self.state == LifecycleState::Active {
            self.state = LifecycleState::Failed(reason.into());
        }
    }

    /// Moves to `ShutDown`.
    ///
    /// Returns the previous state, or `None` if already shut down.
    pub fn begin_shutdown(&mut self) -> Option<LifecycleState> {
        if self.is_shut_down() {
            return None;
        }
        Some(std::mem::replace(&mut self.state, LifecycleState::ShutDown))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_by_default() {
        let lifecycle = Lifecycle::new();
        assert!(lifecycle.ensure_active().is_ok());
        assert!(!lifecycle.is_shut_down());
    }

    #[test]
    fn test_failure_is_sticky() {
        let mut lifecycle = Lifecycle::new();
        lifecycle.fail("broken pipe");
        lifecycle.fail("second failure");
        assert_eq!(
            lifecycle.state(),
            &LifecycleState::Failed("broken pipe".to_string())
        );
        assert!(matches!(lifecycle.ensure_active(), Err(Error::Failed(r)) if r == "broken pipe"));
    }

    #[test]
    fn test_shutdown_once() {
        let mut lifecycle = Lifecycle::new();
        assert_eq!(lifecycle.begin_shutdown(), Some(LifecycleState::Active));
        assert_eq!(lifecycle.begin_shutdown(), None);
        assert!(matches!(lifecycle.ensure_active(), Err(Error::Shutdown)));

        lifecycle.fail("too late");
        assert!(lifecycle.is_shut_down());
    }

    #[test]
    fn test_shutdown_after_failure_reports_failure() {
        let mut lifecycle = Lifecycle::new();
        lifecycle.fail("eof");
        assert_eq!(
            lifecycle.begin_shutdown(),
            Some(LifecycleState::Failed("eof".to_string()))
        );
    }
}
