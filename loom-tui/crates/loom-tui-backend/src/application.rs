//! Event loop and lifecycle management over any [`Backend`].

use loom_tui_buffer::Screen;
use loom_tui_core::Result;
use loom_tui_input::Event;
use tracing::{debug, error, info};

use crate::Backend;

/// Application state for the event loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppState {
    /// The loop is running.
    Running,
    /// The loop is not running.
    Stopped,
}

/// Drives a backend: collect events, hand them to a callback that routes
/// and redraws, then flush.
///
/// # Example
///
/// ```
/// use loom_tui_backend::{Application, BackendConfig, EmbeddedBackend, Event, SessionInfo};
/// use loom_tui_core::Style;
/// use std::time::Duration;
///
/// let session = SessionInfo::new("ada", "en_US", 20, 1);
/// let config = BackendConfig::default().with_poll_timeout(Duration::ZERO);
/// let backend = EmbeddedBackend::new(session, config);
/// let mut app = Application::new(backend);
///
/// let mut frames = 0;
/// app.run_with_events(|screen, _events: &[Event]| {
///     screen.put_string_at(0, 0, "Press q to quit", Style::default());
///     frames += 1;
///     frames < 3
/// })
/// .unwrap();
///
/// assert_eq!(frames, 3);
/// ```
pub struct Application<B: Backend> {
    backend: B,
    state: AppState,
    events: Vec<Event>,
}

impl<B: Backend> Application<B> {
    /// Wraps a backend. The loop starts in [`AppState::Stopped`].
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: AppState::Stopped,
            events: Vec::new(),
        }
    }

    /// Returns the current application state.
    #[inline]
    pub fn state(&self) -> AppState {
        self.state
    }

    /// Borrows the backend.
    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Borrows the backend mutably.
    #[inline]
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Consumes the application and returns the backend.
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Runs one iteration: collect events, run `callback`, flush.
    ///
    /// Returns what the callback returned: `false` asks the loop to stop.
    pub fn step<F>(&mut self, callback: &mut F) -> Result<bool>
    where
        F: FnMut(&mut Screen, &[Event]) -> bool,
    {
        self.events.clear();
        self.backend.get_events(&mut self.events)?;

        let keep_running = callback(self.backend.screen_mut(), &self.events);

        self.backend.flush_screen()?;
        Ok(keep_running)
    }

    /// Runs until the callback returns `false` or the backend fails.
    ///
    /// The backend is always shut down on the way out; the first error
    /// wins.
    pub fn run_with_events<F>(&mut self, mut callback: F) -> Result<()>
    where
        F: FnMut(&mut Screen, &[Event]) -> bool,
    {
        self.state = AppState::Running;
        info!("application loop started");

        let result = loop {
            match self.step(&mut callback) {
                Ok(true) => {}
                Ok(false) => break Ok(()),
                Err(err) => {
                    error!(error = %err, "application loop aborted");
                    break Err(err);
                }
            }
        };

        let shutdown_result = self.backend.shutdown();
        self.state = AppState::Stopped;
        debug!("application loop stopped");

        result.and(shutdown_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BackendConfig, EmbeddedBackend, SessionInfo};
    use loom_tui_core::{Error, Style};
    use loom_tui_input::KeyEvent;
    use std::time::Duration;

    fn app() -> Application<EmbeddedBackend> {
        let session = SessionInfo::new("t", "en_US", 10, 2);
        let config = BackendConfig::default().with_poll_timeout(Duration::ZERO);
        Application::new(EmbeddedBackend::new(session, config))
    }

    #[test]
    fn test_step_delivers_events_and_flushes() {
        let mut app = app();
        app.backend().injector().send(KeyEvent::char('a')).unwrap();

        let mut seen = Vec::new();
        let keep = app
            .step(&mut |screen: &mut Screen, events: &[Event]| {
                seen.extend_from_slice(events);
                screen.put_string_at(0, 0, "drawn", Style::default());
                true
            })
            .unwrap();

        assert!(keep);
        assert_eq!(seen, vec![Event::Key(KeyEvent::char('a'))]);
        assert_eq!(app.backend().display_row(0).unwrap().trim_end(), "drawn");
        assert!(!app.backend().screen().is_dirty());
    }

    #[test]
    fn test_run_shuts_down_backend() {
        let mut app = app();
        app.run_with_events(|_, _| false).unwrap();
        assert_eq!(app.state(), AppState::Stopped);
        assert!(app.backend().is_shut_down());
    }

    #[test]
    fn test_run_reports_first_error_and_still_shuts_down() {
        let mut app = app();
        app.backend_mut().shutdown().unwrap();

        let result = app.run_with_events(|_, _| true);
        assert!(matches!(result, Err(Error::Shutdown)));
        assert_eq!(app.state(), AppState::Stopped);
    }

    #[test]
    fn test_loop_runs_until_callback_stops() {
        let mut app = app();
        assert_eq!(app.state(), AppState::Stopped);

        let mut steps = 0;
        app.run_with_events(|_, _| {
            steps += 1;
            steps < 2
        })
        .unwrap();
        assert_eq!(steps, 2);
        assert_eq!(app.state(), AppState::Stopped);
    }
}
