//! Local terminal backend on top of crossterm.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    cursor::{Hide, Show},
    event::{
        self, DisableBracketedPaste, DisableFocusChange, DisableMouseCapture,
        EnableBracketedPaste, EnableFocusChange, EnableMouseCapture,
    },
    execute,
    style::{Attribute, ResetColor, SetAttribute},
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use loom_tui_buffer::Screen;
use loom_tui_core::{Error, Result};
use loom_tui_input::Event;
use tracing::{debug, error, info, trace, warn};

use crate::{Backend, BackendConfig, Lifecycle, MAX_EVENTS_PER_POLL, SessionInfo, ansi};

/// Backend driving the process's own terminal through stdout.
///
/// Construction puts the terminal in raw mode and enters the modes the
/// [`BackendConfig`] asks for; [`Backend::shutdown`] (or drop) undoes them.
pub struct TerminalBackend {
    stdout: Stdout,
    screen: Screen,
    session: SessionInfo,
    config: BackendConfig,
    lifecycle: Lifecycle,
    in_raw_mode: bool,
    in_alternate_screen: bool,
    mouse_captured: bool,
    bracketed_paste: bool,
    focus_events: bool,
    cursor_hidden: bool,
}

impl TerminalBackend {
    /// Opens the terminal with the given configuration.
    pub fn new(config: BackendConfig) -> Result<Self> {
        let (width, height) = terminal::size().map_err(Error::Io)?;
        let mut backend = Self {
            stdout: io::stdout(),
            screen: Screen::new(width, height),
            session: SessionInfo::from_environment(width, height),
            config,
            lifecycle: Lifecycle::new(),
            in_raw_mode: false,
            in_alternate_screen: false,
            mouse_captured: false,
            bracketed_paste: false,
            focus_events: false,
            cursor_hidden: false,
        };

        // On failure, Drop undoes whatever was already entered.
        backend.setup()?;

        info!(
            width,
            height,
            user = backend.session.username(),
            "terminal backend started"
        );
        Ok(backend)
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    fn setup(&mut self) -> Result<()> {
        enable_raw_mode().map_err(Error::Io)?;
        self.in_raw_mode = true;

        if self.config.alternate_screen {
            execute!(self.stdout, EnterAlternateScreen).map_err(Error::Io)?;
            self.in_alternate_screen = true;
        }
        if self.config.mouse_capture {
            execute!(self.stdout, EnableMouseCapture).map_err(Error::Io)?;
            self.mouse_captured = true;
        }
        if self.config.bracketed_paste {
            execute!(self.stdout, EnableBracketedPaste).map_err(Error::Io)?;
            self.bracketed_paste = true;
        }
        if self.config.focus_events {
            execute!(self.stdout, EnableFocusChange).map_err(Error::Io)?;
            self.focus_events = true;
        }

        execute!(self.stdout, Hide, Clear(ClearType::All)).map_err(Error::Io)?;
        self.cursor_hidden = true;
        Ok(())
    }

    /// Leaves every mode that was entered, attempting all steps even if
    /// one fails. Returns the first failure.
    fn restore(&mut self) -> Result<()> {
        let mut first_error: Option<io::Error> = None;
        let mut record = |result: io::Result<()>| {
            if let Err(err) = result {
                first_error.get_or_insert(err);
            }
        };

        record(execute!(self.stdout, ResetColor, SetAttribute(Attribute::Reset)));
        if self.focus_events {
            record(execute!(self.stdout, DisableFocusChange));
            self.focus_events = false;
        }
        if self.bracketed_paste {
            record(execute!(self.stdout, DisableBracketedPaste));
            self.bracketed_paste = false;
        }
        if self.mouse_captured {
            record(execute!(self.stdout, DisableMouseCapture));
            self.mouse_captured = false;
        }
        if self.cursor_hidden {
            record(execute!(self.stdout, Show));
            self.cursor_hidden = false;
        }
        if self.in_alternate_screen {
            record(execute!(self.stdout, LeaveAlternateScreen));
            self.in_alternate_screen = false;
        }
        if self.in_raw_mode {
            record(disable_raw_mode());
            self.in_raw_mode = false;
        }

        match first_error {
            Some(err) => Err(Error::Io(err)),
            None => Ok(()),
        }
    }

    fn transport_failure(&mut self, err: io::Error) -> Error {
        error!(error = %err, "terminal I/O failed");
        self.lifecycle.fail(err.to_string());
        Error::Io(err)
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        debug!(width, height, "terminal resized");
        self.screen.resize(width, height);
        self.session.set_window_size(width, height);
    }
}

impl Backend for TerminalBackend {
    fn flush_screen(&mut self) -> Result<()> {
        self.lifecycle.ensure_active()?;
        if !self.screen.is_dirty() {
            return Ok(());
        }

        let diff = self.screen.changes();
        match ansi::write_changes(&mut self.stdout, &diff, self.config.sync_output) {
            Ok(written) => {
                self.screen.commit();
                trace!(cells = written, runs = diff.runs.len(), "flushed screen");
                Ok(())
            }
            Err(err) => Err(self.transport_failure(err)),
        }
    }

    fn get_events(&mut self, queue: &mut Vec<Event>) -> Result<()> {
        self.lifecycle.ensure_active()?;

        let mut timeout = self.config.poll_timeout();
        let mut received = 0;
        while received < MAX_EVENTS_PER_POLL {
            let ready = match event::poll(timeout) {
                Ok(ready) => ready,
                Err(err) => return Err(self.transport_failure(err)),
            };
            if !ready {
                break;
            }

            let raw = match event::read() {
                Ok(raw) => raw,
                Err(err) => return Err(self.transport_failure(err)),
            };
            let event = Event::from(raw);
            if let Event::Resize(width, height) = event {
                self.handle_resize(width, height);
            }
            queue.push(event);
            received += 1;

            // Only the first wait may block; drain the rest without waiting.
            timeout = Duration::ZERO;
        }

        if received > 0 {
            trace!(count = received, "collected terminal events");
        }
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        if self.lifecycle.begin_shutdown().is_none() {
            debug!("terminal backend already shut down");
            return Ok(());
        }
        info!("shutting down terminal backend");
        self.restore()
    }

    fn screen(&self) -> &Screen {
        &self.screen
    }

    fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    fn session_info(&self) -> &SessionInfo {
        &self.session
    }

    fn is_shut_down(&self) -> bool {
        self.lifecycle.is_shut_down()
    }
}

impl Drop for TerminalBackend {
    fn drop(&mut self) {
        if !self.lifecycle.is_shut_down() {
            warn!("terminal backend dropped without shutdown; restoring terminal");
            let _ = self.lifecycle.begin_shutdown();
            let _ = self.restore();
        }
    }
}
