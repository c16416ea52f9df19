//! Backend for a session whose terminal sits at the other end of a
//! connection.
//!
//! Output is ANSI written to any [`Write`] (a socket, a pty, a buffer).
//! Input arrives already decoded over a flume channel, fed by whatever
//! reads the connection. When the feeder hangs up, pending events are
//! still delivered and the next read reports the disconnect.

use std::io::{self, Write};

use flume::{Receiver, RecvTimeoutError, TryRecvError};
use loom_tui_buffer::Screen;
use loom_tui_core::{Error, Result};
use loom_tui_input::Event;
use tracing::{debug, error, info, trace, warn};

use crate::{
    Backend, BackendConfig, Lifecycle, LifecycleState, MAX_EVENTS_PER_POLL, SessionInfo, ansi,
};

/// Networked session backend.
pub struct RemoteBackend<W: Write> {
    writer: W,
    input: Receiver<Event>,
    screen: Screen,
    session: SessionInfo,
    config: BackendConfig,
    lifecycle: Lifecycle,
}

impl<W: Write> RemoteBackend<W> {
    /// Starts a session, writing the terminal setup sequences to `writer`.
    ///
    /// The screen takes its size from `session`.
    pub fn new(
        mut writer: W,
        input: Receiver<Event>,
        session: SessionInfo,
        config: BackendConfig,
    ) -> Result<Self> {
        ansi::write_setup(&mut writer, &config).map_err(Error::Io)?;

        let (width, height) = (session.window_width(), session.window_height());
        info!(width, height, user = session.username(), "remote session started");

        Ok(Self {
            writer,
            input,
            screen: Screen::new(width, height),
            session,
            config,
            lifecycle: Lifecycle::new(),
        })
    }

    /// Borrows the output sink.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Borrows the output sink mutably.
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> &LifecycleState {
        self.lifecycle.state()
    }

    fn transport_failure(&mut self, err: io::Error) -> Error {
        error!(user = self.session.username(), error = %err, "remote write failed");
        self.lifecycle.fail(err.to_string());
        Error::Io(err)
    }

    fn disconnected(&mut self) -> Error {
        warn!(user = self.session.username(), "remote input closed");
        let reason = "remote input closed".to_string();
        self.lifecycle.fail(reason.clone());
        Error::Disconnected(reason)
    }

    fn accept(&mut self, event: Event, queue: &mut Vec<Event>) {
        if let Event::Resize(width, height) = event {
            debug!(width, height, "remote window resized");
            self.screen.resize(width, height);
            self.session.set_window_size(width, height);
        }
        queue.push(event);
    }
}

impl<W: Write> Backend for RemoteBackend<W> {
    fn flush_screen(&mut self) -> Result<()> {
        self.lifecycle.ensure_active()?;
        if !self.screen.is_dirty() {
            return Ok(());
        }

        let diff = self.screen.changes();
        match ansi::write_changes(&mut self.writer, &diff, self.config.sync_output) {
            Ok(written) => {
                self.screen.commit();
                trace!(cells = written, "flushed remote screen");
                Ok(())
            }
            Err(err) => Err(self.transport_failure(err)),
        }
    }

    fn get_events(&mut self, queue: &mut Vec<Event>) -> Result<()> {
        self.lifecycle.ensure_active()?;

        match self.input.recv_timeout(self.config.poll_timeout()) {
            Ok(event) => self.accept(event, queue),
            Err(RecvTimeoutError::Timeout) => return Ok(()),
            Err(RecvTimeoutError::Disconnected) => return Err(self.disconnected()),
        }

        for _ in 1..MAX_EVENTS_PER_POLL {
            match self.input.try_recv() {
                Ok(event) => self.accept(event, queue),
                // A hang-up is reported on the next call, after these events.
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        let Some(previous) = self.lifecycle.begin_shutdown() else {
            debug!("remote backend already shut down");
            return Ok(());
        };
        info!(user = self.session.username(), "closing remote session");

        let restored = ansi::write_restore(&mut self.writer, &self.config);
        match (previous, restored) {
            (LifecycleState::Active, Err(err)) => Err(Error::Io(err)),
            // The transport already failed; nothing more to report.
            _ => Ok(()),
        }
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
