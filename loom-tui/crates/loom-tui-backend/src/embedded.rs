//! Backend for a display hosted inside another application.
//!
//! The host reads the device framebuffer after each flush and feeds input
//! through an [`EventInjector`], which may live on any thread.

use flume::{Receiver, RecvTimeoutError, Sender};
use loom_tui_buffer::{Cell, Screen};
use loom_tui_core::{Error, Result};
use loom_tui_input::Event;
use tracing::{debug, info, trace};

use crate::{Backend, BackendConfig, Lifecycle, MAX_EVENTS_PER_POLL, SessionInfo};

/// Cloneable handle the host uses to deliver input events.
#[derive(Debug, Clone)]
pub struct EventInjector {
    sender: Sender<Event>,
}

impl EventInjector {
    /// Queues an event for the next `get_events` call.
    ///
    /// Fails with [`Error::Disconnected`] once the backend has shut down
    /// or been dropped.
    pub fn send(&self, event: impl Into<Event>) -> Result<()> {
        self.sender
            .send(event.into())
            .map_err(|_| Error::Disconnected("embedded backend is gone".to_string()))
    }

    /// Queues a window resize.
    pub fn resize(&self, width: u16, height: u16) -> Result<()> {
        self.send(Event::Resize(width, height))
    }
}

/// In-process backend with an in-memory device framebuffer.
pub struct EmbeddedBackend {
    screen: Screen,
    session: SessionInfo,
    config: BackendConfig,
    lifecycle: Lifecycle,

    /// What the host display shows, row-major, `display_size` wide.
    display: Vec<Cell>,
    display_size: (u16, u16),

    /// Both ends live here until shutdown so the channel stays connected.
    channel: Option<(Sender<Event>, Receiver<Event>)>,

    frames: u64,
    cells_written: u64,
}

impl EmbeddedBackend {
    /// Creates a backend whose window size comes from `session`.
    pub fn new(session: SessionInfo, config: BackendConfig) -> Self {
        let (width, height) = (session.window_width(), session.window_height());
        info!(width, height, user = session.username(), "embedded backend started");
        Self {
            screen: Screen::new(width, height),
            display: blank_display(width, height),
            display_size: (width, height),
            session,
            config,
            lifecycle: Lifecycle::new(),
            channel: Some(flume::unbounded()),
            frames: 0,
            cells_written: 0,
        }
    }

    /// Returns a handle for delivering input.
    ///
    /// After shutdown the handle is already disconnected.
    pub fn injector(&self) -> EventInjector {
        let sender = match &self.channel {
            Some((sender, _)) => sender.clone(),
            None => flume::unbounded().0,
        };
        EventInjector { sender }
    }

    /// Returns the displayed cell at (x, y).
    pub fn display_cell(&self, x: u16, y: u16) -> Option<&Cell> {
        let (width, height) = self.display_size;
        if x >= width || y >= height {
            return None;
        }
        self.display.get(y as usize * width as usize + x as usize)
    }

    /// Returns the displayed glyphs of row `y`.
    pub fn display_row(&self, y: u16) -> Option<String> {
        let (width, height) = self.display_size;
        if y >= height {
            return None;
        }
        let start = y as usize * width as usize;
        let row = self.display.get(start..start + width as usize)?;
        Some(row.iter().map(|cell| cell.character).collect())
    }

    /// Number of flushes that wrote at least one cell.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Total cells written to the display.
    pub fn cells_written(&self) -> u64 {
        self.cells_written
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        debug!(width, height, "embedded display resized");
        self.screen.resize(width, height);
        self.session.set_window_size(width, height);
        self.sync_display_size();
    }

    /// Matches the display to the screen, which callers may resize directly.
    fn sync_display_size(&mut self) {
        let size = self.screen.size();
        if size == self.display_size {
            return;
        }
        debug!(width = size.0, height = size.1, "embedded display reallocated");
        self.display = blank_display(size.0, size.1);
        self.display_size = size;
        self.screen.invalidate();
    }
}

fn blank_display(width: u16, height: u16) -> Vec<Cell> {
    vec![Cell::default(); width as usize * height as usize]
}

impl Backend for EmbeddedBackend {
    fn flush_screen(&mut self) -> Result<()> {
        self.lifecycle.ensure_active()?;
        self.sync_display_size();
        if !self.screen.is_dirty() {
            return Ok(());
        }

        let diff = self.screen.changes();
        let width = self.display_size.0 as usize;
        for (x, y, cell) in diff.iter_cells() {
            if let Some(slot) = self.display.get_mut(y as usize * width + x as usize) {
                *slot = *cell;
            }
        }
        self.screen.commit();

        self.frames += 1;
        self.cells_written += diff.changed_count as u64;
        trace!(cells = diff.changed_count, frame = self.frames, "flushed embedded display");
        Ok(())
    }

    fn get_events(&mut self, queue: &mut Vec<Event>) -> Result<()> {
        self.lifecycle.ensure_active()?;
        let Some((_, receiver)) = &self.channel else {
            return Err(Error::Shutdown);
        };

        let first = match receiver.recv_timeout(self.config.poll_timeout()) {
            Ok(event) => event,
            Err(RecvTimeoutError::Timeout) => return Ok(()),
            // Unreachable while the backend holds its own sender.
            Err(RecvTimeoutError::Disconnected) => {
                return Err(Error::Disconnected("event channel closed".to_string()));
            }
        };

        let mut events = vec![first];
        events.extend(receiver.try_iter().take(MAX_EVENTS_PER_POLL - 1));

        for event in events {
            if let Event::Resize(width, height) = event {
                self.handle_resize(width, height);
            }
            queue.push(event);
        }
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        if self.lifecycle.begin_shutdown().is_none() {
            debug!("embedded backend already shut down");
            return Ok(());
        }
        // Dropping both ends disconnects every injector.
        self.channel = None;
        info!(frames = self.frames, "embedded backend shut down");
        Ok(())
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
