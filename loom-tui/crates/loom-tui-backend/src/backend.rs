//! The backend contract shared by every display/input variant.

use loom_tui_buffer::Screen;
use loom_tui_core::Result;
use loom_tui_input::Event;

use crate::SessionInfo;

/// Upper bound on events one `get_events` call appends. Anything beyond
/// it stays queued for the next call.
pub const MAX_EVENTS_PER_POLL: usize = 256;

/// A source of input events and a sink for screen updates.
///
/// Implementations exclusively own their [`Screen`] and [`SessionInfo`];
/// callers only borrow them. Every method is driven from the single UI
/// thread.
///
/// # Lifecycle
///
/// A backend is usable from construction until [`Backend::shutdown`] or
/// until a transport failure. After either, [`Backend::flush_screen`] and
/// [`Backend::get_events`] return an error
/// ([`Error::Shutdown`](loom_tui_core::Error::Shutdown) after shutdown).
pub trait Backend {
    /// Writes every cell that changed since the last flush to the device.
    ///
    /// Calling it with nothing changed writes nothing. On a transport
    /// failure the screen is not marked clean, the error is returned, and
    /// the backend stays unusable.
    fn flush_screen(&mut self) -> Result<()>;

    /// Appends the events observed since the last call to `queue`, oldest
    /// first. Existing entries in `queue` are left alone.
    ///
    /// Returns within the configured poll timeout. Resize events also
    /// resize the screen and update the session's window size before they
    /// are appended.
    fn get_events(&mut self, queue: &mut Vec<Event>) -> Result<()>;

    /// Releases the device. Further flushes and event reads fail.
    ///
    /// A second call is a no-op.
    fn shutdown(&mut self) -> Result<()>;

    /// Borrows the screen.
    fn screen(&self) -> &Screen;

    /// Borrows the screen for drawing; changes show up on the next flush.
    fn screen_mut(&mut self) -> &mut Screen;

    /// Borrows the session description.
    fn session_info(&self) -> &SessionInfo;

    /// Returns true once [`Backend::shutdown`] has been called.
    fn is_shut_down(&self) -> bool;
}
