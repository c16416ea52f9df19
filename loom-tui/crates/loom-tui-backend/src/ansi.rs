//! ANSI encoding of screen changes and terminal modes.
//!
//! Shared by the backends that talk to a real or remote terminal. Every
//! function writes to any [`Write`], so a socket or a `Vec<u8>` works as
//! well as stdout.

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{
        DisableBracketedPaste, DisableFocusChange, DisableMouseCapture, EnableBracketedPaste,
        EnableFocusChange, EnableMouseCapture,
    },
    queue,
    style::{
        Attribute, Color as CrosstermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
    terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use loom_tui_buffer::{Cell, ScreenDiff};
use loom_tui_core::{Color, TextAttributes};

use crate::BackendConfig;

/// DEC synchronized output, mode 2026.
pub const BEGIN_SYNC: &[u8] = b"\x1b[?2026h";
/// Ends a synchronized output block.
pub const END_SYNC: &[u8] = b"\x1b[?2026l";

/// Converts a color; transparent maps to the terminal default.
pub fn to_crossterm_color(color: Color) -> CrosstermColor {
    if color.is_transparent() {
        CrosstermColor::Reset
    } else {
        let (r, g, b) = color.to_rgb_u8();
        CrosstermColor::Rgb { r, g, b }
    }
}

fn write_attributes<W: Write>(out: &mut W, attrs: TextAttributes) -> io::Result<()> {
    const MAPPING: [(TextAttributes, Attribute); 6] = [
        (TextAttributes::BOLD, Attribute::Bold),
        (TextAttributes::DIM, Attribute::Dim),
        (TextAttributes::ITALIC, Attribute::Italic),
        (TextAttributes::UNDERLINE, Attribute::Underlined),
        (TextAttributes::BLINK, Attribute::SlowBlink),
        (TextAttributes::REVERSE, Attribute::Reverse),
    ];
    for (flag, attribute) in MAPPING {
        if attrs.contains(flag) {
            queue!(out, SetAttribute(attribute))?;
        }
    }
    Ok(())
}

fn write_style<W: Write>(out: &mut W, cell: &Cell) -> io::Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Reset),
        SetForegroundColor(to_crossterm_color(cell.fg)),
        SetBackgroundColor(to_crossterm_color(cell.bg)),
    )?;
    write_attributes(out, cell.attributes)
}

/// Writes `diff` as cursor moves, style changes and glyphs, then flushes.
///
/// Style sequences are emitted only when the style differs from the
/// previous cell. Returns the number of cells written; an empty diff
/// writes nothing at all.
pub fn write_changes<W: Write>(
    out: &mut W,
    diff: &ScreenDiff,
    sync_output: bool,
) -> io::Result<usize> {
    if diff.is_empty() {
        return Ok(0);
    }

    if sync_output {
        out.write_all(BEGIN_SYNC)?;
    }

    let mut current: Option<Cell> = None;
    let mut written = 0;

    for run in &diff.runs {
        queue!(out, MoveTo(run.x, run.y))?;
        for cell in &run.cells {
            if !current.is_some_and(|c| c.same_style(cell)) {
                write_style(out, cell)?;
                current = Some(*cell);
            }
            queue!(out, Print(cell.character))?;
            written += 1;
        }
    }

    queue!(out, ResetColor, SetAttribute(Attribute::Reset))?;

    if sync_output {
        out.write_all(END_SYNC)?;
    }
    out.flush()?;

    Ok(written)
}

/// Enters the modes `config` asks for and clears the display.
pub fn write_setup<W: Write>(out: &mut W, config: &BackendConfig) -> io::Result<()> {
    if config.alternate_screen {
        queue!(out, EnterAlternateScreen)?;
    }
    if config.mouse_capture {
        queue!(out, EnableMouseCapture)?;
    }
    if config.bracketed_paste {
        queue!(out, EnableBracketedPaste)?;
    }
    if config.focus_events {
        queue!(out, EnableFocusChange)?;
    }
    queue!(out, Hide, Clear(ClearType::All))?;
    out.flush()
}

/// Leaves the modes entered by [`write_setup`] in reverse order.
pub fn write_restore<W: Write>(out: &mut W, config: &BackendConfig) -> io::Result<()> {
    queue!(out, ResetColor, SetAttribute(Attribute::Reset))?;
    if config.focus_events {
        queue!(out, DisableFocusChange)?;
    }
    if config.bracketed_paste {
        queue!(out, DisableBracketedPaste)?;
    }
    if config.mouse_capture {
        queue!(out, DisableMouseCapture)?;
    }
    queue!(out, Show)?;
    if config.alternate_screen {
        queue!(out, LeaveAlternateScreen)?;
    }
    out.flush()
}
