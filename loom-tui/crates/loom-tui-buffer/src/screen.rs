//! The mutable cell grid a backend owns and widgets draw into.

use smallvec::SmallVec;

use loom_tui_core::{Point, Rect, Style};

use crate::Cell;
use crate::diff::{self, ScreenDiff};

/// A local drawing frame: coordinates are relative to `origin` and writes
/// outside `clip` are discarded.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Viewport {
    origin: Point,
    clip: Rect,
}

/// A 2D grid of cells with local-frame drawing and dirty tracking.
///
/// # Coordinate System
///
/// Drawing operations take coordinates in the caller's local frame. The
/// containing widget tree pushes a viewport for each widget before it draws
/// (see [`Screen::push_viewport`]); nested viewports translate cumulatively
/// and clip to their intersection. With no viewport pushed, local and
/// absolute coordinates coincide.
///
/// # Dirty Tracking
///
/// The screen keeps a shadow copy of what the device last showed.
/// [`Screen::changes`] reports cells that differ from it and
/// [`Screen::commit`] records that the device caught up.
pub struct Screen {
    width: u16,
    height: u16,

    /// Logical content in row-major order.
    cells: Vec<Cell>,

    /// What the device shows after the last successful flush.
    synced: Vec<Cell>,

    /// Rewrite every cell on the next flush.
    full_redraw: bool,

    viewports: SmallVec<[Viewport; 8]>,
}

impl Screen {
    /// Creates a blank screen. The first flush rewrites every cell.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
            synced: vec![Cell::default(); size],
            full_redraw: true,
            viewports: SmallVec::new(),
        }
    }

    /// Returns the screen width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Returns the screen height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Returns the dimensions as (width, height).
    #[inline]
    pub const fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Returns a rectangle covering the entire screen.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32 {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Gets the cell at absolute (x, y).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x as i32, y as i32).map(|i| &self.cells[i])
    }

    /// Returns the glyphs of absolute row `y` as a string.
    pub fn row_text(&self, y: u16) -> Option<String> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        Some(
            self.cells[start..start + self.width as usize]
                .iter()
                .map(|c| c.character)
                .collect(),
        )
    }

    /// Returns true if `text` appears on any row.
    pub fn contains(&self, text: &str) -> bool {
        (0..self.height).any(|y| self.row_text(y).is_some_and(|row| row.contains(text)))
    }

    // ========================================================================
    // Local frames
    // ========================================================================

    fn current_viewport(&self) -> Viewport {
        self.viewports.last().copied().unwrap_or(Viewport {
            origin: Point::ZERO,
            clip: self.bounds(),
        })
    }

    /// Enters a local frame. `rect` is given in the current local frame.
    ///
    /// Subsequent draws are relative to `rect`'s top-left corner and are
    /// clipped to `rect` intersected with every enclosing frame.
    pub fn push_viewport(&mut self, rect: Rect) {
        let parent = self.current_viewport();
        let absolute = rect.translate(parent.origin.x, parent.origin.y);
        let clip = absolute.intersection(parent.clip).unwrap_or(Rect::ZERO);
        self.viewports.push(Viewport {
            origin: absolute.position(),
            clip,
        });
    }

    /// Leaves the innermost local frame.
    ///
    /// Returns the frame's absolute clip rectangle, or `None` if no frame
    /// was active.
    pub fn pop_viewport(&mut self) -> Option<Rect> {
        self.viewports.pop().map(|v| v.clip)
    }

    /// Returns how many local frames are active.
    #[inline]
    pub fn viewport_depth(&self) -> usize {
        self.viewports.len()
    }

    /// Returns the absolute origin of the current local frame.
    pub fn origin(&self) -> Point {
        self.current_viewport().origin
    }

    // ========================================================================
    // Drawing primitives
    // ========================================================================

    /// Writes one glyph at local (x, y).
    ///
    /// Returns `false` if the position is clipped or off screen.
    pub fn put_char_at(&mut self, x: i32, y: i32, glyph: char, style: Style) -> bool {
        let viewport = self.current_viewport();
        let absolute = viewport.origin.offset(x, y);
        if !viewport.clip.contains_point(absolute) {
            return false;
        }
        match self.index(absolute.x, absolute.y) {
            Some(i) => {
                let cell = &mut self.cells[i];
                cell.character = glyph;
                cell.apply_style(style);
                true
            }
            None => false,
        }
    }

    /// Writes `text` starting at local (x, y), one glyph per column.
    ///
    /// Returns the number of columns the text spans, including clipped ones.
    pub fn put_string_at(&mut self, x: i32, y: i32, text: &str, style: Style) -> usize {
        let mut columns = 0usize;
        for (i, glyph) in text.chars().enumerate() {
            self.put_char_at(x.saturating_add(i as i32), y, glyph, style);
            columns = i + 1;
        }
        columns
    }

    /// Draws `len` copies of `glyph` rightwards from local (x, y).
    pub fn h_line(&mut self, x: i32, y: i32, len: u16, glyph: char, style: Style) {
        for i in 0..len as i32 {
            self.put_char_at(x.saturating_add(i), y, glyph, style);
        }
    }

    /// Draws `len` copies of `glyph` downwards from local (x, y).
    pub fn v_line(&mut self, x: i32, y: i32, len: u16, glyph: char, style: Style) {
        for i in 0..len as i32 {
            self.put_char_at(x, y.saturating_add(i), glyph, style);
        }
    }

    /// Resets every cell to a blank default cell.
    ///
    /// Ignores the current local frame.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Fills every cell with a blank in `style`.
    pub fn clear_with(&mut self, style: Style) {
        self.cells.fill(Cell::with_style(' ', style));
    }

    // ========================================================================
    // Dirty tracking
    // ========================================================================

    /// Returns true if the next flush has anything to write.
    pub fn is_dirty(&self) -> bool {
        self.full_redraw || self.cells != self.synced
    }

    /// Computes the cells that must be written to bring the device up to date.
    pub fn changes(&self) -> ScreenDiff {
        if self.full_redraw {
            diff::compute_full(&self.cells, self.width)
        } else {
            diff::compute(&self.synced, &self.cells, self.width)
        }
    }

    /// Records that the device now shows the logical content.
    pub fn commit(&mut self) {
        self.synced.copy_from_slice(&self.cells);
        self.full_redraw = false;
    }

    /// Forces the next flush to rewrite every cell.
    pub fn invalidate(&mut self) {
        self.full_redraw = true;
    }

    /// Resizes the grid, keeping the overlapping content.
    ///
    /// Active local frames are discarded and the next flush rewrites
    /// every cell.
    pub fn resize(&mut self, width: u16, height: u16) {
        if width == self.width && height == self.height {
            return;
        }

        let size = width as usize * height as usize;
        let mut cells = vec![Cell::default(); size];
        let copy_width = self.width.min(width) as usize;
        for y in 0..self.height.min(height) as usize {
            let src = y * self.width as usize;
            let dst = y * width as usize;
            cells[dst..dst + copy_width].copy_from_slice(&self.cells[src..src + copy_width]);
        }

        self.cells = cells;
        self.synced = vec![Cell::default(); size];
        self.width = width;
        self.height = height;
        self.viewports.clear();
        self.full_redraw = true;
    }
}

impl std::fmt::Debug for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Screen")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("dirty", &self.is_dirty())
            .field("viewports", &self.viewports.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loom_tui_core::Color;
    use pretty_assertions::assert_eq;

    fn clean(width: u16, height: u16) -> Screen {
        let mut screen = Screen::new(width, height);
        screen.commit();
        screen
    }

    #[test]
    fn test_new_screen_needs_full_redraw() {
        let screen = Screen::new(4, 2);
        assert!(screen.is_dirty());
        assert_eq!(screen.changes().changed_count, 8);
    }

    #[test]
    fn test_commit_clears_dirty_state() {
        let mut screen = clean(4, 2);
        assert!(!screen.is_dirty());
        assert!(screen.changes().is_empty());

        screen.put_char_at(1, 1, 'x', Style::default());
        assert!(screen.is_dirty());
        assert_eq!(screen.changes().changed_count, 1);

        screen.commit();
        assert!(!screen.is_dirty());
    }

    #[test]
    fn test_rewriting_same_content_is_not_dirty() {
        let mut screen = clean(4, 1);
        screen.put_char_at(0, 0, ' ', Style::default());
        assert!(!screen.is_dirty());
    }

    #[test]
    fn test_put_string_and_lines() {
        let mut screen = clean(6, 3);
        let style = Style::with_colors(Color::BLACK, Color::WHITE);

        assert_eq!(screen.put_string_at(1, 0, "Edit", style), 4);
        screen.h_line(0, 1, 6, '-', style);
        screen.v_line(5, 0, 3, '|', style);

        assert_eq!(screen.row_text(0).unwrap(), " Edit|");
        assert_eq!(screen.row_text(1).unwrap(), "-----|");
        assert_eq!(screen.row_text(2).unwrap(), "     |");
        assert_eq!(screen.get(1, 0).unwrap().bg, Color::WHITE);
    }

    #[test]
    fn test_viewport_translates_and_clips() {
        let mut screen = clean(10, 3);
        screen.push_viewport(Rect::new(2, 1, 4, 1));
        assert_eq!(screen.origin(), Point::new(2, 1));

        assert!(screen.put_char_at(0, 0, 'a', Style::default()));
        assert!(!screen.put_char_at(-1, 0, 'b', Style::default()));
        assert!(!screen.put_char_at(4, 0, 'c', Style::default()));
        assert!(!screen.put_char_at(0, 1, 'd', Style::default()));
        screen.pop_viewport();

        assert_eq!(screen.row_text(1).unwrap(), "  a       ");
        assert!(!screen.contains("b"));
    }

    #[test]
    fn test_nested_viewports_accumulate() {
        let mut screen = clean(10, 4);
        screen.push_viewport(Rect::new(1, 1, 8, 3));
        screen.push_viewport(Rect::new(2, 1, 20, 1));
        screen.put_string_at(0, 0, "0123456789", Style::default());
        assert_eq!(screen.pop_viewport(), Some(Rect::new(3, 2, 6, 1)));
        screen.pop_viewport();

        assert_eq!(screen.row_text(2).unwrap(), "   012345 ");
        assert_eq!(screen.viewport_depth(), 0);
    }

    #[test]
    fn test_resize_keeps_content_and_forces_redraw() {
        let mut screen = clean(4, 2);
        screen.put_string_at(0, 0, "abcd", Style::default());
        screen.commit();

        screen.resize(2, 3);
        assert_eq!(screen.size(), (2, 3));
        assert_eq!(screen.row_text(0).unwrap(), "ab");
        assert!(screen.is_dirty());
        assert_eq!(screen.changes().changed_count, 6);
    }

    #[test]
    fn test_invalidate() {
        let mut screen = clean(3, 1);
        screen.invalidate();
        assert!(screen.is_dirty());
        assert_eq!(screen.changes().runs.len(), 1);
    }
}
