//! Change detection between the logical grid and what the device shows.
//!
//! Backends only write the cells reported here, so an unchanged screen
//! produces an empty diff and a flush writes nothing.

use crate::Cell;

/// A run of consecutive changed cells on the same row.
#[derive(Clone, Debug, PartialEq)]
pub struct ChangeRun {
    /// Starting column of the run.
    pub x: u16,
    /// Row of the run.
    pub y: u16,
    /// Consecutive cells in this run.
    pub cells: Vec<Cell>,
}

impl ChangeRun {
    /// Creates a run holding a single cell.
    #[inline]
    pub fn with_cell(x: u16, y: u16, cell: Cell) -> Self {
        Self {
            x,
            y,
            cells: vec![cell],
        }
    }

    /// Returns the length of the run in cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the run is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the column one past the end of the run.
    #[inline]
    pub fn end_x(&self) -> u16 {
        self.x.saturating_add(self.cells.len() as u16)
    }
}

/// All changes needed to bring the device up to date.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScreenDiff {
    /// Runs in row-major order.
    pub runs: Vec<ChangeRun>,
    /// Total number of changed cells.
    pub changed_count: usize,
}

impl ScreenDiff {
    /// Returns true if nothing changed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Iterates over `(x, y, cell)` for every changed cell.
    pub fn iter_cells(&self) -> impl Iterator<Item = (u16, u16, &Cell)> + '_ {
        self.runs.iter().flat_map(|run| {
            run.cells
                .iter()
                .enumerate()
                .map(move |(i, cell)| (run.x + i as u16, run.y, cell))
        })
    }
}

/// Computes the runs of cells in `next` that differ from `current`.
///
/// Both slices are row-major grids of `width` columns.
pub fn compute(current: &[Cell], next: &[Cell], width: u16) -> ScreenDiff {
    debug_assert_eq!(current.len(), next.len(), "grids must have the same size");

    let mut diff = ScreenDiff::default();
    if width == 0 {
        return diff;
    }

    for (y, (old_row, new_row)) in current
        .chunks(width as usize)
        .zip(next.chunks(width as usize))
        .enumerate()
    {
        let mut run: Option<ChangeRun> = None;
        for (x, (old, new)) in old_row.iter().zip(new_row).enumerate() {
            if old == new {
                if let Some(done) = run.take() {
                    diff.runs.push(done);
                }
                continue;
            }
            diff.changed_count += 1;
            match run.as_mut() {
                Some(open) => open.cells.push(*new),
                None => run = Some(ChangeRun::with_cell(x as u16, y as u16, *new)),
            }
        }
        if let Some(done) = run {
            diff.runs.push(done);
        }
    }

    diff
}

/// Produces a diff that rewrites every cell, one run per row.
pub fn compute_full(cells: &[Cell], width: u16) -> ScreenDiff {
    let mut diff = ScreenDiff::default();
    if width == 0 {
        return diff;
    }
    for (y, row) in cells.chunks(width as usize).enumerate() {
        diff.changed_count += row.len();
        diff.runs.push(ChangeRun {
            x: 0,
            y: y as u16,
            cells: row.to_vec(),
        });
    }
    diff
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn grid(text: &str) -> Vec<Cell> {
        text.chars().map(Cell::new).collect()
    }

    #[test]
    fn test_empty_diff() {
        let a = grid("abcdef");
        let diff = compute(&a, &a, 3);
        assert!(diff.is_empty());
        assert_eq!(diff.changed_count, 0);
    }

    #[test]
    fn test_runs_split_on_unchanged_cells() {
        let current = grid("abcdef");
        let next = grid("xbyzef");
        let diff = compute(&current, &next, 3);

        assert_eq!(diff.changed_count, 3);
        assert_eq!(diff.runs.len(), 3);
        assert_eq!((diff.runs[0].x, diff.runs[0].y, diff.runs[0].len()), (0, 0, 1));
        assert_eq!((diff.runs[1].x, diff.runs[1].y, diff.runs[1].len()), (2, 0, 1));
        assert_eq!((diff.runs[2].x, diff.runs[2].y, diff.runs[2].len()), (0, 1, 1));
    }

    #[test]
    fn test_consecutive_changes_form_one_run() {
        let current = grid("aaaa");
        let next = grid("abba");
        let diff = compute(&current, &next, 4);
        assert_eq!(diff.runs.len(), 1);
        assert_eq!(diff.runs[0].x, 1);
        assert_eq!(diff.runs[0].end_x(), 3);
    }

    #[test]
    fn test_full_diff_covers_every_row() {
        let cells = grid("abcdef");
        let diff = compute_full(&cells, 2);
        assert_eq!(diff.runs.len(), 3);
        assert_eq!(diff.changed_count, 6);

        let positions: Vec<(u16, u16, char)> =
            diff.iter_cells().map(|(x, y, c)| (x, y, c.character)).collect();
        assert_eq!(positions[3], (1, 1, 'd'));
    }
}
