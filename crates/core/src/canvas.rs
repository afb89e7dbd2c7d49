//! Drawing surface seam between the tasks and the terminal.
//!
//! Tasks only ever see a `&mut dyn Canvas`. The terminal crate provides the
//! real implementation; [`MemoryCanvas`] keeps everything in memory for
//! headless runs, tests and benchmarks.

use std::collections::VecDeque;
use std::io;

use crate::types::{Attr, Controls};

/// Capabilities the animation needs from a character surface.
pub trait Canvas {
    /// Surface size as `(rows, columns)`.
    fn size(&self) -> (i32, i32);

    /// Write one character. Out-of-bounds writes are ignored.
    fn put_char(&mut self, row: i32, col: i32, ch: char, attr: Attr);

    /// Present everything written since the previous refresh.
    fn refresh(&mut self) -> io::Result<()>;

    /// Non-blocking read of the controls pressed since the last read.
    fn read_controls(&mut self) -> Controls;

    /// Audible alert. Fire-and-forget.
    fn beep(&mut self);

    /// True once an external interrupt asked the animation to stop.
    fn interrupted(&self) -> bool {
        false
    }
}

/// A styled character cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub attr: Attr,
}

impl Default for Glyph {
    fn default() -> Self {
        Self {
            ch: ' ',
            attr: Attr::Normal,
        }
    }
}

/// In-memory canvas with scripted controls.
#[derive(Debug, Clone)]
pub struct MemoryCanvas {
    rows: i32,
    cols: i32,
    cells: Vec<Glyph>,
    controls: VecDeque<Controls>,
    refreshes: u64,
    beeps: u64,
    interrupt_after: Option<u64>,
}

impl MemoryCanvas {
    pub fn new(rows: i32, cols: i32) -> Self {
        let rows = rows.max(0);
        let cols = cols.max(0);
        Self {
            rows,
            cols,
            cells: vec![Glyph::default(); (rows as usize) * (cols as usize)],
            controls: VecDeque::new(),
            refreshes: 0,
            beeps: 0,
            interrupt_after: None,
        }
    }

    #[inline(always)]
    fn idx(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row >= self.rows || col >= self.cols {
            return None;
        }
        Some((row as usize) * (self.cols as usize) + (col as usize))
    }

    pub fn get(&self, row: i32, col: i32) -> Option<Glyph> {
        self.idx(row, col).map(|i| self.cells[i])
    }

    pub fn char_at(&self, row: i32, col: i32) -> Option<char> {
        self.get(row, col).map(|g| g.ch)
    }

    pub fn cells(&self) -> &[Glyph] {
        &self.cells
    }

    /// Queue controls returned by the next `read_controls` calls, one per call.
    pub fn push_controls(&mut self, controls: Controls) {
        self.controls.push_back(controls);
    }

    /// Report an interrupt once `refreshes` refreshes have happened.
    pub fn interrupt_after(&mut self, refreshes: u64) {
        self.interrupt_after = Some(refreshes);
    }

    pub fn refresh_count(&self) -> u64 {
        self.refreshes
    }

    pub fn beep_count(&self) -> u64 {
        self.beeps
    }

    /// Row `row` as a string, for assertions.
    pub fn row_text(&self, row: i32) -> String {
        (0..self.cols)
            .filter_map(|col| self.char_at(row, col))
            .collect()
    }

    /// Number of non-blank cells.
    pub fn inked(&self) -> usize {
        self.cells.iter().filter(|g| g.ch != ' ').count()
    }
}

impl Canvas for MemoryCanvas {
    fn size(&self) -> (i32, i32) {
        (self.rows, self.cols)
    }

    fn put_char(&mut self, row: i32, col: i32, ch: char, attr: Attr) {
        if let Some(i) = self.idx(row, col) {
            self.cells[i] = Glyph { ch, attr };
        }
    }

    fn refresh(&mut self) -> io::Result<()> {
        self.refreshes += 1;
        Ok(())
    }

    fn read_controls(&mut self) -> Controls {
        self.controls.pop_front().unwrap_or_default()
    }

    fn beep(&mut self) {
        self.beeps += 1;
    }

    fn interrupted(&self) -> bool {
        self.interrupt_after
            .map(|n| self.refreshes >= n)
            .unwrap_or(false)
    }
}
