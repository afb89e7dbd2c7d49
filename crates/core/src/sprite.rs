//! Multi-line ASCII sprites: bounding boxes and draw/erase onto a canvas.

use crate::canvas::Canvas;
use crate::types::Attr;

/// Bounding box of `text` as `(rows, columns)`.
///
/// Rows is the line count (blank lines included, a single trailing newline
/// does not start a new line); columns is the longest line in chars.
pub fn measure(text: &str) -> (i32, i32) {
    let mut rows = 0i32;
    let mut cols = 0i32;
    for line in text.lines() {
        rows += 1;
        cols = cols.max(line.chars().count() as i32);
    }
    (rows, cols)
}

/// An immutable frame with its precomputed bounding box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    lines: Vec<Vec<char>>,
    rows: i32,
    cols: i32,
}

impl Sprite {
    pub fn new(text: &str) -> Self {
        let (rows, cols) = measure(text);
        Self {
            lines: text.lines().map(|l| l.chars().collect()).collect(),
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn size(&self) -> (i32, i32) {
        (self.rows, self.cols)
    }

    /// Non-blank cells as `(row offset, column offset, char)`.
    pub fn ink(&self) -> impl Iterator<Item = (i32, i32, char)> + '_ {
        self.lines.iter().enumerate().flat_map(|(dr, line)| {
            line.iter()
                .enumerate()
                .filter(|(_, ch)| **ch != ' ')
                .map(move |(dc, ch)| (dr as i32, dc as i32, *ch))
        })
    }
}

/// Draw `sprite` with its top-left corner at `(row, col)`.
///
/// With `erase` set, every non-blank cell is overwritten by a space instead.
/// Blank cells of the sprite are never written. Cells outside
/// `0..rows-1` x `0..cols-1` of the canvas are skipped.
pub fn draw(canvas: &mut dyn Canvas, row: i32, col: i32, sprite: &Sprite, erase: bool) {
    let (max_row, max_col) = canvas.size();
    for (dr, dc, ch) in sprite.ink() {
        let r = row + dr;
        let c = col + dc;
        if r < 0 || c < 0 || r >= max_row - 1 || c >= max_col - 1 {
            continue;
        }
        let ch = if erase { ' ' } else { ch };
        canvas.put_char(r, c, ch, Attr::Normal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::MemoryCanvas;

    #[test]
    fn measure_counts_lines_and_widest_line() {
        assert_eq!(measure("  .\n / \\\n|   |"), (3, 5));
        assert_eq!(measure("ab\n"), (1, 2));
        assert_eq!(measure("ab\n\n"), (2, 2));
        assert_eq!(measure(""), (0, 0));
    }

    #[test]
    fn draw_skips_blank_cells() {
        let mut canvas = MemoryCanvas::new(5, 5);
        canvas.put_char(0, 1, '#', Attr::Normal);
        draw(&mut canvas, 0, 0, &Sprite::new("a b"), false);
        assert_eq!(canvas.row_text(0), "a#b  ");
    }

    #[test]
    fn draw_clamps_to_drawable_area() {
        let mut canvas = MemoryCanvas::new(4, 4);
        draw(&mut canvas, 2, 2, &Sprite::new("xy\nzw"), false);
        // Only (2, 2) is inside rows 0..3 and columns 0..3.
        assert_eq!(canvas.inked(), 1);
        assert_eq!(canvas.char_at(2, 2), Some('x'));

        draw(&mut canvas, -1, -1, &Sprite::new("xy\nzw"), false);
        assert_eq!(canvas.char_at(0, 0), Some('w'));
    }

    #[test]
    fn erase_writes_spaces_over_ink() {
        let mut canvas = MemoryCanvas::new(5, 5);
        let sprite = Sprite::new("/\\\n||");
        draw(&mut canvas, 1, 1, &sprite, false);
        assert_eq!(canvas.inked(), 4);
        draw(&mut canvas, 1, 1, &sprite, true);
        assert_eq!(canvas.inked(), 0);
    }
}
