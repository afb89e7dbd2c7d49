//! Projectile flight.

use crate::canvas::Canvas;
use crate::task::{Step, Task, TaskContext};
use crate::types::Attr;

const FLASH: char = '*';
const MARKER: char = 'O';

/// Positions this close to a bound count as on it.
const EDGE_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Flash,
    Marker,
    Launch,
    Flying,
}

/// A shot travelling in a straight line until it leaves the surface.
#[derive(Debug, Clone)]
pub struct Fire {
    start_row: f64,
    start_col: f64,
    rows_speed: f64,
    columns_speed: f64,
    /// Motion steps taken so far.
    steps: u32,
    phase: Phase,
}

impl Fire {
    pub fn new(row: f64, col: f64, rows_speed: f64, columns_speed: f64) -> Self {
        Self {
            start_row: row,
            start_col: col,
            rows_speed,
            columns_speed,
            steps: 0,
            phase: Phase::Flash,
        }
    }

    /// Current (unrounded) position.
    pub fn position(&self) -> (f64, f64) {
        let k = self.steps as f64;
        (
            self.start_row + self.rows_speed * k,
            self.start_col + self.columns_speed * k,
        )
    }

    fn cell(&self) -> (i32, i32) {
        let (row, col) = self.position();
        (row.round() as i32, col.round() as i32)
    }

    fn symbol(&self) -> char {
        if self.columns_speed != 0.0 {
            '-'
        } else {
            '|'
        }
    }

    /// Advance one motion step and draw the trail, or finish once outside.
    fn advance(&mut self, ctx: &mut TaskContext<'_>) -> Step {
        self.steps += 1;
        let (row, col) = self.position();
        let (max_row, max_col) = ctx.canvas.size();
        if !strictly_between(row, max_row - 1) || !strictly_between(col, max_col - 1) {
            return Step::Done;
        }

        let (r, c) = self.cell();
        put(&mut *ctx.canvas, r, c, self.symbol());
        self.phase = Phase::Flying;
        Step::Yield
    }
}

/// `0 < value < upper`, with values within [`EDGE_EPSILON`] of a bound outside.
fn strictly_between(value: f64, upper: i32) -> bool {
    EDGE_EPSILON < value && value < upper as f64 - EDGE_EPSILON
}

/// Write inside the border only; the outermost rows and columns are never touched.
fn put(canvas: &mut dyn Canvas, row: i32, col: i32, ch: char) {
    let (max_row, max_col) = canvas.size();
    if row < 1 || col < 1 || row >= max_row - 1 || col >= max_col - 1 {
        return;
    }
    canvas.put_char(row, col, ch, Attr::Normal);
}

impl Task for Fire {
    fn name(&self) -> &'static str {
        "fire"
    }

    fn resume(&mut self, ctx: &mut TaskContext<'_>) -> Step {
        let (r, c) = self.cell();
        match self.phase {
            Phase::Flash => {
                put(&mut *ctx.canvas, r, c, FLASH);
                self.phase = Phase::Marker;
                Step::Yield
            }
            Phase::Marker => {
                put(&mut *ctx.canvas, r, c, MARKER);
                self.phase = Phase::Launch;
                Step::Yield
            }
            Phase::Launch => {
                put(&mut *ctx.canvas, r, c, ' ');
                ctx.canvas.beep();
                self.advance(ctx)
            }
            Phase::Flying => {
                put(&mut *ctx.canvas, r, c, ' ');
                self.advance(ctx)
            }
        }
    }
}
