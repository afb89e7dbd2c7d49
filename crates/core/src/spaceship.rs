//! Player-controlled spaceship.

use std::rc::Rc;

use crate::sprite::{draw, Sprite};
use crate::task::{SpawnRequest, Step, Task, TaskContext};
use crate::types::Controls;

/// The two idle-animation frames of the ship.
#[derive(Debug, Clone)]
pub struct ShipFrames {
    pub first: Rc<Sprite>,
    pub second: Rc<Sprite>,
}

impl ShipFrames {
    pub fn new(first: Sprite, second: Sprite) -> Self {
        Self {
            first: Rc::new(first),
            second: Rc::new(second),
        }
    }

    /// Bounding box covering both frames.
    pub fn size(&self) -> (i32, i32) {
        (
            self.first.rows().max(self.second.rows()),
            self.first.cols().max(self.second.cols()),
        )
    }
}

/// Apply `delta` on one axis unless the sprite would leave `[1, max - 1)`.
pub fn clamp_axis(current: i32, delta: i32, extent: i32, max: i32) -> i32 {
    let candidate = current + delta;
    if candidate < 1 || candidate + extent >= max - 1 {
        current
    } else {
        candidate
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Start,
    ShowingFirst,
    ShowingSecond,
}

pub struct Spaceship {
    row: i32,
    col: i32,
    frames: ShipFrames,
    column_speed_multiplier: i32,
    phase: Phase,
}

impl Spaceship {
    pub fn new(row: i32, col: i32, frames: ShipFrames, column_speed_multiplier: i32) -> Self {
        Self {
            row,
            col,
            frames,
            column_speed_multiplier,
            phase: Phase::Start,
        }
    }

    pub fn position(&self) -> (i32, i32) {
        (self.row, self.col)
    }

    /// Position after applying `controls` on a `(max_row, max_col)` surface.
    pub fn next_position(&self, controls: Controls, max_row: i32, max_col: i32) -> (i32, i32) {
        let (rows, cols) = self.frames.size();
        let row = clamp_axis(self.row, controls.rows_direction, rows, max_row);
        let col = clamp_axis(
            self.col,
            controls.columns_direction * self.column_speed_multiplier,
            cols,
            max_col,
        );
        (row, col)
    }

    /// Cell just above the centre of the ship.
    pub fn nose(&self) -> (i32, i32) {
        let (_, cols) = self.frames.size();
        (self.row - 1, self.col + cols / 2)
    }
}

impl Task for Spaceship {
    fn name(&self) -> &'static str {
        "spaceship"
    }

    fn resume(&mut self, ctx: &mut TaskContext<'_>) -> Step {
        match self.phase {
            Phase::Start => {}
            Phase::ShowingFirst => {
                draw(&mut *ctx.canvas, self.row, self.col, &self.frames.first, true);
                draw(&mut *ctx.canvas, self.row, self.col, &self.frames.second, false);
                self.phase = Phase::ShowingSecond;
                return Step::Yield;
            }
            Phase::ShowingSecond => {
                let controls = ctx.canvas.read_controls();
                let (max_row, max_col) = ctx.canvas.size();
                let (row, col) = self.next_position(controls, max_row, max_col);

                draw(&mut *ctx.canvas, self.row, self.col, &self.frames.second, true);
                self.row = row;
                self.col = col;

                if controls.fire {
                    let (row, col) = self.nose();
                    ctx.request(SpawnRequest::Projectile {
                        row: row as f64,
                        col: col as f64,
                    });
                }
            }
        }

        draw(&mut *ctx.canvas, self.row, self.col, &self.frames.first, false);
        self.phase = Phase::ShowingFirst;
        Step::Yield
    }
}
