//! Twinkling star.

use std::time::Duration;

use crate::task::{Step, Task, TaskContext};
use crate::types::{ticks_for, Attr, STAR_BOLD_MS, STAR_DIM_MS, STAR_NORMAL_MS};

const PHASES: [(Attr, u64); 4] = [
    (Attr::Dim, STAR_DIM_MS),
    (Attr::Normal, STAR_NORMAL_MS),
    (Attr::Bold, STAR_BOLD_MS),
    (Attr::Normal, STAR_NORMAL_MS),
];

/// A star cycling dim → normal → bold → normal forever.
#[derive(Debug, Clone)]
pub struct Blink {
    row: i32,
    col: i32,
    symbol: char,
    startup_tics: u32,
    phase_tics: [u32; 4],
    phase: usize,
    started: bool,
}

impl Blink {
    pub fn new(row: i32, col: i32, symbol: char, startup_delay: Duration, tic: Duration) -> Self {
        let mut phase_tics = [0u32; 4];
        for (slot, (_, ms)) in phase_tics.iter_mut().zip(PHASES) {
            *slot = ticks_for(Duration::from_millis(ms), tic);
        }
        Self {
            row,
            col,
            symbol,
            startup_tics: ticks_for(startup_delay, tic),
            phase_tics,
            phase: 0,
            started: false,
        }
    }

    pub fn position(&self) -> (i32, i32) {
        (self.row, self.col)
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn startup_tics(&self) -> u32 {
        self.startup_tics
    }
}

impl Task for Blink {
    fn name(&self) -> &'static str {
        "blink"
    }

    fn resume(&mut self, ctx: &mut TaskContext<'_>) -> Step {
        if !self.started {
            self.started = true;
            if self.startup_tics > 0 {
                return Step::Sleep(self.startup_tics);
            }
        }

        let (attr, _) = PHASES[self.phase];
        ctx.canvas.put_char(self.row, self.col, self.symbol, attr);
        let wait = self.phase_tics[self.phase];
        self.phase = (self.phase + 1) % PHASES.len();
        Step::Sleep(wait)
    }
}
