//! Seeds the initial task set and builds projectiles on request.

use std::time::Duration;

use crate::blink::Blink;
use crate::canvas::Canvas;
use crate::fire::Fire;
use crate::rng::RandomSource;
use crate::scheduler::Scheduler;
use crate::spaceship::{ShipFrames, Spaceship};
use crate::task::{Spawn, SpawnRequest, Task};
use crate::types::{AnimationConfig, STAR_MAX_DELAY_TENTHS, STAR_SYMBOLS};

pub struct Spawner<R: RandomSource> {
    config: AnimationConfig,
    rng: R,
}

impl<R: RandomSource> Spawner<R> {
    pub fn new(config: AnimationConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// A star at a random position inside the border, with a random glyph and delay.
    pub fn star(&mut self, max_row: i32, max_col: i32) -> Blink {
        let row = self.rng.next_between(2, max_row - 2);
        let col = self.rng.next_between(2, max_col - 2);
        let symbol = self.rng.choose(&STAR_SYMBOLS).unwrap_or('*');
        let tenths = 1 + self.rng.next_range(STAR_MAX_DELAY_TENTHS) as u64;
        Blink::new(
            row,
            col,
            symbol,
            Duration::from_millis(tenths * 100),
            self.config.tic,
        )
    }

    /// Register the stars and the spaceship (centred on the surface).
    pub fn seed(&mut self, scheduler: &mut Scheduler, canvas: &dyn Canvas, frames: ShipFrames) {
        let (max_row, max_col) = canvas.size();
        for _ in 0..self.config.star_count {
            let star = self.star(max_row, max_col);
            scheduler.add(Box::new(star));
        }

        let ship = Spaceship::new(
            max_row / 2,
            max_col / 2,
            frames,
            self.config.column_speed_multiplier,
        );
        scheduler.add(Box::new(ship));

        log::info!(
            "seeded {} stars and a spaceship on a {}x{} surface",
            self.config.star_count,
            max_row,
            max_col
        );
    }
}

impl<R: RandomSource> Spawn for Spawner<R> {
    fn spawn(&mut self, request: SpawnRequest) -> Box<dyn Task> {
        match request {
            SpawnRequest::Projectile { row, col } => Box::new(Fire::new(
                row,
                col,
                self.config.projectile_row_speed,
                self.config.projectile_column_speed,
            )),
        }
    }
}
