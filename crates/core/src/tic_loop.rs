//! Fixed-rate driver: one scheduler tic, sleep out the rest, one refresh.
//!
//! The sleep is best effort. A tic that overruns its budget is followed
//! immediately by the next one; there is no catch-up and no frame dropping.

use std::io;
use std::time::{Duration, Instant};

use crate::canvas::Canvas;
use crate::scheduler::Scheduler;
use crate::task::Spawn;

/// Why [`TicLoop::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// No live tasks remain.
    Drained,
    /// The canvas reported an external interrupt.
    Interrupted,
    /// The configured tic limit was reached.
    TicLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopSummary {
    pub tics: u64,
    pub overruns: u64,
    pub reason: StopReason,
}

#[derive(Debug, Clone)]
pub struct TicLoop {
    tic: Duration,
    max_tics: Option<u64>,
}

impl TicLoop {
    pub fn new(tic: Duration) -> Self {
        Self {
            tic,
            max_tics: None,
        }
    }

    /// Stop after `max_tics` tics (headless runs and benchmarks).
    pub fn with_max_tics(mut self, max_tics: u64) -> Self {
        self.max_tics = Some(max_tics);
        self
    }

    pub fn tic(&self) -> Duration {
        self.tic
    }

    pub fn run(
        &self,
        scheduler: &mut Scheduler,
        canvas: &mut dyn Canvas,
        spawner: &mut dyn Spawn,
    ) -> io::Result<LoopSummary> {
        let mut tics = 0u64;
        let mut overruns = 0u64;

        let reason = loop {
            if scheduler.is_empty() {
                break StopReason::Drained;
            }
            if canvas.interrupted() {
                break StopReason::Interrupted;
            }
            if self.max_tics.is_some_and(|max| tics >= max) {
                break StopReason::TicLimit;
            }

            let started = Instant::now();
            scheduler.tick(&mut *canvas, spawner);

            let elapsed = started.elapsed();
            match self.tic.checked_sub(elapsed) {
                Some(rest) if !rest.is_zero() => std::thread::sleep(rest),
                Some(_) => {}
                None => {
                    overruns += 1;
                    log::debug!("tic {} overran by {:?}", tics, elapsed - self.tic);
                }
            }

            canvas.refresh()?;
            tics += 1;
        };

        log::info!("tic loop stopped after {} tics: {:?}", tics, reason);
        Ok(LoopSummary {
            tics,
            overruns,
            reason,
        })
    }
}
