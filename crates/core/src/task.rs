//! Resumable animation tasks.
//!
//! A task is a state machine. The scheduler calls [`Task::resume`] once per
//! tic; the task renders one visible step and answers with a [`Step`] saying
//! when it wants to run again.

use crate::canvas::Canvas;

/// What a task wants after a resumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Resume on the next tic.
    Yield,
    /// Resume on the `k`-th next tic. `Sleep(0)` and `Sleep(1)` equal `Yield`.
    Sleep(u32),
    /// Remove the task.
    Done,
}

/// Something a task asks the spawner to create.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnRequest {
    Projectile { row: f64, col: f64 },
}

/// Per-resumption access to the surface and the spawn queue.
pub struct TaskContext<'a> {
    pub canvas: &'a mut dyn Canvas,
    requests: &'a mut Vec<SpawnRequest>,
    tic: u64,
}

impl<'a> TaskContext<'a> {
    pub fn new(canvas: &'a mut dyn Canvas, requests: &'a mut Vec<SpawnRequest>, tic: u64) -> Self {
        Self {
            canvas,
            requests,
            tic,
        }
    }

    /// Ask for a new task. It is first resumed on the next tic.
    pub fn request(&mut self, request: SpawnRequest) {
        self.requests.push(request);
    }

    /// Number of the tic being run.
    pub fn tic(&self) -> u64 {
        self.tic
    }
}

pub trait Task {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    fn resume(&mut self, ctx: &mut TaskContext<'_>) -> Step;
}

/// Turns spawn requests into tasks.
pub trait Spawn {
    fn spawn(&mut self, request: SpawnRequest) -> Box<dyn Task>;
}
