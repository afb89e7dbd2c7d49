//! Round-robin cooperative scheduler.
//!
//! Every registered task is resumed once per tic in registration order.
//! Sleeping tasks are skipped without being called; their countdown is the
//! only clock they have. Tasks spawned during a tic join at the end of it.

use crate::canvas::Canvas;
use crate::task::{Spawn, SpawnRequest, Step, Task, TaskContext};

struct Entry {
    task: Box<dyn Task>,
    /// Resumptions left to skip before the task runs again.
    skip: u32,
}

pub struct Scheduler {
    tasks: Vec<Entry>,
    requests: Vec<SpawnRequest>,
    finished: Vec<bool>,
    tic: u64,
}

/// Counts from one [`Scheduler::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    pub resumed: usize,
    pub spawned: usize,
    pub finished: usize,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            requests: Vec::new(),
            finished: Vec::new(),
            tic: 0,
        }
    }

    /// Register a task. It runs on the next tick.
    pub fn add(&mut self, task: Box<dyn Task>) {
        self.tasks.push(Entry { task, skip: 0 });
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of ticks run so far (also the number of the next tic).
    pub fn tic(&self) -> u64 {
        self.tic
    }

    /// Names of live tasks in resumption order.
    pub fn task_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tasks.iter().map(|e| e.task.name())
    }

    pub fn count(&self, name: &str) -> usize {
        self.task_names().filter(|n| *n == name).count()
    }

    /// Run one tic.
    pub fn tick(&mut self, canvas: &mut dyn Canvas, spawner: &mut dyn Spawn) -> TickReport {
        let mut report = TickReport::default();

        self.finished.clear();
        self.finished.resize(self.tasks.len(), false);

        for (i, entry) in self.tasks.iter_mut().enumerate() {
            if entry.skip > 0 {
                entry.skip -= 1;
                continue;
            }

            let mut ctx = TaskContext::new(&mut *canvas, &mut self.requests, self.tic);
            report.resumed += 1;
            match entry.task.resume(&mut ctx) {
                Step::Yield => entry.skip = 0,
                Step::Sleep(k) => entry.skip = k.saturating_sub(1),
                Step::Done => {
                    log::debug!("tic {}: task {} finished", self.tic, entry.task.name());
                    self.finished[i] = true;
                    report.finished += 1;
                }
            }
        }

        if report.finished > 0 {
            let finished = &self.finished;
            let mut i = 0;
            self.tasks.retain(|_| {
                let keep = !finished[i];
                i += 1;
                keep
            });
        }

        for request in self.requests.drain(..) {
            log::debug!("tic {}: spawning {:?}", self.tic, request);
            self.tasks.push(Entry {
                task: spawner.spawn(request),
                skip: 0,
            });
            report.spawned += 1;
        }

        self.tic += 1;
        report
    }
}
