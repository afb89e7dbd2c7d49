//! Core animation module - scheduler, tasks and sprite primitives
//!
//! Everything here is single-threaded and free of terminal I/O. Tasks draw
//! through the [`Canvas`] trait, so the whole animation can run against
//! [`MemoryCanvas`] in tests.
//!
//! # Module Structure
//!
//! - [`scheduler`]: round-robin cooperative scheduler, one resumption per tic
//! - [`task`]: the [`Task`] trait and the [`Step`] a task answers with
//! - [`blink`], [`spaceship`], [`fire`]: the three animation tasks
//! - [`spawner`]: initial task set and projectile construction
//! - [`sprite`]: multi-line frame measuring, drawing and erasing
//! - [`tic_loop`]: fixed-rate driver that sleeps and refreshes
//! - [`rng`]: injectable random source
//!
//! # Example
//!
//! ```
//! use starfield_core::{MemoryCanvas, Scheduler, ShipFrames, SimpleRng, Spawner, Sprite};
//! use starfield_types::AnimationConfig;
//!
//! let config = AnimationConfig { star_count: 20, ..AnimationConfig::default() };
//! let mut canvas = MemoryCanvas::new(24, 80);
//! let mut scheduler = Scheduler::new();
//! let mut spawner = Spawner::new(config, SimpleRng::new(7));
//!
//! let frames = ShipFrames::new(Sprite::new(" ^\n/ \\"), Sprite::new(" ^\n| |"));
//! spawner.seed(&mut scheduler, &canvas, frames);
//!
//! for _ in 0..100 {
//!     scheduler.tick(&mut canvas, &mut spawner);
//! }
//! assert_eq!(scheduler.len(), 21);
//! ```

pub mod blink;
pub mod canvas;
pub mod fire;
pub mod rng;
pub mod scheduler;
pub mod spaceship;
pub mod spawner;
pub mod sprite;
pub mod task;
pub mod tic_loop;

pub use starfield_types as types;

pub use blink::Blink;
pub use canvas::{Canvas, Glyph, MemoryCanvas};
pub use fire::Fire;
pub use rng::{RandomSource, SequenceRng, SimpleRng};
pub use scheduler::{Scheduler, TickReport};
pub use spaceship::{clamp_axis, ShipFrames, Spaceship};
pub use spawner::Spawner;
pub use sprite::{draw, measure, Sprite};
pub use task::{Spawn, SpawnRequest, Step, Task, TaskContext};
pub use tic_loop::{LoopSummary, StopReason, TicLoop};
