//! Terminal rendering module.
//!
//! A persistent framebuffer that tasks draw into, a crossterm renderer that
//! flushes only changed cells, and [`TerminalCanvas`], which ties both to the
//! key reader behind the core [`Canvas`](crate::core::Canvas) trait.

pub mod border;
pub mod canvas;
pub mod fb;
pub mod renderer;

pub use starfield_core as core;
pub use starfield_input as input;
pub use starfield_types as types;

pub use border::{draw_border, BorderParams};
pub use canvas::TerminalCanvas;
pub use fb::{Cell, FrameBuffer};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
