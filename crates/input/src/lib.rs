//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Controls`] and drains
//! pending events without blocking, so the spaceship can poll once per cycle
//! and treat "no input" as the normal case.

pub mod map;
pub mod reader;

pub use starfield_types as types;

pub use map::{controls_for_key, fold_keys, should_quit};
pub use reader::{KeyReader, MAX_KEYS_PER_READ};
