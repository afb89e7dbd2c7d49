//! Starfield (workspace facade crate).
//!
//! Re-exports the workspace crates as `starfield::{core,input,term,types}` and
//! adds the startup plumbing used by the binary: sprite asset loading and the
//! file logger.

pub mod assets;
pub mod logging;

pub use starfield_core as core;
pub use starfield_input as input;
pub use starfield_term as term;
pub use starfield_types as types;
