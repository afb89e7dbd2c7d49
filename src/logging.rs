//! File logger setup.
//!
//! The terminal belongs to the animation, so logs only go to a file, and only
//! when a path is configured.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

/// Install a debug-level file logger at `path`. Returns false when no path is set.
pub fn init(path: Option<&Path>) -> Result<bool> {
    let Some(path) = path else {
        return Ok(false);
    };

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let log_file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    // A logger installed earlier (e.g. by a test harness) wins.
    let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    Ok(true)
}
