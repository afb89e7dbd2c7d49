//! Core types module - shared data structures and constants
//!
//! Pure data shared by the scheduler, the tasks and the terminal layer. No
//! external dependencies, so every other crate can use it.
//!
//! # Timing
//!
//! Everything is measured in tics. A tic is [`TIC_MS`] milliseconds by default
//! and all durations are rounded up to whole tics:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TIC_MS` | 100 | Length of one scheduling quantum |
//! | `STAR_DIM_MS` | 2000 | Dim phase of a star |
//! | `STAR_NORMAL_MS` | 300 | Normal phase (twice per cycle) |
//! | `STAR_BOLD_MS` | 500 | Bold phase |
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use starfield_types::{ticks_for, Attr, AnimationConfig};
//!
//! let config = AnimationConfig::default();
//! assert_eq!(config.tic, Duration::from_millis(100));
//! assert_eq!(ticks_for(Duration::from_millis(2000), config.tic), 20);
//! assert_eq!(Attr::default(), Attr::Normal);
//! ```

use std::path::PathBuf;
use std::time::Duration;

/// Length of one tic in milliseconds.
pub const TIC_MS: u64 = 100;

/// Number of stars seeded at startup.
pub const STAR_COUNT: usize = 350;

/// Horizontal moves are scaled by this factor (terminal cells are taller than wide).
pub const COLUMN_SPEED_MULTIPLIER: i32 = 5;

/// Glyphs a star may be drawn with.
pub const STAR_SYMBOLS: [char; 4] = ['+', '*', '.', ':'];

pub const STAR_DIM_MS: u64 = 2000;
pub const STAR_NORMAL_MS: u64 = 300;
pub const STAR_BOLD_MS: u64 = 500;

/// Upper bound of the random star startup delay, in tenths of a second.
pub const STAR_MAX_DELAY_TENTHS: u32 = 50;

/// Default projectile speed in rows per tic (negative is upward).
pub const PROJECTILE_ROW_SPEED: f64 = -0.3;

/// Default projectile speed in columns per tic.
pub const PROJECTILE_COLUMN_SPEED: f64 = 0.0;

pub const DEFAULT_ASSETS_DIR: &str = "img";

/// Display attribute of a single character cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Attr {
    Dim,
    #[default]
    Normal,
    Bold,
}

/// Steering input collected since the previous read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    /// -1 up, 1 down, 0 none.
    pub rows_direction: i32,
    /// -1 left, 1 right, 0 none.
    pub columns_direction: i32,
    pub fire: bool,
}

impl Controls {
    pub const fn new(rows_direction: i32, columns_direction: i32, fire: bool) -> Self {
        Self {
            rows_direction,
            columns_direction,
            fire,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.rows_direction == 0 && self.columns_direction == 0 && !self.fire
    }

    /// Merge a later reading into this one. Later directions win, fire is sticky.
    pub fn merge(&mut self, other: Controls) {
        if other.rows_direction != 0 {
            self.rows_direction = other.rows_direction;
        }
        if other.columns_direction != 0 {
            self.columns_direction = other.columns_direction;
        }
        self.fire |= other.fire;
    }
}

/// Convert a duration to whole tics, rounding up.
///
/// A zero-length tic is treated as one nanosecond.
pub fn ticks_for(duration: Duration, tic: Duration) -> u32 {
    let tic_ns = tic.as_nanos().max(1);
    let ticks = duration.as_nanos().div_ceil(tic_ns);
    u32::try_from(ticks).unwrap_or(u32::MAX)
}

/// Process-wide animation settings.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationConfig {
    pub tic: Duration,
    pub star_count: usize,
    pub column_speed_multiplier: i32,
    pub projectile_row_speed: f64,
    pub projectile_column_speed: f64,
    /// Seed for the random source. `None` derives one from the clock.
    pub seed: Option<u32>,
    pub assets_dir: PathBuf,
    pub log_path: Option<PathBuf>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            tic: Duration::from_millis(TIC_MS),
            star_count: STAR_COUNT,
            column_speed_multiplier: COLUMN_SPEED_MULTIPLIER,
            projectile_row_speed: PROJECTILE_ROW_SPEED,
            projectile_column_speed: PROJECTILE_COLUMN_SPEED,
            seed: None,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            log_path: None,
        }
    }
}

impl AnimationConfig {
    /// Create from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AnimationConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parsed = |key: &str| lookup(key).and_then(|s| s.trim().parse::<u64>().ok());
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let tic = parsed("STARFIELD_TIC_MS")
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(defaults.tic);

        let star_count = parsed("STARFIELD_STARS")
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(defaults.star_count);

        let column_speed_multiplier = parsed("STARFIELD_COLUMN_SPEED")
            .filter(|n| *n > 0)
            .and_then(|n| i32::try_from(n).ok())
            .unwrap_or(defaults.column_speed_multiplier);

        let seed = parsed("STARFIELD_SEED").and_then(|n| u32::try_from(n).ok());

        let assets_dir = non_empty("STARFIELD_ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.assets_dir);

        let log_path = non_empty("STARFIELD_LOG_PATH").map(PathBuf::from);

        Self {
            tic,
            star_count,
            column_speed_multiplier,
            seed,
            assets_dir,
            log_path,
            ..defaults
        }
    }
}
