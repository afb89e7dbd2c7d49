//! Text sprite assets.
//!
//! Assets are read once at startup. A missing, unreadable or empty file is
//! fatal: the animation never starts with a partial sprite set.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::core::{ShipFrames, Sprite};

pub const ROCKET_FRAME_1: &str = "rocket_frame_1.txt";
pub const ROCKET_FRAME_2: &str = "rocket_frame_2.txt";

/// Read `dir/name` into memory.
pub fn load_text_asset(dir: &Path, name: &str) -> Result<String> {
    let path = dir.join(name);
    let text = fs::read_to_string(&path)
        .with_context(|| format!("failed to load asset {}", path.display()))?;
    if text.trim().is_empty() {
        bail!("asset {} is empty", path.display());
    }
    Ok(text)
}

/// Load both spaceship frames from `dir`.
pub fn load_ship_frames(dir: &Path) -> Result<ShipFrames> {
    let first = load_text_asset(dir, ROCKET_FRAME_1)?;
    let second = load_text_asset(dir, ROCKET_FRAME_2)?;
    let frames = ShipFrames::new(Sprite::new(&first), Sprite::new(&second));
    log::info!(
        "loaded ship frames from {} ({:?})",
        dir.display(),
        frames.size()
    );
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn bundled() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("img")
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("starfield-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn bundled_frames_load() {
        let frames = load_ship_frames(&bundled()).unwrap();
        let (rows, cols) = frames.size();
        assert!(rows > 0 && cols > 0);
    }

    #[test]
    fn missing_asset_names_the_path() {
        let err = load_text_asset(Path::new("/nonexistent-starfield"), ROCKET_FRAME_1).unwrap_err();
        assert!(err.to_string().contains("rocket_frame_1.txt"));
    }

    #[test]
    fn empty_asset_is_rejected() {
        let dir = scratch_dir("empty");
        fs::write(dir.join("blank.txt"), "  \n\n").unwrap();
        assert!(load_text_asset(&dir, "blank.txt").is_err());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn second_frame_missing_is_fatal() {
        let dir = scratch_dir("half");
        fs::write(dir.join(ROCKET_FRAME_1), " ^\n/ \\\n").unwrap();
        assert!(load_ship_frames(&dir).is_err());
        let _ = fs::remove_dir_all(&dir);
    }
}
