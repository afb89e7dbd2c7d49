//! Terminal starfield runner (default binary).
//!
//! Configuration comes from `STARFIELD_*` environment variables; there are no
//! command line flags. Press `q`, `Esc` or Ctrl-C to leave.

use anyhow::Result;

use starfield::assets;
use starfield::core::{Scheduler, ShipFrames, SimpleRng, Spawner, TicLoop};
use starfield::logging;
use starfield::term::{BorderParams, TerminalCanvas};
use starfield::types::AnimationConfig;

fn main() -> Result<()> {
    let config = AnimationConfig::from_env();
    logging::init(config.log_path.as_deref())?;

    // Assets first: a missing sprite aborts before the terminal is touched.
    let frames = assets::load_ship_frames(&config.assets_dir)?;

    let mut canvas = TerminalCanvas::new()?;
    canvas.enter()?;

    let result = run(&mut canvas, config, frames);

    // Always try to restore terminal state.
    let _ = canvas.exit();
    result
}

fn run(canvas: &mut TerminalCanvas, config: AnimationConfig, frames: ShipFrames) -> Result<()> {
    canvas.draw_border(&BorderParams::with_bar_sides());

    let rng = config
        .seed
        .map(SimpleRng::new)
        .unwrap_or_else(SimpleRng::from_time);
    log::info!("starting with seed {} and tic {:?}", rng.state(), config.tic);

    let tic_loop = TicLoop::new(config.tic);
    let mut scheduler = Scheduler::new();
    let mut spawner = Spawner::new(config, rng);
    spawner.seed(&mut scheduler, &*canvas, frames);

    let summary = tic_loop.run(&mut scheduler, canvas, &mut spawner)?;
    log::info!(
        "stopped: {:?} after {} tics ({} overran)",
        summary.reason,
        summary.tics,
        summary.overruns
    );
    Ok(())
}
