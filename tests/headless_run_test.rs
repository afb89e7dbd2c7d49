//! End-to-end runs of the full task set on an in-memory canvas.

use std::path::PathBuf;
use std::time::Duration;

use starfield::assets::load_ship_frames;
use starfield::core::{MemoryCanvas, Scheduler, SimpleRng, Spawner, StopReason, TicLoop};
use starfield::types::{AnimationConfig, Controls, STAR_SYMBOLS};

fn bundled_frames() -> starfield::core::ShipFrames {
    load_ship_frames(&PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("img")).unwrap()
}

fn config(stars: usize) -> AnimationConfig {
    AnimationConfig {
        star_count: stars,
        ..AnimationConfig::default()
    }
}

#[test]
fn full_scene_runs_until_interrupted() {
    let mut canvas = MemoryCanvas::new(30, 100);
    canvas.interrupt_after(200);
    let mut scheduler = Scheduler::new();
    let mut spawner = Spawner::new(config(50), SimpleRng::new(5));
    spawner.seed(&mut scheduler, &canvas, bundled_frames());

    let summary = TicLoop::new(Duration::ZERO)
        .run(&mut scheduler, &mut canvas, &mut spawner)
        .unwrap();

    assert_eq!(summary.reason, StopReason::Interrupted);
    assert_eq!(summary.tics, 200);
    assert_eq!(scheduler.count("blink"), 50);
    assert_eq!(scheduler.count("spaceship"), 1);
    // Startup delays are at most 5 s, i.e. 50 tics of 100 ms.
    assert!(canvas.inked() >= 50);
}

#[test]
fn every_star_renders_within_its_longest_delay() {
    let mut canvas = MemoryCanvas::new(30, 100);
    let mut scheduler = Scheduler::new();
    let mut spawner = Spawner::new(config(50), SimpleRng::new(9));
    spawner.seed(&mut scheduler, &canvas, bundled_frames());

    // Same seed, same draws: these are the seeded stars.
    let mut twin = Spawner::new(config(50), SimpleRng::new(9));
    let stars: Vec<_> = (0..50).map(|_| twin.star(30, 100)).collect();

    // A 5 s delay sleeps from tic 0 to tic 50.
    for _ in 0..51 {
        scheduler.tick(&mut canvas, &mut spawner);
    }

    let ship_rows = 14..=23;
    let ship_cols = 49..=56;
    for star in &stars {
        let (row, col) = star.position();
        if ship_rows.contains(&row) && ship_cols.contains(&col) {
            continue;
        }
        let ch = canvas.char_at(row, col);
        assert!(
            ch.is_some_and(|ch| STAR_SYMBOLS.contains(&ch)),
            "star at ({}, {}) not drawn",
            row,
            col
        );
    }
}

#[test]
fn shots_come_and_go() {
    let mut canvas = MemoryCanvas::new(30, 100);
    let mut scheduler = Scheduler::new();
    let mut spawner = Spawner::new(config(0), SimpleRng::new(5));
    spawner.seed(&mut scheduler, &canvas, bundled_frames());

    // The ship reads controls every other tic, starting on tic 2.
    for _ in 0..3 {
        canvas.push_controls(Controls::new(0, 0, true));
    }
    let mut peak = 0;
    for _ in 0..8 {
        scheduler.tick(&mut canvas, &mut spawner);
        peak = peak.max(scheduler.count("fire"));
    }
    assert_eq!(peak, 3);

    // Shots start just above a ship centred at row 15 and need < 50 tics to leave.
    for _ in 0..60 {
        scheduler.tick(&mut canvas, &mut spawner);
    }
    assert_eq!(scheduler.count("fire"), 0);
    assert_eq!(scheduler.len(), 1);
    assert_eq!(canvas.beep_count(), 3);
}

#[test]
fn same_seed_same_picture() {
    let render = || {
        let mut canvas = MemoryCanvas::new(24, 80);
        let mut scheduler = Scheduler::new();
        let mut spawner = Spawner::new(config(120), SimpleRng::new(77));
        spawner.seed(&mut scheduler, &canvas, bundled_frames());
        for _ in 0..90 {
            scheduler.tick(&mut canvas, &mut spawner);
        }
        canvas.cells().to_vec()
    };
    assert_eq!(render(), render());
}
