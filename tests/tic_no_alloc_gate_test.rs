use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use starfield::core::{MemoryCanvas, Scheduler, ShipFrames, SimpleRng, Spawner, Sprite};
use starfield::types::AnimationConfig;

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = layout;
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = (layout, new_size);
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn steady_state_tics_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let config = AnimationConfig {
        star_count: 350,
        ..AnimationConfig::default()
    };
    let mut spawner = Spawner::new(config, SimpleRng::new(1));
    let mut scheduler = Scheduler::new();
    let mut canvas = MemoryCanvas::new(40, 120);
    let frames = ShipFrames::new(Sprite::new(" ^\n/ \\"), Sprite::new(" ^\n| |"));
    spawner.seed(&mut scheduler, &canvas, frames);

    // Warm-up.
    scheduler.tick(&mut canvas, &mut spawner);

    let allocs = with_alloc_counting(|| {
        // Stars and an idle spaceship: no spawns, no removals.
        for _ in 0..500 {
            let _ = scheduler.tick(&mut canvas, &mut spawner);
        }
    });

    assert!(allocs == 0);
}
