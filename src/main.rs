//! Island Pong headless runner
//!
//! Plays one run with the autopilot on the paddle and a simulated frame
//! clock, then prints the final state as JSON.
//!
//! Usage: `island-pong [settings.json]`

use std::path::PathBuf;

use island_pong::consts::*;
use island_pong::sim::{Autopilot, GameEvent, TickClock};
use island_pong::{MotionEngine, Settings};

/// Frame time of the simulated display (60 Hz vsync)
const FRAME_MS: f32 = 1000.0 / 60.0;

fn main() {
    env_logger::init();
    log::info!("Island Pong (headless) starting...");

    let settings = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => Settings::load(&path),
        None => Settings::default(),
    };

    let mut engine = MotionEngine::new(&settings);
    let pilot = Autopilot::new(BALL_WIDTH / 4.0);
    let mut clock = TickClock::new();

    engine.restart();
    clock.start();

    let mut ticks = 0u64;
    while clock.is_running() && ticks < settings.max_ticks {
        // Pointer samples arrive once per frame, between ticks
        if settings.autopilot {
            engine.set_paddle_from_pointer(pilot.pointer_x(&engine.snapshot()));
        }

        for _ in 0..clock.advance(FRAME_MS) {
            let report = engine.tick();
            ticks += 1;
            for event in &report.events {
                match event {
                    GameEvent::IslandHit { .. } => log::info!("Score: {}", engine.score()),
                    other => log::trace!("{:?}", other),
                }
            }
            if !engine.is_active() {
                clock.stop();
                break;
            }
        }
    }

    if engine.is_active() {
        log::info!("Tick limit {} reached with ball in play", settings.max_ticks);
    } else {
        log::info!("Game over after {} ticks", ticks);
    }

    match serde_json::to_string_pretty(&engine.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not serialize final state: {}", e),
    }
}
