//! Brickfall entry point
//!
//! Runs a headless demo: the autopilot plays a session at the configured
//! frame rate against a recording renderer.
//!
//! Usage: `brickfall [CONFIG.json] [FRAMES] [SEED]`

use std::time::{SystemTime, UNIX_EPOCH};

use brickfall::GameConfig;
use brickfall::app::{FixedRateClock, run};
use brickfall::autopilot::Autopilot;
use brickfall::render::RecordingRenderer;
use brickfall::sim::Session;

/// Frames to run when none are given (ten seconds at 60 FPS)
const DEFAULT_FRAMES: u64 = 600;
/// Restarts the autopilot may use before quitting
const DEMO_RESTARTS: u32 = 3;

fn main() {
    env_logger::init();
    log::info!("Brickfall (headless demo) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => GameConfig::load(path),
        None => GameConfig::default(),
    };
    let frames = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });

    let mut clock = FixedRateClock::new(config.frame_period());
    let mut session = Session::new(config);
    let mut autopilot = Autopilot::new(seed, DEMO_RESTARTS);
    let mut renderer = RecordingRenderer::default();

    log::info!("Running {} frames with seed {}", frames, seed);
    let summary = run(
        &mut session,
        &mut autopilot,
        &mut renderer,
        &mut clock,
        Some(frames),
    );

    println!(
        "frames: {}  score: {}  best: {}  restarts: {}  bricks left: {}",
        summary.frames,
        summary.final_score,
        summary.best_score,
        summary.restarts,
        session.bricks.len()
    );

    if log::log_enabled!(log::Level::Debug) {
        match serde_json::to_string(&session) {
            Ok(json) => log::debug!("Final session: {}", json),
            Err(e) => log::warn!("Could not serialize session: {}", e),
        }
    }
}
