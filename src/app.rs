//! Frame loop and its collaborators
//!
//! One frame = wait for the clock, poll input, tick once, render once.
//! The restart button is only live while the game is over.

use std::thread;
use std::time::{Duration, Instant};

use crate::render::{Renderer, render_frame};
use crate::sim::{Session, TickInput, tick};
use crate::ui::RestartButton;

/// Source of per-frame input, polled exactly once per frame
pub trait InputSource {
    fn poll(&mut self, session: &Session) -> TickInput;
}

impl<F> InputSource for F
where
    F: FnMut(&Session) -> TickInput,
{
    fn poll(&mut self, session: &Session) -> TickInput {
        self(session)
    }
}

/// Frame pacing
pub trait FrameClock {
    /// Block until the next frame is due
    fn wait_frame(&mut self);
}

/// Sleeps out whatever is left of a fixed frame period
#[derive(Debug, Clone)]
pub struct FixedRateClock {
    period: Duration,
    last: Option<Instant>,
}

impl FixedRateClock {
    pub fn new(period: Duration) -> Self {
        Self { period, last: None }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl FrameClock for FixedRateClock {
    fn wait_frame(&mut self) {
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < self.period {
                thread::sleep(self.period - elapsed);
            }
        }
        self.last = Some(Instant::now());
    }
}

/// Runs frames back to back
#[derive(Debug, Clone, Copy, Default)]
pub struct Unpaced;

impl FrameClock for Unpaced {
    fn wait_frame(&mut self) {}
}

/// What happened during a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub final_score: u64,
    pub best_score: u64,
    pub restarts: u32,
    pub quit: bool,
}

/// Run frames until input asks to quit or `max_frames` have been run
pub fn run(
    session: &mut Session,
    input: &mut impl InputSource,
    renderer: &mut impl Renderer,
    clock: &mut impl FrameClock,
    max_frames: Option<u64>,
) -> RunSummary {
    let mut button = RestartButton::new(&session.config);
    let mut summary = RunSummary::default();

    while max_frames.is_none_or(|max| summary.frames < max) {
        clock.wait_frame();

        let frame_input = input.poll(session);
        if frame_input.quit {
            log::info!("Quit requested after {} frames", summary.frames);
            summary.quit = true;
            break;
        }

        let report = tick(session, &frame_input);
        summary.best_score = summary.best_score.max(report.score);
        render_frame(session, &button, renderer);

        if report.game_over && button.update(frame_input.pointer, frame_input.pointer_down) {
            session.restart();
            summary.restarts += 1;
        }
        summary.frames += 1;
    }

    summary.final_score = session.score;
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::render::{RecordingRenderer, Sprite};
    use glam::Vec2;

    fn losing_session() -> Session {
        let mut session = Session::new(GameConfig::default());
        session.ball.pos = Vec2::new(50.0, 789.0);
        session.ball.vel = Vec2::new(0.0, 6.0);
        session
    }

    #[test]
    fn test_runs_max_frames() {
        let mut session = Session::new(GameConfig::default());
        let mut renderer = RecordingRenderer::default();
        let mut input = |_: &Session| TickInput::default();
        let summary = run(&mut session, &mut input, &mut renderer, &mut Unpaced, Some(10));
        assert_eq!(summary.frames, 10);
        assert!(!summary.quit);
        assert_eq!(renderer.frames, 10);
        assert_eq!(session.time_ticks, 10);
    }

    #[test]
    fn test_quit_stops_before_tick() {
        let mut session = Session::new(GameConfig::default());
        let mut renderer = RecordingRenderer::default();
        let mut frame = 0;
        let mut input = |_: &Session| {
            frame += 1;
            TickInput {
                quit: frame > 3,
                ..Default::default()
            }
        };
        let summary = run(&mut session, &mut input, &mut renderer, &mut Unpaced, None);
        assert!(summary.quit);
        assert_eq!(summary.frames, 3);
        assert_eq!(session.time_ticks, 3);
    }

    #[test]
    fn test_game_over_shows_button() {
        let mut session = losing_session();
        let mut renderer = RecordingRenderer::default();
        let mut input = |_: &Session| TickInput::default();
        let summary = run(&mut session, &mut input, &mut renderer, &mut Unpaced, Some(5));
        assert!(session.game_over);
        assert_eq!(summary.restarts, 0);
        assert!(renderer.has_button());
        assert_eq!(renderer.count(Sprite::Ball), 0);
    }

    #[test]
    fn test_button_press_restarts() {
        let mut session = losing_session();
        session.score = 5;
        let mut renderer = RecordingRenderer::default();
        let mut input = |s: &Session| TickInput {
            pointer: Some(Vec2::new(400.0, 400.0)),
            pointer_down: s.game_over,
            ..Default::default()
        };
        let summary = run(&mut session, &mut input, &mut renderer, &mut Unpaced, Some(4));
        assert_eq!(summary.restarts, 1);
        assert_eq!(summary.best_score, 5);
        assert!(!session.game_over);
        assert_eq!(session.score, 0);
        assert_eq!(session.bricks.len(), 50);
    }

    #[test]
    fn test_fixed_rate_clock_paces_frames() {
        let mut clock = FixedRateClock::new(Duration::from_millis(5));
        let start = Instant::now();
        for _ in 0..4 {
            clock.wait_frame();
        }
        assert!(start.elapsed() >= Duration::from_millis(15));
        assert_eq!(clock.period(), Duration::from_millis(5));
    }
}
