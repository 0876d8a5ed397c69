//! Demo autopilot
//!
//! Plays the game on its own: follows the ball with a small seeded aiming
//! offset (so bounces vary) and presses the restart button after a loss,
//! up to a fixed number of restarts.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::app::InputSource;
use crate::config::ControlMode;
use crate::sim::{Session, TickInput};

/// Ticks between new aiming offsets
const RETARGET_TICKS: u64 = 45;
/// Largest aiming offset from the ball center
const MAX_AIM_OFFSET: f32 = 60.0;

#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    aim_offset: f32,
    max_restarts: u32,
    restarts: u32,
    pressing: bool,
}

impl Autopilot {
    pub fn new(seed: u64, max_restarts: u32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            aim_offset: 0.0,
            max_restarts,
            restarts: 0,
            pressing: false,
        }
    }

    /// Restart presses issued so far
    pub fn restarts(&self) -> u32 {
        self.restarts
    }

    fn restart_input(&mut self, session: &Session) -> TickInput {
        if self.restarts >= self.max_restarts {
            return TickInput {
                quit: true,
                ..Default::default()
            };
        }

        // Alternate press and release so every press is a fresh edge. The
        // button only sees input during game over, so the release that follows
        // a restart happens at the start of the next game over.
        self.pressing = !self.pressing;
        if self.pressing {
            self.restarts += 1;
            log::info!("Autopilot restarting ({}/{})", self.restarts, self.max_restarts);
        }
        let screen = &session.config.screen;
        TickInput {
            pointer: Some(Vec2::new(screen.width / 2.0, screen.height / 2.0)),
            pointer_down: self.pressing,
            ..Default::default()
        }
    }

    fn play_input(&mut self, session: &Session) -> TickInput {
        if session.time_ticks % RETARGET_TICKS == 0 {
            self.aim_offset = self.rng.random_range(-MAX_AIM_OFFSET..=MAX_AIM_OFFSET);
        }

        let paddle = &session.paddle;
        let target_x = session.ball.pos.x + self.aim_offset;
        let mut input = TickInput {
            pointer: Some(Vec2::new(target_x, paddle.y)),
            ..Default::default()
        };
        if paddle.control == ControlMode::Keys {
            let dx = target_x - paddle.x;
            input.left = dx < -paddle.half_width() / 4.0;
            input.right = dx > paddle.half_width() / 4.0;
            input.boost = dx.abs() > paddle.half_width();
        }
        input
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, session: &Session) -> TickInput {
        if session.game_over {
            self.restart_input(session)
        } else {
            self.play_input(session)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Unpaced, run};
    use crate::config::GameConfig;
    use crate::render::RecordingRenderer;

    #[test]
    fn test_quits_after_restarts_used() {
        let mut session = Session::new(GameConfig::default());
        session.game_over = true;
        let mut pilot = Autopilot::new(7, 0);
        assert!(pilot.poll(&session).quit);
    }

    #[test]
    fn test_press_release_cycle() {
        let mut session = Session::new(GameConfig::default());
        session.game_over = true;
        let mut pilot = Autopilot::new(7, 2);

        let press = pilot.poll(&session);
        assert!(press.pointer_down);
        assert_eq!(press.pointer, Some(Vec2::new(400.0, 400.0)));
        let release = pilot.poll(&session);
        assert!(!release.pointer_down);
        assert!(pilot.poll(&session).pointer_down);
        assert_eq!(pilot.restarts(), 2);
        assert!(pilot.poll(&session).quit);
    }

    #[test]
    fn test_follows_ball() {
        let session = Session::new(GameConfig::default());
        let mut pilot = Autopilot::new(7, 0);
        let input = pilot.poll(&session);
        let pointer = input.pointer.unwrap();
        assert!((pointer.x - session.ball.pos.x).abs() <= MAX_AIM_OFFSET);
        assert!(!input.quit);
    }

    #[test]
    fn test_same_seed_same_game() {
        let play = |seed: u64| {
            let mut session = Session::new(GameConfig::default());
            let mut pilot = Autopilot::new(seed, 2);
            let mut renderer = RecordingRenderer::default();
            let summary = run(&mut session, &mut pilot, &mut renderer, &mut Unpaced, Some(2000));
            (summary, session.ball.pos, session.bricks.len())
        };
        assert_eq!(play(99), play(99));
    }

    #[test]
    fn test_key_mode_steers() {
        let mut config = GameConfig::default();
        config.paddle.control = ControlMode::Keys;
        let mut session = Session::new(config);
        session.ball.pos.x = 100.0;
        let mut pilot = Autopilot::new(1, 0);
        let input = pilot.poll(&session);
        assert!(input.left);
        assert!(!input.right);
        assert!(input.boost);
    }
}
