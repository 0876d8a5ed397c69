//! Game session state
//!
//! The session owns every entity plus score and the game-over flag. It is
//! plain data and serializes as a snapshot of the round.

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::bricks::{BrickField, BrickId};
use super::paddle::Paddle;
use crate::config::GameConfig;

/// Something that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    BrickDestroyed { id: BrickId },
    WallBounce,
    /// Hit offset ratio (0 = center, 1 = edge)
    PaddleHit { ratio: f32 },
    BallLost,
}

/// One round of play
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub config: GameConfig,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickField,
    /// Bricks destroyed since the last restart
    pub score: u64,
    /// Set when the ball is lost; only `restart` clears it
    pub game_over: bool,
    /// Simulation ticks since the last restart
    pub time_ticks: u64,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        let mut session = Self {
            paddle: Paddle::new(&config),
            ball: Ball::new(&config),
            bricks: BrickField::default(),
            score: 0,
            game_over: false,
            time_ticks: 0,
            events: Vec::new(),
            config,
        };
        session.reset();
        session
    }

    /// Put paddle and ball back at the start and rebuild the brick grid.
    /// Score and the game-over flag are left alone.
    pub fn reset(&mut self) {
        self.paddle.reset(self.config.paddle_start());
        self.ball.reset(self.config.ball_start());
        self.bricks.reset(&self.config);
        self.events.clear();
        log::info!(
            "Round reset: {} bricks, control {}",
            self.bricks.len(),
            self.paddle.control.as_str()
        );
    }

    /// Start a fresh round after a game over
    pub fn restart(&mut self) {
        log::info!("Restarting (final score {})", self.score);
        self.game_over = false;
        self.score = 0;
        self.time_ticks = 0;
        self.reset();
    }

    /// All bricks destroyed
    pub fn is_cleared(&self) -> bool {
        self.bricks.is_empty()
    }
}
