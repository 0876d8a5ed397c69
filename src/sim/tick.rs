//! Fixed-step simulation tick
//!
//! One call advances the session by one frame: paddle first, then the ball.
//! No delta time; every displacement is per tick.

use glam::Vec2;

use super::state::Session;

/// Input polled once per frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Pointer position in screen space, if known
    pub pointer: Option<Vec2>,
    /// Primary pointer button held
    pub pointer_down: bool,
    pub left: bool,
    pub right: bool,
    /// Fast-step modifier for key control
    pub boost: bool,
    /// Window close requested
    pub quit: bool,
}

/// State reported after a tick for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub score: u64,
    pub game_over: bool,
}

/// Advance the session by one tick. Does nothing but report once the game is over.
pub fn tick(session: &mut Session, input: &TickInput) -> TickReport {
    session.events.clear();

    if !session.game_over {
        session.time_ticks += 1;
        session.paddle.update_position(input);

        let paddle = session.paddle.rect();
        let (score, game_over) = session.ball.update(
            &mut session.bricks,
            &paddle,
            session.score,
            session.game_over,
            &mut session.events,
        );
        session.score = score;
        session.game_over = game_over;

        if game_over {
            log::info!(
                "Game over after {} ticks, score {}",
                session.time_ticks,
                session.score
            );
        } else if session.is_cleared() {
            log::debug!("All bricks cleared");
        }
    }

    TickReport {
        score: session.score,
        game_over: session.game_over,
    }
}
