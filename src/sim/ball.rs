//! The ball and its per-tick update
//!
//! Order within a tick matters and is fixed:
//! 1. Brick hit test using the pending displacement (at most one brick)
//! 2. Face resolution for the struck brick, brick removed
//! 3. Walls (left/right/top bounce, bottom ends the game)
//! 4. Paddle hit test and bounce-angle model
//! 5. Integration with the possibly flipped velocity
//!
//! The bottom wall is checked before the paddle, so a ball that crosses both
//! in one step is lost even if finer stepping would have caught it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bricks::BrickField;
use super::collision::{BounceModel, resolve_brick_bounce};
use super::rect::Rect;
use super::state::GameEvent;
use crate::config::GameConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub radius: f32,
    /// Speed magnitude (constant across ordinary bounces)
    pub speed: f32,
    pub bounce: BounceModel,
    screen: Vec2,
}

impl Ball {
    pub fn new(config: &GameConfig) -> Self {
        let speed = config.ball.speed;
        Self {
            pos: config.ball_start(),
            vel: Vec2::new(0.0, -speed),
            radius: config.ball.radius,
            speed,
            bounce: BounceModel {
                angle_min: config.ball.angle_min,
                angle_max: config.ball.angle_max,
                speed,
            },
            screen: Vec2::new(config.screen.width, config.screen.height),
        }
    }

    /// Back to `start`, heading straight up
    pub fn reset(&mut self, start: Vec2) {
        self.pos = start;
        self.vel = Vec2::new(0.0, -self.speed);
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, Vec2::splat(self.radius * 2.0))
    }

    /// Advance one tick. Returns the updated `(score, game_over)`.
    pub fn update(
        &mut self,
        bricks: &mut BrickField,
        paddle: &Rect,
        score: u64,
        game_over: bool,
        events: &mut Vec<GameEvent>,
    ) -> (u64, bool) {
        let mut score = score;
        if self.collide_bricks(bricks, events) {
            score += 1;
        }
        let game_over = self.collide_walls(game_over, events);
        self.collide_paddle(paddle, events);
        self.integrate();
        (score, game_over)
    }

    /// Strike and remove the first brick the pending move would overlap
    fn collide_bricks(&mut self, bricks: &mut BrickField, events: &mut Vec<GameEvent>) -> bool {
        let rect = self.rect();
        let Some((id, brick_rect)) = bricks.first_hit(&rect, self.vel) else {
            return false;
        };

        if let Some(reflection) = resolve_brick_bounce(&rect, self.vel, &brick_rect) {
            self.vel = reflection.apply(self.vel);
        }
        bricks.remove(id);
        log::debug!("Brick {:?} destroyed, {} left", id, bricks.len());
        events.push(GameEvent::BrickDestroyed { id });
        true
    }

    /// Bounce off the left, right and top walls. Returns the new game-over flag.
    fn collide_walls(&mut self, game_over: bool, events: &mut Vec<GameEvent>) -> bool {
        let rect = self.rect();
        let mut bounced = false;

        if rect.left() <= 0.0 {
            self.pos.x = self.radius;
            self.vel.x = -self.vel.x;
            bounced = true;
        }
        if rect.right() >= self.screen.x {
            self.pos.x = self.screen.x - self.radius;
            self.vel.x = -self.vel.x;
            bounced = true;
        }
        if rect.top() <= 0.0 {
            self.pos.y = self.radius;
            self.vel.y = -self.vel.y;
            bounced = true;
        }
        if bounced {
            events.push(GameEvent::WallBounce);
        }

        if rect.bottom() >= self.screen.y {
            if !game_over {
                log::info!("Ball lost at x={:.1}", self.pos.x);
                events.push(GameEvent::BallLost);
            }
            return true;
        }
        game_over
    }

    fn collide_paddle(&mut self, paddle: &Rect, events: &mut Vec<GameEvent>) {
        if !self.rect().intersects_offset(paddle, self.vel) {
            return;
        }
        let paddle_x = paddle.center().x;
        let ratio = BounceModel::hit_ratio(paddle_x, self.pos.x, paddle.w / 2.0);
        self.vel = self.bounce.velocity(ratio, self.pos.x >= paddle_x);
        log::debug!("Paddle hit, ratio {:.2}, vel {:?}", ratio, self.vel);
        events.push(GameEvent::PaddleHit { ratio });
    }

    fn integrate(&mut self) {
        self.pos += self.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::bricks::BrickId;
    use crate::sim::paddle::Paddle;

    const EPS: f32 = 1e-4;

    struct Fixture {
        ball: Ball,
        bricks: BrickField,
        paddle: Rect,
        events: Vec<GameEvent>,
    }

    impl Fixture {
        fn new() -> Self {
            let config = GameConfig::default();
            Self {
                ball: Ball::new(&config),
                bricks: BrickField::new(&config),
                paddle: Paddle::new(&config).rect(),
                events: Vec::new(),
            }
        }

        fn step(&mut self, score: u64, game_over: bool) -> (u64, bool) {
            self.ball
                .update(&mut self.bricks, &self.paddle, score, game_over, &mut self.events)
        }
    }

    #[test]
    fn test_starts_above_paddle_moving_up() {
        let f = Fixture::new();
        assert_eq!(f.ball.pos, Vec2::new(400.0, 735.0));
        assert_eq!(f.ball.vel, Vec2::new(0.0, -6.0));
        assert!(f.ball.rect().bottom() < f.paddle.top());
    }

    #[test]
    fn test_free_flight() {
        let mut f = Fixture::new();
        let (score, game_over) = f.step(0, false);
        assert_eq!((score, game_over), (0, false));
        assert_eq!(f.ball.pos, Vec2::new(400.0, 729.0));
        assert!(f.events.is_empty());
    }

    #[test]
    fn test_left_wall_bounce() {
        let mut f = Fixture::new();
        f.ball.pos = Vec2::new(10.0, 400.0);
        f.ball.vel = Vec2::new(-6.0, 0.0);
        f.step(0, false);
        assert_eq!(f.ball.vel, Vec2::new(6.0, 0.0));
        assert_eq!(f.ball.rect().left(), 6.0);
        assert_eq!(f.events, vec![GameEvent::WallBounce]);
    }

    #[test]
    fn test_left_wall_clamps_overshoot() {
        let mut f = Fixture::new();
        f.ball.pos = Vec2::new(7.0, 400.0);
        f.ball.vel = Vec2::new(-6.0, 0.0);
        let mut events = Vec::new();
        f.ball.collide_walls(false, &mut events);
        assert_eq!(f.ball.rect().left(), 0.0);
        assert_eq!(f.ball.vel.x, 6.0);
    }

    #[test]
    fn test_right_and_top_wall_bounce() {
        let mut f = Fixture::new();
        f.ball.pos = Vec2::new(795.0, 5.0);
        f.ball.vel = Vec2::new(3.0, -5.0);
        let mut events = Vec::new();
        f.ball.collide_walls(false, &mut events);
        assert_eq!(f.ball.rect().right(), 800.0);
        assert_eq!(f.ball.rect().top(), 0.0);
        assert_eq!(f.ball.vel, Vec2::new(-3.0, 5.0));
    }

    #[test]
    fn test_bottom_edge_ends_game() {
        let mut f = Fixture::new();
        // Bottom edge at screen_height - 1, well away from the paddle
        f.ball.pos = Vec2::new(50.0, 789.0);
        f.ball.vel = Vec2::new(0.0, 6.0);
        let (_, game_over) = f.step(0, false);
        assert!(!game_over);
        assert!(f.ball.rect().bottom() >= 800.0);
        let (_, game_over) = f.step(0, game_over);
        assert!(game_over);
        assert_eq!(f.events, vec![GameEvent::BallLost]);
    }

    #[test]
    fn test_brick_hit_from_below() {
        let mut f = Fixture::new();
        // Just under brick (0, 0) which spans x 15..78, y 65..100
        f.ball.pos = Vec2::new(46.0, 111.0);
        f.ball.vel = Vec2::new(0.0, -6.0);
        let (score, game_over) = f.step(3, false);
        assert_eq!((score, game_over), (4, false));
        assert_eq!(f.ball.vel, Vec2::new(0.0, 6.0));
        assert_eq!(f.bricks.len(), 49);
        assert!(f.bricks.get(BrickId(0)).is_none());
        assert_eq!(f.events, vec![GameEvent::BrickDestroyed { id: BrickId(0) }]);
    }

    #[test]
    fn test_only_one_brick_per_tick() {
        let mut f = Fixture::new();
        // Pending move overlaps bricks (0, 0) and (0, 1)
        f.ball.pos = Vec2::new(85.0, 111.0);
        f.ball.vel = Vec2::new(0.0, -6.0);
        let (score, _) = f.step(0, false);
        assert_eq!(score, 1);
        assert_eq!(f.bricks.len(), 49);
        assert!(f.bricks.get(BrickId(0)).is_none());
        assert!(f.bricks.get(BrickId(1)).is_some());
    }

    #[test]
    fn test_paddle_center_hit() {
        let mut f = Fixture::new();
        f.ball.pos = Vec2::new(400.0, 740.0);
        f.ball.vel = Vec2::new(0.0, 6.0);
        f.step(0, false);
        let expected_y = -70.0_f32.to_radians().sin() * 6.0;
        assert!((f.ball.vel.y - expected_y).abs() < EPS);
        assert!(f.ball.vel.x > 0.0);
        assert!((f.ball.vel.length() - 6.0).abs() < EPS);
        assert_eq!(f.events, vec![GameEvent::PaddleHit { ratio: 0.0 }]);
    }

    #[test]
    fn test_paddle_edge_hits() {
        let mut f = Fixture::new();
        f.ball.pos = Vec2::new(475.0, 745.0);
        f.ball.vel = Vec2::new(2.0, 5.0);
        f.step(0, false);
        assert!((f.ball.vel.y + 3.0).abs() < EPS);
        assert!(f.ball.vel.x > 0.0);

        let mut f = Fixture::new();
        f.ball.pos = Vec2::new(320.0, 745.0);
        f.ball.vel = Vec2::new(2.0, 5.0);
        f.step(0, false);
        assert!((f.ball.vel.y + 3.0).abs() < EPS);
        assert!(f.ball.vel.x < 0.0);
    }

    #[test]
    fn test_bottom_wall_checked_before_paddle() {
        let mut f = Fixture::new();
        // Bottom edge past the screen while the pending move still overlaps the paddle
        f.ball.pos = Vec2::new(400.0, 791.0);
        f.ball.vel = Vec2::new(0.0, -6.0);
        let (score, game_over) = f.step(0, false);
        assert_eq!((score, game_over), (0, true));

        let expected_vel = f.ball.bounce.velocity(0.0, true);
        assert_eq!(f.ball.vel, expected_vel);
        assert!(f.ball.vel.x > 0.0 && f.ball.vel.y < 0.0);
        assert_eq!(f.ball.pos, Vec2::new(400.0, 791.0) + expected_vel);
        assert_eq!(
            f.events,
            vec![GameEvent::BallLost, GameEvent::PaddleHit { ratio: 0.0 }]
        );
    }

    #[test]
    fn test_reset() {
        let mut f = Fixture::new();
        f.ball.pos = Vec2::new(1.0, 2.0);
        f.ball.vel = Vec2::new(4.0, 4.0);
        f.ball.reset(Vec2::new(400.0, 735.0));
        assert_eq!(f.ball.pos, Vec2::new(400.0, 735.0));
        assert_eq!(f.ball.vel, Vec2::new(0.0, -6.0));
    }
}
