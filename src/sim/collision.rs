//! Collision response for the ball
//!
//! Two pieces of non-trivial logic live here:
//! - Guessing which face of a brick was struck without a time-of-impact solve
//! - The paddle bounce-angle model (hit offset -> outgoing direction)

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Probe directions for brick face resolution, in the order they are tried
pub const BOUNCE_PROBES: [(f32, f32); 8] = [
    (1.0, 0.0),
    (-1.0, 0.0),
    (0.0, 1.0),
    (0.0, -1.0),
    (1.0, 1.0),
    (-1.0, 1.0),
    (-1.0, -1.0),
    (1.0, -1.0),
];

/// Which velocity axes to negate after a brick hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reflection {
    pub flip_x: bool,
    pub flip_y: bool,
}

impl Reflection {
    pub fn apply(self, vel: Vec2) -> Vec2 {
        Vec2::new(
            if self.flip_x { -vel.x } else { vel.x },
            if self.flip_y { -vel.y } else { vel.y },
        )
    }
}

/// Find the first probe offset (scaled by |vel| per axis) that puts `ball`
/// inside `brick`. Axis-aligned probes flip one component, diagonal probes
/// flip both. Returns `None` if no probe overlaps.
pub fn resolve_brick_bounce(ball: &Rect, vel: Vec2, brick: &Rect) -> Option<Reflection> {
    let magnitude = vel.abs();
    BOUNCE_PROBES.iter().find_map(|&(dx, dy)| {
        let offset = Vec2::new(magnitude.x * dx, magnitude.y * dy);
        ball.intersects_offset(brick, offset).then_some(Reflection {
            flip_x: dx != 0.0,
            flip_y: dy != 0.0,
        })
    })
}

/// Paddle bounce-angle model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BounceModel {
    /// Degrees above horizontal for an edge hit
    pub angle_min: f32,
    /// Degrees above horizontal for a center hit
    pub angle_max: f32,
    pub speed: f32,
}

impl BounceModel {
    /// Offset ratio of a hit: 0 at the paddle center, 1 at (or beyond) the edge
    pub fn hit_ratio(paddle_center_x: f32, ball_center_x: f32, half_width: f32) -> f32 {
        if half_width <= 0.0 {
            return 1.0;
        }
        let dist = (paddle_center_x - ball_center_x).abs().min(half_width);
        dist / half_width
    }

    /// Outgoing angle in degrees for a hit ratio
    pub fn angle_for(&self, ratio: f32) -> f32 {
        self.angle_min + (self.angle_max - self.angle_min) * (1.0 - ratio)
    }

    /// Outgoing velocity. Always upward; horizontal sign follows the side of
    /// the paddle the ball is on (center counts as right).
    pub fn velocity(&self, ratio: f32, ball_right_of_center: bool) -> Vec2 {
        let y = self.angle_for(ratio).to_radians().sin();
        let x = (1.0 - y * y).max(0.0).sqrt();
        let x = if ball_right_of_center { x } else { -x };
        Vec2::new(x * self.speed, -y * self.speed)
    }
}
