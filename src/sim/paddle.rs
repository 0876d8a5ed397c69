//! The player's paddle
//!
//! Moves horizontally along a fixed line near the bottom of the screen,
//! either chasing the pointer or stepping on key presses.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::tick::TickInput;
use crate::clamp_center;
use crate::config::{ControlMode, GameConfig};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Center x (always within [half_width, screen_width - half_width])
    pub x: f32,
    /// Center y (fixed)
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub control: ControlMode,
    slow_speed: f32,
    fast_speed: f32,
    dead_zone: f32,
    screen_width: f32,
}

impl Paddle {
    pub fn new(config: &GameConfig) -> Self {
        let start = config.paddle_start();
        let mut paddle = Self {
            x: start.x,
            y: start.y,
            width: config.paddle.width,
            height: config.paddle.height,
            control: config.paddle.control,
            slow_speed: config.paddle.slow_speed,
            fast_speed: config.paddle.fast_speed,
            dead_zone: config.paddle.dead_zone,
            screen_width: config.screen.width,
        };
        paddle.clamp();
        paddle
    }

    /// Put the paddle back at its start position. Control mode and speeds persist.
    pub fn reset(&mut self, start: Vec2) {
        self.x = start.x;
        self.y = start.y;
        self.clamp();
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Current bounding box
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.center(), Vec2::new(self.width, self.height))
    }

    /// Move according to the configured control mode
    pub fn update_position(&mut self, input: &TickInput) {
        match self.control {
            ControlMode::Pointer => {
                if let Some(pointer) = input.pointer {
                    self.track_pointer(pointer.x);
                }
            }
            ControlMode::Keys => self.step_keys(input.left, input.right, input.boost),
        }
    }

    /// Step toward `target_x` at the fast speed, unless already inside the dead-zone
    pub fn track_pointer(&mut self, target_x: f32) {
        let direction = Vec2::new(target_x - self.x, 0.0);
        if direction.length() > self.dead_zone {
            self.x += direction.normalize_or_zero().x * self.fast_speed;
        }
        self.clamp();
    }

    pub fn step_keys(&mut self, left: bool, right: bool, boost: bool) {
        let speed = if boost { self.fast_speed } else { self.slow_speed };
        if left {
            self.x -= speed;
        }
        if right {
            self.x += speed;
        }
        self.clamp();
    }

    fn clamp(&mut self) {
        self.x = clamp_center(self.x, self.half_width(), self.screen_width);
    }
}
