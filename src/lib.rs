//! Brickfall - A single-screen brick-breaking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddle, ball, bricks, collisions, session)
//! - `config`: Explicit game configuration
//! - `render`: Renderer collaborator interface and frame emission
//! - `app`: Input/clock collaborators and the frame loop
//! - `ui`: Restart button and HUD text
//! - `autopilot`: Seeded demo input source

pub mod app;
pub mod autopilot;
pub mod config;
pub mod render;
pub mod sim;
pub mod ui;

pub use config::{BallConfig, BrickLayout, ControlMode, GameConfig, PaddleConfig, ScreenConfig};

/// Default game configuration constants
pub mod consts {
    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 800.0;
    /// Target frame rate (one simulation tick per frame)
    pub const FPS: u32 = 60;

    /// Brick grid
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLUMNS: usize = 10;
    pub const BRICK_SPACING: f32 = 15.0;
    /// Gap above the first row (for the score text)
    pub const BRICK_TOP_MARGIN: f32 = 50.0;
    /// Largest grid accepted from a config file
    pub const MAX_BRICK_ROWS: usize = 64;
    pub const MAX_BRICK_COLUMNS: usize = 64;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Speed magnitude, units per tick
    pub const BALL_SPEED: f32 = 6.0;
    /// Bounce angles off the paddle (degrees above horizontal)
    pub const BALL_ANGLE_MIN: f32 = 30.0;
    pub const BALL_ANGLE_MAX: f32 = 70.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 150.0;
    pub const PADDLE_HEIGHT: f32 = 30.0;
    pub const PADDLE_SLOW_SPEED: f32 = 4.0;
    pub const PADDLE_FAST_SPEED: f32 = 8.0;
    /// Pointer tracking stops when closer than this
    pub const PADDLE_DEAD_ZONE: f32 = 5.0;

    /// Restart button size
    pub const BUTTON_WIDTH: f32 = 200.0;
    pub const BUTTON_HEIGHT: f32 = 100.0;
}

/// Clamp a center coordinate so a span of `half` on each side stays in [0, extent]
///
/// Never panics: if the span is wider than the extent the center is pinned
/// to the middle.
#[inline]
pub fn clamp_center(center: f32, half: f32, extent: f32) -> f32 {
    if half * 2.0 >= extent {
        return extent / 2.0;
    }
    center.max(half).min(extent - half)
}
