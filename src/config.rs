//! Game configuration
//!
//! One immutable structure handed to every entity at construction. Loaded
//! from an optional JSON file; every field falls back to its default.

use std::path::Path;
use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// How the paddle follows the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ControlMode {
    /// Paddle chases the pointer's x position
    #[default]
    #[serde(alias = "mouse")]
    Pointer,
    /// Left/right keys, modifier for the fast step
    #[serde(alias = "keyboard")]
    Keys,
}

impl ControlMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlMode::Pointer => "pointer",
            ControlMode::Keys => "keys",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: f32,
    pub height: f32,
    /// Frames (and simulation ticks) per second
    pub fps: u32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            fps: FPS,
        }
    }
}

/// Brick grid layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickLayout {
    pub rows: usize,
    pub columns: usize,
    /// Gap between bricks and between the outer bricks and the screen edge
    pub spacing: f32,
    /// Extra gap above the first row
    pub top_margin: f32,
}

impl Default for BrickLayout {
    fn default() -> Self {
        Self {
            rows: BRICK_ROWS,
            columns: BRICK_COLUMNS,
            spacing: BRICK_SPACING,
            top_margin: BRICK_TOP_MARGIN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    /// Speed magnitude in units per tick
    pub speed: f32,
    /// Bounce angle for an edge hit (degrees)
    pub angle_min: f32,
    /// Bounce angle for a center hit (degrees)
    pub angle_max: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: BALL_RADIUS,
            speed: BALL_SPEED,
            angle_min: BALL_ANGLE_MIN,
            angle_max: BALL_ANGLE_MAX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleConfig {
    pub width: f32,
    pub height: f32,
    /// Key step without modifier
    pub slow_speed: f32,
    /// Key step with modifier, and the pointer-tracking step
    pub fast_speed: f32,
    pub dead_zone: f32,
    pub control: ControlMode,
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            slow_speed: PADDLE_SLOW_SPEED,
            fast_speed: PADDLE_FAST_SPEED,
            dead_zone: PADDLE_DEAD_ZONE,
            control: ControlMode::Pointer,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen: ScreenConfig,
    pub bricks: BrickLayout,
    pub ball: BallConfig,
    pub paddle: PaddleConfig,
}

impl GameConfig {
    /// Parse a (possibly partial) JSON configuration
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::validated)
    }

    /// Load configuration from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read config {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Invalid config {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Repair values that would make the layout or physics meaningless
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();

        if self.screen.width <= 0.0 || self.screen.height <= 0.0 {
            log::warn!("Screen size must be positive, using defaults");
            self.screen.width = defaults.screen.width;
            self.screen.height = defaults.screen.height;
        }
        if self.screen.fps == 0 {
            log::warn!("fps must be at least 1");
            self.screen.fps = defaults.screen.fps;
        }
        if self.bricks.rows == 0 || self.bricks.columns == 0 {
            log::warn!("Brick grid needs at least one row and column");
            self.bricks.rows = self.bricks.rows.max(1);
            self.bricks.columns = self.bricks.columns.max(1);
        }
        if self.bricks.rows > MAX_BRICK_ROWS || self.bricks.columns > MAX_BRICK_COLUMNS {
            log::warn!(
                "Brick grid {}x{} capped to {}x{}",
                self.bricks.rows,
                self.bricks.columns,
                MAX_BRICK_ROWS,
                MAX_BRICK_COLUMNS
            );
            self.bricks.rows = self.bricks.rows.min(MAX_BRICK_ROWS);
            self.bricks.columns = self.bricks.columns.min(MAX_BRICK_COLUMNS);
        }
        if !self.bricks_fit() {
            log::warn!(
                "Brick grid {}x{} (spacing {}) leaves no room for bricks, using default layout",
                self.bricks.rows,
                self.bricks.columns,
                self.bricks.spacing
            );
            self.bricks = defaults.bricks.clone();
            if !self.bricks_fit() {
                log::warn!("Default brick layout does not fit the screen, using default screen size");
                self.screen.width = defaults.screen.width;
                self.screen.height = defaults.screen.height;
            }
        }
        if self.ball.angle_min > self.ball.angle_max {
            log::warn!("ball.angle_min > ball.angle_max, swapping");
            std::mem::swap(&mut self.ball.angle_min, &mut self.ball.angle_max);
        }
        if self.paddle.width <= 0.0 || self.paddle.width > self.screen.width {
            log::warn!("Paddle width {} does not fit the screen", self.paddle.width);
            self.paddle.width = defaults.paddle.width.min(self.screen.width);
        }

        self
    }

    /// Every brick has a positive width and height
    fn bricks_fit(&self) -> bool {
        let size = self.brick_size();
        self.bricks.spacing >= 0.0 && size.x > 0.0 && size.y > 0.0
    }

    /// Size of every brick so the grid fits the width and top third of the screen
    pub fn brick_size(&self) -> Vec2 {
        let b = &self.bricks;
        let h_gaps = (b.columns + 1) as f32 * b.spacing;
        let v_gaps = (b.rows + 1) as f32 * b.spacing;
        let width = ((self.screen.width - h_gaps) / b.columns as f32).floor();
        let height = (((self.screen.height / 3.0).floor() - v_gaps) / b.rows as f32).floor();
        Vec2::new(width.max(0.0), height.max(0.0))
    }

    /// Paddle center at the start of a round
    pub fn paddle_start(&self) -> Vec2 {
        Vec2::new(
            self.screen.width / 2.0,
            self.screen.height - self.paddle.height,
        )
    }

    /// Ball center at the start of a round (resting above the paddle)
    pub fn ball_start(&self) -> Vec2 {
        let paddle = self.paddle_start();
        let paddle_top = paddle.y - self.paddle.height / 2.0;
        Vec2::new(paddle.x, paddle_top - self.ball.radius * 2.0)
    }

    /// Duration of one frame at the configured rate
    pub fn frame_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.screen.fps.max(1) as f64)
    }
}
