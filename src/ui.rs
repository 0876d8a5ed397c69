//! Restart button and HUD text

use glam::Vec2;

use crate::config::GameConfig;
use crate::consts::{BUTTON_HEIGHT, BUTTON_WIDTH};
use crate::sim::Rect;

/// Where the score text is centered
pub const SCORE_TEXT_POS: Vec2 = Vec2::new(60.0, 20.0);

/// HUD score line
pub fn score_text(score: u64) -> String {
    format!("SCORE: {}", score)
}

/// Button shown while the game is over
///
/// Fires once per press that lands on it; holding the button down does not
/// fire again until it has been released.
#[derive(Debug, Clone)]
pub struct RestartButton {
    pub rect: Rect,
    clicked: bool,
}

impl RestartButton {
    /// Centered on the screen
    pub fn new(config: &GameConfig) -> Self {
        let center = Vec2::new(config.screen.width / 2.0, config.screen.height / 2.0);
        Self {
            rect: Rect::from_center(center, Vec2::new(BUTTON_WIDTH, BUTTON_HEIGHT)),
            clicked: false,
        }
    }

    /// Feed the current pointer state. Returns true on the activating press.
    pub fn update(&mut self, pointer: Option<Vec2>, down: bool) -> bool {
        let mut action = false;
        if down && !self.clicked && pointer.is_some_and(|p| self.rect.contains_point(p)) {
            action = true;
            self.clicked = true;
        }
        if !down {
            self.clicked = false;
        }
        action
    }
}
