//! Renderer collaborator
//!
//! The simulation never draws. A frame is emitted as a fixed sequence of
//! draw calls against a `Renderer`; the backend decides what a sprite is.

use glam::Vec2;

use crate::sim::{GameEvent, Rect, Session};
use crate::ui::{RestartButton, SCORE_TEXT_POS, score_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Ball,
    Paddle,
    Brick,
}

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub [u8; 4]);

impl Color {
    pub const BLACK: Color = Color([0, 0, 0, 255]);
}

pub trait Renderer {
    /// Start a frame by covering the whole screen with the background
    fn background(&mut self);
    fn sprite(&mut self, sprite: Sprite, rect: Rect);
    /// Text centered on `center`
    fn text(&mut self, text: &str, center: Vec2, color: Color);
    fn button(&mut self, rect: Rect);
    /// Finish the frame
    fn present(&mut self) {}
}

/// The ball stays on screen for the frame in which it was lost
fn ball_visible(session: &Session) -> bool {
    !session.game_over || session.events.contains(&GameEvent::BallLost)
}

/// Draw the post-tick state of `session`
pub fn render_frame(session: &Session, button: &RestartButton, renderer: &mut impl Renderer) {
    renderer.background();
    if ball_visible(session) {
        renderer.sprite(Sprite::Ball, session.ball.rect());
    }
    renderer.sprite(Sprite::Paddle, session.paddle.rect());
    for (_, brick) in session.bricks.iter() {
        renderer.sprite(Sprite::Brick, brick.rect);
    }
    renderer.text(&score_text(session.score), SCORE_TEXT_POS, Color::BLACK);
    if session.game_over {
        renderer.button(button.rect);
    }
    renderer.present();
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Background,
    Sprite(Sprite, Rect),
    Text(String, Vec2, Color),
    Button(Rect),
}

/// Headless renderer keeping the draw calls of the current frame
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pub commands: Vec<DrawCommand>,
    /// Frames presented so far
    pub frames: u64,
}

impl RecordingRenderer {
    pub fn count(&self, sprite: Sprite) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sprite(s, _) if *s == sprite))
            .count()
    }

    pub fn has_button(&self) -> bool {
        self.commands
            .iter()
            .any(|c| matches!(c, DrawCommand::Button(_)))
    }
}

impl Renderer for RecordingRenderer {
    fn background(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Background);
    }

    fn sprite(&mut self, sprite: Sprite, rect: Rect) {
        self.commands.push(DrawCommand::Sprite(sprite, rect));
    }

    fn text(&mut self, text: &str, center: Vec2, color: Color) {
        self.commands
            .push(DrawCommand::Text(text.to_string(), center, color));
    }

    fn button(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Button(rect));
    }

    fn present(&mut self) {
        self.frames += 1;
    }
}
