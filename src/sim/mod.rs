//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick per frame, no delta time)
//! - Stable iteration order (bricks row-major)
//! - No rendering or platform dependencies

pub mod ball;
pub mod bricks;
pub mod collision;
pub mod paddle;
pub mod rect;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use bricks::{Brick, BrickField, BrickId};
pub use collision::{BOUNCE_PROBES, BounceModel, Reflection, resolve_brick_bounce};
pub use paddle::Paddle;
pub use rect::Rect;
pub use state::{GameEvent, Session};
pub use tick::{TickInput, TickReport, tick};
