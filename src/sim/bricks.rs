//! Brick field
//!
//! Bricks live in an arena of slots laid out row-major. A destroyed brick
//! leaves its slot empty, so a `BrickId` stays valid (and never points at a
//! different brick) until the next reset. Iteration is always row-major,
//! which fixes which brick is struck first when several overlap the ball.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::GameConfig;

/// Stable handle to a brick slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BrickId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub row: usize,
    pub column: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrickField {
    slots: Vec<Option<Brick>>,
}

impl BrickField {
    pub fn new(config: &GameConfig) -> Self {
        let mut field = Self::default();
        field.reset(config);
        field
    }

    /// Clear and repopulate the full grid
    pub fn reset(&mut self, config: &GameConfig) {
        let layout = &config.bricks;
        let size = config.brick_size();

        self.slots.clear();

        let mut y = layout.top_margin + layout.spacing;
        for row in 0..layout.rows {
            let mut x = 0.0;
            for column in 0..layout.columns {
                x += layout.spacing;
                self.slots.push(Some(Brick {
                    rect: Rect::new(x, y, size.x, size.y),
                    row,
                    column,
                }));
                x += size.x;
            }
            y += layout.spacing + size.y;
        }
    }

    /// Remove a brick. Empty or unknown slots are left alone.
    pub fn remove(&mut self, id: BrickId) -> Option<Brick> {
        self.slots.get_mut(id.0).and_then(Option::take)
    }

    pub fn get(&self, id: BrickId) -> Option<&Brick> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    /// Live bricks in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (BrickId, &Brick)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|b| (BrickId(i), b)))
    }

    /// First live brick (row-major) that `rect` would overlap after moving by `offset`
    pub fn first_hit(&self, rect: &Rect, offset: Vec2) -> Option<(BrickId, Rect)> {
        self.iter()
            .find(|(_, brick)| rect.intersects_offset(&brick.rect, offset))
            .map(|(id, brick)| (id, brick.rect))
    }

    /// Number of live bricks
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Number of slots in the current layout
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}
