//! Axis-aligned bounding boxes
//!
//! Every collision in the game (player vs. plant, player vs. current zone) is
//! a strict AABB overlap: boxes that only share an edge do not collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle, positioned by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner (screen coordinates, y grows downward)
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        aabb_overlap(self, other)
    }

    /// True if the rectangle lies fully inside `[0, bounds.x] x [0, bounds.y]`
    pub fn within(&self, bounds: Vec2) -> bool {
        let max = self.max();
        self.pos.x >= 0.0 && self.pos.y >= 0.0 && max.x <= bounds.x && max.y <= bounds.y
    }
}

/// Strict overlap test between two rectangles
#[inline]
pub fn aabb_overlap(a: &Rect, b: &Rect) -> bool {
    a.pos.x < b.pos.x + b.size.x
        && a.pos.x + a.size.x > b.pos.x
        && a.pos.y < b.pos.y + b.size.y
        && a.pos.y + a.size.y > b.pos.y
}

/// Clamp a box's top-left corner so the box stays inside `[0, bounds]`
///
/// Axes are independent. A box larger than the bounds is pinned to 0.
#[inline]
pub fn clamp_into(pos: Vec2, size: Vec2, bounds: Vec2) -> Vec2 {
    // min-then-max rather than f32::clamp, which panics when size > bounds
    Vec2::new(
        pos.x.min(bounds.x - size.x).max(0.0),
        pos.y.min(bounds.y - size.y).max(0.0),
    )
}
