//! Reef growth
//!
//! Growth and stage are pure functions of the total number of plants ever
//! collected; the counter only goes up.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// The reef on the sea floor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reef {
    /// Sand bed region the renderer grows coral on
    pub bed: Rect,
    pub collected_total: u64,
    /// Fraction in [0, 1]
    pub growth: f32,
    pub stage: u32,
    batch_size: u32,
}

impl Reef {
    pub fn new(arena: Vec2, batch_size: u32) -> Self {
        Self {
            bed: Rect::new(
                REEF_X,
                arena.y - REEF_FLOOR_OFFSET,
                REEF_WIDTH,
                REEF_HEIGHT,
            ),
            collected_total: 0,
            growth: 0.0,
            stage: 0,
            batch_size: batch_size.max(1),
        }
    }

    /// Count one collected plant and recompute growth/stage
    ///
    /// Returns the new total.
    pub fn record_collection(&mut self) -> u64 {
        self.collected_total += 1;
        self.growth = growth_for(self.collected_total, self.batch_size);
        self.stage = stage_for(self.collected_total, self.batch_size);
        self.collected_total
    }

    pub fn batch_size(&self) -> u32 {
        self.batch_size
    }
}

/// `min(1, total / batch_size)`
pub fn growth_for(total: u64, batch_size: u32) -> f32 {
    (total as f32 / batch_size.max(1) as f32).min(1.0)
}

/// `floor(total / batch_size)`
pub fn stage_for(total: u64, batch_size: u32) -> u32 {
    (total / batch_size.max(1) as u64) as u32
}
