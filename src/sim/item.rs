//! Collectible plants and batch regeneration

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::settings::ItemSettings;

/// Plant variety (visual only, no gameplay effect)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Seaweed,
    Starfish,
    BubbleCluster,
}

impl ItemKind {
    pub const ALL: [ItemKind; 3] = [ItemKind::Seaweed, ItemKind::Starfish, ItemKind::BubbleCluster];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// A collectible plant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub collected: bool,
    pub kind: ItemKind,
}

impl Item {
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

/// Generate a fresh batch of plants
///
/// Each slot gets up to `max_attempts` uniformly sampled candidates; the first
/// one at least `min_distance` from every plant already accepted in this batch
/// wins. A slot that runs out of attempts is skipped, so the batch can come
/// back short.
pub fn generate_batch<R: Rng + ?Sized>(
    rng: &mut R,
    arena: Vec2,
    rules: &ItemSettings,
    next_id: &mut u32,
) -> Vec<Item> {
    let span = Vec2::new(
        arena.x - 2.0 * rules.edge_margin,
        arena.y - rules.top_margin - rules.bottom_reserve,
    );
    let origin = Vec2::new(rules.edge_margin, rules.top_margin);
    let size = Vec2::splat(rules.size);

    let mut batch: Vec<Item> = Vec::with_capacity(rules.batch_size as usize);

    for _ in 0..rules.batch_size {
        let placed = (0..rules.max_attempts).find_map(|_| {
            let candidate = origin + Vec2::new(rng.random::<f32>(), rng.random::<f32>()) * span;
            batch
                .iter()
                .all(|other| other.pos.distance(candidate) >= rules.min_distance)
                .then_some(candidate)
        });

        if let Some(pos) = placed {
            let id = *next_id;
            *next_id += 1;
            batch.push(Item {
                id,
                pos,
                size,
                collected: false,
                kind: ItemKind::random(rng),
            });
        }
    }

    if batch.len() < rules.batch_size as usize {
        log::debug!(
            "Plant batch under-filled: {}/{} placed",
            batch.len(),
            rules.batch_size
        );
    }

    batch
}
