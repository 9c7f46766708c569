//! Decorative bubble field
//!
//! Fixed-size population: bubbles rise, drift and fade, and are recycled
//! below the floor once they clear the surface.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A rising bubble
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bubble {
    pub pos: Vec2,
    pub size: f32,
    /// Rise per tick
    pub speed: f32,
    /// 0-1
    pub opacity: f32,
}

impl Bubble {
    /// Spawn a bubble somewhere below the arena floor
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, arena: Vec2) -> Self {
        Self {
            pos: Vec2::new(
                rng.random::<f32>() * arena.x,
                arena.y + rng.random::<f32>() * BUBBLE_SPAWN_DEPTH,
            ),
            size: random_size(rng),
            speed: rng.random::<f32>() * 2.0 + 1.0,
            opacity: random_opacity(rng),
        }
    }

    /// Rise, drift and fade by one tick
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R, arena: Vec2) {
        self.pos.y -= self.speed;
        self.pos.x += (self.pos.y / BUBBLE_DRIFT_PERIOD).sin() * BUBBLE_DRIFT;
        self.opacity = (self.opacity - BUBBLE_FADE_PER_TICK).max(0.0);

        if self.pos.y < -self.size {
            self.respawn(rng, arena);
        }
    }

    /// Recycle below the floor; rise speed is kept
    fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R, arena: Vec2) {
        self.pos = Vec2::new(
            rng.random::<f32>() * arena.x,
            arena.y + rng.random::<f32>() * BUBBLE_SPAWN_DEPTH,
        );
        self.size = random_size(rng);
        self.opacity = random_opacity(rng);
    }
}

fn random_size<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random::<f32>() * 10.0 + 5.0
}

fn random_opacity<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random::<f32>() * 0.5 + 0.2
}

/// Spawn the initial bubble population
pub fn spawn_field<R: Rng + ?Sized>(rng: &mut R, arena: Vec2, count: usize) -> Vec<Bubble> {
    (0..count).map(|_| Bubble::spawn(rng, arena)).collect()
}
