//! Scene tessellation
//!
//! Turns a simulation snapshot into one triangle list, back to front: water,
//! bubbles, currents, reef, plants, player. The player is left out when the
//! backend has a sprite to blit instead.

use glam::Vec2;
use std::f32::consts::TAU;

use super::shapes;
use super::vertex::{Vertex, colors, with_alpha};
use crate::sim::{Current, CurrentKind, Item, ItemKind, Reef, Snapshot};

/// Most corals drawn on the reef, however high the stage climbs
pub const MAX_CORALS: u32 = 8;

/// Where a backend should blit the player sprite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteQuad {
    pub pos: Vec2,
    pub size: Vec2,
}

/// A tessellated frame
#[derive(Debug, Default)]
pub struct Frame {
    pub vertices: Vec<Vertex>,
    /// Set when the player should be drawn from the sprite image
    pub sprite: Option<SpriteQuad>,
}

/// Tessellate a snapshot
///
/// `time` is the driver's clock in seconds and only animates decoration.
pub fn build_frame(snapshot: &Snapshot<'_>, time: f32, sprite_loaded: bool) -> Frame {
    let mut vertices = shapes::rect(Vec2::ZERO, snapshot.arena, colors::WATER);

    for bubble in snapshot.bubbles {
        let color = with_alpha(colors::BUBBLE, bubble.opacity);
        vertices.extend(shapes::circle(bubble.pos, bubble.size, color, 12));
    }

    for current in snapshot.currents {
        push_current(&mut vertices, current);
    }

    push_reef(&mut vertices, snapshot.reef, snapshot.arena, time);

    for item in snapshot.items.iter().filter(|i| !i.collected) {
        push_plant(&mut vertices, item, time);
    }

    let player = snapshot.player;
    let bob = if player.moving { (time * 10.0).sin() * 3.0 } else { 0.0 };
    let player_pos = player.pos + Vec2::new(0.0, bob);

    let sprite = if sprite_loaded {
        Some(SpriteQuad {
            pos: player_pos,
            size: player.size,
        })
    } else {
        vertices.extend(shapes::turtle(
            player_pos,
            player.size,
            colors::TURTLE_SHELL,
            colors::TURTLE_SKIN,
        ));
        None
    };

    Frame { vertices, sprite }
}

fn push_current(out: &mut Vec<Vertex>, current: &Current) {
    let rect = current.rect;
    let center = rect.center();

    match current.kind {
        CurrentKind::Whirlpool { rotation, .. } => {
            let radius = rect.size.x / 2.0;
            for i in 0..8 {
                let angle = TAU * i as f32 / 8.0 + rotation;
                let tip = center + Vec2::from_angle(angle) * radius;
                out.extend(shapes::line(center, tip, 2.0, colors::CURRENT));
            }
        }
        CurrentKind::Stream { wave_offset, .. } => {
            let points: Vec<Vec2> = (0..rect.size.x as u32)
                .step_by(5)
                .map(|x| {
                    let x = x as f32;
                    rect.pos + Vec2::new(x, (x / 20.0 + wave_offset).sin() * 10.0)
                })
                .collect();
            out.extend(shapes::polyline(&points, 3.0, colors::STREAM));
        }
        CurrentKind::Vortex { .. } => {
            let radius = rect.size.x / 2.0;
            for i in 0..12 {
                let t = i as f32 / 12.0;
                let tip = center + Vec2::from_angle(TAU * t) * (radius * (1.0 - t));
                out.extend(shapes::line(center, tip, 2.0, colors::CURRENT));
            }
        }
    }
}

fn push_reef(out: &mut Vec<Vertex>, reef: &Reef, arena: Vec2, time: f32) {
    let bed = reef.bed;
    out.extend(shapes::gradient_rect(
        Vec2::new(0.0, bed.pos.y),
        Vec2::new(arena.x, bed.size.y + 50.0),
        colors::SAND_TOP,
        colors::SAND_BOTTOM,
    ));

    let stage = reef.stage;
    let corals = stage.min(MAX_CORALS);
    for i in 0..corals {
        let x = arena.x / (corals + 1) as f32 * (i + 1) as f32;
        let y = bed.pos.y - bed.size.y * 0.4;
        let (color, highlight) = colors::CORAL[i as usize % colors::CORAL.len()];

        out.extend(shapes::branching_coral(
            Vec2::new(x, y),
            50.0 + reef.growth * 30.0,
            stage.min(MAX_CORALS),
            time,
            color,
            highlight,
        ));
        out.extend(shapes::bubble_coral(
            Vec2::new(x + 30.0, y + 20.0),
            25.0 + reef.growth * 15.0,
            time,
            color,
            highlight,
        ));
    }

    let strands = 5 + stage.min(MAX_CORALS) * 2;
    let spacing = arena.x / strands as f32;
    for i in 0..strands {
        out.extend(shapes::seaweed(
            Vec2::new(spacing * (i + 1) as f32, bed.pos.y),
            60.0 + reef.growth * 20.0,
            time,
            colors::SEAWEED,
            colors::SEAWEED_HIGHLIGHT,
        ));
    }
}

fn push_plant(out: &mut Vec<Vertex>, item: &Item, time: f32) {
    let center = item.rect().center();
    let radius = item.size.x / 2.0;

    out.extend(shapes::circle(center, radius, colors::PLANT_BASE, 16));
    out.extend(shapes::ring(center, radius - 1.0, radius + 1.0, colors::PLANT_OUTLINE, 16));

    match item.kind {
        ItemKind::Seaweed => {
            for i in 0..3 {
                let dx = i as f32 * 10.0;
                let start = center + Vec2::new(dx - 10.0, 0.0);
                let control = center + Vec2::new(dx - 5.0 + (time * 2.0).sin() * 5.0, -15.0);
                let end = center + Vec2::new(dx - 10.0, -30.0);
                out.extend(shapes::polyline(&quadratic(start, control, end, 8), 4.0, colors::PLANT_DETAIL));
            }
        }
        ItemKind::Starfish => {
            for i in 0..5 {
                let dir = Vec2::from_angle(TAU * i as f32 / 5.0);
                let tip = center + dir * item.size * 0.7;
                out.extend(shapes::line(center, tip, 5.0, colors::PLANT_DETAIL));
            }
        }
        ItemKind::BubbleCluster => {
            for i in 0..4 {
                let phase = i as f32;
                let pos = center
                    + Vec2::from_angle(TAU * phase / 4.0) * 10.0
                    + Vec2::new(0.0, (time * 2.0 + phase).sin() * 3.0);
                out.extend(shapes::circle(pos, 8.0, colors::PLANT_BUBBLE, 12));
                out.extend(shapes::ring(pos, 7.0, 9.0, colors::PLANT_DETAIL, 12));
            }
        }
    }
}

/// Sample a quadratic Bezier into `steps + 1` points
fn quadratic(start: Vec2, control: Vec2, end: Vec2, steps: u32) -> Vec<Vec2> {
    (0..=steps)
        .map(|i| {
            let t = i as f32 / steps as f32;
            let a = start.lerp(control, t);
            let b = control.lerp(end, t);
            a.lerp(b, t)
        })
        .collect()
}
