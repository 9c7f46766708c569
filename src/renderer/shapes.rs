//! Shape generation for 2D primitives and the procedural reef
//!
//! Everything here emits triangle lists. Animated shapes take `time` in
//! seconds from the frame driver's clock; none of them read simulation state.

use glam::Vec2;
use std::f32::consts::{FRAC_PI_4, PI};

use super::vertex::Vertex;

/// Branch depth of coral trees
pub const CORAL_DEPTH: u32 = 3;
/// Children per coral branch
const CORAL_FORK: u32 = 2;
/// Child branch length relative to parent
const CORAL_SHRINK: f32 = 0.7;
const CORAL_SWAY: f32 = 0.1;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let dir1 = Vec2::from_angle(theta1);
        let dir2 = Vec2::from_angle(theta2);
        let inner1 = center + dir1 * inner_radius;
        let outer1 = center + dir1 * outer_radius;
        let inner2 = center + dir2 * inner_radius;
        let outer2 = center + dir2 * outer_radius;

        quad(&mut vertices, [inner1, outer1, outer2, inner2], [color; 4]);
    }

    vertices
}

/// Axis-aligned rectangle with a top-to-bottom color gradient
pub fn gradient_rect(pos: Vec2, size: Vec2, top: [f32; 4], bottom: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(6);
    let max = pos + size;
    quad(
        &mut vertices,
        [pos, Vec2::new(max.x, pos.y), max, Vec2::new(pos.x, max.y)],
        [top, top, bottom, bottom],
    );
    vertices
}

/// Solid rectangle
pub fn rect(pos: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    gradient_rect(pos, size, color, color)
}

/// Thick line segment
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    let offset = dir.perp() * (width / 2.0);

    let mut vertices = Vec::with_capacity(6);
    quad(
        &mut vertices,
        [from + offset, to + offset, to - offset, from - offset],
        [color; 4],
    );
    vertices
}

/// Thick polyline, one quad per segment
pub fn polyline(points: &[Vec2], width: f32, color: [f32; 4]) -> Vec<Vertex> {
    points
        .windows(2)
        .flat_map(|pair| line(pair[0], pair[1], width, color))
        .collect()
}

/// Two triangles covering a convex quad given in winding order
fn quad(out: &mut Vec<Vertex>, corners: [Vec2; 4], colors: [[f32; 4]; 4]) {
    for i in [0, 1, 2, 0, 2, 3] {
        out.push(Vertex::new(corners[i].x, corners[i].y, colors[i]));
    }
}

/// One straight piece of a coral tree
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoralSegment {
    pub from: Vec2,
    pub to: Vec2,
    /// Remaining depth at this segment (thicker near the root)
    pub depth: u32,
}

/// Recursively grow a coral branch and its forks into `out`
pub fn coral_branch(
    out: &mut Vec<CoralSegment>,
    from: Vec2,
    angle: f32,
    length: f32,
    depth: u32,
    time: f32,
) {
    if depth == 0 {
        return;
    }

    let to = from + Vec2::from_angle(angle) * length;
    out.push(CoralSegment { from, to, depth });

    let sway = (time + depth as f32).sin() * CORAL_SWAY;
    for i in 0..CORAL_FORK {
        let child_angle = angle + FRAC_PI_4 * (i as f32 - 0.5) + sway;
        coral_branch(out, to, child_angle, length * CORAL_SHRINK, depth - 1, time);
    }
}

/// Segments of a branching coral with `3 + stage` main arms
pub fn branching_coral_segments(center: Vec2, size: f32, stage: u32, time: f32) -> Vec<CoralSegment> {
    let arms = 3 + stage;
    let mut segments = Vec::new();

    for i in 0..arms {
        let angle = (i as f32 / arms as f32) * 2.0 * PI + (time + i as f32).sin() * CORAL_SWAY;
        coral_branch(&mut segments, center, angle, size, CORAL_DEPTH, time);
    }

    segments
}

/// Tessellated branching coral: a base stroke with a thinner highlight
pub fn branching_coral(
    center: Vec2,
    size: f32,
    stage: u32,
    time: f32,
    color: [f32; 4],
    highlight: [f32; 4],
) -> Vec<Vertex> {
    let segments = branching_coral_segments(center, size, stage, time);
    let mut vertices = Vec::with_capacity(segments.len() * 12);

    for seg in &segments {
        let width = seg.depth as f32;
        vertices.extend(line(seg.from, seg.to, width * 2.0, color));
        vertices.extend(line(seg.from, seg.to, width, highlight));
    }

    vertices
}

/// A ring of five bobbing bubbles with highlights
pub fn bubble_coral(
    center: Vec2,
    size: f32,
    time: f32,
    color: [f32; 4],
    highlight: [f32; 4],
) -> Vec<Vertex> {
    const COUNT: u32 = 5;
    let mut vertices = Vec::new();

    for i in 0..COUNT {
        let phase = i as f32;
        let angle = (phase / COUNT as f32) * 2.0 * PI;
        let pos = center
            + Vec2::from_angle(angle) * (size * 0.5)
            + Vec2::new(0.0, (time + phase).sin() * 2.0);
        let radius = size * (0.3 + (time * 2.0 + phase).sin() * 0.1);

        vertices.extend(circle(pos, radius, color, 12));
        vertices.extend(circle(pos - Vec2::splat(radius * 0.2), radius * 0.8, highlight, 12));
    }

    vertices
}

/// Points of a swaying seaweed strand rooted at `base`
pub fn seaweed_points(base: Vec2, height: f32, time: f32) -> Vec<Vec2> {
    const SEGMENTS: u32 = 10;
    const FREQUENCY: f32 = 3.0;
    const AMPLITUDE: f32 = 15.0;

    let step = height / SEGMENTS as f32;
    (0..=SEGMENTS)
        .map(|i| {
            let sway = (time * FREQUENCY + i as f32 * 0.5).sin() * AMPLITUDE;
            Vec2::new(base.x + sway, base.y - i as f32 * step)
        })
        .collect()
}

/// Seaweed strand with highlight
pub fn seaweed(base: Vec2, height: f32, time: f32, color: [f32; 4], highlight: [f32; 4]) -> Vec<Vertex> {
    let points = seaweed_points(base, height, time);
    let mut vertices = polyline(&points, 4.0, color);
    vertices.extend(polyline(&points, 2.0, highlight));
    vertices
}

/// Procedural turtle filling a `size` box, used when no sprite is loaded
pub fn turtle(pos: Vec2, size: Vec2, shell: [f32; 4], skin: [f32; 4]) -> Vec<Vertex> {
    let center = pos + size / 2.0;
    let unit = size.min_element();
    let mut vertices = Vec::new();

    // Flippers at the diagonals, under the shell
    for (dx, dy) in [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)] {
        let at = center + Vec2::new(dx, dy) * (unit * 0.28);
        vertices.extend(circle(at, unit * 0.12, skin, 10));
    }
    // Head facing right
    vertices.extend(circle(center + Vec2::new(unit * 0.36, 0.0), unit * 0.12, skin, 10));
    vertices.extend(circle(center, unit * 0.32, shell, 20));

    vertices
}
