//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Raw bytes of a vertex list, ready for a GPU or JS buffer upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Average color of a vertex run, used where a backend can only fill flat
pub fn mean_color(vertices: &[Vertex]) -> [f32; 4] {
    if vertices.is_empty() {
        return [0.0; 4];
    }
    let mut sum = [0.0f32; 4];
    for v in vertices {
        for (acc, c) in sum.iter_mut().zip(v.color) {
            *acc += c;
        }
    }
    let n = vertices.len() as f32;
    sum.map(|c| c / n)
}

/// Replace a color's alpha
pub const fn with_alpha(color: [f32; 4], alpha: f32) -> [f32; 4] {
    [color[0], color[1], color[2], alpha]
}

/// Colors for game elements
pub mod colors {
    pub const WATER: [f32; 4] = [0.0, 0.35, 0.6, 1.0];
    pub const SAND_TOP: [f32; 4] = [0.95, 0.82, 0.42, 1.0];
    pub const SAND_BOTTOM: [f32; 4] = [0.83, 0.71, 0.36, 1.0];
    pub const BUBBLE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const CURRENT: [f32; 4] = [0.0, 0.59, 1.0, 0.3];
    pub const STREAM: [f32; 4] = [0.0, 0.59, 1.0, 0.2];
    pub const PLANT_BASE: [f32; 4] = [0.3, 0.69, 0.31, 1.0];
    pub const PLANT_OUTLINE: [f32; 4] = [0.18, 0.49, 0.2, 1.0];
    pub const PLANT_DETAIL: [f32; 4] = [0.51, 0.78, 0.52, 1.0];
    pub const PLANT_BUBBLE: [f32; 4] = [0.65, 0.84, 0.65, 1.0];
    pub const SEAWEED: [f32; 4] = [0.18, 0.61, 0.15, 1.0];
    pub const SEAWEED_HIGHLIGHT: [f32; 4] = [0.24, 0.78, 0.21, 1.0];
    pub const TURTLE_SHELL: [f32; 4] = [0.36, 0.55, 0.25, 1.0];
    pub const TURTLE_SKIN: [f32; 4] = [0.55, 0.75, 0.45, 1.0];

    /// Coral (base, highlight) pairs, cycled per reef stage
    pub const CORAL: [([f32; 4], [f32; 4]); 4] = [
        ([1.0, 0.49, 0.49, 1.0], [1.0, 0.62, 0.62, 1.0]),
        ([1.0, 0.59, 0.29, 1.0], [1.0, 0.71, 0.47, 1.0]),
        ([0.82, 0.38, 0.64, 1.0], [0.88, 0.51, 0.77, 1.0]),
        ([0.19, 0.7, 0.77, 1.0], [0.31, 0.83, 0.89, 1.0]),
    ];
}
