//! Rendering module
//!
//! Renderers only ever see a `Snapshot`; they cannot touch simulation state.
//! `scene` tessellates a snapshot into triangles that any backend can draw.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{Frame, SpriteQuad, build_frame};
pub use vertex::Vertex;

use crate::sim::Snapshot;

/// A frame sink
pub trait Renderer {
    /// Draw one frame; `time` is the driver's clock in seconds
    fn render(&mut self, snapshot: &Snapshot<'_>, time: f32);
}

/// Renderer that tessellates frames without presenting them
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    pub frames: u64,
    pub last_vertex_count: usize,
}

impl Renderer for HeadlessRenderer {
    fn render(&mut self, snapshot: &Snapshot<'_>, time: f32) {
        let frame = build_frame(snapshot, time, false);
        self.frames += 1;
        self.last_vertex_count = frame.vertices.len();
        log::trace!(
            "Frame {} at tick {}: {} vertices ({} bytes)",
            self.frames,
            snapshot.time_ticks,
            frame.vertices.len(),
            vertex::as_bytes(&frame.vertices).len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, TickInput, tick};

    #[test]
    fn test_headless_renders_each_tick() {
        let mut state = GameState::with_seed(8);
        let mut renderer = HeadlessRenderer::default();

        for frame in 0..5 {
            tick(&mut state, &TickInput::default());
            renderer.render(&state.snapshot(), frame as f32 / 60.0);
        }

        assert_eq!(renderer.frames, 5);
        assert!(renderer.last_vertex_count > 0);
    }
}
