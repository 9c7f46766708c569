//! Canvas 2D backend (browser)
//!
//! Fills the tessellated triangles one path each, in their mean vertex color,
//! and blits the player sprite when it has finished loading.

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::vertex::mean_color;
use super::{Renderer, build_frame};
use crate::sim::Snapshot;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    sprite: Option<HtmlImageElement>,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d, sprite: Option<HtmlImageElement>) -> Self {
        Self { ctx, sprite }
    }

    /// Sprite usable this frame: loaded and not broken
    fn ready_sprite(&self) -> Option<&HtmlImageElement> {
        self.sprite
            .as_ref()
            .filter(|img| img.complete() && img.natural_width() > 0)
    }
}

fn css_color(color: [f32; 4]) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        (color[0] * 255.0).round() as u8,
        (color[1] * 255.0).round() as u8,
        (color[2] * 255.0).round() as u8,
        color[3]
    )
}

impl Renderer for CanvasRenderer {
    fn render(&mut self, snapshot: &Snapshot<'_>, time: f32) {
        let sprite = self.ready_sprite().cloned();
        let frame = build_frame(snapshot, time, sprite.is_some());

        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, snapshot.arena.x as f64, snapshot.arena.y as f64);

        for tri in frame.vertices.chunks_exact(3) {
            ctx.begin_path();
            ctx.move_to(tri[0].position[0] as f64, tri[0].position[1] as f64);
            ctx.line_to(tri[1].position[0] as f64, tri[1].position[1] as f64);
            ctx.line_to(tri[2].position[0] as f64, tri[2].position[1] as f64);
            ctx.close_path();
            ctx.set_fill_style_str(&css_color(mean_color(tri)));
            ctx.fill();
        }

        if let (Some(img), Some(quad)) = (sprite, frame.sprite) {
            let drawn: Result<(), JsValue> = ctx.draw_image_with_html_image_element_and_dw_and_dh(
                &img,
                quad.pos.x as f64,
                quad.pos.y as f64,
                quad.size.x as f64,
                quad.size.y as f64,
            );
            if let Err(e) = drawn {
                log::warn!("Sprite draw failed: {:?}", e);
            }
        }
    }
}
