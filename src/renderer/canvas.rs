//! 2D canvas backend

use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

use super::{Rgba, Shadow, Surface, TextAlign};
use crate::sim::Rect;

/// Draws onto a `CanvasRenderingContext2d`
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Canvas shadow state is sticky, so every fill sets or clears it
    fn apply_shadow(&self, shadow: Option<Shadow>) {
        match shadow {
            Some(shadow) => {
                self.ctx.set_shadow_color(&shadow.color.to_css());
                self.ctx.set_shadow_blur(shadow.blur as f64);
                self.ctx.set_shadow_offset_x(shadow.offset.x as f64);
                self.ctx.set_shadow_offset_y(shadow.offset.y as f64);
            }
            None => {
                self.ctx.set_shadow_color("transparent");
                self.ctx.set_shadow_blur(0.0);
                self.ctx.set_shadow_offset_x(0.0);
                self.ctx.set_shadow_offset_y(0.0);
            }
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, region: Rect) {
        self.ctx.clear_rect(
            region.x as f64,
            region.y as f64,
            region.width as f64,
            region.height as f64,
        );
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba, shadow: Option<Shadow>) {
        self.apply_shadow(shadow);
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.apply_shadow(None);
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("Canvas arc failed: {:?}", e);
            return;
        }
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
        self.ctx.close_path();
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: Rgba, align: TextAlign) {
        self.apply_shadow(None);
        self.ctx.set_font(font);
        self.ctx.set_text_align(align.as_str());
        self.ctx.set_fill_style_str(&color.to_css());
        if let Err(e) = self.ctx.fill_text(text, pos.x as f64, pos.y as f64) {
            log::warn!("Canvas text failed: {:?}", e);
        }
    }
}
