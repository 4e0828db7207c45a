//! Recording surface
//!
//! Captures every drawing call as a [`DrawCommand`] instead of rasterizing.

use glam::Vec2;

use super::{Rgba, Shadow, Surface, TextAlign};
use crate::sim::Rect;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rect),
    FillRect {
        rect: Rect,
        color: Rgba,
        shadow: Option<Shadow>,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    FillText {
        text: String,
        pos: Vec2,
        font: String,
        color: Rgba,
        align: TextAlign,
    },
}

/// A surface that only remembers what it was asked to draw
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop everything recorded so far
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn rect_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { .. }))
            .count()
    }

    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
            .count()
    }

    /// Text strings in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for DrawList {
    fn clear(&mut self, region: Rect) {
        self.commands.push(DrawCommand::Clear(region));
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba, shadow: Option<Shadow>) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            color,
            shadow,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: Rgba, align: TextAlign) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            pos,
            font: font.to_string(),
            color,
            align,
        });
    }
}
