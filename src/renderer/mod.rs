//! Rendering module
//!
//! The game draws through the [`Surface`] trait and owns no rendering
//! resources. `CanvasSurface` backs it with a 2D canvas context on the web;
//! [`DrawList`] records calls for tests and headless runs.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod draw_list;
pub mod frame;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use draw_list::{DrawCommand, DrawList};
pub use frame::{draw_banner, draw_frame};

use glam::Vec2;

use crate::sim::Rect;

/// An sRGB color with straight alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS color string
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Drop shadow behind a filled shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub color: Rgba,
    pub blur: f32,
    pub offset: Vec2,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        }
    }
}

/// Drawing primitives the game needs from its host
pub trait Surface {
    fn clear(&mut self, region: Rect);
    fn fill_rect(&mut self, rect: Rect, color: Rgba, shadow: Option<Shadow>);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: Rgba, align: TextAlign);
}

/// Colors for game elements
pub mod colors {
    use super::Rgba;

    pub const PADDLE: Rgba = Rgba::rgb(0, 0, 255);
    pub const BALL: Rgba = Rgba::rgb(255, 255, 255);
    pub const TEXT: Rgba = Rgba::rgb(255, 255, 255);
    pub const SHADOW: Rgba = Rgba::rgba(0, 0, 0, 0.5);
    /// Brick color by row, cycling
    pub const BRICK_ROWS: [Rgba; 5] = [
        Rgba::rgb(255, 0, 0),   // red
        Rgba::rgb(255, 165, 0), // orange
        Rgba::rgb(255, 255, 0), // yellow
        Rgba::rgb(0, 128, 0),   // green
        Rgba::rgb(0, 0, 255),   // blue
    ];

    pub fn brick(row: usize) -> Rgba {
        BRICK_ROWS[row % BRICK_ROWS.len()]
    }
}

/// Fonts in CSS shorthand
pub mod fonts {
    pub const HUD: &str = "20px Arial";
    pub const BANNER: &str = "70px 'ArcadeClassic', sans-serif";
}
