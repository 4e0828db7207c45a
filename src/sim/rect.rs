//! Axis-aligned rectangle geometry for bricks, paddle and the board
//!
//! All containment tests are strict: a point exactly on an edge is outside.

use glam::Vec2;

/// An axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Horizontal midpoint
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Strict horizontal span test (edges excluded)
    #[inline]
    pub fn spans_x(&self, x: f32) -> bool {
        x > self.left() && x < self.right()
    }

    /// Strict containment on all four sides
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.spans_x(point.x) && point.y > self.top() && point.y < self.bottom()
    }
}
