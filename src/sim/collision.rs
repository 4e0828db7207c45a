//! Collision detection and response
//!
//! Ball is treated as a circle against the board walls and the paddle, and as
//! a point (its center) against bricks. Responses only flip velocity signs;
//! nothing pushes the ball back out of a surface.

use glam::Vec2;

use super::rect::Rect;
use super::state::{Ball, Board, BrickGrid, Paddle};

/// Which walls the ball touched this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    /// Left or right wall
    pub side: bool,
    pub top: bool,
}

impl WallContact {
    pub fn any(&self) -> bool {
        self.side || self.top
    }
}

/// Reflect off the left, right and top walls.
///
/// Each axis flips at most once, so a corner hit negates both components
/// exactly once. The bottom edge never reflects.
pub fn reflect_off_walls(ball: &mut Ball, board: &Board) -> WallContact {
    let contact = WallContact {
        side: ball.right() > board.width || ball.left() < 0.0,
        top: ball.top() < 0.0,
    };

    if contact.side {
        ball.vel.x = -ball.vel.x;
    }
    if contact.top {
        ball.vel.y = -ball.vel.y;
    }

    contact
}

/// Ball center strictly inside the paddle span with its bottom edge at or
/// below the paddle top
pub fn touches_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    let rect = paddle.rect();
    rect.spans_x(ball.pos.x) && ball.bottom() >= rect.top()
}

/// Velocity after striking the paddle at `hit_x`.
///
/// Always heads upward. Horizontal direction follows the struck half with the
/// magnitude kept; a dead-center hit keeps the incoming sign.
pub fn paddle_bounce(vel: Vec2, hit_x: f32, paddle: &Rect) -> Vec2 {
    let offset = hit_x - paddle.center_x();
    let dx = if offset < 0.0 {
        -vel.x.abs()
    } else if offset > 0.0 {
        vel.x.abs()
    } else {
        vel.x
    };
    Vec2::new(dx, -vel.y.abs())
}

/// Bounce the ball off the paddle if they touch. Returns whether it did.
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle) -> bool {
    if !touches_paddle(ball, paddle) {
        return false;
    }
    ball.vel = paddle_bounce(ball.vel, ball.pos.x, &paddle.rect());
    true
}

/// Grid cells of every visible brick containing `point`, in row-major order
pub fn bricks_hit(point: Vec2, bricks: &BrickGrid) -> Vec<(usize, usize)> {
    bricks
        .visible()
        .filter(|b| b.rect.contains_point(point))
        .map(|b| (b.row, b.col))
        .collect()
}

/// Ball bottom edge below the board
pub fn ball_out_of_bounds(ball: &Ball, board: &Board) -> bool {
    ball.bottom() > board.height
}
