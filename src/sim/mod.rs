//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed step per tick, no delta-time scaling
//! - Seeded RNG only
//! - Row-major brick iteration
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{
    WallContact, ball_out_of_bounds, bounce_off_paddle, bricks_hit, paddle_bounce,
    reflect_off_walls, touches_paddle,
};
pub use rect::Rect;
pub use state::{Ball, Board, Brick, BrickGrid, GameEvent, GamePhase, GameState, Layout, Paddle};
pub use tick::{TickInput, resolve_collisions, tick};
