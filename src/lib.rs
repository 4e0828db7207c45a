//! Brickfall - a single-screen brick breaker
//!
//! Core modules:
//! - `sim`: Fixed-step simulation (entities, collisions, phase changes)
//! - `renderer`: Drawing surface abstraction and frame composition
//! - `platform`: Key mapping and key-value storage
//! - `game`: Session object and frame-driven loop
//! - `settings`: Per-tick tuning values

pub mod game;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{FrameScheduler, Game, run_frame};
pub use highscores::HighScore;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Brick grid dimensions
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLS: usize = 10;

    /// Brick geometry (width is derived from the board)
    pub const BRICK_HEIGHT: f32 = 25.0;
    pub const BRICK_OFFSET_TOP: f32 = 50.0;
    pub const BRICK_PADDING: f32 = 5.0;
    /// Subtracted from the per-column share of the board width
    pub const BRICK_WIDTH_SHRINK: f32 = 6.0;

    /// Paddle is the board width over this, minus `PADDLE_WIDTH_SHRINK`
    pub const PADDLE_WIDTH_DIVISOR: f32 = 10.0;
    pub const PADDLE_WIDTH_SHRINK: f32 = 6.0;
    /// Gap between paddle bottom and board bottom
    pub const PADDLE_BOTTOM_MARGIN: f32 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Ball starts this far above the paddle (plus its radius)
    pub const BALL_SERVE_GAP: f32 = 20.0;
    /// Per-tick displacement on each axis for the first serve
    pub const BALL_SERVE_SPEED: f32 = 3.0;
    /// Per-tick displacement on each axis after a restart
    pub const BALL_RELAUNCH_SPEED: f32 = 5.0;

    /// Paddle displacement per tick while a direction is held
    pub const PADDLE_SPEED: f32 = 7.0;

    /// Total bricks; scoring this many wins the game
    pub const TOTAL_BRICKS: u64 = (BRICK_ROWS * BRICK_COLS) as u64;
}
