//! Game state and core simulation types
//!
//! Everything a tick reads or mutates lives in [`GameState`]; the board
//! layout is computed once from the viewport and never changes afterwards.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::consts::*;
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Ball fell past the bottom edge
    GameOver,
    /// Every brick destroyed
    Won,
}

impl GamePhase {
    /// Terminal phases only accept a restart
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Won)
    }
}

/// Things that happened during a tick, for the session to act on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    BrickDestroyed { row: usize, col: usize },
    /// Score passed the previous best; carries the new best
    NewHighScore(u64),
    GameOver,
    Won,
}

/// The playing surface size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Board {
    pub width: f32,
    pub height: f32,
}

impl Board {
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Geometry derived once from the viewport size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub board: Board,
    pub brick_width: f32,
    pub brick_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Fixed vertical position of the paddle's top edge
    pub paddle_y: f32,
}

impl Layout {
    pub fn from_viewport(width: f32, height: f32) -> Self {
        let paddle_height = BRICK_HEIGHT;
        Self {
            board: Board { width, height },
            brick_width: width / BRICK_COLS as f32 - BRICK_WIDTH_SHRINK,
            brick_height: BRICK_HEIGHT,
            paddle_width: width / PADDLE_WIDTH_DIVISOR - PADDLE_WIDTH_SHRINK,
            paddle_height,
            paddle_y: height - paddle_height - PADDLE_BOTTOM_MARGIN,
        }
    }

    /// Top-left corner of the brick at (row, col)
    pub fn brick_origin(&self, row: usize, col: usize) -> Vec2 {
        Vec2::new(
            col as f32 * (self.brick_width + BRICK_PADDING) + BRICK_PADDING,
            row as f32 * (self.brick_height + BRICK_PADDING) + BRICK_PADDING + BRICK_OFFSET_TOP,
        )
    }

    /// Paddle x that centers it on the board
    pub fn paddle_start_x(&self) -> f32 {
        (self.board.width - self.paddle_width) / 2.0
    }

    /// Ball spawn point: board center, just above the paddle
    pub fn ball_start(&self, radius: f32) -> Vec2 {
        Vec2::new(
            self.board.width / 2.0,
            self.paddle_y - radius - BALL_SERVE_GAP,
        )
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Displacement per tick while a direction is held
    pub speed: f32,
}

impl Paddle {
    pub fn centered(layout: &Layout, speed: f32) -> Self {
        Self {
            x: layout.paddle_start_x(),
            y: layout.paddle_y,
            width: layout.paddle_width,
            height: layout.paddle_height,
            speed,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Apply the held directions, then clamp to `[0, board_width - width]`
    pub fn steer(&mut self, moving_left: bool, moving_right: bool, board_width: f32) {
        if moving_left {
            self.x -= self.speed;
        }
        if moving_right {
            self.x += self.speed;
        }
        self.x = self.x.clamp(0.0, (board_width - self.width).max(0.0));
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    /// Move by one tick of velocity
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}

/// A single brick
#[derive(Debug, Clone, PartialEq)]
pub struct Brick {
    pub rect: Rect,
    pub row: usize,
    pub col: usize,
    pub visible: bool,
}

/// Fixed `rows x cols` grid of bricks, stored row-major
#[derive(Debug, Clone, PartialEq)]
pub struct BrickGrid {
    rows: usize,
    cols: usize,
    bricks: Vec<Brick>,
}

impl BrickGrid {
    /// Build a fresh grid with every brick visible
    pub fn new(layout: &Layout, rows: usize, cols: usize) -> Self {
        let mut bricks = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let origin = layout.brick_origin(row, col);
                bricks.push(Brick {
                    rect: Rect::new(origin.x, origin.y, layout.brick_width, layout.brick_height),
                    row,
                    col,
                    visible: true,
                });
            }
        }
        Self { rows, cols, bricks }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Brick> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.bricks.get(row * self.cols + col)
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Brick> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.bricks.get_mut(row * self.cols + col)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Brick> {
        self.bricks.iter_mut()
    }

    pub fn visible(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| b.visible)
    }

    pub fn visible_count(&self) -> usize {
        self.visible().count()
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub layout: Layout,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickGrid,
    pub score: u64,
    /// Best score so far, seeded from storage
    pub high_score: u64,
    pub phase: GamePhase,
    /// Simulation tick counter (reset on restart)
    pub time_ticks: u64,
    /// Per-axis ball speed used when serving after a restart
    pub relaunch_speed: f32,
    rng: Pcg32,
}

impl GameState {
    /// Create a fresh session on the given layout
    pub fn new(layout: Layout, settings: &Settings, seed: u64, high_score: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = Ball {
            pos: layout.ball_start(settings.ball_radius),
            vel: serve_velocity(&mut rng, settings.serve_speed),
            radius: settings.ball_radius,
        };

        Self {
            layout,
            paddle: Paddle::centered(&layout, settings.paddle_speed),
            ball,
            bricks: BrickGrid::new(&layout, BRICK_ROWS, BRICK_COLS),
            score: 0,
            high_score,
            phase: GamePhase::Playing,
            time_ticks: 0,
            relaunch_speed: settings.relaunch_speed,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.layout.board
    }

    /// Total bricks in the grid; scoring this many wins
    pub fn total_bricks(&self) -> u64 {
        self.bricks.len() as u64
    }

    /// Full reset for a restart. The high score is kept.
    pub fn reset(&mut self) {
        let speed = self.relaunch_speed;
        self.paddle.x = self.layout.paddle_start_x();
        self.ball.pos = self.layout.ball_start(self.ball.radius);
        self.ball.vel = serve_velocity(&mut self.rng, speed);
        self.bricks = BrickGrid::new(&self.layout, self.bricks.rows(), self.bricks.cols());
        self.score = 0;
        self.time_ticks = 0;
        self.phase = GamePhase::Playing;
    }
}

/// Upward serve with a random horizontal direction
fn serve_velocity(rng: &mut Pcg32, speed: f32) -> Vec2 {
    let dx = if rng.random_bool(0.5) { speed } else { -speed };
    Vec2::new(dx, -speed)
}
