//! Frame composition: state in, drawing calls out

use glam::Vec2;

use super::{Shadow, Surface, TextAlign, colors, fonts};
use crate::sim::{GamePhase, GameState};

/// Shadow under the paddle and bricks
const DROP_SHADOW: Shadow = Shadow {
    color: colors::SHADOW,
    blur: 10.0,
    offset: Vec2::new(4.0, 4.0),
};

/// HUD text anchors, measured from the right edge
const SCORE_INSET: f32 = 150.0;
const HIGH_SCORE_INSET: f32 = 350.0;
const HUD_BASELINE: f32 = 35.0;

/// Gap between banner title and its hint line
const BANNER_HINT_GAP: f32 = 50.0;

/// Draw the whole playing field
pub fn draw_frame(state: &GameState, surface: &mut dyn Surface) {
    surface.clear(state.board().bounds());
    draw_paddle(state, surface);
    draw_ball(state, surface);
    draw_bricks(state, surface);
    draw_score(state, surface);
}

fn draw_paddle(state: &GameState, surface: &mut dyn Surface) {
    surface.fill_rect(state.paddle.rect(), colors::PADDLE, Some(DROP_SHADOW));
}

fn draw_ball(state: &GameState, surface: &mut dyn Surface) {
    surface.fill_circle(state.ball.pos, state.ball.radius, colors::BALL);
}

fn draw_bricks(state: &GameState, surface: &mut dyn Surface) {
    for brick in state.bricks.visible() {
        surface.fill_rect(brick.rect, colors::brick(brick.row), Some(DROP_SHADOW));
    }
}

fn draw_score(state: &GameState, surface: &mut dyn Surface) {
    let width = state.board().width;
    surface.fill_text(
        &format!("Score: {}", state.score),
        Vec2::new(width - SCORE_INSET, HUD_BASELINE),
        fonts::HUD,
        colors::TEXT,
        TextAlign::Left,
    );
    surface.fill_text(
        &format!("High Score: {}", state.high_score),
        Vec2::new(width - HIGH_SCORE_INSET, HUD_BASELINE),
        fonts::HUD,
        colors::TEXT,
        TextAlign::Left,
    );
}

/// Draw the end-of-game message over whatever is on screen.
/// Does nothing while playing.
pub fn draw_banner(state: &GameState, surface: &mut dyn Surface) {
    let title = match state.phase {
        GamePhase::GameOver => "GAME OVER",
        GamePhase::Won => "YOU WIN!",
        GamePhase::Playing => return,
    };

    let board = state.board();
    let center = Vec2::new(board.width / 2.0, board.height / 2.0);
    surface.fill_text(title, center, fonts::BANNER, colors::TEXT, TextAlign::Center);
    surface.fill_text(
        "Press 'R' to restart",
        center + Vec2::new(0.0, BANNER_HINT_GAP),
        fonts::HUD,
        colors::TEXT,
        TextAlign::Center,
    );
}
