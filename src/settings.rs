//! Per-tick tuning values
//!
//! Supplied by the host when a session is built. Nothing is read from
//! storage; the key-value store only holds the high score.

use crate::consts::*;

/// Game settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Ball displacement per tick on each axis for the first serve
    pub serve_speed: f32,
    /// Ball displacement per tick on each axis after a restart
    pub relaunch_speed: f32,
    /// Paddle displacement per tick while an arrow is held
    pub paddle_speed: f32,
    pub ball_radius: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            serve_speed: BALL_SERVE_SPEED,
            relaunch_speed: BALL_RELAUNCH_SPEED,
            paddle_speed: PADDLE_SPEED,
            ball_radius: BALL_RADIUS,
        }
    }
}

impl Settings {
    /// Replace non-positive or non-finite values with defaults
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let pick = |value: f32, fallback: f32| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                fallback
            }
        };
        Self {
            serve_speed: pick(self.serve_speed, defaults.serve_speed),
            relaunch_speed: pick(self.relaunch_speed, defaults.relaunch_speed),
            paddle_speed: pick(self.paddle_speed, defaults.paddle_speed),
            ball_radius: pick(self.ball_radius, defaults.ball_radius),
        }
    }
}
