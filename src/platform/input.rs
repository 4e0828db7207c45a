//! Keyboard input to paddle intent
//!
//! Intent flags are level-triggered: key-down sets, key-up clears, and the
//! simulation samples them every tick. Nothing is queued.

use crate::sim::{GamePhase, TickInput};

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Restart,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value. Unknown keys map to `None`.
    pub fn from_dom(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            k if k.eq_ignore_ascii_case("r") => Some(Key::Restart),
            _ => None,
        }
    }
}

/// Commands raised by input, as opposed to intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Restart,
}

/// Currently held directions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub moving_left: bool,
    pub moving_right: bool,
}

impl InputState {
    /// Handle a key press. Restart is only honored in a terminal phase.
    pub fn key_down(&mut self, key: Key, phase: GamePhase) -> Option<Command> {
        match key {
            Key::Left => self.moving_left = true,
            Key::Right => self.moving_right = true,
            Key::Restart if phase.is_terminal() => return Some(Command::Restart),
            Key::Restart => {}
        }
        None
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left => self.moving_left = false,
            Key::Right => self.moving_right = false,
            Key::Restart => {}
        }
    }

    /// Snapshot for the next tick
    pub fn sample(&self) -> TickInput {
        TickInput {
            moving_left: self.moving_left,
            moving_right: self.moving_right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dom() {
        assert_eq!(Key::from_dom("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_dom("ArrowRight"), Some(Key::Right));
        assert_eq!(Key::from_dom("r"), Some(Key::Restart));
        assert_eq!(Key::from_dom("R"), Some(Key::Restart));
        assert_eq!(Key::from_dom("ArrowUp"), None);
        assert_eq!(Key::from_dom(""), None);
    }

    #[test]
    fn test_flags_are_level_triggered() {
        let mut input = InputState::default();
        input.key_down(Key::Left, GamePhase::Playing);
        input.key_down(Key::Left, GamePhase::Playing);
        assert!(input.sample().moving_left);
        assert!(input.sample().moving_left);

        input.key_down(Key::Right, GamePhase::Playing);
        input.key_up(Key::Left);
        assert_eq!(
            input.sample(),
            TickInput {
                moving_left: false,
                moving_right: true,
            }
        );
    }

    #[test]
    fn test_restart_only_when_terminal() {
        let mut input = InputState::default();
        assert_eq!(input.key_down(Key::Restart, GamePhase::Playing), None);
        assert_eq!(
            input.key_down(Key::Restart, GamePhase::GameOver),
            Some(Command::Restart)
        );
        assert_eq!(
            input.key_down(Key::Restart, GamePhase::Won),
            Some(Command::Restart)
        );
    }
}
