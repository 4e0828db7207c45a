//! Session object and frame-driven loop
//!
//! [`Game`] owns everything a session mutates. The host drives it one frame
//! at a time through [`run_frame`], which asks the [`FrameScheduler`] for the
//! next frame only while the game is still playing.

use crate::highscores::HighScore;
use crate::platform::input::{Command, InputState, Key};
use crate::platform::storage::KeyValueStore;
use crate::renderer::{Surface, draw_banner, draw_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, Layout, tick};

/// Host hook for continuing the loop (`requestAnimationFrame` on the web)
pub trait FrameScheduler {
    fn request_next_tick(&mut self);
}

/// What the loop should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Still playing, schedule another frame
    Continue,
    /// Terminal phase reached, banner drawn, loop stops
    Stop,
}

/// One brick-breaker session
pub struct Game<S: KeyValueStore> {
    state: GameState,
    input: InputState,
    high_score: HighScore,
    settings: Settings,
    store: S,
}

impl<S: KeyValueStore> Game<S> {
    /// Build a session for a viewport. Only the best score is read from
    /// `store`; tuning comes from the host.
    pub fn new(width: f32, height: f32, settings: Settings, store: S, seed: u64) -> Self {
        let settings = settings.sanitized();
        let high_score = HighScore::load(&store);
        let layout = Layout::from_viewport(width, height);
        log::info!(
            "Board {}x{}, {} bricks, seed {}",
            width,
            height,
            crate::consts::TOTAL_BRICKS,
            seed
        );

        Self {
            state: GameState::new(layout, &settings, seed, high_score.best),
            input: InputState::default(),
            high_score,
            settings,
            store,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for hosts and tests that stage positions
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn high_score(&self) -> u64 {
        self.high_score.best
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Handle a DOM key press. Returns true when a restart happened and the
    /// host must start the frame loop again.
    pub fn key_down(&mut self, key: &str) -> bool {
        let Some(key) = Key::from_dom(key) else {
            return false;
        };
        match self.input.key_down(key, self.state.phase) {
            Some(Command::Restart) => {
                self.restart();
                true
            }
            None => false,
        }
    }

    pub fn key_up(&mut self, key: &str) {
        if let Some(key) = Key::from_dom(key) {
            self.input.key_up(key);
        }
    }

    /// Reset everything except the best score
    pub fn restart(&mut self) {
        self.state.reset();
        log::info!("Game restarted (best {})", self.high_score.best);
    }

    /// One frame: draw, tick, then either continue or show the banner.
    ///
    /// In a terminal phase this only redraws the banner.
    pub fn frame(&mut self, surface: &mut dyn Surface) -> FrameOutcome {
        if self.state.phase.is_terminal() {
            draw_banner(&self.state, surface);
            return FrameOutcome::Stop;
        }

        draw_frame(&self.state, surface);

        let events = tick(&mut self.state, &self.input.sample());
        for event in events {
            self.handle_event(event);
        }

        if self.state.phase.is_terminal() {
            draw_banner(&self.state, surface);
            FrameOutcome::Stop
        } else {
            FrameOutcome::Continue
        }
    }

    fn handle_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::NewHighScore(score) => {
                self.high_score.record(score, &mut self.store);
            }
            GameEvent::GameOver => {
                log::info!(
                    "Game over: score {} after {} ticks",
                    self.state.score,
                    self.state.time_ticks
                );
            }
            GameEvent::Won => {
                log::info!("All bricks cleared in {} ticks", self.state.time_ticks);
            }
            GameEvent::BrickDestroyed { .. } => {}
        }
    }
}

/// Run one frame and keep the loop going while the game is playing
pub fn run_frame<S: KeyValueStore>(
    game: &mut Game<S>,
    surface: &mut dyn Surface,
    scheduler: &mut dyn FrameScheduler,
) -> FrameOutcome {
    let outcome = game.frame(surface);
    if outcome == FrameOutcome::Continue {
        scheduler.request_next_tick();
    }
    outcome
}
