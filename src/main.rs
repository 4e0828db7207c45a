//! Brickfall entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use brickfall::platform::{Key, LocalStore};
    use brickfall::renderer::CanvasSurface;
    use brickfall::{FrameScheduler, Game, Settings, run_frame};

    /// Everything the browser callbacks share
    struct Host {
        game: RefCell<Game<LocalStore>>,
        surface: RefCell<CanvasSurface>,
    }

    /// Schedules the next frame with `requestAnimationFrame`
    struct AnimationFrameScheduler {
        host: Rc<Host>,
    }

    impl FrameScheduler for AnimationFrameScheduler {
        fn request_next_tick(&mut self) {
            request_animation_frame(self.host.clone());
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Brickfall starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        // Board matches the viewport at startup and never changes
        let width = window.inner_width()?.as_f64().unwrap_or(800.0);
        let height = window.inner_height()?.as_f64().unwrap_or(600.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let seed = js_sys::Date::now() as u64;
        let host = Rc::new(Host {
            game: RefCell::new(Game::new(
                width as f32,
                height as f32,
                Settings::default(),
                LocalStore::new(),
                seed,
            )),
            surface: RefCell::new(CanvasSurface::new(ctx)),
        });

        setup_key_handlers(&document, host.clone())?;

        // Start game loop
        request_animation_frame(host);

        log::info!("Brickfall running!");
        Ok(())
    }

    fn setup_key_handlers(document: &web_sys::Document, host: Rc<Host>) -> Result<(), JsValue> {
        // Key down: intent, or restart from a terminal phase
        {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                if Key::from_dom(&key).is_some() {
                    event.prevent_default();
                }
                let restarted = host.game.borrow_mut().key_down(&key);
                if restarted {
                    // The loop stopped in the terminal phase; start a new chain
                    request_animation_frame(host.clone());
                }
            });
            document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up: clear intent
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                host.game.borrow_mut().key_up(&event.key());
            });
            document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(host: Rc<Host>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window to schedule frames on");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(host);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(host: Rc<Host>) {
        let mut scheduler = AnimationFrameScheduler { host: host.clone() };
        let mut game = host.game.borrow_mut();
        let mut surface = host.surface.borrow_mut();
        run_frame(&mut game, &mut *surface, &mut scheduler);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use brickfall::platform::MemoryStore;
    use brickfall::renderer::DrawList;
    use brickfall::{FrameScheduler, Game, Settings, run_frame};

    const BOARD_WIDTH: f32 = 800.0;
    const BOARD_HEIGHT: f32 = 600.0;
    const SESSIONS: u32 = 2;
    /// Frame budget per session
    const MAX_FRAMES: u32 = 20_000;
    /// Paddle holds still while the ball is this close to its aim point
    const DEAD_ZONE: f32 = 4.0;

    /// Stands in for the display refresh: remembers whether a frame was asked for
    #[derive(Default)]
    struct PendingFrame {
        requested: bool,
    }

    impl PendingFrame {
        fn take(&mut self) -> bool {
            std::mem::take(&mut self.requested)
        }
    }

    impl FrameScheduler for PendingFrame {
        fn request_next_tick(&mut self) {
            self.requested = true;
        }
    }

    /// Hold the arrow that moves the paddle under the ball, aiming slightly
    /// off-center so bounces keep changing direction
    fn steer(game: &mut Game<MemoryStore>, frame: u32) {
        let state = game.state();
        let offset = if (frame / 240) % 2 == 0 { 12.0 } else { -12.0 };
        let aim = state.ball.pos.x + offset;
        let center = state.paddle.rect().center_x();

        if aim < center - DEAD_ZONE {
            game.key_up("ArrowRight");
            game.key_down("ArrowLeft");
        } else if aim > center + DEAD_ZONE {
            game.key_up("ArrowLeft");
            game.key_down("ArrowRight");
        } else {
            game.key_up("ArrowLeft");
            game.key_up("ArrowRight");
        }
    }

    pub fn run(seed: u64) {
        let mut game = Game::new(
            BOARD_WIDTH,
            BOARD_HEIGHT,
            Settings::default(),
            MemoryStore::new(),
            seed,
        );
        let mut surface = DrawList::new();
        let mut scheduler = PendingFrame::default();

        for session in 1..=SESSIONS {
            scheduler.request_next_tick();
            let mut frames = 0;
            while scheduler.take() && frames < MAX_FRAMES {
                steer(&mut game, frames);
                surface.reset();
                run_frame(&mut game, &mut surface, &mut scheduler);
                frames += 1;
            }

            let state = game.state();
            log::info!(
                "Session {}: {:?} with score {} ({} bricks left, best {}) after {} frames",
                session,
                state.phase,
                state.score,
                state.bricks.visible_count(),
                game.high_score(),
                frames
            );

            if !game.phase().is_terminal() {
                log::info!("Frame budget exhausted, stopping");
                break;
            }
            if session < SESSIONS {
                game.key_up("ArrowLeft");
                game.key_up("ArrowRight");
                game.key_down("r");
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Brickfall (native) starting...");
    log::info!("Native mode runs a headless autopilot - run with `trunk serve` for the web version");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    headless::run(seed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
