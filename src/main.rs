//! Minecraftoid entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use minecraftoid::consts::*;
    use minecraftoid::platform::FrameScheduler;
    use minecraftoid::render::{CanvasRenderer, Sprites};
    use minecraftoid::sim::{GamePhase, GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
        accumulator: f32,
        last_time: f64,
        input: TickInput,
        // Track phase for one-shot transition logging
        last_phase: GamePhase,
    }

    impl Game {
        fn new(seed: u64, renderer: CanvasRenderer) -> Self {
            Self {
                state: GameState::new(seed),
                renderer,
                accumulator: 0.0,
                last_time: 0.0,
                input: TickInput::default(),
                last_phase: GamePhase::Menu,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = self.input;
                tick(&mut self.state, &input);
                self.accumulator -= SIM_DT;
                substeps += 1;
            }

            let current_phase = self.state.phase;
            if current_phase != self.last_phase {
                if current_phase == GamePhase::GameOver {
                    log::info!("final score: {}", self.state.score);
                }
                self.last_phase = current_phase;
            }
        }

        /// Render the current frame
        fn render(&self) {
            self.renderer.render(&self.state);
        }

        /// Reset game state and frame clock for a fresh round
        fn begin_round(&mut self) {
            self.state.start_round();
            self.accumulator = 0.0;
            self.last_time = 0.0;
            self.input = TickInput::default();
            self.last_phase = GamePhase::Running;
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            // Update score
            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&format!("Score: {}", self.state.score)));
            }

            // Update lives
            if let Some(el) = document.get_element_by_id("lives") {
                el.set_text_content(Some(&format!("Lives: {}", self.state.lives)));
            }

            sync_overlays(&document, &self.state);
        }
    }

    /// Show the overlay matching the current phase and hide the rest
    fn sync_overlays(document: &Document, state: &GameState) {
        // Menu overlay
        if let Some(el) = document.get_element_by_id("menu-overlay") {
            if state.phase == GamePhase::Menu {
                let _ = el.set_attribute("class", "overlay");
            } else {
                let _ = el.set_attribute("class", "overlay hidden");
            }
        }

        // Game over overlay
        if let Some(el) = document.get_element_by_id("game-over-overlay") {
            if state.phase == GamePhase::GameOver {
                let _ = el.set_attribute("class", "overlay");
                // Update final stats
                if let Some(score_el) = document.get_element_by_id("final-score") {
                    score_el.set_text_content(Some(&state.score.to_string()));
                }
            } else {
                let _ = el.set_attribute("class", "overlay hidden");
            }
        }
    }

    /// Arm the animation-frame loop. The loop parks itself once the run
    /// ends, so restarting never stacks a second loop on top.
    fn start_frame_loop(game: &Rc<RefCell<Game>>, scheduler: &FrameScheduler) {
        let game = game.clone();
        let handle = scheduler.clone();
        scheduler.start(move |time: f64| {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            g.update_hud();

            if g.state.phase == GamePhase::GameOver {
                handle.stop();
            }
        });
    }

    /// Wire the start and restart buttons. Both begin a fresh round.
    fn setup_round_buttons(
        document: &Document,
        game: &Rc<RefCell<Game>>,
        scheduler: &FrameScheduler,
    ) {
        for id in ["start-btn", "restart-btn"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let scheduler = scheduler.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    game.borrow_mut().begin_round();
                    start_frame_loop(&game, &scheduler);
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    /// Keyboard handlers: arrow keys set and clear the held-direction
    /// flags the simulation reads each tick.
    fn setup_keyboard(game: &Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowRight" | "Right" => g.input.move_right = true,
                    "ArrowLeft" | "Left" => g.input.move_left = true,
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowRight" | "Right" => g.input.move_right = false,
                    "ArrowLeft" | "Left" => g.input.move_left = false,
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Minecraftoid starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(PLAYFIELD_WIDTH as u32);
        canvas.set_height(PLAYFIELD_HEIGHT as u32);

        let sprites = Sprites::load().expect("Failed to create sprite images");
        let background = sprites.background.image().clone();
        let renderer = CanvasRenderer::new(&canvas, sprites).expect("Failed to create renderer");

        // Initialize game
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, renderer)));

        log::info!("Game initialized with seed: {}", seed);

        let scheduler = FrameScheduler::new();
        setup_keyboard(&game);
        setup_round_buttons(&document, &game, &scheduler);

        // The menu is a still frame; the animation loop only runs while
        // a round is live
        {
            let g = game.borrow();
            g.render();
            g.update_hud();
        }

        // Sprites load asynchronously, so repaint the menu once the
        // background arrives
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow().render();
            });
            let _ = background
                .add_event_listener_with_callback("load", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        log::info!("Minecraftoid ready");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use minecraftoid::consts::PADDLE_WIDTH;
    use minecraftoid::sim::{GamePhase, GameState, TickInput, tick};

    env_logger::init();
    log::info!("Minecraftoid (native) starting...");

    // Headless demo: a scripted paddle chases the ball for up to a
    // minute of simulated play
    let mut state = GameState::new(0xC0FFEE);
    state.start_round();

    let mut steps = 0u32;
    while state.phase == GamePhase::Running && steps < 60 * 60 {
        let paddle_mid = state.paddle.x + PADDLE_WIDTH / 2.0;
        let input = TickInput {
            move_left: state.ball.pos.x < paddle_mid - 4.0,
            move_right: state.ball.pos.x > paddle_mid + 4.0,
        };
        tick(&mut state, &input);
        steps += 1;
    }

    println!(
        "demo over after {} steps: score {}, lives {}, {} bricks standing",
        steps,
        state.score,
        state.lives,
        state.alive_brick_count()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
