//! Shooting Gallery entry point
//!
//! In the browser: wires the DOM, keyboard and restart button to the
//! simulation and drives it from `requestAnimationFrame`.
//! Natively: runs a headless autopilot session and prints the result.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use shooting_gallery::Tuning;
    use shooting_gallery::consts::*;
    use shooting_gallery::platform::web::{Dom, report_fatal};
    use shooting_gallery::renderer::render_frame;
    use shooting_gallery::sim::{Control, GameState, InputState, steer, tick};
    use shooting_gallery::ui::HudSnapshot;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        dom: Dom,
        keys: InputState,
        /// Demo mode: the autopilot plays instead of the keyboard
        autopilot: bool,
        accumulator: f32,
        last_time: f64,
        /// What the HUD currently shows
        hud: Option<HudSnapshot>,
        /// Whether an animation frame is scheduled
        running: bool,
    }

    impl Game {
        fn new(dom: Dom, seed: u64, tuning: Tuning) -> Self {
            Self {
                state: GameState::new(seed, tuning),
                dom,
                keys: InputState::default(),
                autopilot: false,
                accumulator: 0.0,
                last_time: 0.0,
                hud: None,
                running: false,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let dt = dt.min(MAX_FRAME_DT);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = if self.autopilot {
                    steer(&self.state)
                } else {
                    self.keys.tick_input()
                };
                tick(&mut self.state, &input);
                self.accumulator -= SIM_DT;
                substeps += 1;

                // Clear one-shot inputs after processing
                self.keys.clear_edges();
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            render_frame(&mut self.dom.ctx, &self.state);
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self) {
            self.hud = Some(self.dom.sync_hud(&self.state, self.hud.as_ref()));
        }

        /// Start a fresh session
        fn restart(&mut self) {
            self.state.reset();
            self.keys.clear();
            self.accumulator = 0.0;
            self.last_time = 0.0;
            self.dom.sync_restart(&self.state);
            self.update_hud();
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Shooting Gallery starting...");

        let dom = match Dom::lookup() {
            Ok(dom) => dom,
            Err(e) => {
                report_fatal(&e);
                return Err(JsValue::from_str(&e.to_string()));
            }
        };

        // The canvas decides the playfield size
        let mut tuning = Tuning::load();
        let (width, height) = dom.canvas_size();
        tuning.field_width = width;
        tuning.field_height = height;
        if let Err(e) = tuning.validate() {
            log::warn!("Canvas {}x{} unusable ({}), using defaults", width, height, e);
            tuning = Tuning::default();
        }

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(dom, seed, tuning)));
        log::info!("Game initialized with seed: {}", seed);

        {
            let mut g = game.borrow_mut();
            g.dom.sync_restart(&g.state);
            g.update_hud();
        }

        setup_input_handlers(game.clone());
        setup_restart_button(game.clone());

        // Start game loop
        game.borrow_mut().running = true;
        request_animation_frame(game);

        log::info!("Shooting Gallery running!");
        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = game.borrow().dom.window.clone();

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                let code = event.code();
                match Control::from_code(&code) {
                    Some(control) => {
                        // Keep Space from scrolling the page
                        if control == Control::Fire {
                            event.prevent_default();
                        }
                        g.keys.press(control);
                    }
                    None if code == "KeyI" => {
                        g.autopilot = !g.autopilot;
                        log::info!("Autopilot: {}", g.autopilot);
                    }
                    None => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(control) = Control::from_code(&event.code()) {
                    game.borrow_mut().keys.release(control);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: key-up events are lost while unfocused
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().keys.clear();
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = game.borrow().dom.window.clone();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let keep_running = {
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

            if g.state.is_game_over() {
                // Terminal screen stays up until restart
                g.dom.sync_restart(&g.state);
                g.running = false;
                log::info!("Final score: {}", g.state.score);
            }
            g.running
        };

        if keep_running {
            request_animation_frame(game);
        }
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let button = game.borrow().dom.restart.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let resume = {
                let mut g = game.borrow_mut();
                if !g.state.is_game_over() {
                    return;
                }
                g.restart();
                log::info!("Game restarted (session {})", g.state.epoch);

                let resume = !g.running;
                g.running = true;
                resume
            };
            if resume {
                request_animation_frame(game.clone());
            }
        });
        let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use shooting_gallery::Tuning;
    use shooting_gallery::consts::TICK_RATE;
    use shooting_gallery::renderer::{RecordingSurface, render_frame};
    use shooting_gallery::sim::{GameState, steer, tick};

    /// Outcome of an autopilot run
    pub struct Summary {
        pub score: u64,
        pub lives: u8,
        pub ticks: u64,
        pub speed_multiplier: f32,
        pub banner: Option<String>,
    }

    /// Play one session under the autopilot for at most `max_ticks`
    pub fn run(seed: u64, tuning: Tuning, max_ticks: u64) -> Summary {
        let mut state = GameState::new(seed, tuning);
        let start = state.time_ticks;

        while !state.is_game_over() && state.time_ticks - start < max_ticks {
            let input = steer(&state);
            tick(&mut state, &input);

            if (state.time_ticks - start) % (u64::from(TICK_RATE) * 10) == 0 {
                log::info!(
                    "t={}s score={} multiplier={} lives={} speed={:.1}",
                    (state.time_ticks - start) / u64::from(TICK_RATE),
                    state.score,
                    state.multiplier,
                    state.lives,
                    state.speed_multiplier
                );
            }
        }

        let mut surface = RecordingSurface::default();
        render_frame(&mut surface, &state);

        Summary {
            score: state.score,
            lives: state.lives,
            ticks: state.time_ticks - start,
            speed_multiplier: state.speed_multiplier,
            banner: surface.texts().first().map(|s| s.to_string()),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use shooting_gallery::Tuning;
    use shooting_gallery::consts::TICK_RATE;

    /// Five minutes of play
    const MAX_TICKS: u64 = 5 * 60 * TICK_RATE as u64;

    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0x5EED);
    log::info!("Shooting Gallery (native) starting headless run, seed {}", seed);

    let summary = headless::run(seed, Tuning::load(), MAX_TICKS);

    println!(
        "Played {:.1}s: score {}, lives left {}, speed x{:.1}",
        summary.ticks as f32 / TICK_RATE as f32,
        summary.score,
        summary.lives,
        summary.speed_multiplier
    );
    if let Some(banner) = summary.banner {
        println!("{}", banner);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
