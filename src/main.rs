//! Reef Drift entry point
//!
//! Native builds run a headless session with a simple autopilot; the browser
//! build binds the canvas, keyboard and counter and runs one tick per frame.

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use reef_drift::Settings;
    use reef_drift::platform::web::{DomCounter, bind_keyboard, load_sprite};
    use reef_drift::platform::{InputState, forward_events};
    use reef_drift::renderer::Renderer;
    use reef_drift::renderer::canvas::CanvasRenderer;
    use reef_drift::sim::{GameState, tick};

    const SPRITE_SRC: &str = "turtle.png";

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: Rc<InputState>,
        renderer: CanvasRenderer,
        counter: DomCounter,
        start_time: f64,
    }

    impl Game {
        fn frame(&mut self, now_ms: f64) {
            let input = self.input.sample();
            tick(&mut self.state, &input);

            let events = self.state.drain_events();
            forward_events(&events, &mut self.counter);

            let time = ((now_ms - self.start_time) / 1000.0) as f32;
            self.renderer.render(&self.state.snapshot(), time);
        }
    }

    fn request_animation_frame(f: &Closure<dyn FnMut(f64)>) {
        if let Some(window) = web_sys::window() {
            let _ = window.request_animation_frame(f.as_ref().unchecked_ref());
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!("Reef Drift starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let settings = Settings::load();
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let state = GameState::new(&settings, seed);
        log::info!("Game initialized with seed: {}", seed);

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no #gameCanvas element")?
            .dyn_into()?;
        canvas.set_width(settings.arena_width as u32);
        canvas.set_height(settings.arena_height as u32);
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("2d context unavailable")?
            .dyn_into()?;

        let input = Rc::new(InputState::new());
        bind_keyboard(&window, Rc::clone(&input))?;

        let mut counter = DomCounter::find(&document);
        reef_drift::platform::CounterDisplay::show_collected(&mut counter, 0);

        let game = Rc::new(RefCell::new(Game {
            state,
            input,
            renderer: CanvasRenderer::new(ctx, load_sprite(SPRITE_SRC)),
            counter,
            start_time: js_sys::Date::now(),
        }));

        // Self-rescheduling frame callback
        let callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let next = Rc::clone(&callback);
        *callback.borrow_mut() = Some(Closure::new(move |now: f64| {
            game.borrow_mut().frame(now);
            if let Some(cb) = next.borrow().as_ref() {
                request_animation_frame(cb);
            }
        }));

        if let Some(cb) = callback.borrow().as_ref() {
            request_animation_frame(cb);
        }

        log::info!("Reef Drift running!");
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), wasm_bindgen::JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;

    use reef_drift::Settings;
    use reef_drift::consts::FRAME_RATE;
    use reef_drift::platform::{LogDisplay, forward_events};
    use reef_drift::renderer::{HeadlessRenderer, Renderer};
    use reef_drift::sim::{GameState, tick};

    env_logger::init();
    log::info!("Reef Drift (native) starting...");

    // Usage: reef-drift [settings.json] [ticks]
    let mut args = std::env::args().skip(1);
    let settings_path = args.next().map(PathBuf::from);
    let ticks: u64 = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            log::warn!("Bad tick count ({}); running 3600 ticks", e);
            3600
        }
        None => 3600,
    };

    let settings = Settings::load_or_default(settings_path.as_deref());
    let seed = settings.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });

    let mut state = GameState::new(&settings, seed);
    let mut renderer = HeadlessRenderer::default();
    let mut display = LogDisplay::default();
    log::info!("Game initialized with seed: {}", seed);

    for frame in 0..ticks {
        let input = autopilot::steer(&state);
        tick(&mut state, &input);
        forward_events(&state.drain_events(), &mut display);
        renderer.render(&state.snapshot(), frame as f32 / FRAME_RATE as f32);
    }

    println!(
        "{} ticks: {} plants collected, reef stage {} (growth {:.0}%), {} frames rendered",
        state.time_ticks,
        state.reef.collected_total,
        state.reef.stage,
        state.reef.growth * 100.0,
        renderer.frames
    );
}

#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use reef_drift::sim::{GameState, TickInput};

    /// Dead zone so the turtle does not jitter around its target
    const SLACK: f32 = 3.0;

    /// Head for the nearest uncollected plant
    pub fn steer(state: &GameState) -> TickInput {
        let me = state.player.rect().center();
        let target = state
            .items
            .iter()
            .filter(|item| !item.collected)
            .map(|item| item.rect().center())
            .min_by(|a, b| {
                a.distance_squared(me)
                    .partial_cmp(&b.distance_squared(me))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

        let Some(target) = target else {
            return TickInput::default();
        };
        let delta = target - me;
        TickInput {
            left: delta.x < -SLACK,
            right: delta.x > SLACK,
            up: delta.y < -SLACK,
            down: delta.y > SLACK,
        }
    }
}
