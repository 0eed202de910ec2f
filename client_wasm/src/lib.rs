//! Browser client for Neon Pong
//!
//! Owns the glue around `game_core`: keyboard input, the Canvas 2D renderer,
//! the hit sound, the menu/game-over panels and the animation-frame loop.
//! One tick per frame: simulate, play sounds, then draw.

#![cfg(target_arch = "wasm32")]

mod audio;
mod input;
mod logger;
mod renderer;
mod ui;

use std::cell::RefCell;
use std::rc::Rc;

use audio::{HitSound, HIT_SOUND_URL};
use game_core::{Config, Game, ManualInput, StartPayload};
use renderer::Renderer;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, KeyboardEvent};

/// Main client state
struct App {
    game: Game,
    renderer: Renderer,
    hit_sound: HitSound,
    input: Rc<RefCell<ManualInput>>,
    document: Document,
    has_panels: bool,
}

impl App {
    fn new(canvas: HtmlCanvasElement, document: Document) -> Result<Self, JsValue> {
        let renderer = Renderer::new(&canvas)?;
        let config =
            Config::default().with_canvas(renderer.width() as f32, renderer.height() as f32);
        let seed = js_sys::Date::now() as u64;
        let has_panels = ui::has_panels(&document);
        if !has_panels {
            log::warn!("menu panels not found, drive the game through start_game()");
        }

        Ok(Self {
            game: Game::new(config, seed),
            renderer,
            hit_sound: HitSound::new(HIT_SOUND_URL),
            input: Rc::new(RefCell::new(ManualInput::new())),
            document,
            has_panels,
        })
    }

    fn start(&mut self, payload: StartPayload) -> Result<(), JsValue> {
        if !self.game.start(payload).success {
            return Ok(());
        }
        if self.has_panels {
            ui::hide_panels(&self.document)?;
        }
        Ok(())
    }

    fn return_to_menu(&mut self) -> Result<(), JsValue> {
        self.game.return_to_menu();
        if self.has_panels {
            ui::show_menu(&self.document)?;
        }
        Ok(())
    }

    fn frame(&mut self) -> Result<(), JsValue> {
        let input = *self.input.borrow();
        let report = self.game.tick(&input);

        if report.events.any_hit() {
            self.hit_sound.play();
        }
        if let Some(result) = report.game_over {
            if self.has_panels {
                ui::show_game_over(&self.document, result.title())?;
            }
        }

        self.renderer.draw(&self.game.snapshot(), &self.game.config)
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn with_app<R>(f: impl FnOnce(&mut App) -> Result<R, JsValue>) -> Result<R, JsValue> {
    APP.with(|cell| match cell.borrow_mut().as_mut() {
        Some(app) => f(app),
        None => Err(JsValue::from_str("Game not initialized")),
    })
}

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))
}

/// Install panic hook and console logging as soon as the module loads
#[wasm_bindgen(start)]
pub fn init_runtime() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
}

/// Create the game on `canvas`, wire inputs and panels, and start the loop
#[wasm_bindgen]
pub fn init_game(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    let document = document()?;
    let app = App::new(canvas, document.clone())?;
    let input = app.input.clone();
    let has_panels = app.has_panels;
    APP.with(|cell| *cell.borrow_mut() = Some(app));

    install_keyboard(&document, input)?;
    if has_panels {
        install_panels(&document)?;
    }
    start_loop()?;

    log::info!("game initialized");
    Ok(())
}

/// Start a match. `payload` is `{ difficulty: "easy" | "normal" | "hard", autoLeft: bool }`.
#[wasm_bindgen]
pub fn start_game(payload: JsValue) -> Result<(), JsValue> {
    let payload: StartPayload = serde_wasm_bindgen::from_value(payload)?;
    with_app(|app| app.start(payload))
}

#[wasm_bindgen]
pub fn return_to_menu() -> Result<(), JsValue> {
    with_app(|app| app.return_to_menu())
}

/// Current render snapshot as a plain JS object
#[wasm_bindgen]
pub fn snapshot() -> Result<JsValue, JsValue> {
    with_app(|app| Ok(serde_wasm_bindgen::to_value(&app.game.snapshot())?))
}

/// Current state as "MENU" | "PLAYING" | "GAME_OVER"
#[wasm_bindgen]
pub fn game_state() -> Result<String, JsValue> {
    with_app(|app| Ok(app.game.state().as_str().to_string()))
}

fn install_keyboard(document: &Document, held: Rc<RefCell<ManualInput>>) -> Result<(), JsValue> {
    let held_down = held.clone();
    let on_key_down = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        if input::handle_key_down(&event.key(), &mut held_down.borrow_mut()) {
            event.prevent_default();
        }
    });
    document.add_event_listener_with_callback("keydown", on_key_down.as_ref().unchecked_ref())?;
    on_key_down.forget();

    let on_key_up = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        if input::handle_key_up(&event.key(), &mut held.borrow_mut()) {
            event.prevent_default();
        }
    });
    document.add_event_listener_with_callback("keyup", on_key_up.as_ref().unchecked_ref())?;
    on_key_up.forget();

    Ok(())
}

fn install_panels(document: &Document) -> Result<(), JsValue> {
    let form = document.clone();
    ui::on_click(document, ui::START_BUTTON, move |_event| {
        let result =
            ui::read_start_payload(&form).and_then(|payload| with_app(|app| app.start(payload)));
        if let Err(err) = result {
            log::error!("start failed: {err:?}");
        }
    })?;

    ui::on_click(document, ui::RESTART_BUTTON, move |_event| {
        if let Err(err) = with_app(|app| app.return_to_menu()) {
            log::error!("restart failed: {err:?}");
        }
    })
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn request_frame(callback: &Closure<dyn FnMut(f64)>) -> Result<(), JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .request_animation_frame(callback.as_ref().unchecked_ref())?;
    Ok(())
}

fn start_loop() -> Result<(), JsValue> {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::new(move |_timestamp: f64| {
        if let Err(err) = with_app(|app| app.frame()) {
            log::error!("frame failed: {err:?}");
        }
        if let Some(callback) = f.borrow().as_ref() {
            if let Err(err) = request_frame(callback) {
                log::error!("requestAnimationFrame failed: {err:?}");
            }
        }
    }));

    match g.borrow().as_ref() {
        Some(callback) => request_frame(callback),
        None => Ok(()),
    }
}
