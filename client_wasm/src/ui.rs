//! Menu and game-over panels

use game_core::{Difficulty, StartPayload};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement};

pub const MENU_PANEL: &str = "menuPanel";
pub const START_BUTTON: &str = "startButton";
pub const DIFFICULTY_SELECT: &str = "difficultySelect";
pub const AUTO_LEFT_CHECK: &str = "autoPlayLeftCheck";
pub const GAME_OVER_PANEL: &str = "gameOverPanel";
pub const GAME_OVER_TITLE: &str = "gameOverTitle";
pub const RESTART_BUTTON: &str = "restartButton";

const HIDDEN: &str = "hidden";

fn element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element #{id}")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Element #{id} has the wrong type")))
}

fn set_hidden(element: &Element, hidden: bool) -> Result<(), JsValue> {
    if hidden {
        element.class_list().add_1(HIDDEN)
    } else {
        element.class_list().remove_1(HIDDEN)
    }
}

/// Read the menu form
pub fn read_start_payload(document: &Document) -> Result<StartPayload, JsValue> {
    let difficulty: HtmlSelectElement = element(document, DIFFICULTY_SELECT)?;
    let auto_left: HtmlInputElement = element(document, AUTO_LEFT_CHECK)?;
    Ok(StartPayload::new(
        Difficulty::from_key(&difficulty.value()),
        auto_left.checked(),
    ))
}

/// Both panels away while a match runs
pub fn hide_panels(document: &Document) -> Result<(), JsValue> {
    set_hidden(&element(document, MENU_PANEL)?, true)?;
    set_hidden(&element(document, GAME_OVER_PANEL)?, true)
}

pub fn show_menu(document: &Document) -> Result<(), JsValue> {
    set_hidden(&element(document, MENU_PANEL)?, false)?;
    set_hidden(&element(document, GAME_OVER_PANEL)?, true)
}

pub fn show_game_over(document: &Document, title: &str) -> Result<(), JsValue> {
    let heading: Element = element(document, GAME_OVER_TITLE)?;
    heading.set_text_content(Some(title));
    set_hidden(&element(document, GAME_OVER_PANEL)?, false)
}

/// Attach a click handler that lives as long as the page
pub fn on_click(
    document: &Document,
    id: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<(), JsValue> {
    let target: Element = element(document, id)?;
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Whether the host page carries the menu markup
pub fn has_panels(document: &Document) -> bool {
    [MENU_PANEL, GAME_OVER_PANEL, START_BUTTON, RESTART_BUTTON]
        .iter()
        .all(|id| document.get_element_by_id(id).is_some())
}
