//! Hit sound playback. Failures never reach the simulation.

use wasm_bindgen::prelude::*;
use web_sys::HtmlAudioElement;

pub const HIT_SOUND_URL: &str = "./sound/wood_plank_flicks.ogg";

pub struct HitSound {
    element: Option<HtmlAudioElement>,
    // Rejection handler for play() promises (autoplay policy, missing file)
    on_reject: Closure<dyn FnMut(JsValue)>,
}

impl HitSound {
    pub fn new(src: &str) -> Self {
        let element = match HtmlAudioElement::new_with_src(src) {
            Ok(element) => Some(element),
            Err(err) => {
                log::warn!("hit sound unavailable: {err:?}");
                None
            }
        };
        Self {
            element,
            on_reject: Closure::new(|_err: JsValue| {}),
        }
    }

    /// Fire and forget
    pub fn play(&self) {
        let Some(element) = &self.element else {
            return;
        };
        if let Ok(promise) = element.play() {
            let _ = promise.catch(&self.on_reject);
        }
    }
}
