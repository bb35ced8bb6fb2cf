use super::Wiring;
use crate::constants::SEEK_STEP_SEC;
use crate::dom::Listeners;
use crate::input::{self, KeyAction};
use crate::overlay;
use wasm_bindgen::JsCast;
use web_sys as web;

fn typing_into_field(ev: &web::Event) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| input::is_text_entry_tag(&el.tag_name()))
        .unwrap_or(false)
}

fn toggle_fullscreen(document: &web::Document, container: Option<&web::Element>) {
    if document.fullscreen_element().is_some() {
        document.exit_fullscreen();
    } else if let Some(el) = container {
        if let Err(e) = el.request_fullscreen() {
            log::warn!("[keys] fullscreen refused: {:?}", e);
        }
    }
}

fn handle_keydown(
    ev: &web::KeyboardEvent,
    w: &Wiring,
    document: &web::Document,
    container: Option<&web::Element>,
) {
    if ev.repeat() && ev.key() != "ArrowLeft" && ev.key() != "ArrowRight" {
        return;
    }
    let Some(action) = input::action_for_key(&ev.key(), SEEK_STEP_SEC) else {
        return;
    };
    match action {
        KeyAction::TogglePlayback => {
            w.dispatch(|engine, now, out| engine.toggle_playback(now, out));
        }
        KeyAction::SeekBy(delta) => {
            let t = w.dispatch(|engine, _, out| engine.seek_by(delta, out));
            log::debug!("[keys] seek to {:.1}s", t);
        }
        KeyAction::Finale => {
            w.dispatch(|engine, now, _| engine.request_fade_to_black(now));
        }
        KeyAction::ToggleHint => overlay::toggle_hint(document),
        KeyAction::ToggleFullscreen => toggle_fullscreen(document, container),
        KeyAction::ExitFullscreen => {
            if document.fullscreen_element().is_some() {
                document.exit_fullscreen();
            }
            return;
        }
    }
    ev.prevent_default();
}

pub fn wire_keyboard(
    document: &web::Document,
    container: Option<web::Element>,
    w: &Wiring,
    listeners: &mut Listeners,
) {
    let Some(window) = web::window() else {
        return;
    };
    let w = w.clone();
    let doc = document.clone();
    listeners.add(&window, "keydown", move |ev: web::Event| {
        if typing_into_field(&ev) {
            return;
        }
        if let Some(kev) = ev.dyn_ref::<web::KeyboardEvent>() {
            handle_keydown(kev, &w, &doc, container.as_ref());
        }
    });
}
