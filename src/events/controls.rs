use super::Wiring;
use crate::constants::{BEGIN_BUTTON_ID, FINALE_BUTTON_ID, PLAY_TOGGLE_ID, SEEKBAR_ID};
use crate::dom::{self, Listeners};
use crate::input;
use web_sys as web;

/// Buttons and the seekbar.
pub fn wire_controls(document: &web::Document, w: &Wiring, listeners: &mut Listeners) {
    let wb = w.clone();
    if !listeners.add_by_id(document, BEGIN_BUTTON_ID, "click", move |_| {
        wb.dispatch(|engine, now, out| engine.begin_playback(now, out));
    }) {
        log::warn!("[ui] no #{} on the page", BEGIN_BUTTON_ID);
    }

    let wp = w.clone();
    listeners.add_by_id(document, PLAY_TOGGLE_ID, "click", move |_| {
        wp.dispatch(|engine, now, out| engine.toggle_playback(now, out));
    });

    let wf = w.clone();
    listeners.add_by_id(document, FINALE_BUTTON_ID, "click", move |_| {
        if wf.dispatch(|engine, now, _| engine.request_fade_to_black(now)) {
            log::info!("[ui] finale requested");
        }
    });

    wire_seekbar(document, w, listeners);
}

fn wire_seekbar(document: &web::Document, w: &Wiring, listeners: &mut Listeners) {
    let Some(seekbar) = dom::element_by_id::<web::HtmlInputElement>(document, SEEKBAR_ID) else {
        return;
    };

    for name in ["pointerdown", "input"] {
        let engine = w.engine.clone();
        listeners.add(&seekbar, name, move |_| {
            engine.borrow_mut().set_scrubbing(true);
        });
    }

    // Either event may arrive first; seeking twice to the same value is harmless.
    for name in ["change", "pointerup"] {
        let w = w.clone();
        let el = seekbar.clone();
        listeners.add(&seekbar, name, move |_| {
            let total = w.engine.borrow().config().total_duration();
            match input::parse_seek_value(&el.value(), total) {
                Some(t) => {
                    w.dispatch(|engine, _, out| {
                        engine.seek_to(t, out);
                        engine.set_scrubbing(false);
                    });
                }
                None => w.engine.borrow_mut().set_scrubbing(false),
            }
        });
    }
}
