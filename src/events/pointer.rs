use super::Wiring;
use crate::dom::Listeners;
use crate::frame::now_seconds;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Drag-to-rotate on the canvas. Moves and releases are tracked on the
/// window so a drag that leaves the canvas still ends.
pub fn wire_pointer(canvas: &web::HtmlCanvasElement, w: &Wiring, listeners: &mut Listeners) {
    let engine = w.engine.clone();
    let canvas_capture = canvas.clone();
    listeners.add(canvas, "pointerdown", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let started = engine.borrow_mut().pointer_down(
            ev.button(),
            ev.client_x() as f32,
            ev.client_y() as f32,
        );
        if started {
            _ = canvas_capture.set_pointer_capture(ev.pointer_id());
            log::debug!("[mouse] drag start at ({}, {})", ev.client_x(), ev.client_y());
        }
    });

    let Some(window) = web::window() else {
        return;
    };
    let engine = w.engine.clone();
    listeners.add(&window, "pointermove", move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
            engine
                .borrow_mut()
                .pointer_move(ev.client_x() as f32, ev.client_y() as f32);
        }
    });

    for (target, name) in [
        (window.unchecked_ref::<web::EventTarget>(), "pointerup"),
        (window.unchecked_ref::<web::EventTarget>(), "pointercancel"),
        (canvas.unchecked_ref::<web::EventTarget>(), "pointerleave"),
    ] {
        let engine = w.engine.clone();
        listeners.add(target, name, move |_ev: web::Event| {
            if engine.borrow_mut().pointer_up(now_seconds()) {
                log::debug!("[mouse] drag end ({})", name);
            }
        });
    }
}
