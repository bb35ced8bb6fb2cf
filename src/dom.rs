use crate::constants::{HIDDEN_CLASS, MAX_DEVICE_PIXEL_RATIO};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An attached event listener. The closure lives as long as the handle so the
/// listener can be removed again on teardown.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn detach(self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

#[derive(Default)]
pub struct Listeners {
    attached: Vec<Listener>,
}

impl Listeners {
    pub fn add(
        &mut self,
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        match target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            Ok(()) => self.attached.push(Listener {
                target: target.clone(),
                event,
                closure,
            }),
            Err(e) => log::warn!("[dom] failed to attach '{}' listener: {:?}", event, e),
        }
    }

    /// Attach `handler` to the element with `id`, if the page has one.
    pub fn add_by_id(
        &mut self,
        document: &web::Document,
        id: &str,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> bool {
        match document.get_element_by_id(id) {
            Some(el) => {
                self.add(&el, event, handler);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.attached.len()
    }

    pub fn detach_all(&mut self) -> usize {
        let n = self.attached.len();
        for listener in self.attached.drain(..) {
            listener.detach();
        }
        n
    }
}

#[inline]
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

pub fn set_hidden(document: &web::Document, id: &str, hidden: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().toggle_with_force(HIDDEN_CLASS, hidden);
    }
}

pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

pub fn set_opacity(document: &web::Document, id: &str, opacity: f32) {
    if let Some(el) = element_by_id::<web::HtmlElement>(document, id) {
        _ = el.style().set_property("opacity", &format!("{:.2}", opacity));
    }
}

/// Resize the canvas backing store to its CSS box times the (capped) device
/// pixel ratio. Returns the new size when it changed.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> Option<(u32, u32)> {
    let w = web::window()?;
    let dpr = w.device_pixel_ratio().min(MAX_DEVICE_PIXEL_RATIO);
    let rect = canvas.get_bounding_client_rect();
    let w_px = ((rect.width() * dpr) as u32).max(1);
    let h_px = ((rect.height() * dpr) as u32).max(1);
    if canvas.width() == w_px && canvas.height() == h_px {
        return None;
    }
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    Some((w_px, h_px))
}
