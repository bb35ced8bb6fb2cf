#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_CONTAINER_ID, CANVAS_ID, TIMELINE_CONFIG_ID};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tribute_core::{SceneEngine, TimelineConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod format;
mod frame;
mod input;
mod overlay;
mod render;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// Everything the running scene owns that must be released on teardown.
struct App {
    engine: Rc<RefCell<SceneEngine>>,
    audio: audio::AudioSource,
    frame_ctx: Rc<RefCell<frame::FrameContext>>,
    frame_loop: frame::FrameLoop,
    listeners: dom::Listeners,
    resize_observer: Option<web::ResizeObserver>,
    _resize_callback: Closure<dyn FnMut()>,
}

impl App {
    fn teardown(mut self) {
        let cancelled = self.engine.borrow_mut().teardown();
        self.frame_loop.cancel();
        let detached = self.listeners.detach_all();
        if let Some(observer) = self.resize_observer.take() {
            observer.disconnect();
        }
        self.frame_ctx.borrow_mut().release_gpu();
        self.audio.pause();
        log::info!(
            "[engine] torn down: {} pending tasks, {} listeners",
            cancelled,
            detached
        );
    }
}

/// Stop the scene and release its resources. Safe to call more than once.
#[wasm_bindgen]
pub fn teardown() {
    if let Some(app) = APP.with(|slot| slot.borrow_mut().take()) {
        app.teardown();
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tribute-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Timeline from the page's `<script type="application/json">` block, or the
/// built-in one when the page has none or it does not validate.
fn load_timeline(document: &web::Document) -> anyhow::Result<TimelineConfig> {
    let Some(text) = document
        .get_element_by_id(TIMELINE_CONFIG_ID)
        .and_then(|el| el.text_content())
    else {
        return Ok(TimelineConfig::builtin()?);
    };
    match TimelineConfig::from_json_str(&text) {
        Ok(config) => Ok(config),
        Err(e) => {
            log::warn!("[engine] page timeline rejected ({}), using built-in", e);
            Ok(TimelineConfig::builtin()?)
        }
    }
}

fn wire_resize(
    container: Option<&web::Element>,
    resize_pending: &Rc<Cell<bool>>,
    listeners: &mut dom::Listeners,
) -> (Option<web::ResizeObserver>, Closure<dyn FnMut()>) {
    let flag = resize_pending.clone();
    let callback = Closure::wrap(Box::new(move || flag.set(true)) as Box<dyn FnMut()>);
    let observer = container.and_then(|el| {
        let observer = web::ResizeObserver::new(callback.as_ref().unchecked_ref()).ok()?;
        observer.observe(el);
        Some(observer)
    });
    if observer.is_none() {
        log::warn!("[dom] no resize observer; relying on window resize");
    }
    if let Some(window) = web::window() {
        let flag = resize_pending.clone();
        listeners.add(&window, "resize", move |_| flag.set(true));
    }
    (observer, callback)
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let container = document.get_element_by_id(CANVAS_CONTAINER_ID);

    let config = load_timeline(&document)?;
    overlay::init(&document, &config);
    let engine = Rc::new(RefCell::new(SceneEngine::new(config)?));
    let audio = audio::AudioSource::new(&document)?;

    dom::sync_canvas_backing_size(&canvas);
    let resize_pending = Rc::new(Cell::new(true));
    let mut listeners = dom::Listeners::default();
    let (resize_observer, resize_callback) =
        wire_resize(container.as_ref(), &resize_pending, &mut listeners);

    let wiring = events::Wiring {
        engine: engine.clone(),
        audio: audio.clone(),
        resize_pending: resize_pending.clone(),
    };
    audio.wire_lifecycle(&engine, &mut listeners);
    events::pointer::wire_pointer(&canvas, &wiring, &mut listeners);
    events::keyboard::wire_keyboard(&document, container.clone(), &wiring, &mut listeners);
    events::controls::wire_controls(&document, &wiring, &mut listeners);

    // Dropping a closure while it runs is not allowed, so the page-hide
    // handler defers teardown to a fresh task.
    listeners.add(&window, "pagehide", |_| spawn_local(async { teardown() }));
    log::info!("[dom] {} listeners attached", listeners.len());

    let gpu = frame::init_gpu(&canvas).await;
    engine.borrow_mut().set_model_loaded(gpu.is_some());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        engine: engine.clone(),
        audio: audio.clone(),
        document: document.clone(),
        canvas: canvas.clone(),
        gpu,
        overlay: overlay::Overlay::default(),
        commands: Default::default(),
        resize_pending,
    }));
    let frame_loop = frame::start_loop(frame_ctx.clone());

    let app = App {
        engine,
        audio,
        frame_ctx,
        frame_loop,
        listeners,
        resize_observer,
        _resize_callback: resize_callback,
    };
    if let Some(previous) = APP.with(|slot| slot.borrow_mut().replace(app)) {
        previous.teardown();
    }
    Ok(())
}
