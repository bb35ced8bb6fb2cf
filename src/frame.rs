use crate::audio::AudioSource;
use crate::dom;
use crate::overlay::Overlay;
use crate::render;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tribute_core::{Commands, SceneEngine};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

thread_local! {
    static EPOCH: Instant = Instant::now();
}

/// Seconds on the monotonic clock shared by the frame loop and event handlers.
pub fn now_seconds() -> f64 {
    EPOCH.with(|epoch| epoch.elapsed().as_secs_f64())
}

pub struct FrameContext {
    pub engine: Rc<RefCell<SceneEngine>>,
    pub audio: AudioSource,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'static>>,
    pub overlay: Overlay,
    pub commands: Commands,
    /// Set by the resize observer and window `resize`; consumed once per frame.
    pub resize_pending: Rc<Cell<bool>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = now_seconds();
        let position = self.audio.position();
        self.commands.clear();

        let (snapshot, scrubbing) = {
            let mut engine = self.engine.borrow_mut();
            let snapshot = engine.step(now, position, &mut self.commands).clone();
            (snapshot, engine.state().clock.is_scrubbing())
        };

        if self.audio.apply(&self.commands, &self.engine) {
            self.resize_pending.set(true);
        }
        if self.resize_pending.replace(false) {
            self.resize();
        }

        if let Some(gpu) = self.gpu.as_mut() {
            match gpu.render(&snapshot) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::warn!("[render] surface lost, reconfiguring");
                    self.resize_pending.set(true);
                }
                Err(e) => log::error!("[render] frame failed: {:?}", e),
            }
        }

        let engine = self.engine.borrow();
        self.overlay
            .apply(&self.document, &snapshot, engine.config(), scrubbing);
    }

    /// Idempotent: resizing to the current size is a no-op.
    fn resize(&mut self) {
        dom::sync_canvas_backing_size(&self.canvas);
        if let Some(gpu) = self.gpu.as_mut() {
            gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
        }
    }

    /// Release GPU resources.
    pub fn release_gpu(&mut self) {
        if self.gpu.take().is_some() {
            log::info!("[render] GPU resources released");
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Handle to a running requestAnimationFrame loop.
pub struct FrameLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    request_id: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    /// Cancel the pending frame and drop the callback. Safe to call twice.
    pub fn cancel(&self) {
        if let (Some(id), Some(w)) = (self.request_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        if self.tick.borrow_mut().take().is_some() {
            log::info!("[frame] loop stopped");
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>, request_id: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => request_id.set(Some(id)),
            Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let request_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick_clone = tick.clone();
    let request_id_clone = request_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        request_id_clone.set(None);
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone, &request_id_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick, &request_id);
    FrameLoop { tick, request_id }
}
