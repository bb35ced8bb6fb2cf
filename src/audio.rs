use crate::constants::{AUDIO_ELEMENT_ID, AUDIO_SRC};
use crate::dom::{self, Listeners};
use crate::frame::now_seconds;
use std::cell::RefCell;
use std::rc::Rc;
use tribute_core::{AudioEvent, EngineCommand, SceneEngine};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// The track's `<audio>` element. Uses the page's element when present,
/// otherwise creates a detached one pointing at `AUDIO_SRC`.
#[derive(Clone)]
pub struct AudioSource {
    element: web::HtmlAudioElement,
}

impl AudioSource {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        if let Some(element) = dom::element_by_id::<web::HtmlAudioElement>(document, AUDIO_ELEMENT_ID)
        {
            element.set_preload("auto");
            return Ok(Self { element });
        }
        let element =
            web::HtmlAudioElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        element.set_preload("auto");
        element.set_volume(1.0);
        element.set_cross_origin(Some("anonymous"));
        element.set_src(AUDIO_SRC);
        element.load();
        Ok(Self { element })
    }

    /// Current playback position in seconds.
    pub fn position(&self) -> Option<f64> {
        Some(self.element.current_time())
    }

    /// Forward media lifecycle events to the engine.
    pub fn wire_lifecycle(&self, engine: &Rc<RefCell<SceneEngine>>, listeners: &mut Listeners) {
        let mapping: [(&'static str, AudioEvent); 6] = [
            ("loadeddata", AudioEvent::Ready),
            ("canplaythrough", AudioEvent::Ready),
            ("error", AudioEvent::Error),
            ("ended", AudioEvent::Ended),
            ("pause", AudioEvent::Paused),
            ("play", AudioEvent::Playing),
        ];
        for (name, event) in mapping {
            let engine = engine.clone();
            listeners.add(&self.element, name, move |_ev: web::Event| {
                engine.borrow_mut().on_audio_event(event, now_seconds());
            });
        }
        // The element may already be loaded when the listeners attach.
        if self.element.ready_state() >= 2 {
            engine
                .borrow_mut()
                .on_audio_event(AudioEvent::Ready, now_seconds());
        }
    }

    /// Apply engine commands. Returns `true` if a resize was requested.
    ///
    /// Must be called without an outstanding borrow of `engine`; a rejected
    /// `play()` reports back asynchronously.
    pub fn apply(&self, commands: &[EngineCommand], engine: &Rc<RefCell<SceneEngine>>) -> bool {
        let mut resize = false;
        for cmd in commands {
            match *cmd {
                EngineCommand::Seek(t) => self.element.set_current_time(t),
                EngineCommand::Play => self.play(engine),
                EngineCommand::Pause => self.pause(),
                EngineCommand::Resize => resize = true,
            }
        }
        resize
    }

    fn play(&self, engine: &Rc<RefCell<SceneEngine>>) {
        let promise = match self.element.play() {
            Ok(p) => p,
            Err(e) => {
                log::warn!("[audio] play() threw: {:?}", e);
                engine
                    .borrow_mut()
                    .on_audio_event(AudioEvent::PlayRejected, now_seconds());
                return;
            }
        };
        let engine = engine.clone();
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[audio] playback failed: {:?}", e);
                engine
                    .borrow_mut()
                    .on_audio_event(AudioEvent::PlayRejected, now_seconds());
            }
        });
    }

    pub fn pause(&self) {
        _ = self.element.pause();
    }
}
