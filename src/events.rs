use crate::audio::AudioSource;
use crate::frame::now_seconds;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tribute_core::{Commands, SceneEngine};

pub mod controls;
pub mod keyboard;
pub mod pointer;

/// Shared handles every input handler needs.
#[derive(Clone)]
pub struct Wiring {
    pub engine: Rc<RefCell<SceneEngine>>,
    pub audio: AudioSource,
    pub resize_pending: Rc<Cell<bool>>,
}

impl Wiring {
    /// Run `f` against the engine, then apply the commands it queued once the
    /// engine borrow is released.
    pub fn dispatch<R>(&self, f: impl FnOnce(&mut SceneEngine, f64, &mut Commands) -> R) -> R {
        let mut out = Commands::new();
        let result = {
            let mut engine = self.engine.borrow_mut();
            f(&mut *engine, now_seconds(), &mut out)
        };
        if self.audio.apply(&out, &self.engine) {
            self.resize_pending.set(true);
        }
        result
    }
}
