//! One-shot UI flags: drag hint, "shaping" message, meta UI fade-in and the
//! starting indicator. Each reveal or dismissal happens at most once per
//! session; delayed dismissals go through the engine's `Scheduler`.

use crate::constants::{
    HINT_AUTO_DISMISS_SEC, HINT_MIN_SCENE_SEC, INTRO_FADE_DURATION_SEC, META_UI_FADE_END_SEC,
    META_UI_FADE_START_SEC, META_UI_OPACITY, MIN_STARTING_INDICATOR_SEC, SHAPING_MESSAGE_SEC,
};
use crate::scheduler::{Scheduler, TaskKind};

#[derive(Clone, Debug)]
pub struct UiTriggers {
    hint_visible: bool,
    hint_anchor: Option<f32>,
    has_dragged: bool,
    shaping_visible: bool,
    shaping_shown: bool,
    meta_opacity: f32,
    starting: bool,
    starting_requested_at: f64,
}

impl Default for UiTriggers {
    fn default() -> Self {
        Self {
            hint_visible: true,
            hint_anchor: None,
            has_dragged: false,
            shaping_visible: false,
            shaping_shown: false,
            meta_opacity: 0.0,
            starting: false,
            starting_requested_at: 0.0,
        }
    }
}

impl UiTriggers {
    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    pub fn has_dragged(&self) -> bool {
        self.has_dragged
    }

    pub fn shaping_visible(&self) -> bool {
        self.shaping_visible
    }

    pub fn shaping_shown(&self) -> bool {
        self.shaping_shown
    }

    pub fn meta_opacity(&self) -> f32 {
        self.meta_opacity
    }

    pub fn is_starting(&self) -> bool {
        self.starting
    }

    /// Per-frame update from scene time.
    pub fn update(&mut self, scene_time: f32) {
        if self.hint_visible && !self.has_dragged && scene_time >= HINT_MIN_SCENE_SEC {
            let anchor = *self.hint_anchor.get_or_insert(scene_time);
            if scene_time - anchor > HINT_AUTO_DISMISS_SEC {
                self.hint_visible = false;
                log::debug!("[ui] drag hint auto-dismissed at {:.1}s", scene_time);
            }
        }

        let span = META_UI_FADE_END_SEC - META_UI_FADE_START_SEC;
        let ramp = ((scene_time - META_UI_FADE_START_SEC) / span).clamp(0.0, 1.0);
        self.meta_opacity = self.meta_opacity.max(META_UI_OPACITY * ramp);
    }

    pub fn on_drag_start(&mut self) {
        self.has_dragged = true;
        self.hint_visible = false;
        self.meta_opacity = META_UI_OPACITY;
    }

    /// A drag gesture finished. The first one reveals the shaping message; a
    /// later one while it is still up pushes its dismissal back.
    pub fn on_drag_complete(&mut self, now: f64, scheduler: &mut Scheduler) {
        if !self.shaping_shown {
            self.shaping_shown = true;
            self.shaping_visible = true;
            log::info!("[ui] shaping message shown");
        } else if !self.shaping_visible {
            return;
        }
        scheduler.schedule(TaskKind::DismissShapingMessage, now + SHAPING_MESSAGE_SEC);
    }

    pub fn dismiss_shaping(&mut self) {
        self.shaping_visible = false;
    }

    pub fn begin_starting(&mut self, now: f64) {
        self.starting = true;
        self.starting_requested_at = now;
        self.hint_anchor = None;
    }

    /// Audio reported playback; keep the indicator up for its minimum time.
    pub fn on_playing(&mut self, now: f64, scheduler: &mut Scheduler) {
        if !self.starting {
            return;
        }
        let due = now.max(self.starting_requested_at + MIN_STARTING_INDICATOR_SEC);
        scheduler.schedule(TaskKind::ClearStartingIndicator, due);
    }

    pub fn clear_starting(&mut self) {
        self.starting = false;
    }
}

/// Opacity of the dark intro caption: opaque until the intro ends, then a
/// linear fade over `INTRO_FADE_DURATION_SEC`.
pub fn intro_overlay_opacity(active_time: f64, intro_end: f64) -> f32 {
    if active_time < intro_end {
        1.0
    } else {
        let f = (active_time - intro_end) / INTRO_FADE_DURATION_SEC;
        (1.0 - f).clamp(0.0, 1.0) as f32
    }
}
