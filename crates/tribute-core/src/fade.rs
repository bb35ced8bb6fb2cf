//! Fade-to-black / silence / restart cycle.
//!
//! ```text
//! None --request--> Fading --1.5s--> Silence --silence_after_end--> Restarting --next step--> None
//! ```
//!
//! Timing is wall-clock (the `now` passed to `step`), anchored at the start of
//! the current phase, so a stalled audio clock cannot hold the fade.

use crate::constants::{
    initial_background, ENDING_LINE_AFTER_SEC, FADE_DURATION_SEC, INITIAL_EXPOSURE,
};
use glam::Vec3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FadePhase {
    #[default]
    None,
    Fading,
    Silence,
    Restarting,
}

impl FadePhase {
    /// Camera and rotation hold the final pose during these phases.
    #[inline]
    pub fn pins_timeline(self) -> bool {
        matches!(self, FadePhase::Fading | FadePhase::Silence)
    }

    /// The audio position is ignored while any fade phase is active.
    #[inline]
    pub fn overrides_clock(self) -> bool {
        self != FadePhase::None
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeVisuals {
    pub exposure: f32,
    pub background: Vec3,
    /// Opacity of the narrative overlay (segment captions).
    pub overlay_opacity: f32,
    pub ending_line: bool,
}

impl FadeVisuals {
    pub fn initial() -> Self {
        Self {
            exposure: INITIAL_EXPOSURE,
            background: initial_background(),
            overlay_opacity: 1.0,
            ending_line: false,
        }
    }

    pub fn black() -> Self {
        Self {
            exposure: 0.0,
            background: Vec3::ZERO,
            overlay_opacity: 0.0,
            ending_line: false,
        }
    }
}

/// Side effect a `step` asks the owner to perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadeTransition {
    EnteredSilence,
    /// Seek the audio back to the intro end and resume playback.
    Restart,
    Settled,
}

#[derive(Clone, Debug)]
pub struct FadeMachine {
    phase: FadePhase,
    phase_start: f64,
    fade_duration: f64,
    silence_duration: f64,
    initial: FadeVisuals,
    visuals: FadeVisuals,
    fading_to_black: bool,
}

impl FadeMachine {
    pub fn new(silence_duration: f64) -> Self {
        Self {
            phase: FadePhase::None,
            phase_start: 0.0,
            fade_duration: FADE_DURATION_SEC,
            silence_duration,
            initial: FadeVisuals::initial(),
            visuals: FadeVisuals::initial(),
            fading_to_black: false,
        }
    }

    pub fn phase(&self) -> FadePhase {
        self.phase
    }

    pub fn phase_start_time(&self) -> f64 {
        self.phase_start
    }

    pub fn visuals(&self) -> FadeVisuals {
        self.visuals
    }

    pub fn is_fading_to_black(&self) -> bool {
        self.fading_to_black
    }

    pub fn fade_duration(&self) -> f64 {
        self.fade_duration
    }

    pub fn silence_duration(&self) -> f64 {
        self.silence_duration
    }

    /// Start the fade. Ignored (returns `false`) unless the machine is idle.
    pub fn request_fade(&mut self, now: f64) -> bool {
        if self.phase != FadePhase::None {
            return false;
        }
        self.phase = FadePhase::Fading;
        self.phase_start = now;
        self.fading_to_black = true;
        log::info!("[fade] none -> fading");
        true
    }

    pub fn step(&mut self, now: f64) -> Option<FadeTransition> {
        let elapsed = (now - self.phase_start).max(0.0);
        match self.phase {
            FadePhase::None => None,
            FadePhase::Fading => {
                if elapsed >= self.fade_duration {
                    self.phase = FadePhase::Silence;
                    self.phase_start = now;
                    self.visuals = FadeVisuals::black();
                    log::info!("[fade] fading -> silence");
                    return Some(FadeTransition::EnteredSilence);
                }
                let f = (elapsed / self.fade_duration) as f32;
                let black = FadeVisuals::black();
                self.visuals.exposure = self.initial.exposure * (1.0 - f);
                self.visuals.background = self.initial.background.lerp(black.background, f);
                self.visuals.overlay_opacity = 1.0 - f;
                if elapsed > ENDING_LINE_AFTER_SEC {
                    self.visuals.ending_line = true;
                }
                None
            }
            FadePhase::Silence => {
                if elapsed < self.silence_duration {
                    return None;
                }
                self.phase = FadePhase::Restarting;
                self.phase_start = now;
                self.visuals = self.initial;
                self.fading_to_black = false;
                log::info!("[fade] silence -> restarting");
                Some(FadeTransition::Restart)
            }
            FadePhase::Restarting => {
                self.phase = FadePhase::None;
                log::info!("[fade] restarting -> none");
                Some(FadeTransition::Settled)
            }
        }
    }
}
