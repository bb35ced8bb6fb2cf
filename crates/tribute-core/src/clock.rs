use crate::constants::END_OF_TRACK_EPSILON_SEC;
use crate::timeline::AudioInfo;

/// Audio-driven time base.
///
/// `active_time` mirrors the audio element's position and is the only input
/// to scene time. `displayed_time` is what the seekbar shows; it lags behind
/// while the user scrubs and freezes at the end of the track.
#[derive(Clone, Debug)]
pub struct PlaybackClock {
    intro_end: f64,
    total_duration: f64,
    active_time: f64,
    displayed_time: f64,
    scrubbing: bool,
    end_latched: bool,
}

impl PlaybackClock {
    pub fn new(audio: &AudioInfo) -> Self {
        Self {
            intro_end: audio.intro_end_seconds,
            total_duration: audio.total_duration_seconds,
            active_time: 0.0,
            displayed_time: 0.0,
            scrubbing: false,
            end_latched: false,
        }
    }

    pub fn active_time_seconds(&self) -> f64 {
        self.active_time
    }

    pub fn displayed_time(&self) -> f64 {
        self.displayed_time
    }

    /// Seconds since the intro ended, never negative.
    pub fn scene_time(&self) -> f32 {
        (self.active_time - self.intro_end).max(0.0) as f32
    }

    pub fn is_scrubbing(&self) -> bool {
        self.scrubbing
    }

    pub fn set_scrubbing(&mut self, scrubbing: bool) {
        self.scrubbing = scrubbing;
        if !scrubbing {
            self.displayed_time = self.active_time;
        }
    }

    pub fn sync_from_audio(&mut self, position: f64) {
        self.active_time = if position.is_finite() {
            position.max(0.0)
        } else {
            0.0
        };
        if !self.scrubbing {
            self.displayed_time = self.active_time;
        }
    }

    /// Pin the clock at the end of the track once playback reaches it.
    ///
    /// Returns `true` only on the frame the end is first reached; the latch
    /// is released when a seek or restart moves the clock back.
    pub fn pin_at_end(&mut self) -> bool {
        if self.active_time < self.total_duration - END_OF_TRACK_EPSILON_SEC {
            self.end_latched = false;
            return false;
        }
        self.active_time = self.total_duration;
        self.displayed_time = self.total_duration;
        !std::mem::replace(&mut self.end_latched, true)
    }

    pub fn is_at_end(&self) -> bool {
        self.end_latched
    }

    /// Jump to `seconds`, clamped to the track. Returns the applied time.
    pub fn seek(&mut self, seconds: f64) -> f64 {
        let t = if seconds.is_finite() {
            seconds.clamp(0.0, self.total_duration)
        } else {
            0.0
        };
        self.reset_to(t);
        t
    }

    pub fn reset_to(&mut self, seconds: f64) {
        self.active_time = seconds;
        self.displayed_time = seconds;
        if seconds < self.total_duration - END_OF_TRACK_EPSILON_SEC {
            self.end_latched = false;
        }
    }

    pub fn freeze_display_at_end(&mut self) {
        self.displayed_time = self.total_duration;
    }
}
