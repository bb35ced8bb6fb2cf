//! Per-frame scene engine.
//!
//! The host calls [`SceneEngine::step`] once per animation frame with the
//! wall-clock time and the audio element's position, applies the returned
//! [`EngineCommand`]s to its audio source and renders the [`SceneSnapshot`].
//! Pointer, keyboard and audio lifecycle callbacks go through the `&mut self`
//! handlers; all of them run on the same thread as `step`.
//!
//! Order inside a frame: due tasks, clock, segment and UI triggers,
//! end-of-track check, fade machine, camera and rotation, drag blend.

use crate::blend::{timeline_yaw, UserOverride};
use crate::clock::PlaybackClock;
use crate::constants::{CAMERA_KEYFRAMES, CAMERA_TARGET, RESIZE_SETTLE_SEC, SPEED_KEYFRAMES};
use crate::error::Result;
use crate::fade::{FadeMachine, FadePhase, FadeTransition};
use crate::keyframe::KeyframeTrack;
use crate::rotation::SpeedCurve;
use crate::scheduler::{DueTasks, Scheduler, TaskKind};
use crate::state::{ModelPose, SceneSnapshot};
use crate::timeline::{SceneSegment, TimelineConfig};
use crate::triggers::{intro_overlay_opacity, UiTriggers};
use glam::Vec3;
use smallvec::SmallVec;

/// Requests for the host's audio element and canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EngineCommand {
    Seek(f64),
    Play,
    Pause,
    /// Re-measure the canvas and update the projection.
    Resize,
}

pub type Commands = SmallVec<[EngineCommand; 4]>;

/// Lifecycle notifications from the audio source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioEvent {
    Ready,
    Playing,
    Paused,
    Ended,
    Error,
    /// `play()` was refused, e.g. by an autoplay policy.
    PlayRejected,
}

/// Mutable session state, owned by the engine for the lifetime of the scene.
#[derive(Clone, Debug)]
pub struct PlaybackState {
    pub clock: PlaybackClock,
    pub fade: FadeMachine,
    pub user: UserOverride,
    pub triggers: UiTriggers,
    pub scheduler: Scheduler,
    pub segment: Option<usize>,
    pub audio_ready: bool,
    pub music_playing: bool,
    pub model_loaded: bool,
    pub started: bool,
    last_now: Option<f64>,
    torn_down: bool,
}

impl PlaybackState {
    fn new(config: &TimelineConfig) -> Self {
        Self {
            clock: PlaybackClock::new(&config.audio),
            fade: FadeMachine::new(config.silence_after_end()),
            user: UserOverride::default(),
            triggers: UiTriggers::default(),
            scheduler: Scheduler::default(),
            segment: config.segment_index_at(0.0),
            audio_ready: false,
            music_playing: false,
            model_loaded: false,
            started: false,
            last_now: None,
            torn_down: false,
        }
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

pub struct SceneEngine {
    config: TimelineConfig,
    camera_path: KeyframeTrack<Vec3>,
    speed: SpeedCurve,
    state: PlaybackState,
    snapshot: SceneSnapshot,
}

impl SceneEngine {
    /// Engine with the built-in camera path and rotation speed curve.
    pub fn new(config: TimelineConfig) -> Result<Self> {
        let camera_path = KeyframeTrack::from_positions("camera", &CAMERA_KEYFRAMES)?;
        let speed = SpeedCurve::from_pairs(&SPEED_KEYFRAMES)?;
        Self::with_curves(config, camera_path, speed)
    }

    pub fn with_curves(
        config: TimelineConfig,
        camera_path: KeyframeTrack<Vec3>,
        speed: SpeedCurve,
    ) -> Result<Self> {
        config.validate()?;
        let state = PlaybackState::new(&config);
        let snapshot = compose_snapshot(&config, &camera_path, &speed, &state);
        log::info!(
            "[engine] timeline '{}' by {}: {} segments, intro {:.0}s, total {:.0}s",
            config.audio.track,
            config.audio.artist,
            config.scene_timeline.len(),
            config.intro_end(),
            config.total_duration()
        );
        Ok(Self {
            config,
            camera_path,
            speed,
            state,
            snapshot,
        })
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn snapshot(&self) -> &SceneSnapshot {
        &self.snapshot
    }

    pub fn camera_path(&self) -> &KeyframeTrack<Vec3> {
        &self.camera_path
    }

    pub fn speed_curve(&self) -> &SpeedCurve {
        &self.speed
    }

    pub fn active_segment(&self) -> Option<&SceneSegment> {
        self.state
            .segment
            .and_then(|i| self.config.scene_timeline.get(i))
    }

    /// Advance one frame.
    ///
    /// `audio_position` is `None` when no audio source exists; the clock and
    /// UI triggers then stay where they are while fades and easing continue.
    pub fn step(
        &mut self,
        now: f64,
        audio_position: Option<f64>,
        out: &mut Commands,
    ) -> &SceneSnapshot {
        if self.state.torn_down {
            return &self.snapshot;
        }
        let dt = self
            .state
            .last_now
            .map_or(0.0, |prev| (now - prev).max(0.0) as f32);
        self.state.last_now = Some(now);

        self.run_due_tasks(now, out);

        if let Some(position) = audio_position {
            let st = &mut self.state;
            if !st.fade.phase().overrides_clock() {
                st.clock.sync_from_audio(position);
            }
            let scene_time = st.clock.scene_time();
            st.segment = self.config.segment_index_at(scene_time);
            st.triggers.update(scene_time);

            if st.fade.phase() == FadePhase::None && st.clock.pin_at_end() {
                log::info!(
                    "[clock] end of track at {:.1}s, pausing",
                    st.clock.active_time_seconds()
                );
                out.push(EngineCommand::Pause);
            }
        }

        if let Some(FadeTransition::Restart) = self.state.fade.step(now) {
            self.restart(now, out);
        }

        self.state.user.relax(dt);
        self.snapshot = compose_snapshot(&self.config, &self.camera_path, &self.speed, &self.state);
        &self.snapshot
    }

    fn run_due_tasks(&mut self, now: f64, out: &mut Commands) {
        let mut due = DueTasks::new();
        self.state.scheduler.poll(now, &mut due);
        for kind in due {
            match kind {
                TaskKind::DismissShapingMessage => self.state.triggers.dismiss_shaping(),
                TaskKind::ClearStartingIndicator => {
                    self.state.triggers.clear_starting();
                    out.push(EngineCommand::Resize);
                }
                TaskKind::Resize => out.push(EngineCommand::Resize),
            }
        }
    }

    fn restart(&mut self, now: f64, out: &mut Commands) {
        let start = self.config.intro_end();
        self.state.clock.reset_to(start);
        self.state.segment = self.config.segment_index_at(0.0);
        out.push(EngineCommand::Seek(start));
        out.push(EngineCommand::Play);
        self.state.scheduler.schedule(TaskKind::Resize, now);
        log::info!("[engine] restarting from {:.1}s", start);
    }

    /// Start the experience at the end of the intro. Refused until the audio
    /// source has reported it is ready.
    pub fn begin_playback(&mut self, now: f64, out: &mut Commands) -> bool {
        if self.state.torn_down {
            return false;
        }
        if !self.state.audio_ready {
            log::warn!("[engine] begin ignored: audio not ready");
            return false;
        }
        let start = self.state.clock.seek(self.config.intro_end());
        self.state.started = true;
        self.state.triggers.begin_starting(now);
        self.state.segment = self.config.segment_index_at(0.0);
        out.push(EngineCommand::Seek(start));
        out.push(EngineCommand::Play);
        self.state
            .scheduler
            .schedule(TaskKind::Resize, now + RESIZE_SETTLE_SEC);
        log::info!("[engine] begin playback at {:.1}s", start);
        true
    }

    /// Play/pause toggle; the first use begins playback.
    pub fn toggle_playback(&mut self, now: f64, out: &mut Commands) -> bool {
        if self.state.torn_down {
            return false;
        }
        if !self.state.started {
            return self.begin_playback(now, out);
        }
        if self.state.music_playing {
            out.push(EngineCommand::Pause);
            return true;
        }
        if !self.state.audio_ready {
            return false;
        }
        if self.state.clock.is_at_end() {
            let start = self.state.clock.seek(self.config.intro_end());
            out.push(EngineCommand::Seek(start));
        }
        out.push(EngineCommand::Play);
        true
    }

    /// Jump to an audio position (seconds, clamped to the track). After
    /// teardown this only reports the frozen position.
    pub fn seek_to(&mut self, seconds: f64, out: &mut Commands) -> f64 {
        if self.state.torn_down {
            return self.state.clock.active_time_seconds();
        }
        let t = self.state.clock.seek(seconds);
        self.state.segment = self
            .config
            .segment_index_at(self.state.clock.scene_time());
        out.push(EngineCommand::Seek(t));
        t
    }

    pub fn seek_by(&mut self, delta: f64, out: &mut Commands) -> f64 {
        let current = self.state.clock.active_time_seconds();
        self.seek_to(current + delta, out)
    }

    pub fn set_scrubbing(&mut self, scrubbing: bool) {
        if self.state.torn_down {
            return;
        }
        self.state.clock.set_scrubbing(scrubbing);
    }

    pub fn set_model_loaded(&mut self, loaded: bool) {
        self.state.model_loaded = loaded;
    }

    /// Begin the finale fade. Returns `false` if the timeline disables it or
    /// a fade is already running.
    pub fn request_fade_to_black(&mut self, now: f64) -> bool {
        if self.state.torn_down {
            return false;
        }
        if !self.config.loop_behavior.fade_to_black {
            log::warn!("[engine] fade to black disabled by timeline");
            return false;
        }
        self.state.fade.request_fade(now)
    }

    /// Only the primary button starts a drag.
    pub fn pointer_down(&mut self, button: i16, x: f32, y: f32) -> bool {
        if self.state.torn_down || button != 0 {
            return false;
        }
        self.state.user.begin_drag(x, y);
        self.state.triggers.on_drag_start();
        true
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        if self.state.torn_down {
            return false;
        }
        self.state.user.drag_to(x, y)
    }

    /// Safe to call for both `pointerup` and `pointerleave`; only the first
    /// call after a drag counts as a completed gesture.
    pub fn pointer_up(&mut self, now: f64) -> bool {
        if !self.state.user.end_drag() {
            return false;
        }
        let st = &mut self.state;
        st.triggers.on_drag_complete(now, &mut st.scheduler);
        true
    }

    /// Late media events after teardown are dropped.
    pub fn on_audio_event(&mut self, event: AudioEvent, now: f64) {
        if self.state.torn_down {
            log::debug!("[audio] {:?} ignored after teardown", event);
            return;
        }
        let st = &mut self.state;
        match event {
            AudioEvent::Ready => {
                if !st.audio_ready {
                    st.audio_ready = true;
                    log::info!("[audio] ready");
                }
            }
            AudioEvent::Error => {
                st.audio_ready = false;
                st.music_playing = false;
                log::warn!("[audio] failed to load; playback disabled");
            }
            AudioEvent::Ended => {
                if st.fade.phase() == FadePhase::None {
                    st.clock.freeze_display_at_end();
                }
            }
            AudioEvent::Paused => st.music_playing = false,
            AudioEvent::Playing => {
                st.music_playing = true;
                st.triggers.on_playing(now, &mut st.scheduler);
            }
            AudioEvent::PlayRejected => {
                st.music_playing = false;
                if st.triggers.is_starting() {
                    st.triggers.clear_starting();
                    st.scheduler.cancel(TaskKind::ClearStartingIndicator);
                }
                log::warn!("[audio] playback rejected");
            }
        }
    }

    /// Cancel every pending task and stop reacting to input. Returns the
    /// number of cancelled tasks.
    pub fn teardown(&mut self) -> usize {
        let cancelled = self.state.scheduler.cancel_all();
        self.state.user.end_drag();
        self.state.torn_down = true;
        log::info!("[engine] teardown, cancelled {} pending task(s)", cancelled);
        cancelled
    }
}

fn compose_snapshot(
    config: &TimelineConfig,
    camera_path: &KeyframeTrack<Vec3>,
    speed: &SpeedCurve,
    state: &PlaybackState,
) -> SceneSnapshot {
    let phase = state.fade.phase();
    let scene_time = state.clock.scene_time();
    let t = if phase.pins_timeline() {
        config.scene_end()
    } else {
        scene_time
    };
    let (yaw, pitch) = state
        .user
        .compose(timeline_yaw(speed.cumulative_rotation(t), scene_time));
    let visuals = state.fade.visuals();

    SceneSnapshot {
        active_time: state.clock.active_time_seconds(),
        displayed_time: state.clock.displayed_time(),
        scene_time,
        segment: state.segment,
        fade_phase: phase,
        camera_eye: camera_path.sample(t),
        camera_target: CAMERA_TARGET,
        pose: ModelPose { yaw, pitch },
        exposure: visuals.exposure,
        background: visuals.background,
        overlay_opacity: visuals.overlay_opacity,
        intro_overlay_opacity: intro_overlay_opacity(
            state.clock.active_time_seconds(),
            config.intro_end(),
        ),
        meta_ui_opacity: state.triggers.meta_opacity(),
        show_drag_hint: state.triggers.hint_visible(),
        show_shaping_message: state.triggers.shaping_visible(),
        show_ending_line: visuals.ending_line,
        fading_to_black: state.fade.is_fading_to_black(),
        starting: state.triggers.is_starting(),
        audio_ready: state.audio_ready,
        music_playing: state.music_playing,
        model_loaded: state.model_loaded,
    }
}
