//! Visual-side state types shared with the web frontend.
//!
//! These types avoid referencing platform-specific APIs. The renderer
//! consumes them to build camera and model matrices, the overlay reads the
//! UI fields of `SceneSnapshot`.

use crate::fade::FadePhase;
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(fovy_degrees: f32, aspect: f32, znear: f32, zfar: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: fovy_degrees.to_radians(),
            znear,
            zfar,
        }
    }

    pub fn look_at(&mut self, eye: Vec3, target: Vec3) {
        self.eye = eye;
        self.target = target;
    }

    /// Ignores degenerate sizes (collapsed or hidden canvas).
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width >= 1 && height >= 1 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Model orientation: pitch is applied after yaw, so the tilt stays relative
/// to the viewer however far the model has spun.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ModelPose {
    pub yaw: f32,
    pub pitch: f32,
}

impl ModelPose {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.pitch) * Mat4::from_rotation_y(self.yaw)
    }
}

/// Everything the presentation layer needs for one frame.
#[derive(Clone, Debug)]
pub struct SceneSnapshot {
    pub active_time: f64,
    pub displayed_time: f64,
    pub scene_time: f32,
    /// Index into `TimelineConfig::scene_timeline`.
    pub segment: Option<usize>,
    pub fade_phase: FadePhase,

    pub camera_eye: Vec3,
    pub camera_target: Vec3,
    pub pose: ModelPose,
    pub exposure: f32,
    pub background: Vec3,

    pub overlay_opacity: f32,
    pub intro_overlay_opacity: f32,
    pub meta_ui_opacity: f32,
    pub show_drag_hint: bool,
    pub show_shaping_message: bool,
    pub show_ending_line: bool,
    pub fading_to_black: bool,
    pub starting: bool,

    pub audio_ready: bool,
    pub music_playing: bool,
    pub model_loaded: bool,
}
