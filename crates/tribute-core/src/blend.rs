use crate::constants::{
    DRAG_SENSITIVITY_RAD_PER_PX, MAX_FRAME_DT_SEC, PITCH_LIMIT_RAD, ROTATION_RETURN_SPEED,
    ROTATION_VARIATION, ROTATION_VARIATION_FREQ,
};
use glam::Vec2;

/// Rotation contributed by dragging the model, layered over the timeline pose.
///
/// Yaw spins freely; pitch is clamped to `±PITCH_LIMIT_RAD`. Once released,
/// both offsets ease back to zero exponentially.
#[derive(Clone, Debug, Default)]
pub struct UserOverride {
    yaw: f32,
    pitch: f32,
    dragging: bool,
    last_pointer: Vec2,
}

impl UserOverride {
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn set_offsets(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch.clamp(-PITCH_LIMIT_RAD, PITCH_LIMIT_RAD);
    }

    pub fn begin_drag(&mut self, x: f32, y: f32) {
        self.dragging = true;
        self.last_pointer = Vec2::new(x, y);
    }

    /// Returns `false` when no drag is in progress.
    pub fn drag_to(&mut self, x: f32, y: f32) -> bool {
        if !self.dragging {
            return false;
        }
        let p = Vec2::new(x, y);
        let d = p - self.last_pointer;
        self.last_pointer = p;
        self.yaw += d.x * DRAG_SENSITIVITY_RAD_PER_PX;
        self.pitch = (self.pitch + d.y * DRAG_SENSITIVITY_RAD_PER_PX)
            .clamp(-PITCH_LIMIT_RAD, PITCH_LIMIT_RAD);
        true
    }

    /// Returns whether a drag was actually in progress.
    pub fn end_drag(&mut self) -> bool {
        std::mem::replace(&mut self.dragging, false)
    }

    /// Ease both offsets toward zero. No-op while dragging.
    pub fn relax(&mut self, dt_sec: f32) {
        if self.dragging {
            return;
        }
        let dt = dt_sec.clamp(0.0, MAX_FRAME_DT_SEC);
        let ease = 1.0 - (-ROTATION_RETURN_SPEED * dt).exp();
        self.yaw -= self.yaw * ease;
        self.pitch -= self.pitch * ease;
    }

    /// Final `(yaw, pitch)` of the model.
    pub fn compose(&self, timeline_yaw: f32) -> (f32, f32) {
        (timeline_yaw + self.yaw, self.pitch)
    }
}

/// Slow multiplicative sway applied to the integrated timeline yaw.
#[inline]
pub fn breathing_factor(scene_time: f32) -> f32 {
    1.0 + ROTATION_VARIATION * (scene_time * ROTATION_VARIATION_FREQ).sin()
}

#[inline]
pub fn timeline_yaw(cumulative_rotation: f32, scene_time: f32) -> f32 {
    cumulative_rotation * breathing_factor(scene_time)
}
