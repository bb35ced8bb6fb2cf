//! Model yaw derived from a piecewise-linear angular-speed curve.
//!
//! The absolute rotation is the integral of the speed curve from scene time 0,
//! so the pose depends only on where playback is, never on how many frames
//! were rendered to get there.

use crate::error::Result;
use crate::keyframe::{Keyframe, KeyframeTrack};

#[derive(Clone, Debug)]
pub struct SpeedCurve {
    track: KeyframeTrack<f32>,
}

impl SpeedCurve {
    pub fn new(keys: Vec<Keyframe<f32>>) -> Result<Self> {
        Ok(Self {
            track: KeyframeTrack::new("rotation speed", keys)?,
        })
    }

    pub fn from_pairs(points: &[(f32, f32)]) -> Result<Self> {
        Ok(Self {
            track: KeyframeTrack::from_scalars("rotation speed", points)?,
        })
    }

    pub fn track(&self) -> &KeyframeTrack<f32> {
        &self.track
    }

    /// Instantaneous angular speed (rad/s) at scene time `t`.
    pub fn speed_at(&self, t: f32) -> f32 {
        self.track.sample(t)
    }

    /// Total rotation (rad) accumulated between scene time 0 and `t`.
    ///
    /// Each keyed span contributes its trapezoid; the span containing `t` is
    /// cut at `t` with its end speed interpolated. Nothing accumulates before
    /// the first key or after the last one.
    pub fn cumulative_rotation(&self, t: f32) -> f32 {
        if !(t > 0.0) {
            return 0.0;
        }
        let keys = self.track.keys();
        let mut total = 0.0;
        for pair in keys.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= a.t {
                break;
            }
            let span = b.t - a.t;
            if span <= 0.0 {
                continue;
            }
            // Keys before scene time 0 only count from 0 onwards.
            let start = a.t.max(0.0);
            let end = t.min(b.t);
            if end <= start {
                continue;
            }
            let s_start = a.value + (b.value - a.value) * ((start - a.t) / span);
            let s_end = a.value + (b.value - a.value) * ((end - a.t) / span);
            total += (s_start + s_end) * 0.5 * (end - start);
        }
        total
    }
}
