//! Piecewise-linear keyframe tracks.
//!
//! A track is an immutable, non-empty list of `(t, value)` samples sorted by
//! time. Sampling clamps to the first/last value outside the keyed range and
//! interpolates linearly in between.

use crate::error::{Result, TimelineError};
use glam::Vec3;

/// Values that can be blended linearly by a fraction in `[0, 1]`.
pub trait Lerp: Copy {
    fn lerp(self, to: Self, f: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(self, to: Self, f: f32) -> Self {
        self + (to - self) * f
    }
}

impl Lerp for Vec3 {
    #[inline]
    fn lerp(self, to: Self, f: f32) -> Self {
        Vec3::lerp(self, to, f)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe<V> {
    pub t: f32,
    pub value: V,
}

impl<V> Keyframe<V> {
    pub const fn new(t: f32, value: V) -> Self {
        Self { t, value }
    }
}

#[derive(Clone, Debug)]
pub struct KeyframeTrack<V> {
    keys: Vec<Keyframe<V>>,
}

impl<V: Lerp> KeyframeTrack<V> {
    /// Build a track, rejecting empty or out-of-order input.
    ///
    /// Repeated timestamps are accepted; sampling resolves them to the later
    /// key instead of dividing by a zero-length span.
    pub fn new(label: &'static str, keys: Vec<Keyframe<V>>) -> Result<Self> {
        if keys.is_empty() {
            return Err(TimelineError::EmptyTrack { track: label });
        }
        for (index, pair) in keys.windows(2).enumerate() {
            if !(pair[1].t >= pair[0].t) {
                return Err(TimelineError::UnsortedKeyframes {
                    track: label,
                    index: index + 1,
                    t: pair[1].t,
                });
            }
        }
        Ok(Self { keys })
    }

    pub fn keys(&self) -> &[Keyframe<V>] {
        &self.keys
    }

    pub fn start_time(&self) -> f32 {
        self.keys[0].t
    }

    pub fn end_time(&self) -> f32 {
        self.keys[self.keys.len() - 1].t
    }

    pub fn sample(&self, t: f32) -> V {
        let first = self.keys[0];
        if t <= first.t {
            return first.value;
        }
        for pair in self.keys.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.t {
                let span = b.t - a.t;
                if span <= 0.0 {
                    return b.value;
                }
                return a.value.lerp(b.value, (t - a.t) / span);
            }
        }
        self.keys[self.keys.len() - 1].value
    }
}

impl KeyframeTrack<Vec3> {
    pub fn from_positions(label: &'static str, points: &[(f32, [f32; 3])]) -> Result<Self> {
        let keys = points
            .iter()
            .map(|&(t, p)| Keyframe::new(t, Vec3::from_array(p)))
            .collect();
        Self::new(label, keys)
    }
}

impl KeyframeTrack<f32> {
    pub fn from_scalars(label: &'static str, points: &[(f32, f32)]) -> Result<Self> {
        let keys = points.iter().map(|&(t, v)| Keyframe::new(t, v)).collect();
        Self::new(label, keys)
    }
}
