//! Static description of the experience: audio offsets, narrative segments and
//! loop behaviour.
//!
//! Segment times are scene-relative (seconds since the intro ends); audio times
//! are positions in the track. A configuration is validated whenever it is
//! built, so the lookups below can rely on a sorted, contiguous, non-empty
//! segment list.

use crate::error::{Result, TimelineError};
use serde::{Deserialize, Serialize};

/// Built-in timeline for "Goodbye" (Apparat).
pub static GOODBYE_TIMELINE_JSON: &str = include_str!("../data/goodbye.json");

const DURATION_TOLERANCE_SEC: f64 = 1e-3;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeLabel {
    pub start: String,
    pub end: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneSegment {
    pub id: u32,
    pub title: String,
    pub time: TimeLabel,
    pub start_seconds: f32,
    pub end_seconds: f32,
    pub sanskrit: String,
    pub translation: String,
    pub description: String,
}

impl SceneSegment {
    /// Half-open containment: `start <= t < end`.
    #[inline]
    pub fn contains(&self, t: f32) -> bool {
        t >= self.start_seconds && t < self.end_seconds
    }

    pub fn duration(&self) -> f32 {
        self.end_seconds - self.start_seconds
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioInfo {
    pub track: String,
    pub artist: String,
    /// Dark intro + welcome caption; the scene clock starts here.
    pub intro_end_seconds: f64,
    pub total_duration_seconds: f64,
    pub total_scene_duration_seconds: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoopBehavior {
    pub fade_to_black: bool,
    pub silence_after_end_seconds: f64,
    pub restart_from: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineConfig {
    pub audio: AudioInfo,
    pub scene_timeline: Vec<SceneSegment>,
    pub loop_behavior: LoopBehavior,
}

impl TimelineConfig {
    pub fn new(
        audio: AudioInfo,
        scene_timeline: Vec<SceneSegment>,
        loop_behavior: LoopBehavior,
    ) -> Result<Self> {
        let config = Self {
            audio,
            scene_timeline,
            loop_behavior,
        };
        config.validate()?;
        Ok(config)
    }

    /// The timeline shipped with the scene.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(GOODBYE_TIMELINE_JSON)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let audio = &self.audio;
        let scene_from_audio = audio.total_duration_seconds - audio.intro_end_seconds;
        if !(audio.intro_end_seconds >= 0.0)
            || !(audio.total_duration_seconds > audio.intro_end_seconds)
            || (scene_from_audio - audio.total_scene_duration_seconds as f64).abs()
                > DURATION_TOLERANCE_SEC
        {
            return Err(TimelineError::AudioDurations {
                intro: audio.intro_end_seconds,
                total: audio.total_duration_seconds,
                scene: audio.total_scene_duration_seconds,
            });
        }
        let silence = self.loop_behavior.silence_after_end_seconds;
        if !(silence >= 0.0) {
            return Err(TimelineError::InvalidSilence(silence));
        }

        let first = self
            .scene_timeline
            .first()
            .ok_or(TimelineError::NoSegments)?;
        if first.start_seconds != 0.0 {
            return Err(TimelineError::FirstSegmentOffset(first.start_seconds));
        }
        let mut previous_end: Option<f32> = None;
        for seg in &self.scene_timeline {
            if !(seg.end_seconds > seg.start_seconds) {
                return Err(TimelineError::InvalidSegmentRange {
                    id: seg.id,
                    start: seg.start_seconds,
                    end: seg.end_seconds,
                });
            }
            if let Some(prev) = previous_end {
                if seg.start_seconds != prev {
                    return Err(TimelineError::SegmentGap {
                        id: seg.id,
                        start: seg.start_seconds,
                        previous_end: prev,
                    });
                }
            }
            previous_end = Some(seg.end_seconds);
        }
        let end = previous_end.unwrap_or(0.0);
        let scene = audio.total_scene_duration_seconds;
        if (end - scene).abs() > DURATION_TOLERANCE_SEC as f32 {
            return Err(TimelineError::SceneDurationMismatch { end, scene });
        }
        Ok(())
    }

    pub fn intro_end(&self) -> f64 {
        self.audio.intro_end_seconds
    }

    pub fn total_duration(&self) -> f64 {
        self.audio.total_duration_seconds
    }

    /// Scene time at which the timeline ends (end of the last segment).
    pub fn scene_end(&self) -> f32 {
        self.audio.total_scene_duration_seconds
    }

    pub fn silence_after_end(&self) -> f64 {
        self.loop_behavior.silence_after_end_seconds
    }

    /// Index of the segment active at scene time `t`.
    ///
    /// Past the end of the timeline the last segment stays active. `None` is
    /// only possible for `t` before the first segment, which a validated
    /// config never sees since scene time is clamped at 0.
    pub fn segment_index_at(&self, t: f32) -> Option<usize> {
        if let Some(i) = self.scene_timeline.iter().position(|seg| seg.contains(t)) {
            return Some(i);
        }
        let last = self.scene_timeline.len().checked_sub(1)?;
        (t >= self.scene_timeline[last].end_seconds).then_some(last)
    }

    pub fn segment_at(&self, t: f32) -> Option<&SceneSegment> {
        self.segment_index_at(t).map(|i| &self.scene_timeline[i])
    }

    /// Position of a segment's start on the audio seekbar, in percent.
    pub fn marker_percent(&self, segment: &SceneSegment) -> f32 {
        let t = self.audio.intro_end_seconds + segment.start_seconds as f64;
        (t / self.audio.total_duration_seconds * 100.0) as f32
    }
}
