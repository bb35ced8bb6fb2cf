use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimelineError {
    #[error("timeline has no scene segments")]
    NoSegments,

    #[error("{track} keyframe track is empty")]
    EmptyTrack { track: &'static str },

    #[error("{track} keyframe {index} at t={t} precedes the previous keyframe")]
    UnsortedKeyframes {
        track: &'static str,
        index: usize,
        t: f32,
    },

    #[error("segment {id} has an empty or inverted range [{start}, {end})")]
    InvalidSegmentRange { id: u32, start: f32, end: f32 },

    #[error("first segment starts at {0}s, expected 0")]
    FirstSegmentOffset(f32),

    #[error("segment {id} starts at {start}s but the previous segment ends at {previous_end}s")]
    SegmentGap {
        id: u32,
        start: f32,
        previous_end: f32,
    },

    #[error("last segment ends at {end}s but the scene lasts {scene}s")]
    SceneDurationMismatch { end: f32, scene: f32 },

    #[error("inconsistent audio durations: intro {intro}s, total {total}s, scene {scene}s")]
    AudioDurations { intro: f64, total: f64, scene: f32 },

    #[error("silence after end must be a non-negative number of seconds, got {0}")]
    InvalidSilence(f64),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TimelineError>;
