// Front-end constants. The page markup is expected to provide the ids below;
// an element that is missing is simply not updated.

// Audio source used when the page has no `<audio id="track-audio">`
pub const AUDIO_SRC: &str = "assets/goodbye-apparat.mp3";

// DOM ids
pub const CANVAS_ID: &str = "scene-canvas";
pub const CANVAS_CONTAINER_ID: &str = "scene-container";
pub const AUDIO_ELEMENT_ID: &str = "track-audio";
pub const TIMELINE_CONFIG_ID: &str = "timeline-config";
pub const INTRO_OVERLAY_ID: &str = "intro-overlay";
pub const NARRATIVE_OVERLAY_ID: &str = "narrative-overlay";
pub const SEGMENT_TITLE_ID: &str = "segment-title";
pub const SEGMENT_TIME_ID: &str = "segment-time";
pub const SEGMENT_SANSKRIT_ID: &str = "segment-sanskrit";
pub const SEGMENT_TRANSLATION_ID: &str = "segment-translation";
pub const SEGMENT_DESCRIPTION_ID: &str = "segment-description";
pub const DRAG_HINT_ID: &str = "drag-hint";
pub const SHAPING_MESSAGE_ID: &str = "shaping-message";
pub const ENDING_LINE_ID: &str = "ending-line";
pub const META_UI_ID: &str = "meta-ui";
pub const STARTING_INDICATOR_ID: &str = "starting-indicator";
pub const LOADING_INDICATOR_ID: &str = "loading-indicator";
pub const BEGIN_BUTTON_ID: &str = "begin-button";
pub const PLAY_TOGGLE_ID: &str = "play-toggle";
pub const FINALE_BUTTON_ID: &str = "finale-button";
pub const SEEKBAR_ID: &str = "seekbar";
pub const SEGMENT_MARKERS_ID: &str = "segment-markers";
pub const TIME_CURRENT_ID: &str = "time-current";
pub const TIME_TOTAL_ID: &str = "time-total";
pub const TRACK_LABEL_ID: &str = "track-label";

// Class toggled on overlay elements instead of removing them
pub const HIDDEN_CLASS: &str = "hidden";
pub const FADING_CLASS: &str = "fading-to-black";

// Camera projection
pub const CAMERA_FOV_DEG: f32 = 35.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Canvas backing store never exceeds 2x CSS pixels
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

// Keyboard seek step (seconds of audio)
pub const SEEK_STEP_SEC: f64 = 5.0;

// Opacity written to the DOM is rounded to this many steps to avoid style churn
pub const OPACITY_STEPS: f32 = 100.0;

// Stand-in figure tessellation
pub const FIGURE_SEGMENTS: u32 = 48;
pub const FIGURE_RINGS: u32 = 40;
