use glam::Vec3;

// Shared timing and interaction tuning constants for the scene engine.

// Fade/loop cycle
pub const FADE_DURATION_SEC: f64 = 1.5; // exposure + background ramp to black
pub const ENDING_LINE_AFTER_SEC: f64 = 0.3; // caption appears this far into the fade
pub const END_OF_TRACK_EPSILON_SEC: f64 = 0.1;

// Look
pub const INITIAL_EXPOSURE: f32 = 1.6;
pub const INITIAL_BACKGROUND_HEX: u32 = 0x0a0a0f;

// Drag override
pub const DRAG_SENSITIVITY_RAD_PER_PX: f32 = 0.004;
pub const PITCH_LIMIT_RAD: f32 = 0.5; // symmetric tilt clamp
pub const ROTATION_RETURN_SPEED: f32 = 0.7; // 1/s, exponential return to timeline
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Breathing modulation of the timeline yaw
pub const ROTATION_VARIATION: f32 = 0.05;
pub const ROTATION_VARIATION_FREQ: f32 = 0.5; // rad per scene second

// One-shot UI
pub const HINT_MIN_SCENE_SEC: f32 = 1.0;
pub const HINT_AUTO_DISMISS_SEC: f32 = 30.0;
pub const SHAPING_MESSAGE_SEC: f64 = 3.5;
pub const MIN_STARTING_INDICATOR_SEC: f64 = 0.6;
pub const META_UI_OPACITY: f32 = 0.95;
pub const META_UI_FADE_START_SEC: f32 = 15.0;
pub const META_UI_FADE_END_SEC: f32 = 20.0;
pub const INTRO_FADE_DURATION_SEC: f64 = 2.0;
pub const RESIZE_SETTLE_SEC: f64 = 0.05;

// Camera path in scene seconds; the camera always looks at the origin.
pub const CAMERA_TARGET: Vec3 = Vec3::ZERO;
pub const CAMERA_KEYFRAMES: [(f32, [f32; 3]); 7] = [
    (0.0, [0.0, 0.2, 5.0]),
    (17.0, [0.0, 0.0, 5.0]),
    (37.0, [0.0, 0.0, 5.0]),
    (57.0, [0.0, -0.35, 5.3]),
    (77.0, [0.0, -0.2, 5.1]),
    (92.0, [0.0, 0.0, 5.0]),
    (124.0, [0.0, 0.0, 5.0]),
];

// Angular speed (rad/s) of the model; the plateau at zero holds the final pose.
pub const SPEED_KEYFRAMES: [(f32, f32); 7] = [
    (0.0, 0.002),
    (17.0, 0.006),
    (37.0, 0.008),
    (57.0, 0.006),
    (77.0, 0.002),
    (92.0, 0.0),
    (124.0, 0.0),
];

#[inline]
pub fn rgb_from_hex(hex: u32) -> Vec3 {
    let r = ((hex >> 16) & 0xff) as f32 / 255.0;
    let g = ((hex >> 8) & 0xff) as f32 / 255.0;
    let b = (hex & 0xff) as f32 / 255.0;
    Vec3::new(r, g, b)
}

#[inline]
pub fn initial_background() -> Vec3 {
    rgb_from_hex(INITIAL_BACKGROUND_HEX)
}
