// Host-side tests for front-end constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn projection_is_sane() {
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    assert!(CAMERA_NEAR > 0.0);
    assert!(CAMERA_FAR > CAMERA_NEAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn input_and_resize_limits() {
    assert!(MAX_DEVICE_PIXEL_RATIO >= 1.0);
    assert!(SEEK_STEP_SEC > 0.0);
    assert!(OPACITY_STEPS >= 10.0);
    assert!(FIGURE_RINGS >= 2 && FIGURE_SEGMENTS >= 3);
    // lathe + ground disc must stay addressable with u16 indices
    let vertices = FIGURE_RINGS * (FIGURE_SEGMENTS + 1) + FIGURE_SEGMENTS + 2;
    assert!(vertices < u16::MAX as u32);
}

#[test]
fn dom_ids_are_unique_and_well_formed() {
    let ids = [
        CANVAS_ID,
        CANVAS_CONTAINER_ID,
        AUDIO_ELEMENT_ID,
        TIMELINE_CONFIG_ID,
        INTRO_OVERLAY_ID,
        NARRATIVE_OVERLAY_ID,
        SEGMENT_TITLE_ID,
        SEGMENT_TIME_ID,
        SEGMENT_SANSKRIT_ID,
        SEGMENT_TRANSLATION_ID,
        SEGMENT_DESCRIPTION_ID,
        DRAG_HINT_ID,
        SHAPING_MESSAGE_ID,
        ENDING_LINE_ID,
        META_UI_ID,
        STARTING_INDICATOR_ID,
        LOADING_INDICATOR_ID,
        BEGIN_BUTTON_ID,
        PLAY_TOGGLE_ID,
        FINALE_BUTTON_ID,
        SEEKBAR_ID,
        SEGMENT_MARKERS_ID,
        TIME_CURRENT_ID,
        TIME_TOTAL_ID,
        TRACK_LABEL_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        assert!(!a.contains(' ') && !a.starts_with('#'), "bad id {a:?}");
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert!(AUDIO_SRC.ends_with(".mp3"));
}
