// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn playback_and_seek_keys() {
    assert_eq!(action_for_key(" ", 5.0), Some(KeyAction::TogglePlayback));
    assert_eq!(action_for_key("ArrowLeft", 5.0), Some(KeyAction::SeekBy(-5.0)));
    assert_eq!(action_for_key("ArrowRight", 2.5), Some(KeyAction::SeekBy(2.5)));
}

#[test]
fn letter_keys_ignore_case() {
    for key in ["f", "F"] {
        assert_eq!(action_for_key(key, 5.0), Some(KeyAction::Finale));
    }
    for key in ["h", "H"] {
        assert_eq!(action_for_key(key, 5.0), Some(KeyAction::ToggleHint));
    }
    assert_eq!(action_for_key("Enter", 5.0), Some(KeyAction::ToggleFullscreen));
    assert_eq!(action_for_key("Escape", 5.0), Some(KeyAction::ExitFullscreen));
}

#[test]
fn unmapped_keys_do_nothing() {
    for key in ["a", "Shift", "ArrowUp", "", "Space"] {
        assert_eq!(action_for_key(key, 5.0), None, "{key:?}");
    }
}

#[test]
fn form_fields_swallow_keys() {
    assert!(is_text_entry_tag("INPUT"));
    assert!(is_text_entry_tag("textarea"));
    assert!(is_text_entry_tag("Select"));
    assert!(!is_text_entry_tag("CANVAS"));
    assert!(!is_text_entry_tag("BUTTON"));
}

#[test]
fn seek_values_parse_and_clamp() {
    assert_eq!(parse_seek_value("42.5", 100.0), Some(42.5));
    assert_eq!(parse_seek_value(" 7 ", 100.0), Some(7.0));
    assert_eq!(parse_seek_value("-3", 100.0), Some(0.0));
    assert_eq!(parse_seek_value("250", 100.0), Some(100.0));
    assert_eq!(parse_seek_value("", 100.0), None);
    assert_eq!(parse_seek_value("abc", 100.0), None);
    assert_eq!(parse_seek_value("NaN", 100.0), None);
    assert_eq!(parse_seek_value("inf", 100.0), None);
}
