// Host-side tests for display formatting.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod format {
    include!("../src/format.rs");
}

use format::*;

#[test]
fn time_labels() {
    assert_eq!(format_time(0.0), "0:00");
    assert_eq!(format_time(9.99), "0:09");
    assert_eq!(format_time(61.0), "1:01");
    assert_eq!(format_time(371.4), "6:11");
    assert_eq!(format_time(3600.0), "60:00");
}

#[test]
fn bad_times_read_as_zero() {
    assert_eq!(format_time(-4.0), "0:00");
    assert_eq!(format_time(f64::NAN), "0:00");
    assert_eq!(format_time(f64::INFINITY), "0:00");
}

#[test]
fn marker_percent_is_clamped() {
    assert_eq!(percent_css(12.5), "12.500%");
    assert_eq!(percent_css(-1.0), "0.000%");
    assert_eq!(percent_css(140.0), "100.000%");
}

#[test]
fn opacity_updates_only_past_a_step() {
    assert_eq!(quantize_opacity(0.5, None, 100.0), Some(0.5));
    assert_eq!(quantize_opacity(0.502, Some(0.5), 100.0), None);
    assert_eq!(quantize_opacity(0.52, Some(0.5), 100.0), Some(0.52));
    assert_eq!(quantize_opacity(1.7, Some(0.5), 100.0), Some(1.0));
    assert_eq!(quantize_opacity(-0.2, None, 100.0), Some(0.0));
}
