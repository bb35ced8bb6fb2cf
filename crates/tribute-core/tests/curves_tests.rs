// Keyframe sampling and the integrated rotation curve.

use glam::Vec3;
use tribute_core::constants::{CAMERA_KEYFRAMES, SPEED_KEYFRAMES};
use tribute_core::*;

fn camera_track() -> KeyframeTrack<Vec3> {
    KeyframeTrack::from_positions("camera", &CAMERA_KEYFRAMES).expect("camera keys")
}

fn speed_curve() -> SpeedCurve {
    SpeedCurve::from_pairs(&SPEED_KEYFRAMES).expect("speed keys")
}

#[test]
fn camera_sample_clamps_outside_keyed_range() {
    let track = camera_track();
    assert_eq!(track.sample(-5.0), Vec3::new(0.0, 0.2, 5.0));
    assert_eq!(track.sample(0.0), Vec3::new(0.0, 0.2, 5.0));
    assert_eq!(track.sample(124.0), Vec3::new(0.0, 0.0, 5.0));
    assert_eq!(track.sample(500.0), Vec3::new(0.0, 0.0, 5.0));
}

#[test]
fn camera_sample_interpolates_linearly() {
    let track = camera_track();
    let mid = track.sample(8.5);
    assert!((mid.y - 0.1).abs() < 1e-6);
    assert!((mid.z - 5.0).abs() < 1e-6);

    let p = track.sample(47.0);
    assert!((p.y + 0.175).abs() < 1e-5, "y = {}", p.y);
    assert!((p.z - 5.15).abs() < 1e-5, "z = {}", p.z);
}

#[test]
fn sample_hits_key_values_exactly() {
    let track = camera_track();
    for &(t, p) in CAMERA_KEYFRAMES.iter() {
        let v = track.sample(t);
        assert!((v - Vec3::from_array(p)).length() < 1e-6, "mismatch at t={t}");
    }
}

#[test]
fn track_rejects_empty_and_unsorted_keys() {
    let empty = KeyframeTrack::<f32>::from_scalars("empty", &[]);
    assert!(matches!(empty, Err(TimelineError::EmptyTrack { .. })));

    let unsorted = KeyframeTrack::from_scalars("bad", &[(0.0, 1.0), (5.0, 2.0), (3.0, 0.0)]);
    match unsorted {
        Err(TimelineError::UnsortedKeyframes { index, t, .. }) => {
            assert_eq!(index, 2);
            assert_eq!(t, 3.0);
        }
        other => panic!("expected UnsortedKeyframes, got {other:?}"),
    }
}

#[test]
fn repeated_timestamps_step_to_later_key() {
    let track =
        KeyframeTrack::from_scalars("step", &[(0.0, 0.0), (1.0, 1.0), (1.0, 3.0), (2.0, 3.0)])
            .expect("valid keys");
    assert!((track.sample(0.5) - 0.5).abs() < 1e-6);
    assert!((track.sample(1.5) - 3.0).abs() < 1e-6);
}

#[test]
fn single_key_track_is_constant() {
    let track = KeyframeTrack::from_scalars("one", &[(4.0, 2.5)]).expect("one key");
    assert_eq!(track.sample(-1.0), 2.5);
    assert_eq!(track.sample(4.0), 2.5);
    assert_eq!(track.sample(10.0), 2.5);
}

#[test]
fn rotation_is_zero_at_and_before_start() {
    let speed = speed_curve();
    assert_eq!(speed.cumulative_rotation(0.0), 0.0);
    assert_eq!(speed.cumulative_rotation(-3.0), 0.0);
    assert_eq!(speed.cumulative_rotation(f32::NAN), 0.0);
}

#[test]
fn rotation_integrates_partial_span() {
    let speed = speed_curve();
    // s(10) = 0.002 + 0.004 * 10/17
    let s10 = 0.002 + 0.004 * 10.0 / 17.0;
    let expected = (0.002 + s10) * 0.5 * 10.0;
    let got = speed.cumulative_rotation(10.0);
    assert!((got - expected).abs() < 1e-6, "got {got}, expected {expected}");
    assert!((speed.cumulative_rotation(17.0) - 0.068).abs() < 1e-6);
}

#[test]
fn rotation_total_matches_trapezoid_sum_and_holds() {
    let speed = speed_curve();
    let total = 0.068 + 0.14 + 0.14 + 0.08 + 0.015;
    assert!((speed.cumulative_rotation(92.0) - total).abs() < 1e-5);
    assert!((speed.cumulative_rotation(124.0) - total).abs() < 1e-5);
    // Nothing accumulates past the final key.
    assert!((speed.cumulative_rotation(300.0) - total).abs() < 1e-5);
}

#[test]
fn rotation_is_monotonic_for_non_negative_speeds() {
    let speed = speed_curve();
    let mut prev = 0.0;
    for i in 0..=1300 {
        let t = i as f32 * 0.1;
        let r = speed.cumulative_rotation(t);
        assert!(r + 1e-6 >= prev, "rotation decreased at t={t}");
        prev = r;
    }
}

#[test]
fn rotation_counts_only_between_keys() {
    let speed = SpeedCurve::from_pairs(&[(2.0, 1.0), (4.0, 3.0)]).expect("keys");
    // Nothing before the first key, even though speed_at holds 1.0 there.
    assert!((speed.speed_at(1.0) - 1.0).abs() < 1e-6);
    assert!(speed.cumulative_rotation(1.0).abs() < 1e-6);
    assert!(speed.cumulative_rotation(2.0).abs() < 1e-6);
    // Half the span: (1 + 2) / 2 * 1 = 1.5.
    assert!((speed.cumulative_rotation(3.0) - 1.5).abs() < 1e-6);
    // Full span: (1 + 3) / 2 * 2 = 4, held past the last key.
    assert!((speed.cumulative_rotation(4.0) - 4.0).abs() < 1e-6);
    assert!((speed.cumulative_rotation(9.0) - 4.0).abs() < 1e-6);
}

#[test]
fn constant_speed_curve_stops_at_last_key() {
    let speed = SpeedCurve::from_pairs(&[(0.0, 1.0), (10.0, 1.0)]).expect("keys");
    assert!((speed.cumulative_rotation(20.0) - 10.0).abs() < 1e-5);
    let late = SpeedCurve::from_pairs(&[(5.0, 1.0), (10.0, 1.0)]).expect("keys");
    assert!((late.cumulative_rotation(10.0) - 5.0).abs() < 1e-5);
}

#[test]
fn rotation_ignores_keys_before_zero() {
    let speed = SpeedCurve::from_pairs(&[(-2.0, 0.0), (2.0, 4.0)]).expect("keys");
    // From 0 the speed ramps 2 -> 4 over two seconds.
    assert!((speed.cumulative_rotation(2.0) - 6.0).abs() < 1e-6);
}

#[test]
fn breathing_keeps_yaw_within_five_percent() {
    for i in 0..500 {
        let t = i as f32 * 0.3;
        let f = breathing_factor(t);
        assert!((0.95 - 1e-6..=1.05 + 1e-6).contains(&f), "factor {f} at {t}");
    }
    assert!((timeline_yaw(2.0, 0.0) - 2.0).abs() < 1e-6);
}

#[test]
fn triangle_speed_curve_integrates_exactly() {
    let speed = SpeedCurve::from_pairs(&[(0.0, 0.0), (10.0, 10.0), (20.0, 0.0)]).expect("keys");
    assert!((speed.speed_at(5.0) - 5.0).abs() < 1e-6);
    assert!((speed.speed_at(15.0) - 5.0).abs() < 1e-6);
    assert!((speed.cumulative_rotation(10.0) - 50.0).abs() < 1e-4);
    assert!((speed.cumulative_rotation(20.0) - 100.0).abs() < 1e-4);
    assert!((speed.cumulative_rotation(25.0) - 100.0).abs() < 1e-4);
}
