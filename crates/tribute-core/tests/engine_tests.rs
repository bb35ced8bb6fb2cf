// Frame-by-frame scenarios through the scene engine.

use tribute_core::constants::{CAMERA_KEYFRAMES, SPEED_KEYFRAMES};
use tribute_core::*;

fn engine() -> SceneEngine {
    let cfg = TimelineConfig::builtin().expect("built-in timeline");
    SceneEngine::new(cfg).expect("engine")
}

fn ready_engine() -> SceneEngine {
    let mut e = engine();
    e.on_audio_event(AudioEvent::Ready, 0.0);
    e
}

#[test]
fn initial_snapshot_shows_intro_and_hint() {
    let e = engine();
    let s = e.snapshot();
    assert_eq!(s.active_time, 0.0);
    assert_eq!(s.segment, Some(0));
    assert_eq!(s.fade_phase, FadePhase::None);
    assert_eq!(s.intro_overlay_opacity, 1.0);
    assert!(s.show_drag_hint);
    assert!(!s.audio_ready);
    assert_eq!(s.camera_eye.to_array(), CAMERA_KEYFRAMES[0].1);
}

#[test]
fn begin_is_refused_until_audio_is_ready() {
    let mut e = engine();
    let mut out = Commands::new();
    assert!(!e.begin_playback(0.0, &mut out));
    assert!(out.is_empty());
    assert!(!e.state().started);

    e.on_audio_event(AudioEvent::Ready, 0.1);
    assert!(e.begin_playback(0.2, &mut out));
    assert_eq!(
        out.as_slice(),
        &[EngineCommand::Seek(13.0), EngineCommand::Play]
    );
    assert!(e.state().started);
}

#[test]
fn starting_indicator_clears_after_minimum_time() {
    let mut e = ready_engine();
    let mut out = Commands::new();
    e.begin_playback(1.0, &mut out);
    out.clear();

    assert!(e.step(1.01, Some(13.0), &mut out).starting);
    e.on_audio_event(AudioEvent::Playing, 1.1);
    assert!(e.step(1.2, Some(13.1), &mut out).starting);
    out.clear();

    let s = e.step(1.61, Some(13.5), &mut out);
    assert!(!s.starting);
    assert!(s.music_playing);
    assert!(out.contains(&EngineCommand::Resize));
}

#[test]
fn play_rejection_clears_starting_state() {
    let mut e = ready_engine();
    let mut out = Commands::new();
    e.begin_playback(0.0, &mut out);
    e.on_audio_event(AudioEvent::PlayRejected, 0.1);
    let s = e.step(0.2, Some(13.0), &mut out);
    assert!(!s.starting);
    assert!(!s.music_playing);
}

#[test]
fn segments_follow_audio_position() {
    let mut e = ready_engine();
    let mut out = Commands::new();
    assert_eq!(e.step(0.0, Some(20.0), &mut out).segment, Some(0));
    assert_eq!(e.step(0.1, Some(40.0), &mut out).segment, Some(1));
    assert_eq!(e.active_segment().map(|s| s.id), Some(2));
    assert_eq!(e.step(0.2, Some(110.0), &mut out).segment, Some(5));
}

#[test]
fn intro_overlay_fades_with_active_time() {
    let mut e = ready_engine();
    let mut out = Commands::new();
    assert_eq!(e.step(0.0, Some(12.0), &mut out).intro_overlay_opacity, 1.0);
    let o = e.step(0.1, Some(14.0), &mut out).intro_overlay_opacity;
    assert!((o - 0.5).abs() < 1e-6);
    assert_eq!(e.step(0.2, Some(16.0), &mut out).intro_overlay_opacity, 0.0);
}

#[test]
fn end_of_track_pauses_once() {
    let mut e = ready_engine();
    let mut out = Commands::new();
    e.step(0.0, Some(136.95), &mut out);
    assert_eq!(
        out.iter().filter(|c| **c == EngineCommand::Pause).count(),
        1
    );
    assert_eq!(e.snapshot().displayed_time, 137.0);
    out.clear();
    for i in 1..10 {
        e.step(i as f64 * 0.016, Some(137.0), &mut out);
    }
    assert!(!out.contains(&EngineCommand::Pause));
    assert_eq!(e.snapshot().fade_phase, FadePhase::None, "end does not fade");
}

#[test]
fn toggle_begins_then_pauses_and_resumes() {
    let mut e = ready_engine();
    let mut out = Commands::new();
    assert!(e.toggle_playback(0.0, &mut out));
    assert!(out.contains(&EngineCommand::Play));
    e.on_audio_event(AudioEvent::Playing, 0.1);

    out.clear();
    e.toggle_playback(1.0, &mut out);
    assert_eq!(out.as_slice(), &[EngineCommand::Pause]);
    e.on_audio_event(AudioEvent::Paused, 1.0);

    out.clear();
    e.toggle_playback(2.0, &mut out);
    assert_eq!(out.as_slice(), &[EngineCommand::Play]);
}

#[test]
fn toggle_at_end_rewinds_to_intro_end() {
    let mut e = ready_engine();
    let mut out = Commands::new();
    e.toggle_playback(0.0, &mut out);
    e.step(0.1, Some(137.0), &mut out);
    e.on_audio_event(AudioEvent::Paused, 0.1);
    out.clear();
    e.toggle_playback(0.2, &mut out);
    assert_eq!(
        out.as_slice(),
        &[EngineCommand::Seek(13.0), EngineCommand::Play]
    );
}

#[test]
fn seeking_clamps_and_updates_segment() {
    let mut e = ready_engine();
    let mut out = Commands::new();
    assert_eq!(e.seek_to(60.0, &mut out), 60.0);
    assert_eq!(e.state().segment, Some(2));
    assert_eq!(e.seek_by(-100.0, &mut out), 0.0);
    assert_eq!(e.seek_to(500.0, &mut out), 137.0);
    assert_eq!(
        out.as_slice(),
        &[
            EngineCommand::Seek(60.0),
            EngineCommand::Seek(0.0),
            EngineCommand::Seek(137.0)
        ]
    );
}

#[test]
fn fade_pins_pose_and_restarts_from_intro_end() {
    let mut e = ready_engine();
    let mut out = Commands::new();
    e.begin_playback(0.0, &mut out);
    e.step(0.016, Some(50.0), &mut out);
    assert!(e.request_fade_to_black(1.0));
    assert!(!e.request_fade_to_black(1.1));

    let s = e.step(1.0, Some(60.0), &mut out).clone();
    assert_eq!(s.fade_phase, FadePhase::Fading);
    assert!(s.fading_to_black);
    assert_eq!(s.active_time, 50.0, "audio position is ignored while fading");
    assert_eq!(s.camera_eye.to_array(), CAMERA_KEYFRAMES[6].1);
    let speed = SpeedCurve::from_pairs(&SPEED_KEYFRAMES).expect("speed");
    let expected_yaw = speed.cumulative_rotation(124.0) * breathing_factor(s.scene_time);
    assert!((s.pose.yaw - expected_yaw).abs() < 1e-5);

    assert_eq!(e.step(2.5, Some(60.0), &mut out).fade_phase, FadePhase::Silence);
    assert_eq!(e.snapshot().exposure, 0.0);

    out.clear();
    let s = e.step(4.5, Some(60.0), &mut out).clone();
    assert_eq!(s.fade_phase, FadePhase::Restarting);
    assert_eq!(s.active_time, 13.0);
    assert_eq!(s.segment, Some(0));
    assert!(!s.fading_to_black);
    assert_eq!(
        out.as_slice(),
        &[EngineCommand::Seek(13.0), EngineCommand::Play]
    );

    out.clear();
    let s = e.step(4.6, Some(13.0), &mut out).clone();
    assert_eq!(s.fade_phase, FadePhase::None);
    assert_eq!(out.as_slice(), &[EngineCommand::Resize]);
    assert!(s.exposure > 1.0);
}

#[test]
fn fade_runs_without_an_audio_source() {
    let mut e = engine();
    let mut out = Commands::new();
    e.request_fade_to_black(0.0);
    e.step(0.0, None, &mut out);
    e.step(1.5, None, &mut out);
    assert_eq!(e.snapshot().fade_phase, FadePhase::Silence);
    e.step(3.5, None, &mut out);
    assert_eq!(e.snapshot().fade_phase, FadePhase::Restarting);
}

#[test]
fn fade_can_be_disabled_by_timeline() {
    let mut cfg = TimelineConfig::builtin().expect("built-in timeline");
    cfg.loop_behavior.fade_to_black = false;
    let mut e = SceneEngine::new(cfg).expect("engine");
    assert!(!e.request_fade_to_black(0.0));
}

#[test]
fn drag_offsets_pose_and_relaxes_after_release() {
    let mut e = ready_engine();
    let mut out = Commands::new();
    assert!(!e.pointer_down(2, 0.0, 0.0), "secondary button ignored");
    assert!(e.pointer_down(0, 0.0, 0.0));
    assert!(e.pointer_move(250.0, 0.0));
    let s = e.step(0.0, Some(13.0), &mut out);
    assert!((s.pose.yaw - 1.0).abs() < 1e-6, "timeline yaw is zero at scene start");
    assert!(!s.show_drag_hint);

    assert!(e.pointer_up(0.0));
    assert!(!e.pointer_up(0.0), "pointerleave after pointerup is a no-op");
    assert!(e.state().triggers.shaping_visible());

    let mut prev = 1.0;
    for i in 1..=60 {
        let yaw = e.step(i as f64 / 60.0, Some(13.0), &mut out).pose.yaw;
        assert!(yaw < prev);
        prev = yaw;
    }
    assert!((prev - (-0.7f32).exp()).abs() < 1e-3, "yaw after 1s = {prev}");
}

#[test]
fn shaping_message_dismissal_is_rescheduled_by_second_drag() {
    let mut e = ready_engine();
    let mut out = Commands::new();
    e.pointer_down(0, 0.0, 0.0);
    e.pointer_up(1.0);
    assert!(e.step(1.0, None, &mut out).show_shaping_message);

    e.pointer_down(0, 0.0, 0.0);
    e.pointer_up(3.0);
    assert!(e.step(4.6, None, &mut out).show_shaping_message);
    assert!(!e.step(6.5, None, &mut out).show_shaping_message);

    e.pointer_down(0, 0.0, 0.0);
    e.pointer_up(7.0);
    assert!(!e.step(7.1, None, &mut out).show_shaping_message);
}

#[test]
fn audio_error_disables_playback() {
    let mut e = ready_engine();
    e.on_audio_event(AudioEvent::Error, 0.0);
    let mut out = Commands::new();
    assert!(!e.begin_playback(0.1, &mut out));
    assert!(!e.step(0.2, None, &mut out).audio_ready);
}

#[test]
fn teardown_cancels_tasks_and_freezes_engine() {
    let mut e = ready_engine();
    let mut out = Commands::new();
    e.begin_playback(0.0, &mut out);
    e.pointer_down(0, 0.0, 0.0);
    e.pointer_up(0.01);
    e.step(0.02, Some(13.0), &mut out);
    assert_eq!(e.teardown(), 2);
    assert!(e.state().is_torn_down());

    out.clear();
    let before = e.snapshot().clone();
    let after = e.step(10.0, Some(80.0), &mut out).clone();
    assert!(out.is_empty());
    assert_eq!(after.active_time, before.active_time);
    assert!(after.show_shaping_message, "no dismissal fires after teardown");
    assert!(!e.pointer_down(0, 0.0, 0.0));
    assert!(!e.request_fade_to_black(10.0));

    // Late media events and controls change nothing and queue nothing.
    let frozen = e.state().clock.active_time_seconds();
    e.on_audio_event(AudioEvent::Playing, 10.5);
    e.on_audio_event(AudioEvent::PlayRejected, 10.5);
    assert_eq!(e.seek_to(80.0, &mut out), frozen);
    assert_eq!(e.seek_by(5.0, &mut out), frozen);
    assert!(!e.toggle_playback(10.6, &mut out));
    e.set_scrubbing(true);
    assert!(out.is_empty(), "commands after teardown: {out:?}");
    assert_eq!(e.state().scheduler.pending(), 0);
    assert_eq!(e.state().clock.active_time_seconds(), frozen);
    assert!(!e.state().clock.is_scrubbing());
    assert!(!e.state().music_playing);
}

#[test]
fn model_loaded_flag_reaches_snapshot() {
    let mut e = engine();
    let mut out = Commands::new();
    e.set_model_loaded(true);
    assert!(e.step(0.0, None, &mut out).model_loaded);
}
