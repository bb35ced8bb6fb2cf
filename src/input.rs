/// What a key press asks the scene to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyAction {
    /// Begin playback on first use, then play/pause.
    TogglePlayback,
    SeekBy(f64),
    Finale,
    ToggleHint,
    ToggleFullscreen,
    ExitFullscreen,
}

/// Map a `KeyboardEvent.key` value to an action.
#[inline]
pub fn action_for_key(key: &str, seek_step: f64) -> Option<KeyAction> {
    match key {
        " " | "Spacebar" => Some(KeyAction::TogglePlayback),
        "ArrowLeft" => Some(KeyAction::SeekBy(-seek_step)),
        "ArrowRight" => Some(KeyAction::SeekBy(seek_step)),
        "f" | "F" => Some(KeyAction::Finale),
        "h" | "H" => Some(KeyAction::ToggleHint),
        "Enter" => Some(KeyAction::ToggleFullscreen),
        "Escape" => Some(KeyAction::ExitFullscreen),
        _ => None,
    }
}

/// Keys typed into form fields must not drive the scene.
#[inline]
pub fn is_text_entry_tag(tag_name: &str) -> bool {
    matches!(
        tag_name.to_ascii_uppercase().as_str(),
        "INPUT" | "TEXTAREA" | "SELECT"
    )
}

/// Parse the seekbar's value (seconds) and clamp it to the track.
pub fn parse_seek_value(value: &str, total_duration: f64) -> Option<f64> {
    let t: f64 = value.trim().parse().ok()?;
    t.is_finite().then(|| t.clamp(0.0, total_duration.max(0.0)))
}
