/// `m:ss` label for a playback position. Negative or non-finite input reads as 0.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

/// CSS `left` value for a marker at `percent` of the seekbar.
#[inline]
pub fn percent_css(percent: f32) -> String {
    format!("{:.3}%", percent.clamp(0.0, 100.0))
}

/// Opacity quantized for `style.opacity`; returns `None` when the change is
/// below one step.
pub fn quantize_opacity(value: f32, previous: Option<f32>, steps: f32) -> Option<f32> {
    let q = (value.clamp(0.0, 1.0) * steps).round() / steps;
    match previous {
        Some(p) if (p - q).abs() < 0.5 / steps => None,
        _ => Some(q),
    }
}
