//! Time formatting for the control bar

/// Format seconds as zero-padded `MM:SS`.
///
/// Zero, NaN, negative and infinite input render as `00:00`. There is no
/// hour field: an hour and a minute is `61:01`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "00:00".to_string();
    }

    let whole = seconds.floor() as u64;
    let mins = whole / 60;
    let secs = whole % 60;

    format!("{mins:02}:{secs:02}")
}

/// Format the `current / total` label shown next to the seek bar.
pub fn format_progress(current: f64, duration: f64) -> String {
    format!("{} / {}", format_time(current), format_time(duration))
}
