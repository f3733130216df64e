//! Render model derived from widget state

use crate::format::format_progress;
use crate::state::{FullscreenState, PlaybackState};
use serde::Serialize;

/// Play button glyph while paused
pub const PLAY_GLYPH: &str = "▶";
/// Play button glyph while playing
pub const PAUSE_GLYPH: &str = "❚❚";
/// Fullscreen button glyph
pub const FULLSCREEN_GLYPH: &str = "🗖";
/// Volume label glyph
pub const VOLUME_GLYPH: &str = "🔊";

/// Everything a renderer needs to draw the controls
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetView {
    pub show_start_gate: bool,
    pub play_label: &'static str,
    pub seek_max: f64,
    pub seek_value: f64,
    pub time_label: String,
    pub volume: f64,
    pub fullscreen: FullscreenState,
}

impl WidgetView {
    /// `seek_max` is the range bound the widget computed for `state`.
    pub fn new(
        state: &PlaybackState,
        show_start_gate: bool,
        fullscreen: FullscreenState,
        seek_max: f64,
    ) -> Self {
        Self {
            show_start_gate,
            play_label: if state.is_playing { PAUSE_GLYPH } else { PLAY_GLYPH },
            seek_max,
            seek_value: state.current_time,
            time_label: format_progress(state.current_time, state.duration),
            volume: state.volume,
            fullscreen,
        }
    }
}
