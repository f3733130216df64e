//! Playback Widget - event handlers over a media element
//!
//! Every user interaction and media notification lands in exactly one
//! handler here. Handlers run to completion, update [`PlaybackState`], and
//! leave re-rendering to the caller via [`PlaybackWidget::view`].
//!
//! Platform commands that can fail (play, fullscreen) are fired and the
//! UI state is updated immediately; failures are logged and recorded,
//! never rolled back. The media element's own play/pause and
//! fullscreen-change notifications later reconcile whatever the
//! optimistic update got wrong.

use crate::{
    config::WidgetConfig,
    diagnostics::{FailureLog, Operation},
    events::Action,
    media::{valid_duration, FullscreenHost, MediaElement},
    state::{FullscreenState, PlaybackState, StartGate},
    view::WidgetView,
    Result,
};
use tracing::{debug, info};

/// The playback widget: state record, start gate, and control handlers
pub struct PlaybackWidget<M, H> {
    media: M,
    host: H,
    config: WidgetConfig,
    state: PlaybackState,
    gate: StartGate,
    fullscreen: FullscreenState,
    failures: FailureLog,
}

impl<M: MediaElement, H: FullscreenHost> PlaybackWidget<M, H> {
    /// Create a widget over a media element and its document.
    ///
    /// Pushes the configured initial volume to the element so state and
    /// element agree from the start.
    pub fn new(media: M, host: H, config: WidgetConfig) -> Result<Self> {
        let failures = FailureLog::new(config.max_logged_failures);
        Self::with_failure_log(media, host, config, failures)
    }

    /// Create a widget that records into an existing failure log, shared
    /// with the platform bindings.
    pub fn with_failure_log(
        media: M,
        host: H,
        config: WidgetConfig,
        failures: FailureLog,
    ) -> Result<Self> {
        config.validate()?;

        let state = PlaybackState::new(config.initial_volume);
        media.set_volume(state.volume);

        info!(source = %config.source_url, volume = state.volume, "Playback widget created");

        Ok(Self {
            media,
            host,
            config,
            state,
            gate: StartGate::new(),
            fullscreen: FullscreenState::Inactive,
            failures,
        })
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn failures(&self) -> &FailureLog {
        &self.failures
    }

    pub fn is_start_gate_shown(&self) -> bool {
        self.gate.is_shown()
    }

    pub fn fullscreen_state(&self) -> FullscreenState {
        self.fullscreen
    }

    /// Upper bound of the seek range
    pub fn seek_max(&self) -> f64 {
        if self.state.duration_known() {
            self.state.duration
        } else {
            self.config.seek_fallback_max
        }
    }

    /// Current render model
    pub fn view(&self) -> WidgetView {
        WidgetView::new(
            &self.state,
            self.gate.is_shown(),
            self.fullscreen,
            self.seek_max(),
        )
    }

    /// Route a bound event to its handler.
    ///
    /// `payload` is the input value or key name for actions that read one;
    /// such actions do nothing without it.
    pub fn handle(&mut self, action: Action, payload: Option<&str>) {
        match action {
            Action::Begin => self.begin(),
            Action::TogglePlay => self.toggle_play(),
            Action::VideoClick => self.on_video_click(),
            Action::Seek => {
                if let Some(value) = payload {
                    self.seek_input(value);
                }
            }
            Action::Volume => {
                if let Some(value) = payload {
                    self.volume_input(value);
                }
            }
            Action::ToggleFullscreen => self.toggle_fullscreen(),
            Action::TimeUpdate => self.on_time_update(),
            Action::LoadedMetadata => self.on_loaded_metadata(),
            Action::MediaPlay => self.on_media_play(),
            Action::MediaPause => self.on_media_pause(),
            Action::KeyDown => {
                if let Some(key) = payload {
                    self.on_key_down(key);
                }
            }
            Action::FullscreenChange => self.on_fullscreen_change(),
        }
    }

    // ---------------------------------------------------------------------
    // Start gate
    // ---------------------------------------------------------------------

    /// Dismiss the start gate and start playback.
    ///
    /// Only the first call does anything. A rejected start is recorded and
    /// the gate stays dismissed.
    pub fn begin(&mut self) {
        if !self.gate.dismiss() {
            debug!("Start gate already dismissed");
            return;
        }

        info!("Start gate dismissed, starting playback");

        if let Err(err) = self.media.play() {
            self.failures.record(Operation::Begin, &err);
        }
        self.state.is_playing = true;
    }

    // ---------------------------------------------------------------------
    // Play / pause
    // ---------------------------------------------------------------------

    /// Pause if playing, play otherwise, then flip `is_playing`.
    ///
    /// The flip is unconditional on the outcome of `play`.
    pub fn toggle_play(&mut self) {
        if self.state.is_playing {
            self.media.pause();
        } else if let Err(err) = self.media.play() {
            self.failures.record(Operation::TogglePlay, &err);
        }

        self.state.is_playing = !self.state.is_playing;
        debug!(is_playing = self.state.is_playing, "Toggled playback");
    }

    /// Click on the video surface
    pub fn on_video_click(&mut self) {
        self.toggle_play();
    }

    /// Media element started playing
    pub fn on_media_play(&mut self) {
        self.sync_playing();
    }

    /// Media element paused (including end of media)
    pub fn on_media_pause(&mut self) {
        self.sync_playing();
    }

    /// Take `is_playing` from the element's own paused flag
    fn sync_playing(&mut self) {
        let playing = !self.media.paused();
        if playing != self.state.is_playing {
            debug!(is_playing = playing, "Reconciled playback state");
        }
        self.state.is_playing = playing;
    }

    // ---------------------------------------------------------------------
    // Seek and time tracking
    // ---------------------------------------------------------------------

    /// Seek to `seconds`, clamped into the seek range.
    pub fn seek(&mut self, seconds: f64) {
        if seconds.is_nan() {
            debug!("Ignoring NaN seek");
            return;
        }

        let target = seconds.clamp(0.0, self.seek_max());
        self.media.set_current_time(target);
        self.state.current_time = target;
        debug!(position = target, "Seeked");
    }

    /// Seek from a range input's string value
    pub fn seek_input(&mut self, value: &str) {
        match value.trim().parse::<f64>() {
            Ok(seconds) => self.seek(seconds),
            Err(_) => debug!(value, "Ignoring unparsable seek value"),
        }
    }

    /// Time-progress notification
    pub fn on_time_update(&mut self) {
        let position = self.media.current_time();
        if !position.is_finite() {
            return;
        }

        self.state.current_time = if self.state.duration_known() {
            position.clamp(0.0, self.state.duration)
        } else {
            position.max(0.0)
        };
    }

    /// Metadata-loaded notification
    pub fn on_loaded_metadata(&mut self) {
        let Some(duration) = valid_duration(self.media.duration()) else {
            debug!("Metadata loaded without a usable duration");
            return;
        };

        self.state.duration = duration;
        self.state.current_time = self.state.current_time.min(duration);
        info!(duration, "Duration known");
    }

    // ---------------------------------------------------------------------
    // Volume
    // ---------------------------------------------------------------------

    /// Set volume, clamped into [0, 1]
    pub fn set_volume(&mut self, volume: f64) {
        if volume.is_nan() {
            debug!("Ignoring NaN volume");
            return;
        }

        let volume = volume.clamp(0.0, 1.0);
        self.media.set_volume(volume);
        self.state.volume = volume;
        debug!(volume, "Volume changed");
    }

    /// Set volume from a range input's string value
    pub fn volume_input(&mut self, value: &str) {
        match value.trim().parse::<f64>() {
            Ok(volume) => self.set_volume(volume),
            Err(_) => debug!(value, "Ignoring unparsable volume value"),
        }
    }

    // ---------------------------------------------------------------------
    // Fullscreen
    // ---------------------------------------------------------------------

    /// Exit fullscreen if the document has a fullscreen element, otherwise
    /// request it for the media element.
    pub fn toggle_fullscreen(&mut self) {
        let result = if self.host.has_fullscreen_element() {
            self.fullscreen = FullscreenState::Exiting;
            self.host.exit_fullscreen()
        } else {
            self.fullscreen = FullscreenState::Entering;
            self.media.request_fullscreen()
        };

        if let Err(err) = result {
            self.failures.record(Operation::ToggleFullscreen, &err);
            self.on_fullscreen_change();
        }
    }

    /// Document keydown. Returns true when an exit was issued.
    pub fn on_key_down(&mut self, key: &str) -> bool {
        if key != "Escape" || !self.host.has_fullscreen_element() {
            return false;
        }

        self.fullscreen = FullscreenState::Exiting;
        if let Err(err) = self.host.exit_fullscreen() {
            self.failures.record(Operation::EscapeKey, &err);
            self.on_fullscreen_change();
        }
        true
    }

    /// Fullscreen change or error notification
    pub fn on_fullscreen_change(&mut self) {
        let next = self.fullscreen.reconcile(self.host.has_fullscreen_element());
        if next != self.fullscreen {
            debug!(from = %self.fullscreen, to = %next, "Fullscreen state");
        }
        self.fullscreen = next;
    }
}
