//! Platform media capability contract
//!
//! The widget never touches a browser API directly. It drives a
//! [`MediaElement`] and queries a [`FullscreenHost`]; the WASM crate
//! implements both over `web_sys`, tests implement them with recorders.

use crate::Result;

/// The playback primitive (decode, render, audio) the widget controls.
///
/// `play` and `request_fullscreen` are asynchronous on every real platform.
/// An `Err` here is a synchronous rejection; implementations report later
/// rejections themselves through [`crate::error::report`].
pub trait MediaElement {
    /// Start or resume playback
    fn play(&self) -> Result<()>;

    /// Pause playback
    fn pause(&self);

    /// Current position in seconds
    fn current_time(&self) -> f64;

    /// Seek to a position in seconds
    fn set_current_time(&self, seconds: f64);

    /// Total duration in seconds, NaN until metadata has loaded
    fn duration(&self) -> f64;

    /// Volume in [0, 1]
    fn volume(&self) -> f64;

    /// Set volume in [0, 1]
    fn set_volume(&self, volume: f64);

    /// Whether the element reports itself paused
    fn paused(&self) -> bool;

    /// Ask the platform to show this element fullscreen
    fn request_fullscreen(&self) -> Result<()>;
}

/// The document-level fullscreen query and exit.
pub trait FullscreenHost {
    /// Whether any element is currently fullscreen
    fn has_fullscreen_element(&self) -> bool;

    /// Leave fullscreen
    fn exit_fullscreen(&self) -> Result<()>;
}

/// Returns the duration only when it is a usable positive number.
pub fn valid_duration(duration: f64) -> Option<f64> {
    (duration.is_finite() && duration > 0.0).then_some(duration)
}
