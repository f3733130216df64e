//! Error types for Curtain Core

use thiserror::Error;
use tracing::warn;

/// Result type alias for widget operations
pub type Result<T> = std::result::Result<T, Error>;

/// Widget error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // Platform rejections
    #[error("Playback start rejected: {0}")]
    PlaybackStart(String),

    #[error("Fullscreen request rejected: {0}")]
    FullscreenEnter(String),

    #[error("Fullscreen exit rejected: {0}")]
    FullscreenExit(String),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Rendering errors
    #[error("DOM error: {0}")]
    Dom(String),
}

impl Error {
    /// Returns the error code for diagnostics
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::PlaybackStart(_) => "PLAYBACK_START",
            Error::FullscreenEnter(_) => "FULLSCREEN_ENTER",
            Error::FullscreenExit(_) => "FULLSCREEN_EXIT",
            Error::InvalidConfig(_) => "INVALID_CONFIG",
            Error::Dom(_) => "DOM",
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidConfig(err.to_string())
    }
}

/// Log a swallowed failure.
///
/// Used both for synchronous rejections caught by the widget and for
/// asynchronous rejections observed by a platform binding.
pub fn report(err: &Error) {
    warn!(code = err.error_code(), error = %err, "Platform call failed");
}
