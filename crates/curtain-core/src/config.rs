//! Widget configuration
//!
//! All fields have defaults, so a host may pass a partial JSON object
//! (or nothing) and get the stock birthday-video widget.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default media source
pub const DEFAULT_SOURCE: &str = "/happy_birthday_NV.mp4";

/// Configuration for a playback widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Media source URL
    pub source_url: String,
    /// MIME type announced on the `<source>` element
    pub mime_type: String,
    /// Volume at mount (0-1)
    pub initial_volume: f64,
    /// Seek range maximum while the duration is unknown
    pub seek_fallback_max: f64,
    /// Volume range step
    pub volume_step: f64,
    /// Media element autoplay flag
    pub autoplay: bool,
    /// Media element muted flag
    pub muted: bool,
    /// Media element loop flag
    pub looping: bool,
    /// Inline playback hint
    pub plays_inline: bool,
    /// Start gate button text
    pub start_label: String,
    /// Fallback content for browsers without video support
    pub unsupported_text: String,
    /// Capacity of the failure log
    pub max_logged_failures: usize,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE.to_string(),
            mime_type: "video/mp4".to_string(),
            initial_volume: 0.5,
            seek_fallback_max: 100.0,
            volume_step: 0.1,
            autoplay: false,
            muted: false,
            looping: false,
            plays_inline: true,
            start_label: "▶ Start watching".to_string(),
            unsupported_text: "Your browser does not support video.".to_string(),
            max_logged_failures: 64,
        }
    }
}

impl WidgetConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: WidgetConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.source_url.trim().is_empty() {
            return Err(Error::InvalidConfig("source_url must not be empty".into()));
        }
        if !(0.0..=1.0).contains(&self.initial_volume) {
            return Err(Error::InvalidConfig(format!(
                "initial_volume {} outside [0, 1]",
                self.initial_volume
            )));
        }
        if !self.seek_fallback_max.is_finite() || self.seek_fallback_max <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "seek_fallback_max {} must be positive",
                self.seek_fallback_max
            )));
        }
        if !(self.volume_step > 0.0 && self.volume_step <= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "volume_step {} outside (0, 1]",
                self.volume_step
            )));
        }
        Ok(())
    }
}
