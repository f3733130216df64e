//! Widget state records

use serde::{Deserialize, Serialize};

/// UI playback state, mutated only by widget handlers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackState {
    pub is_playing: bool,
    /// Volume in [0, 1]
    pub volume: f64,
    /// Position in seconds
    pub current_time: f64,
    /// Duration in seconds, 0 while unknown
    pub duration: f64,
}

impl PlaybackState {
    pub fn new(volume: f64) -> Self {
        Self {
            is_playing: false,
            volume: volume.clamp(0.0, 1.0),
            current_time: 0.0,
            duration: 0.0,
        }
    }

    /// Whether metadata has supplied a duration
    pub fn duration_known(&self) -> bool {
        self.duration > 0.0
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new(0.5)
    }
}

/// One-way gate shown until the first explicit start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartGate {
    shown: bool,
}

impl StartGate {
    pub fn new() -> Self {
        Self { shown: true }
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Dismiss the gate. Returns true only on the call that dismissed it.
    pub fn dismiss(&mut self) -> bool {
        std::mem::replace(&mut self.shown, false)
    }
}

impl Default for StartGate {
    fn default() -> Self {
        Self::new()
    }
}

/// Fullscreen display state, reconciled by fullscreen-change notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FullscreenState {
    #[default]
    Inactive,
    Entering,
    Active,
    Exiting,
}

impl FullscreenState {
    /// Settle to the platform's answer after a change notification
    pub fn reconcile(self, platform_active: bool) -> Self {
        if platform_active {
            FullscreenState::Active
        } else {
            FullscreenState::Inactive
        }
    }
}

impl std::fmt::Display for FullscreenState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FullscreenState::Inactive => write!(f, "inactive"),
            FullscreenState::Entering => write!(f, "entering"),
            FullscreenState::Active => write!(f, "active"),
            FullscreenState::Exiting => write!(f, "exiting"),
        }
    }
}
