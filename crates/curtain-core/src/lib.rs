//! Curtain Core - Playback Widget Library
//!
//! This crate provides the platform-independent half of a single-video
//! playback widget:
//! - Playback state record (playing, volume, position, duration)
//! - One-time start gate deferring playback to a user gesture
//! - Play/pause, seek, volume and fullscreen handlers
//! - Time tracking from media notifications
//! - `MM:SS` time formatting
//! - Render model and inline styles
//! - Listener table and guards scoped to the mounted lifetime
//!
//! # Architecture
//!
//! ```text
//!   user input / media notification
//!                 │
//!         ┌───────┴────────┐        ┌────────────────┐
//!         │    Playback    │───────►│  MediaElement  │  (platform)
//!         │     Widget     │───────►│ FullscreenHost │  (platform)
//!         └───────┬────────┘        └────────────────┘
//!                 │
//!   ┌─────────────┼─────────────┬──────────────┐
//!   │ Playback    │ Start       │ Failure      │
//!   │ State       │ Gate        │ Log          │
//!   └─────────────┴──────┬──────┴──────────────┘
//!                        │
//!                 ┌──────┴───────┐
//!                 │  WidgetView  │ ──► renderer
//!                 └──────────────┘
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod events;
pub mod format;
pub mod lifecycle;
pub mod media;
pub mod state;
pub mod style;
pub mod view;
pub mod widget;

pub use config::WidgetConfig;
pub use diagnostics::{FailureLog, FailureRecord, Operation};
pub use error::{Error, Result};
pub use events::{Action, Binding, EventSource, Payload, BINDINGS};
pub use format::{format_progress, format_time};
pub use lifecycle::{Detach, Mount, Registrar, ScopedListener};
pub use media::{valid_duration, FullscreenHost, MediaElement};
pub use state::{FullscreenState, PlaybackState, StartGate};
pub use style::Style;
pub use view::WidgetView;
pub use widget::PlaybackWidget;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
