//! Widget inputs and the elements they are read from
//!
//! [`BINDINGS`] is the full listener table of a mounted widget. A
//! renderer registers one listener per entry and routes each event to
//! [`crate::PlaybackWidget::handle`].

/// Element, or the document, an event is listened for on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventSource {
    StartButton,
    PlayButton,
    Video,
    Seek,
    Volume,
    FullscreenButton,
    Document,
}

/// Handler an event is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Begin,
    TogglePlay,
    VideoClick,
    Seek,
    Volume,
    ToggleFullscreen,
    TimeUpdate,
    LoadedMetadata,
    MediaPlay,
    MediaPause,
    KeyDown,
    FullscreenChange,
}

/// What the handler reads from the event itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload {
    None,
    /// The firing input's current value
    InputValue,
    /// The pressed key's name
    Key,
}

impl Action {
    pub fn payload(&self) -> Payload {
        match self {
            Action::Seek | Action::Volume => Payload::InputValue,
            Action::KeyDown => Payload::Key,
            _ => Payload::None,
        }
    }
}

/// One listener: event `event` on `source` triggers `action`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub source: EventSource,
    pub event: &'static str,
    pub action: Action,
}

const fn bind(source: EventSource, event: &'static str, action: Action) -> Binding {
    Binding {
        source,
        event,
        action,
    }
}

/// Every listener a mounted widget holds
pub const BINDINGS: &[Binding] = &[
    // Controls
    bind(EventSource::StartButton, "click", Action::Begin),
    bind(EventSource::PlayButton, "click", Action::TogglePlay),
    bind(EventSource::Video, "click", Action::VideoClick),
    bind(EventSource::Seek, "input", Action::Seek),
    bind(EventSource::Volume, "input", Action::Volume),
    bind(EventSource::FullscreenButton, "click", Action::ToggleFullscreen),
    // Media notifications
    bind(EventSource::Video, "timeupdate", Action::TimeUpdate),
    bind(EventSource::Video, "loadedmetadata", Action::LoadedMetadata),
    bind(EventSource::Video, "play", Action::MediaPlay),
    bind(EventSource::Video, "pause", Action::MediaPause),
    // Document-wide
    bind(EventSource::Document, "keydown", Action::KeyDown),
    bind(EventSource::Document, "fullscreenchange", Action::FullscreenChange),
    bind(EventSource::Document, "fullscreenerror", Action::FullscreenChange),
];
