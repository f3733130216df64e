//! Integration tests for Curtain Core

use curtain_core::{
    format_time, Binding, Detach, Error, EventSource, FullscreenHost, FullscreenState,
    MediaElement, Mount, Operation, PlaybackWidget, Registrar, Result, WidgetConfig, BINDINGS,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

// =============================================================================
// Recording platform doubles
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Play,
    Pause,
    Seek(f64),
    Volume(f64),
    RequestFullscreen,
    ExitFullscreen,
}

type CallLog = Rc<RefCell<Vec<Call>>>;

struct RecordingMedia {
    calls: CallLog,
    reject_play: bool,
    reject_fullscreen: bool,
    position: Cell<f64>,
    duration: Cell<f64>,
    volume: Cell<f64>,
}

impl RecordingMedia {
    fn new(calls: &CallLog) -> Self {
        Self {
            calls: calls.clone(),
            reject_play: false,
            reject_fullscreen: false,
            position: Cell::new(0.0),
            duration: Cell::new(f64::NAN),
            volume: Cell::new(1.0),
        }
    }

    fn rejecting(calls: &CallLog) -> Self {
        Self {
            reject_play: true,
            reject_fullscreen: true,
            ..Self::new(calls)
        }
    }
}

impl MediaElement for RecordingMedia {
    fn play(&self) -> Result<()> {
        self.calls.borrow_mut().push(Call::Play);
        if self.reject_play {
            return Err(Error::PlaybackStart("NotAllowedError".into()));
        }
        Ok(())
    }

    fn pause(&self) {
        self.calls.borrow_mut().push(Call::Pause);
    }

    fn current_time(&self) -> f64 {
        self.position.get()
    }

    fn set_current_time(&self, seconds: f64) {
        self.calls.borrow_mut().push(Call::Seek(seconds));
        self.position.set(seconds);
    }

    fn duration(&self) -> f64 {
        self.duration.get()
    }

    fn volume(&self) -> f64 {
        self.volume.get()
    }

    fn set_volume(&self, volume: f64) {
        self.calls.borrow_mut().push(Call::Volume(volume));
        self.volume.set(volume);
    }

    fn paused(&self) -> bool {
        true
    }

    fn request_fullscreen(&self) -> Result<()> {
        self.calls.borrow_mut().push(Call::RequestFullscreen);
        if self.reject_fullscreen {
            return Err(Error::FullscreenEnter("user gesture required".into()));
        }
        Ok(())
    }
}

struct RecordingHost {
    calls: CallLog,
    active: Cell<bool>,
}

impl RecordingHost {
    fn new(calls: &CallLog) -> Self {
        Self {
            calls: calls.clone(),
            active: Cell::new(false),
        }
    }
}

impl FullscreenHost for RecordingHost {
    fn has_fullscreen_element(&self) -> bool {
        self.active.get()
    }

    fn exit_fullscreen(&self) -> Result<()> {
        self.calls.borrow_mut().push(Call::ExitFullscreen);
        Ok(())
    }
}

type TestWidget = PlaybackWidget<RecordingMedia, RecordingHost>;

fn setup(media: impl FnOnce(&CallLog) -> RecordingMedia) -> (TestWidget, CallLog) {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let calls: CallLog = Rc::new(RefCell::new(Vec::new()));
    let host = RecordingHost::new(&calls);
    let widget = PlaybackWidget::new(media(&calls), host, WidgetConfig::default()).unwrap();
    calls.borrow_mut().clear();
    (widget, calls)
}

fn count(calls: &CallLog, call: &Call) -> usize {
    calls.borrow().iter().filter(|c| *c == call).count()
}

// =============================================================================
// Time Formatter Tests
// =============================================================================

#[test]
fn test_format_time_properties() {
    assert_eq!(format_time(0.0), "00:00");
    assert_eq!(format_time(65.0), "01:05");
    assert_eq!(format_time(f64::NAN), "00:00");
    assert_eq!(format_time(3661.0), "61:01");
}

// =============================================================================
// Start Gate Tests
// =============================================================================

#[test]
fn test_start_gate_single_transition() {
    let (mut widget, calls) = setup(RecordingMedia::new);
    assert!(widget.is_start_gate_shown());
    assert!(widget.view().show_start_gate);

    widget.begin();
    assert!(!widget.is_start_gate_shown());
    assert_eq!(count(&calls, &Call::Play), 1);

    widget.begin();
    widget.begin();
    assert!(!widget.is_start_gate_shown());
    assert_eq!(count(&calls, &Call::Play), 1);
}

#[test]
fn test_start_gate_dismissed_even_when_play_rejected() {
    let (mut widget, _calls) = setup(RecordingMedia::rejecting);
    widget.begin();

    assert!(!widget.is_start_gate_shown());
    let failure = widget.failures().last().unwrap();
    assert_eq!(failure.operation, Operation::Begin);
    assert_eq!(failure.code, "PLAYBACK_START");
}

// =============================================================================
// Play / Pause Tests
// =============================================================================

#[test]
fn test_double_toggle_restores_state() {
    let (mut widget, calls) = setup(RecordingMedia::new);
    let initial = widget.state().is_playing;

    widget.toggle_play();
    widget.toggle_play();

    assert_eq!(widget.state().is_playing, initial);
    assert_eq!(*calls.borrow(), vec![Call::Play, Call::Pause]);
}

#[test]
fn test_double_toggle_restores_state_when_play_rejects() {
    let (mut widget, _calls) = setup(RecordingMedia::rejecting);
    let initial = widget.state().is_playing;

    widget.toggle_play();
    assert!(widget.state().is_playing);
    widget.toggle_play();

    assert_eq!(widget.state().is_playing, initial);
    assert_eq!(widget.failures().len(), 1);
}

#[test]
fn test_video_click_matches_button() {
    let (mut widget, calls) = setup(RecordingMedia::new);
    widget.on_video_click();
    assert!(widget.state().is_playing);
    assert_eq!(widget.view().play_label, "❚❚");
    assert_eq!(*calls.borrow(), vec![Call::Play]);
}

// =============================================================================
// Seek and Time Tracking Tests
// =============================================================================

#[test]
fn test_seek_mirrors_state_synchronously() {
    let (mut widget, calls) = setup(RecordingMedia::new);
    widget.media().duration.set(240.0);
    widget.on_loaded_metadata();

    for v in [0.0, 12.5, 120.0, 240.0] {
        widget.seek(v);
        assert_eq!(widget.state().current_time, v);
    }
    assert_eq!(count(&calls, &Call::Seek(120.0)), 1);
}

#[test]
fn test_seek_range_falls_back_before_metadata() {
    let (mut widget, _calls) = setup(RecordingMedia::new);
    assert_eq!(widget.view().seek_max, 100.0);

    widget.seek_input("42.5");
    assert_eq!(widget.state().current_time, 42.5);

    widget.seek_input("not a number");
    assert_eq!(widget.state().current_time, 42.5);
}

#[test]
fn test_time_update_and_metadata() {
    let (mut widget, _calls) = setup(RecordingMedia::new);

    widget.on_loaded_metadata();
    assert_eq!(widget.state().duration, 0.0);

    widget.media().duration.set(90.0);
    widget.on_loaded_metadata();
    assert_eq!(widget.state().duration, 90.0);

    widget.media().position.set(30.0);
    widget.on_time_update();
    assert_eq!(widget.state().current_time, 30.0);
    assert_eq!(widget.view().time_label, "00:30 / 01:30");
}

// =============================================================================
// Volume Tests
// =============================================================================

#[test]
fn test_volume_sets_element_and_state() {
    let (mut widget, _calls) = setup(RecordingMedia::new);
    widget.volume_input("0.3");
    assert_eq!(widget.media().volume(), 0.3);
    assert_eq!(widget.state().volume, 0.3);
}

#[test]
fn test_volume_clamped() {
    let (mut widget, _calls) = setup(RecordingMedia::new);
    widget.set_volume(1.7);
    assert_eq!(widget.state().volume, 1.0);
    widget.set_volume(-0.2);
    assert_eq!(widget.media().volume(), 0.0);
}

// =============================================================================
// Fullscreen Tests
// =============================================================================

#[test]
fn test_toggle_fullscreen_queries_platform() {
    let (mut widget, calls) = setup(RecordingMedia::new);

    widget.toggle_fullscreen();
    assert_eq!(widget.fullscreen_state(), FullscreenState::Entering);
    widget.host().active.set(true);
    widget.on_fullscreen_change();
    assert_eq!(widget.fullscreen_state(), FullscreenState::Active);

    widget.toggle_fullscreen();
    assert_eq!(*calls.borrow(), vec![Call::RequestFullscreen, Call::ExitFullscreen]);
}

#[test]
fn test_rejected_fullscreen_request_is_logged() {
    let (mut widget, _calls) = setup(RecordingMedia::rejecting);
    widget.toggle_fullscreen();

    assert_eq!(widget.fullscreen_state(), FullscreenState::Inactive);
    let failure = widget.failures().last().unwrap();
    assert_eq!(failure.code, "FULLSCREEN_ENTER");
    assert_eq!(failure.operation, Operation::ToggleFullscreen);
}

#[test]
fn test_escape_exits_once_per_keypress() {
    let (mut widget, calls) = setup(RecordingMedia::new);

    assert!(!widget.on_key_down("Escape"));
    assert_eq!(count(&calls, &Call::ExitFullscreen), 0);

    widget.host().active.set(true);
    assert!(widget.on_key_down("Escape"));
    assert_eq!(count(&calls, &Call::ExitFullscreen), 1);
    assert!(widget.on_key_down("Escape"));
    assert_eq!(count(&calls, &Call::ExitFullscreen), 2);
}

// =============================================================================
// Lifecycle Tests
// =============================================================================

type Registry = Rc<RefCell<Vec<(EventSource, &'static str)>>>;

struct RecordingRegistrar {
    registry: Registry,
    fail_on: Option<&'static str>,
}

impl RecordingRegistrar {
    fn new(registry: &Registry) -> Self {
        Self {
            registry: registry.clone(),
            fail_on: None,
        }
    }
}

struct Registration {
    registry: Registry,
    key: (EventSource, &'static str),
}

impl Detach for Registration {
    fn detach(&mut self) {
        let mut registry = self.registry.borrow_mut();
        if let Some(pos) = registry.iter().position(|key| *key == self.key) {
            registry.remove(pos);
        }
    }
}

impl Registrar for RecordingRegistrar {
    type Registration = Registration;

    fn register(&mut self, binding: &Binding) -> Result<Registration> {
        if self.fail_on == Some(binding.event) {
            return Err(Error::Dom(format!("cannot listen for {}", binding.event)));
        }
        let key = (binding.source, binding.event);
        self.registry.borrow_mut().push(key);
        Ok(Registration {
            registry: self.registry.clone(),
            key,
        })
    }
}

fn has_escape_listener(registry: &Registry) -> bool {
    registry
        .borrow()
        .contains(&(EventSource::Document, "keydown"))
}

#[test]
fn test_mount_unmount_leaves_no_listener() {
    let registry = Registry::default();
    let mut registrar = RecordingRegistrar::new(&registry);

    let mount = Mount::attach(&mut registrar, BINDINGS).unwrap();
    assert!(has_escape_listener(&registry));
    assert_eq!(mount.len(), BINDINGS.len());
    assert_eq!(registry.borrow().len(), BINDINGS.len());

    drop(mount);
    assert!(!has_escape_listener(&registry));
    assert!(registry.borrow().is_empty());
}

#[test]
fn test_explicit_unmount_then_drop() {
    let registry = Registry::default();
    let mut mount = Mount::attach(&mut RecordingRegistrar::new(&registry), BINDINGS).unwrap();

    mount.release();
    assert!(mount.is_empty());
    assert!(!has_escape_listener(&registry));

    drop(mount);
    assert!(registry.borrow().is_empty());
}

#[test]
fn test_failed_mount_releases_registered_listeners() {
    let registry = Registry::default();
    let mut registrar = RecordingRegistrar {
        fail_on: Some("fullscreenerror"),
        ..RecordingRegistrar::new(&registry)
    };

    let err = Mount::attach(&mut registrar, BINDINGS).err().unwrap();
    assert_eq!(err.error_code(), "DOM");
    assert!(!has_escape_listener(&registry));
    assert!(registry.borrow().is_empty());
}

#[test]
fn test_remount_cycles_do_not_accumulate() {
    let registry = Registry::default();
    let mut registrar = RecordingRegistrar::new(&registry);

    for _ in 0..3 {
        let mount = Mount::attach(&mut registrar, BINDINGS).unwrap();
        assert_eq!(registry.borrow().len(), BINDINGS.len());
        drop(mount);
    }
    assert!(registry.borrow().is_empty());
}

#[test]
fn test_bound_keydown_reaches_escape_handler() {
    let (mut widget, calls) = setup(RecordingMedia::new);
    let keydown = BINDINGS
        .iter()
        .find(|b| b.source == EventSource::Document && b.event == "keydown")
        .unwrap();

    widget.handle(keydown.action, Some("Escape"));
    assert_eq!(count(&calls, &Call::ExitFullscreen), 0);

    widget.host().active.set(true);
    widget.handle(keydown.action, Some("Escape"));
    assert_eq!(count(&calls, &Call::ExitFullscreen), 1);
}

#[test]
fn test_state_json_snapshot() {
    let (mut widget, _calls) = setup(RecordingMedia::new);
    widget.set_volume(0.3);
    let json: serde_json::Value = serde_json::from_str(&widget.state().to_json()).unwrap();
    assert_eq!(json["volume"], 0.3);
    assert_eq!(json["isPlaying"], false);
}
