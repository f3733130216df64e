//! Mountable player handle exposed to JavaScript

use crate::dom::WidgetDom;
use crate::listener::EventListener;
use crate::platform::{describe, WebDocument, WebMedia};
use curtain_core::{
    Binding, Error, EventSource, FailureLog, Mount, Payload, PlaybackState, PlaybackWidget,
    Registrar, Result, WidgetConfig, BINDINGS,
};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlInputElement, KeyboardEvent};

type WebWidget = PlaybackWidget<WebMedia, WebDocument>;
type SharedWidget = Rc<RefCell<WebWidget>>;

fn to_js(err: Error) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Current value of the range input that fired `event`
fn input_value(event: &Event) -> Option<String> {
    event
        .target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
}

/// Value a handler reads from `event`
fn payload(kind: Payload, event: &Event) -> Option<String> {
    match kind {
        Payload::None => None,
        Payload::InputValue => input_value(event),
        Payload::Key => event.dyn_ref::<KeyboardEvent>().map(|e| e.key()),
    }
}

/// Registers listeners on the widget's elements and the document; each
/// one runs the bound handler, then re-renders.
struct DomRegistrar<'a> {
    widget: &'a SharedWidget,
    dom: &'a Rc<WidgetDom>,
    document: &'a EventTarget,
}

impl DomRegistrar<'_> {
    fn target(&self, source: EventSource) -> &EventTarget {
        match source {
            EventSource::StartButton => &self.dom.start_button,
            EventSource::PlayButton => &self.dom.play_button,
            EventSource::Video => &self.dom.video,
            EventSource::Seek => &self.dom.seek,
            EventSource::Volume => &self.dom.volume,
            EventSource::FullscreenButton => &self.dom.fullscreen_button,
            EventSource::Document => self.document,
        }
    }
}

impl Registrar for DomRegistrar<'_> {
    type Registration = EventListener;

    fn register(&mut self, binding: &Binding) -> Result<EventListener> {
        let widget = self.widget.clone();
        let dom = self.dom.clone();
        let Binding { event: name, action, .. } = *binding;

        EventListener::attach(self.target(binding.source), name, move |event: Event| {
            let value = payload(action.payload(), &event);
            let Ok(mut widget) = widget.try_borrow_mut() else {
                debug!(event = name, "Widget busy, dropping event");
                return;
            };
            widget.handle(action, value.as_deref());
            dom.render(&widget.view());
        })
    }
}

/// A widget attached to the page, with every listener it registered.
///
/// Dropping it detaches all listeners (including the document-level ones)
/// and removes the element tree.
struct Mounted {
    widget: SharedWidget,
    dom: Rc<WidgetDom>,
    listeners: Mount<EventListener>,
}

impl Mounted {
    fn attach(config: &WidgetConfig, container_id: &str) -> Result<Self> {
        let window =
            web_sys::window().ok_or_else(|| Error::Dom("No window object available".into()))?;
        let document = window
            .document()
            .ok_or_else(|| Error::Dom("No document available".into()))?;
        let parent = document
            .get_element_by_id(container_id)
            .ok_or_else(|| Error::Dom(format!("No element with id '{container_id}'")))?;

        let dom = Rc::new(WidgetDom::build(&document, config)?);

        let failures = FailureLog::new(config.max_logged_failures);
        let widget = PlaybackWidget::with_failure_log(
            WebMedia::new(dom.video.clone(), failures.clone()),
            WebDocument::new(document.clone(), failures.clone()),
            config.clone(),
            failures,
        )?;
        let widget = Rc::new(RefCell::new(widget));

        let listeners = Mount::attach(
            &mut DomRegistrar {
                widget: &widget,
                dom: &dom,
                document: &document,
            },
            BINDINGS,
        )?;

        let mounted = Self {
            widget,
            dom,
            listeners,
        };
        mounted.render();
        parent
            .append_child(&mounted.dom.container)
            .map_err(|e| Error::Dom(describe(&e)))?;

        info!(
            container = container_id,
            listeners = mounted.listeners.len(),
            "Widget mounted"
        );

        Ok(mounted)
    }

    fn render(&self) {
        self.dom.render(&self.widget.borrow().view());
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.listeners.release();
        self.dom.container.remove();
    }
}

/// Playback widget that can be mounted into a page element
#[wasm_bindgen]
pub struct CurtainPlayer {
    config: WidgetConfig,
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl CurtainPlayer {
    /// Create a player from an optional config object
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> std::result::Result<CurtainPlayer, JsValue> {
        let config: WidgetConfig = if config.is_undefined() || config.is_null() {
            WidgetConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| to_js(Error::InvalidConfig(e.to_string())))?
        };
        config.validate().map_err(to_js)?;

        Ok(Self {
            config,
            mounted: None,
        })
    }

    /// Build the widget inside the element with `container_id`.
    ///
    /// A mounted player is unmounted first.
    #[wasm_bindgen]
    pub fn mount(&mut self, container_id: &str) -> std::result::Result<(), JsValue> {
        self.unmount();
        let mounted = Mounted::attach(&self.config, container_id).map_err(to_js)?;
        self.mounted = Some(mounted);
        Ok(())
    }

    /// Remove the widget and every listener it registered
    #[wasm_bindgen]
    pub fn unmount(&mut self) {
        if self.mounted.take().is_some() {
            info!("Widget unmounted");
        }
    }

    #[wasm_bindgen(getter)]
    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Playback state as JSON
    #[wasm_bindgen]
    pub fn state_json(&self) -> String {
        match &self.mounted {
            Some(mounted) => mounted.widget.borrow().state().to_json(),
            None => PlaybackState::new(self.config.initial_volume).to_json(),
        }
    }

    /// Recorded platform failures as a JSON array
    #[wasm_bindgen]
    pub fn failures_json(&self) -> String {
        match &self.mounted {
            Some(mounted) => mounted.widget.borrow().failures().to_json(),
            None => "[]".to_string(),
        }
    }

    /// Effective configuration as JSON
    #[wasm_bindgen]
    pub fn config_json(&self) -> String {
        self.config.to_json()
    }
}
