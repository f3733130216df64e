//! DOM event listeners scoped to the widget's mounted lifetime

use crate::platform::describe;
use curtain_core::{Detach, Error, Result};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

/// A closure registered on an event target.
///
/// Owns the closure, so the JS side never calls into freed memory: the
/// registration is removed before the closure is dropped.
pub struct EventListener {
    target: EventTarget,
    name: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    /// Register `handler` for `name` events on `target`
    pub fn attach(
        target: &EventTarget,
        name: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(name, callback.as_ref().unchecked_ref())
            .map_err(|e| Error::Dom(format!("Failed to listen for {name}: {}", describe(&e))))?;

        Ok(Self {
            target: target.clone(),
            name,
            callback,
        })
    }
}

impl Detach for EventListener {
    fn detach(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.name, self.callback.as_ref().unchecked_ref());
    }
}
