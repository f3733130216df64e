//! Scoped listener registrations
//!
//! A listener attached for the widget's mounted lifetime is wrapped in a
//! [`ScopedListener`]. Releasing it explicitly, dropping it, or dropping
//! whatever owns it all detach exactly once.
//!
//! [`Mount`] registers a whole listener table through a [`Registrar`] and
//! holds the guards; a mount that fails partway releases what it already
//! registered.

use crate::events::Binding;
use crate::Result;

/// A registration that can be undone
pub trait Detach {
    fn detach(&mut self);
}

/// Guard that detaches its registration on release or drop
pub struct ScopedListener<D: Detach> {
    registration: Option<D>,
}

impl<D: Detach> ScopedListener<D> {
    pub fn new(registration: D) -> Self {
        Self {
            registration: Some(registration),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.registration.is_some()
    }

    /// Detach now. Later calls and the eventual drop do nothing.
    pub fn release(&mut self) {
        if let Some(mut registration) = self.registration.take() {
            registration.detach();
        }
    }
}

impl<D: Detach> Drop for ScopedListener<D> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Platform side of listener registration
pub trait Registrar {
    type Registration: Detach;

    /// Start listening for `binding`
    fn register(&mut self, binding: &Binding) -> Result<Self::Registration>;
}

/// Listeners held for one mounted lifetime
pub struct Mount<D: Detach> {
    listeners: Vec<ScopedListener<D>>,
}

impl<D: Detach> Mount<D> {
    /// Register every binding, or none: on error the ones already
    /// registered are detached before the error is returned.
    pub fn attach<R>(registrar: &mut R, bindings: &[Binding]) -> Result<Self>
    where
        R: Registrar<Registration = D>,
    {
        let mut mount = Self {
            listeners: Vec::with_capacity(bindings.len()),
        };
        for binding in bindings {
            let registration = registrar.register(binding)?;
            mount.listeners.push(ScopedListener::new(registration));
        }
        Ok(mount)
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Detach everything now
    pub fn release(&mut self) {
        for listener in &mut self.listeners {
            listener.release();
        }
        self.listeners.clear();
    }
}
