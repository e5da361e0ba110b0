// Copyright 2026 the Haulsite Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped DOM event listener registration.
//!
//! [`EventListener`] registers a Rust callback with `addEventListener` and
//! removes it again when dropped, so a listener lives exactly as long as the
//! value that owns it. This replaces the `Closure::forget` pattern for
//! listeners that must be released when a view is torn down.

use alloc::boxed::Box;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

type ListenerClosure = Closure<dyn FnMut(Event)>;

/// A registered DOM event listener, removed on drop.
///
/// The callback must not drop its own `EventListener` while running; defer
/// such teardown (e.g. with `wasm_bindgen_futures::spawn_local`).
pub struct EventListener {
    target: EventTarget,
    event_type: &'static str,
    /// Kept alive for as long as the registration exists.
    closure: ListenerClosure,
}

impl EventListener {
    /// Registers `callback` for `event_type` events on `target`.
    pub fn new(
        target: &EventTarget,
        event_type: &'static str,
        callback: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event_type,
            closure,
        })
    }

    /// Returns the DOM event type this listener is registered for.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        self.event_type
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event_type, self.closure.as_ref().unchecked_ref());
    }
}

impl core::fmt::Debug for EventListener {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventListener")
            .field("target", &"EventTarget")
            .field("event_type", &self.event_type)
            .finish_non_exhaustive()
    }
}
