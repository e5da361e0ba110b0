// Copyright 2026 the Haulsite Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard section navigation.
//!
//! [`KeyboardNavigation`] forwards window `keydown` events to a shared
//! [`SectionNavigator`] and suppresses the browser's own scrolling for every
//! key the navigator handles. The navigator is shared so the page's nav
//! links and scroll dots can drive it through [`navigate_to`].

use alloc::rc::Rc;
use core::cell::RefCell;

use haulsite_core::nav::{ScrollTarget, SectionId, SectionNavigator};
use haulsite_core::trace::Tracer;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use web_sys::{
    Element, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::SharedSink;
use crate::listener::EventListener;

/// A section navigator over DOM elements, shared between listeners.
pub type SharedNavigator = Rc<RefCell<SectionNavigator<Element>>>;

/// Scrolls elements into view smoothly, aligned to the top of the viewport.
#[derive(Clone, Copy, Debug, Default)]
pub struct SmoothScroll;

impl ScrollTarget<Element> for SmoothScroll {
    fn scroll_into_view(&mut self, anchor: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        anchor.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Moves the shared navigator to `index` (clamped) and returns the index used.
pub fn navigate_to(navigator: &SharedNavigator, sink: &SharedSink, index: usize) -> usize {
    let mut sink = sink.borrow_mut();
    let mut tracer = Tracer::new(&mut *sink);
    navigator
        .borrow_mut()
        .scroll_to(index, &mut SmoothScroll, &mut tracer)
}

/// Moves the shared navigator to the section `id`, if the page has one.
pub fn navigate_to_id(
    navigator: &SharedNavigator,
    sink: &SharedSink,
    id: SectionId,
) -> Option<usize> {
    let mut sink = sink.borrow_mut();
    let mut tracer = Tracer::new(&mut *sink);
    navigator
        .borrow_mut()
        .scroll_to_id(id, &mut SmoothScroll, &mut tracer)
}

/// The window `keydown` binding. Dropping it unbinds the keys.
#[derive(Debug)]
pub struct KeyboardNavigation {
    _listener: EventListener,
}

impl KeyboardNavigation {
    /// Binds `keydown` on `window` to `navigator`.
    ///
    /// The viewport width is read at the moment of each key press.
    pub fn bind(
        window: &Window,
        navigator: SharedNavigator,
        sink: SharedSink,
    ) -> Result<Self, JsValue> {
        let win = window.clone();
        let listener = EventListener::new(window, "keydown", move |event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let width = crate::inner_width(&win, 0.0);
            let outcome = {
                let mut sink = sink.borrow_mut();
                let mut tracer = Tracer::new(&mut *sink);
                navigator.borrow_mut().handle_key(
                    &key_event.key(),
                    width,
                    &mut SmoothScroll,
                    &mut tracer,
                )
            };
            if outcome.is_handled() {
                key_event.prevent_default();
            }
        })?;
        Ok(Self {
            _listener: listener,
        })
    }
}
