// Copyright 2026 the Haulsite Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The hero background video element.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use haulsite_core::media::{HERO_SOURCES, MediaLifecycle, MediaSelector, PlaybackState};
use haulsite_core::trace::Tracer;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Event, HtmlVideoElement};

use crate::SharedSink;
use crate::listener::EventListener;

/// Class applied to the hero `<video>` element.
pub const HERO_VIDEO_CLASS: &str = "hero-bg-video";

/// A mounted hero `<video>` wired to a [`MediaSelector`].
///
/// `loadstart`, `canplay` and `error` are forwarded to the selector. The
/// `error` listener is also attached to the last `<source>`, since source
/// load failures do not bubble to the video. Dropping the value removes the
/// element and its listeners.
pub struct HeroVideo {
    element: HtmlVideoElement,
    _listeners: Vec<EventListener>,
}

impl HeroVideo {
    /// Creates the video as the first child of `host`.
    ///
    /// `on_failed` runs once, when the selector first latches
    /// [`PlaybackState::Failed`]. It runs inside the element's event
    /// callback, so it must defer dropping this `HeroVideo`.
    pub fn mount(
        document: &Document,
        host: &Element,
        selector: Rc<RefCell<MediaSelector>>,
        sink: SharedSink,
        on_failed: impl FnMut() + 'static,
    ) -> Result<Self, JsValue> {
        let element = document
            .create_element("video")?
            .dyn_into::<HtmlVideoElement>()?;
        element.set_class_name(HERO_VIDEO_CLASS);
        element.set_autoplay(true);
        // The property alone does not satisfy autoplay policies in every
        // browser; the attribute must be present at insertion.
        element.set_muted(true);
        element.set_default_muted(true);
        element.set_attribute("muted", "")?;
        element.set_loop(true);
        element.set_attribute("playsinline", "")?;
        element.set_preload("metadata");

        let mut last_source = None;
        for source in &HERO_SOURCES {
            let node = document.create_element("source")?;
            node.set_attribute("src", source.src)?;
            node.set_attribute("type", source.mime)?;
            element.append_child(&node)?;
            last_source = Some(node);
        }

        let on_failed: Rc<RefCell<dyn FnMut()>> = Rc::new(RefCell::new(on_failed));
        let mut listeners = Vec::with_capacity(MediaLifecycle::ALL.len() + 1);
        for lifecycle in MediaLifecycle::ALL {
            listeners.push(EventListener::new(
                &element,
                lifecycle.event_type(),
                observer(lifecycle, &selector, &sink, &on_failed),
            )?);
        }
        if let Some(source) = &last_source {
            listeners.push(EventListener::new(
                source,
                MediaLifecycle::Error.event_type(),
                observer(MediaLifecycle::Error, &selector, &sink, &on_failed),
            )?);
        }

        host.insert_before(&element, host.first_child().as_ref())?;
        Ok(Self {
            element,
            _listeners: listeners,
        })
    }

    /// Returns the `<video>` element.
    #[must_use]
    pub fn element(&self) -> &HtmlVideoElement {
        &self.element
    }
}

fn observer(
    lifecycle: MediaLifecycle,
    selector: &Rc<RefCell<MediaSelector>>,
    sink: &SharedSink,
    on_failed: &Rc<RefCell<dyn FnMut()>>,
) -> impl FnMut(Event) + 'static {
    let selector = Rc::clone(selector);
    let sink = Rc::clone(sink);
    let on_failed = Rc::clone(on_failed);
    move |_| {
        let (before, after) = {
            let mut sink = sink.borrow_mut();
            let mut tracer = Tracer::new(&mut *sink);
            let mut selector = selector.borrow_mut();
            let before = selector.state();
            (before, selector.observe(lifecycle, &mut tracer))
        };
        if before != PlaybackState::Failed && after == PlaybackState::Failed {
            on_failed.borrow_mut()();
        }
    }
}

impl Drop for HeroVideo {
    fn drop(&mut self) {
        self.element.remove();
    }
}

impl core::fmt::Debug for HeroVideo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HeroVideo")
            .field("listeners", &self._listeners)
            .finish_non_exhaustive()
    }
}
