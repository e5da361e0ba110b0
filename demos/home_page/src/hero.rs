// Copyright 2026 the Haulsite Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hero background and the network debug panel.
//!
//! The background is re-chosen on every connection sample. A video that
//! fails is swapped for the image from a spawned task, since the failure
//! arrives inside the video's own event listener.

use alloc::format;
use alloc::rc::{Rc, Weak};
use core::cell::RefCell;

use haulsite_backend_web::{HeroVideo, SharedSink};
use haulsite_core::media::{Background, HERO_IMAGE_CLASS, MediaSelector};
use haulsite_core::network::ConnectionSample;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom;

pub(crate) type SharedHero = Rc<RefCell<HeroBackground>>;

pub(crate) struct HeroBackground {
    document: Document,
    section: Element,
    image: Element,
    video: Option<HeroVideo>,
    selector: Rc<RefCell<MediaSelector>>,
    sample: ConnectionSample,
    panel: Option<DebugPanel>,
    sink: SharedSink,
}

impl HeroBackground {
    /// Creates the image layer inside `section`. Nothing is shown until the
    /// first [`refresh`].
    pub(crate) fn new(
        document: &Document,
        section: &Element,
        panel: Option<DebugPanel>,
        sink: SharedSink,
    ) -> Result<SharedHero, JsValue> {
        let image = dom::element(document, "div", HERO_IMAGE_CLASS)?;
        dom::set_visible(&image, false);
        section.insert_before(&image, section.first_child().as_ref())?;
        Ok(Rc::new(RefCell::new(Self {
            document: document.clone(),
            section: section.clone(),
            image,
            video: None,
            selector: Rc::new(RefCell::new(MediaSelector::new())),
            sample: ConnectionSample::default(),
            panel,
            sink,
        })))
    }

    fn show_image(&mut self) {
        self.video = None;
        dom::set_visible(&self.image, true);
    }

    fn render_panel(&self) {
        if let Some(panel) = &self.panel {
            let selector = self.selector.borrow();
            panel.render(&self.sample, self.video.is_some(), selector.has_failed());
        }
    }
}

/// Applies `sample`: chooses the background and mounts or unmounts the video.
pub(crate) fn refresh(hero: &SharedHero, sample: &ConnectionSample) -> Result<(), JsValue> {
    let weak = Rc::downgrade(hero);
    let mut this = hero.borrow_mut();
    this.sample = sample.clone();
    let choice = this.selector.borrow_mut().choose(sample);
    match choice {
        Background::Video => {
            if this.video.is_none() {
                let video = HeroVideo::mount(
                    &this.document,
                    &this.section,
                    Rc::clone(&this.selector),
                    Rc::clone(&this.sink),
                    move || fall_back(weak.clone()),
                )?;
                this.video = Some(video);
            }
            dom::set_visible(&this.image, false);
        }
        Background::Image => this.show_image(),
    }
    this.render_panel();
    Ok(())
}

fn fall_back(hero: Weak<RefCell<HeroBackground>>) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Some(hero) = hero.upgrade() {
            let mut this = hero.borrow_mut();
            this.show_image();
            this.render_panel();
        }
    });
}

/// The "Debug Network" toggle and its readout.
#[derive(Clone)]
pub(crate) struct DebugPanel {
    body: Element,
}

impl DebugPanel {
    /// Appends the toggle button and the (initially closed) panel to `parent`.
    /// Returns the panel and the toggle, whose click handler the caller binds.
    pub(crate) fn mount(doc: &Document, parent: &Element) -> Result<(Self, Element), JsValue> {
        let toggle = dom::button(doc, "debug-toggle", "Debug Network")?;
        let container = dom::element(doc, "div", "debug-panel")?;
        dom::set_visible(&container, false);
        dom::append_text(&container, "h3", "", "Network Quality Debug")?;
        let body = dom::element(doc, "div", "debug-rows")?;
        container.append_child(&body)?;
        parent.append_child(&toggle)?;
        parent.append_child(&container)?;
        Ok((Self { body }, toggle))
    }

    /// Flips the panel's visibility.
    pub(crate) fn toggle(&self) {
        if let Some(container) = self.body.parent_element() {
            let hidden = container.has_attribute("hidden");
            dom::set_visible(&container, hidden);
        }
    }

    fn render(&self, sample: &ConnectionSample, using_video: bool, failed: bool) {
        self.body.set_text_content(None);
        let _ = self.row("Using Video", yes_no(using_video), using_video);
        let _ = self.row("Video Load Error", yes_no(failed), !failed);
        for (label, value) in sample.debug_rows() {
            let _ = self.row(label, &value, true);
        }
    }

    fn row(&self, label: &str, value: &str, ok: bool) -> Result<(), JsValue> {
        let line = dom::append_text(&self.body, "div", "", &format!("{label}: "))?;
        let span = dom::append_text(&line, "span", "", value)?;
        dom::set_class(&span, "debug-ok", ok);
        dom::set_class(&span, "debug-bad", !ok);
        Ok(())
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}
