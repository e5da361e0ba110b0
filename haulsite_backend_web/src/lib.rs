// Copyright 2026 the Haulsite Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for haulsite.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`BrowserSignals`]: `navigator.connection` (and vendor-prefixed
//!   variants) plus the window size, as a [`HostSignals`] implementation
//! - [`EventListener`]: a DOM listener registration released on drop
//! - [`NetworkMonitor`]: re-estimates the connection on `change` and `resize`
//! - [`KeyboardNavigation`]: desktop `keydown` section navigation
//! - [`HeroVideo`]: the hero `<video>` element and its lifecycle events
//! - [`ConsoleSink`]: a [`TraceSink`] that logs to the browser console
//! - [`submit_contact`]: posts the contact form to the mail endpoint
//!
//! [`TraceSink`]: haulsite_core::trace::TraceSink

#![no_std]

extern crate alloc;

mod console;
mod contact;
mod keys;
mod listener;
mod media;
mod monitor;
mod signals;

use alloc::rc::Rc;
use core::cell::RefCell;

pub use console::ConsoleSink;
pub use contact::{alert, decode_reply, encode_submission, submit_contact};
pub use haulsite_core::host::HostSignals;
pub use keys::{KeyboardNavigation, SharedNavigator, SmoothScroll, navigate_to, navigate_to_id};
pub use listener::EventListener;
pub use media::{HERO_VIDEO_CLASS, HeroVideo};
pub use monitor::NetworkMonitor;
pub use signals::BrowserSignals;

use haulsite_core::trace::TraceSink;
use wasm_bindgen::JsValue;
use web_sys::Window;

/// A trace sink shared by every listener on the page.
pub type SharedSink = Rc<RefCell<dyn TraceSink>>;

/// Wraps `sink` for sharing between listeners.
#[must_use]
pub fn share_sink(sink: impl TraceSink + 'static) -> SharedSink {
    Rc::new(RefCell::new(sink))
}

/// Returns the global `window`, or an error outside a browser main thread.
pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global `window`"))
}

/// Returns `window.innerWidth` in CSS pixels, or `fallback` if unavailable.
#[must_use]
pub fn inner_width(window: &Window, fallback: f64) -> f64 {
    number_or(window.inner_width().ok(), fallback)
}

/// Returns `window.innerHeight` in CSS pixels, or `fallback` if unavailable.
#[must_use]
pub fn inner_height(window: &Window, fallback: f64) -> f64 {
    number_or(window.inner_height().ok(), fallback)
}

fn number_or(value: Option<JsValue>, fallback: f64) -> f64 {
    value.and_then(|v| v.as_f64()).unwrap_or(fallback)
}
