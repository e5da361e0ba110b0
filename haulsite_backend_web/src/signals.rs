// Copyright 2026 the Haulsite Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser [`HostSignals`] implementation.
//!
//! The Network Information API is read through `js_sys::Reflect` rather than
//! typed `web-sys` bindings: the object may live under a vendor-prefixed
//! property, and `effectiveType`, `downlink`, `rtt` and `saveData` are not
//! exposed by `web-sys` at all. Anything missing or of the wrong type reads
//! as absent.

use alloc::string::String;

use haulsite_core::host::{DetachedHost, HostSignals, NetworkReading};
use js_sys::{Object, Reflect};
use kurbo::Size;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use web_sys::{EventTarget, Window};

/// Navigator properties that may hold the connection object, in lookup order.
const CONNECTION_PROPERTIES: [&str; 3] = ["connection", "mozConnection", "webkitConnection"];

/// Network and viewport signals from a browser window.
#[derive(Clone, Debug)]
pub struct BrowserSignals {
    window: Window,
}

impl BrowserSignals {
    /// Creates signals for the given window.
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    /// Returns the window the signals are read from.
    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Returns the connection object as an event target, if the browser
    /// exposes one that supports `change` events.
    #[must_use]
    pub fn connection_target(&self) -> Option<EventTarget> {
        self.connection()?.dyn_into::<EventTarget>().ok()
    }

    /// Resolves `navigator.connection`, falling back to the vendor-prefixed
    /// properties.
    fn connection(&self) -> Option<Object> {
        let navigator = self.window.navigator();
        CONNECTION_PROPERTIES.iter().find_map(|name| {
            Reflect::get(&navigator, &JsValue::from_str(name))
                .ok()?
                .dyn_into::<Object>()
                .ok()
        })
    }
}

impl HostSignals for BrowserSignals {
    fn network(&self) -> Option<NetworkReading> {
        let connection = self.connection()?;
        Some(NetworkReading {
            connection_type: string_prop(&connection, "type"),
            effective_type: string_prop(&connection, "effectiveType"),
            downlink_mbps: number_prop(&connection, "downlink"),
            rtt_ms: number_prop(&connection, "rtt"),
            save_data: prop(&connection, "saveData").and_then(|v| v.as_bool()),
        })
    }

    fn viewport(&self) -> Size {
        Size::new(
            crate::inner_width(&self.window, DetachedHost::VIEWPORT.width),
            crate::inner_height(&self.window, DetachedHost::VIEWPORT.height),
        )
    }
}

fn prop(obj: &Object, name: &str) -> Option<JsValue> {
    Reflect::get(obj, &JsValue::from_str(name)).ok()
}

fn string_prop(obj: &Object, name: &str) -> Option<String> {
    prop(obj, name)?.as_string()
}

fn number_prop(obj: &Object, name: &str) -> Option<f64> {
    prop(obj, name)?.as_f64()
}
