// Copyright 2026 the Haulsite Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`TraceSink`] that writes to the browser console.
//!
//! Events only arrive when `haulsite_core` is built with its `trace` feature.

use alloc::format;

use haulsite_core::media::MediaLifecycle;
use haulsite_core::trace::{MediaEvent, NavigateEvent, SampleEvent, SubmissionEvent, TraceSink};
use wasm_bindgen::JsValue;
use web_sys::console;

/// Logs page events with `console.log`, `console.debug` and `console.warn`.
///
/// Video failures and unsuccessful submissions are warnings. Connection
/// samples and navigation are debug output, and are skipped unless
/// `verbose` is set.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink {
    verbose: bool,
}

impl ConsoleSink {
    /// Creates a sink that logs media and submission events only.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink that also logs samples and navigation.
    #[must_use]
    pub fn verbose() -> Self {
        Self { verbose: true }
    }
}

impl TraceSink for ConsoleSink {
    fn on_sample(&mut self, e: &SampleEvent<'_>) {
        if !self.verbose {
            return;
        }
        let s = e.sample;
        console::debug_1(&JsValue::from_str(&format!(
            "[network] {}: type={} effective={} downlink={} rtt={} saveData={} screen={} good={}",
            e.trigger.as_str(),
            s.connection_type,
            s.effective_type,
            s.downlink_mbps,
            s.rtt_ms,
            s.save_data,
            s.screen.as_str(),
            s.is_good_connection(),
        )));
    }

    fn on_media(&mut self, e: &MediaEvent) {
        let text = JsValue::from_str(e.lifecycle.message());
        if e.lifecycle == MediaLifecycle::Error {
            console::warn_1(&text);
        } else {
            console::log_1(&text);
        }
    }

    fn on_navigate(&mut self, e: &NavigateEvent) {
        if !self.verbose {
            return;
        }
        console::debug_1(&JsValue::from_str(&format!(
            "[nav] {:?}: {} -> {} (#{})",
            e.cause,
            e.from,
            e.to,
            e.section.dom_id(),
        )));
    }

    fn on_submission(&mut self, e: &SubmissionEvent<'_>) {
        let text = JsValue::from_str(&format!("[contact] {:?}", e.outcome));
        if e.outcome.is_sent() {
            console::log_1(&text);
        } else {
            console::warn_1(&text);
        }
    }
}
