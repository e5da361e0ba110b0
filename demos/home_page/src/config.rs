// Copyright 2026 the Haulsite Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page configuration.

use haulsite_core::contact::CONTACT_ENDPOINT;
use web_sys::Window;

/// Settings fixed when the page starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HomePageConfig {
    /// Path the contact form posts to.
    pub endpoint: &'static str,
    /// Show the network debug toggle and panel.
    pub debug_panel: bool,
    /// Log connection samples and navigation to the console too.
    pub verbose_console: bool,
}

impl Default for HomePageConfig {
    fn default() -> Self {
        Self {
            endpoint: CONTACT_ENDPOINT,
            debug_panel: cfg!(debug_assertions),
            verbose_console: false,
        }
    }
}

impl HomePageConfig {
    /// Builds the configuration for `window`: the debug panel is also enabled
    /// by a `debug` query parameter, which turns on verbose logging as well.
    #[must_use]
    pub fn for_window(window: &Window) -> Self {
        let search = window.location().search().unwrap_or_default();
        Self::with_query(&search)
    }

    /// Builds the configuration from a `location.search` string.
    #[must_use]
    pub fn with_query(search: &str) -> Self {
        let requested = debug_requested(search);
        let defaults = Self::default();
        Self {
            debug_panel: defaults.debug_panel || requested,
            verbose_console: requested,
            ..defaults
        }
    }
}

/// Returns `true` if the query string carries a `debug` parameter that is not
/// explicitly off.
fn debug_requested(search: &str) -> bool {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (key == "debug").then_some(value)
        })
        .any(|value| !matches!(value, "0" | "false" | "off"))
}
