// Copyright 2026 the Haulsite Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host capability contract.
//!
//! The page reads two kinds of signal from its host environment:
//!
//! - **Network information**: The browser's `NetworkInformation` object
//!   (`navigator.connection`, or a vendor-prefixed variant). It may be
//!   missing entirely, and any of its fields may be missing. Absence is a
//!   first-class state: [`HostSignals::network`] returns `None` and the
//!   estimator falls back to the assume-good sample.
//!
//! - **Viewport**: The current layout viewport size in CSS pixels.
//!
//! Each host environment provides exactly one [`HostSignals`]
//! implementation. Change notification (`change` on the connection object,
//! `resize` on the window) is the host's concern; the host calls
//! [`ConnectionEstimator::recompute`] when either fires.
//!
//! # Crate boundaries
//!
//! `haulsite_core` owns the data model and this contract. The web backend
//! crate implements it on top of `web-sys` and owns listener registration.
//! Tests implement it with plain structs.
//!
//! [`ConnectionEstimator::recompute`]: crate::network::ConnectionEstimator::recompute

use alloc::string::String;

use kurbo::Size;

/// Raw values read from a host network-information capability.
///
/// Every field mirrors an optional attribute of the browser's
/// `NetworkInformation` interface. `None` means the attribute was absent or
/// not of the expected type.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NetworkReading {
    /// `type`: the underlying link (e.g. `"wifi"`, `"cellular"`).
    pub connection_type: Option<String>,
    /// `effectiveType`: `"slow-2g"`, `"2g"`, `"3g"` or `"4g"`.
    pub effective_type: Option<String>,
    /// `downlink`: estimated bandwidth in megabits per second.
    pub downlink_mbps: Option<f64>,
    /// `rtt`: estimated round-trip time in milliseconds.
    pub rtt_ms: Option<f64>,
    /// `saveData`: the user asked for reduced data usage.
    pub save_data: Option<bool>,
}

/// Reads network and viewport signals from the host environment.
///
/// Implementations must not fail: anything the host cannot provide is
/// reported as absent.
pub trait HostSignals {
    /// Returns the current network reading, or `None` if the host exposes no
    /// network-information capability.
    fn network(&self) -> Option<NetworkReading>;

    /// Returns the current viewport size in CSS pixels.
    fn viewport(&self) -> Size;
}

/// Host signals for contexts without a browser, such as server rendering or
/// the moment before the first measurement.
///
/// Reports no network capability and a large viewport, which yields the
/// assume-good sample.
#[derive(Clone, Copy, Debug, Default)]
pub struct DetachedHost;

impl DetachedHost {
    /// Viewport reported before any real measurement.
    pub const VIEWPORT: Size = Size::new(1280.0, 800.0);
}

impl HostSignals for DetachedHost {
    fn network(&self) -> Option<NetworkReading> {
        None
    }

    fn viewport(&self) -> Size {
        Self::VIEWPORT
    }
}
