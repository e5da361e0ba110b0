// Copyright 2026 the Haulsite Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Connection quality estimation.
//!
//! [`ConnectionEstimator`] turns [`HostSignals`] into a [`ConnectionSample`]:
//! the normalized network fields plus a coarse [`ScreenBucket`]. The sample
//! starts out as the assume-good default so that first paint is never held
//! back by a missing capability, and every trigger (initial measurement,
//! network change, resize) rebuilds the whole sample through
//! [`ConnectionEstimator::recompute`].

use alloc::format;
use alloc::string::{String, ToString as _};

use kurbo::Size;

use crate::host::{HostSignals, NetworkReading};
use crate::trace::{SampleEvent, Tracer};

/// Viewports narrower than this are [`ScreenBucket::Small`].
pub const SMALL_MAX_WIDTH: f64 = 768.0;

/// Viewports narrower than this (and not small) are [`ScreenBucket::Medium`].
pub const MEDIUM_MAX_WIDTH: f64 = 1024.0;

/// Minimum estimated downlink, in Mbps, for a good connection.
pub const MIN_DOWNLINK_MBPS: f64 = 1.5;

/// Maximum estimated round-trip time, in ms, for a good connection.
pub const MAX_RTT_MS: f64 = 200.0;

/// The only `effectiveType` that counts as a good connection.
pub const GOOD_EFFECTIVE_TYPE: &str = "4g";

const DEFAULT_CONNECTION_TYPE: &str = "unknown";
const DEFAULT_DOWNLINK_MBPS: f64 = 10.0;
const DEFAULT_RTT_MS: f64 = 50.0;

/// Coarse viewport-width classification, used as a proxy for device class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScreenBucket {
    /// Narrower than [`SMALL_MAX_WIDTH`].
    Small,
    /// At least [`SMALL_MAX_WIDTH`], narrower than [`MEDIUM_MAX_WIDTH`].
    Medium,
    /// [`MEDIUM_MAX_WIDTH`] and wider.
    #[default]
    Large,
}

impl ScreenBucket {
    /// Classifies a viewport width in CSS pixels.
    ///
    /// A non-finite width compares false against both thresholds and lands in
    /// [`Large`](Self::Large), matching the assume-good default.
    #[must_use]
    pub fn from_width(width: f64) -> Self {
        if width < SMALL_MAX_WIDTH {
            Self::Small
        } else if width < MEDIUM_MAX_WIDTH {
            Self::Medium
        } else {
            Self::Large
        }
    }

    /// Returns the lowercase label used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// A normalized snapshot of network and viewport signals.
///
/// Derived on every trigger and never persisted. [`Default`] is the
/// assume-good sample used before the first measurement and whenever the
/// host exposes no network-information capability.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectionSample {
    /// Link type label (`"wifi"`, `"cellular"`, ...), `"unknown"` if absent.
    pub connection_type: String,
    /// Effective connection type label, `"4g"` if absent.
    pub effective_type: String,
    /// Estimated downlink in Mbps.
    pub downlink_mbps: f64,
    /// Estimated round-trip time in ms.
    pub rtt_ms: f64,
    /// Whether the user asked for reduced data usage.
    pub save_data: bool,
    /// Viewport classification.
    pub screen: ScreenBucket,
}

impl Default for ConnectionSample {
    fn default() -> Self {
        Self {
            connection_type: DEFAULT_CONNECTION_TYPE.to_string(),
            effective_type: GOOD_EFFECTIVE_TYPE.to_string(),
            downlink_mbps: DEFAULT_DOWNLINK_MBPS,
            rtt_ms: DEFAULT_RTT_MS,
            save_data: false,
            screen: ScreenBucket::Large,
        }
    }
}

impl ConnectionSample {
    /// Builds a sample from a raw reading and the viewport size.
    ///
    /// With no reading every network field takes its default. With a reading,
    /// each absent, empty or non-finite field takes its default individually;
    /// a measured zero is kept, so an offline link never reads as fast.
    #[must_use]
    pub fn from_reading(reading: Option<&NetworkReading>, viewport: Size) -> Self {
        let screen = ScreenBucket::from_width(viewport.width);
        let Some(reading) = reading else {
            return Self {
                screen,
                ..Self::default()
            };
        };

        Self {
            connection_type: label_or(reading.connection_type.as_deref(), DEFAULT_CONNECTION_TYPE),
            effective_type: label_or(reading.effective_type.as_deref(), GOOD_EFFECTIVE_TYPE),
            downlink_mbps: finite_or(reading.downlink_mbps, DEFAULT_DOWNLINK_MBPS),
            rtt_ms: finite_or(reading.rtt_ms, DEFAULT_RTT_MS),
            save_data: reading.save_data.unwrap_or(false),
            screen,
        }
    }

    /// Returns `true` if the network is fast and reliable enough for rich
    /// media: effective type `"4g"`, downlink of at least 1.5 Mbps, round trip
    /// of at most 200 ms, and data saver off.
    ///
    /// The verdict reads the normalized sample, so a connection object that
    /// omits a field is judged on that field's default rather than failing.
    #[must_use]
    pub fn is_good_connection(&self) -> bool {
        self.effective_type == GOOD_EFFECTIVE_TYPE
            && self.downlink_mbps >= MIN_DOWNLINK_MBPS
            && self.rtt_ms <= MAX_RTT_MS
            && !self.save_data
    }

    /// Returns labelled rows for the network debug panel.
    #[must_use]
    pub fn debug_rows(&self) -> [(&'static str, String); 7] {
        [
            ("Connection Type", self.connection_type.clone()),
            ("Effective Type", self.effective_type.clone()),
            ("Downlink", format!("{} Mbps", self.downlink_mbps)),
            ("RTT", format!("{} ms", self.rtt_ms)),
            ("Save Data", yes_no(self.save_data).to_string()),
            ("Screen Size", self.screen.as_str().to_string()),
            (
                "Good Connection",
                yes_no(self.is_good_connection()).to_string(),
            ),
        ]
    }
}

fn label_or(label: Option<&str>, default: &str) -> String {
    match label {
        Some(l) if !l.is_empty() => l.to_string(),
        _ => default.to_string(),
    }
}

fn finite_or(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => default,
    }
}

fn yes_no(b: bool) -> &'static str {
    if b { "Yes" } else { "No" }
}

/// Why the estimator recomputed its sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecomputeTrigger {
    /// First measurement after the view mounted.
    Initial,
    /// The network-information capability fired `change`.
    NetworkChange,
    /// The window fired `resize`.
    Resize,
}

impl RecomputeTrigger {
    /// Returns a short label for log lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::NetworkChange => "network-change",
            Self::Resize => "resize",
        }
    }
}

/// Owns the current [`ConnectionSample`] for one mounted view.
///
/// Created with the assume-good sample. Every trigger goes through
/// [`recompute`](Self::recompute); the last call wins.
#[derive(Clone, Debug, Default)]
pub struct ConnectionEstimator {
    sample: ConnectionSample,
    measured: bool,
}

impl ConnectionEstimator {
    /// Creates an estimator holding the assume-good sample.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current sample.
    #[must_use]
    pub fn sample(&self) -> &ConnectionSample {
        &self.sample
    }

    /// Returns the good-connection verdict for the current sample.
    #[must_use]
    pub fn is_good_connection(&self) -> bool {
        self.sample.is_good_connection()
    }

    /// Returns `true` once at least one real measurement has happened.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.measured
    }

    /// Rebuilds the sample from `host`, replacing both the network fields and
    /// the screen bucket.
    pub fn recompute<H: HostSignals + ?Sized>(
        &mut self,
        host: &H,
        trigger: RecomputeTrigger,
        tracer: &mut Tracer<'_>,
    ) -> &ConnectionSample {
        let reading = host.network();
        self.sample = ConnectionSample::from_reading(reading.as_ref(), host.viewport());
        self.measured = true;
        tracer.sample(&SampleEvent {
            trigger,
            sample: &self.sample,
            capability_present: reading.is_some(),
        });
        &self.sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString as _;
    use core::cell::Cell;

    use crate::host::DetachedHost;

    struct FakeHost {
        reading: Option<NetworkReading>,
        width: Cell<f64>,
    }

    impl FakeHost {
        fn new(reading: Option<NetworkReading>, width: f64) -> Self {
            Self {
                reading,
                width: Cell::new(width),
            }
        }
    }

    impl HostSignals for FakeHost {
        fn network(&self) -> Option<NetworkReading> {
            self.reading.clone()
        }

        fn viewport(&self) -> Size {
            Size::new(self.width.get(), 900.0)
        }
    }

    fn reading(effective: &str, downlink: f64, rtt: f64, save_data: bool) -> NetworkReading {
        NetworkReading {
            connection_type: Some("wifi".to_string()),
            effective_type: Some(effective.to_string()),
            downlink_mbps: Some(downlink),
            rtt_ms: Some(rtt),
            save_data: Some(save_data),
        }
    }

    fn sample(effective: &str, downlink: f64, rtt: f64, save_data: bool) -> ConnectionSample {
        ConnectionSample::from_reading(
            Some(&reading(effective, downlink, rtt, save_data)),
            Size::new(1440.0, 900.0),
        )
    }

    #[test]
    fn screen_bucket_steps() {
        assert_eq!(ScreenBucket::from_width(0.0), ScreenBucket::Small);
        assert_eq!(ScreenBucket::from_width(767.0), ScreenBucket::Small);
        assert_eq!(ScreenBucket::from_width(767.9), ScreenBucket::Small);
        assert_eq!(ScreenBucket::from_width(768.0), ScreenBucket::Medium);
        assert_eq!(ScreenBucket::from_width(1023.0), ScreenBucket::Medium);
        assert_eq!(ScreenBucket::from_width(1024.0), ScreenBucket::Large);
        assert_eq!(ScreenBucket::from_width(f64::NAN), ScreenBucket::Large);
    }

    #[test]
    fn default_sample_assumes_good() {
        let s = ConnectionSample::default();
        assert_eq!(s.connection_type, "unknown");
        assert_eq!(s.effective_type, "4g");
        assert_eq!(s.downlink_mbps, 10.0);
        assert_eq!(s.rtt_ms, 50.0);
        assert!(!s.save_data);
        assert_eq!(s.screen, ScreenBucket::Large);
        assert!(s.is_good_connection());
    }

    #[test]
    fn verdict_examples() {
        assert!(sample("4g", 2.0, 100.0, false).is_good_connection());
        assert!(!sample("3g", 2.0, 100.0, false).is_good_connection());
    }

    #[test]
    fn verdict_boundaries() {
        assert!(sample("4g", 1.5, 200.0, false).is_good_connection());
        assert!(!sample("4g", 1.49, 100.0, false).is_good_connection());
        assert!(!sample("4g", 2.0, 200.1, false).is_good_connection());
        assert!(!sample("4g", 2.0, 100.0, true).is_good_connection());
        assert!(!sample("slow-2g", 10.0, 50.0, false).is_good_connection());
    }

    #[test]
    fn verdict_matches_definition_over_grid() {
        let types = ["slow-2g", "2g", "3g", "4g"];
        let downlinks = [0.0, 1.0, 1.5, 5.0];
        let rtts = [0.0, 150.0, 200.0, 450.0];
        for effective in types {
            for downlink in downlinks {
                for rtt in rtts {
                    for save_data in [false, true] {
                        let expected =
                            effective == "4g" && downlink >= 1.5 && rtt <= 200.0 && !save_data;
                        let got = sample(effective, downlink, rtt, save_data).is_good_connection();
                        assert_eq!(
                            got, expected,
                            "{effective} {downlink} {rtt} {save_data}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn missing_fields_take_defaults() {
        let partial = NetworkReading {
            effective_type: Some(String::new()),
            rtt_ms: Some(f64::NAN),
            ..NetworkReading::default()
        };
        let s = ConnectionSample::from_reading(Some(&partial), Size::new(800.0, 600.0));
        assert_eq!(s.connection_type, "unknown");
        assert_eq!(s.effective_type, "4g");
        assert_eq!(s.downlink_mbps, 10.0);
        assert_eq!(s.rtt_ms, 50.0);
        assert!(!s.save_data);
        assert_eq!(s.screen, ScreenBucket::Medium);
    }

    #[test]
    fn empty_reading_is_judged_on_defaults() {
        let empty = NetworkReading::default();
        let s = ConnectionSample::from_reading(Some(&empty), Size::new(1440.0, 900.0));
        assert_eq!(s, ConnectionSample::default());
        assert!(s.is_good_connection());
    }

    #[test]
    fn measured_zero_downlink_is_kept() {
        let s = sample("4g", 0.0, 0.0, false);
        assert_eq!(s.downlink_mbps, 0.0);
        assert!(!s.is_good_connection());
    }

    #[test]
    fn absent_capability_yields_default_sample() {
        let host = FakeHost::new(None, 1440.0);
        let mut estimator = ConnectionEstimator::new();
        let s = estimator
            .recompute(&host, RecomputeTrigger::Initial, &mut Tracer::none())
            .clone();
        assert_eq!(s, ConnectionSample::default());
        assert!(estimator.is_good_connection());
    }

    #[test]
    fn estimator_starts_unmeasured_and_good() {
        let estimator = ConnectionEstimator::new();
        assert!(!estimator.is_measured());
        assert!(estimator.is_good_connection());
    }

    #[test]
    fn detached_host_keeps_default() {
        let mut estimator = ConnectionEstimator::new();
        estimator.recompute(&DetachedHost, RecomputeTrigger::Initial, &mut Tracer::none());
        assert!(estimator.is_measured());
        assert_eq!(estimator.sample(), &ConnectionSample::default());
    }

    #[test]
    fn resize_recomputes_screen_and_network() {
        let host = FakeHost::new(Some(reading("3g", 0.7, 400.0, false)), 1440.0);
        let mut estimator = ConnectionEstimator::new();
        estimator.recompute(&host, RecomputeTrigger::Initial, &mut Tracer::none());
        assert_eq!(estimator.sample().screen, ScreenBucket::Large);
        assert!(!estimator.is_good_connection());

        host.width.set(500.0);
        let s = estimator.recompute(&host, RecomputeTrigger::Resize, &mut Tracer::none());
        assert_eq!(s.screen, ScreenBucket::Small);
        assert_eq!(s.effective_type, "3g");
        assert_eq!(s.rtt_ms, 400.0);
    }

    #[test]
    fn debug_rows_report_verdict() {
        let rows = sample("3g", 2.0, 100.0, false).debug_rows();
        assert_eq!(rows[0], ("Connection Type", "wifi".to_string()));
        assert_eq!(rows[2], ("Downlink", "2 Mbps".to_string()));
        assert_eq!(rows[6], ("Good Connection", "No".to_string()));
    }

    #[cfg(feature = "trace")]
    #[test]
    fn recompute_emits_sample_event() {
        use crate::trace::TraceSink;
        use alloc::vec::Vec;

        #[derive(Default)]
        struct Triggers(Vec<(RecomputeTrigger, bool)>);
        impl TraceSink for Triggers {
            fn on_sample(&mut self, e: &SampleEvent<'_>) {
                self.0.push((e.trigger, e.capability_present));
            }
        }

        let host = FakeHost::new(None, 900.0);
        let mut sink = Triggers::default();
        let mut estimator = ConnectionEstimator::new();
        estimator.recompute(&host, RecomputeTrigger::Initial, &mut Tracer::new(&mut sink));
        estimator.recompute(&host, RecomputeTrigger::Resize, &mut Tracer::new(&mut sink));
        assert_eq!(
            sink.0,
            &[
                (RecomputeTrigger::Initial, false),
                (RecomputeTrigger::Resize, false)
            ]
        );
    }
}
