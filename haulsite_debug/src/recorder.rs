// Copyright 2026 the Haulsite Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording and JSON export.
//!
//! [`RecorderSink`] implements [`TraceSink`] and keeps an owned
//! [`RecordedEvent`] for every callback, in arrival order. [`export`] writes
//! a recording as a JSON array, one object per event, for attaching to bug
//! reports or diffing between runs.

use std::io::{self, Write};

use serde_json::{Value, json};

use haulsite_core::contact::SubmissionOutcome;
use haulsite_core::trace::{
    MediaEvent, NavCause, NavigateEvent, SampleEvent, SubmissionEvent, TraceSink,
};

// ---------------------------------------------------------------------------
// Recorder
// ---------------------------------------------------------------------------

/// Records every trace event it receives.
#[derive(Clone, Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in arrival order.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Discards everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Returns the recording as a JSON array.
    #[must_use]
    pub fn to_json(&self) -> Value {
        Value::Array(self.events.iter().map(RecordedEvent::to_json).collect())
    }
}

impl TraceSink for RecorderSink {
    fn on_sample(&mut self, e: &SampleEvent<'_>) {
        self.events.push(RecordedEvent::Sample {
            trigger: e.trigger,
            capability_present: e.capability_present,
            sample: e.sample.clone(),
        });
    }

    fn on_media(&mut self, e: &MediaEvent) {
        self.events.push(RecordedEvent::Media(*e));
    }

    fn on_navigate(&mut self, e: &NavigateEvent) {
        self.events.push(RecordedEvent::Navigate(*e));
    }

    fn on_submission(&mut self, e: &SubmissionEvent<'_>) {
        self.events.push(RecordedEvent::Submission(e.outcome.clone()));
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// An owned copy of a trace event.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEvent {
    /// A [`SampleEvent`].
    Sample {
        /// What caused the recompute.
        trigger: haulsite_core::network::RecomputeTrigger,
        /// Whether the host exposed a network-information capability.
        capability_present: bool,
        /// The computed sample.
        sample: haulsite_core::network::ConnectionSample,
    },
    /// A [`MediaEvent`].
    Media(MediaEvent),
    /// A [`NavigateEvent`].
    Navigate(NavigateEvent),
    /// The outcome carried by a [`SubmissionEvent`].
    Submission(SubmissionOutcome),
}

impl RecordedEvent {
    /// Returns the event as a JSON object with a `kind` tag.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Sample {
                trigger,
                capability_present,
                sample,
            } => json!({
                "kind": "sample",
                "trigger": trigger.as_str(),
                "capability_present": capability_present,
                "connection_type": sample.connection_type,
                "effective_type": sample.effective_type,
                "downlink_mbps": sample.downlink_mbps,
                "rtt_ms": sample.rtt_ms,
                "save_data": sample.save_data,
                "screen": sample.screen.as_str(),
                "good_connection": sample.is_good_connection(),
            }),
            Self::Media(e) => json!({
                "kind": "media",
                "event": e.lifecycle.event_type(),
                "state": format!("{:?}", e.state),
            }),
            Self::Navigate(e) => {
                let (cause, key) = match e.cause {
                    NavCause::Key(key) => ("key", Some(format!("{key:?}"))),
                    NavCause::Programmatic => ("programmatic", None),
                };
                json!({
                    "kind": "navigate",
                    "cause": cause,
                    "key": key,
                    "from": e.from,
                    "to": e.to,
                    "section": e.section.dom_id(),
                })
            }
            Self::Submission(outcome) => {
                let (result, error) = match outcome {
                    SubmissionOutcome::Sent => ("sent", None),
                    SubmissionOutcome::Rejected(error) => ("rejected", error.as_deref()),
                    SubmissionOutcome::Unreachable => ("unreachable", None),
                };
                json!({
                    "kind": "submission",
                    "outcome": result,
                    "error": error,
                })
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

/// Writes `events` to `writer` as a pretty-printed JSON array.
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let array = Value::Array(events.iter().map(RecordedEvent::to_json).collect());
    serde_json::to_writer_pretty(&mut *writer, &array)?;
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use haulsite_core::media::{MediaLifecycle, MediaSelector, PlaybackState};
    use haulsite_core::nav::{NavKey, ScrollTarget, SectionId, SectionNavigator};
    use haulsite_core::network::{ConnectionSample, RecomputeTrigger};
    use haulsite_core::trace::Tracer;

    struct NoScroll;

    impl ScrollTarget<SectionId> for NoScroll {
        fn scroll_into_view(&mut self, _: &SectionId) {}
    }

    #[test]
    fn records_sample_by_value() {
        let mut rec = RecorderSink::new();
        let sample = ConnectionSample::default();
        rec.on_sample(&SampleEvent {
            trigger: RecomputeTrigger::Initial,
            sample: &sample,
            capability_present: false,
        });
        assert_eq!(
            rec.events(),
            &[RecordedEvent::Sample {
                trigger: RecomputeTrigger::Initial,
                capability_present: false,
                sample,
            }]
        );
    }

    #[test]
    fn records_selector_through_tracer() {
        let mut rec = RecorderSink::new();
        let mut selector = MediaSelector::new();
        {
            let mut tracer = Tracer::new(&mut rec);
            selector.observe(MediaLifecycle::LoadStart, &mut tracer);
            selector.observe(MediaLifecycle::Error, &mut tracer);
            selector.observe(MediaLifecycle::CanPlay, &mut tracer);
        }
        let states: Vec<PlaybackState> = rec
            .events()
            .iter()
            .map(|e| match e {
                RecordedEvent::Media(m) => m.state,
                other => panic!("unexpected event: {other:?}"),
            })
            .collect();
        assert_eq!(
            states,
            [
                PlaybackState::Untried,
                PlaybackState::Failed,
                PlaybackState::Failed
            ]
        );
    }

    #[test]
    fn records_navigation_sequence() {
        let mut rec = RecorderSink::new();
        let mut nav = SectionNavigator::for_page(|id| id);
        {
            let mut tracer = Tracer::new(&mut rec);
            nav.handle_key("End", 1280.0, &mut NoScroll, &mut tracer);
            nav.handle_key("ArrowDown", 1280.0, &mut NoScroll, &mut tracer);
            nav.scroll_to(1, &mut NoScroll, &mut tracer);
        }
        let moves: Vec<(usize, usize)> = rec
            .events()
            .iter()
            .map(|e| match e {
                RecordedEvent::Navigate(n) => (n.from, n.to),
                other => panic!("unexpected event: {other:?}"),
            })
            .collect();
        assert_eq!(moves, [(0, 3), (3, 3), (3, 1)]);
        assert!(matches!(
            rec.events()[0],
            RecordedEvent::Navigate(NavigateEvent {
                cause: NavCause::Key(NavKey::Last),
                ..
            })
        ));
    }

    #[test]
    fn json_tags_every_event() {
        let mut rec = RecorderSink::new();
        rec.on_navigate(&NavigateEvent {
            cause: NavCause::Programmatic,
            from: 0,
            to: 3,
            section: SectionId::Contact,
        });
        let outcome = SubmissionOutcome::Rejected(Some("Mailbox full".into()));
        rec.on_submission(&SubmissionEvent { outcome: &outcome });

        let json = rec.to_json();
        assert_eq!(json[0]["kind"], "navigate");
        assert_eq!(json[0]["cause"], "programmatic");
        assert_eq!(json[0]["key"], Value::Null);
        assert_eq!(json[0]["section"], "contact");
        assert_eq!(json[1]["kind"], "submission");
        assert_eq!(json[1]["outcome"], "rejected");
        assert_eq!(json[1]["error"], "Mailbox full");
    }

    #[test]
    fn export_writes_parseable_array() {
        let mut rec = RecorderSink::new();
        rec.on_media(&MediaEvent {
            lifecycle: MediaLifecycle::CanPlay,
            state: PlaybackState::Attempting,
        });
        let mut out = Vec::new();
        export(rec.events(), &mut out).unwrap();
        let parsed: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, rec.to_json());
        assert_eq!(parsed[0]["event"], "canplay");
        assert_eq!(parsed[0]["state"], "Attempting");
    }

    #[test]
    fn clear_empties_recording() {
        let mut rec = RecorderSink::new();
        let outcome = SubmissionOutcome::Sent;
        rec.on_submission(&SubmissionEvent { outcome: &outcome });
        assert_eq!(rec.events().len(), 1);
        rec.clear();
        assert!(rec.into_events().is_empty());
    }
}
