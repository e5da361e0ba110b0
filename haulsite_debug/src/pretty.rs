// Copyright 2026 the Haulsite Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use haulsite_core::contact::SubmissionOutcome;
use haulsite_core::trace::{
    MediaEvent, NavCause, NavigateEvent, SampleEvent, SubmissionEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

fn cause_name(cause: NavCause) -> String {
    match cause {
        NavCause::Key(key) => format!("key:{key:?}"),
        NavCause::Programmatic => "jump".into(),
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_sample(&mut self, e: &SampleEvent<'_>) {
        let s = e.sample;
        let _ = writeln!(
            self.writer,
            "[sample] trigger={} capability={} type={} effective={} downlink={}Mbps \
             rtt={}ms save_data={} screen={} good={}",
            e.trigger.as_str(),
            e.capability_present,
            s.connection_type,
            s.effective_type,
            s.downlink_mbps,
            s.rtt_ms,
            s.save_data,
            s.screen.as_str(),
            s.is_good_connection(),
        );
    }

    fn on_media(&mut self, e: &MediaEvent) {
        let _ = writeln!(
            self.writer,
            "[media] {} state={:?}",
            e.lifecycle.event_type(),
            e.state,
        );
    }

    fn on_navigate(&mut self, e: &NavigateEvent) {
        let _ = writeln!(
            self.writer,
            "[nav] {} {} -> {} #{}",
            cause_name(e.cause),
            e.from,
            e.to,
            e.section.dom_id(),
        );
    }

    fn on_submission(&mut self, e: &SubmissionEvent<'_>) {
        let outcome = match e.outcome {
            SubmissionOutcome::Sent => "sent".to_owned(),
            SubmissionOutcome::Rejected(Some(error)) => format!("rejected ({error})"),
            SubmissionOutcome::Rejected(None) => "rejected".to_owned(),
            SubmissionOutcome::Unreachable => "unreachable".to_owned(),
        };
        let _ = writeln!(self.writer, "[contact] {outcome}");
    }
}
