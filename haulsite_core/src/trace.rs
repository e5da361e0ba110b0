// Copyright 2026 the Haulsite Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the page's decision points.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! estimator, media selector, navigator and contact form call when their
//! state changes. All method bodies default to no-ops, so implementing only
//! the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use crate::contact::SubmissionOutcome;
use crate::media::{MediaLifecycle, PlaybackState};
use crate::nav::{NavKey, SectionId};
use crate::network::{ConnectionSample, RecomputeTrigger};

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted after the estimator rebuilds its sample.
#[derive(Clone, Copy, Debug)]
pub struct SampleEvent<'a> {
    /// What caused the recompute.
    pub trigger: RecomputeTrigger,
    /// The freshly computed sample.
    pub sample: &'a ConnectionSample,
    /// Whether the host exposed a network-information capability.
    pub capability_present: bool,
}

/// Emitted when the hero video element reports a lifecycle event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MediaEvent {
    /// The lifecycle event the element reported.
    pub lifecycle: MediaLifecycle,
    /// Playback state after the event was applied.
    pub state: PlaybackState,
}

/// What moved the navigator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavCause {
    /// A navigation key press.
    Key(NavKey),
    /// A programmatic jump (indicator dot, call-to-action button).
    Programmatic,
}

/// Emitted when the navigator issues a scroll command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigateEvent {
    /// What triggered the transition.
    pub cause: NavCause,
    /// Index before the transition.
    pub from: usize,
    /// Index after the transition.
    pub to: usize,
    /// Section scrolled into view.
    pub section: SectionId,
}

/// Emitted when a contact submission completes.
#[derive(Clone, Copy, Debug)]
pub struct SubmissionEvent<'a> {
    /// How the endpoint exchange ended.
    pub outcome: &'a SubmissionOutcome,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the page's decision points.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called after every connection-sample recompute.
    fn on_sample(&mut self, e: &SampleEvent<'_>) {
        _ = e;
    }

    /// Called for every hero media lifecycle event.
    fn on_media(&mut self, e: &MediaEvent) {
        _ = e;
    }

    /// Called when the navigator scrolls to a section.
    fn on_navigate(&mut self, e: &NavigateEvent) {
        _ = e;
    }

    /// Called when a contact submission completes.
    fn on_submission(&mut self, e: &SubmissionEvent<'_>) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`SampleEvent`].
    #[inline]
    pub fn sample(&mut self, e: &SampleEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_sample(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`MediaEvent`].
    #[inline]
    pub fn media(&mut self, e: &MediaEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_media(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`NavigateEvent`].
    #[inline]
    pub fn navigate(&mut self, e: &NavigateEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_navigate(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SubmissionEvent`].
    #[inline]
    pub fn submission(&mut self, e: &SubmissionEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_submission(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
