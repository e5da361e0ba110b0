// Copyright 2026 the Haulsite Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adaptive hero media selection.
//!
//! The hero section plays a looping background video when the connection and
//! screen allow it, and shows a static image otherwise. [`MediaSelector`]
//! combines the per-sample decision ([`should_use_video`]) with a
//! session-scoped [`PlaybackState`] latch: once the video element reports an
//! error, the selector answers [`Background::Image`] for the rest of the
//! page's lifetime, whatever later samples say.

use crate::network::{ConnectionSample, ScreenBucket};
use crate::trace::{MediaEvent, Tracer};

/// A candidate video source, offered to the element in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MediaSource {
    /// URL of the encoded video.
    pub src: &'static str,
    /// MIME type advertised on the `<source>` element.
    pub mime: &'static str,
}

/// Hero video candidates: the higher-fidelity `QuickTime` container first, then
/// the broadly compatible MP4.
pub const HERO_SOURCES: [MediaSource; 2] = [
    MediaSource {
        src: "/gallery31.mov",
        mime: "video/quicktime",
    },
    MediaSource {
        src: "/gallery31.mp4",
        mime: "video/mp4",
    },
];

/// CSS class of the static hero background.
pub const HERO_IMAGE_CLASS: &str = "hero-bg-image";

/// Which hero background to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Background {
    /// A muted, looping `<video>` with [`HERO_SOURCES`].
    Video,
    /// The static [`HERO_IMAGE_CLASS`] background.
    Image,
}

/// Lifecycle events reported by the hero video element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaLifecycle {
    /// `loadstart`: the element began fetching a source.
    LoadStart,
    /// `canplay`: enough data is buffered to start playback.
    CanPlay,
    /// `error`: no source could be loaded or decoded.
    Error,
}

impl MediaLifecycle {
    /// All lifecycle events, in the order listeners are registered.
    pub const ALL: [Self; 3] = [Self::LoadStart, Self::CanPlay, Self::Error];

    /// Returns the DOM event type.
    #[must_use]
    pub const fn event_type(self) -> &'static str {
        match self {
            Self::LoadStart => "loadstart",
            Self::CanPlay => "canplay",
            Self::Error => "error",
        }
    }

    /// Returns the diagnostic message logged for this event.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::LoadStart => "Video loading started",
            Self::CanPlay => "Video can play",
            Self::Error => "Video failed to load, falling back to image",
        }
    }
}

/// Where hero playback stands for this page session.
///
/// `Failed` is terminal: nothing moves the state out of it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PlaybackState {
    /// No video element is mounted.
    #[default]
    Untried,
    /// A video element is mounted and loading or playing.
    Attempting,
    /// The video failed to load; the image is shown from now on.
    Failed,
}

/// Returns `true` if the sample justifies the hero video: a good connection
/// on a screen that is not small.
///
/// The good-connection verdict already covers data saver, downlink and round
/// trip, so those are not re-checked here.
#[must_use]
pub fn should_use_video(sample: &ConnectionSample) -> bool {
    sample.is_good_connection() && sample.screen != ScreenBucket::Small
}

/// Chooses the hero background and owns the one-way failure latch.
#[derive(Clone, Copy, Debug, Default)]
pub struct MediaSelector {
    state: PlaybackState,
}

impl MediaSelector {
    /// Creates a selector that has not tried the video yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current playback state.
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Returns `true` once the video has failed this session.
    #[must_use]
    pub fn has_failed(&self) -> bool {
        self.state == PlaybackState::Failed
    }

    /// Returns the media decision for `sample` without changing state.
    #[must_use]
    pub fn decision(&self, sample: &ConnectionSample) -> bool {
        !self.has_failed() && should_use_video(sample)
    }

    /// Chooses the background to render for `sample`.
    ///
    /// Returning [`Background::Video`] moves the state to `Attempting`;
    /// returning [`Background::Image`] before a failure moves it back to
    /// `Untried`, since the video element is no longer mounted.
    pub fn choose(&mut self, sample: &ConnectionSample) -> Background {
        if self.has_failed() {
            return Background::Image;
        }
        if should_use_video(sample) {
            self.state = PlaybackState::Attempting;
            Background::Video
        } else {
            self.state = PlaybackState::Untried;
            Background::Image
        }
    }

    /// Applies a lifecycle event from the video element and returns the new
    /// state.
    ///
    /// `LoadStart` and `CanPlay` are logged only. `Error` latches `Failed`;
    /// repeated errors are harmless.
    pub fn observe(&mut self, lifecycle: MediaLifecycle, tracer: &mut Tracer<'_>) -> PlaybackState {
        if lifecycle == MediaLifecycle::Error {
            self.state = PlaybackState::Failed;
        }
        tracer.media(&MediaEvent {
            lifecycle,
            state: self.state,
        });
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::NetworkReading;
    use alloc::string::ToString as _;
    use kurbo::Size;

    fn sample(
        effective: &str,
        downlink: f64,
        rtt: f64,
        save_data: bool,
        width: f64,
    ) -> ConnectionSample {
        let reading = NetworkReading {
            connection_type: None,
            effective_type: Some(effective.to_string()),
            downlink_mbps: Some(downlink),
            rtt_ms: Some(rtt),
            save_data: Some(save_data),
        };
        ConnectionSample::from_reading(Some(&reading), Size::new(width, 800.0))
    }

    fn long_form(s: &ConnectionSample) -> bool {
        s.is_good_connection()
            && s.screen != ScreenBucket::Small
            && !s.save_data
            && s.downlink_mbps >= 1.5
            && s.rtt_ms <= 200.0
    }

    #[test]
    fn hero_sources_prefer_quicktime() {
        assert_eq!(HERO_SOURCES[0].mime, "video/quicktime");
        assert_eq!(HERO_SOURCES[1].mime, "video/mp4");
    }

    #[test]
    fn unified_predicate_matches_long_form() {
        for effective in ["3g", "4g"] {
            for downlink in [1.0, 1.5, 8.0] {
                for rtt in [20.0, 200.0, 300.0] {
                    for save_data in [false, true] {
                        for width in [500.0, 800.0, 1300.0] {
                            let s = sample(effective, downlink, rtt, save_data, width);
                            assert_eq!(
                                should_use_video(&s),
                                long_form(&s),
                                "{effective} {downlink} {rtt} {save_data} {width}"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn small_screen_gets_image() {
        let mut selector = MediaSelector::new();
        let s = sample("4g", 10.0, 50.0, false, 600.0);
        assert!(s.is_good_connection());
        assert_eq!(selector.choose(&s), Background::Image);
        assert_eq!(selector.state(), PlaybackState::Untried);
    }

    #[test]
    fn good_sample_attempts_video() {
        let mut selector = MediaSelector::new();
        assert_eq!(
            selector.choose(&ConnectionSample::default()),
            Background::Video
        );
        assert_eq!(selector.state(), PlaybackState::Attempting);
    }

    #[test]
    fn degraded_sample_unmounts_video() {
        let mut selector = MediaSelector::new();
        selector.choose(&ConnectionSample::default());
        assert_eq!(
            selector.choose(&sample("3g", 10.0, 50.0, false, 1300.0)),
            Background::Image
        );
        assert_eq!(selector.state(), PlaybackState::Untried);
    }

    #[test]
    fn load_events_do_not_change_state() {
        let mut selector = MediaSelector::new();
        selector.choose(&ConnectionSample::default());
        let mut tracer = Tracer::none();
        assert_eq!(
            selector.observe(MediaLifecycle::LoadStart, &mut tracer),
            PlaybackState::Attempting
        );
        assert_eq!(
            selector.observe(MediaLifecycle::CanPlay, &mut tracer),
            PlaybackState::Attempting
        );
    }

    #[test]
    fn error_latches_image_for_the_session() {
        let mut selector = MediaSelector::new();
        let good = ConnectionSample::default();
        selector.choose(&good);

        let mut tracer = Tracer::none();
        selector.observe(MediaLifecycle::Error, &mut tracer);
        selector.observe(MediaLifecycle::Error, &mut tracer);
        assert_eq!(selector.state(), PlaybackState::Failed);
        assert!(!selector.decision(&good));

        // Later samples, good or not, never bring the video back.
        assert_eq!(selector.choose(&good), Background::Image);
        assert_eq!(
            selector.choose(&sample("3g", 0.5, 600.0, true, 400.0)),
            Background::Image
        );
        selector.observe(MediaLifecycle::CanPlay, &mut tracer);
        assert_eq!(selector.state(), PlaybackState::Failed);
    }

    #[test]
    fn decision_is_pure() {
        let selector = MediaSelector::new();
        assert!(selector.decision(&ConnectionSample::default()));
        assert_eq!(selector.state(), PlaybackState::Untried);
    }

    #[test]
    fn lifecycle_event_types() {
        let types: [&str; 3] = MediaLifecycle::ALL.map(MediaLifecycle::event_type);
        assert_eq!(types, ["loadstart", "canplay", "error"]);
    }

    #[cfg(feature = "trace")]
    #[test]
    fn observe_emits_media_events() {
        use crate::trace::TraceSink;
        use alloc::vec::Vec;

        #[derive(Default)]
        struct Log(Vec<MediaEvent>);
        impl TraceSink for Log {
            fn on_media(&mut self, e: &MediaEvent) {
                self.0.push(*e);
            }
        }

        let mut log = Log::default();
        let mut selector = MediaSelector::new();
        selector.choose(&ConnectionSample::default());
        for lifecycle in MediaLifecycle::ALL {
            selector.observe(lifecycle, &mut Tracer::new(&mut log));
        }
        assert_eq!(log.0.len(), 3);
        assert_eq!(log.0[1].state, PlaybackState::Attempting);
        assert_eq!(
            log.0[2],
            MediaEvent {
                lifecycle: MediaLifecycle::Error,
                state: PlaybackState::Failed
            }
        );
    }
}
