// Copyright 2026 the Haulsite Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Section navigation.
//!
//! The home page is a vertical stack of [`SectionId`] regions. A
//! [`SectionNavigator`] tracks which one is current and moves between them in
//! response to navigation keys (desktop viewports only) or programmatic
//! jumps. Every transition is clamped to the section list, updates the index
//! immediately, and issues one fire-and-forget scroll command through a
//! [`ScrollTarget`]. A second command issued before the first animation
//! finishes simply supersedes it.

use alloc::vec::Vec;
use core::fmt;

use crate::trace::{NavCause, NavigateEvent, Tracer};

/// Keyboard navigation is enabled only for viewports wider than this.
pub const KEYBOARD_MIN_WIDTH: f64 = 768.0;

/// The fixed page sections, in scroll order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    /// Hero banner with the adaptive background.
    Hero,
    /// Service cards.
    Services,
    /// Recent project gallery.
    Gallery,
    /// Contact details and form.
    Contact,
}

impl SectionId {
    /// All sections in scroll order.
    pub const ALL: [Self; 4] = [Self::Hero, Self::Services, Self::Gallery, Self::Contact];

    /// Returns the DOM id of the section element.
    #[must_use]
    pub const fn dom_id(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Services => "services",
            Self::Gallery => "gallery",
            Self::Contact => "contact",
        }
    }

    /// Returns the human-readable label shown in the scroll indicator.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::Services => "Services",
            Self::Gallery => "Projects",
            Self::Contact => "Contact",
        }
    }
}

/// A section paired with the host handle used to scroll to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section<A> {
    /// Which section this is.
    pub id: SectionId,
    /// Opaque scroll anchor (a DOM element in the browser).
    pub anchor: A,
}

/// A navigation key, decoded from a DOM `KeyboardEvent.key` value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavKey {
    /// `ArrowDown` or `PageDown`.
    Next,
    /// `ArrowUp` or `PageUp`.
    Previous,
    /// `Home`.
    First,
    /// `End`.
    Last,
}

impl NavKey {
    /// Decodes a `KeyboardEvent.key` value; other keys yield `None`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" | "PageDown" => Some(Self::Next),
            "ArrowUp" | "PageUp" => Some(Self::Previous),
            "Home" => Some(Self::First),
            "End" => Some(Self::Last),
            _ => None,
        }
    }
}

/// Issues smooth, top-aligned scroll-into-view commands.
///
/// Commands are fire-and-forget: the navigator does not wait for the
/// animation to finish.
pub trait ScrollTarget<A: ?Sized> {
    /// Scrolls `anchor` into view.
    fn scroll_into_view(&mut self, anchor: &A);
}

/// Result of offering a key press to the navigator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not a navigation key, or the viewport is too narrow. The host keeps
    /// its default behavior.
    Ignored,
    /// The navigator moved to this index and scrolled. The host must
    /// suppress its default scrolling for the key.
    Handled(usize),
}

impl KeyOutcome {
    /// Returns `true` for [`KeyOutcome::Handled`].
    #[must_use]
    pub const fn is_handled(self) -> bool {
        matches!(self, Self::Handled(_))
    }
}

/// Error returned when building a navigator over no sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoSections;

impl fmt::Display for NoSections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("section navigator needs at least one section")
    }
}

impl core::error::Error for NoSections {}

/// Tracks the current section and performs clamped transitions.
///
/// Invariant: `current() < len()` at all times.
#[derive(Clone, Debug)]
pub struct SectionNavigator<A> {
    sections: Vec<Section<A>>,
    current: usize,
}

impl<A> SectionNavigator<A> {
    /// Creates a navigator positioned on the first section.
    pub fn new(sections: Vec<Section<A>>) -> Result<Self, NoSections> {
        if sections.is_empty() {
            return Err(NoSections);
        }
        Ok(Self {
            sections,
            current: 0,
        })
    }

    /// Creates a navigator over [`SectionId::ALL`], asking `anchor` for each
    /// section's scroll handle.
    pub fn for_page(mut anchor: impl FnMut(SectionId) -> A) -> Self {
        Self {
            sections: SectionId::ALL
                .into_iter()
                .map(|id| Section {
                    id,
                    anchor: anchor(id),
                })
                .collect(),
            current: 0,
        }
    }

    /// Returns the current section index.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Returns the current section.
    #[must_use]
    pub fn current_section(&self) -> &Section<A> {
        &self.sections[self.current]
    }

    /// Returns all sections in scroll order.
    #[must_use]
    pub fn sections(&self) -> &[Section<A>] {
        &self.sections
    }

    /// Returns the number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Always `false`; a navigator cannot be built without sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Returns the index `key` would move to from the current position.
    #[must_use]
    pub fn target(&self, key: NavKey) -> usize {
        let last = self.sections.len() - 1;
        match key {
            NavKey::Next => (self.current + 1).min(last),
            NavKey::Previous => self.current.saturating_sub(1),
            NavKey::First => 0,
            NavKey::Last => last,
        }
    }

    /// Offers a `KeyboardEvent.key` value to the navigator.
    ///
    /// Does nothing unless `viewport_width` exceeds [`KEYBOARD_MIN_WIDTH`] and
    /// `key` is a navigation key. Otherwise moves to the clamped target, even
    /// if that is the current section, and scrolls it into view.
    pub fn handle_key<S>(
        &mut self,
        key: &str,
        viewport_width: f64,
        scroller: &mut S,
        tracer: &mut Tracer<'_>,
    ) -> KeyOutcome
    where
        S: ScrollTarget<A> + ?Sized,
    {
        if viewport_width <= KEYBOARD_MIN_WIDTH {
            return KeyOutcome::Ignored;
        }
        let Some(nav) = NavKey::from_key(key) else {
            return KeyOutcome::Ignored;
        };
        let to = self.target(nav);
        self.go(to, NavCause::Key(nav), scroller, tracer);
        KeyOutcome::Handled(to)
    }

    /// Jumps to `index`, clamped to the last section, and returns the index
    /// actually used.
    pub fn scroll_to<S>(&mut self, index: usize, scroller: &mut S, tracer: &mut Tracer<'_>) -> usize
    where
        S: ScrollTarget<A> + ?Sized,
    {
        let to = index.min(self.sections.len() - 1);
        self.go(to, NavCause::Programmatic, scroller, tracer);
        to
    }

    /// Jumps to the section with the given id, if present.
    pub fn scroll_to_id<S>(
        &mut self,
        id: SectionId,
        scroller: &mut S,
        tracer: &mut Tracer<'_>,
    ) -> Option<usize>
    where
        S: ScrollTarget<A> + ?Sized,
    {
        let to = self.sections.iter().position(|s| s.id == id)?;
        self.go(to, NavCause::Programmatic, scroller, tracer);
        Some(to)
    }

    fn go<S>(&mut self, to: usize, cause: NavCause, scroller: &mut S, tracer: &mut Tracer<'_>)
    where
        S: ScrollTarget<A> + ?Sized,
    {
        let from = self.current;
        // Optimistic: the index moves before the scroll animation runs.
        self.current = to;
        let section = &self.sections[to];
        scroller.scroll_into_view(&section.anchor);
        tracer.navigate(&NavigateEvent {
            cause,
            from,
            to,
            section: section.id,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    /// Records the anchors it was asked to scroll to.
    #[derive(Default)]
    struct Scrolls(Vec<SectionId>);

    impl ScrollTarget<SectionId> for Scrolls {
        fn scroll_into_view(&mut self, anchor: &SectionId) {
            self.0.push(*anchor);
        }
    }

    const DESKTOP: f64 = 1280.0;

    fn page() -> SectionNavigator<SectionId> {
        SectionNavigator::for_page(|id| id)
    }

    fn press(nav: &mut SectionNavigator<SectionId>, key: &str, scrolls: &mut Scrolls) -> KeyOutcome {
        nav.handle_key(key, DESKTOP, scrolls, &mut Tracer::none())
    }

    #[test]
    fn page_sections_in_order() {
        let nav = page();
        assert_eq!(nav.len(), 4);
        assert_eq!(nav.current(), 0);
        let ids: Vec<&str> = nav.sections().iter().map(|s| s.id.dom_id()).collect();
        assert_eq!(ids, ["hero", "services", "gallery", "contact"]);
        assert_eq!(SectionId::Gallery.label(), "Projects");
    }

    #[test]
    fn empty_section_list_is_rejected() {
        assert_eq!(
            SectionNavigator::<()>::new(Vec::new()).map(|n| n.len()),
            Err(NoSections)
        );
    }

    #[test]
    fn key_decoding() {
        assert_eq!(NavKey::from_key("ArrowDown"), Some(NavKey::Next));
        assert_eq!(NavKey::from_key("PageDown"), Some(NavKey::Next));
        assert_eq!(NavKey::from_key("ArrowUp"), Some(NavKey::Previous));
        assert_eq!(NavKey::from_key("PageUp"), Some(NavKey::Previous));
        assert_eq!(NavKey::from_key("Home"), Some(NavKey::First));
        assert_eq!(NavKey::from_key("End"), Some(NavKey::Last));
        assert_eq!(NavKey::from_key("ArrowLeft"), None);
        assert_eq!(NavKey::from_key(" "), None);
        assert_eq!(NavKey::from_key("arrowdown"), None);
    }

    #[test]
    fn arrow_down_advances_and_scrolls() {
        let mut nav = page();
        let mut scrolls = Scrolls::default();
        assert_eq!(press(&mut nav, "ArrowDown", &mut scrolls), KeyOutcome::Handled(1));
        assert_eq!(press(&mut nav, "PageDown", &mut scrolls), KeyOutcome::Handled(2));
        assert_eq!(nav.current_section().id, SectionId::Gallery);
        assert_eq!(scrolls.0, [SectionId::Services, SectionId::Gallery]);
    }

    #[test]
    fn clamped_at_both_ends() {
        let mut nav = page();
        let mut scrolls = Scrolls::default();
        assert_eq!(press(&mut nav, "ArrowUp", &mut scrolls), KeyOutcome::Handled(0));
        assert_eq!(nav.current(), 0);

        assert_eq!(press(&mut nav, "End", &mut scrolls), KeyOutcome::Handled(3));
        assert_eq!(press(&mut nav, "ArrowDown", &mut scrolls), KeyOutcome::Handled(3));
        assert_eq!(nav.current(), 3);

        assert_eq!(press(&mut nav, "Home", &mut scrolls), KeyOutcome::Handled(0));
        // Clamped moves still scroll to the (unchanged) target.
        assert_eq!(
            scrolls.0,
            [
                SectionId::Hero,
                SectionId::Contact,
                SectionId::Contact,
                SectionId::Hero
            ]
        );
    }

    #[test]
    fn index_stays_in_bounds_for_any_sequence() {
        let keys = ["ArrowDown", "ArrowUp", "Home", "End", "PageDown", "PageUp", "x"];
        let mut nav = page();
        let mut scrolls = Scrolls::default();
        // Deterministic pseudo-random walk over the key set.
        let mut state = 0x2545_f491_u32;
        for _ in 0..500 {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let key = keys[state as usize % keys.len()];
            let before = nav.current();
            let outcome = press(&mut nav, key, &mut scrolls);
            assert!(nav.current() <= 3, "index escaped after {key}");
            match key {
                "End" => assert_eq!(nav.current(), 3, "End must land on the last section"),
                "Home" => assert_eq!(nav.current(), 0, "Home must land on the first section"),
                "x" => {
                    assert_eq!(outcome, KeyOutcome::Ignored);
                    assert_eq!(nav.current(), before, "other keys must not move");
                }
                _ => assert!(outcome.is_handled(), "{key} must be handled"),
            }
        }
    }

    #[test]
    fn narrow_viewport_disables_keys() {
        let mut nav = page();
        let mut scrolls = Scrolls::default();
        for width in [500.0, 768.0] {
            let outcome = nav.handle_key("ArrowDown", width, &mut scrolls, &mut Tracer::none());
            assert_eq!(outcome, KeyOutcome::Ignored);
        }
        assert_eq!(nav.current(), 0);
        assert!(scrolls.0.is_empty());

        let outcome = nav.handle_key("ArrowDown", 769.0, &mut scrolls, &mut Tracer::none());
        assert_eq!(outcome, KeyOutcome::Handled(1));
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        let mut nav = page();
        let mut scrolls = Scrolls::default();
        for key in ["Enter", "Tab", "a", "ArrowRight", "Escape"] {
            assert_eq!(press(&mut nav, key, &mut scrolls), KeyOutcome::Ignored);
        }
        assert_eq!(nav.current(), 0);
        assert!(scrolls.0.is_empty());
    }

    #[test]
    fn programmatic_jumps_clamp() {
        let mut nav = page();
        let mut scrolls = Scrolls::default();
        assert_eq!(nav.scroll_to(2, &mut scrolls, &mut Tracer::none()), 2);
        assert_eq!(nav.scroll_to(99, &mut scrolls, &mut Tracer::none()), 3);
        assert_eq!(
            nav.scroll_to_id(SectionId::Services, &mut scrolls, &mut Tracer::none()),
            Some(1)
        );
        assert_eq!(nav.current(), 1);
        assert_eq!(
            scrolls.0,
            [SectionId::Gallery, SectionId::Contact, SectionId::Services]
        );
    }

    #[test]
    fn scroll_to_missing_id_is_noop() {
        let mut nav = SectionNavigator::new(vec![Section {
            id: SectionId::Hero,
            anchor: SectionId::Hero,
        }])
        .unwrap();
        let mut scrolls = Scrolls::default();
        assert_eq!(
            nav.scroll_to_id(SectionId::Contact, &mut scrolls, &mut Tracer::none()),
            None
        );
        assert!(scrolls.0.is_empty());
        // Single-section page: every key lands on index 0.
        assert_eq!(press(&mut nav, "End", &mut scrolls), KeyOutcome::Handled(0));
        assert_eq!(press(&mut nav, "ArrowDown", &mut scrolls), KeyOutcome::Handled(0));
    }

    #[cfg(feature = "trace")]
    #[test]
    fn transitions_emit_navigate_events() {
        use crate::trace::TraceSink;

        #[derive(Default)]
        struct Log(Vec<NavigateEvent>);
        impl TraceSink for Log {
            fn on_navigate(&mut self, e: &NavigateEvent) {
                self.0.push(*e);
            }
        }

        let mut log = Log::default();
        let mut nav = page();
        let mut scrolls = Scrolls::default();
        nav.handle_key("End", DESKTOP, &mut scrolls, &mut Tracer::new(&mut log));
        nav.scroll_to(1, &mut scrolls, &mut Tracer::new(&mut log));
        assert_eq!(
            log.0,
            [
                NavigateEvent {
                    cause: NavCause::Key(NavKey::Last),
                    from: 0,
                    to: 3,
                    section: SectionId::Contact,
                },
                NavigateEvent {
                    cause: NavCause::Programmatic,
                    from: 3,
                    to: 1,
                    section: SectionId::Services,
                },
            ]
        );
    }
}
