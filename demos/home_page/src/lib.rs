// Copyright 2026 the Haulsite Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The Amex Transports home page.
//!
//! Builds the page into `<body>`: header, four navigable sections (hero,
//! services, projects, contact), footer and the scroll indicator. The hero
//! background follows the connection estimate, desktop visitors can move
//! between sections with the keyboard, and the contact form posts to the
//! mail endpoint.
//!
//! Build with: `wasm-pack build --target web demos/home_page`
//! Then serve `demos/home_page/` next to the site's static assets.

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

mod config;
mod content;
mod dom;
mod form;
mod gallery;
mod hero;

pub use config::HomePageConfig;

use alloc::rc::Rc;
use alloc::string::ToString as _;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use haulsite_backend_web::{
    BrowserSignals, ConsoleSink, EventListener, KeyboardNavigation, NetworkMonitor,
    SharedNavigator, SharedSink, navigate_to, navigate_to_id, share_sink,
};
use haulsite_core::nav::{Section, SectionId, SectionNavigator};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window, console};

use content::{CONTACT_CARDS, SERVICES};
use hero::{DebugPanel, HeroBackground};

/// Entry point for the home page.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    let window = haulsite_backend_web::window()?;
    let config = HomePageConfig::for_window(&window);
    let page = mount(&window, config)?;
    // The page lives until unload.
    core::mem::forget(page);
    Ok(())
}

/// A mounted home page.
///
/// Dropping it removes the page from the document, unbinds every listener
/// and stops the network monitor, which also unmounts the hero video.
pub struct HomePage {
    root: Element,
    listeners: Vec<EventListener>,
    _keys: KeyboardNavigation,
    monitor: NetworkMonitor,
}

impl Drop for HomePage {
    fn drop(&mut self) {
        self.root.remove();
    }
}

impl core::fmt::Debug for HomePage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HomePage")
            .field("listeners", &self.listeners.len())
            .field("monitor", &self.monitor)
            .finish_non_exhaustive()
    }
}

/// Builds the page into `<body>` of `window`'s document.
///
/// Everything stays bound until the returned [`HomePage`] is dropped.
pub fn mount(window: &Window, config: HomePageConfig) -> Result<HomePage, JsValue> {
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;
    let sink = if config.verbose_console {
        share_sink(ConsoleSink::verbose())
    } else {
        share_sink(ConsoleSink::new())
    };

    let root = dom::element(&document, "div", "home-page")?;
    body.append_child(&root)?;
    let header = dom::element(&document, "header", "site-header")?;
    root.append_child(&header)?;
    let container = dom::element(&document, "main", "snap-container")?;
    root.append_child(&container)?;

    let mut sections = Vec::with_capacity(SectionId::ALL.len());
    for id in SectionId::ALL {
        let section = dom::element(&document, "section", "snap-section")?;
        section.set_id(id.dom_id());
        container.append_child(&section)?;
        sections.push(Section {
            id,
            anchor: section,
        });
    }
    let anchor = |id: SectionId| -> Result<Element, JsValue> {
        sections
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.anchor.clone())
            .ok_or_else(|| JsValue::from_str(id.dom_id()))
    };
    let hero_section = anchor(SectionId::Hero)?;
    let services_section = anchor(SectionId::Services)?;
    let gallery_section = anchor(SectionId::Gallery)?;
    let contact_section = anchor(SectionId::Contact)?;

    let navigator: SharedNavigator = Rc::new(RefCell::new(
        SectionNavigator::new(sections).map_err(|e| JsValue::from_str(&e.to_string()))?,
    ));
    let nav = Rc::new(PageNav {
        navigator: Rc::clone(&navigator),
        sink: Rc::clone(&sink),
        dots: RefCell::new(Vec::new()),
    });

    let mut listeners = Vec::new();
    listeners.extend(build_header(&document, &header, &nav)?);
    let panel = if config.debug_panel {
        let (panel, toggle) = DebugPanel::mount(&document, &root)?;
        let handle = panel.clone();
        listeners.push(EventListener::new(&toggle, "click", move |_| handle.toggle())?);
        Some(panel)
    } else {
        None
    };
    let background = HeroBackground::new(&document, &hero_section, panel, Rc::clone(&sink))?;
    listeners.extend(build_hero(&document, &hero_section, &nav)?);
    build_services(&document, &services_section)?;
    listeners.extend(gallery::mount(&document, &gallery_section, &nav)?);
    listeners.push(build_contact(
        window,
        &document,
        &contact_section,
        config.endpoint,
        &sink,
    )?);
    listeners.extend(build_footer(&document, &root, &nav)?);
    listeners.extend(build_indicator(&document, &root, &nav)?);

    let keys = KeyboardNavigation::bind(window, Rc::clone(&navigator), Rc::clone(&sink))?;
    // Registered after the navigator's listener, so it sees the new index.
    {
        let nav = Rc::clone(&nav);
        listeners.push(EventListener::new(window, "keydown", move |_| {
            nav.sync_dots();
        })?);
    }

    let monitor = NetworkMonitor::start(BrowserSignals::new(window.clone()), sink, move |sample| {
        if let Err(e) = hero::refresh(&background, sample) {
            console::error_1(&e);
        }
    })?;

    Ok(HomePage {
        root,
        listeners,
        _keys: keys,
        monitor,
    })
}

/// Navigation shared by the header, hero buttons, footer and indicator dots.
pub(crate) struct PageNav {
    navigator: SharedNavigator,
    sink: SharedSink,
    dots: RefCell<Vec<Element>>,
}

impl PageNav {
    pub(crate) fn go_to(&self, index: usize) {
        navigate_to(&self.navigator, &self.sink, index);
        self.sync_dots();
    }

    pub(crate) fn go_to_id(&self, id: SectionId) {
        navigate_to_id(&self.navigator, &self.sink, id);
        self.sync_dots();
    }

    fn sync_dots(&self) {
        let current = self.navigator.borrow().current();
        for (i, dot) in self.dots.borrow().iter().enumerate() {
            dom::set_class(dot, "active", i == current);
            let _ = if i == current {
                dot.set_attribute("aria-current", "true")
            } else {
                dot.remove_attribute("aria-current")
            };
        }
    }
}

/// A click handler that suppresses the link's default navigation.
fn on_click(target: &Element, mut f: impl FnMut() + 'static) -> Result<EventListener, JsValue> {
    EventListener::new(target, "click", move |event| {
        event.prevent_default();
        f();
    })
}

fn section_link(doc: &Document, class: &str, id: SectionId) -> Result<Element, JsValue> {
    dom::link(doc, class, &alloc::format!("#{}", id.dom_id()), id.label(), false)
}

fn build_header(
    doc: &Document,
    header: &Element,
    nav: &Rc<PageNav>,
) -> Result<Vec<EventListener>, JsValue> {
    let mut listeners = Vec::new();
    let bar = dom::element(doc, "div", "header-bar")?;
    header.append_child(&bar)?;

    let logo = dom::link(doc, "logo", "#hero", "", false)?;
    let img = dom::element(doc, "img", "logo-image")?;
    img.set_attribute("src", "/white_FullLogoamex.png")?;
    img.set_attribute("alt", "Amex Transports")?;
    logo.append_child(&img)?;
    bar.append_child(&logo)?;
    {
        let nav = Rc::clone(nav);
        listeners.push(on_click(&logo, move || nav.go_to_id(SectionId::Hero))?);
    }

    let desktop = dom::element(doc, "nav", "desktop-nav")?;
    bar.append_child(&desktop)?;
    let toggle = dom::button(doc, "menu-toggle", "\u{2630}")?;
    toggle.set_attribute("aria-label", "Toggle menu")?;
    toggle.set_attribute("aria-expanded", "false")?;
    bar.append_child(&toggle)?;
    let mobile = dom::element(doc, "nav", "mobile-nav")?;
    dom::set_visible(&mobile, false);
    header.append_child(&mobile)?;

    let open = Rc::new(Cell::new(false));
    let set_open = {
        let toggle = toggle.clone();
        let mobile = mobile.clone();
        let open = Rc::clone(&open);
        move |value: bool| {
            open.set(value);
            dom::set_visible(&mobile, value);
            toggle.set_text_content(Some(if value { "\u{2715}" } else { "\u{2630}" }));
            let _ = toggle.set_attribute("aria-expanded", if value { "true" } else { "false" });
        }
    };
    {
        let set_open = set_open.clone();
        let open = Rc::clone(&open);
        listeners.push(on_click(&toggle, move || set_open(!open.get()))?);
    }

    for id in SectionId::ALL {
        let link = section_link(doc, "nav-link", id)?;
        desktop.append_child(&link)?;
        let nav_for_link = Rc::clone(nav);
        listeners.push(on_click(&link, move || nav_for_link.go_to_id(id))?);

        let mobile_link = section_link(doc, "mobile-nav-link", id)?;
        mobile.append_child(&mobile_link)?;
        let nav_for_link = Rc::clone(nav);
        let set_open = set_open.clone();
        listeners.push(on_click(&mobile_link, move || {
            set_open(false);
            nav_for_link.go_to_id(id);
        })?);
    }
    Ok(listeners)
}

fn build_hero(
    doc: &Document,
    section: &Element,
    nav: &Rc<PageNav>,
) -> Result<Vec<EventListener>, JsValue> {
    let overlay = dom::element(doc, "div", "hero-overlay")?;
    section.append_child(&overlay)?;
    let content = dom::element(doc, "div", "hero-content")?;
    section.append_child(&content)?;

    let title = dom::text(doc, "h1", "hero-title", content::HERO_TITLE)?;
    dom::append_text(&title, "span", "hero-tagline", content::HERO_TAGLINE)?;
    content.append_child(&title)?;
    dom::append_text(&content, "p", "hero-lead", content::HERO_LEAD)?;
    dom::append_text(&content, "p", "hero-detail", content::HERO_DETAIL)?;

    let actions = dom::element(doc, "div", "hero-actions")?;
    content.append_child(&actions)?;
    let quote = dom::button(doc, "button-primary", "Get Quote")?;
    let fleet = dom::button(doc, "button-outline", "View Fleet")?;
    actions.append_child(&quote)?;
    actions.append_child(&fleet)?;

    let hint = dom::element(doc, "div", "scroll-hint")?;
    dom::append_text(&hint, "span", "", "Scroll to explore")?;
    let mouse = dom::element(doc, "div", "scroll-hint-mouse")?;
    hint.append_child(&mouse)?;
    section.append_child(&hint)?;

    let to_contact = Rc::clone(nav);
    let to_gallery = Rc::clone(nav);
    Ok(alloc::vec![
        on_click(&quote, move || to_contact.go_to_id(SectionId::Contact))?,
        on_click(&fleet, move || to_gallery.go_to_id(SectionId::Gallery))?,
    ])
}

fn build_services(doc: &Document, section: &Element) -> Result<(), JsValue> {
    let inner = dom::element(doc, "div", "section-inner")?;
    section.append_child(&inner)?;
    dom::append_text(&inner, "h2", "section-title", "Our Services")?;
    dom::append_text(
        &inner,
        "p",
        "section-lead",
        "Specialized heavy haul transportation with customized plans for unique shipments",
    )?;
    let grid = dom::element(doc, "div", "service-grid")?;
    inner.append_child(&grid)?;
    for service in &SERVICES {
        let card = dom::element(doc, "article", "service-card")?;
        dom::append_text(&card, "div", "service-icon", service.icon)?;
        dom::append_text(&card, "h3", "service-title", service.title)?;
        dom::append_text(&card, "p", "service-description", service.description)?;
        let list = dom::element(doc, "ul", "service-features")?;
        for feature in service.features {
            dom::append_text(&list, "li", "", feature)?;
        }
        card.append_child(&list)?;
        grid.append_child(&card)?;
    }
    Ok(())
}

fn build_contact(
    window: &Window,
    doc: &Document,
    section: &Element,
    endpoint: &'static str,
    sink: &SharedSink,
) -> Result<EventListener, JsValue> {
    let inner = dom::element(doc, "div", "section-inner contact-grid")?;
    inner.set_id("get-in-touch");
    section.append_child(&inner)?;

    let info = dom::element(doc, "div", "contact-info")?;
    inner.append_child(&info)?;
    dom::append_text(&info, "h2", "section-title", "Get In Touch")?;
    dom::append_text(
        &info,
        "p",
        "section-lead",
        "Ready to move your heavy haul or specialized load? Contact us for a free quote and \
         consultation with our experienced team.",
    )?;
    for card in &CONTACT_CARDS {
        let el = dom::element(doc, "div", "contact-card")?;
        dom::append_text(&el, "div", "contact-icon", card.icon)?;
        let text = dom::element(doc, "div", "")?;
        dom::append_text(&text, "h3", "contact-title", card.title)?;
        for line in card.lines {
            let p = dom::element(doc, "p", "contact-line")?;
            match line.href {
                Some(href) => {
                    let a = dom::link(doc, "", href, line.text, line.external)?;
                    p.append_child(&a)?;
                }
                None => p.set_text_content(Some(line.text)),
            }
            text.append_child(&p)?;
        }
        el.append_child(&text)?;
        info.append_child(&el)?;
    }

    let form_column = dom::element(doc, "div", "contact-form-column")?;
    inner.append_child(&form_column)?;
    form::mount(window, doc, &form_column, endpoint, sink)
}

fn build_footer(
    doc: &Document,
    parent: &Element,
    nav: &Rc<PageNav>,
) -> Result<Vec<EventListener>, JsValue> {
    let mut listeners = Vec::new();
    let footer = dom::element(doc, "footer", "site-footer")?;
    parent.append_child(&footer)?;
    let grid = dom::element(doc, "div", "footer-grid")?;
    footer.append_child(&grid)?;

    let company = dom::element(doc, "div", "footer-company")?;
    grid.append_child(&company)?;
    dom::append_text(&company, "h3", "", content::COMPANY)?;
    dom::append_text(
        &company,
        "p",
        "",
        "Leading heavy haul transportation specialists since 2003.",
    )?;
    let social = dom::element(doc, "div", "footer-social")?;
    company.append_child(&social)?;
    for (href, icon, external) in [
        ("tel:+19375289614", "\u{1f4de}", false),
        ("mailto:amextrucks@gmail.com", "\u{2709}\u{fe0f}", false),
        ("https://www.instagram.com/amex.transport", "\u{1f4f7}", true),
    ] {
        let a = dom::link(doc, "footer-icon", href, icon, external)?;
        social.append_child(&a)?;
    }

    let quick = dom::element(doc, "div", "footer-links")?;
    grid.append_child(&quick)?;
    dom::append_text(&quick, "h4", "", "Quick Links")?;
    let list = dom::element(doc, "ul", "")?;
    quick.append_child(&list)?;
    for id in SectionId::ALL {
        let item = dom::element(doc, "li", "")?;
        let link = section_link(doc, "footer-link", id)?;
        item.append_child(&link)?;
        list.append_child(&item)?;
        let nav = Rc::clone(nav);
        listeners.push(on_click(&link, move || nav.go_to_id(id))?);
    }

    let services = dom::element(doc, "div", "footer-links")?;
    grid.append_child(&services)?;
    dom::append_text(&services, "h4", "", "Services")?;
    let list = dom::element(doc, "ul", "")?;
    services.append_child(&list)?;
    for service in &SERVICES {
        let item = dom::element(doc, "li", "")?;
        let link = dom::link(doc, "footer-link", "#services", service.title, false)?;
        item.append_child(&link)?;
        list.append_child(&item)?;
        let nav = Rc::clone(nav);
        listeners.push(on_click(&link, move || nav.go_to_id(SectionId::Services))?);
    }

    dom::append_text(&footer, "p", "footer-copyright", content::COPYRIGHT)?;
    Ok(listeners)
}

fn build_indicator(
    doc: &Document,
    parent: &Element,
    nav: &Rc<PageNav>,
) -> Result<Vec<EventListener>, JsValue> {
    let rail = dom::element(doc, "nav", "scroll-indicator")?;
    rail.set_attribute("aria-label", "Sections")?;
    parent.append_child(&rail)?;

    let mut listeners = Vec::new();
    let mut dots = Vec::with_capacity(SectionId::ALL.len());
    for (index, id) in SectionId::ALL.into_iter().enumerate() {
        let dot = dom::button(doc, "scroll-dot", "")?;
        dot.set_attribute("aria-label", id.label())?;
        dot.set_attribute("title", id.label())?;
        rail.append_child(&dot)?;
        let nav = Rc::clone(nav);
        listeners.push(on_click(&dot, move || nav.go_to(index))?);
        dots.push(dot);
    }
    *nav.dots.borrow_mut() = dots;
    nav.sync_dots();
    Ok(listeners)
}

#[cfg(test)]
mod tests {
    use super::*;
    use haulsite_core::contact::ServiceOption;

    #[test]
    fn mount_hands_back_an_owning_handle() {
        let _: fn(&Window, HomePageConfig) -> Result<HomePage, JsValue> = mount;
        let _: fn(HomePage) = drop;
    }

    #[test]
    fn every_section_has_a_distinct_anchor() {
        let mut ids: Vec<&str> = SectionId::ALL.iter().map(|id| id.dom_id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SectionId::ALL.len());
        assert!(!ids.contains(&"get-in-touch"));
    }

    #[test]
    fn service_cards_are_offered_in_the_form() {
        for service in &SERVICES {
            assert!(
                ServiceOption::from_label(service.title).is_some(),
                "{} missing from form options",
                service.title
            );
        }
    }

    #[test]
    fn contact_cards_link_their_first_line() {
        for card in &CONTACT_CARDS {
            assert!(card.lines[0].href.is_some(), "{}", card.title);
        }
    }
}
