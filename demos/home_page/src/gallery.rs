// Copyright 2026 the Haulsite Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! "Recent Projects" cards. At most one card shows its details.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use haulsite_backend_web::EventListener;
use haulsite_core::nav::SectionId;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::content::{PROJECTS, Project};
use crate::{PageNav, dom};

/// Returns the expanded card after a click on card `index`.
fn toggle(expanded: Option<usize>, index: usize) -> Option<usize> {
    if expanded == Some(index) {
        None
    } else {
        Some(index)
    }
}

fn details_label(expanded: bool) -> &'static str {
    if expanded { "Hide Details" } else { "View Details" }
}

struct Card {
    details: Element,
    toggle: Element,
}

/// Fills the gallery section and returns its listeners.
pub(crate) fn mount(
    doc: &Document,
    section: &Element,
    nav: &Rc<PageNav>,
) -> Result<Vec<EventListener>, JsValue> {
    let inner = dom::element(doc, "div", "section-inner")?;
    section.append_child(&inner)?;
    dom::append_text(&inner, "h2", "section-title", "Recent Projects")?;
    dom::append_text(
        &inner,
        "p",
        "section-lead",
        "Showcasing our capability in handling heavy haul and specialized loads with precision",
    )?;
    let grid = dom::element(doc, "div", "project-grid")?;
    inner.append_child(&grid)?;

    let mut listeners = Vec::new();
    let mut cards = Vec::with_capacity(PROJECTS.len());
    for project in &PROJECTS {
        let (card, quote) = card(doc, &grid, project)?;
        let nav = Rc::clone(nav);
        listeners.push(EventListener::new(&quote, "click", move |_| {
            nav.go_to_id(SectionId::Contact);
        })?);
        cards.push(card);
    }

    let cards = Rc::new(RefCell::new(cards));
    let expanded = Rc::new(Cell::new(None));
    for index in 0..PROJECTS.len() {
        let button = cards.borrow()[index].toggle.clone();
        let cards = Rc::clone(&cards);
        let expanded = Rc::clone(&expanded);
        listeners.push(EventListener::new(&button, "click", move |_| {
            let now = toggle(expanded.get(), index);
            expanded.set(now);
            for (i, card) in cards.borrow().iter().enumerate() {
                let open = now == Some(i);
                dom::set_visible(&card.details, open);
                card.toggle.set_text_content(Some(details_label(open)));
            }
        })?);
    }
    Ok(listeners)
}

/// Builds one card. Returns it with its "Get Quote for Similar Project"
/// button.
fn card(doc: &Document, grid: &Element, project: &Project) -> Result<(Card, Element), JsValue> {
    let card = dom::element(doc, "article", "project-card")?;
    grid.append_child(&card)?;

    let media = dom::element(doc, "div", "project-media")?;
    let img = dom::element(doc, "img", "project-image")?;
    img.set_attribute("src", project.image)?;
    img.set_attribute("alt", project.title)?;
    img.set_attribute("loading", "lazy")?;
    media.append_child(&img)?;
    dom::append_text(&media, "span", "project-category", project.category)?;
    card.append_child(&media)?;

    let body = dom::element(doc, "div", "project-body")?;
    card.append_child(&body)?;
    dom::append_text(&body, "h3", "project-title", project.title)?;
    dom::append_text(&body, "p", "project-description", project.description)?;

    let details = dom::element(doc, "div", "project-details")?;
    dom::set_visible(&details, false);
    body.append_child(&details)?;
    let facts = dom::element(doc, "div", "project-facts")?;
    details.append_child(&facts)?;
    dom::append_text(&facts, "h4", "", "Project Details")?;
    for (label, value) in project.detail_rows() {
        let row = dom::element(doc, "div", "")?;
        dom::append_text(&row, "span", "fact-label", label)?;
        dom::append_text(&row, "p", "fact-value", value)?;
        facts.append_child(&row)?;
    }
    let challenges = dom::element(doc, "div", "project-challenges")?;
    details.append_child(&challenges)?;
    dom::append_text(&challenges, "h4", "", "Key Challenges")?;
    dom::append_text(&challenges, "p", "", project.challenges)?;
    let quote = dom::button(doc, "button-primary", "Get Quote for Similar Project")?;
    details.append_child(&quote)?;

    let toggle = dom::button(doc, "button-primary", details_label(false))?;
    body.append_child(&toggle)?;
    Ok((Card { details, toggle }, quote))
}
