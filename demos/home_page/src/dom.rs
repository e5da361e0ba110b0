// Copyright 2026 the Haulsite Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element construction helpers.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

/// Creates `<tag class="class">`.
pub(crate) fn element(doc: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let el = doc.create_element(tag)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el)
}

/// Creates `<tag class="class">text</tag>`.
pub(crate) fn text(doc: &Document, tag: &str, class: &str, text: &str) -> Result<Element, JsValue> {
    let el = element(doc, tag, class)?;
    el.set_text_content(Some(text));
    Ok(el)
}

/// Creates `<tag class="class">text</tag>` and appends it to `parent`.
pub(crate) fn append_text(
    parent: &Element,
    tag: &str,
    class: &str,
    content: &str,
) -> Result<Element, JsValue> {
    let doc = owner(parent)?;
    let el = text(&doc, tag, class, content)?;
    parent.append_child(&el)?;
    Ok(el)
}

/// Creates a link. External links open in a new tab.
pub(crate) fn link(
    doc: &Document,
    class: &str,
    href: &str,
    label: &str,
    external: bool,
) -> Result<Element, JsValue> {
    let a = text(doc, "a", class, label)?;
    a.set_attribute("href", href)?;
    if external {
        a.set_attribute("target", "_blank")?;
        a.set_attribute("rel", "noopener noreferrer")?;
    }
    Ok(a)
}

/// Creates a `<button type="button">`.
pub(crate) fn button(doc: &Document, class: &str, label: &str) -> Result<Element, JsValue> {
    let b = text(doc, "button", class, label)?;
    b.set_attribute("type", "button")?;
    Ok(b)
}

/// Shows or hides `el` with the `hidden` attribute.
pub(crate) fn set_visible(el: &Element, visible: bool) {
    let _ = if visible {
        el.remove_attribute("hidden")
    } else {
        el.set_attribute("hidden", "")
    };
}

/// Adds or removes `class` on `el`.
pub(crate) fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

fn owner(el: &Element) -> Result<Document, JsValue> {
    el.owner_document()
        .ok_or_else(|| JsValue::from_str("element has no owner document"))
}
