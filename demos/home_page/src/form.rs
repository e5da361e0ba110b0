// Copyright 2026 the Haulsite Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The "Send Us a Message" form.

use alloc::rc::Rc;
use alloc::string::ToString as _;
use core::cell::RefCell;

use haulsite_backend_web::{EventListener, SharedSink, alert, submit_contact};
use haulsite_core::contact::{ContactError, ContactForm, ServiceOption};
use haulsite_core::trace::Tracer;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, Window,
};

use crate::dom;

struct Fields {
    name: HtmlInputElement,
    email: HtmlInputElement,
    phone: HtmlInputElement,
    service: HtmlSelectElement,
    message: HtmlTextAreaElement,
    submit: HtmlButtonElement,
}

impl Fields {
    fn read_into(&self, form: &mut ContactForm) {
        let draft = form.draft_mut();
        draft.name = self.name.value();
        draft.email = self.email.value();
        draft.phone = self.phone.value();
        draft.service = self.service.value();
        draft.message = self.message.value();
    }

    fn clear(&self) {
        self.name.set_value("");
        self.email.set_value("");
        self.phone.set_value("");
        self.service.set_value("");
        self.message.set_value("");
    }

    fn show_state(&self, form: &ContactForm) {
        self.submit.set_text_content(Some(form.button_label()));
        self.submit.set_disabled(form.is_submitting());
    }
}

/// Builds the form inside `parent` and returns the listener that keeps it
/// live.
pub(crate) fn mount(
    window: &Window,
    doc: &Document,
    parent: &Element,
    endpoint: &'static str,
    sink: &SharedSink,
) -> Result<EventListener, JsValue> {
    dom::append_text(parent, "h3", "form-title", "Send Us a Message")?;
    let form_el = dom::element(doc, "form", "contact-form")?;
    parent.append_child(&form_el)?;

    let name = input(doc, &form_el, "name", "text", "Full Name *", "Your full name", true)?;
    let email = input(
        doc,
        &form_el,
        "email",
        "email",
        "Email Address *",
        "your.email@example.com",
        true,
    )?;
    let phone = input(doc, &form_el, "phone", "tel", "Phone Number", "(937) 528-9614", false)?;
    let service = select(doc, &form_el)?;
    let message = textarea(doc, &form_el)?;

    let submit: HtmlButtonElement = dom::element(doc, "button", "form-submit")?.dyn_into()?;
    submit.set_type("submit");
    form_el.append_child(&submit)?;

    let fields = Rc::new(Fields {
        name,
        email,
        phone,
        service,
        message,
        submit,
    });
    let state = Rc::new(RefCell::new(ContactForm::new()));
    fields.show_state(&state.borrow());

    let window = window.clone();
    let sink = Rc::clone(sink);
    EventListener::new(&form_el, "submit", move |event| {
        event.prevent_default();
        let submission = {
            let mut form = state.borrow_mut();
            fields.read_into(&mut form);
            match form.begin_submit() {
                Ok(submission) => submission,
                Err(ContactError::AlreadySubmitting) => return,
                Err(e) => {
                    alert(&window, &e.to_string());
                    return;
                }
            }
        };
        fields.show_state(&state.borrow());

        let window = window.clone();
        let fields = Rc::clone(&fields);
        let state = Rc::clone(&state);
        let sink = Rc::clone(&sink);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = submit_contact(&window, endpoint, &submission).await;
            {
                let mut sink = sink.borrow_mut();
                let mut tracer = Tracer::new(&mut *sink);
                state.borrow_mut().finish(&outcome, &mut tracer);
            }
            if outcome.is_sent() {
                fields.clear();
            }
            fields.show_state(&state.borrow());
            alert(&window, &outcome.alert_message());
        });
    })
}

fn labelled(doc: &Document, form: &Element, id: &str, label: &str) -> Result<(), JsValue> {
    let l = dom::text(doc, "label", "form-label", label)?;
    l.set_attribute("for", id)?;
    form.append_child(&l)?;
    Ok(())
}

fn input(
    doc: &Document,
    form: &Element,
    id: &str,
    kind: &str,
    label: &str,
    placeholder: &str,
    required: bool,
) -> Result<HtmlInputElement, JsValue> {
    labelled(doc, form, id, label)?;
    let el: HtmlInputElement = dom::element(doc, "input", "form-input")?.dyn_into()?;
    el.set_id(id);
    el.set_name(id);
    el.set_type(kind);
    el.set_placeholder(placeholder);
    el.set_required(required);
    form.append_child(&el)?;
    Ok(el)
}

fn select(doc: &Document, form: &Element) -> Result<HtmlSelectElement, JsValue> {
    labelled(doc, form, "service", "Service Interest")?;
    let el: HtmlSelectElement = dom::element(doc, "select", "form-input")?.dyn_into()?;
    el.set_id("service");
    el.set_name("service");
    let options = ServiceOption::ALL.iter().map(|o| (o.label(), o.label()));
    for (value, label) in core::iter::once(("", "Select a service")).chain(options) {
        let option = dom::text(doc, "option", "", label)?;
        option.set_attribute("value", value)?;
        el.append_child(&option)?;
    }
    form.append_child(&el)?;
    Ok(el)
}

fn textarea(doc: &Document, form: &Element) -> Result<HtmlTextAreaElement, JsValue> {
    labelled(doc, form, "message", "Message *")?;
    let el: HtmlTextAreaElement = dom::element(doc, "textarea", "form-input")?.dyn_into()?;
    el.set_id("message");
    el.set_name("message");
    el.set_rows(4);
    el.set_required(true);
    el.set_placeholder("Tell us about your heavy haul and specialized transportation needs...");
    form.append_child(&el)?;
    Ok(el)
}
