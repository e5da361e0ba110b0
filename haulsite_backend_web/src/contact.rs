// Copyright 2026 the Haulsite Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contact form transport.
//!
//! The endpoint takes a JSON object with `name`, `email`, `phone`, `service`
//! and `message` strings (optional fields are sent empty) and answers with a
//! JSON body that may carry an `error` string.

use alloc::string::String;

use haulsite_core::contact::{ContactSubmission, SubmissionOutcome};
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response, Window};

#[derive(Serialize)]
struct ContactPayload<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    service: &'a str,
    message: &'a str,
}

#[derive(Deserialize)]
struct ContactReply {
    #[serde(default)]
    error: Option<String>,
}

/// Serializes `submission` as the endpoint's request body.
pub fn encode_submission(submission: &ContactSubmission) -> Result<String, serde_json::Error> {
    serde_json::to_string(&ContactPayload {
        name: &submission.name,
        email: &submission.email,
        phone: submission.phone.as_deref().unwrap_or_default(),
        service: submission.service.map(|s| s.label()).unwrap_or_default(),
        message: &submission.message,
    })
}

/// Parses a response body and returns its `error` field, if any.
///
/// Fails if the body is not a JSON object.
pub fn decode_reply(body: &str) -> Result<Option<String>, serde_json::Error> {
    serde_json::from_str::<ContactReply>(body).map(|reply| reply.error)
}

/// Posts `submission` to `endpoint` and reports how the exchange ended.
///
/// Any failure to send the request or to read a JSON body is
/// [`SubmissionOutcome::Unreachable`], whatever the status.
pub async fn submit_contact(
    window: &Window,
    endpoint: &str,
    submission: &ContactSubmission,
) -> SubmissionOutcome {
    let Ok(body) = encode_submission(submission) else {
        return SubmissionOutcome::Unreachable;
    };
    match exchange(window, endpoint, &body).await {
        Ok((ok, text)) => match decode_reply(&text) {
            Ok(error) => SubmissionOutcome::from_response(ok, error),
            Err(_) => SubmissionOutcome::Unreachable,
        },
        Err(_) => SubmissionOutcome::Unreachable,
    }
}

async fn exchange(window: &Window, endpoint: &str, body: &str) -> Result<(bool, String), JsValue> {
    let headers = Headers::new()?;
    headers.set("Content-Type", "application/json")?;
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));
    let request = Request::new_with_str_and_init(endpoint, &init)?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    let text = JsFuture::from(response.text()?)
        .await?
        .as_string()
        .ok_or_else(|| JsValue::from_str("response body is not text"))?;
    Ok((response.ok(), text))
}

/// Shows `message` in a blocking browser alert.
pub fn alert(window: &Window, message: &str) {
    let _ = window.alert_with_message(message);
}
