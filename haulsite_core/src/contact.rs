// Copyright 2026 the Haulsite Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contact form model.
//!
//! The form collects a [`ContactDraft`], validates it into a
//! [`ContactSubmission`], and posts it to the mail endpoint at
//! [`CONTACT_ENDPOINT`]. The endpoint itself is a black box: it answers
//! success, or failure with an optional error string. [`ContactForm`] tracks
//! the draft and the in-flight flag, and [`SubmissionOutcome`] carries the
//! user-facing alert text for each ending.

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::trace::{SubmissionEvent, Tracer};

/// Path of the mail-sending endpoint.
pub const CONTACT_ENDPOINT: &str = "/api/send-email";

const SENT_MESSAGE: &str = "Thank you for your message! We will get back to you soon.";
const FAILED_MESSAGE: &str = "Failed to send message. Please try again.";

/// The services a visitor can ask about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ServiceOption {
    /// Removable-gooseneck superload transport.
    RgnSuperload,
    /// Construction and heavy equipment hauling.
    HeavyEquipment,
    /// Industrial machinery moves.
    IndustrialMachinery,
    /// Airport equipment and aircraft components.
    AirportAircraft,
    /// Oil and gas equipment.
    OilGas,
    /// Military and government loads.
    MilitaryGovernment,
    /// Anything else.
    Other,
}

impl ServiceOption {
    /// All options in the order the form lists them.
    pub const ALL: [Self; 7] = [
        Self::RgnSuperload,
        Self::HeavyEquipment,
        Self::IndustrialMachinery,
        Self::AirportAircraft,
        Self::OilGas,
        Self::MilitaryGovernment,
        Self::Other,
    ];

    /// Returns the option label, which is also its wire value.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::RgnSuperload => "RGN Superload Transport",
            Self::HeavyEquipment => "Heavy Equipment Hauling",
            Self::IndustrialMachinery => "Industrial Machinery",
            Self::AirportAircraft => "Airport & Aircraft Transport",
            Self::OilGas => "Oil & Gas Equipment",
            Self::MilitaryGovernment => "Military & Government",
            Self::Other => "Other",
        }
    }

    /// Parses a label produced by [`label`](Self::label).
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.label() == label)
    }
}

/// Why a draft could not be submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactError {
    /// The name field is blank.
    MissingName,
    /// The email field is blank.
    MissingEmail,
    /// The email field does not look like `local@domain`.
    InvalidEmail,
    /// The message field is blank.
    MissingMessage,
    /// The service field holds a value that is not a known option.
    UnknownService,
    /// A submission is already in flight.
    AlreadySubmitting,
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MissingName => "Please enter your full name.",
            Self::MissingEmail => "Please enter your email address.",
            Self::InvalidEmail => "Please enter a valid email address.",
            Self::MissingMessage => "Please enter a message.",
            Self::UnknownService => "Please choose a service from the list.",
            Self::AlreadySubmitting => "Your message is already being sent.",
        })
    }
}

impl core::error::Error for ContactError {}

/// Raw form field values, as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    /// Full name (required).
    pub name: String,
    /// Email address (required).
    pub email: String,
    /// Phone number (optional).
    pub phone: String,
    /// Service label, or empty for "Select a service".
    pub service: String,
    /// Message body (required).
    pub message: String,
}

impl ContactDraft {
    /// Validates the draft into a submission.
    ///
    /// Fields are trimmed. Checks run in form order and the first failure is
    /// returned.
    pub fn validate(&self) -> Result<ContactSubmission, ContactError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ContactError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactError::MissingEmail);
        }
        if !looks_like_email(email) {
            return Err(ContactError::InvalidEmail);
        }
        let service = match self.service.trim() {
            "" => None,
            label => Some(ServiceOption::from_label(label).ok_or(ContactError::UnknownService)?),
        };
        let message = self.message.trim();
        if message.is_empty() {
            return Err(ContactError::MissingMessage);
        }
        let phone = self.phone.trim();

        Ok(ContactSubmission {
            name: name.into(),
            email: email.into(),
            phone: (!phone.is_empty()).then(|| phone.into()),
            service,
            message: message.into(),
        })
    }
}

/// Same shape check as an `<input type="email">`: one `@` with a non-empty
/// local part and domain, and no whitespace.
fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
}

/// A validated contact request, ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number, if given.
    pub phone: Option<String>,
    /// Service of interest, if chosen.
    pub service: Option<ServiceOption>,
    /// Message body.
    pub message: String,
}

/// How an exchange with the mail endpoint ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The endpoint accepted the message.
    Sent,
    /// The endpoint answered with a failure status, and the error string from
    /// its body if it had one.
    Rejected(Option<String>),
    /// The request never completed (network failure, unreadable response).
    Unreachable,
}

impl SubmissionOutcome {
    /// Builds the outcome from the response status and the body's `error`
    /// field.
    #[must_use]
    pub fn from_response(ok: bool, error: Option<String>) -> Self {
        if ok {
            Self::Sent
        } else {
            Self::Rejected(error.filter(|e| !e.is_empty()))
        }
    }

    /// Returns `true` for [`SubmissionOutcome::Sent`].
    #[must_use]
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }

    /// Returns the alert text shown to the visitor.
    #[must_use]
    pub fn alert_message(&self) -> String {
        match self {
            Self::Sent => SENT_MESSAGE.into(),
            Self::Rejected(Some(error)) => format!("Error: {error}"),
            Self::Rejected(None) => format!("Error: {FAILED_MESSAGE}"),
            Self::Unreachable => FAILED_MESSAGE.into(),
        }
    }
}

/// Contact form state: the draft plus the in-flight flag.
#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    draft: ContactDraft,
    submitting: bool,
}

impl ContactForm {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current draft.
    #[must_use]
    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    /// Returns the draft for editing.
    pub fn draft_mut(&mut self) -> &mut ContactDraft {
        &mut self.draft
    }

    /// Returns `true` while a submission is in flight.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Returns the submit button label.
    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.submitting {
            "Sending Message..."
        } else {
            "Send Message"
        }
    }

    /// Validates the draft and marks the form as submitting.
    ///
    /// Fails without side effects if a submission is already in flight or the
    /// draft is invalid.
    pub fn begin_submit(&mut self) -> Result<ContactSubmission, ContactError> {
        if self.submitting {
            return Err(ContactError::AlreadySubmitting);
        }
        let submission = self.draft.validate()?;
        self.submitting = true;
        Ok(submission)
    }

    /// Ends the in-flight submission. The draft is cleared only if the
    /// message was sent.
    pub fn finish(&mut self, outcome: &SubmissionOutcome, tracer: &mut Tracer<'_>) {
        self.submitting = false;
        if outcome.is_sent() {
            self.draft = ContactDraft::default();
        }
        tracer.submission(&SubmissionEvent { outcome });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactDraft {
        ContactDraft {
            name: "  Dana Reyes ".into(),
            email: "dana@example.com".into(),
            phone: String::new(),
            service: "Heavy Equipment Hauling".into(),
            message: "Need a lowboy for a D8 dozer, Dayton to Columbus.".into(),
        }
    }

    #[test]
    fn service_labels_round_trip() {
        for option in ServiceOption::ALL {
            assert_eq!(ServiceOption::from_label(option.label()), Some(option));
        }
        assert_eq!(ServiceOption::from_label("Moving Boxes"), None);
    }

    #[test]
    fn valid_draft_is_trimmed() {
        let submission = filled().validate().unwrap();
        assert_eq!(submission.name, "Dana Reyes");
        assert_eq!(submission.phone, None);
        assert_eq!(submission.service, Some(ServiceOption::HeavyEquipment));
    }

    #[test]
    fn optional_fields_may_be_blank() {
        let draft = ContactDraft {
            service: String::new(),
            phone: " (937) 528-9614 ".into(),
            ..filled()
        };
        let submission = draft.validate().unwrap();
        assert_eq!(submission.service, None);
        assert_eq!(submission.phone.as_deref(), Some("(937) 528-9614"));
    }

    #[test]
    fn required_fields_are_checked_in_order() {
        let blank = ContactDraft::default();
        assert_eq!(blank.validate(), Err(ContactError::MissingName));

        let no_email = ContactDraft {
            email: "   ".into(),
            ..filled()
        };
        assert_eq!(no_email.validate(), Err(ContactError::MissingEmail));

        let no_message = ContactDraft {
            message: String::new(),
            ..filled()
        };
        assert_eq!(no_message.validate(), Err(ContactError::MissingMessage));
    }

    #[test]
    fn email_shape() {
        for bad in ["dana", "@example.com", "dana@", "da na@example.com", "a@b@c"] {
            let draft = ContactDraft {
                email: bad.into(),
                ..filled()
            };
            assert_eq!(draft.validate(), Err(ContactError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn unknown_service_is_rejected() {
        let draft = ContactDraft {
            service: "Piano Moving".into(),
            ..filled()
        };
        assert_eq!(draft.validate(), Err(ContactError::UnknownService));
    }

    #[test]
    fn alert_messages() {
        assert_eq!(
            SubmissionOutcome::Sent.alert_message(),
            "Thank you for your message! We will get back to you soon."
        );
        assert_eq!(
            SubmissionOutcome::from_response(false, Some("Missing required fields".into()))
                .alert_message(),
            "Error: Missing required fields"
        );
        assert_eq!(
            SubmissionOutcome::from_response(false, Some(String::new())).alert_message(),
            "Error: Failed to send message. Please try again."
        );
        assert_eq!(
            SubmissionOutcome::Unreachable.alert_message(),
            "Failed to send message. Please try again."
        );
        assert!(SubmissionOutcome::from_response(true, Some("ignored".into())).is_sent());
    }

    #[test]
    fn form_refuses_double_submit() {
        let mut form = ContactForm::new();
        *form.draft_mut() = filled();
        assert_eq!(form.button_label(), "Send Message");
        assert!(form.begin_submit().is_ok());
        assert_eq!(form.button_label(), "Sending Message...");
        assert_eq!(form.begin_submit(), Err(ContactError::AlreadySubmitting));
    }

    #[test]
    fn invalid_draft_does_not_start_submission() {
        let mut form = ContactForm::new();
        assert_eq!(form.begin_submit(), Err(ContactError::MissingName));
        assert!(!form.is_submitting());
    }

    #[test]
    fn failure_keeps_draft_success_clears_it() {
        let mut form = ContactForm::new();
        *form.draft_mut() = filled();

        form.begin_submit().unwrap();
        form.finish(&SubmissionOutcome::Unreachable, &mut Tracer::none());
        assert!(!form.is_submitting());
        assert_eq!(form.draft(), &filled());

        form.begin_submit().unwrap();
        form.finish(&SubmissionOutcome::Sent, &mut Tracer::none());
        assert_eq!(form.draft(), &ContactDraft::default());
    }
}
