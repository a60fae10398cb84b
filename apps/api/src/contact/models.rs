use serde::Deserialize;

use crate::ats_client::Person;
use crate::errors::RelayError;

/// Raw fields as submitted by the browser form.
///
/// Everything is optional at the parse layer: a body that decodes as form
/// data is accepted here, and presence rules are enforced by
/// [`Submission::try_from_form`] so the two failure modes map to distinct
/// error messages.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

/// A validated contact submission. Construction guarantees first name, last
/// name, and email are present and non-empty after trimming. Email format is
/// deliberately not checked beyond presence.
#[derive(Debug)]
pub struct Submission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: Option<String>,
}

impl Submission {
    pub fn try_from_form(form: ContactForm) -> Result<Self, RelayError> {
        Ok(Self {
            first_name: required(form.first_name)?,
            last_name: required(form.last_name)?,
            email: required(form.email)?,
            phone: optional(form.phone),
            message: optional(form.message),
        })
    }

    /// Maps the submission to the ATS person record. Optional fields are
    /// dropped entirely rather than forwarded as empty strings.
    pub fn into_person(self) -> Person {
        Person {
            name: format!("{} {}", self.first_name, self.last_name),
            email: self.email,
            phone: self.phone,
            description: self.message,
        }
    }
}

fn required(value: Option<String>) -> Result<String, RelayError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(RelayError::MissingFields),
    }
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
