//! Axum route handler for the contact relay.

use axum::{
    extract::{rejection::FormRejection, Form, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::config::ContactSettings;
use crate::contact::models::{ContactForm, Submission};
use crate::errors::RelayError;
use crate::state::AppState;

/// Where the browser lands after a successful submission.
const THANK_YOU_PATH: &str = "/thank-you";

/// POST /api/submit-contact
///
/// Relays a browser contact-form submission to the agency's ATS and redirects
/// to the thank-you page. A single best-effort outbound call: configuration
/// and validation failures answer without calling out at all, and every
/// failure branch collapses into [`RelayError`]'s public contract.
pub async fn handle_submit_contact(
    State(state): State<AppState>,
    form: Result<Form<ContactForm>, FormRejection>,
) -> Result<Response, RelayError> {
    // Secrets are resolved per request: platform binding first, local env
    // fallback second. Either one missing is a server fault, not the caller's.
    let settings = ContactSettings::resolve(&state.bindings);
    let Some(api_key) = settings.api_key else {
        return Err(RelayError::MissingApiKey);
    };
    let Some(agency_slug) = settings.agency_slug else {
        return Err(RelayError::MissingAgencySlug);
    };

    let Form(form) = form?;
    let submission = Submission::try_from_form(form)?;
    debug!("Relaying contact submission for agency '{agency_slug}'");

    let person = submission.into_person();
    state
        .ats
        .create_person(&agency_slug, &api_key, &person)
        .await?;

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, THANK_YOU_PATH)],
    )
        .into_response())
}
