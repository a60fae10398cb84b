//! ATS client — the single point of entry for all Loxo API calls.
//!
//! ARCHITECTURAL RULE: No other module may call the Loxo API directly.
//! Handlers depend on the [`AtsApi`] trait carried in `AppState`, so tests
//! substitute a recording mock without touching handler code.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

/// The Loxo API host. Fixed, not configurable.
const LOXO_DOMAIN: &str = "api.loxo.co";

#[derive(Debug, Error)]
pub enum AtsError {
    /// The outbound call itself failed (connect, DNS, TLS, body read).
    #[error("transport error: {0}")]
    Transport(String),

    /// The remote service answered with a non-success status.
    #[error("ATS responded with status {status}")]
    Status { status: u16, body: String },
}

impl From<reqwest::Error> for AtsError {
    fn from(err: reqwest::Error) -> Self {
        AtsError::Transport(err.to_string())
    }
}

/// The person record accepted by the Loxo `people` endpoint.
///
/// Optional fields are omitted from the JSON entirely when absent: a key
/// present on the wire signals the field was actually supplied, so empty
/// strings must never be serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Wire envelope for the `people` endpoint: `{"person": {...}}`.
#[derive(Debug, Serialize)]
struct PersonEnvelope<'a> {
    person: &'a Person,
}

#[async_trait]
pub trait AtsApi: Send + Sync {
    /// Creates a person record in the agency's ATS.
    ///
    /// Exactly one HTTP call per invocation: no retries, no timeout override,
    /// no idempotency key. Returns the parsed response JSON on 2xx (used for
    /// logging only) and [`AtsError::Status`] with the raw body text on any
    /// other status.
    async fn create_person(
        &self,
        agency_slug: &str,
        api_key: &str,
        person: &Person,
    ) -> Result<serde_json::Value, AtsError>;
}

/// Production [`AtsApi`] backed by `reqwest`.
#[derive(Clone, Default)]
pub struct LoxoClient {
    client: Client,
}

impl LoxoClient {
    pub fn new() -> Self {
        // Default client: the relay is best-effort and sets no deadline of
        // its own around the outbound call.
        Self {
            client: Client::new(),
        }
    }

    fn people_url(agency_slug: &str) -> String {
        format!("https://{LOXO_DOMAIN}/api/{agency_slug}/people")
    }
}

#[async_trait]
impl AtsApi for LoxoClient {
    async fn create_person(
        &self,
        agency_slug: &str,
        api_key: &str,
        person: &Person,
    ) -> Result<serde_json::Value, AtsError> {
        let url = Self::people_url(agency_slug);
        debug!("Sending request to: {url}");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&PersonEnvelope { person })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AtsError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed = response.json::<serde_json::Value>().await?;
        info!("Successfully submitted to Loxo: {parsed}");
        Ok(parsed)
    }
}
