use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::ats_client::AtsError;

/// Request-level error for the contact relay.
///
/// Implements `IntoResponse` so the handler can return `Result<T, RelayError>`
/// and every branch collapses into the public HTTP contract. Each variant logs
/// a diagnostic line server-side before responding; the caller only ever sees
/// the sanitized message.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Loxo API key is not configured")]
    MissingApiKey,

    #[error("Loxo agency slug is not configured")]
    MissingAgencySlug,

    #[error("invalid form data: {0}")]
    InvalidForm(#[from] FormRejection),

    #[error("missing required fields")]
    MissingFields,

    #[error(transparent)]
    Upstream(#[from] AtsError),
}

/// Where to find the agency slug in the Loxo UI, appended to the config error
/// so an operator can fix the deployment from the error message alone.
const SLUG_HINT: &str =
    "Find your Agency Slug: Loxo Account -> Initials/Picture -> Careers Page -> last part of URL.";

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            RelayError::MissingApiKey => {
                tracing::error!("Config error: Loxo API key (LOXO_API_KEY) not found");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server configuration error: Missing API Key.".to_string(),
                )
            }
            RelayError::MissingAgencySlug => {
                tracing::error!("Config error: Loxo agency slug (LOXO_AGENCY_SLUG) not found");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Server configuration error: Missing Agency Slug. {SLUG_HINT}"),
                )
            }
            RelayError::InvalidForm(rejection) => {
                tracing::warn!("Error parsing form data: {rejection}");
                (StatusCode::BAD_REQUEST, "Invalid form data.".to_string())
            }
            RelayError::MissingFields => {
                tracing::warn!("Rejected submission with missing required fields");
                (
                    StatusCode::BAD_REQUEST,
                    "Missing required fields (First Name, Last Name, Email).".to_string(),
                )
            }
            RelayError::Upstream(AtsError::Transport(detail)) => {
                tracing::error!("Network or other error submitting to Loxo API: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred during submission.".to_string(),
                )
            }
            RelayError::Upstream(AtsError::Status { status, body }) => {
                // The raw remote body is logged only, never surfaced.
                tracing::error!("Loxo API error ({status}): {body}");
                (
                    StatusCode::BAD_GATEWAY,
                    format!("Failed to submit data. Error code: {status}."),
                )
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn response_parts(err: RelayError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_missing_api_key_maps_to_500() {
        let (status, body) = response_parts(RelayError::MissingApiKey).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["message"],
            "Server configuration error: Missing API Key."
        );
    }

    #[tokio::test]
    async fn test_upstream_status_maps_to_502_with_code() {
        let err = RelayError::Upstream(AtsError::Status {
            status: 422,
            body: "unprocessable".to_string(),
        });
        let (status, body) = response_parts(err).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["message"], "Failed to submit data. Error code: 422.");
    }

    #[tokio::test]
    async fn test_transport_error_maps_to_generic_500() {
        let err = RelayError::Upstream(AtsError::Transport("dns failure".to_string()));
        let (status, body) = response_parts(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["message"],
            "An unexpected error occurred during submission."
        );
    }
}
