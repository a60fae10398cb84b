pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::contact::handlers::handle_submit_contact;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/submit-contact", post(handle_submit_contact))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::ats_client::LoxoClient;
    use crate::config::PlatformBindings;

    #[tokio::test]
    async fn test_health_reports_ok() {
        let app = build_router(AppState {
            ats: Arc::new(LoxoClient::new()),
            bindings: PlatformBindings::default(),
        });

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
    }
}
