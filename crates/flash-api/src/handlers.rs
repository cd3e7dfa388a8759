//! # Request Handlers
//!
//! Axum request handlers for the payment-intent API.
//!
//! Error policy: the amount check and the method check return controlled
//! 4xx bodies; everything else (malformed JSON, processor failures,
//! network failures) shares a single catch-all that answers 500 with the
//! error's display text.

use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use flash_core::{Currency, IntentRequest};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Create payment intent request
#[derive(Debug, Deserialize)]
pub struct CreatePaymentIntentRequest {
    /// Amount in the smallest currency unit (cents)
    #[serde(default)]
    pub amount: Option<i64>,
}

/// Create payment intent response
#[derive(Debug, Serialize)]
pub struct CreatePaymentIntentResponse {
    /// Client secret the front-end uses to confirm the payment
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "flashpay",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Create a payment intent
///
/// Currency is fixed to USD and automatic payment-method negotiation is
/// always enabled. Malformed bodies land in the 500 path, not 400.
#[instrument(skip(state, body))]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    body: Result<Json<CreatePaymentIntentRequest>, JsonRejection>,
) -> Result<Json<CreatePaymentIntentResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Json(request) = body.map_err(|rejection| {
        error!("Failed to read request body: {}", rejection.body_text());
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(rejection.body_text())),
        )
    })?;

    let amount = match request.amount {
        Some(amount) if amount > 0 => amount,
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("Invalid amount")),
            ));
        }
    };

    let intent = state
        .processor
        .create_intent(&IntentRequest::new(amount, Currency::USD))
        .await
        .map_err(|e| {
            error!("Failed to create payment intent: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.to_string())),
            )
        })?;

    info!("Created payment intent: {}", intent.id);

    Ok(Json(CreatePaymentIntentResponse {
        client_secret: intent.client_secret,
    }))
}

/// Fallback for unsupported methods on the payment-intent endpoint
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::new("Method Not Allowed")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::create_router;
    use crate::state::AppState;
    use async_trait::async_trait;
    use axum_test::TestServer;
    use flash_core::{
        IntentStatus, PaymentError, PaymentIntent, PaymentProcessor, PaymentResult,
    };
    use std::sync::Arc;

    /// What the mock processor should do when called
    enum MockOutcome {
        Secret(&'static str),
        Fail(&'static str),
    }

    struct MockProcessor {
        outcome: MockOutcome,
    }

    #[async_trait]
    impl PaymentProcessor for MockProcessor {
        async fn create_intent(&self, request: &IntentRequest) -> PaymentResult<PaymentIntent> {
            match self.outcome {
                MockOutcome::Secret(secret) => Ok(PaymentIntent {
                    id: "pi_test_123".to_string(),
                    client_secret: secret.to_string(),
                    amount: request.amount,
                    currency: request.currency,
                    status: IntentStatus::RequiresPaymentMethod,
                    created_at: chrono::Utc::now(),
                }),
                MockOutcome::Fail(message) => Err(PaymentError::ProviderError {
                    provider: "stripe".to_string(),
                    message: message.to_string(),
                }),
            }
        }

        fn provider_name(&self) -> &'static str {
            "mock"
        }
    }

    fn test_server(outcome: MockOutcome) -> TestServer {
        let state = AppState::with_processor(Arc::new(MockProcessor { outcome }));
        TestServer::new(create_router(state)).unwrap()
    }

    #[tokio::test]
    async fn test_non_post_methods_are_rejected() {
        let server = test_server(MockOutcome::Secret("abc123"));

        let response = server.get("/api/v1/payment-intents").await;
        assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        let body: serde_json::Value = response.json();
        assert_eq!(body, serde_json::json!({ "error": "Method Not Allowed" }));

        let response = server.put("/api/v1/payment-intents").await;
        assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);

        let response = server.delete("/api/v1/payment-intents").await;
        assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_valid_amount_returns_client_secret() {
        let server = test_server(MockOutcome::Secret("abc123"));

        let response = server
            .post("/api/v1/payment-intents")
            .json(&serde_json::json!({ "amount": 1999 }))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body, serde_json::json!({ "clientSecret": "abc123" }));
    }

    #[tokio::test]
    async fn test_invalid_amounts_are_rejected() {
        let server = test_server(MockOutcome::Secret("abc123"));

        for payload in [
            serde_json::json!({ "amount": 0 }),
            serde_json::json!({ "amount": -500 }),
            serde_json::json!({}),
            serde_json::json!({ "amount": null }),
        ] {
            let response = server.post("/api/v1/payment-intents").json(&payload).await;

            assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
            let body: serde_json::Value = response.json();
            assert_eq!(body, serde_json::json!({ "error": "Invalid amount" }));
        }
    }

    #[tokio::test]
    async fn test_malformed_json_is_a_server_error() {
        let server = test_server(MockOutcome::Secret("abc123"));

        let response = server
            .post("/api/v1/payment-intents")
            .content_type("application/json")
            .text("{ amount:")
            .await;

        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = response.json();
        assert!(body.get("error").is_some());
    }

    #[tokio::test]
    async fn test_processor_failure_surfaces_message() {
        let server = test_server(MockOutcome::Fail("card declined"));

        let response = server
            .post("/api/v1/payment-intents")
            .json(&serde_json::json!({ "amount": 1999 }))
            .await;

        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = response.json();
        assert_eq!(body, serde_json::json!({ "error": "card declined" }));
    }

    #[tokio::test]
    async fn test_identical_input_identical_shape() {
        let server = test_server(MockOutcome::Secret("abc123"));

        for _ in 0..2 {
            let response = server
                .post("/api/v1/payment-intents")
                .json(&serde_json::json!({ "amount": 2500 }))
                .await;

            assert_eq!(response.status_code(), StatusCode::OK);
            let body: serde_json::Value = response.json();
            assert!(body["clientSecret"].is_string());
        }
    }

    #[tokio::test]
    async fn test_health() {
        let server = test_server(MockOutcome::Secret("abc123"));

        let response = server.get("/health").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "healthy");
    }
}
