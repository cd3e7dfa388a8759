//! # Stripe Payment Intents
//!
//! Implementation of the Stripe Payment Intents API.
//! This is the single outbound call the service makes; everything
//! substantive (tokenization, fraud checks, card-network retries)
//! happens on Stripe's side.

use crate::config::StripeConfig;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use flash_core::{
    IntentRequest, IntentStatus, PaymentError, PaymentIntent, PaymentProcessor, PaymentResult,
};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, info, instrument};

/// Stripe Payment Intents processor
///
/// Creates payment intents via the Stripe REST API and returns the
/// client secret the front-end needs to confirm the payment.
pub struct StripeIntentProcessor {
    config: StripeConfig,
    client: Client,
}

impl StripeIntentProcessor {
    /// Create a new Stripe intent processor
    pub fn new(config: StripeConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Create from environment variables
    pub fn from_env() -> PaymentResult<Self> {
        let config = StripeConfig::from_env()?;
        Ok(Self::new(config))
    }

    /// Build form parameters for the Payment Intents API
    fn build_form_params(request: &IntentRequest) -> Vec<(String, String)> {
        let mut form_params = vec![
            ("amount".to_string(), request.amount.to_string()),
            ("currency".to_string(), request.currency.as_str().to_string()),
        ];

        if request.automatic_payment_methods {
            form_params.push((
                "automatic_payment_methods[enabled]".to_string(),
                "true".to_string(),
            ));
        }

        form_params
    }
}

#[async_trait]
impl PaymentProcessor for StripeIntentProcessor {
    #[instrument(skip(self, request), fields(amount = request.amount))]
    async fn create_intent(&self, request: &IntentRequest) -> PaymentResult<PaymentIntent> {
        if request.amount <= 0 {
            return Err(PaymentError::InvalidRequest(
                "Amount must be positive".to_string(),
            ));
        }

        let form_params = Self::build_form_params(request);

        debug!(
            "Creating Stripe payment intent: amount={}, currency={}",
            request.amount, request.currency
        );

        let url = format!("{}/v1/payment_intents", self.config.api_base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.config.auth_header())
            .header("Stripe-Version", &self.config.api_version)
            .form(&form_params)
            .send()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        if !status.is_success() {
            error!("Stripe API error: status={}, body={}", status, body);

            // Parse Stripe error envelope
            if let Ok(error_response) = serde_json::from_str::<StripeErrorResponse>(&body) {
                return Err(PaymentError::ProviderError {
                    provider: "stripe".to_string(),
                    message: error_response.error.message,
                });
            }

            return Err(PaymentError::ProviderError {
                provider: "stripe".to_string(),
                message: format!("HTTP {}: {}", status, body),
            });
        }

        let intent_response: StripePaymentIntentResponse =
            serde_json::from_str(&body).map_err(|e| {
                PaymentError::Serialization(format!("Failed to parse Stripe response: {}", e))
            })?;

        info!("Created Stripe payment intent: id={}", intent_response.id);

        let created_at = intent_response
            .created
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
            .unwrap_or_else(Utc::now);

        Ok(PaymentIntent {
            id: intent_response.id,
            client_secret: intent_response.client_secret,
            amount: intent_response.amount,
            currency: request.currency,
            status: intent_response.status,
            created_at,
        })
    }

    fn provider_name(&self) -> &'static str {
        "stripe"
    }
}

// =============================================================================
// Stripe API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct StripePaymentIntentResponse {
    id: String,
    client_secret: String,
    amount: i64,
    #[serde(default)]
    status: IntentStatus,
    #[serde(default)]
    created: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeError,
}

#[derive(Debug, Deserialize)]
struct StripeError {
    message: String,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    param: Option<String>,
}
