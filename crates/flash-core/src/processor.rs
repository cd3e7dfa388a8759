//! # Payment Processor Trait
//!
//! Seam between the HTTP layer and external payment providers.
//! The processor is constructed once at process start and injected
//! into the handlers as a trait object, so providers can be swapped
//! (and mocked in tests) without touching handler code.

use crate::error::PaymentResult;
use crate::intent::{IntentRequest, PaymentIntent};
use async_trait::async_trait;
use std::sync::Arc;

/// Core trait for payment provider implementations.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Create a payment intent with the provider.
    ///
    /// # Arguments
    /// * `request` - Amount, currency, and payment-method negotiation flag
    ///
    /// # Returns
    /// The created `PaymentIntent`, including its client secret.
    async fn create_intent(&self, request: &IntentRequest) -> PaymentResult<PaymentIntent>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared payment processor (dynamic dispatch)
pub type BoxedPaymentProcessor = Arc<dyn PaymentProcessor>;
