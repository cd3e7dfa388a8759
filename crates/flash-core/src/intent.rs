//! # Payment Intent Types
//!
//! Request and result types for creating payment intents.
//! The intent itself is a remote resource owned by the payment
//! processor; this crate only models what crosses the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Supported currencies (ISO 4217)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Returns the lowercase ISO 4217 currency code
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::USD => "usd",
            Currency::EUR => "eur",
            Currency::GBP => "gbp",
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::USD
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A request to create a payment intent with the external processor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentRequest {
    /// Amount in the smallest currency unit (cents for USD)
    pub amount: i64,

    /// Currency
    #[serde(default)]
    pub currency: Currency,

    /// Let the processor negotiate payment methods with the client
    #[serde(default = "default_true")]
    pub automatic_payment_methods: bool,
}

fn default_true() -> bool {
    true
}

impl IntentRequest {
    /// Create a request with automatic payment-method negotiation enabled
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self {
            amount,
            currency,
            automatic_payment_methods: true,
        }
    }

    /// Builder: toggle automatic payment-method negotiation
    pub fn with_automatic_payment_methods(mut self, enabled: bool) -> Self {
        self.automatic_payment_methods = enabled;
        self
    }
}

/// Status of a payment intent, as reported by the processor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentStatus {
    /// Created, awaiting a payment method
    RequiresPaymentMethod,
    /// Payment method attached, awaiting confirmation
    RequiresConfirmation,
    /// Additional customer action needed (e.g. 3DS)
    RequiresAction,
    /// Payment in flight
    Processing,
    /// Authorized, awaiting capture
    RequiresCapture,
    /// Intent cancelled
    Canceled,
    /// Payment collected
    Succeeded,
    /// Unrecognized status (passthrough)
    #[serde(other)]
    Unknown,
}

impl Default for IntentStatus {
    fn default() -> Self {
        IntentStatus::RequiresPaymentMethod
    }
}

/// A payment intent created by the external processor.
///
/// The processor owns the full lifecycle of this resource; callers of
/// this service only ever consume `client_secret`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntent {
    /// Provider's intent ID
    pub id: String,

    /// Opaque token handed to the front-end to confirm the payment
    pub client_secret: String,

    /// Amount in smallest currency unit
    pub amount: i64,

    /// Currency
    #[serde(default)]
    pub currency: Currency,

    /// Intent status
    #[serde(default)]
    pub status: IntentStatus,

    /// Created timestamp
    pub created_at: DateTime<Utc>,
}
