//! # flash-stripe
//!
//! Stripe payment processor for the flashpay payment-intent service.
//!
//! This crate implements `flash_core::PaymentProcessor` against the
//! Stripe Payment Intents API:
//!
//! - Form-encoded `POST /v1/payment_intents`
//! - Automatic payment-method negotiation
//! - Typed error mapping for the Stripe error envelope
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use flash_stripe::StripeIntentProcessor;
//! use flash_core::{Currency, IntentRequest, PaymentProcessor};
//!
//! // Create processor from environment (STRIPE_SECRET_KEY)
//! let processor = StripeIntentProcessor::from_env()?;
//!
//! // Create a payment intent
//! let intent = processor
//!     .create_intent(&IntentRequest::new(1999, Currency::USD))
//!     .await?;
//!
//! // Hand intent.client_secret to the front-end
//! ```

pub mod config;
pub mod intent;

// Re-exports
pub use config::StripeConfig;
pub use intent::StripeIntentProcessor;
