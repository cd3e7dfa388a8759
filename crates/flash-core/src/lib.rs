//! # flash-core
//!
//! Core types and traits for the flashpay payment-intent service.
//!
//! This crate provides:
//! - `PaymentProcessor` trait for implementing payment providers
//! - `IntentRequest` and `PaymentIntent` for the intent flow
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use flash_core::{Currency, IntentRequest, PaymentProcessor};
//!
//! // Build the intent request
//! let request = IntentRequest::new(1999, Currency::USD);
//!
//! // Create the intent with a processor implementation
//! let intent = processor.create_intent(&request).await?;
//!
//! // Hand intent.client_secret to the front-end for confirmation
//! ```

pub mod error;
pub mod intent;
pub mod processor;

// Re-exports for convenience
pub use error::{PaymentError, PaymentResult};
pub use intent::{Currency, IntentRequest, IntentStatus, PaymentIntent};
pub use processor::{BoxedPaymentProcessor, PaymentProcessor};
