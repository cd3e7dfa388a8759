//! # Payment Error Types
//!
//! Typed error handling for the flashpay payment-intent service.
//! All processor operations return `Result<T, PaymentError>`.

use thiserror::Error;

/// Core error type for payment-intent operations
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Payment provider API error. Displays the raw provider message,
    /// since that message is surfaced to the caller as-is.
    #[error("{message}")]
    ProviderError { provider: String, message: String },

    /// Network/HTTP error communicating with provider
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;
