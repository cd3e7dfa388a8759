//! # Application State
//!
//! Shared state for the Axum application.
//! The payment processor is constructed once at startup and injected
//! into handlers, never rebuilt per request.

use flash_core::BoxedPaymentProcessor;
use flash_stripe::StripeIntentProcessor;
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment processor client
    pub processor: BoxedPaymentProcessor,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState backed by the Stripe processor
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();

        let processor = StripeIntentProcessor::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize Stripe: {}", e))?;

        Ok(Self {
            processor: Arc::new(processor),
            config,
        })
    }

    /// Create an AppState with an injected processor (used in tests)
    pub fn with_processor(processor: BoxedPaymentProcessor) -> Self {
        Self {
            processor,
            config: AppConfig::from_env(),
        }
    }
}
