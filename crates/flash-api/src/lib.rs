//! # flash-api
//!
//! HTTP API layer for the flashpay payment-intent service.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - The payment-intent endpoint and health check
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/api/v1/payment-intents` | Create a payment intent |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
