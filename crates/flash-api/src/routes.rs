//! # Routes
//!
//! Axum router configuration for the payment-intent API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET  /health - Health check
/// - POST /api/v1/payment-intents - Create a payment intent
///
/// Any other method on the payment-intent endpoint gets a 405 with a
/// JSON body, not axum's default empty response.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - allow all origins for now
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new().route(
        "/payment-intents",
        post(handlers::create_payment_intent).fallback(handlers::method_not_allowed),
    );

    Router::new()
        // Health check at root
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        // API v1
        .nest("/api/v1", api_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
