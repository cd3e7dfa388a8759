//! # FlashPay
//!
//! Payment-intent API service.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export STRIPE_SECRET_KEY=sk_test_...
//!
//! # Run the server
//! flashpay
//! ```

use flash_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Print banner
    print_banner();

    // Initialize application state
    let state = AppState::new()?;

    let addr = state.config.socket_addr();
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Payment provider: {}", state.processor.provider_name());

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("FlashPay starting on http://{}", addr);

    if !is_prod {
        info!("Health: GET http://{}/health", addr);
        info!(
            "Payment intents: POST http://{}/api/v1/payment-intents",
            addr
        );
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  FlashPay
  ━━━━━━━━━━━━━━━━━━━━━━━
  Payment-intent API service
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}
