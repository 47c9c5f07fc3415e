// API server binary entry point.
//
// Usage: cargo run --bin api_server

use marine_predictor_rust::{create_router, ApiConfig, AppState};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // Default log level: info for our crate, warn for others
                "marine_predictor_rust=info,tower_http=debug,axum=debug,warn".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    // Configuration from environment variables
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let max_scenarios: usize = std::env::var("MAX_SCENARIOS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(|| ApiConfig::default().max_scenarios);

    let strict_validation = std::env::var("STRICT_VALIDATION")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    let config = ApiConfig {
        max_scenarios,
        strict_validation,
    };

    tracing::info!("Configuration:");
    tracing::info!("  PORT: {}", port);
    tracing::info!("  MAX_SCENARIOS: {}", config.max_scenarios);
    tracing::info!("  STRICT_VALIDATION: {}", config.strict_validation);

    // Create router with all endpoints and middleware
    let state = AppState::in_memory(config);
    let app = create_router(state);

    // Bind to address
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
