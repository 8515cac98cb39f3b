//! Coolpay Gateway - Main Entry Point

use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coolpay_gateway::infrastructure::driven_adapters::config::AppConfig;
use coolpay_gateway::infrastructure::driven_adapters::http_client::create_client;
use coolpay_gateway::infrastructure::driven_adapters::payment_provider::CoolpayPaymentProvider;
use coolpay_gateway::infrastructure::driving_adapters::api_rest::handlers::coolpay;
use coolpay_gateway::infrastructure::driving_adapters::api_rest::middleware::request_id_middleware;
use coolpay_gateway::infrastructure::driving_adapters::api_rest::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coolpay_gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!(base_uri = %config.coolpay.base_uri, "Configuration loaded successfully");

    // Create outbound HTTP client
    let client = create_client(&config.coolpay)?;
    tracing::info!(timeout_secs = config.coolpay.timeout_secs, "Coolpay HTTP client created");

    // Create payment provider and use cases
    let payment_provider = Arc::new(CoolpayPaymentProvider::new(client, config.coolpay.base_uri.clone()));
    let app_state = AppState::new(payment_provider);

    // Build router
    let app = Router::new()
        .nest("/coolpay", coolpay::router())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
