//! Library statistics HTTP/JSON gateway binary.

use std::sync::Arc;

use clap::Parser;
use libstats_client::HttpClient;
use libstats_core::LibraryStats;
use libstats_gateway::{create_router, AppState, Args, GatewayConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Parse command line args
    let args = Args::parse();
    let config = GatewayConfig::from(&args);

    info!(
        listen = %config.listen_addr,
        catalog = %config.endpoints.catalog,
        language = %config.endpoints.language,
        population = %config.endpoints.population,
        "Starting library statistics gateway"
    );

    if config.fanout_concurrency == 0 {
        anyhow::bail!("fanout_concurrency must be at least 1");
    }

    // One upstream client for the whole process
    let client = HttpClient::new(config.client_config())?;
    let stats = LibraryStats::new(Arc::new(client), config.endpoints.clone())
        .with_options(config.aggregation_options());
    info!(
        client_timeout_ms = config.client_timeout.as_millis(),
        fanout_concurrency = config.fanout_concurrency,
        max_pages = config.max_pages,
        verify_language_codes = config.verify_language_codes,
        "Upstream client ready"
    );

    // Create application state
    let state = AppState::new(stats);

    // Create router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!("Gateway listening on {}", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
