//! TripKit Server - city trip guide over HTTP
//!
//! Aggregates current weather, air quality, and a retrieval-augmented
//! packing suggestion into one response per city.

use tracing_subscriber::EnvFilter;
use tripkit_server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before reading any configuration.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::load()?;
    tripkit_server::start_server(config).await?;

    Ok(())
}
