use anyhow::Context;
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

use poolhouse_web::config::Config;
use poolhouse_web::routes::app_router;
use poolhouse_web::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loads .env too, so RUST_LOG from the file reaches the filter
    let config = Config::from_env().context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if !config.beds24_configured() {
        tracing::warn!("BEDS24_PROP_ID not set - availability will return placeholder quotes");
    }

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address: {}", config.listen_addr))?;

    let state = AppState::new(config).context("Failed to build Beds24 client")?;
    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
