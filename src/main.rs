use std::net::SocketAddr;

use anyhow::Context;
use sitesmith::{
    config::Config,
    pipeline::Pipeline,
    routes::{router, AppState},
};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = Config::from_env().context("reading configuration")?;
    let pipeline = Pipeline::new(&config).context("building provider gateway")?;

    let providers = pipeline.active_providers();
    if providers.is_empty() {
        tracing::warn!("⚠️ No provider API keys configured, every request will use the local demo renderer");
    } else {
        tracing::info!("🔑 Providers in fallback order: {}", providers.join(" → "));
    }

    let app = router(AppState::new(pipeline));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(%addr, "Starting server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("❌ Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("👋 Shutting down");
}
