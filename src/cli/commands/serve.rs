use anyhow::Context;
use tokio::net::TcpListener;

use crate::app::{self, AppState};
use crate::config::config;
use crate::store::Store;

pub async fn handle(host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    let config = config();
    config.validate()?;
    tracing::info!("Starting Zyarat API in {:?} mode", config.environment);

    let store = Store::seeded(config.security.password_pepper.as_deref())?;
    let state = AppState::new(config, store)?;
    let app = app::router(state, config);

    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);
    let bind_addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Zyarat API listening on http://{}{}", bind_addr, config.api.prefix);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
