//! Server binary.
//!
//! Loads configuration and the optional logo, then serves until Ctrl+C.

use tracing_subscriber::EnvFilter;

use qrlogo_server::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting QR logo server");

    // Logo fetch failures abort startup here.
    let state = qrlogo_server::init_foundation().await?;

    let shutdown_token = state.shutdown_token().clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
            return;
        }
        tracing::info!("Shutting down...");
        shutdown_token.cancel();
    });

    tracing::info!(
        port = state.server_port(),
        "Server running. Press Ctrl+C to stop."
    );
    server::start_server(state).await
}
