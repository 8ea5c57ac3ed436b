//! Startup sequence: environment, configuration, and the logo fetch.
//!
//! Everything here runs once, before the listener binds. Any failure is
//! fatal so the service never starts half-configured.

use anyhow::{Context, bail};
use qr_engine::{LogoAsset, QrGenerator};
use reqwest::{Client, StatusCode};

use crate::app::SharedState;
use crate::config::AppConfig;

/// Load configuration and the optional logo, and build the shared state.
pub async fn init_foundation() -> Result<SharedState, anyhow::Error> {
    load_dotenv();
    let config = AppConfig::from_env();

    let logo = match config.logo_url.as_deref() {
        Some(url) => {
            let logo = fetch_logo(&Client::new(), url).await.map_err(|e| {
                tracing::error!("Failed to load logo from {url}: {e:#}");
                e
            })?;
            tracing::info!(url, "Logo loaded");
            Some(logo)
        }
        None => {
            tracing::info!("LOGO_URL not set, generating codes without a logo");
            None
        }
    };

    tracing::info!("Settings loaded (port={})", config.server_port);
    Ok(SharedState::new(config, QrGenerator::new(logo)))
}

/// Download the logo at `url` and scale it to the logo size.
pub async fn fetch_logo(client: &Client, url: &str) -> Result<LogoAsset, anyhow::Error> {
    let resp = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("request to {url} failed"))?;

    let status = resp.status();
    if status != StatusCode::OK {
        bail!("failed to load logo, status: {status}");
    }

    let bytes = resp.bytes().await.context("failed to read logo body")?;
    let logo = LogoAsset::from_bytes(&bytes)?;
    Ok(logo)
}

/// Load .env from multiple candidate paths.
fn load_dotenv() {
    let candidates = [".env", "../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::info!("No .env file found, using system environment variables");
}
