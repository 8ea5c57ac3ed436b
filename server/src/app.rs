use std::sync::Arc;

use qr_engine::QrGenerator;
use tokio_util::sync::CancellationToken;

use crate::config::AppConfig;

/// Application shared state accessible from axum handlers.
///
/// Everything inside is fixed once startup completes, so handlers read it
/// without locking.
#[derive(Clone)]
pub struct SharedState {
    inner: Arc<SharedStateInner>,
}

struct SharedStateInner {
    config: AppConfig,
    /// Generator holding the optional logo, shared by every request.
    generator: Arc<QrGenerator>,
    shutdown_token: CancellationToken,
}

impl SharedState {
    pub fn new(config: AppConfig, generator: QrGenerator) -> Self {
        Self {
            inner: Arc::new(SharedStateInner {
                config,
                generator: Arc::new(generator),
                shutdown_token: CancellationToken::new(),
            }),
        }
    }

    pub fn server_port(&self) -> u16 {
        self.inner.config.server_port
    }

    /// A handle to the generator that can be moved onto a blocking thread.
    pub fn generator(&self) -> Arc<QrGenerator> {
        Arc::clone(&self.inner.generator)
    }

    pub fn shutdown_token(&self) -> &CancellationToken {
        &self.inner.shutdown_token
    }
}
