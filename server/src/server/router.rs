use axum::{
    Json, Router,
    extract::State,
    routing::{any, get},
};
use serde::Serialize;
use tower_http::cors::CorsLayer;

use super::api;
use crate::app::SharedState;

#[derive(Debug, Clone, Serialize)]
struct StatusResponse {
    status: &'static str,
    version: &'static str,
    logo: bool,
}

/// Create the axum router with all routes.
///
/// Any path other than `/status` serves QR codes.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/", any(api::qr::generate_qr))
        .route("/status", get(status_handler))
        .fallback(api::qr::generate_qr)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn status_handler(State(state): State<SharedState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        logo: state.generator().has_logo(),
    })
}
