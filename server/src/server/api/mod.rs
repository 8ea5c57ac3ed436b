//! REST API handlers.

pub mod qr;

use axum::Json;
use axum::http::StatusCode;
use serde_json::{Value, json};

/// Standard error response.
pub fn err_json(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "status": "error", "error": message })))
}
