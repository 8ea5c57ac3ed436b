//! QR code image generation API.

use axum::Json;
use axum::body::Body;
use axum::extract::{RawQuery, State};
use axum::http::{StatusCode, header};
use axum::response::Response;
use qr_engine::request::query_unescape;
use qr_engine::{EngineError, GenerationRequest};
use serde_json::Value;

use crate::app::SharedState;

use super::err_json;

type ApiError = (StatusCode, Json<Value>);

/// Query parameters as received. Both stay strings so that a malformed
/// `size` falls back to the default instead of rejecting the request.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct QrQuery {
    pub data: Option<String>,
    pub size: Option<String>,
}

impl QrQuery {
    /// Parse a raw query string, keeping the first value of each key.
    ///
    /// Pairs that contain `;` or whose key or value has a malformed escape
    /// are skipped, as are pairs that do not decode to UTF-8.
    pub fn parse(raw: &str) -> Self {
        let mut query = Self::default();
        for pair in raw.split('&') {
            if pair.is_empty() || pair.contains(';') {
                continue;
            }
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let (Ok(key), Ok(value)) = (query_unescape(key), query_unescape(value)) else {
                tracing::debug!(pair, "Skipping undecodable query pair");
                continue;
            };

            let slot = match key.as_str() {
                "data" => &mut query.data,
                "size" => &mut query.size,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

/// GET /?data=...&size=... (also served for any unmatched path)
pub async fn generate_qr(
    State(state): State<SharedState>,
    RawQuery(raw): RawQuery,
) -> Result<Response, ApiError> {
    let query = raw.as_deref().map(QrQuery::parse).unwrap_or_default();
    let req = GenerationRequest::from_raw(query.data.as_deref(), query.size.as_deref())
        .map_err(engine_error)?;

    let generator = state.generator();
    let encoded = tokio::task::spawn_blocking(move || generator.generate_png(&req))
        .await
        .map_err(|e| {
            tracing::error!("QR generation task failed: {e}");
            err_json(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
        })?
        .map_err(engine_error)?;

    let content_type = encoded.content_type();
    let content_length = encoded.len();
    Response::builder()
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, content_length)
        .body(Body::from(encoded.bytes))
        .map_err(|e| {
            tracing::error!("Failed to build image response: {e}");
            err_json(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
        })
}

/// Validation failures become 422 with their code; everything else is a
/// logged 500.
fn engine_error(e: EngineError) -> ApiError {
    match e {
        EngineError::Validation(v) => {
            tracing::debug!(code = v.code(), "Rejected QR request");
            err_json(StatusCode::UNPROCESSABLE_ENTITY, v.code())
        }
        other => {
            tracing::error!("QR generation failed: {other}");
            err_json(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qr_engine::ValidationError;

    #[test]
    fn query_keeps_first_value_per_key() {
        let query = QrQuery::parse("data=a&size=300&data=b&size=400");
        assert_eq!(query.data.as_deref(), Some("a"));
        assert_eq!(query.size.as_deref(), Some("300"));
    }

    #[test]
    fn query_skips_undecodable_pairs() {
        let query = QrQuery::parse("data=%zz&size=1%2");
        assert_eq!(query, QrQuery::default());

        // A later valid pair still counts.
        let query = QrQuery::parse("data=%zz&data=ok");
        assert_eq!(query.data.as_deref(), Some("ok"));

        assert_eq!(QrQuery::parse("data=a;b").data, None);
        assert_eq!(QrQuery::parse("data=%FF").data, None);
    }

    #[test]
    fn query_decodes_plus_and_escapes_once() {
        let query = QrQuery::parse("data=a+b%2541&unused=1&size");
        assert_eq!(query.data.as_deref(), Some("a b%41"));
        assert_eq!(query.size.as_deref(), Some(""));
    }

    #[test]
    fn validation_errors_map_to_422_with_code() {
        let (status, Json(body)) = engine_error(ValidationError::DataTooLong.into());
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["status"], "error");
        assert_eq!(body["error"], "data.too_long");
    }

    #[test]
    fn other_errors_map_to_generic_500() {
        let (status, Json(body)) = engine_error(EngineError::Decode("invalid escape".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "internal error");
    }
}
