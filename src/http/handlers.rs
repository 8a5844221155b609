//! Route handlers.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};

use crate::http::request::AnalysisRequest;
use crate::http::response::{json_response, ApiError};
use crate::http::server::AppState;

/// `POST /analyze`.
pub async fn analyze(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    let body = body?;
    let request = AnalysisRequest::from_body(&body)?;

    if !state.processing_delay.is_zero() {
        tokio::time::sleep(state.processing_delay).await;
    }

    let result = state.analyze(&request.text);

    tracing::debug!(
        emotion = %result.emotion,
        confidence = result.confidence,
        chars = request.text.chars().count(),
        "Reflection analyzed"
    );

    json_response(StatusCode::OK, &result)
}

/// Everything that is not `POST /analyze`.
///
/// `OPTIONS` on any path is a CORS preflight and gets an empty 200; the
/// CORS headers themselves are added by the router's layers.
pub async fn fallback(method: Method) -> Response {
    if method == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        ApiError::NotFound.into_response()
    }
}
