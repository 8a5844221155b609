//! Response encoding and the error taxonomy.
//!
//! # Responsibilities
//! - Serialize results and errors as pretty-printed JSON
//! - Map each error kind to its HTTP status
//! - Provide the CORS header set applied to every response
//!
//! # Design Decisions
//! - Error bodies always have the shape `{error, message, status}`
//! - Internal failures carry a short diagnostic, never a backtrace

use std::any::Any;

use axum::{
    body::Body,
    extract::rejection::BytesRejection,
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// CORS headers carried by every response.
pub const CORS_HEADERS: [(HeaderName, &str); 3] = [
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, GET, OPTIONS"),
    (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
];

/// Errors surfaced to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Body is not well-formed UTF-8 JSON.
    #[error("Invalid JSON format")]
    InvalidJson,

    /// `text` is absent or blank after trimming.
    #[error("Text input is required")]
    MissingText,

    /// Unknown route or method.
    #[error("Endpoint not found")]
    NotFound,

    /// The body could not be buffered (too large, or the stream failed).
    #[error("{message}")]
    Body { status: StatusCode, message: String },

    /// Anything else that went wrong while handling the request.
    #[error("Server error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson | ApiError::MissingText => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Body { status, .. } => *status,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::Body {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// Wire shape of an error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: bool,
    pub message: String,
    pub status: u16,
}

impl From<&ApiError> for ErrorBody {
    fn from(err: &ApiError) -> Self {
        Self {
            error: true,
            message: err.to_string(),
            status: err.status().as_u16(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal(detail) => tracing::error!(detail = %detail, "Request failed"),
            other => tracing::debug!(error = %other, "Request rejected"),
        }

        let status = self.status();
        match json_response(status, &ErrorBody::from(&self)) {
            Ok(response) => response,
            // ErrorBody always serializes.
            Err(_) => (status, self.to_string()).into_response(),
        }
    }
}

/// Build a pretty-printed JSON response.
pub fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Result<Response, ApiError> {
    let body = serde_json::to_vec_pretty(value).map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok((
        status,
        [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        Body::from(body),
    )
        .into_response())
}

/// Convert a caught handler panic into an internal error response.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unexpected failure".to_string()
    };
    ApiError::Internal(detail).into_response()
}
