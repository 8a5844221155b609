//! Request decoding and validation.
//!
//! # Responsibilities
//! - Decode the body as UTF-8 JSON
//! - Extract and trim the `text` field
//! - Reject blank input before it reaches the classifier
//!
//! # Design Decisions
//! - Unknown fields are ignored
//! - A missing `text` field is treated as empty text
//! - A body that parses but has the wrong shape is an internal failure,
//!   matching the reference service

use serde_json::Value;

use crate::http::response::ApiError;

/// A validated analysis request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// Trimmed, non-empty reflection text.
    pub text: String,
}

impl AnalysisRequest {
    /// Decode and validate a raw request body.
    pub fn from_body(body: &[u8]) -> Result<Self, ApiError> {
        let body = std::str::from_utf8(body).map_err(|_| ApiError::InvalidJson)?;
        let value: Value = serde_json::from_str(body).map_err(|_| ApiError::InvalidJson)?;

        let fields = match &value {
            Value::Object(fields) => fields,
            other => {
                return Err(ApiError::Internal(format!(
                    "expected a JSON object, got {}",
                    kind(other)
                )))
            }
        };

        let text = match fields.get("text") {
            None => "",
            Some(Value::String(text)) => text.trim(),
            Some(other) => {
                return Err(ApiError::Internal(format!(
                    "'text' must be a string, got {}",
                    kind(other)
                )))
            }
        };

        if text.is_empty() {
            return Err(ApiError::MissingText);
        }

        Ok(Self {
            text: text.to_string(),
        })
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
