//! Represents all possible errors in the application
//!
//! Only envelope errors exist: a request that cannot be routed to a validator.
//! A value that fails validation is a normal `valid: false` answer.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::utils::validation::ValidationKind;

pub const MALFORMED_REQUEST: &str = "Invalid JSON";

pub const MALFORMED_REQUEST_DETAIL: &str = "Make sure to send the 'type' and 'value' fields";

pub const UNSUPPORTED_TYPE: &str = "Unsupported validation type";

pub const INVALID_VALUE: &str = "Invalid value format";

pub const INVALID_FILE_DATA: &str = "Invalid file data";

#[derive(Debug, Error)]
pub enum AppError {
    /// Body is not JSON, or `type` / `value` is missing or of the wrong JSON type
    #[error("Invalid JSON: {0}")]
    MalformedRequest(String),

    #[error("Unsupported validation type: {0}")]
    UnsupportedType(String),

    /// A string was expected for this type tag
    #[error("Invalid value format for type {0}")]
    InvalidValue(ValidationKind),

    /// The `file-size` value is not a `{ name, size }` object
    #[error("Invalid file data: {0}")]
    InvalidFileDescriptor(String),
}

impl AppError {
    fn body(&self) -> serde_json::Value {
        match self {
            AppError::MalformedRequest(_) => json!({
                "error": MALFORMED_REQUEST,
                "detail": MALFORMED_REQUEST_DETAIL,
            }),
            AppError::UnsupportedType(_) => json!({
                "error": UNSUPPORTED_TYPE,
                "supportedTypes": ValidationKind::supported(),
            }),
            AppError::InvalidValue(kind) => json!({
                "error": INVALID_VALUE,
                "detail": format!("'value' must be a string for type '{}'", kind),
            }),
            AppError::InvalidFileDescriptor(_) => json!({
                "error": INVALID_FILE_DATA,
                "detail": "'value' must be an object with 'name' (string) and 'size' (integer)",
            }),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        log::warn!("Rejected request: {}", self);
        (StatusCode::BAD_REQUEST, Json(self.body())).into_response()
    }
}
