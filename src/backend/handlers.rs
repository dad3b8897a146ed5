//! Handler for the single validation endpoint.

use axum::{body::Bytes, Json};
use log::debug;

use crate::backend::models::{ValidationRequest, ValidationResponse};
use crate::utils::error_messages::AppError;
use crate::utils::validation::{validate as run_validator, FieldValue, ValidationKind};

/// `POST /validate`
///
/// Envelope problems (bad JSON, missing fields, unknown type, value of the
/// wrong shape) are rejected with `400`. Anything that reaches a validator is
/// answered with `200` and a `valid` flag.
///
/// The body is decoded as JSON whatever `Content-Type` says, so plain
/// `fetch` calls sending `text/plain` are served too.
pub async fn validate(body: Bytes) -> Result<Json<ValidationResponse>, AppError> {
    let request: ValidationRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::MalformedRequest(e.to_string()))?;

    if request.kind.is_empty() {
        return Err(AppError::MalformedRequest("field `type` is empty".to_string()));
    }
    if request.value.is_null() {
        return Err(AppError::MalformedRequest("field `value` is null".to_string()));
    }

    let kind = request.kind.parse::<ValidationKind>()
        .map_err(|_| AppError::UnsupportedType(request.kind.clone()))?;

    let field = FieldValue::decode(kind, &request.value)?;
    let valid = run_validator(kind, &field);
    debug!("{} validation -> {}", kind, valid);

    Ok(Json(ValidationResponse {
        kind: request.kind,
        value: request.value,
        valid,
    }))
}
