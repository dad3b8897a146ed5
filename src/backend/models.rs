//! Wire types for the `/validate` endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::error_messages::AppError;
use crate::utils::validation::{FieldValue, FileDescriptor, ValidationKind};

/// Body of a validation request.
///
/// `value` stays untyped until the type tag is known.
#[derive(Debug, Deserialize)]
pub struct ValidationRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: Value,
}

/// Body of a successful answer. `value` is echoed exactly as received.
#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: Value,
    pub valid: bool,
}

impl FieldValue {
    /// Resolves a raw JSON value into the shape `kind` validates: a file
    /// descriptor object for `file-size`, a string for everything else.
    pub fn decode(kind: ValidationKind, value: &Value) -> Result<Self, AppError> {
        if kind.expects_file() {
            if !value.is_object() {
                return Err(AppError::InvalidFileDescriptor("expected an object".to_string()));
            }
            let file = FileDescriptor::deserialize(value)
                .map_err(|e| AppError::InvalidFileDescriptor(e.to_string()))?;
            return Ok(FieldValue::File(file));
        }

        value.as_str()
            .map(|text| FieldValue::Text(text.to_string()))
            .ok_or(AppError::InvalidValue(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_text() {
        let value = FieldValue::decode(ValidationKind::Email, &json!("usuario@exemplo.com")).unwrap();
        assert_eq!(value, FieldValue::Text("usuario@exemplo.com".to_string()));
    }

    #[test]
    fn test_decode_file() {
        let value = FieldValue::decode(ValidationKind::FileSize, &json!({"name": "video.mp4", "size": 1024})).unwrap();
        assert_eq!(value, FieldValue::File(FileDescriptor { name: "video.mp4".to_string(), size: 1024 }));
    }

    #[test]
    fn test_decode_rejects_wrong_shapes() {
        let invalid_cases = vec![
            (ValidationKind::Cpf, json!(52998224725u64)),
            (ValidationKind::Email, json!({"email": "usuario@exemplo.com"})),
            (ValidationKind::Status, json!(["CRIADA"])),
            (ValidationKind::FileExtension, json!(true)),
            (ValidationKind::FileSize, json!("foto.jpg")),
            (ValidationKind::FileSize, json!([{"name": "foto.jpg", "size": 1}])),
            (ValidationKind::FileSize, json!({"name": "foto.jpg", "size": "1"})),
            (ValidationKind::FileSize, json!({"name": 3, "size": 1})),
        ];

        for (kind, value) in invalid_cases {
            assert!(FieldValue::decode(kind, &value).is_err(), "{} accepted {}", kind, value);
        }
    }

    #[test]
    fn test_response_serialization() {
        let response = ValidationResponse {
            kind: "cpf".to_string(),
            value: json!("529.982.247-25"),
            valid: true,
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"type": "cpf", "value": "529.982.247-25", "valid": true})
        );
    }
}
