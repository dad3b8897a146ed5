//! Root module for the validation system.
//! Exposes the per-type predicates and the single dispatch point used by the
//! HTTP layer.
//!
//! Every function here is pure and total: malformed values yield `false`,
//! never an error.

mod constants;
mod document;
mod domain;
mod file;
mod kind;
mod pattern;

pub use constants::*;
pub use document::{is_valid_cnpj, is_valid_cpf};
pub use domain::{is_valid_category, is_valid_status, ReportCategory, ReportStatus};
pub use file::{file_extension, is_valid_file_extension, is_valid_file_size, FileDescriptor, MediaKind};
pub use kind::ValidationKind;
pub use pattern::{is_valid_email, is_valid_phone, is_valid_protocol};

/// A value resolved from the request envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    File(FileDescriptor),
}

/// Runs the validator for `kind` against `value`.
///
/// A value of the wrong shape for `kind` is reported as invalid.
pub fn validate(kind: ValidationKind, value: &FieldValue) -> bool {
    match (kind, value) {
        (ValidationKind::FileSize, FieldValue::File(file)) => is_valid_file_size(&file.name, file.size),
        (ValidationKind::FileSize, FieldValue::Text(_)) => false,
        (_, FieldValue::File(_)) => false,
        (ValidationKind::Cpf, FieldValue::Text(text)) => is_valid_cpf(text),
        (ValidationKind::Cnpj, FieldValue::Text(text)) => is_valid_cnpj(text),
        (ValidationKind::Email, FieldValue::Text(text)) => is_valid_email(text),
        (ValidationKind::Phone, FieldValue::Text(text)) => is_valid_phone(text),
        (ValidationKind::Protocol, FieldValue::Text(text)) => is_valid_protocol(text),
        (ValidationKind::Category, FieldValue::Text(text)) => is_valid_category(text),
        (ValidationKind::Status, FieldValue::Text(text)) => is_valid_status(text),
        (ValidationKind::FileExtension, FieldValue::Text(text)) => is_valid_file_extension(text),
    }
}
