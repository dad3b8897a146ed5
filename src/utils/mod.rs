//! Shared utilities: error types and the validator set.

pub mod error_messages;
pub mod validation;
