//! Constants used throughout the validation system

/// One mebibyte, the unit used by the file size policy
pub const MIB: i64 = 1024 * 1024;
/// Maximum size for video uploads
pub const MAX_VIDEO_SIZE: i64 = 50 * MIB;
/// Maximum size for every other upload (images, audio, documents, unknown)
pub const MAX_FILE_SIZE: i64 = 10 * MIB;
/// Maximum length of an email address, in bytes
pub const MAX_EMAIL_LENGTH: usize = 254;
/// Number of digits in an individual taxpayer ID (CPF)
pub const CPF_LENGTH: usize = 11;
/// Number of digits in an entity taxpayer ID (CNPJ)
pub const CNPJ_LENGTH: usize = 14;
