//! Shape validation for free-text contact fields and report protocols.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::utils::validation::document::digits;
use crate::utils::validation::MAX_EMAIL_LENGTH;

// Unquoted local part, then dot-separated labels that never start or end with a hyphen
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$")
        .expect("Failed to compile email regex")
});

// ANI-YYYYMMDD-NNNNN
static PROTOCOL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^ANI-[0-9]{8}-[0-9]{5}$")
        .expect("Failed to compile protocol regex")
});

/// Lowest and highest accepted area codes (DDD)
const AREA_CODES: std::ops::RangeInclusive<u32> = 11..=99;
const LANDLINE_LENGTH: usize = 10;
const MOBILE_LENGTH: usize = 11;
/// Leading subscriber digit reserved for mobile numbers
const MOBILE_PREFIX: u32 = 9;

/// Returns true if `email` looks like a deliverable address.
///
/// The length limit applies to the raw input; surrounding whitespace is
/// trimmed before the pattern is matched. The domain must hold at least one
/// dot, so single-label hosts such as `user@localhost` are rejected.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.len() > MAX_EMAIL_LENGTH {
        return false;
    }

    let email = email.trim();
    if !EMAIL_REGEX.is_match(email) {
        return false;
    }

    match email.split_once('@') {
        Some((_, domain)) => domain.contains('.'),
        None => false,
    }
}

/// Returns true if `phone` is a Brazilian landline (10 digits) or mobile
/// (11 digits, subscriber number starting with 9) number. Formatting is ignored.
pub fn is_valid_phone(phone: &str) -> bool {
    let digits = digits(phone);

    let is_mobile = match digits.len() {
        MOBILE_LENGTH => true,
        LANDLINE_LENGTH => false,
        _ => return false,
    };

    let area_code = digits[0] * 10 + digits[1];
    if !AREA_CODES.contains(&area_code) {
        return false;
    }

    (digits[2] == MOBILE_PREFIX) == is_mobile
}

/// Returns true if `protocol` is a report protocol such as `ANI-20251106-00001`.
pub fn is_valid_protocol(protocol: &str) -> bool {
    PROTOCOL_REGEX.is_match(protocol)
}
