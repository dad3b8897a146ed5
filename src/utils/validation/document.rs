//! Brazilian taxpayer document validation.
//!
//! Both CPF (individuals) and CNPJ (entities) carry two trailing check digits
//! computed from a weighted sum of the preceding digits. Input is accepted in
//! any formatting: punctuation and spaces are dropped before the arithmetic.

use crate::utils::validation::{CNPJ_LENGTH, CPF_LENGTH};

/// Weights applied to the first 12 digits of a CNPJ
const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
/// Weights applied to the first 13 digits of a CNPJ
const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Returns true if `cpf` holds a well-formed individual taxpayer ID.
pub fn is_valid_cpf(cpf: &str) -> bool {
    let digits = digits(cpf);
    if digits.len() != CPF_LENGTH || all_same(&digits) {
        return false;
    }

    has_valid_check_digits(&digits, |base| check_digit(base, descending_weights(base.len())))
}

/// Returns true if `cnpj` holds a well-formed entity taxpayer ID.
pub fn is_valid_cnpj(cnpj: &str) -> bool {
    let digits = digits(cnpj);
    if digits.len() != CNPJ_LENGTH || all_same(&digits) {
        return false;
    }

    has_valid_check_digits(&digits, |base| {
        let weights: &[u32] = if base.len() == CNPJ_FIRST_WEIGHTS.len() {
            &CNPJ_FIRST_WEIGHTS
        } else {
            &CNPJ_SECOND_WEIGHTS
        };
        check_digit(base, weights.iter().copied())
    })
}

/// Computes both check digits over `digits` (the full document, check digits
/// included) and compares them with the last two positions.
///
/// The second digit is computed over the body followed by the *computed*
/// first digit, never the received one.
fn has_valid_check_digits<F>(digits: &[u32], compute: F) -> bool
where
    F: Fn(&[u32]) -> u32,
{
    let body_len = digits.len() - 2;
    let mut base = digits[..body_len].to_vec();

    let first = compute(&base);
    base.push(first);
    let second = compute(&base);

    first == digits[body_len] && second == digits[body_len + 1]
}

/// Weighted-sum check digit: `0` when `sum % 11 < 2`, `11 - sum % 11` otherwise.
fn check_digit<I>(digits: &[u32], weights: I) -> u32
where
    I: IntoIterator<Item = u32>,
{
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    match sum % 11 {
        remainder if remainder < 2 => 0,
        remainder => 11 - remainder,
    }
}

/// Weights `len + 1, len, ..., 2`, as used by the CPF algorithm.
fn descending_weights(len: usize) -> impl Iterator<Item = u32> {
    let top = u32::try_from(len).unwrap_or(u32::MAX).saturating_add(1);
    (2..=top).rev()
}

/// Keeps the ASCII digits of `input`, as numeric values.
pub(crate) fn digits(input: &str) -> Vec<u32> {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .filter_map(|c| c.to_digit(10))
        .collect()
}

/// True for an empty slice or one where every element is identical
fn all_same(digits: &[u32]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}
