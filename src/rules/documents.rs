//! Brazilian document rules.
//!
//! Formatting characters are ignored: `529.982.247-25` and `52998224725`
//! are the same CPF. Blank values pass.

use crate::core::Rule;

const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

fn digits(value: &str) -> Vec<u32> {
    value.chars().filter_map(|c| c.to_digit(10)).collect()
}

fn all_equal(digits: &[u32]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

fn weighted_sum(digits: &[u32], weights: impl Iterator<Item = u32>) -> u32 {
    digits.iter().zip(weights).map(|(d, w)| d * w).sum()
}

/// CPF: 11 digits, two mod-11 check digits, not all digits equal.
fn is_valid_cpf(value: &str) -> bool {
    let digits = digits(value);
    if digits.len() != 11 || all_equal(&digits) {
        return false;
    }

    let check = |len: usize| {
        let sum = weighted_sum(&digits[..len], (2..=len as u32 + 1).rev());
        (sum * 10 % 11) % 10
    };

    check(9) == digits[9] && check(10) == digits[10]
}

/// CNPJ: 14 digits, two mod-11 check digits, not all digits equal.
fn is_valid_cnpj(value: &str) -> bool {
    let digits = digits(value);
    if digits.len() != 14 || all_equal(&digits) {
        return false;
    }

    let check = |weights: &[u32]| {
        let rest = weighted_sum(&digits[..weights.len()], weights.iter().copied()) % 11;
        if rest < 2 {
            0
        } else {
            11 - rest
        }
    };

    check(&CNPJ_FIRST_WEIGHTS[..]) == digits[12] && check(&CNPJ_SECOND_WEIGHTS[..]) == digits[13]
}

fn is_valid_cep(value: &str) -> bool {
    digits(value).len() == 8
}

fn document_rule<V>(message: impl Into<String>, accept: fn(&str) -> bool) -> Rule<V>
where
    V: AsRef<str> + 'static,
{
    Rule::predicate(
        move |value: Option<&V>| match value.map(|v| v.as_ref()) {
            Some(text) if !text.trim().is_empty() => accept(text),
            _ => true,
        },
        message,
    )
}

/// Brazilian individual taxpayer number.
pub fn cpf<V>(message: impl Into<String>) -> Rule<V>
where
    V: AsRef<str> + 'static,
{
    document_rule(message, is_valid_cpf)
}

/// Brazilian company registration number.
pub fn cnpj<V>(message: impl Into<String>) -> Rule<V>
where
    V: AsRef<str> + 'static,
{
    document_rule(message, is_valid_cnpj)
}

/// Brazilian postal code: eight digits.
pub fn cep<V>(message: impl Into<String>) -> Rule<V>
where
    V: AsRef<str> + 'static,
{
    document_rule(message, is_valid_cep)
}
