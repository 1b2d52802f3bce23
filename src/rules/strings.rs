//! Text rules. Lengths are counted in characters, not bytes.

use crate::core::Rule;
use regex::Regex;
use std::sync::LazyLock;

/// Pattern accepted by [`email`].
pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9_.\-]+@([A-Za-z0-9_\-]+\.)+[A-Za-z0-9_\-]{2,}$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

fn text<V: AsRef<str>>(value: Option<&V>) -> &str {
    value.map_or("", |v| v.as_ref())
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Passes when the value is present and has a non-whitespace character.
pub fn not_blank<V>(message: impl Into<String>) -> Rule<V>
where
    V: AsRef<str> + 'static,
{
    Rule::predicate(|value| !is_blank(text(value)), message)
}

/// Passes when the value is absent, empty or whitespace only.
pub fn blank<V>(message: impl Into<String>) -> Rule<V>
where
    V: AsRef<str> + 'static,
{
    Rule::predicate(|value| is_blank(text(value)), message)
}

/// Passes when the value has exactly `length` characters, or is empty.
pub fn length_eq<V>(length: usize, message: impl Into<String>) -> Rule<V>
where
    V: AsRef<str> + 'static,
{
    length_rule(message, move |count| count == length)
}

/// Passes when the value has at least `length` characters, or is empty.
pub fn length_min<V>(length: usize, message: impl Into<String>) -> Rule<V>
where
    V: AsRef<str> + 'static,
{
    length_rule(message, move |count| count >= length)
}

/// Passes when the value has at most `length` characters, or is empty.
pub fn length_max<V>(length: usize, message: impl Into<String>) -> Rule<V>
where
    V: AsRef<str> + 'static,
{
    length_rule(message, move |count| count <= length)
}

fn length_rule<V, F>(message: impl Into<String>, accept: F) -> Rule<V>
where
    V: AsRef<str> + 'static,
    F: Fn(usize) -> bool + Send + Sync + 'static,
{
    Rule::predicate(
        move |value| {
            let text = text(value);
            text.is_empty() || accept(text.chars().count())
        },
        message,
    )
}

/// Passes when the value is blank or looks like an e-mail address.
pub fn email<V>(message: impl Into<String>) -> Rule<V>
where
    V: AsRef<str> + 'static,
{
    Rule::predicate(
        |value| {
            let text = text(value);
            is_blank(text) || EMAIL_RE.is_match(text)
        },
        message,
    )
}

/// Passes when the value contains only ASCII digits. Absent or empty passes.
pub fn only_numbers<V>(message: impl Into<String>) -> Rule<V>
where
    V: AsRef<str> + 'static,
{
    Rule::predicate(
        |value| text(value).chars().all(|c| c.is_ascii_digit()),
        message,
    )
}
