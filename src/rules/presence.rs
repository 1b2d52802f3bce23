use crate::core::Rule;

/// Passes when the value is present.
pub fn is_some<V: 'static>(message: impl Into<String>) -> Rule<V> {
    Rule::predicate(|value| value.is_some(), message)
}

/// Passes when the value is absent.
pub fn is_none<V: 'static>(message: impl Into<String>) -> Rule<V> {
    Rule::predicate(|value| value.is_none(), message)
}
