//! Named values captured from the subject under validation.

use serde::{Deserialize, Serialize};

/// Immutable `(name, value)` pair captured from a subject.
///
/// The value is `None` when the accessor reported it as missing. Identity
/// for duplicate detection is the name alone; the value and its type are
/// never compared.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Field<V> {
    name: String,
    value: Option<V>,
}

impl<V> Field<V> {
    /// Create a field holding a present value.
    pub fn new(name: impl Into<String>, value: V) -> Self {
        Self {
            name: name.into(),
            value: Some(value),
        }
    }

    /// Create a field whose value is absent.
    pub fn absent(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    pub fn from_option(name: impl Into<String>, value: Option<V>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    pub fn is_absent(&self) -> bool {
        self.value.is_none()
    }

    /// Name-only comparison, valid across different value types.
    pub fn same_name<W>(&self, other: &Field<W>) -> bool {
        self.name == other.name
    }
}
