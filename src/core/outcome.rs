//! Pass/fail outcome of a single rule execution.

use serde::{Deserialize, Serialize};

/// Result of running one rule against one captured value.
///
/// An outcome is a plain value, not an error: a failing rule produces
/// `Outcome::Invalid` and the engine keeps going. Only the session turns
/// invalid outcomes into a [`ValidationFailedError`](crate::ValidationFailedError).
///
/// # Example
///
/// ```rust
/// use fieldcheck::core::Outcome;
///
/// let ok = Outcome::valid();
/// let bad = Outcome::invalid("Invalid date");
///
/// assert!(ok.is_valid());
/// assert_eq!(ok.message(), None);
/// assert_eq!(bad.message(), Some("Invalid date"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// The rule passed. Never carries a message.
    Valid,

    /// The rule failed with a caller-facing message.
    Invalid { message: String },
}

impl Outcome {
    pub fn valid() -> Self {
        Outcome::Valid
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Outcome::Invalid {
            message: message.into(),
        }
    }

    /// Build an outcome from a boolean check, using `message` on failure.
    pub fn from_check(passed: bool, message: &str) -> Self {
        if passed {
            Outcome::Valid
        } else {
            Outcome::invalid(message)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid)
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Failure message, if this outcome is invalid.
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Valid => None,
            Outcome::Invalid { message } => Some(message),
        }
    }
}
