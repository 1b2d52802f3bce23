//! Errors raised by validation sessions.
//!
//! Rule outcomes are values (see [`Outcome`](crate::core::Outcome)); the
//! types here are the session-level failures a caller has to branch on.

use serde::{Deserialize, Serialize};
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Summary carried by every [`ValidationFailedError`].
pub const INVALID_FIELDS_MESSAGE: &str = "there are invalid fields";

/// A field with an already registered name was closed into a session.
///
/// This is a bug in the validation declaration, never a property of the
/// data being validated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field with name: {name} has already been added")]
pub struct DuplicateFieldError {
    pub name: String,
}

impl DuplicateFieldError {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Failing messages for one field, in rule attachment order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrorMessages {
    pub field_name: String,
    pub messages: Vec<String>,
}

impl FieldErrorMessages {
    pub fn new(field_name: impl Into<String>, messages: Vec<String>) -> Self {
        Self {
            field_name: field_name.into(),
            messages,
        }
    }
}

/// One or more fields failed at least one rule.
///
/// Lists every offending field (in the order fields were added to the
/// session) with all of its failing messages. Fields that passed, or that
/// had no rules, never appear. Only a session builds one, so the report is
/// never empty and the summary is always [`INVALID_FIELDS_MESSAGE`].
///
/// Serializes as `{"message": ..., "fieldErrors": [{"fieldName": ..., "messages": [...]}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
#[serde(rename_all = "camelCase")]
pub struct ValidationFailedError {
    message: String,
    field_errors: Vec<FieldErrorMessages>,
}

impl ValidationFailedError {
    pub(crate) fn new(field_errors: NonEmptyVec<FieldErrorMessages>) -> Self {
        Self {
            message: INVALID_FIELDS_MESSAGE.to_string(),
            field_errors: field_errors.into_vec(),
        }
    }

    /// Summary message, always [`INVALID_FIELDS_MESSAGE`].
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn field_errors(&self) -> &[FieldErrorMessages] {
        &self.field_errors
    }

    /// Failing messages of one field, if it is among the invalid ones.
    pub fn messages_for(&self, field_name: &str) -> Option<&[String]> {
        self.field_errors
            .iter()
            .find(|entry| entry.field_name == field_name)
            .map(|entry| entry.messages.as_slice())
    }

    pub fn invalid_field_names(&self) -> impl Iterator<Item = &str> {
        self.field_errors
            .iter()
            .map(|entry| entry.field_name.as_str())
    }

    pub fn into_field_errors(self) -> Vec<FieldErrorMessages> {
        self.field_errors
    }
}

/// Boxed error raised by an accessor, kept with its concrete type.
pub type AccessorError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// What an accessor may report while capturing a field value.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The value is missing (a null reference). Captured as absent.
    #[error("value is missing")]
    Missing,

    /// A lookup found no such element. Captured as absent.
    #[error("no such element: {0}")]
    NoSuchElement(String),

    /// Anything else. Propagated to the caller with the original error as
    /// its source.
    #[error("{0}")]
    Other(#[source] AccessorError),
}

impl CaptureError {
    /// Wrap any accessor error, e.g. `.map_err(CaptureError::other)`.
    pub fn other(error: impl Into<AccessorError>) -> Self {
        CaptureError::Other(error.into())
    }

    /// True for the classes that are recovered as an absent value.
    pub fn is_absence(&self) -> bool {
        matches!(self, CaptureError::Missing | CaptureError::NoSuchElement(_))
    }

    /// The original accessor error, if this is [`CaptureError::Other`].
    pub fn into_accessor_error(self) -> Option<AccessorError> {
        match self {
            CaptureError::Other(error) => Some(error),
            _ => None,
        }
    }
}

/// Any failure produced while declaring or running a validation.
///
/// Every session error converts into this type, so a whole fluent chain can
/// use `?` inside a function returning `Result<_, ValidatorError>`.
#[derive(Debug, Error)]
pub enum ValidatorError {
    #[error(transparent)]
    DuplicateField(#[from] DuplicateFieldError),

    #[error("failed to capture field '{field}': {source}")]
    Capture {
        field: String,
        #[source]
        source: CaptureError,
    },

    #[error(transparent)]
    Invalid(#[from] ValidationFailedError),
}

impl ValidatorError {
    /// The structured report, if this error is a validation failure.
    pub fn as_validation_failure(&self) -> Option<&ValidationFailedError> {
        match self {
            ValidatorError::Invalid(error) => Some(error),
            _ => None,
        }
    }

    /// The original error of a failed accessor, with its concrete type.
    ///
    /// ```rust
    /// use fieldcheck::{CaptureError, ValidationSession};
    /// use std::num::ParseIntError;
    ///
    /// let error = ValidationSession::new("4x2")
    ///     .try_field("quantity", |s| s.parse::<u32>().map_err(CaptureError::other))
    ///     .err()
    ///     .unwrap();
    ///
    /// let cause = error.into_accessor_error().unwrap();
    /// assert!(cause.downcast::<ParseIntError>().is_ok());
    /// ```
    pub fn into_accessor_error(self) -> Option<AccessorError> {
        match self {
            ValidatorError::Capture { source, .. } => source.into_accessor_error(),
            _ => None,
        }
    }
}
