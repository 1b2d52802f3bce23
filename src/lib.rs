//! Fieldcheck: a functional object-validation engine
//!
//! Fieldcheck validates an arbitrary value by declaring, per named field, a
//! sequence of pure rules. All rules of all fields always run; failures are
//! collected and reported together in one structured error instead of
//! stopping at the first problem.
//!
//! # Core Concepts
//!
//! - **Rule**: pure function from a possibly absent value to an `Outcome`
//! - **Field**: a named value captured from the subject
//! - **Session**: per-subject builder that binds rules to fields and runs them
//! - **ValidationFailedError**: every invalid field with all its failing messages
//!
//! # Example
//!
//! ```rust
//! use fieldcheck::{rules, ValidationSession};
//!
//! struct User {
//!     name: String,
//!     last_name: String,
//!     email: String,
//! }
//!
//! let user = User {
//!     name: "John".into(),
//!     last_name: "".into(),
//!     email: "john@".into(),
//! };
//!
//! let result = ValidationSession::new(user)
//!     .field("name", |u| u.name.clone())
//!     .add(rules::not_blank("name is required"))
//!     .end()
//!     .and_then(|s| {
//!         s.field("lastName", |u| u.last_name.clone())
//!             .add(rules::not_blank("last name is required"))
//!             .end()
//!     })
//!     .and_then(|s| {
//!         s.field("email", |u| u.email.clone())
//!             .add(rules::email("email is malformed"))
//!             .end()
//!     })
//!     .expect("field names are unique")
//!     .finalize();
//!
//! let error = result.unwrap_err();
//! assert_eq!(error.message(), "there are invalid fields");
//! assert_eq!(error.field_errors().len(), 2);
//! assert_eq!(error.messages_for("email").unwrap(), ["email is malformed"]);
//! ```

pub mod builder;
pub mod core;
pub mod execution;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Field, Outcome, Rule};
pub use builder::{
    AccessorError, CaptureError, DuplicateFieldError, FieldBuilder, FieldErrorMessages, Validate,
    ValidationFailedError, ValidationSession, ValidatorError, ValidatorFactory,
    INVALID_FIELDS_MESSAGE,
};
pub use execution::{ExecutionMode, FieldBinding, FieldExecutionResult, ValidatorConfig};
