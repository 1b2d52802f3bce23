//! Fluent builder API for declaring and running validations.
//!
//! A [`ValidationSession`] moves through three states:
//!
//! - open: fields may be declared with `field`, `field_opt`, `try_field`
//!   or `with_field`
//! - field open: a [`FieldBuilder`] owns the session while rules are attached
//! - finalized: `finalize` consumed the session
//!
//! Moving the session through these types makes a dangling field builder,
//! or reuse after `finalize`, a compile error rather than a runtime one.

pub mod error;
pub mod factory;
pub mod field;
pub mod session;

pub use error::{
    AccessorError, CaptureError, DuplicateFieldError, FieldErrorMessages, ValidationFailedError,
    ValidatorError, INVALID_FIELDS_MESSAGE,
};
pub use factory::{Validate, ValidatorFactory};
pub use field::FieldBuilder;
pub use session::ValidationSession;
