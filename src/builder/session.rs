//! Validation sessions: the per-subject builder and execution engine.

use crate::builder::error::{
    CaptureError, DuplicateFieldError, FieldErrorMessages, ValidationFailedError, ValidatorError,
};
use crate::builder::field::FieldBuilder;
use crate::core::Field;
use crate::execution::{
    ExecutionMode, FieldBinding, FieldExecutionResult, FieldExecutor, ValidatorConfig,
};
use rayon::prelude::*;
use std::collections::HashMap;
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use uuid::Uuid;

/// Owns a subject value and the fields declared on it.
///
/// Fields are declared with [`field`](Self::field), which hands the session
/// to a [`FieldBuilder`] until [`end`](FieldBuilder::end) gives it back.
/// [`finalize`](Self::finalize) consumes the session, runs every rule of
/// every field and reports all failures at once.
///
/// # Example
///
/// ```rust
/// use fieldcheck::rules;
/// use fieldcheck::{ValidationSession, ValidatorError};
///
/// struct User {
///     name: String,
///     age: u32,
/// }
///
/// fn check(user: User) -> Result<(), ValidatorError> {
///     ValidationSession::new(user)
///         .field("name", |u| u.name.clone())
///         .add(rules::not_blank("name is required"))
///         .end()?
///         .field("age", |u| u.age)
///         .add(rules::min(18, "must be an adult"))
///         .end()?
///         .finalize()?;
///     Ok(())
/// }
///
/// assert!(check(User { name: "John".into(), age: 30 }).is_ok());
///
/// let error = check(User { name: " ".into(), age: 12 }).unwrap_err();
/// let report = error.as_validation_failure().unwrap();
/// assert_eq!(report.messages_for("name").unwrap(), ["name is required"]);
/// assert_eq!(report.messages_for("age").unwrap(), ["must be an adult"]);
/// ```
pub struct ValidationSession<E> {
    id: Uuid,
    subject: E,
    config: ValidatorConfig,
    bindings: Vec<Box<dyn FieldExecutor>>,
    index: HashMap<String, usize>,
}

impl<E> ValidationSession<E> {
    /// Create a session with the default configuration.
    pub fn new(subject: E) -> Self {
        Self::with_config(subject, ValidatorConfig::default())
    }

    pub fn with_config(subject: E, config: ValidatorConfig) -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(
            session_id = %id,
            subject = std::any::type_name::<E>(),
            mode = ?config.mode,
            "Validation session created"
        );
        Self {
            id,
            subject,
            config,
            bindings: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Identifier used to correlate this session's log events.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn subject(&self) -> &E {
        &self.subject
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Number of fields closed into the session.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn contains_field(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Names of the closed fields, in the order they were added.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|binding| binding.name())
    }

    /// Declare a field whose value is always present.
    pub fn field<V, F>(self, name: impl Into<String>, accessor: F) -> FieldBuilder<E, V>
    where
        F: FnOnce(&E) -> V,
    {
        let value = accessor(&self.subject);
        self.with_field(Field::new(name, value))
    }

    /// Declare a field whose accessor may find nothing.
    ///
    /// `None` is captured as an absent value; rules still run against it.
    pub fn field_opt<V, F>(self, name: impl Into<String>, accessor: F) -> FieldBuilder<E, V>
    where
        F: FnOnce(&E) -> Option<V>,
    {
        let name = name.into();
        let value = accessor(&self.subject);
        if value.is_none() {
            tracing::trace!(session_id = %self.id, field = %name, "Captured absent value");
        }
        self.with_field(Field::from_option(name, value))
    }

    /// Declare a field with a fallible accessor.
    ///
    /// [`CaptureError::Missing`] and [`CaptureError::NoSuchElement`] are
    /// captured as an absent value. Any other error is returned unchanged,
    /// and the session is dropped with it.
    pub fn try_field<V, F>(
        self,
        name: impl Into<String>,
        accessor: F,
    ) -> Result<FieldBuilder<E, V>, ValidatorError>
    where
        F: FnOnce(&E) -> Result<V, CaptureError>,
    {
        let name = name.into();
        match accessor(&self.subject) {
            Ok(value) => Ok(self.with_field(Field::new(name, value))),
            Err(error) if error.is_absence() => {
                tracing::trace!(
                    session_id = %self.id,
                    field = %name,
                    error = %error,
                    "Captured absent value"
                );
                Ok(self.with_field(Field::absent(name)))
            }
            Err(source) => Err(ValidatorError::Capture {
                field: name,
                source,
            }),
        }
    }

    /// Declare a field from an already captured value.
    pub fn with_field<V>(self, field: Field<V>) -> FieldBuilder<E, V> {
        FieldBuilder::new(self, FieldBinding::new(field))
    }

    /// Close a binding into the session.
    ///
    /// Fails if a binding with the same name is already present, whatever
    /// the value types or rules of the two bindings.
    pub fn add_field<V>(mut self, binding: FieldBinding<V>) -> Result<Self, DuplicateFieldError>
    where
        V: Send + Sync + 'static,
    {
        if self.index.contains_key(binding.name()) {
            tracing::warn!(
                session_id = %self.id,
                field = %binding.name(),
                "Rejected duplicate field"
            );
            return Err(DuplicateFieldError::new(binding.name()));
        }

        tracing::debug!(
            session_id = %self.id,
            field = %binding.name(),
            rules = binding.rules().len(),
            "Field added"
        );
        self.index.insert(binding.name().to_string(), self.bindings.len());
        self.bindings.push(Box::new(binding));
        Ok(self)
    }

    /// Run every rule of every field.
    ///
    /// Returns one result per field in declaration order, and only after all
    /// rules across all fields have completed.
    pub fn execute(&self) -> Vec<FieldExecutionResult> {
        let mode = self.config.mode;
        tracing::debug!(
            session_id = %self.id,
            fields = self.bindings.len(),
            ?mode,
            "Executing field rules"
        );
        match mode {
            ExecutionMode::Parallel => self
                .bindings
                .par_iter()
                .map(|binding| binding.execute(mode))
                .collect(),
            ExecutionMode::Sequential => self
                .bindings
                .iter()
                .map(|binding| binding.execute(mode))
                .collect(),
        }
    }

    /// Run every rule and accumulate ALL invalid fields.
    ///
    /// Returns `Validation::Success(())` when every field passed, otherwise
    /// a failure holding every invalid field.
    pub fn check(&self) -> Validation<(), NonEmptyVec<FieldErrorMessages>> {
        let checks: Vec<Validation<(), NonEmptyVec<FieldErrorMessages>>> = self
            .execute()
            .into_iter()
            .map(|result| match result.into_error_messages() {
                Some(errors) => Validation::fail(errors),
                None => Validation::success(()),
            })
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate the subject, consuming the session.
    ///
    /// Succeeds silently when every field passed. Otherwise returns a
    /// [`ValidationFailedError`] listing each invalid field with the messages
    /// of its failing rules, in attachment order.
    pub fn finalize(self) -> Result<(), ValidationFailedError> {
        match self.check() {
            Validation::Success(_) => {
                tracing::debug!(session_id = %self.id, "All fields valid");
                Ok(())
            }
            Validation::Failure(errors) => {
                tracing::debug!(
                    session_id = %self.id,
                    invalid_fields = errors.len(),
                    "Validation failed"
                );
                Err(ValidationFailedError::new(errors))
            }
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for ValidationSession<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationSession")
            .field("id", &self.id)
            .field("subject", &self.subject)
            .field("config", &self.config)
            .field("fields", &self.field_names().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Outcome, Rule};

    #[derive(Clone, Debug, PartialEq)]
    struct UserMock {
        name: String,
        last_name: String,
        nickname: Option<String>,
        birthday: (i32, u32, u32),
    }

    fn john_doe() -> UserMock {
        UserMock {
            name: "John".to_string(),
            last_name: "Doe".to_string(),
            nickname: None,
            birthday: (2000, 1, 1),
        }
    }

    fn pass<V: 'static>() -> Rule<V> {
        Rule::new(|_| Outcome::valid())
    }

    fn fail<V: 'static>(message: &'static str) -> Rule<V> {
        Rule::new(move |_| Outcome::invalid(message))
    }

    #[test]
    fn field_captures_accessor_value() {
        let builder = ValidationSession::new(john_doe()).field("name", |u| u.name.clone());

        assert_eq!(builder.name(), "name");
        assert_eq!(builder.value().map(String::as_str), Some("John"));
    }

    #[test]
    fn field_opt_captures_none_as_absent() {
        let builder =
            ValidationSession::new(john_doe()).field_opt("nickname", |u| u.nickname.clone());

        assert_eq!(builder.value(), None);
    }

    #[test]
    fn try_field_recovers_missing_values() {
        let builder = ValidationSession::new(john_doe())
            .try_field("name", |_| Err::<String, _>(CaptureError::Missing))
            .unwrap();
        assert_eq!(builder.value(), None);

        let builder = ValidationSession::new(john_doe())
            .try_field("name", |_| {
                Err::<String, _>(CaptureError::NoSuchElement("no value present".into()))
            })
            .unwrap();
        assert_eq!(builder.value(), None);
    }

    #[test]
    fn try_field_propagates_other_errors() {
        let result = ValidationSession::new(john_doe())
            .try_field("name", |_| Err::<String, _>(CaptureError::other("boom")));

        match result {
            Err(ValidatorError::Capture { field, source }) => {
                assert_eq!(field, "name");
                assert!(!source.is_absence());
                assert_eq!(source.to_string(), "boom");
            }
            other => panic!(
                "Expected capture error, got {:?}",
                other.map(|b| b.name().to_string())
            ),
        }
    }

    #[test]
    fn add_field_registers_binding() {
        let binding = FieldBinding::new(Field::new("name", "John".to_string()));
        let session = ValidationSession::new(john_doe())
            .add_field(binding)
            .unwrap();

        assert!(session.contains_field("name"));
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn add_field_rejects_duplicate_name() {
        let session = ValidationSession::new(john_doe())
            .add_field(FieldBinding::new(Field::new("name", "John".to_string())))
            .unwrap();

        let error = session
            .add_field(FieldBinding::new(Field::new("name", 7_u32)))
            .unwrap_err();
        assert_eq!(error, DuplicateFieldError::new("name"));
    }

    #[test]
    fn finalize_succeeds_when_all_rules_pass() {
        let result = ValidationSession::new(john_doe())
            .field("name", |u| u.name.clone())
            .add(pass())
            .end()
            .unwrap()
            .field("lastName", |u| u.last_name.clone())
            .add(pass())
            .end()
            .unwrap()
            .finalize();

        assert_eq!(result, Ok(()));
    }

    #[test]
    fn finalize_reports_failing_fields_only() {
        let error = ValidationSession::new(john_doe())
            .field("name", |u| u.name.clone())
            .add(pass())
            .end()
            .unwrap()
            .field("lastName", |u| u.last_name.clone())
            .add(pass())
            .end()
            .unwrap()
            .field("birthday", |u| u.birthday)
            .add(pass())
            .add(fail("Invalid date"))
            .end()
            .unwrap()
            .finalize()
            .unwrap_err();

        assert_eq!(error.message(), "there are invalid fields");
        assert_eq!(
            error.field_errors(),
            &[FieldErrorMessages::new("birthday", vec!["Invalid date".to_string()])]
        );
    }

    #[test]
    fn check_accumulates_every_invalid_field() {
        let session = ValidationSession::with_config(john_doe(), ValidatorConfig::sequential())
            .field("name", |u| u.name.clone())
            .add(fail("name"))
            .end()
            .unwrap()
            .field("lastName", |u| u.last_name.clone())
            .add(fail("lastName"))
            .end()
            .unwrap();

        match session.check() {
            Validation::Failure(errors) => assert_eq!(errors.len(), 2),
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn empty_session_is_valid() {
        let session = ValidationSession::new(john_doe());

        assert!(session.is_empty());
        assert!(session.check().is_success());
        assert!(session.finalize().is_ok());
    }

    #[test]
    fn execute_reports_fields_in_declaration_order() {
        let session = ValidationSession::new(john_doe())
            .field("b", |u| u.name.clone())
            .end()
            .unwrap()
            .field("a", |u| u.last_name.clone())
            .add(fail("x"))
            .end()
            .unwrap();

        let names: Vec<_> = session
            .execute()
            .iter()
            .map(|r| r.field_name().to_string())
            .collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(session.field_names().collect::<Vec<_>>(), vec!["b", "a"]);
    }
}
