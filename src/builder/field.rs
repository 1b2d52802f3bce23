//! Builder for attaching rules to one declared field.

use crate::builder::error::DuplicateFieldError;
use crate::builder::session::ValidationSession;
use crate::core::{Outcome, Rule};
use crate::execution::FieldBinding;

/// The open-field state of a session's fluent API.
///
/// Holds the session while rules are attached; [`end`](Self::end) closes the
/// field into the session and hands the session back. Since the session is
/// not reachable while a field is open, it cannot be finalized with a field
/// left dangling.
#[derive(Debug)]
pub struct FieldBuilder<E, V> {
    session: ValidationSession<E>,
    binding: FieldBinding<V>,
}

impl<E, V> FieldBuilder<E, V> {
    pub(crate) fn new(session: ValidationSession<E>, binding: FieldBinding<V>) -> Self {
        Self { session, binding }
    }

    /// Name of the field being declared.
    pub fn name(&self) -> &str {
        self.binding.name()
    }

    /// Captured value, `None` if absent.
    pub fn value(&self) -> Option<&V> {
        self.binding.field().value()
    }

    /// Number of rules attached so far.
    pub fn rule_count(&self) -> usize {
        self.binding.rules().len()
    }

    /// Attach a rule.
    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, rule: Rule<V>) -> Self {
        self.binding.add_rule(rule);
        self
    }

    /// Attach a rule using a closure.
    pub fn add_fn<F>(self, check: F) -> Self
    where
        F: Fn(Option<&V>) -> Outcome + Send + Sync + 'static,
    {
        self.add(Rule::new(check))
    }

    /// Attach several rules, keeping their order.
    pub fn add_all<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = Rule<V>>,
    {
        for rule in rules {
            self.binding.add_rule(rule);
        }
        self
    }
}

impl<E, V: Send + Sync + 'static> FieldBuilder<E, V> {
    /// Close the field into the session.
    ///
    /// Returns [`DuplicateFieldError`] if the session already holds a field
    /// with this name.
    pub fn end(self) -> Result<ValidationSession<E>, DuplicateFieldError> {
        self.session.add_field(self.binding)
    }
}
