//! Field bindings and their execution.
//!
//! A [`FieldBinding`] couples one captured [`Field`] with the ordered rules
//! attached to it. Sessions hold bindings of many value types at once, so
//! they only see them through the type-erased [`FieldExecutor`] capability.

use crate::builder::error::FieldErrorMessages;
use crate::core::{Field, Outcome, Rule};
use crate::execution::config::ExecutionMode;
use rayon::prelude::*;

/// Outcomes of every rule attached to one field, in attachment order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldExecutionResult {
    field_name: String,
    outcomes: Vec<Outcome>,
}

impl FieldExecutionResult {
    pub fn new(field_name: impl Into<String>, outcomes: Vec<Outcome>) -> Self {
        Self {
            field_name: field_name.into(),
            outcomes,
        }
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// True when every outcome passed. A field without rules is vacuously valid.
    pub fn is_valid(&self) -> bool {
        self.outcomes.iter().all(Outcome::is_valid)
    }

    /// Messages of the failing outcomes, in attachment order.
    pub fn failure_messages(&self) -> Vec<String> {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.message().map(str::to_string))
            .collect()
    }

    /// Per-field error entry, or `None` if the field passed.
    pub fn into_error_messages(self) -> Option<FieldErrorMessages> {
        if self.is_valid() {
            return None;
        }
        let messages = self.failure_messages();
        Some(FieldErrorMessages::new(self.field_name, messages))
    }
}

/// Type-erased view of a binding, uniform across value types.
pub trait FieldExecutor: Send + Sync {
    /// Name of the bound field.
    fn name(&self) -> &str;

    /// Number of attached rules.
    fn rule_count(&self) -> usize;

    /// Run every attached rule and collect one outcome per rule.
    fn execute(&self, mode: ExecutionMode) -> FieldExecutionResult;
}

/// One field and the ordered rules attached to it.
///
/// # Example
///
/// ```rust
/// use fieldcheck::core::{Field, Outcome, Rule};
/// use fieldcheck::execution::{ExecutionMode, FieldBinding};
///
/// let mut binding = FieldBinding::new(Field::new("age", 15_u32));
/// binding.add_rule(Rule::predicate(|v: Option<&u32>| v.is_some(), "required"));
/// binding.add_rule(Rule::predicate(|v: Option<&u32>| v.is_some_and(|a| *a >= 18), "too young"));
///
/// let result = binding.execute(ExecutionMode::Sequential);
/// assert_eq!(result.outcomes(), &[Outcome::valid(), Outcome::invalid("too young")]);
/// ```
#[derive(Debug)]
pub struct FieldBinding<V> {
    field: Field<V>,
    rules: Vec<Rule<V>>,
}

impl<V> FieldBinding<V> {
    pub fn new(field: Field<V>) -> Self {
        Self {
            field,
            rules: Vec::new(),
        }
    }

    pub fn field(&self) -> &Field<V> {
        &self.field
    }

    pub fn name(&self) -> &str {
        self.field.name()
    }

    pub fn rules(&self) -> &[Rule<V>] {
        &self.rules
    }

    /// Append a rule. Rules are never de-duplicated.
    pub fn add_rule(&mut self, rule: Rule<V>) {
        self.rules.push(rule);
    }
}

impl<V: Send + Sync> FieldBinding<V> {
    /// Run every rule against the captured value.
    ///
    /// In parallel mode the rules run on the rayon pool; `collect` keeps the
    /// outcomes in attachment order and only returns once all rules finished.
    pub fn execute(&self, mode: ExecutionMode) -> FieldExecutionResult {
        let value = self.field.value();
        let outcomes: Vec<Outcome> = match mode {
            ExecutionMode::Parallel => self
                .rules
                .par_iter()
                .map(|rule| rule.check(value))
                .collect(),
            ExecutionMode::Sequential => self.rules.iter().map(|rule| rule.check(value)).collect(),
        };
        FieldExecutionResult::new(self.field.name(), outcomes)
    }
}

impl<V: Send + Sync> FieldExecutor for FieldBinding<V> {
    fn name(&self) -> &str {
        self.field.name()
    }

    fn rule_count(&self) -> usize {
        self.rules.len()
    }

    fn execute(&self, mode: ExecutionMode) -> FieldExecutionResult {
        FieldBinding::execute(self, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn fail(message: &'static str) -> Rule<String> {
        Rule::new(move |_| Outcome::invalid(message))
    }

    fn pass() -> Rule<String> {
        Rule::new(|_| Outcome::valid())
    }

    #[test]
    fn field_without_rules_is_vacuously_valid() {
        let binding = FieldBinding::new(Field::new("name", "John".to_string()));

        for mode in [ExecutionMode::Parallel, ExecutionMode::Sequential] {
            let result = binding.execute(mode);
            assert!(result.outcomes().is_empty());
            assert!(result.is_valid());
            assert_eq!(result.into_error_messages(), None);
        }
    }

    #[test]
    fn outcomes_follow_attachment_order() {
        let mut binding = FieldBinding::new(Field::new("name", "John".to_string()));
        binding.add_rule(fail("A"));
        binding.add_rule(pass());
        binding.add_rule(fail("B"));

        for mode in [ExecutionMode::Parallel, ExecutionMode::Sequential] {
            let result = binding.execute(mode);
            let (a, b) = (Outcome::invalid("A"), Outcome::invalid("B"));
            assert_eq!(result.outcomes(), &[a, Outcome::valid(), b]);
            assert_eq!(result.failure_messages(), vec!["A", "B"]);
        }
    }

    #[test]
    fn same_rule_attached_twice_runs_twice() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let rule = Rule::new(move |_: Option<&u8>| {
            counter.fetch_add(1, Ordering::SeqCst);
            Outcome::invalid("dup")
        });

        let mut binding = FieldBinding::new(Field::new("n", 1_u8));
        binding.add_rule(rule.clone());
        binding.add_rule(rule);

        let result = binding.execute(ExecutionMode::Parallel);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(result.failure_messages(), vec!["dup", "dup"]);
    }

    #[test]
    fn rules_receive_absent_value() {
        let mut binding: FieldBinding<String> = FieldBinding::new(Field::absent("email"));
        binding.add_rule(Rule::predicate(|v| v.is_some(), "required"));

        let entry = binding
            .execute(ExecutionMode::Sequential)
            .into_error_messages()
            .unwrap();
        assert_eq!(entry.field_name, "email");
        assert_eq!(entry.messages, vec!["required"]);
    }

    #[test]
    fn executor_view_matches_binding() {
        let mut binding = FieldBinding::new(Field::new("age", 3_i64));
        binding.add_rule(Rule::predicate(|v: Option<&i64>| v.is_some(), "required"));
        let executor: Box<dyn FieldExecutor> = Box::new(binding);

        assert_eq!(executor.name(), "age");
        assert_eq!(executor.rule_count(), 1);
        assert!(executor.execute(ExecutionMode::Parallel).is_valid());
    }
}
