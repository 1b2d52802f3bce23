//! Rule predicates evaluated against captured field values.
//!
//! A rule is a pure function from a possibly absent value to an
//! [`Outcome`]. Rules are shared behind an `Arc`, so one rule can be
//! attached to many fields, or to the same field several times.

use super::outcome::Outcome;
use std::fmt;
use std::sync::Arc;

type RuleFn<V> = Arc<dyn Fn(Option<&V>) -> Outcome + Send + Sync>;

/// Pure check over one field value.
///
/// The value is `None` when the field was captured as absent, so every rule
/// decides for itself whether absence passes.
///
/// # Example
///
/// ```rust
/// use fieldcheck::core::{Outcome, Rule};
///
/// let adult = Rule::new(|age: Option<&u32>| match age {
///     Some(age) if *age >= 18 => Outcome::valid(),
///     _ => Outcome::invalid("must be an adult"),
/// });
///
/// assert!(adult.check(Some(&30)).is_valid());
/// assert!(adult.check(Some(&12)).is_invalid());
/// assert!(adult.check(None).is_invalid());
/// ```
pub struct Rule<V> {
    check: RuleFn<V>,
}

impl<V> Rule<V> {
    /// Create a rule from a pure function.
    ///
    /// The function must be deterministic, side-effect free and thread-safe
    /// (Send + Sync): it may run on a worker thread alongside other rules
    /// reading the same value.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(Option<&V>) -> Outcome + Send + Sync + 'static,
    {
        Rule {
            check: Arc::new(check),
        }
    }

    /// Create a rule from a boolean predicate and a failure message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fieldcheck::core::Rule;
    ///
    /// let present = Rule::predicate(|v: Option<&String>| v.is_some(), "required");
    ///
    /// assert!(present.check(Some(&"x".to_string())).is_valid());
    /// assert_eq!(present.check(None).message(), Some("required"));
    /// ```
    pub fn predicate<F>(predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(Option<&V>) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        Self::new(move |value| Outcome::from_check(predicate(value), &message))
    }

    /// Run the rule against a value.
    pub fn check(&self, value: Option<&V>) -> Outcome {
        (self.check)(value)
    }
}

impl<V> Clone for Rule<V> {
    fn clone(&self) -> Self {
        Rule {
            check: Arc::clone(&self.check),
        }
    }
}

impl<V> fmt::Debug for Rule<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").finish_non_exhaustive()
    }
}
