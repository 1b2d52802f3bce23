//! Session factory and reusable validation declarations.

use crate::builder::error::ValidatorError;
use crate::builder::session::ValidationSession;
use crate::execution::ValidatorConfig;

/// Creates sessions that share one configuration.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{ValidatorConfig, ValidatorFactory};
///
/// let factory = ValidatorFactory::new(ValidatorConfig::sequential());
/// let session = factory.create(("John", "Doe"));
///
/// assert_eq!(session.config(), factory.config());
/// assert!(session.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ValidatorFactory {
    config: ValidatorConfig,
}

impl ValidatorFactory {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Open a session over `subject`.
    pub fn create<E>(&self, subject: E) -> ValidationSession<E> {
        ValidationSession::with_config(subject, self.config.clone())
    }
}

/// A type that declares and runs its own validation.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{rules, Validate, ValidatorError, ValidatorFactory};
///
/// struct Signup {
///     email: String,
/// }
///
/// impl Validate for Signup {
///     fn validate(&self, factory: &ValidatorFactory) -> Result<(), ValidatorError> {
///         factory
///             .create(self)
///             .field("email", |s| s.email.clone())
///             .add(rules::not_blank("email is required"))
///             .add(rules::email("email is malformed"))
///             .end()?
///             .finalize()?;
///         Ok(())
///     }
/// }
///
/// let factory = ValidatorFactory::default();
/// assert!(Signup { email: "john@doe.com".into() }.validate(&factory).is_ok());
/// assert!(Signup { email: "john@".into() }.validate(&factory).is_err());
/// ```
pub trait Validate {
    fn validate(&self, factory: &ValidatorFactory) -> Result<(), ValidatorError>;
}
