//! Ready-made rules.
//!
//! Every function here returns a [`Rule`](crate::core::Rule) and takes the
//! message reported on failure. Apart from the presence checks, rules treat
//! an absent or blank value as passing, so "required" is always expressed
//! explicitly with [`is_some`] or [`not_blank`].
//!
//! # Example
//!
//! ```rust
//! use fieldcheck::rules;
//!
//! let password = rules::length_min::<String>(8, "too short");
//!
//! assert!(password.check(Some(&"correct horse".to_string())).is_valid());
//! assert!(password.check(Some(&"abc".to_string())).is_invalid());
//! assert!(password.check(None).is_valid());
//! ```

mod compare;
mod documents;
mod presence;
mod strings;

pub use compare::{eq, max, min};
pub use documents::{cep, cnpj, cpf};
pub use presence::{is_none, is_some};
pub use strings::{
    blank, email, length_eq, length_max, length_min, not_blank, only_numbers, EMAIL_PATTERN,
};
