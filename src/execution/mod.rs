//! Rule execution for captured fields.
//!
//! Bindings run their rules either on the rayon pool or on the calling
//! thread. In both modes outcomes come back in attachment order, and a
//! call returns only after every rule has finished.

pub mod binding;
pub mod config;

pub use binding::{FieldBinding, FieldExecutionResult, FieldExecutor};
pub use config::{ExecutionMode, ValidatorConfig};
