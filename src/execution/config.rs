//! Engine configuration.

use serde::{Deserialize, Serialize};

/// How a session schedules rule evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    /// Evaluate fields and their rules on the rayon worker pool.
    #[default]
    Parallel,

    /// Evaluate everything on the calling thread, in declaration order.
    Sequential,
}

/// Settings shared by every session created from the same factory.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{ExecutionMode, ValidatorConfig};
///
/// let config = ValidatorConfig::new().mode(ExecutionMode::Sequential);
/// assert_eq!(config.mode, ExecutionMode::Sequential);
///
/// let loaded = ValidatorConfig::from_json(r#"{ "mode": "parallel" }"#).unwrap();
/// assert_eq!(loaded, ValidatorConfig::default());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    pub mode: ExecutionMode,
}

impl ValidatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the execution mode.
    pub fn mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Shorthand for single-threaded evaluation.
    pub fn sequential() -> Self {
        Self::new().mode(ExecutionMode::Sequential)
    }

    /// Parse a configuration document. Missing keys fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
