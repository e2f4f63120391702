//! Validation settings for the plain-data boundary

use serde::{Deserialize, Serialize};

/// How strictly plain data is checked before it is upgraded into typed
/// expressions and groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// `not` on expressions and `or` on groups must be present flags
    #[default]
    Strict,
    /// Missing `not`/`or` flags default to 0
    Lenient,
}

impl ValidationMode {
    pub fn is_strict(&self) -> bool {
        matches!(self, ValidationMode::Strict)
    }
}

/// Library configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Plain-data validation mode
    pub validation: ValidationMode,
}

impl FilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the validation mode
    pub fn with_validation(mut self, mode: ValidationMode) -> Self {
        self.validation = mode;
        self
    }
}
