//! Error types for filtex core

use crate::ast::operator::Operator;
use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("unknown operator: {0}")]
    UnknownOperator(String),

    #[error("invalid key: '{0}'")]
    InvalidKey(String),

    #[error("operator '{operator}' requires a string value")]
    RequiresString { operator: Operator },

    #[error("operator '{operator}': complex value not allowed")]
    ComplexValue { operator: Operator },

    #[error("operator '{operator}' requires a non-empty array value")]
    RequiresNonEmptyArray { operator: Operator },

    #[error("operator '{operator}' requires a two-element array-like value")]
    RequiresPair { operator: Operator },

    #[error("group may not be empty")]
    EmptyGroup,

    #[error("not an expression: {0}")]
    NotAnExpression(String),

    #[error("not a group: {0}")]
    NotAGroup(String),

    #[error("not an expression or group: {0}")]
    NotAnItem(String),

    #[error("malformed template: {segments} segments for {values} values")]
    MalformedTemplate { segments: usize, values: usize },
}

pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_error_messages() {
        let err = CoreError::RequiresString { operator: Operator::StartsWith };
        assert_eq!(err.to_string(), "operator 'sw' requires a string value");

        let err = CoreError::RequiresPair { operator: Operator::Between };
        assert!(err.to_string().contains("two-element array-like"));
    }

    #[test]
    fn test_malformed_template_message() {
        let err = CoreError::MalformedTemplate { segments: 1, values: 1 };
        assert_eq!(err.to_string(), "malformed template: 1 segments for 1 values");
    }
}
