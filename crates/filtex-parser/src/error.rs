//! Parser error types

use filtex_core::CoreError;
use thiserror::Error;

/// Expression parser error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Zero or more than one interpolated value
    #[error("only a single expression is supported (got {found} values)")]
    Arity { found: usize },

    /// Literal text does not read `key [not_]operator`
    #[error("invalid expression - missing key or operator: '{0}'")]
    InvalidExpression(String),

    /// Value does not fit the operator, or another model violation
    #[error(transparent)]
    InvalidValue(#[from] CoreError),
}

/// Group assembler error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GroupError {
    /// No expressions interpolated
    #[error("group may not be empty")]
    Empty,

    /// An interpolation is not an expression
    #[error("all values must be expressions (value {position}: {reason})")]
    NotAnExpression { position: usize, reason: String },

    /// Literal text other than `and` / `or`
    #[error("unknown logical keyword: '{0}'")]
    UnknownKeyword(String),

    /// Both `and` and `or` used in one group
    #[error("cannot parse logical expressions - mixed operators")]
    MixedOperators,
}

/// Result type for expression parsing
pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;
    use filtex_core::Operator;

    #[test]
    fn test_arity_message() {
        let err = ParseError::Arity { found: 2 };
        assert!(err.to_string().contains("only a single expression is supported"));
    }

    #[test]
    fn test_invalid_value_is_transparent() {
        let err: ParseError = CoreError::RequiresNonEmptyArray { operator: Operator::In }.into();
        assert_eq!(err.to_string(), "operator 'in' requires a non-empty array value");
    }

    #[test]
    fn test_group_messages() {
        assert_eq!(GroupError::Empty.to_string(), "group may not be empty");
        assert_eq!(
            GroupError::MixedOperators.to_string(),
            "cannot parse logical expressions - mixed operators"
        );
        let err = GroupError::NotAnExpression {
            position: 0,
            reason: "expected object, got string".to_string(),
        };
        assert!(err.to_string().starts_with("all values must be expressions"));
    }
}
