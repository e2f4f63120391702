//! Group parser
//!
//! Assembles already-parsed expressions joined by `and` / `or` into one flat
//! [`Group`]:
//!
//! ```text
//! ${email} and ${age}     -> { or: 0, filters: [email, age] }
//! ${a} or ${b} or ${c}    -> { or: 1, filters: [a, b, c] }
//! ${a}                    -> { or: 0, filters: [a] }
//! ${a} and ${b} or ${c}   -> error: mixed operators
//! ```
//!
//! The keyword check looks at the set of keywords used anywhere in the
//! template, not at their positions.

use crate::error::GroupError;
use filtex_core::{Expression, Fragment, Group, LogicalGroupOp, Template, ValidationMode};
use std::collections::BTreeSet;

/// Group parser
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupParser {
    /// Validation applied to raw `Fragment::Value` interpolations
    mode: ValidationMode,
}

impl GroupParser {
    /// Create a parser with strict validation
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: ValidationMode) -> Self {
        Self { mode }
    }

    /// Parse a group template with the default (strict) parser
    pub fn parse(template: Template<Fragment>) -> Result<Group, GroupError> {
        Self::new().assemble(template)
    }

    /// Assemble a group from literal keywords interleaved with expressions
    pub fn assemble(&self, template: Template<Fragment>) -> Result<Group, GroupError> {
        let (segments, fragments) = template.into_parts();
        log::trace!(
            "assembling group from {:?} with {} values",
            segments,
            fragments.len()
        );

        if fragments.is_empty() {
            return Err(GroupError::Empty);
        }

        let filters = fragments
            .into_iter()
            .enumerate()
            .map(|(position, fragment)| self.expression(position, fragment))
            .collect::<Result<Vec<_>, _>>()?;

        let op = Self::logical_op(&segments)?;
        let group = Group::new(op, filters).map_err(|_| GroupError::Empty)?;

        log::debug!(
            "assembled {} group with {} expressions",
            op.keyword(),
            group.len()
        );
        Ok(group)
    }

    fn expression(&self, position: usize, fragment: Fragment) -> Result<Expression, GroupError> {
        match fragment {
            Fragment::Expression(expression) => Ok(expression),
            Fragment::Value(value) => Expression::from_value(&value, self.mode).map_err(|err| {
                GroupError::NotAnExpression {
                    position,
                    reason: err.to_string(),
                }
            }),
        }
    }

    /// Resolve the combinator from the distinct keywords in the template
    fn logical_op(segments: &[String]) -> Result<LogicalGroupOp, GroupError> {
        let mut keywords = BTreeSet::new();
        for segment in segments {
            let keyword = segment.trim();
            if keyword.is_empty() {
                continue;
            }
            if LogicalGroupOp::from_keyword(keyword).is_none() {
                return Err(GroupError::UnknownKeyword(keyword.to_string()));
            }
            keywords.insert(keyword);
        }

        match keywords.len() {
            0 => Ok(LogicalGroupOp::All),
            1 => Ok(if keywords.contains("or") {
                LogicalGroupOp::Any
            } else {
                LogicalGroupOp::All
            }),
            _ => Err(GroupError::MixedOperators),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filtex_core::{Operator, Value};
    use serde_json::json;

    fn expr(key: &str) -> Expression {
        Expression::new(key, Operator::Eq, 1, false).unwrap()
    }

    #[test]
    fn test_single_expression_defaults_to_all() {
        let template: Template<Fragment> = Template::new().value(expr("a"));
        let group = GroupParser::parse(template).unwrap();
        assert_eq!(group.op(), LogicalGroupOp::All);
        assert_eq!(group.filters(), &[expr("a")]);
    }

    #[test]
    fn test_or_group() {
        let template: Template<Fragment> = Template::new().value(expr("a")).text(" or ").value(expr("b"));
        let group = GroupParser::parse(template).unwrap();
        assert_eq!(group.op(), LogicalGroupOp::Any);
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn test_empty_group() {
        assert_eq!(GroupParser::parse(Template::literal("and")), Err(GroupError::Empty));
        assert_eq!(GroupParser::parse(Template::new()), Err(GroupError::Empty));
    }

    #[test]
    fn test_mixed_operators_anywhere() {
        let template: Template<Fragment> = Template::literal("or ")
            .value(expr("a"))
            .text(" and ")
            .value(expr("b"));
        assert_eq!(GroupParser::parse(template), Err(GroupError::MixedOperators));
    }

    #[test]
    fn test_raw_value_rejected() {
        let template: Template<Fragment> = Template::new().value(Value::from("age gt 18"));
        assert!(matches!(
            GroupParser::parse(template),
            Err(GroupError::NotAnExpression { position: 0, .. })
        ));
    }

    #[test]
    fn test_raw_expression_data_upgraded() {
        let raw = Value::from(json!({"key": "a", "operator": "eq", "value": 1}));

        let strict: Template<Fragment> = Template::new().value(raw.clone());
        assert!(GroupParser::parse(strict).is_err());

        let lenient: Template<Fragment> = Template::new().value(raw);
        let group = GroupParser::with_mode(ValidationMode::Lenient)
            .assemble(lenient)
            .unwrap();
        assert_eq!(group.filters(), &[expr("a")]);
    }

    #[test]
    fn test_unknown_keyword() {
        let template: Template<Fragment> = Template::new().value(expr("a")).text(" xor ").value(expr("b"));
        assert_eq!(
            GroupParser::parse(template),
            Err(GroupError::UnknownKeyword("xor".to_string()))
        );
    }
}
