//! Expression parser
//!
//! Parses `key [not_]operator` text plus one interpolated value into an
//! [`Expression`].
//!
//! Supported syntax:
//! - Key: one or more ASCII word characters (`age`, `some_name`, `field1`)
//! - Operator: `sw`, `ew`, `ct`, `eq`, `gt`, `gte`, `lt`, `lte`, `in`, `bt`
//! - Negation: `not_` directly before the operator (`status not_eq`)
//!
//! Whitespace and newlines around the tokens are ignored. The value sits
//! after the operator and is never part of the text.

use crate::error::{ParseError, Result};
use filtex_core::{Expression, Operator, Template, Value};
use regex::Regex;
use std::sync::OnceLock;

const EXPRESSION_PATTERN: &str =
    r"^\s*([A-Za-z0-9_]+)\s+(not_)?(sw|ew|ct|eq|gte|gt|lte|lt|in|bt)\s*$";

fn expression_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(EXPRESSION_PATTERN).expect("expression pattern compiles"))
}

/// Expression parser
pub struct ExpressionParser;

impl ExpressionParser {
    /// Parse an expression from a template holding exactly one value
    pub fn parse(template: Template<Value>) -> Result<Expression> {
        let (segments, mut values) = template.into_parts();
        log::trace!("parsing expression from {:?} with {} values", segments, values.len());

        if values.len() != 1 {
            return Err(ParseError::Arity { found: values.len() });
        }
        let value = values.remove(0);

        let head = segments.first().map_or("", String::as_str);
        if segments.iter().skip(1).any(|tail| !tail.trim().is_empty()) {
            return Err(ParseError::InvalidExpression(segments.join("${}")));
        }

        let captures = expression_pattern()
            .captures(head)
            .ok_or_else(|| ParseError::InvalidExpression(head.to_string()))?;

        let key = &captures[1];
        let negated = captures.get(2).is_some();
        let operator: Operator = captures[3].parse()?;

        let expression = Expression::new(key, operator, value, negated)?;
        log::debug!(
            "parsed expression: {} {}{}",
            expression.key(),
            if negated { "not_" } else { "" },
            operator
        );
        Ok(expression)
    }

    /// Parse `text` followed by a single value
    pub fn parse_str(text: &str, value: impl Into<Value>) -> Result<Expression> {
        Self::parse(Template::literal(text).value(value))
    }
}
