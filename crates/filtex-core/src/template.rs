//! Literal text interleaved with interpolated values
//!
//! A `Template` has the shape of a tagged template literal: `n` values sit
//! between `n + 1` literal segments. `"age gt ", 18, ""` is the template for
//! `age gt ${18}`.

use crate::ast::expression::Expression;
use crate::error::{CoreError, Result};
use crate::types::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct Template<T> {
    segments: Vec<String>,
    values: Vec<T>,
}

impl<T> Template<T> {
    /// Empty template: one empty segment, no values
    pub fn new() -> Self {
        Self::literal("")
    }

    /// Template made of literal text only
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            segments: vec![text.into()],
            values: Vec::new(),
        }
    }

    /// Build from pre-split parts; there must be exactly one more segment
    /// than values
    pub fn from_parts(segments: Vec<String>, values: Vec<T>) -> Result<Self> {
        if segments.len() != values.len() + 1 {
            return Err(CoreError::MalformedTemplate {
                segments: segments.len(),
                values: values.len(),
            });
        }
        Ok(Self { segments, values })
    }

    /// Append literal text to the trailing segment
    pub fn text(mut self, text: &str) -> Self {
        if let Some(last) = self.segments.last_mut() {
            last.push_str(text);
        }
        self
    }

    /// Interpolate a value and open a new trailing segment
    pub fn value(mut self, value: impl Into<T>) -> Self {
        self.values.push(value.into());
        self.segments.push(String::new());
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Text before the first interpolation
    pub fn head(&self) -> &str {
        self.segments.first().map_or("", String::as_str)
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<T>) {
        (self.segments, self.values)
    }
}

impl<T> Default for Template<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Interpolation inside a group template
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    /// Already parsed expression
    Expression(Expression),
    /// Raw data; only accepted when it upgrades into an expression
    Value(Value),
}

impl From<Expression> for Fragment {
    fn from(expression: Expression) -> Self {
        Fragment::Expression(expression)
    }
}

impl From<Value> for Fragment {
    fn from(value: Value) -> Self {
        Fragment::Value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_segment_invariant() {
        let template: Template<Value> = Template::literal("age gt ").value(18);
        assert_eq!(template.segments(), &["age gt ".to_string(), String::new()]);
        assert_eq!(template.values(), &[Value::from(18)]);
        assert_eq!(template.head(), "age gt ");
    }

    #[test]
    fn test_text_appends_to_trailing_segment() {
        let template: Template<Value> = Template::new().text("age").text(" gt ").value(1).text(" ");
        assert_eq!(template.segments(), &["age gt ".to_string(), " ".to_string()]);
    }

    #[test]
    fn test_from_parts() {
        let template =
            Template::from_parts(vec!["a eq ".to_string(), String::new()], vec![Value::from(1)])
                .unwrap();
        assert_eq!(template.values().len(), 1);

        let err = Template::<Value>::from_parts(vec!["a eq ".to_string()], vec![Value::from(1)])
            .unwrap_err();
        assert_eq!(err, CoreError::MalformedTemplate { segments: 1, values: 1 });
    }

    #[test]
    fn test_into_parts() {
        let (segments, values) = Template::<Value>::literal("x").into_parts();
        assert_eq!(segments, vec!["x".to_string()]);
        assert!(values.is_empty());
    }
}
