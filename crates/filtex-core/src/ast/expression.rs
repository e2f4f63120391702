//! Single field/operator/value comparisons

use super::operator::Operator;
use crate::config::ValidationMode;
use crate::error::{CoreError, Result};
use crate::types::Value;
use serde::{Deserialize, Serialize};

/// One atomic comparison
///
/// An `Expression` can only be obtained through [`Expression::new`] (or the
/// parsers and deserializers built on it), so its value always matches the
/// shape its operator requires.
///
/// Wire form: `{ "key": "age", "operator": "gt", "value": 18, "not": 0 }`.
/// The `value` field is left out when the value is [`Value::Absent`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawExpression")]
pub struct Expression {
    key: String,
    operator: Operator,
    #[serde(skip_serializing_if = "Value::is_absent")]
    value: Value,
    #[serde(rename = "not", with = "crate::ast::flag")]
    negated: bool,
}

impl Expression {
    /// Create a validated expression
    pub fn new(
        key: impl Into<String>,
        operator: Operator,
        value: impl Into<Value>,
        negated: bool,
    ) -> Result<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(CoreError::InvalidKey(key));
        }

        let value = value.into();
        operator.check_value(&value)?;

        Ok(Self {
            key,
            operator,
            value,
            negated,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// True when the operator carried the `not_` marker
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Shared structural predicate for plain data.
    ///
    /// Holds when `value` is an object with a non-empty string `key`, a
    /// string `operator` from the fixed set and, in strict mode, a `not`
    /// flag. A missing `value` entry reads as [`Value::Absent`], the same as
    /// on the serde path. The value shape is not checked here.
    pub fn is_expression(value: &Value, mode: ValidationMode) -> bool {
        inspect(value, mode).is_ok()
    }

    /// Upgrade plain data into a validated expression
    pub fn from_value(value: &Value, mode: ValidationMode) -> Result<Self> {
        let (key, operator, payload, negated) = inspect(value, mode)?;
        Self::new(key, operator, payload, negated)
    }
}

fn inspect(value: &Value, mode: ValidationMode) -> Result<(&str, Operator, Value, bool)> {
    let map = value.as_object().ok_or_else(|| {
        CoreError::NotAnExpression(format!("expected object, got {}", value.type_name()))
    })?;

    let key = map
        .get("key")
        .and_then(Value::as_str)
        .filter(|key| !key.is_empty())
        .ok_or_else(|| CoreError::NotAnExpression("missing string 'key'".to_string()))?;

    let operator = map
        .get("operator")
        .and_then(Value::as_str)
        .ok_or_else(|| CoreError::NotAnExpression("missing string 'operator'".to_string()))?
        .parse::<Operator>()?;

    let payload = map.get("value").cloned().unwrap_or_default();

    let negated = match map.get("not") {
        Some(flag) => flag.as_flag().ok_or_else(|| {
            CoreError::NotAnExpression(format!("'not' must be 0 or 1, got {}", flag.type_name()))
        })?,
        None if mode.is_strict() => {
            return Err(CoreError::NotAnExpression("missing 'not' flag".to_string()));
        }
        None => false,
    };

    Ok((key, operator, payload, negated))
}

#[derive(Deserialize)]
struct RawExpression {
    key: String,
    operator: Operator,
    #[serde(default)]
    value: Value,
    #[serde(rename = "not", with = "crate::ast::flag")]
    negated: bool,
}

impl TryFrom<RawExpression> for Expression {
    type Error = CoreError;

    fn try_from(raw: RawExpression) -> Result<Self> {
        Expression::new(raw.key, raw.operator, raw.value, raw.negated)
    }
}
