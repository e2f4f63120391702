//! Flat logical groups of expressions

use super::expression::Expression;
use crate::config::ValidationMode;
use crate::error::{CoreError, Result};
use crate::types::Value;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Logical group operation type
///
/// Written on the wire as the `or` flag: `All` is `0`, `Any` is `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogicalGroupOp {
    /// All expressions must hold (AND logic)
    #[default]
    All,
    /// At least one expression must hold (OR logic)
    Any,
}

impl LogicalGroupOp {
    pub fn is_any(&self) -> bool {
        matches!(self, LogicalGroupOp::Any)
    }

    /// Keyword that joins expressions of this kind in a group template
    pub fn keyword(&self) -> &'static str {
        match self {
            LogicalGroupOp::All => "and",
            LogicalGroupOp::Any => "or",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "and" => Some(LogicalGroupOp::All),
            "or" => Some(LogicalGroupOp::Any),
            _ => None,
        }
    }
}

impl From<bool> for LogicalGroupOp {
    fn from(any: bool) -> Self {
        if any {
            LogicalGroupOp::Any
        } else {
            LogicalGroupOp::All
        }
    }
}

impl Serialize for LogicalGroupOp {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        super::flag::serialize(&self.is_any(), serializer)
    }
}

impl<'de> Deserialize<'de> for LogicalGroupOp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        super::flag::deserialize(deserializer).map(LogicalGroupOp::from)
    }
}

/// Flat conjunction or disjunction of one or more expressions
///
/// Wire form: `{ "or": 0, "filters": [ ... ] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGroup")]
pub struct Group {
    #[serde(rename = "or")]
    op: LogicalGroupOp,
    filters: Vec<Expression>,
}

impl Group {
    /// Create a group, failing on an empty expression list
    pub fn new(op: LogicalGroupOp, filters: Vec<Expression>) -> Result<Self> {
        if filters.is_empty() {
            return Err(CoreError::EmptyGroup);
        }
        Ok(Self { op, filters })
    }

    /// Wrap a single expression in a conjunction group
    pub fn singleton(expression: Expression) -> Self {
        Self {
            op: LogicalGroupOp::All,
            filters: vec![expression],
        }
    }

    pub fn op(&self) -> LogicalGroupOp {
        self.op
    }

    pub fn filters(&self) -> &[Expression] {
        &self.filters
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Always false; kept for the `len`/`is_empty` pair
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn into_filters(self) -> Vec<Expression> {
        self.filters
    }

    /// Structural predicate for plain-data groups: an object with a
    /// `filters` array of expressions and, in strict mode, an `or` flag
    pub fn is_group(value: &Value, mode: ValidationMode) -> bool {
        Self::from_value(value, mode).is_ok()
    }

    /// Upgrade plain data into a validated group
    pub fn from_value(value: &Value, mode: ValidationMode) -> Result<Self> {
        let map = value.as_object().ok_or_else(|| {
            CoreError::NotAGroup(format!("expected object, got {}", value.type_name()))
        })?;

        let op = match map.get("or") {
            Some(flag) => flag.as_flag().map(LogicalGroupOp::from).ok_or_else(|| {
                CoreError::NotAGroup(format!("'or' must be 0 or 1, got {}", flag.type_name()))
            })?,
            None if mode.is_strict() => {
                return Err(CoreError::NotAGroup("missing 'or' flag".to_string()));
            }
            None => LogicalGroupOp::All,
        };

        let filters = map
            .get("filters")
            .and_then(Value::as_array)
            .ok_or_else(|| CoreError::NotAGroup("missing 'filters' array".to_string()))?
            .iter()
            .map(|item| Expression::from_value(item, mode))
            .collect::<Result<Vec<_>>>()?;

        Self::new(op, filters)
    }
}

impl From<Expression> for Group {
    fn from(expression: Expression) -> Self {
        Group::singleton(expression)
    }
}

#[derive(Deserialize)]
struct RawGroup {
    #[serde(rename = "or")]
    op: LogicalGroupOp,
    filters: Vec<Expression>,
}

impl TryFrom<RawGroup> for Group {
    type Error = CoreError;

    fn try_from(raw: RawGroup) -> Result<Self> {
        Group::new(raw.op, raw.filters)
    }
}
