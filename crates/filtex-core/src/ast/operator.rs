//! Comparison operators and the value shape each one requires

use crate::error::{CoreError, Result};
use crate::types::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Comparison operators, serialized as their short wire codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    // String operators
    /// Starts with (sw)
    #[serde(rename = "sw")]
    StartsWith,
    /// Ends with (ew)
    #[serde(rename = "ew")]
    EndsWith,
    /// Contains (ct)
    #[serde(rename = "ct")]
    Contains,

    // Comparison operators
    /// Equal (eq)
    #[serde(rename = "eq")]
    Eq,
    /// Greater than (gt)
    #[serde(rename = "gt")]
    Gt,
    /// Greater than or equal (gte)
    #[serde(rename = "gte")]
    Gte,
    /// Less than (lt)
    #[serde(rename = "lt")]
    Lt,
    /// Less than or equal (lte)
    #[serde(rename = "lte")]
    Lte,

    // Collection operators
    /// Membership (in)
    #[serde(rename = "in")]
    In,
    /// Between two bounds (bt)
    #[serde(rename = "bt")]
    Between,
}

/// Value shape an operator accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    /// A string
    String,
    /// A string, number, boolean or null
    Scalar,
    /// An array with at least one element
    NonEmptyArray,
    /// Something with positions 0 and 1: a two-element array, or an object
    /// with keys "0" and "1"
    Pair,
}

impl Operator {
    pub const ALL: [Operator; 10] = [
        Operator::StartsWith,
        Operator::EndsWith,
        Operator::Contains,
        Operator::Eq,
        Operator::Gt,
        Operator::Gte,
        Operator::Lt,
        Operator::Lte,
        Operator::In,
        Operator::Between,
    ];

    /// Wire code of the operator
    pub fn code(&self) -> &'static str {
        match self {
            Operator::StartsWith => "sw",
            Operator::EndsWith => "ew",
            Operator::Contains => "ct",
            Operator::Eq => "eq",
            Operator::Gt => "gt",
            Operator::Gte => "gte",
            Operator::Lt => "lt",
            Operator::Lte => "lte",
            Operator::In => "in",
            Operator::Between => "bt",
        }
    }

    /// Returns true if this is a string operator
    pub fn is_string(&self) -> bool {
        matches!(
            self,
            Operator::StartsWith | Operator::EndsWith | Operator::Contains
        )
    }

    /// Returns true if this is a comparison operator
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            Operator::Eq | Operator::Gt | Operator::Gte | Operator::Lt | Operator::Lte
        )
    }

    pub fn value_shape(&self) -> ValueShape {
        match self {
            Operator::StartsWith | Operator::EndsWith | Operator::Contains => ValueShape::String,
            Operator::Eq | Operator::Gt | Operator::Gte | Operator::Lt | Operator::Lte => {
                ValueShape::Scalar
            }
            Operator::In => ValueShape::NonEmptyArray,
            Operator::Between => ValueShape::Pair,
        }
    }

    /// Checks `value` against the shape this operator requires
    pub fn check_value(&self, value: &Value) -> Result<()> {
        let operator = *self;
        match self.value_shape() {
            ValueShape::String => match value {
                Value::String(_) => Ok(()),
                _ => Err(CoreError::RequiresString { operator }),
            },
            ValueShape::Scalar => {
                if value.is_scalar() {
                    Ok(())
                } else {
                    Err(CoreError::ComplexValue { operator })
                }
            }
            ValueShape::NonEmptyArray => match value {
                Value::Array(items) if !items.is_empty() => Ok(()),
                _ => Err(CoreError::RequiresNonEmptyArray { operator }),
            },
            ValueShape::Pair => match value {
                Value::Array(items) if items.len() == 2 => Ok(()),
                Value::Object(map) if map.contains_key("0") && map.contains_key("1") => Ok(()),
                _ => Err(CoreError::RequiresPair { operator }),
            },
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Operator {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Operator::ALL
            .iter()
            .find(|op| op.code() == s)
            .copied()
            .ok_or_else(|| CoreError::UnknownOperator(s.to_string()))
    }
}
