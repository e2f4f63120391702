//! Payload values carried by filter expressions
//!
//! The `Value` enum mirrors JSON with one addition: `Absent`, the
//! "no value supplied" marker. `Absent` and `Null` are kept apart because the
//! query-string serializer drops an absent value but writes an explicit null
//! as an empty string.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Expression payload
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// No value supplied
    #[default]
    #[serde(skip_deserializing)]
    Absent,
    /// Explicit null
    Null,
    /// Boolean value
    Bool(bool),
    /// Number value, integers stay integers on the wire
    Number(serde_json::Number),
    /// String value
    String(String),
    /// Array of values
    Array(Vec<Value>),
    /// Object (key-value map)
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Returns true for the "no value supplied" marker
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Returns true for string, number, boolean, null and absent values
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Value::Array(_) | Value::Object(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Short type name used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Absent => "absent",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// Reads a two-valued flag: `0`, `1`, `true` or `false`
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => match n.as_u64() {
                Some(0) => Some(false),
                Some(1) => Some(true),
                _ => None,
            },
            _ => None,
        }
    }

    /// Finite floats only; `None` for NaN and infinities
    pub fn from_f64(n: f64) -> Option<Self> {
        serde_json::Number::from_f64(n).map(Value::Number)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(serde_json::Number::from(n))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// NaN and infinities have no JSON form and convert to [`Value::Null`].
/// Use [`Value::from_f64`] to reject them instead.
impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::from_f64(n).unwrap_or(Value::Null)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::from(f64::from(n))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Object(map)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Absent | Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Number(n) => serde_json::Value::Number(n),
            Value::String(s) => serde_json::Value::String(s),
            Value::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            Value::Object(map) => {
                serde_json::Value::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_scalars() {
        assert!(Value::Absent.is_scalar());
        assert!(Value::Null.is_scalar());
        assert!(Value::from(true).is_scalar());
        assert!(Value::from(42).is_scalar());
        assert!(Value::from("hello").is_scalar());
        assert!(!Value::from(vec![1, 2]).is_scalar());
        assert!(!Value::Object(BTreeMap::new()).is_scalar());
    }

    #[test]
    fn test_absent_is_not_null() {
        assert_ne!(Value::Absent, Value::Null);
        assert!(Value::Absent.is_absent());
        assert!(!Value::Null.is_absent());
        assert_eq!(Value::default(), Value::Absent);
    }

    #[test]
    fn test_option_maps_none_to_null() {
        let none: Option<i32> = None;
        assert_eq!(Value::from(none), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }

    #[test]
    fn test_non_finite_floats() {
        assert_eq!(Value::from_f64(f64::NAN), None);
        assert_eq!(Value::from_f64(f64::INFINITY), None);
        assert_eq!(Value::from_f64(2.5), Some(Value::from(2.5)));
        assert_eq!(Value::from(f64::NAN), Value::Null);
        assert_eq!(Value::from(f64::NEG_INFINITY), Value::Null);
    }

    #[test]
    fn test_integers_stay_integers() {
        let json = serde_json::to_string(&Value::from(18)).unwrap();
        assert_eq!(json, "18");

        let json = serde_json::to_string(&Value::from(2.5)).unwrap();
        assert_eq!(json, "2.5");
    }

    #[test]
    fn test_flag_values() {
        assert_eq!(Value::from(0).as_flag(), Some(false));
        assert_eq!(Value::from(1).as_flag(), Some(true));
        assert_eq!(Value::from(true).as_flag(), Some(true));
        assert_eq!(Value::from(2).as_flag(), None);
        assert_eq!(Value::from("1").as_flag(), None);
    }

    #[test]
    fn test_serde_json_conversion() {
        let json = json!({"name": "Alice", "tags": ["a", "b"], "age": 25, "extra": null});
        let value = Value::from(json.clone());

        let map = value.as_object().unwrap();
        assert_eq!(map.get("name"), Some(&Value::from("Alice")));
        assert_eq!(map.get("extra"), Some(&Value::Null));

        let back: serde_json::Value = value.into();
        assert_eq!(back, json);
    }

    #[test]
    fn test_deserialize_never_yields_absent() {
        let value: Value = serde_json::from_str("null").unwrap();
        assert_eq!(value, Value::Null);

        let value: Value = serde_json::from_str(r#"[1, "two", false]"#).unwrap();
        assert_eq!(value, Value::from(json!([1, "two", false])));
    }
}
