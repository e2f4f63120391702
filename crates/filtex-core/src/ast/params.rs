//! Root parameter container handed to the query-string serializer

use super::expression::Expression;
use super::group::Group;
use crate::config::ValidationMode;
use crate::error::{CoreError, Result};
use crate::types::Value;
use serde::{Deserialize, Serialize};

/// Ordered groups of filters
///
/// Wire form: `{ "groups": [ ... ] }`. The `groups` field is left out when
/// there are no groups.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParameterSet {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    groups: Vec<Group>,
}

impl ParameterSet {
    pub fn new(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn into_groups(self) -> Vec<Group> {
        self.groups
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.groups.iter()
    }

    /// Wire form as a JSON value
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    /// Wire form as a JSON string
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl<'a> IntoIterator for &'a ParameterSet {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Input to the parameter builder: a bare expression or a built group
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterItem {
    Expression(Expression),
    Group(Group),
}

impl ParameterItem {
    /// Normalize into a group; bare expressions become conjunction singletons
    pub fn into_group(self) -> Group {
        match self {
            ParameterItem::Expression(expression) => Group::singleton(expression),
            ParameterItem::Group(group) => group,
        }
    }

    /// Discriminate plain data with the shared predicates.
    ///
    /// Anything that passes [`Expression::is_expression`] is treated as an
    /// expression (and must then hold a valid value). Objects carrying a
    /// `key` or `operator` field report why they are not an expression;
    /// other data must be a group.
    pub fn from_value(value: &Value, mode: ValidationMode) -> Result<Self> {
        if Expression::is_expression(value, mode) || has_expression_fields(value) {
            return Expression::from_value(value, mode).map(ParameterItem::Expression);
        }

        match Group::from_value(value, mode) {
            Ok(group) => Ok(ParameterItem::Group(group)),
            Err(err) => Err(CoreError::NotAnItem(err.to_string())),
        }
    }
}

fn has_expression_fields(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|map| map.contains_key("key") || map.contains_key("operator"))
}

impl From<Expression> for ParameterItem {
    fn from(expression: Expression) -> Self {
        ParameterItem::Expression(expression)
    }
}

impl From<Group> for ParameterItem {
    fn from(group: Group) -> Self {
        ParameterItem::Group(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::group::LogicalGroupOp;
    use crate::ast::operator::Operator;
    use serde_json::json;

    #[test]
    fn test_empty_set_omits_groups() {
        let params = ParameterSet::default();
        assert!(params.is_empty());
        assert_eq!(params.to_json_string().unwrap(), "{}");
    }

    #[test]
    fn test_empty_set_deserializes() {
        let params: ParameterSet = serde_json::from_str("{}").unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn test_item_into_group() {
        let expr = Expression::new("age", Operator::Gt, 18, false).unwrap();
        let item = ParameterItem::from(expr.clone());
        assert_eq!(item.into_group(), Group::singleton(expr.clone()));

        let group = Group::new(LogicalGroupOp::Any, vec![expr]).unwrap();
        assert_eq!(ParameterItem::from(group.clone()).into_group(), group);
    }

    #[test]
    fn test_item_from_value() {
        let strict = ValidationMode::Strict;

        let expr = Value::from(json!({"key": "age", "operator": "gt", "value": 18, "not": 0}));
        assert!(matches!(
            ParameterItem::from_value(&expr, strict),
            Ok(ParameterItem::Expression(_))
        ));

        let group = Value::from(json!({"or": 1, "filters": [
            {"key": "age", "operator": "gt", "value": 18, "not": 0}
        ]}));
        assert!(matches!(
            ParameterItem::from_value(&group, strict),
            Ok(ParameterItem::Group(_))
        ));

        assert!(matches!(
            ParameterItem::from_value(&Value::from("age gt 18"), strict),
            Err(CoreError::NotAnItem(_))
        ));
    }

    #[test]
    fn test_item_from_value_keeps_shape_error() {
        let expr = Value::from(json!({"key": "age", "operator": "bt", "value": 18, "not": 0}));
        assert_eq!(
            ParameterItem::from_value(&expr, ValidationMode::Strict),
            Err(CoreError::RequiresPair { operator: Operator::Between })
        );
    }

    #[test]
    fn test_item_from_value_reports_expression_error() {
        let no_flag = Value::from(json!({"key": "age", "operator": "gt", "value": 18}));
        assert_eq!(
            ParameterItem::from_value(&no_flag, ValidationMode::Strict),
            Err(CoreError::NotAnExpression("missing 'not' flag".to_string()))
        );

        let bad_op = Value::from(json!({"key": "age", "operator": "like", "value": 18, "not": 0}));
        assert_eq!(
            ParameterItem::from_value(&bad_op, ValidationMode::Strict),
            Err(CoreError::UnknownOperator("like".to_string()))
        );
    }
}
