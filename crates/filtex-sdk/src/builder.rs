//! Builder for query parameter sets

use crate::error::{Result, SdkError};
use filtex_core::{
    Expression, FilterConfig, Fragment, Group, ParameterItem, ParameterSet, Template, Value,
};
use filtex_parser::{ExpressionParser, GroupParser};

/// Builder for ParameterSet
///
/// # Example
///
/// ```rust
/// use filtex_sdk::{expr, group, ParameterBuilder, ParameterItem};
///
/// let email = expr!("email ew", "@example.com")?;
/// let age = expr!("age gt", 18)?;
/// let active = expr!("status eq", "active")?;
///
/// let params = ParameterBuilder::build([
///     ParameterItem::from(group![email, "or", age]?),
///     ParameterItem::from(active),
/// ]);
///
/// assert_eq!(params.len(), 2);
/// # Ok::<(), filtex_sdk::SdkError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParameterBuilder {
    config: FilterConfig,
}

impl ParameterBuilder {
    /// Create a new builder with strict validation
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FilterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Wrap expressions and groups into a parameter set.
    ///
    /// Bare expressions become single-expression conjunction groups; groups
    /// pass through unchanged. Order is preserved.
    pub fn build<I, T>(items: I) -> ParameterSet
    where
        I: IntoIterator<Item = T>,
        T: Into<ParameterItem>,
    {
        let groups: Vec<Group> = items
            .into_iter()
            .map(|item| item.into().into_group())
            .collect();

        log::debug!("built parameter set with {} groups", groups.len());
        ParameterSet::new(groups)
    }

    /// Build from plain data, telling expressions and groups apart with the
    /// configured validation mode
    pub fn build_values<I, V>(&self, values: I) -> Result<ParameterSet>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mode = self.config.validation;
        let items = values
            .into_iter()
            .enumerate()
            .map(|(position, value)| {
                ParameterItem::from_value(&value.into(), mode)
                    .map_err(|source| SdkError::InvalidItem { position, source })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::build(items))
    }

    /// Parse a single expression
    pub fn expression(&self, text: &str, value: impl Into<Value>) -> Result<Expression> {
        Ok(ExpressionParser::parse_str(text, value)?)
    }

    /// Assemble a group, validating raw interpolations with the configured
    /// mode
    pub fn group(&self, template: Template<Fragment>) -> Result<Group> {
        Ok(GroupParser::with_mode(self.config.validation).assemble(template)?)
    }
}
