//! filtex core - types and wire encoding for filter expressions
//!
//! This crate provides the data model shared by the filtex crates:
//! - Value type for expression payloads
//! - Operators, expressions, groups and parameter sets
//! - Templates (literal text interleaved with values)
//! - Validation config and error types

pub mod ast;
pub mod config;
pub mod error;
pub mod template;
pub mod types;

// Re-export commonly used types
pub use ast::{Expression, Group, LogicalGroupOp, Operator, ParameterItem, ParameterSet};
pub use config::{FilterConfig, ValidationMode};
pub use error::CoreError;
pub use template::{Fragment, Template};
pub use types::Value;
