//! filtex SDK
//!
//! High-level API for building filter query parameters: parse expressions,
//! assemble them into groups and wrap everything into a `ParameterSet`
//! ready for query-string serialization.
//!
//! ```rust
//! use filtex_sdk::{expr, group, params};
//! use serde_json::json;
//!
//! let adults = group![expr!("email ew", "@example.com")?, "and", expr!("age gt", 18)?]?;
//! let params = params![adults, expr!("name sw", "A")?];
//!
//! assert_eq!(
//!     params.to_json()?,
//!     json!({"groups": [
//!         {"or": 0, "filters": [
//!             {"key": "email", "operator": "ew", "value": "@example.com", "not": 0},
//!             {"key": "age", "operator": "gt", "value": 18, "not": 0}
//!         ]},
//!         {"or": 0, "filters": [
//!             {"key": "name", "operator": "sw", "value": "A", "not": 0}
//!         ]}
//!     ]})
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#[macro_use]
mod macros;

pub mod builder;
pub mod config;
pub mod error;

// Re-export main types
pub use builder::ParameterBuilder;
pub use error::{Result, SdkError};
#[doc(hidden)]
pub use macros::LiteralPiece;

// Re-export commonly used types from dependencies
pub use filtex_core::{
    CoreError, Expression, FilterConfig, Fragment, Group, LogicalGroupOp, Operator, ParameterItem,
    ParameterSet, Template, ValidationMode, Value,
};
pub use filtex_parser::{ExpressionParser, GroupError, GroupParser, ParseError};
