//! filtex parser - turns literal text and values into filter expressions
//!
//! This crate provides the two parsers of the filtex pipeline:
//! - `ExpressionParser`: `key [not_]operator` text plus one value
//! - `GroupParser`: expressions joined by `and` / `or`

pub mod error;
pub mod expression_parser;
pub mod group_parser;

// Re-export main parser types
pub use error::{GroupError, ParseError, Result};
pub use expression_parser::ExpressionParser;
pub use group_parser::GroupParser;
