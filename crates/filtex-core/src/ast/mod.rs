//! Filter model definitions
//!
//! This module contains the node definitions for:
//! - Operators and their value shapes
//! - Expressions
//! - Groups
//! - Parameter sets

pub mod expression;
pub mod flag;
pub mod group;
pub mod operator;
pub mod params;

pub use expression::Expression;
pub use group::{Group, LogicalGroupOp};
pub use operator::{Operator, ValueShape};
pub use params::{ParameterItem, ParameterSet};
