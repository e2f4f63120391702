//! Payload types for filtex expressions

pub mod value;

pub use value::Value;
