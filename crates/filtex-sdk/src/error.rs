//! SDK error types

use filtex_core::CoreError;
use filtex_parser::{GroupError, ParseError};
use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Expression parser error
    #[error("Parser error: {0}")]
    ParseError(#[from] ParseError),

    /// Group assembler error
    #[error("Group error: {0}")]
    GroupError(#[from] GroupError),

    /// Model error
    #[error("Core error: {0}")]
    CoreError(#[from] CoreError),

    /// Plain-data item that is neither an expression nor a group
    #[error("Invalid parameter item {position}: {source}")]
    InvalidItem {
        position: usize,
        #[source]
        source: CoreError,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// YAML error
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
