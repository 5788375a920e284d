//! Error types for px2-syntax
//!
//! Classification itself never fails. These errors come from building
//! an alternate table, loading configuration, or the CLI's file I/O.

use thiserror::Error;

/// Result type alias for px2-syntax operations
pub type Result<T> = std::result::Result<T, SyntaxError>;

/// Syntax engine error types
#[derive(Error, Debug)]
pub enum SyntaxError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },

    #[error("Invalid value for '{key}': expected {expected}")]
    InvalidValue { key: String, expected: &'static str },

    #[error("Unknown role name: {0}")]
    UnknownRole(String),

    #[error("Unknown color: {0}")]
    UnknownColor(String),

    #[error("Rules cannot target the Unclassified category")]
    UnclassifiedRule,

    #[error("{0}")]
    Message(String),
}
