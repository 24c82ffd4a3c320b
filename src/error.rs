//! Error types for mcpctl
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for mcpctl operations
///
/// This enum encompasses all possible errors that can occur while reading,
/// mutating, and writing the managed config file, loading manifests, and
/// resolving platform paths.
#[derive(Error, Debug)]
pub enum McpctlError {
    /// Config file content is not valid JSON, or a JSON object was expected
    /// where something else was found
    #[error("Parse error: {0}")]
    Parse(String),

    /// CLI or manifest input errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Platform config directory cannot be resolved
    #[error("Path resolution error: {0}")]
    Path(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for mcpctl operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;
