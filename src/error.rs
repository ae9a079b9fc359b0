//! Error types for Foliochat
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for Foliochat operations
///
/// This enum encompasses all possible errors that can occur while loading
/// configuration, serving the chat proxy, talking to the completion
/// provider, or driving the widget's transport.
#[derive(Error, Debug)]
pub enum FoliochatError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Provider-related errors (API calls, authentication, malformed bodies)
    #[error("Provider error: {0}")]
    Provider(String),

    /// Chat proxy server errors
    #[error("Server error: {0}")]
    Server(String),

    /// Widget transport errors (proxy unreachable or non-success status)
    #[error("Transport error: {0}")]
    Transport(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for Foliochat operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;
