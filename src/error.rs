//! Error types for the instrumented cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the instrumented cache.
///
/// A missing key is not an error: reads return `Ok(None)` instead.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The store could not be reached while opening the connection
    #[error("Connection error: {0}")]
    Connection(String),

    /// Stored bytes could not be interpreted by the requested decoder
    #[error("Decode error: {0}")]
    Decode(String),

    /// A command against the store failed after the connection was open
    #[error("Store error: {0}")]
    Store(String),

    /// Call arguments could not be serialized for the history log
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration value
    #[error("Config error: {0}")]
    Config(String),
}

impl CacheError {
    /// Builds a `Store` error naming the failed command.
    pub fn store(command: &str, reason: impl std::fmt::Display) -> Self {
        CacheError::Store(format!("{} failed: {}", command, reason))
    }
}

// == Result Type Alias ==
/// Convenience Result type for the instrumented cache.
pub type Result<T> = std::result::Result<T, CacheError>;
