//! Error types for taglog
//!
//! Logging calls themselves never fail: a filtered message is simply not
//! dispatched. The errors here come from the configuration surface (parsing
//! levels, reading and parsing TOML documents, environment overrides).

use thiserror::Error;

/// Main error type for taglog operations
#[derive(Error, Debug)]
pub enum TaglogError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid log level
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    /// I/O errors
    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    /// TOML parsing errors
    #[error("TOML parsing error: {source}")]
    TomlError {
        #[from]
        source: toml::de::Error,
    },
}

/// Result type alias for taglog operations
pub type Result<T> = std::result::Result<T, TaglogError>;

impl TaglogError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a new invalid level error
    pub fn invalid_level<S: Into<String>>(level: S) -> Self {
        Self::InvalidLogLevel(level.into())
    }
}
