//! Error types for the Nimbus core library.

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types for Nimbus.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration loading or validation error.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// File system I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Layered configuration error from the `config` crate.
    #[error("Config crate error: {0}")]
    ConfigCrate(#[from] config::ConfigError),
}

impl CoreError {
    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_config_error() {
        let err = CoreError::config("site.title cannot be empty");
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("site.title"));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_config_error_keeps_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad bytes");
        let err = CoreError::config_with_source("Failed to parse nimbus.toml", io_err);
        assert!(err.to_string().contains("nimbus.toml"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CoreError = io_err.into();
        assert!(err.to_string().contains("IO error"));
    }
}
