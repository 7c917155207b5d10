//! Configuration error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Request timeout must be between 1 and 300 seconds, got {0}")]
    InvalidTimeout(u64),

    #[error("Model name must not be empty: {0}")]
    EmptyModel(&'static str),

    #[error("Base URL must start with http:// or https://: {0}")]
    InvalidBaseUrl(String),

    #[error("Log level must not be empty")]
    EmptyLogLevel,

    #[error("Content library not found: {0}")]
    LibraryNotFound(PathBuf),
}
