//! Domain error types

use thiserror::Error;

/// Error when an invalid display time zone is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid timezone: \"{input}\". Expected 'local', 'utc', or an offset such as +02:00")]
pub struct InvalidTimezoneError {
    pub input: String,
}

/// Error when an invalid overflow policy is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid overflow policy: \"{input}\". Valid policies are: truncate, paginate")]
pub struct InvalidOverflowPolicyError {
    pub input: String,
}

/// Error when a date or time pattern contains an unknown strftime item
#[derive(Debug, Clone, Error)]
#[error("Invalid date/time pattern: \"{input}\". Use strftime items such as %Y-%m-%d or %H:%M")]
pub struct InvalidPatternError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
