//! Error types for the life crate.

use thiserror::Error;

/// Configuration loading error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for [`crate::LifeConfig`].
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Values parsed but make no sense (zero-sized viewport etc).
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Pattern lookup and parsing error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("unknown pattern: {0}")]
    Unknown(String),

    #[error("unexpected {ch:?} at line {line}, column {column}")]
    BadChar { line: usize, column: usize, ch: char },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
