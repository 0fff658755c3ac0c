//! # Shell Error Type
//!
//! Everything that can stop the shell, plus configuration failures.
//!
//! ## Error Flow
//! ```text
//! ConfigError ──┐
//! CoreError ────┼──► ShellError ──► main() ──► stderr, exit code 1
//! io::Error ────┘
//! ```
//!
//! Recoverable core outcomes (unknown order id, rejected transition) are
//! printed by the shell and never reach this type.

use std::path::PathBuf;

use delivo_core::{CoreError, ValidationError};
use thiserror::Error;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Environment variable holds something we cannot use.
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}

/// Top-level shell error.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to render receipt: {0}")]
    Json(#[from] serde_json::Error),

    /// Bad command line.
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Convenience alias for shell results.
pub type ShellResult<T> = Result<T, ShellError>;
