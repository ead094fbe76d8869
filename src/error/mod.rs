// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for cmdkit.
//!
//! Every failure is surfaced directly to the caller. Nothing in the registry
//! or the configuration stores recovers from or retries an error.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for cmdkit operations.
#[derive(Error, Debug)]
pub enum CmdkitError {
    // Dispatch errors
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Errors raised while resolving or invoking a command.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Unregistered command: {key}")]
    UnregisteredCommand { key: String },

    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error("Command '{command}' failed: {message}")]
    Failed { command: String, message: String },
}

/// Errors raised when supplied values do not fit a command's parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("{command}() missing required argument: '{name}'")]
    Missing { command: String, name: String },

    #[error("{command}() got an unexpected argument: '{name}'")]
    Unexpected { command: String, name: String },

    #[error("{command}() takes {max} positional arguments but {given} were given")]
    TooManyPositional {
        command: String,
        max: usize,
        given: usize,
    },

    #[error("{command}() got multiple values for argument '{name}'")]
    MultipleValues { command: String, name: String },

    #[error("{command}() argument '{name}' has the wrong type: {message}")]
    TypeMismatch {
        command: String,
        name: String,
        message: String,
    },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown configuration key: {key}")]
    UnknownKey { key: String },

    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },
}

/// Result type alias for cmdkit operations.
pub type Result<T> = std::result::Result<T, CmdkitError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CmdkitError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
