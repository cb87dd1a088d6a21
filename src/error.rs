//! Error types for rumdl-config operations.
//!
//! This module defines [`ConfigError`], the error type for operational
//! failures, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Problems found *inside* a configuration document are never errors here;
//!   they are reported as [`ValidationError`](crate::lint::ValidationError)
//!   entries in a validation result
//! - `ConfigError` covers failures around the validator: reading documents,
//!   loading a schema registry, writing fixed files
//! - Use `anyhow::Error` (via `ConfigError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for rumdl-config operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration document not found at the given location.
    #[error("Configuration file not found: {path}")]
    DocumentNotFound { path: PathBuf },

    /// A schema registry file could not be read or parsed.
    #[error("Failed to load schema registry from {path}: {message}")]
    RegistryLoad { path: PathBuf, message: String },

    /// The embedded schema registry is malformed.
    #[error("Invalid built-in schema registry: {message}")]
    InvalidRegistry { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for rumdl-config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
