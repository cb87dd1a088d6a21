//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which loads the schema
//! registry once and routes CLI subcommands to their implementations.

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod explain;
pub mod fix;
pub mod rules;

pub use dispatcher::{
    Command, CommandDispatcher, CommandResult, EXIT_FINDINGS, EXIT_OK, EXIT_OPERATIONAL,
};

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::error::{ConfigError, Result};
use crate::lint::DocumentKind;

/// Read a configuration document.
pub(crate) fn read_document(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ConfigError::DocumentNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(content)
}

/// The document kind to validate `path` as: the override if given, else
/// derived from the file name.
pub(crate) fn document_kind(path: &Path, overridden: Option<DocumentKind>) -> DocumentKind {
    overridden.unwrap_or_else(|| DocumentKind::from_path(path))
}
