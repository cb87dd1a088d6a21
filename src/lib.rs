//! rumdl-config - Validation for rumdl configuration files.
//!
//! rumdl-config checks `.rumdl.toml` files and `[tool.rumdl]` tables in
//! `pyproject.toml` against a schema registry of lint rules, suggests
//! corrections for misspelled rule identifiers, and offers quick fixes.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`lint`] - Configuration validation, quick fixes and report output
//! - [`schema`] - Rule schema registry
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use rumdl_config::lint::{quick_fixes, ConfigValidator, ParseMode};
//! use rumdl_config::schema::SchemaRegistry;
//!
//! let registry = SchemaRegistry::builtin().unwrap();
//! let document = "[global]\nrespect_gitignore = maybe\n";
//!
//! let result = ConfigValidator::new(&registry)
//!     .with_mode(ParseMode::LineScan)
//!     .validate_toml(document);
//! assert_eq!(result.errors.len(), 1);
//!
//! let fixes = quick_fixes(document, &result.errors[0]);
//! assert_eq!(fixes.len(), 2);
//! ```

pub mod cli;
pub mod error;
pub mod lint;
pub mod schema;
pub mod ui;

pub use error::{ConfigError, Result};
