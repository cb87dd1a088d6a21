//! Configuration validation.
//!
//! This module checks rumdl configuration documents against a
//! [`SchemaRegistry`](crate::schema::SchemaRegistry).
//!
//! # Overview
//!
//! The validation layer consists of:
//!
//! - **Validator** - Syntax gate plus section-scoped semantic walk ([`ConfigValidator`])
//! - **Diagnostics** - Positioned findings with severity and fix kind ([`ValidationError`])
//! - **Suggestions** - Edit-distance typo correction for rule ids ([`suggest_rule`])
//! - **Fixes** - Quick fixes and their application ([`quick_fixes`], [`FixEngine`])
//! - **Output** - Human, JSON and SARIF report formatters ([`LintFormatter`])
//!
//! # Example
//!
//! ```
//! use rumdl_config::lint::{ConfigValidator, Severity};
//! use rumdl_config::schema::SchemaRegistry;
//!
//! let registry = SchemaRegistry::builtin().unwrap();
//! let validator = ConfigValidator::new(&registry);
//!
//! let result = validator.validate_toml("[bogus]\nx = 1\n");
//! assert!(!result.valid);
//! assert_eq!(result.errors[0].severity, Severity::Warning);
//!
//! assert!(validator.validate_toml("").valid);
//! ```

pub mod diagnostic;
pub mod fix;
pub mod output;
pub mod scan;
pub mod section;
pub mod span;
pub mod suggest;
pub mod validator;
pub mod value;

pub use diagnostic::{
    ConfigValidationResult, DiagnosticCode, ErrorKind, Severity, ValidationError,
};
pub use fix::{auto_fixes, quick_fixes, CodeAction, FixEngine, FixResult};
pub use output::{
    FileReport, HumanFormatter, JsonFormatter, LintFormatter, OutputFormat, SarifFormatter,
    Summary,
};
pub use section::{DocumentKind, Section};
pub use span::TextRange;
pub use suggest::{
    levenshtein_distance, rule_suggestions, suggest_rule, MAX_SUGGESTION_DISTANCE,
};
pub use validator::{ConfigValidator, ParseMode};
pub use value::ConfigValue;
