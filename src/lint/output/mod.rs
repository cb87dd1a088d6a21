//! Validation report formatters.
//!
//! This module provides formatters for writing validation results in
//! different formats (human-readable, JSON, SARIF).

pub mod human;
pub mod json;
pub mod sarif;

use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use super::diagnostic::{ConfigValidationResult, ErrorKind, ValidationError};

/// Output format for validation reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
    Sarif,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            "sarif" => Ok(Self::Sarif),
            _ => Err(format!("unknown output format: {}", s)),
        }
    }
}

/// Validation result for one document.
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    /// Path of the validated document, as given.
    pub path: PathBuf,
    /// Findings for the document.
    pub result: ConfigValidationResult,
}

impl FileReport {
    /// Create a report.
    pub fn new(path: impl Into<PathBuf>, result: ConfigValidationResult) -> Self {
        Self {
            path: path.into(),
            result,
        }
    }
}

/// Trait for formatting validation reports.
pub trait LintFormatter {
    /// Format reports to the given writer.
    fn format<W: Write>(&self, reports: &[FileReport], writer: &mut W) -> std::io::Result<()>;
}

/// Totals across a set of reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub files: usize,
    pub errors: usize,
    pub warnings: usize,
}

impl Summary {
    /// Count findings across reports.
    pub fn of(reports: &[FileReport]) -> Self {
        reports.iter().fold(Self::default(), |acc, report| Self {
            files: acc.files + 1,
            errors: acc.errors + report.result.error_count(),
            warnings: acc.warnings + report.result.warning_count(),
        })
    }
}

/// One-line hint describing how a finding can be fixed, if it can.
pub(crate) fn fix_hint(error: &ValidationError) -> Option<String> {
    match &error.kind {
        ErrorKind::UnknownRuleSuggestion {
            wrong,
            correct,
            alternatives,
        } => {
            let mut candidates = vec![format!("'{}'", correct)];
            candidates.extend(alternatives.iter().map(|a| format!("'{}'", a)));
            Some(format!("replace '{}' with {}", wrong, candidates.join(" or ")))
        }
        ErrorKind::BooleanExpected => Some("set the value to true or false".to_string()),
        ErrorKind::Generic => None,
    }
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
pub use sarif::SarifFormatter;
