//! JSON output formatter.
//!
//! Formats validation reports as machine-readable JSON for tooling integration.

use super::{FileReport, LintFormatter, Summary};
use crate::lint::ErrorKind;
use serde::Serialize;
use std::io::Write;

/// Formats validation reports as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    files: Vec<JsonFile>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonFile {
    path: String,
    valid: bool,
    diagnostics: Vec<JsonDiagnostic>,
}

#[derive(Serialize)]
struct JsonDiagnostic {
    code: &'static str,
    severity: String,
    message: String,
    line: usize,
    column: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<String>,
}

#[derive(Serialize)]
struct JsonSummary {
    files: usize,
    total: usize,
    errors: usize,
    warnings: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LintFormatter for JsonFormatter {
    fn format<W: Write>(&self, reports: &[FileReport], writer: &mut W) -> std::io::Result<()> {
        let files = reports
            .iter()
            .map(|report| JsonFile {
                path: report.path.display().to_string(),
                valid: report.result.valid,
                diagnostics: report
                    .result
                    .errors
                    .iter()
                    .map(|e| JsonDiagnostic {
                        code: e.code.as_str(),
                        severity: e.severity.to_string(),
                        message: e.message.clone(),
                        line: e.line,
                        column: e.column,
                        suggestion: match &e.kind {
                            ErrorKind::UnknownRuleSuggestion { correct, .. } => {
                                Some(correct.clone())
                            }
                            _ => None,
                        },
                    })
                    .collect(),
            })
            .collect();

        let totals = Summary::of(reports);
        let output = JsonOutput {
            files,
            summary: JsonSummary {
                files: totals.files,
                total: totals.errors + totals.warnings,
                errors: totals.errors,
                warnings: totals.warnings,
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::{ConfigValidationResult, DiagnosticCode, ValidationError};

    fn render(reports: &[FileReport]) -> serde_json::Value {
        let mut output = Vec::new();
        JsonFormatter::new().format(reports, &mut output).unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn produces_valid_json() {
        let parsed = render(&[FileReport::new(
            ".rumdl.toml",
            ConfigValidationResult::from_errors(vec![ValidationError::error(
                DiagnosticCode::InvalidValue,
                4,
                "'enable' must be an array",
            )
            .with_column(9)]),
        )]);

        let diag = &parsed["files"][0]["diagnostics"][0];
        assert_eq!(parsed["files"][0]["path"], ".rumdl.toml");
        assert_eq!(parsed["files"][0]["valid"], false);
        assert_eq!(diag["code"], "invalid-value");
        assert_eq!(diag["severity"], "error");
        assert_eq!(diag["line"], 4);
        assert_eq!(diag["column"], 9);
        assert!(diag.get("suggestion").is_none());
    }

    #[test]
    fn includes_suggestion() {
        let parsed = render(&[FileReport::new(
            "pyproject.toml",
            ConfigValidationResult::from_errors(vec![ValidationError::error(
                DiagnosticCode::UnknownRule,
                0,
                "Unknown rule 'MD0013'",
            )
            .with_kind(ErrorKind::UnknownRuleSuggestion {
                wrong: "MD0013".into(),
                correct: "MD013".into(),
                alternatives: Vec::new(),
            })]),
        )]);

        assert_eq!(parsed["files"][0]["diagnostics"][0]["suggestion"], "MD013");
    }

    #[test]
    fn includes_summary() {
        let parsed = render(&[
            FileReport::new(
                "a.toml",
                ConfigValidationResult::from_errors(vec![
                    ValidationError::error(DiagnosticCode::InvalidValue, 1, "e"),
                    ValidationError::warning(DiagnosticCode::UnknownKey, 2, "w"),
                ]),
            ),
            FileReport::new("b.toml", ConfigValidationResult::ok()),
        ]);

        assert_eq!(parsed["summary"]["files"], 2);
        assert_eq!(parsed["summary"]["total"], 2);
        assert_eq!(parsed["summary"]["errors"], 1);
        assert_eq!(parsed["summary"]["warnings"], 1);
        assert_eq!(parsed["files"][1]["valid"], true);
    }
}
