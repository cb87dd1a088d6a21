//! Human-readable output formatter.
//!
//! Formats validation reports for terminal display with optional color support.

use super::{fix_hint, FileReport, LintFormatter, Summary};
use crate::lint::Severity;
use crate::ui::Theme;
use std::io::Write;

/// Formats validation reports for human consumption.
pub struct HumanFormatter {
    theme: Theme,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        let theme = if use_color {
            Theme::new()
        } else {
            Theme::plain()
        };
        Self { theme }
    }

    fn severity_label(&self, severity: Severity) -> String {
        match severity {
            Severity::Warning => self.theme.warning.apply_to("warning").to_string(),
            Severity::Error => self.theme.error.apply_to("error").to_string(),
        }
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(&self, reports: &[FileReport], writer: &mut W) -> std::io::Result<()> {
        for report in reports {
            for error in &report.result.errors {
                // Header line: error[code]: message
                writeln!(
                    writer,
                    "{}[{}]: {}",
                    self.severity_label(error.severity),
                    error.code,
                    self.theme.highlight.apply_to(&error.message)
                )?;

                // Locations are 1-indexed for editors and terminals.
                writeln!(
                    writer,
                    "  {} {}:{}:{}",
                    self.theme.dim.apply_to("-->"),
                    report.path.display(),
                    error.line + 1,
                    error.column + 1
                )?;

                if let Some(hint) = fix_hint(error) {
                    writeln!(writer, "   = {}: {}", self.theme.hint.apply_to("help"), hint)?;
                }

                writeln!(writer)?;
            }
        }

        let summary = Summary::of(reports);
        if summary.errors > 0 || summary.warnings > 0 {
            writeln!(
                writer,
                "Found {} error(s) and {} warning(s) in {} file(s)",
                summary.errors, summary.warnings, summary.files
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::{ConfigValidationResult, DiagnosticCode, ErrorKind, ValidationError};

    fn render(reports: &[FileReport]) -> String {
        let mut output = Vec::new();
        HumanFormatter::new(false)
            .format(reports, &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn report(errors: Vec<ValidationError>) -> FileReport {
        FileReport::new(".rumdl.toml", ConfigValidationResult::from_errors(errors))
    }

    #[test]
    fn formats_error_finding() {
        let output = render(&[report(vec![ValidationError::error(
            DiagnosticCode::InvalidValue,
            9,
            "'line_length' must be a number",
        )
        .with_column(14)])]);

        assert!(output.contains("error[invalid-value]"));
        assert!(output.contains("'line_length' must be a number"));
        assert!(output.contains(".rumdl.toml:10:15"));
    }

    #[test]
    fn formats_warning_finding() {
        let output = render(&[report(vec![ValidationError::warning(
            DiagnosticCode::UnknownSection,
            0,
            "Unknown section '[bogus]'",
        )])]);

        assert!(output.contains("warning[unknown-section]"));
    }

    #[test]
    fn formats_fix_hint() {
        let output = render(&[report(vec![ValidationError::error(
            DiagnosticCode::UnknownRule,
            0,
            "Unknown rule 'MD999'",
        )
        .with_kind(ErrorKind::UnknownRuleSuggestion {
            wrong: "MD999".into(),
            correct: "MD099".into(),
            alternatives: Vec::new(),
        })])]);

        assert!(output.contains("= help: replace 'MD999' with 'MD099'"));
    }

    #[test]
    fn formats_summary_line() {
        let output = render(&[
            report(vec![
                ValidationError::error(DiagnosticCode::InvalidValue, 1, "err"),
                ValidationError::warning(DiagnosticCode::UnknownKey, 2, "warn"),
            ]),
            report(vec![ValidationError::warning(
                DiagnosticCode::UnknownProperty,
                3,
                "warn2",
            )]),
        ]);

        assert!(output.contains("1 error(s)"));
        assert!(output.contains("2 warning(s)"));
        assert!(output.contains("2 file(s)"));
    }

    #[test]
    fn no_summary_when_no_issues() {
        let output = render(&[report(vec![])]);
        assert!(!output.contains("Found"));
    }
}
