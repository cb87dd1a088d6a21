//! Check command implementation.
//!
//! The `rumdl-config check` command validates configuration files against
//! the schema registry and prints a report.

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::lint::{
    ConfigValidator, FileReport, HumanFormatter, JsonFormatter, LintFormatter, OutputFormat,
    ParseMode, SarifFormatter, Summary,
};
use crate::schema::SchemaRegistry;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, EXIT_FINDINGS, EXIT_OPERATIONAL};
use super::{document_kind, read_document};

/// The check command implementation.
pub struct CheckCommand<'r> {
    registry: &'r SchemaRegistry,
    args: CheckArgs,
}

impl<'r> CheckCommand<'r> {
    /// Create a new check command.
    pub fn new(registry: &'r SchemaRegistry, args: CheckArgs) -> Self {
        Self { registry, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    /// Format reports using the requested formatter.
    fn format_output(&self, reports: &[FileReport], use_color: bool) -> Result<String> {
        let mut output = Vec::new();

        match self.args.format {
            OutputFormat::Json => JsonFormatter::new().format(reports, &mut output)?,
            OutputFormat::Sarif => SarifFormatter::new("rumdl-config", env!("CARGO_PKG_VERSION"))
                .format(reports, &mut output)?,
            OutputFormat::Human => HumanFormatter::new(use_color).format(reports, &mut output)?,
        }

        Ok(String::from_utf8_lossy(&output).into_owned())
    }
}

impl Command for CheckCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mode = if self.args.line_scan {
            ParseMode::LineScan
        } else {
            ParseMode::Toml
        };

        let mut reports = Vec::new();
        let mut unreadable = 0;

        for path in &self.args.files {
            let content = match read_document(path) {
                Ok(content) => content,
                Err(e) => {
                    ui.error(&e.to_string());
                    unreadable += 1;
                    continue;
                }
            };

            let kind = document_kind(path, self.args.kind);
            tracing::debug!("Checking {} as {:?}", path.display(), kind);

            let result = ConfigValidator::new(self.registry)
                .with_kind(kind)
                .with_mode(mode)
                .validate_toml(&content);
            reports.push(FileReport::new(path.clone(), result));
        }

        let summary = Summary::of(&reports);
        let clean = summary.errors == 0 && summary.warnings == 0;

        if self.args.format == OutputFormat::Human && clean {
            if !reports.is_empty() {
                ui.success(&format!(
                    "No problems found in {} file(s)",
                    summary.files
                ));
            }
        } else {
            let output = self.format_output(&reports, ui.use_color())?;
            ui.report(&output);
        }

        if summary.warnings > 0 && !self.args.strict && summary.errors == 0 {
            ui.show_hint("Warnings do not fail the check; pass --strict to change that");
        }

        if unreadable > 0 {
            return Ok(CommandResult::failure(EXIT_OPERATIONAL));
        }

        let should_fail = summary.errors > 0 || (self.args.strict && summary.warnings > 0);
        if should_fail {
            Ok(CommandResult::failure(EXIT_FINDINGS))
        } else {
            Ok(CommandResult::success())
        }
    }
}
