//! Fix command implementation.
//!
//! The `rumdl-config fix` command applies every quick fix that has exactly
//! one candidate (typo'd rule ids), then re-validates the result.

use crate::cli::args::FixArgs;
use crate::error::Result;
use crate::lint::{auto_fixes, ConfigValidator, FixEngine};
use crate::schema::SchemaRegistry;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, EXIT_FINDINGS, EXIT_OPERATIONAL};
use super::{document_kind, read_document};

/// The fix command implementation.
pub struct FixCommand<'r> {
    registry: &'r SchemaRegistry,
    args: FixArgs,
}

impl<'r> FixCommand<'r> {
    /// Create a new fix command.
    pub fn new(registry: &'r SchemaRegistry, args: FixArgs) -> Self {
        Self { registry, args }
    }
}

impl Command for FixCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let engine = FixEngine::new();
        let mut unreadable = 0;
        let mut remaining_errors = 0;
        let mut total_applied = 0;

        for path in &self.args.files {
            let content = match read_document(path) {
                Ok(content) => content,
                Err(e) => {
                    ui.error(&e.to_string());
                    unreadable += 1;
                    continue;
                }
            };

            let validator =
                ConfigValidator::new(self.registry).with_kind(document_kind(path, self.args.kind));
            let result = validator.validate_toml(&content);
            let fixes = auto_fixes(&content, &result);

            if self.args.dry_run {
                for line in engine.preview(path, &fixes) {
                    ui.message(&line);
                }
                remaining_errors += result.error_count();
                continue;
            }

            let applied = if fixes.is_empty() {
                0
            } else {
                engine.apply_to_file(path, &fixes)?
            };
            total_applied += applied;

            let after = if applied > 0 {
                validator.validate_toml(&read_document(path)?)
            } else {
                result
            };
            remaining_errors += after.error_count();

            if applied > 0 {
                ui.success(&format!("{}: applied {} fix(es)", path.display(), applied));
            }
            if !after.errors.is_empty() {
                ui.warning(&format!(
                    "{}: {} error(s) and {} warning(s) need manual attention",
                    path.display(),
                    after.error_count(),
                    after.warning_count()
                ));
            }
        }

        if !self.args.dry_run && total_applied == 0 && unreadable == 0 {
            ui.message("No automatic fixes available");
        }

        if unreadable > 0 {
            Ok(CommandResult::failure(EXIT_OPERATIONAL))
        } else if remaining_errors > 0 {
            Ok(CommandResult::failure(EXIT_FINDINGS))
        } else {
            Ok(CommandResult::success())
        }
    }
}
