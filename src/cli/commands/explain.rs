//! Explain command implementation.
//!
//! The `rumdl-config explain <RULE>` command shows a rule's description and
//! the properties its configuration section accepts.

use crate::cli::args::ExplainArgs;
use crate::error::Result;
use crate::lint::suggest_rule;
use crate::schema::{RuleSchema, SchemaRegistry};
use crate::ui::{Theme, UserInterface};

use super::dispatcher::{Command, CommandResult, EXIT_FINDINGS};

/// The explain command implementation.
pub struct ExplainCommand<'r> {
    registry: &'r SchemaRegistry,
    args: ExplainArgs,
}

impl<'r> ExplainCommand<'r> {
    /// Create a new explain command.
    pub fn new(registry: &'r SchemaRegistry, args: ExplainArgs) -> Self {
        Self { registry, args }
    }

    fn render(&self, id: &str, schema: &RuleSchema, theme: &Theme) -> String {
        let mut out = String::new();
        out.push_str(&theme.format_header(id));
        out.push('\n');
        if !schema.description.is_empty() {
            out.push_str(&schema.description);
            out.push('\n');
        }
        out.push('\n');

        if schema.properties.is_empty() {
            out.push_str("This rule has no configurable properties.\n");
            return out;
        }

        out.push_str(&format!(
            "Configure under [{}] or [tool.{}.{}]:\n",
            id, self.registry.tool, id
        ));
        for (name, property) in &schema.properties {
            out.push_str("  ");
            out.push_str(&theme.format_field(name, &property.summary()));
            if let Some(description) = &property.description {
                out.push_str(&format!(" {}", theme.dim.apply_to(format!("- {}", description))));
            }
            out.push('\n');
        }
        out
    }
}

impl Command for ExplainCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match self.registry.get(&self.args.rule) {
            Some((id, schema)) => {
                let theme = Theme::for_color(ui.use_color());
                ui.report(&self.render(id, schema, &theme));
                Ok(CommandResult::success())
            }
            None => {
                let message = match suggest_rule(self.registry, &self.args.rule) {
                    Some(suggestion) => format!(
                        "Unknown rule '{}'. Did you mean '{}'?",
                        self.args.rule, suggestion
                    ),
                    None => format!("Unknown rule '{}'", self.args.rule),
                };
                ui.error(&message);
                ui.show_hint("Run 'rumdl-config rules' to list known rules");
                Ok(CommandResult::failure(EXIT_FINDINGS))
            }
        }
    }
}
