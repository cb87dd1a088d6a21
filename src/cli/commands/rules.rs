//! Rules command implementation.
//!
//! The `rumdl-config rules` command lists every rule in the schema registry.

use crate::error::Result;
use crate::schema::SchemaRegistry;
use crate::ui::{Theme, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The rules command implementation.
pub struct RulesCommand<'r> {
    registry: &'r SchemaRegistry,
}

impl<'r> RulesCommand<'r> {
    /// Create a new rules command.
    pub fn new(registry: &'r SchemaRegistry) -> Self {
        Self { registry }
    }
}

impl Command for RulesCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let theme = Theme::for_color(ui.use_color());
        let mut out = String::new();

        for (id, schema) in self.registry.iter() {
            let count = schema.properties.len();
            let properties = match count {
                0 => String::new(),
                1 => " (1 property)".to_string(),
                n => format!(" ({} properties)", n),
            };
            out.push_str(&format!(
                "{:<7} {}{}\n",
                theme.key.apply_to(id),
                schema.description,
                theme.dim.apply_to(properties)
            ));
        }

        ui.report(&out);
        ui.message(&format!("{} rule(s)", self.registry.len()));
        Ok(CommandResult::success())
    }
}
