//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::Path;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::schema::SchemaRegistry;
use crate::ui::UserInterface;

/// Exit code when every document is clean.
pub const EXIT_OK: i32 = 0;
/// Exit code when findings fail the run.
pub const EXIT_FINDINGS: i32 = 1;
/// Exit code when a document or registry could not be processed.
pub const EXIT_OPERATIONAL: i32 = 2;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: EXIT_OK,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    registry: SchemaRegistry,
}

impl CommandDispatcher {
    /// Create a dispatcher validating against `registry`.
    pub fn new(registry: SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Create a dispatcher for a registry file, or the built-in registry.
    pub fn load(registry_path: Option<&Path>) -> Result<Self> {
        let registry = match registry_path {
            Some(path) => SchemaRegistry::from_path(path)?,
            None => SchemaRegistry::builtin()?,
        };
        tracing::debug!(
            "Using schema registry for {} {} ({} rules)",
            registry.tool,
            registry.version.as_deref().unwrap_or("(unversioned)"),
            registry.len()
        );
        Ok(Self::new(registry))
    }

    /// Get the schema registry.
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Check(args) => {
                let cmd = super::check::CheckCommand::new(&self.registry, args.clone());
                cmd.execute(ui)
            }
            Commands::Fix(args) => {
                let cmd = super::fix::FixCommand::new(&self.registry, args.clone());
                cmd.execute(ui)
            }
            Commands::Explain(args) => {
                let cmd = super::explain::ExplainCommand::new(&self.registry, args.clone());
                cmd.execute(ui)
            }
            Commands::Rules => {
                let cmd = super::rules::RulesCommand::new(&self.registry);
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}
