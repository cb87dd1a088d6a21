//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::lint::{DocumentKind, OutputFormat};

/// rumdl-config - Validate rumdl configuration files.
#[derive(Debug, Parser)]
#[command(name = "rumdl-config")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Rule schema registry JSON (defaults to the built-in registry)
    #[arg(long, global = true, env = "RUMDL_CONFIG_REGISTRY", value_name = "PATH")]
    pub registry: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only show reports and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate configuration files
    Check(CheckArgs),

    /// Apply unambiguous quick fixes to configuration files
    Fix(FixArgs),

    /// Show a rule's configurable properties
    Explain(ExplainArgs),

    /// List rules known to the schema registry
    Rules,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Configuration files to validate
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Output format: human, json, sarif
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,

    /// Document kind: standalone or project (detected from the file name by default)
    #[arg(long)]
    pub kind: Option<DocumentKind>,

    /// Validate with the line scanner instead of the full TOML parser
    #[arg(long)]
    pub line_scan: bool,
}

/// Arguments for the `fix` command.
#[derive(Debug, Clone, clap::Args)]
pub struct FixArgs {
    /// Configuration files to fix
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Show fixes without writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Document kind: standalone or project (detected from the file name by default)
    #[arg(long)]
    pub kind: Option<DocumentKind>,
}

/// Arguments for the `explain` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ExplainArgs {
    /// Rule identifier, e.g. MD013
    pub rule: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
